use bitflags::bitflags;

/// Type tag of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    // Blocks
    Document,
    BlockQuote,
    List,
    Item,
    Paragraph,
    HorizontalRule,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableCell,

    // Inlines
    Text,
    Emph,
    Strong,
    Del,
    Link,
    Hardbreak,
    Entity,
}

impl NodeType {
    /// Type-pair compatibility rule consulted by the tip tracker.
    pub fn can_contain(self, child: NodeType) -> bool {
        match self {
            NodeType::List => child == NodeType::Item,
            NodeType::Document | NodeType::BlockQuote | NodeType::Item => {
                child.is_block() && child != NodeType::Item && !child.is_table_part()
            }
            NodeType::Table => matches!(child, NodeType::TableHead | NodeType::TableBody),
            NodeType::TableHead | NodeType::TableBody => child == NodeType::TableRow,
            NodeType::TableRow => child == NodeType::TableCell,
            _ => false,
        }
    }

    pub fn is_block(self) -> bool {
        matches!(
            self,
            NodeType::Document
                | NodeType::BlockQuote
                | NodeType::List
                | NodeType::Item
                | NodeType::Paragraph
                | NodeType::HorizontalRule
                | NodeType::Table
                | NodeType::TableHead
                | NodeType::TableBody
                | NodeType::TableRow
                | NodeType::TableCell
        )
    }

    fn is_table_part(self) -> bool {
        matches!(
            self,
            NodeType::TableHead | NodeType::TableBody | NodeType::TableRow | NodeType::TableCell
        )
    }

    /// Containers are visited twice by a walk (entering and leaving), all
    /// other nodes once.
    pub fn is_container(self) -> bool {
        !matches!(
            self,
            NodeType::HorizontalRule | NodeType::Text | NodeType::Hardbreak | NodeType::Entity
        )
    }

    /// Leaf blocks whose raw content is handed to the inline engine.
    pub fn takes_inline(self) -> bool {
        matches!(self, NodeType::Paragraph | NodeType::TableCell)
    }
}

bitflags! {
    /// List and list item flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ListFlags: u32 {
        const ORDERED = 1 << 0;
        const DEFINITION = 1 << 1;
        const TERM = 1 << 2;

        const CONTAINS_BLOCK = 1 << 3;
        const BEGINNING_OF_LIST = 1 << 4;
        const END_OF_LIST = 1 << 5;
    }
}

bitflags! {
    /// Column alignment of a table cell. Left and right are independent bits;
    /// both set means centered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellAlign: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const CENTER = Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

impl CellAlign {
    /// The HTML `align` keyword, if any.
    pub fn keyword(self) -> Option<&'static str> {
        if self == CellAlign::CENTER {
            Some("center")
        } else if self == CellAlign::LEFT {
            Some("left")
        } else if self == CellAlign::RIGHT {
            Some("right")
        } else {
            None
        }
    }
}

/// Payload of `List` and `Item` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListData {
    pub flags: ListFlags,
    /// Tight lists render without paragraph spacing.
    pub tight: bool,
    pub bullet_char: u8,
    pub delimiter: u8,
}

impl Default for ListData {
    fn default() -> Self {
        Self {
            flags: ListFlags::empty(),
            tight: false,
            bullet_char: b'*',
            delimiter: b'.',
        }
    }
}

/// Payload of `TableCell` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellData {
    pub is_header: bool,
    pub align: CellAlign,
}

/// Payload of `Link` nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkData {
    pub destination: Vec<u8>,
    pub title: Vec<u8>,
}
