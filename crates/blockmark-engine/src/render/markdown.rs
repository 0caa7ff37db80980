//! Canonical markdown output.
//!
//! Every block container collects the rendered text of its children in its
//! own buffer. When the walk leaves the container the buffer is joined,
//! prefixed (`> ` for quotes, item markers and a four-space continuation
//! indent for list items) and handed up to the parent as a single block.
//!
//! Reading the output back yields an equivalent block structure: blocks are
//! separated by blank lines except inside tight lists, and text that would
//! otherwise be taken for markup is backslash-escaped.

use std::io::{self, Write};

use crate::parsing::{
    NodeId, NodeType, Tree, WalkStatus,
    tree::{CellAlign, ListFlags},
};

use super::Renderer;

#[derive(Debug, Default)]
struct Frame {
    blocks: Vec<Vec<u8>>,
    inline: Vec<u8>,
}

#[derive(Debug, Default)]
struct TableBuffer {
    aligns: Vec<CellAlign>,
    rows: Vec<Vec<Vec<u8>>>,
    row: Vec<Vec<u8>>,
}

/// Renders a tree back to markdown.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    frames: Vec<Frame>,
    table: Option<TableBuffer>,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_block(&mut self, block: Vec<u8>) {
        if let Some(frame) = self.frames.last_mut() {
            frame.blocks.push(block);
        }
    }

    fn inline_buf(&mut self) -> Option<&mut Vec<u8>> {
        self.frames.last_mut().map(|frame| &mut frame.inline)
    }

    fn write_inline(&mut self, bytes: &[u8]) {
        if let Some(buf) = self.inline_buf() {
            buf.extend_from_slice(bytes);
        }
    }

    fn pop_blocks(&mut self, separator: &[u8]) -> Vec<u8> {
        let frame = self.frames.pop().unwrap_or_default();
        frame.blocks.join(separator)
    }

    fn leave_item(&mut self, tree: &Tree, id: NodeId) {
        let list = tree[id].parent().map(|p| &tree[p].list);
        let tight = list.is_some_and(|l| l.tight);
        let separator: &[u8] = if tight { b"\n" } else { b"\n\n" };
        let body = self.pop_blocks(separator);

        let flags = tree[id].list.flags;
        let marker = if flags.contains(ListFlags::TERM) {
            Vec::new()
        } else if flags.contains(ListFlags::DEFINITION) {
            b": ".to_vec()
        } else if flags.contains(ListFlags::ORDERED) {
            let number = 1 + std::iter::successors(tree[id].prev(), |&p| tree[p].prev()).count();
            format!("{number}. ").into_bytes()
        } else {
            vec![tree[id].list.bullet_char, b' ']
        };
        let indent: &[u8] = if marker.is_empty() { b"" } else { b"    " };

        self.push_block(prefix_lines(&body, &marker, indent));
    }

    fn leave_table(&mut self) {
        let Some(table) = self.table.take() else {
            return;
        };
        let mut lines = Vec::new();
        for (i, row) in table.rows.iter().enumerate() {
            lines.push(table_line(row));
            if i == 0 {
                let underline: Vec<Vec<u8>> = table
                    .aligns
                    .iter()
                    .map(|&align| underline(align).to_vec())
                    .collect();
                lines.push(table_line(&underline));
            }
        }
        self.push_block(lines.join(&b'\n'));
    }

    fn leave_cell(&mut self, tree: &Tree, id: NodeId) {
        let frame = self.frames.pop().unwrap_or_default();
        let Some(table) = self.table.as_mut() else {
            return;
        };
        let cell = &tree[id].cell;
        if cell.is_header {
            table.aligns.push(cell.align);
        }
        table.row.push(frame.inline);
    }

    fn text(&mut self, text: &[u8]) {
        let in_table = self.table.is_some();
        if let Some(buf) = self.inline_buf() {
            escape_text(buf, text, in_table);
        }
    }

    /// `[text](destination "title")`, or the bare URL for an autolink.
    fn link(&mut self, tree: &Tree, id: NodeId, entering: bool) -> WalkStatus {
        let link = &tree[id].link;
        if entering {
            if is_autolink(tree, id) {
                self.write_inline(&link.destination);
                return WalkStatus::SkipChildren;
            }
            self.write_inline(b"[");
            return WalkStatus::GoToNext;
        }

        let mut tail = b"](".to_vec();
        tail.extend_from_slice(&link.destination);
        if !link.title.is_empty() {
            tail.extend_from_slice(b" \"");
            tail.extend_from_slice(&link.title);
            tail.push(b'"');
        }
        tail.push(b')');
        self.write_inline(&tail);
        WalkStatus::GoToNext
    }
}

impl Renderer for MarkdownRenderer {
    fn render_header(&mut self, _w: &mut dyn Write, _tree: &Tree) -> io::Result<()> {
        self.frames.clear();
        self.table = None;
        Ok(())
    }

    fn render_node(
        &mut self,
        w: &mut dyn Write,
        tree: &Tree,
        id: NodeId,
        entering: bool,
    ) -> io::Result<WalkStatus> {
        let node = &tree[id];
        match node.node_type {
            NodeType::Document
            | NodeType::BlockQuote
            | NodeType::List
            | NodeType::Item
            | NodeType::Paragraph
            | NodeType::TableCell
                if entering =>
            {
                self.frames.push(Frame::default());
            }
            NodeType::Document => {
                let body = self.pop_blocks(b"\n\n");
                if !body.is_empty() {
                    w.write_all(&body)?;
                    w.write_all(b"\n")?;
                }
            }
            NodeType::BlockQuote => {
                let body = self.pop_blocks(b"\n\n");
                self.push_block(prefix_lines(&body, b"> ", b"> "));
            }
            NodeType::List => {
                let separator: &[u8] = if node.list.tight { b"\n" } else { b"\n\n" };
                let body = self.pop_blocks(separator);
                self.push_block(body);
            }
            NodeType::Item => self.leave_item(tree, id),
            NodeType::Paragraph => {
                let frame = self.frames.pop().unwrap_or_default();
                self.push_block(frame.inline);
            }
            NodeType::TableCell => self.leave_cell(tree, id),
            NodeType::HorizontalRule => self.push_block(b"---".to_vec()),
            NodeType::Table => {
                if entering {
                    self.table = Some(TableBuffer::default());
                } else {
                    self.leave_table();
                }
            }
            NodeType::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    if entering {
                        table.row.clear();
                    } else {
                        let row = std::mem::take(&mut table.row);
                        table.rows.push(row);
                    }
                }
            }
            NodeType::TableHead | NodeType::TableBody => {}
            NodeType::Text => self.text(&node.literal),
            NodeType::Emph => self.write_inline(b"*"),
            NodeType::Strong => self.write_inline(b"**"),
            NodeType::Del => self.write_inline(b"~~"),
            NodeType::Link => return Ok(self.link(tree, id, entering)),
            NodeType::Hardbreak => self.write_inline(b"  \n"),
            NodeType::Entity => self.write_inline(&node.literal),
        }
        Ok(WalkStatus::GoToNext)
    }

    fn render_footer(&mut self, _w: &mut dyn Write, _tree: &Tree) -> io::Result<()> {
        Ok(())
    }
}

/// Prefixes the first line with `first` and every later non-empty line
/// with `rest`. Empty lines get the trimmed `rest`.
fn prefix_lines(body: &[u8], first: &[u8], rest: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + first.len());
    let blank_prefix = rest.trim_ascii_end();
    for (i, line) in body.split(|&b| b == b'\n').enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        if i == 0 {
            out.extend_from_slice(first);
        } else if line.is_empty() {
            out.extend_from_slice(blank_prefix);
        } else {
            out.extend_from_slice(rest);
        }
        out.extend_from_slice(line);
    }
    out
}

fn escape_text(out: &mut Vec<u8>, text: &[u8], in_table: bool) {
    for &b in text {
        let line_start = out.last().is_none_or(|&c| c == b'\n');
        let special = matches!(b, b'\\' | b'*' | b'_' | b'[' | b']' | b'~' | b'&')
            || (in_table && b == b'|')
            || (line_start && matches!(b, b'>' | b'-' | b'+' | b':'));
        if special {
            out.push(b'\\');
        }
        out.push(b);
    }
}

fn underline(align: CellAlign) -> &'static [u8] {
    if align == CellAlign::CENTER {
        b":---:"
    } else if align == CellAlign::LEFT {
        b":---"
    } else if align == CellAlign::RIGHT {
        b"---:"
    } else {
        b"---"
    }
}

fn table_line(cells: &[Vec<u8>]) -> Vec<u8> {
    let mut line = b"|".to_vec();
    for cell in cells {
        line.push(b' ');
        line.extend_from_slice(cell);
        line.extend_from_slice(b" |");
    }
    line
}

/// A link with no title whose only child is its own destination as text.
fn is_autolink(tree: &Tree, id: NodeId) -> bool {
    let node = &tree[id];
    if !node.link.title.is_empty() {
        return false;
    }
    let mut children = tree.children(id);
    match (children.next(), children.next()) {
        (Some(child), None) => {
            tree[child].node_type == NodeType::Text
                && tree[child].literal == node.link.destination
        }
        _ => false,
    }
}
