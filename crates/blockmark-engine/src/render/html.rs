use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::parsing::{
    NodeId, NodeType, Tree, WalkStatus,
    tree::{ListFlags, Node},
};

use super::Renderer;

/// HTML output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Self-closing void tags (`<br />`, `<hr />`).
    pub xhtml: bool,
    /// Wrap the body in a full HTML document.
    pub complete_page: bool,
    /// Document title for `complete_page`.
    pub title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            xhtml: true,
            complete_page: false,
            title: String::new(),
        }
    }
}

/// Renders a tree as HTML.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    options: HtmlOptions,
    last: Option<u8>,
}

impl HtmlRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        Self {
            options,
            last: None,
        }
    }

    fn out(&mut self, w: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
        if let Some(&b) = bytes.last() {
            self.last = Some(b);
        }
        w.write_all(bytes)
    }

    /// Starts a new line unless at the start of output or of a line.
    fn cr(&mut self, w: &mut dyn Write) -> io::Result<()> {
        match self.last {
            None | Some(b'\n') => Ok(()),
            Some(_) => self.out(w, b"\n"),
        }
    }

    fn text(&mut self, w: &mut dyn Write, text: &[u8]) -> io::Result<()> {
        let text = String::from_utf8_lossy(text);
        let escaped = html_escape::encode_text(&text);
        self.out(w, escaped.as_bytes())
    }

    fn attr(&mut self, w: &mut dyn Write, name: &str, value: &[u8]) -> io::Result<()> {
        let value = String::from_utf8_lossy(value);
        let escaped = html_escape::encode_double_quoted_attribute(&value);
        self.out(w, format!(" {name}=\"{escaped}\"").as_bytes())
    }

    fn void_tag(&mut self, w: &mut dyn Write, name: &str) -> io::Result<()> {
        if self.options.xhtml {
            self.out(w, format!("<{name} />").as_bytes())
        } else {
            self.out(w, format!("<{name}>").as_bytes())
        }
    }

    fn list_tags(node: &Node) -> (&'static str, &'static str) {
        let flags = node.list.flags;
        if flags.contains(ListFlags::DEFINITION) {
            ("<dl>", "</dl>")
        } else if flags.contains(ListFlags::ORDERED) {
            ("<ol>", "</ol>")
        } else {
            ("<ul>", "</ul>")
        }
    }

    fn item_tags(node: &Node) -> (&'static str, &'static str) {
        let flags = node.list.flags;
        if flags.contains(ListFlags::TERM) {
            ("<dt>", "</dt>")
        } else if flags.contains(ListFlags::DEFINITION) {
            ("<dd>", "</dd>")
        } else {
            ("<li>", "</li>")
        }
    }

    /// Paragraphs directly inside an item of a tight list, or inside a
    /// definition term, are rendered without `<p>`.
    fn skip_paragraph_tags(tree: &Tree, node: NodeId) -> bool {
        let Some(item) = tree[node].parent() else {
            return false;
        };
        let Some(list) = tree[item].parent() else {
            return false;
        };
        tree[list].node_type == NodeType::List
            && (tree[list].list.tight || tree[item].list.flags.contains(ListFlags::TERM))
    }

    fn paragraph(
        &mut self,
        w: &mut dyn Write,
        tree: &Tree,
        node: NodeId,
        entering: bool,
    ) -> io::Result<()> {
        if Self::skip_paragraph_tags(tree, node) {
            return Ok(());
        }
        if entering {
            let first_in_item = tree[node].prev().is_none()
                && tree[node]
                    .parent()
                    .is_some_and(|p| tree[p].node_type == NodeType::Item);
            if !first_in_item {
                self.cr(w)?;
            }
            self.out(w, b"<p>")
        } else {
            self.out(w, b"</p>")?;
            let last_in_item = tree[node]
                .parent()
                .is_some_and(|p| tree[p].node_type == NodeType::Item)
                && tree[node].next().is_none();
            if !last_in_item {
                self.cr(w)?;
            }
            Ok(())
        }
    }

    fn table_cell(&mut self, w: &mut dyn Write, node: &Node, entering: bool) -> io::Result<()> {
        let tag = if node.cell.is_header { "th" } else { "td" };
        if entering {
            self.out(w, format!("<{tag}").as_bytes())?;
            if let Some(align) = node.cell.align.keyword() {
                self.attr(w, "align", align.as_bytes())?;
            }
            self.out(w, b">")
        } else {
            self.out(w, format!("</{tag}>").as_bytes())?;
            self.cr(w)
        }
    }

    fn inline_tag(&mut self, w: &mut dyn Write, name: &str, entering: bool) -> io::Result<()> {
        let tag = if entering {
            format!("<{name}>")
        } else {
            format!("</{name}>")
        };
        self.out(w, tag.as_bytes())
    }

    /// Block tag on its own line.
    fn block_tag(
        &mut self,
        w: &mut dyn Write,
        open: &str,
        close: &str,
        entering: bool,
    ) -> io::Result<()> {
        self.cr(w)?;
        self.out(w, if entering { open } else { close }.as_bytes())?;
        self.cr(w)
    }
}

impl Renderer for HtmlRenderer {
    fn render_header(&mut self, w: &mut dyn Write, _tree: &Tree) -> io::Result<()> {
        if !self.options.complete_page {
            return Ok(());
        }
        if self.options.xhtml {
            self.out(
                w,
                b"<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \
                  \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">\n\
                  <html xmlns=\"http://www.w3.org/1999/xhtml\">\n",
            )?;
        } else {
            self.out(w, b"<!DOCTYPE html>\n<html>\n")?;
        }
        self.out(w, b"<head>\n  <title>")?;
        let title = self.options.title.clone();
        self.text(w, title.as_bytes())?;
        self.out(w, b"</title>\n  <meta charset=\"utf-8\"")?;
        let close: &[u8] = if self.options.xhtml { b" />\n" } else { b">\n" };
        self.out(w, close)?;
        self.out(w, b"</head>\n<body>\n\n")
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
            NodeType::Document => {}
            NodeType::BlockQuote => self.block_tag(w, "<blockquote>", "</blockquote>", entering)?,
            NodeType::List => {
                let (open, close) = Self::list_tags(node);
                self.block_tag(w, open, close, entering)?;
            }
            NodeType::Item => {
                let (open, close) = Self::item_tags(node);
                if entering {
                    self.cr(w)?;
                    self.out(w, open.as_bytes())?;
                } else {
                    self.out(w, close.as_bytes())?;
                    self.cr(w)?;
                }
            }
            NodeType::Paragraph => self.paragraph(w, tree, id, entering)?,
            NodeType::HorizontalRule => {
                self.cr(w)?;
                self.void_tag(w, "hr")?;
                self.cr(w)?;
            }
            NodeType::Table => self.block_tag(w, "<table>", "</table>", entering)?,
            NodeType::TableHead => self.block_tag(w, "<thead>", "</thead>", entering)?,
            NodeType::TableBody => self.block_tag(w, "<tbody>", "</tbody>", entering)?,
            NodeType::TableRow => self.block_tag(w, "<tr>", "</tr>", entering)?,
            NodeType::TableCell => self.table_cell(w, node, entering)?,
            NodeType::Text => self.text(w, &node.literal)?,
            NodeType::Emph => self.inline_tag(w, "em", entering)?,
            NodeType::Strong => self.inline_tag(w, "strong", entering)?,
            NodeType::Del => self.inline_tag(w, "del", entering)?,
            NodeType::Link => {
                if entering {
                    self.out(w, b"<a")?;
                    self.attr(w, "href", &node.link.destination)?;
                    if !node.link.title.is_empty() {
                        self.attr(w, "title", &node.link.title)?;
                    }
                    self.out(w, b">")?;
                } else {
                    self.out(w, b"</a>")?;
                }
            }
            NodeType::Hardbreak => {
                self.void_tag(w, "br")?;
                self.cr(w)?;
            }
            NodeType::Entity => self.out(w, &node.literal)?,
        }
        Ok(WalkStatus::GoToNext)
    }

    fn render_footer(&mut self, w: &mut dyn Write, _tree: &Tree) -> io::Result<()> {
        if self.options.complete_page {
            self.out(w, b"\n</body>\n</html>\n")?;
        }
        Ok(())
    }
}
