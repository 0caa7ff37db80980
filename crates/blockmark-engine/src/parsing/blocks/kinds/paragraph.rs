use crate::parsing::{
    Extensions, NodeType, Parser,
    blocks::classify::{
        dli_prefix, is_empty, is_hrule, next_line, oli_prefix, quote_prefix, uli_prefix,
    },
    tree::ListFlags,
};

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block opener matches. Inline parsing is applied
/// to paragraph content.
pub struct Paragraph;

impl Paragraph {
    /// Strips leading spaces, one trailing newline and trailing spaces.
    pub fn trim(data: &[u8]) -> &[u8] {
        let beg = data.iter().take_while(|&&b| b == b' ').count();
        let mut end = data.len();
        if end > beg && data[end - 1] == b'\n' {
            end -= 1;
        }
        while end > beg && data[end - 1] == b' ' {
            end -= 1;
        }
        &data[beg..end]
    }
}

impl Parser {
    /// Accumulates lines until something ends the paragraph, returning the
    /// bytes consumed.
    pub(crate) fn paragraph(&mut self, data: &[u8]) -> usize {
        let definitions = self.extensions.contains(Extensions::DEFINITION_LISTS);
        let interruptible = self
            .extensions
            .contains(Extensions::NO_EMPTY_LINE_BEFORE_BLOCK);

        // `prev` starts the previous line, `i` the current one
        let mut prev = 0;
        let mut i = 0;
        while i < data.len() {
            let current = &data[i..];

            let n = is_empty(current);
            if n > 0 {
                if definitions && i > 0 && dli_prefix(&data[i + n..]) > 0 {
                    return self.definition_list_from(data, prev);
                }
                self.render_paragraph(&data[..i]);
                return i + n;
            }

            if is_hrule(current) {
                self.render_paragraph(&data[..i]);
                return i;
            }

            // the previous line is a definition term
            if definitions && i > 0 && dli_prefix(current) > 0 {
                return self.definition_list_from(data, prev);
            }

            if interruptible
                && i > 0
                && (uli_prefix(current) > 0
                    || oli_prefix(current) > 0
                    || quote_prefix(current) > 0)
            {
                self.render_paragraph(&data[..i]);
                return i;
            }

            prev = i;
            i = next_line(data, i);
        }

        self.render_paragraph(&data[..i]);
        i
    }

    fn render_paragraph(&mut self, data: &[u8]) {
        let text = Paragraph::trim(data);
        if text.is_empty() {
            return;
        }
        self.add_block(NodeType::Paragraph, text);
    }

    /// Re-reads the paragraph from the line at `term` on as a definition
    /// list. Lines before the term stay a paragraph of their own. Returns
    /// the bytes consumed from the paragraph start.
    ///
    /// The term line always becomes the first item, so the list is never
    /// empty.
    fn definition_list_from(&mut self, data: &[u8], term: usize) -> usize {
        self.render_paragraph(&data[..term]);
        term + self.list(&data[term..], ListFlags::DEFINITION)
    }
}
