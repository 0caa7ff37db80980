use crate::parsing::{
    NodeType, Parser,
    blocks::classify::{is_empty, next_line, quote_prefix},
};

/// Block quote syntax.
pub struct BlockQuote;

impl BlockQuote {
    /// The quote marker.
    pub const PREFIX: u8 = b'>';

    /// A quote ends at a blank line followed by a non-blank line without a
    /// quote prefix. `beg..end` is the line under consideration.
    pub fn terminates(data: &[u8], beg: usize, end: usize) -> bool {
        if is_empty(&data[beg..]) == 0 {
            return false;
        }
        if end >= data.len() {
            return true;
        }
        quote_prefix(&data[end..]) == 0 && is_empty(&data[end..]) == 0
    }
}

impl Parser {
    /// Parses a block quote, re-parsing its de-prefixed lines as a nested
    /// block sequence.
    pub(crate) fn quote(&mut self, data: &[u8]) -> usize {
        let block = self.add_block(NodeType::BlockQuote, b"");
        let mut raw = Vec::new();
        let mut beg = 0;
        let mut end = 0;
        while beg < data.len() {
            end = next_line(data, beg);
            let pre = quote_prefix(&data[beg..]);
            if pre > 0 {
                beg += pre;
            } else if BlockQuote::terminates(data, beg, end) {
                break;
            }
            // lazy continuation lines are kept as they are
            raw.extend_from_slice(&data[beg..end]);
            beg = end;
        }

        self.block(&raw);
        self.finalize(block);
        end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminates_on_blank_then_plain_line() {
        let data = b"> a\n\nb\n";
        assert!(BlockQuote::terminates(data, 4, 5));
    }

    #[test]
    fn blank_then_quote_line_continues() {
        let data = b"> a\n\n> b\n";
        assert!(!BlockQuote::terminates(data, 4, 5));
    }

    #[test]
    fn non_blank_line_never_terminates() {
        let data = b"> a\nlazy\n";
        assert!(!BlockQuote::terminates(data, 4, 9));
    }

    #[test]
    fn trailing_blank_line_terminates() {
        let data = b"> a\n\n";
        assert!(BlockQuote::terminates(data, 4, 5));
    }
}
