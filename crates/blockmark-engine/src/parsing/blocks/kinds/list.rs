//! Ordered, unordered and definition lists.
//!
//! A list is parsed one item at a time. Each item gathers the lines that
//! belong to it into a de-indented buffer and then either stores that
//! buffer as a single paragraph or, when the item turned out to hold
//! block-level material, re-parses it through the block dispatch loop.

use crate::parsing::{
    NodeType, Parser,
    blocks::classify::{dli_prefix, is_empty, is_hrule, oli_prefix, skip_char, uli_prefix},
    tree::{ListData, ListFlags},
};

/// True if a marker line starts a different kind of list than `flags`
/// describes. Ordered, unordered and definition items never share a list.
pub fn list_type_changed(data: &[u8], flags: ListFlags) -> bool {
    if dli_prefix(data) > 0 {
        !flags.contains(ListFlags::DEFINITION)
    } else if oli_prefix(data) > 0 {
        !flags.contains(ListFlags::ORDERED)
    } else if uli_prefix(data) > 0 {
        flags.intersects(ListFlags::ORDERED | ListFlags::DEFINITION)
    } else {
        false
    }
}

impl Parser {
    /// Parses a list of the kind given by `flags`, returning the bytes
    /// consumed.
    pub(crate) fn list(&mut self, data: &[u8], mut flags: ListFlags) -> usize {
        flags |= ListFlags::BEGINNING_OF_LIST;
        let list = self.add_block(NodeType::List, b"");
        self.tree[list].list.flags = flags;
        self.tree[list].list.tight = true;

        let mut i = 0;
        while i < data.len() {
            let skip = self.list_item(&data[i..], &mut flags);
            if flags.contains(ListFlags::CONTAINS_BLOCK) {
                self.tree[list].list.tight = false;
            }
            i += skip;
            if skip == 0 || flags.contains(ListFlags::END_OF_LIST) {
                break;
            }
            flags.remove(ListFlags::BEGINNING_OF_LIST);
        }

        self.finalize(list);
        i
    }

    /// Parses one list item. A sublist arrives with its parent's prefix
    /// already removed.
    fn list_item(&mut self, data: &[u8], flags: &mut ListFlags) -> usize {
        let item_indent = if data.first() == Some(&b'\t') {
            4
        } else {
            data.iter().take(3).take_while(|&&b| b == b' ').count()
        };

        let mut bullet_char = b'*';
        let mut i = uli_prefix(data);
        if i == 0 {
            i = oli_prefix(data);
        } else {
            bullet_char = data[i - 2];
        }
        if i == 0 {
            i = dli_prefix(data);
            if i > 0 {
                flags.remove(ListFlags::TERM);
            }
        }
        if i == 0 {
            // a definition term has no marker
            if flags.contains(ListFlags::DEFINITION) {
                flags.insert(ListFlags::TERM);
            } else {
                return 0;
            }
        }

        i = skip_char(data, i, b' ');

        let mut line = i;
        while i > 0 && i < data.len() && data[i - 1] != b'\n' {
            i += 1;
        }

        let mut raw = Vec::with_capacity(data.len());
        raw.extend_from_slice(&data[line..i]);
        line = i;

        let mut contains_blank_line = false;
        let mut sublist = 0;

        'gather: while line < data.len() {
            i += 1;
            while i < data.len() && data[i - 1] != b'\n' {
                i += 1;
            }

            // a blank line probably still belongs to this item
            if is_empty(&data[line..i]) > 0 {
                contains_blank_line = true;
                line = i;
                continue;
            }

            let (indent, indent_index) = if data[line] == b'\t' {
                (4, 1)
            } else {
                let n = data[line..i]
                    .iter()
                    .take(4)
                    .take_while(|&&b| b == b' ')
                    .count();
                (n, n)
            };

            let chunk = &data[line + indent_index..i];

            let is_marker = (uli_prefix(chunk) > 0 && !is_hrule(chunk))
                || oli_prefix(chunk) > 0
                || dli_prefix(chunk) > 0;

            if is_marker {
                // a sibling item, or the start of another list
                if indent <= item_indent {
                    if list_type_changed(chunk, *flags) {
                        flags.insert(ListFlags::END_OF_LIST);
                    } else if contains_blank_line {
                        flags.insert(ListFlags::CONTAINS_BLOCK);
                    }
                    break 'gather;
                }

                if contains_blank_line {
                    flags.insert(ListFlags::CONTAINS_BLOCK);
                }
                if sublist == 0 {
                    sublist = raw.len();
                }
            } else if contains_blank_line && indent < 4 {
                if flags.contains(ListFlags::DEFINITION) && i + 1 < data.len() {
                    // the item ends here; the list goes on only if a
                    // definition follows
                    let mut next = i;
                    while next < data.len() && data[next] != b'\n' {
                        next += 1;
                    }
                    while next + 1 < data.len() && data[next] == b'\n' {
                        next += 1;
                    }
                    if data[i] != b':' && data.get(next) != Some(&b':') {
                        flags.insert(ListFlags::END_OF_LIST);
                    }
                } else {
                    flags.insert(ListFlags::END_OF_LIST);
                }
                break 'gather;
            } else if contains_blank_line {
                raw.push(b'\n');
                flags.insert(ListFlags::CONTAINS_BLOCK);
            }

            if contains_blank_line {
                contains_blank_line = false;
                raw.push(b'\n');
            }

            raw.extend_from_slice(chunk);
            line = i;
        }

        let item = self.add_block(NodeType::Item, b"");
        self.tree[item].list = ListData {
            flags: *flags,
            tight: false,
            bullet_char,
            delimiter: b'.',
        };

        if flags.contains(ListFlags::CONTAINS_BLOCK) && !flags.contains(ListFlags::TERM) {
            if sublist > 0 {
                self.block(&raw[..sublist]);
                self.block(&raw[sublist..]);
            } else {
                self.block(&raw);
            }
        } else {
            let text = if sublist > 0 {
                &raw[..sublist]
            } else {
                &raw[..]
            };
            let paragraph = self.add_child(NodeType::Paragraph);
            self.tree[paragraph].content = text.to_vec();
            if sublist > 0 {
                self.block(&raw[sublist..]);
            }
        }

        line
    }
}
