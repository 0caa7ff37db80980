//! Pipe tables.
//!
//! ```text
//! Name | Size
//! :--- | ---:
//! a    | 1
//! ```
//!
//! The header line and its underline are validated together. If they do
//! not form a table, the speculative `Table` node is detached again and
//! the input falls through to the next grammar.

use crate::parsing::{
    NodeType, Parser,
    blocks::classify::{is_backslash_escaped, skip_char},
    tree::CellAlign,
};

fn is_pipe(data: &[u8], i: usize) -> bool {
    data[i] == b'|' && !is_backslash_escaped(data, i)
}

impl Parser {
    /// Parses a table, returning the bytes consumed or 0 if `data` does not
    /// start with a valid header and underline.
    pub(crate) fn table(&mut self, data: &[u8]) -> usize {
        let table = self.add_block(NodeType::Table, b"");
        let Some((mut i, columns)) = self.table_header(data) else {
            self.state.tip = self.tree[table].parent().unwrap_or(self.state.doc);
            self.tree.detach(table);
            log::trace!("discarded speculative table");
            return 0;
        };

        self.add_block(NodeType::TableBody, b"");

        while i < data.len() {
            let row_start = i;
            let mut pipes = 0;
            while i < data.len() && data[i] != b'\n' {
                if data[i] == b'|' {
                    pipes += 1;
                }
                i += 1;
            }

            if pipes == 0 {
                i = row_start;
                break;
            }

            if i < data.len() && data[i] == b'\n' {
                i += 1;
            }
            self.table_row(&data[row_start..i], &columns, false);
        }

        i
    }

    /// Validates the header line and the alignment underline. On success
    /// adds the head row and returns the bytes consumed with the column
    /// alignments.
    fn table_header(&mut self, data: &[u8]) -> Option<(usize, Vec<CellAlign>)> {
        let mut col_count = 1;
        let mut i = 0;
        while i < data.len() && data[i] != b'\n' {
            if is_pipe(data, i) {
                col_count += 1;
            }
            i += 1;
        }
        if col_count == 1 {
            return None;
        }

        let header_end = if i < data.len() && data[i] == b'\n' {
            i + 1
        } else {
            i
        };
        let header = &data[..header_end];

        // outer pipes do not separate columns
        if data[0] == b'|' {
            col_count -= 1;
        }
        if i > 2 && is_pipe(data, i - 1) {
            col_count -= 1;
        }

        let mut columns = vec![CellAlign::empty(); col_count];

        // underline
        i += 1;
        if i >= data.len() {
            return None;
        }
        if is_pipe(data, i) {
            i += 1;
        }
        i = skip_char(data, i, b' ');

        // each column is ` *:?-+:? *` with at least three dashes and colons,
        // the pipe after the last one being optional
        let mut col = 0;
        while i < data.len() && data[i] != b'\n' {
            let mut dashes = 0;

            if data[i] == b':' {
                i += 1;
                columns.get_mut(col)?.insert(CellAlign::LEFT);
                dashes += 1;
            }
            while i < data.len() && data[i] == b'-' {
                i += 1;
                dashes += 1;
            }
            if i < data.len() && data[i] == b':' {
                i += 1;
                columns.get_mut(col)?.insert(CellAlign::RIGHT);
                dashes += 1;
            }
            i = skip_char(data, i, b' ');
            if i == data.len() || dashes < 3 {
                return None;
            }

            if is_pipe(data, i) {
                col += 1;
                i = skip_char(data, i + 1, b' ');
                // junk after the last column
                if col >= col_count && i < data.len() && data[i] != b'\n' {
                    return None;
                }
            } else if col + 1 < col_count {
                return None;
            } else if data[i] == b'\n' {
                col += 1;
            } else {
                return None;
            }
        }
        if col != col_count {
            return None;
        }

        self.add_block(NodeType::TableHead, b"");
        self.table_row(header, &columns, true);

        if i < data.len() && data[i] == b'\n' {
            i += 1;
        }
        Some((i, columns))
    }

    /// Adds one row, splitting `data` on unescaped pipes. Missing cells are
    /// padded with empty ones, extra cells are dropped.
    fn table_row(&mut self, data: &[u8], columns: &[CellAlign], header: bool) {
        self.add_block(NodeType::TableRow, b"");

        let mut i = 0;
        if !data.is_empty() && is_pipe(data, 0) {
            i += 1;
        }

        let mut col = 0;
        while col < columns.len() && i < data.len() {
            i = skip_char(data, i, b' ');
            let cell_start = i;
            while i < data.len() && !is_pipe(data, i) && data[i] != b'\n' {
                i += 1;
            }

            let mut cell_end = i;
            i += 1;
            while cell_end > cell_start && data[cell_end - 1] == b' ' {
                cell_end -= 1;
            }

            self.add_cell(&data[cell_start..cell_end], columns[col], header);
            col += 1;
        }

        for &align in &columns[col..] {
            self.add_cell(b"", align, header);
        }
    }

    fn add_cell(&mut self, content: &[u8], align: CellAlign, is_header: bool) {
        let cell = self.add_block(NodeType::TableCell, content);
        self.tree[cell].cell.is_header = is_header;
        self.tree[cell].cell.align = align;
    }
}
