//! Side-effect-free line recognizers.
//!
//! Each function looks at the remaining input starting at a line boundary
//! and reports whether a block-start grammar matches there. Dispatch probes
//! several of them per line, so none of them allocate or touch parser state.

/// Length of the blank line at the start of `data`, terminator included,
/// or 0 if the line holds anything but spaces and tabs.
pub fn is_empty(data: &[u8]) -> usize {
    let mut i = 0;
    while i < data.len() && data[i] != b'\n' {
        if data[i] != b' ' && data[i] != b'\t' {
            return 0;
        }
        i += 1;
    }
    if i < data.len() && data[i] == b'\n' {
        i += 1;
    }
    i
}

/// `***`, `---` or `___` (three or more, spaces allowed between them) after
/// up to three spaces of indentation.
pub fn is_hrule(data: &[u8]) -> bool {
    let mut i = skip_up_to(data, 0, b' ', 3);

    let c = match data.get(i) {
        Some(&c @ (b'*' | b'-' | b'_')) => c,
        _ => return false,
    };

    let mut n = 0;
    while i < data.len() && data[i] != b'\n' {
        if data[i] == c {
            n += 1;
        } else if data[i] != b' ' {
            return false;
        }
        i += 1;
    }
    n >= 3
}

/// Length of a `>` quote prefix (up to three leading spaces, one optional
/// space after the marker), or 0.
pub fn quote_prefix(data: &[u8]) -> usize {
    let i = skip_up_to(data, 0, b' ', 3);
    if data.get(i) == Some(&b'>') {
        if data.get(i + 1) == Some(&b' ') {
            return i + 2;
        }
        return i + 1;
    }
    0
}

/// Length of an unordered item prefix: up to three spaces, one of `*+-`,
/// then a space or tab.
pub fn uli_prefix(data: &[u8]) -> usize {
    let i = skip_up_to(data, 0, b' ', 3);
    if i + 1 >= data.len() {
        return 0;
    }
    if !matches!(data[i], b'*' | b'+' | b'-') || !is_tab_or_space(data[i + 1]) {
        return 0;
    }
    i + 2
}

/// Length of an ordered item prefix: up to three spaces, digits, `.`, then
/// a space or tab.
pub fn oli_prefix(data: &[u8]) -> usize {
    let mut i = skip_up_to(data, 0, b' ', 3);

    let start = i;
    while i < data.len() && data[i].is_ascii_digit() {
        i += 1;
    }
    if start == i || i + 1 >= data.len() {
        return 0;
    }

    if data[i] != b'.' || !is_tab_or_space(data[i + 1]) {
        return 0;
    }
    i + 2
}

/// Length of a definition prefix: `:` followed by a space or tab.
pub fn dli_prefix(data: &[u8]) -> usize {
    if data.len() < 2 || data[0] != b':' || !is_tab_or_space(data[1]) {
        return 0;
    }
    2
}

/// True if the byte at `i` is preceded by an odd number of backslashes.
pub fn is_backslash_escaped(data: &[u8], i: usize) -> bool {
    let backslashes = data[..i.min(data.len())]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 1
}

/// Index just past the end of the line starting at `start` (past its `\n`
/// if there is one).
pub fn next_line(data: &[u8], start: usize) -> usize {
    match data[start..].iter().position(|&b| b == b'\n') {
        Some(nl) => start + nl + 1,
        None => data.len(),
    }
}

pub(crate) fn skip_char(data: &[u8], start: usize, c: u8) -> usize {
    let mut i = start;
    while i < data.len() && data[i] == c {
        i += 1;
    }
    i
}

fn skip_up_to(data: &[u8], start: usize, c: u8, max: usize) -> usize {
    let mut i = start;
    while i < start + max && i < data.len() && data[i] == c {
        i += 1;
    }
    i
}

fn is_tab_or_space(c: u8) -> bool {
    c == b' ' || c == b'\t'
}
