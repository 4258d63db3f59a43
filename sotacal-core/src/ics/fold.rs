//! RFC 5545 line folding.
//!
//! Content lines longer than 75 octets are split into physical lines, each
//! continuation starting with a single space that counts toward the next
//! line's budget. Lengths are measured in encoded bytes, and a cut never
//! lands inside a multi-byte UTF-8 character (it backs off to the previous
//! char boundary, so a physical line may come up a few bytes short of 75).
//! Splitting a backslash escape pair is fine since both bytes are ASCII.

const FOLD_LIMIT: usize = 75;

/// Fold a sequence of content lines into the final document text: physical
/// lines joined with CRLF, with a trailing CRLF.
pub fn fold_document(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        for physical in fold_line(line) {
            out.push_str(&physical);
            out.push_str("\r\n");
        }
    }
    out
}

/// Split one content line into physical lines of at most 75 bytes.
fn fold_line(line: &str) -> Vec<String> {
    let mut physical = Vec::new();
    let mut current = line.to_string();
    while current.len() > FOLD_LIMIT {
        let cut = cut_index(&current, FOLD_LIMIT);
        physical.push(current[..cut].to_string());
        current = format!(" {}", &current[cut..]);
    }
    physical.push(current);
    physical
}

/// Largest index `<= max` that is a char boundary of `s`.
fn cut_index(s: &str, max: usize) -> usize {
    let mut i = max;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
