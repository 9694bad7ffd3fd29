//! Columnar transposition keyed by a keyword.
//!
//! Encoding drops all whitespace before transposing, so decoding returns the
//! message without its spaces. Columns are read in keyword order: letters
//! sorted alphabetically, repeated letters left to right.

use crate::layout::ColumnGrid;
use crate::method::Keyword;

fn strip_whitespace(text: &str) -> Vec<char> {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Per-column character counts for a message of `len` characters.
///
/// The round-robin fill gives the first `len % k` columns one extra row.
pub fn column_lengths(len: usize, columns: usize) -> Vec<usize> {
    let rows = len.div_ceil(columns);
    let full = len % columns;
    (0..columns)
        .map(|col| if full == 0 || col < full { rows } else { rows - 1 })
        .collect()
}

pub fn encode(text: &str, keyword: &Keyword) -> String {
    let k = keyword.len();
    let mut buffers: Vec<String> = vec![String::new(); k];
    for (i, c) in strip_whitespace(text).into_iter().enumerate() {
        buffers[i % k].push(c);
    }
    keyword
        .order()
        .into_iter()
        .map(|col| buffers[col].as_str())
        .collect()
}

pub fn decode(text: &str, keyword: &Keyword) -> String {
    let chars: Vec<char> = text.chars().collect();
    let k = keyword.len();
    let lengths = column_lengths(chars.len(), k);

    // Segments arrive in keyword order; put each back under its own column
    let empty: &[char] = &[];
    let mut columns = vec![empty; k];
    let mut start = 0;
    for col in keyword.order() {
        let end = start + lengths[col];
        columns[col] = &chars[start..end];
        start = end;
    }

    let rows = lengths.first().copied().unwrap_or(0);
    let mut output = String::with_capacity(chars.len());
    for row in 0..rows {
        for column in &columns {
            if let Some(c) = column.get(row) {
                output.push(*c);
            }
        }
    }
    output
}

/// Row-major grid of `text` (whitespace removed) under the keyword
pub fn grid(text: &str, keyword: &Keyword) -> ColumnGrid {
    let k = keyword.len();
    let chars = strip_whitespace(text);
    let rows = chars
        .chunks(k)
        .map(|chunk| {
            let mut row: Vec<Option<char>> = chunk.iter().copied().map(Some).collect();
            row.resize(k, None);
            row
        })
        .collect();

    let mut ranks = vec![0usize; k];
    for (rank, col) in keyword.order().into_iter().enumerate() {
        ranks[col] = rank;
    }

    ColumnGrid {
        keyword: keyword.to_string(),
        ranks,
        rows,
    }
}
