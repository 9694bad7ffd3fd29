//! Vigenere polyalphabetic shift.
//!
//! The keyword position advances only on ASCII letters, so spaces and
//! punctuation do not consume key material.

use crate::cipher::substitution::shift_char;
use crate::method::Keyword;

pub fn encode(text: &str, keyword: &Keyword) -> String {
    apply(text, keyword, 1)
}

pub fn decode(text: &str, keyword: &Keyword) -> String {
    apply(text, keyword, -1)
}

fn apply(text: &str, keyword: &Keyword, direction: i32) -> String {
    let shifts = keyword.shifts();
    let mut key_index = 0usize;
    text.chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return c;
            }
            let shift = shifts[key_index % shifts.len()] as i32 * direction;
            key_index += 1;
            shift_char(c, shift)
        })
        .collect()
}
