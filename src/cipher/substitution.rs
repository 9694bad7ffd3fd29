//! Caesar shift over the ASCII alphabet.
//!
//! Letters move within their own case and wrap at `z`/`Z`. Everything that is
//! not an ASCII letter passes through at the same position.

/// Shift one character by `shift` places, preserving case.
pub fn shift_char(c: char, shift: i32) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let offset = (c as u8 - base) as i32;
    let shifted = (offset + shift.rem_euclid(26)).rem_euclid(26);
    (base + shifted as u8) as char
}

pub fn encode(text: &str, shift: i32) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}

pub fn decode(text: &str, shift: i32) -> String {
    let inverse = -shift.rem_euclid(26);
    text.chars().map(|c| shift_char(c, inverse)).collect()
}
