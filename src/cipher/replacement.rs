//! Fixed code-dictionary replacement.
//!
//! Each uppercase letter becomes a distinct 3-character code. Decoding scans
//! greedily: a 3-character window that matches a code is consumed whole,
//! anything else is emitted one character at a time. Text that was never
//! produced by [`encode`] decodes deterministically but is not validated.

/// Code for each letter, indexed by `letter - 'A'`
pub const CODES: [&str; 26] = [
    "x1z", "p9q", "m2n", "t7u", "l0k", "b3v", "g4s", "y6w", "r5e", "a8j", "z2x", "c7d", "q3f",
    "u1i", "h6o", "v5b", "n4m", "s9g", "e3t", "j2l", "k1p", "d6h", "o7y", "i0u", "f8a", "w5c",
];

pub const CODE_LEN: usize = 3;

/// Code for an uppercase ASCII letter
pub fn code_for(letter: char) -> Option<&'static str> {
    if letter.is_ascii_uppercase() {
        Some(CODES[(letter as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Letter for a 3-character code
pub fn letter_for(code: &[char]) -> Option<char> {
    if code.len() != CODE_LEN {
        return None;
    }
    CODES
        .iter()
        .position(|candidate| candidate.chars().eq(code.iter().copied()))
        .map(|idx| (b'A' + idx as u8) as char)
}

pub fn encode(text: &str) -> String {
    let mut output = String::with_capacity(text.len() * CODE_LEN);
    for c in text.chars().map(|c| c.to_ascii_uppercase()) {
        match code_for(c) {
            Some(code) => output.push_str(code),
            None => output.push(c),
        }
    }
    output
}

pub fn decode(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(chars.len() / CODE_LEN + 1);
    let mut i = 0;
    while i < chars.len() {
        let end = (i + CODE_LEN).min(chars.len());
        match letter_for(&chars[i..end]) {
            Some(letter) => {
                output.push(letter);
                i += CODE_LEN;
            }
            None => {
                output.push(chars[i]);
                i += 1;
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_distinct_and_three_chars() {
        let unique: HashSet<&str> = CODES.iter().copied().collect();
        assert_eq!(unique.len(), 26);
        assert!(CODES.iter().all(|code| code.chars().count() == CODE_LEN));
    }

    #[test]
    fn test_encode_known_vector() {
        assert_eq!(encode("ABC"), "x1zp9qm2n");
        assert_eq!(decode("x1zp9qm2n"), "ABC");
    }

    #[test]
    fn test_encode_uppercases_first() {
        assert_eq!(encode("abc"), encode("ABC"));
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(encode("Hi 5!"), "y6wr5e 5!");
        assert_eq!(decode("y6wr5e 5!"), "HI 5!");
    }

    #[test]
    fn test_roundtrip_with_code_lookalikes() {
        // Lowercase code text in the input is uppercased, so it cannot survive as a code
        for message in ["x1z", "9z-x1z", "a!b c?", "p9q1"] {
            assert_eq!(decode(&encode(message)), message.to_ascii_uppercase());
        }
    }

    #[test]
    fn test_short_tail_emitted_verbatim() {
        assert_eq!(decode("x1zq3"), "Aq3");
        assert_eq!(decode("x1"), "x1");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_malformed_input_is_deterministic() {
        // "ax1z" shifts the window by one before finding a code
        assert_eq!(decode("ax1z"), "aA");
        assert_eq!(decode("ax1z"), decode("ax1z"));
    }
}
