use cipherkit::{Cipher, Keyword, Rails};
use proptest::prelude::*;

fn ascii_message() -> impl Strategy<Value = String> {
    "[ -~\t\n]{0,64}"
}

fn keyword() -> impl Strategy<Value = Keyword> {
    "[A-Za-z]{1,10}".prop_map(|word| Keyword::new(&word).unwrap())
}

proptest! {
    #[test]
    fn substitution_roundtrip(message in ascii_message(), shift in 1i32..=25) {
        let cipher = Cipher::Substitution { shift };
        prop_assert_eq!(cipher.decode(&cipher.encode(&message)), message);
    }

    #[test]
    fn substitution_preserves_shape(message in ascii_message(), shift in 0i32..=25) {
        let encoded = Cipher::Substitution { shift }.encode(&message);
        prop_assert_eq!(encoded.len(), message.len());
        for (before, after) in message.chars().zip(encoded.chars()) {
            prop_assert_eq!(before.is_ascii_uppercase(), after.is_ascii_uppercase());
            prop_assert_eq!(before.is_ascii_lowercase(), after.is_ascii_lowercase());
            if !before.is_ascii_alphabetic() {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn replacement_roundtrip_uppercases(message in ascii_message()) {
        let cipher = Cipher::Replacement;
        prop_assert_eq!(cipher.decode(&cipher.encode(&message)), message.to_ascii_uppercase());
    }

    #[test]
    fn vigenere_roundtrip(message in ascii_message(), keyword in keyword()) {
        let cipher = Cipher::Vigenere { keyword };
        prop_assert_eq!(cipher.decode(&cipher.encode(&message)), message);
    }

    #[test]
    fn rail_fence_roundtrip(message in ascii_message(), rails in 1usize..12) {
        let cipher = Cipher::RailFence { rails: Rails::new(rails).unwrap() };
        let encoded = cipher.encode(&message);
        prop_assert_eq!(encoded.len(), message.len());
        prop_assert_eq!(cipher.decode(&encoded), message);
    }

    #[test]
    fn columnar_roundtrip_strips_whitespace(message in ascii_message(), keyword in keyword()) {
        let cipher = Cipher::Columnar { keyword };
        let expected: String = message.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(cipher.decode(&cipher.encode(&message)), expected);
    }
}
