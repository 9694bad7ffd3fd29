use crate::cipher::replacement::code_for;
use crate::engine::Cipher;
use crate::error::Result;
use crate::method::{Keyword, Method, Rails};

/// Worked example for one method: cipher, parameter label and sample message
fn example(method: Method) -> Result<(Cipher, String, &'static str)> {
    let example = match method {
        Method::Substitution => (Cipher::Substitution { shift: 2 }, "shift = 2".to_string(), "HELLO"),
        Method::Replacement => (Cipher::Replacement, "fixed table".to_string(), "ABC"),
        Method::Vigenere => (
            Cipher::Vigenere {
                keyword: Keyword::new("LEMON")?,
            },
            "keyword = LEMON".to_string(),
            "Attack at dawn!",
        ),
        Method::RailFence => (
            Cipher::RailFence {
                rails: Rails::new(3)?,
            },
            "rails = 3".to_string(),
            "HELLOWORLD",
        ),
        Method::Columnar => (
            Cipher::Columnar {
                keyword: Keyword::new("ZEBRAS")?,
            },
            "keyword = ZEBRAS".to_string(),
            "WE ARE DISCOVERED",
        ),
    };
    Ok(example)
}

fn description(method: Method) -> &'static [&'static str] {
    match method {
        Method::Substitution => &[
            "Every letter moves a fixed number of places along the alphabet,",
            "wrapping from Z back to A. Case is kept and anything that is not",
            "a letter stays where it is. Decoding moves back by the same shift.",
        ],
        Method::Replacement => &[
            "The message is uppercased, then each letter is swapped for its own",
            "3-character code. Other characters are copied as they are.",
            "Decoding reads 3 characters at a time and turns known codes back",
            "into letters, so it relies on the text being produced by the encoder.",
        ],
        Method::Vigenere => &[
            "Like a shift cipher, but the shift changes from letter to letter",
            "following a repeating keyword (A = 0, B = 1, ... Z = 25).",
            "Spaces and punctuation do not use up a keyword letter.",
        ],
        Method::RailFence => &[
            "Letters are written in a zigzag down and up across the rails,",
            "then read off one rail at a time. Decoding works out how many",
            "letters sit on each rail, cuts the text accordingly and walks the",
            "zigzag again. One rail leaves the message unchanged.",
        ],
        Method::Columnar => &[
            "Spaces are removed and the letters are written row by row under the",
            "keyword. Columns are then read in alphabetical order of their keyword",
            "letter; repeated letters are read left to right. Decoding rebuilds",
            "the columns, allowing for the shorter ones at the end of the last row.",
        ],
    }
}

fn explain_method(output: &mut String, method: Method) -> Result<()> {
    for line in description(method) {
        output.push_str(&format!("  {}\n", line));
    }
    output.push('\n');

    let (cipher, params, message) = example(method)?;
    match method {
        Method::Substitution => {
            for letter in ['A', 'B', 'Z'] {
                output.push_str(&format!(
                    "  {} -> {}\n",
                    letter,
                    cipher.encode(&letter.to_string())
                ));
            }
        }
        Method::Replacement => {
            for letter in ['A', 'B', 'C'] {
                if let Some(code) = code_for(letter) {
                    output.push_str(&format!("  {} -> {}\n", letter, code));
                }
            }
        }
        _ => {}
    }

    let encoded = cipher.encode(message);
    let decoded = cipher.decode(&encoded);
    output.push_str(&format!("  Example ({}):\n", params));
    output.push_str(&format!("    {:?} -> {:?}\n", message, encoded));
    output.push_str(&format!("    decoded back: {:?}\n", decoded));

    if let Some(layout) = cipher.layout(message) {
        output.push('\n');
        for line in layout.to_string().lines() {
            output.push_str(&format!("    {}\n", line));
        }
    }
    Ok(())
}

/// "How it works" page for one method, or for all of them
pub fn explain(method: Option<Method>) -> Result<String> {
    let methods = match method {
        Some(method) => vec![method],
        None => Method::ALL.to_vec(),
    };

    let mut output = String::new();
    output.push_str("How the Cipher Engine Works\n");
    output.push_str("===========================\n\n");
    for (idx, method) in methods.into_iter().enumerate() {
        output.push_str(&format!("{}. {}\n", idx + 1, method.title()));
        explain_method(&mut output, method)?;
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_all_methods() {
        let page = explain(None).unwrap();
        for method in Method::ALL {
            assert!(page.contains(method.title()), "missing {}", method);
        }
    }

    #[test]
    fn test_substitution_example() {
        let page = explain(Some(Method::Substitution)).unwrap();
        assert!(page.contains("\"HELLO\" -> \"JGNNQ\""));
        assert!(page.contains("Z -> B"));
        assert!(!page.contains("Rail Fence"));
    }

    #[test]
    fn test_replacement_example() {
        let page = explain(Some(Method::Replacement)).unwrap();
        assert!(page.contains("\"ABC\" -> \"x1zp9qm2n\""));
        assert!(page.contains("decoded back: \"ABC\""));
    }

    #[test]
    fn test_transposition_examples_show_layout() {
        let page = explain(Some(Method::RailFence)).unwrap();
        assert!(page.contains("H . . . O . . . L ."));

        let page = explain(Some(Method::Columnar)).unwrap();
        assert!(page.contains("Z E B R A S"));
        assert!(page.contains("decoded back: \"WEAREDISCOVERED\""));
    }
}
