use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cipher method selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Substitution,
    Replacement,
    Vigenere,
    RailFence,
    Columnar,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Substitution,
        Method::Replacement,
        Method::Vigenere,
        Method::RailFence,
        Method::Columnar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Substitution => "substitution",
            Method::Replacement => "replacement",
            Method::Vigenere => "vigenere",
            Method::RailFence => "railfence",
            Method::Columnar => "columnar",
        }
    }

    /// Human-readable title used in reports
    pub fn title(&self) -> &'static str {
        match self {
            Method::Substitution => "Substitution (Caesar shift)",
            Method::Replacement => "Replacement (code dictionary)",
            Method::Vigenere => "Vigenere",
            Method::RailFence => "Rail Fence",
            Method::Columnar => "Columnar Transposition",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Method {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "substitution" | "caesar" | "shift" => Ok(Self::Substitution),
            "replacement" | "code" => Ok(Self::Replacement),
            "vigenere" => Ok(Self::Vigenere),
            "railfence" | "rail-fence" | "rail" => Ok(Self::RailFence),
            "columnar" | "transposition" => Ok(Self::Columnar),
            _ => Err(CipherError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// Direction of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Encode,
    Decode,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encode => f.write_str("encode"),
            Mode::Decode => f.write_str("decode"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "encode" | "enc" | "e" => Ok(Self::Encode),
            "decode" | "dec" | "d" => Ok(Self::Decode),
            _ => Err(CipherError::UnsupportedMode(s.to_string())),
        }
    }
}

/// Validated cipher keyword: non-empty, ASCII letters only, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

impl Keyword {
    pub fn new(keyword: &str) -> Result<Self> {
        if keyword.is_empty() || !keyword.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CipherError::InvalidKeyword(keyword.to_string()));
        }
        Ok(Self(keyword.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Alphabet positions of the keyword letters (a = 0 .. z = 25)
    pub fn shifts(&self) -> Vec<u8> {
        self.0.bytes().map(|b| b - b'a').collect()
    }

    /// Column read order: keyword positions sorted by (letter, original position).
    ///
    /// Repeated letters keep their left-to-right order.
    pub fn order(&self) -> Vec<usize> {
        let bytes = self.0.as_bytes();
        let mut order: Vec<usize> = (0..bytes.len()).collect();
        order.sort_by_key(|&i| (bytes[i], i));
        order
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Keyword {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Validated Rail Fence track count (at least one)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rails(usize);

impl Rails {
    pub fn new(rails: usize) -> Result<Self> {
        if rails < 1 {
            return Err(CipherError::InvalidRails(rails));
        }
        Ok(Self(rails))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!("Caesar".parse::<Method>().unwrap(), Method::Substitution);
        assert_eq!("rail-fence".parse::<Method>().unwrap(), Method::RailFence);
        assert_eq!("COLUMNAR".parse::<Method>().unwrap(), Method::Columnar);
        assert!(matches!(
            "enigma".parse::<Method>(),
            Err(CipherError::UnsupportedMethod(_))
        ));
    }

    #[test]
    fn test_method_names_parse_back() {
        for method in Method::ALL {
            assert_eq!(method.name().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Encode".parse::<Mode>().unwrap(), Mode::Encode);
        assert_eq!("d".parse::<Mode>().unwrap(), Mode::Decode);
        assert!("sideways".parse::<Mode>().is_err());
    }

    #[test]
    fn test_keyword_validation() {
        assert_eq!(Keyword::new("KeY").unwrap().as_str(), "key");
        assert!(Keyword::new("").is_err());
        assert!(Keyword::new("two words").is_err());
        assert!(Keyword::new("abc1").is_err());
        assert!(Keyword::new("café").is_err());
    }

    #[test]
    fn test_keyword_order_zebras() {
        let keyword = Keyword::new("ZEBRAS").unwrap();
        // a(4) b(2) e(1) r(3) s(5) z(0)
        assert_eq!(keyword.order(), vec![4, 2, 1, 3, 5, 0]);
    }

    #[test]
    fn test_keyword_order_ties_keep_position() {
        let keyword = Keyword::new("BaNaNa").unwrap();
        // a at 1, 3, 5 then b at 0 then n at 2, 4
        assert_eq!(keyword.order(), vec![1, 3, 5, 0, 2, 4]);
    }

    #[test]
    fn test_keyword_shifts() {
        assert_eq!(Keyword::new("Key").unwrap().shifts(), vec![10, 4, 24]);
    }

    #[test]
    fn test_rails_validation() {
        assert!(matches!(Rails::new(0), Err(CipherError::InvalidRails(0))));
        assert_eq!(Rails::new(1).unwrap().get(), 1);
        assert_eq!(Rails::new(3).unwrap().get(), 3);
    }
}
