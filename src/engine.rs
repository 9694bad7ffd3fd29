use crate::cipher::{columnar, rail_fence, replacement, substitution, vigenere};
use crate::error::{CipherError, Result};
use crate::layout::Layout;
use crate::method::{Keyword, Method, Mode, Rails};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

/// Shifts accepted at the parameter boundary
pub const SHIFT_RANGE: RangeInclusive<i32> = 1..=25;

/// A cipher method together with its validated parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    Substitution { shift: i32 },
    Replacement,
    Vigenere { keyword: Keyword },
    RailFence { rails: Rails },
    Columnar { keyword: Keyword },
}

impl Cipher {
    pub fn method(&self) -> Method {
        match self {
            Cipher::Substitution { .. } => Method::Substitution,
            Cipher::Replacement => Method::Replacement,
            Cipher::Vigenere { .. } => Method::Vigenere,
            Cipher::RailFence { .. } => Method::RailFence,
            Cipher::Columnar { .. } => Method::Columnar,
        }
    }

    pub fn encode(&self, message: &str) -> String {
        match self {
            Cipher::Substitution { shift } => substitution::encode(message, *shift),
            Cipher::Replacement => replacement::encode(message),
            Cipher::Vigenere { keyword } => vigenere::encode(message, keyword),
            Cipher::RailFence { rails } => rail_fence::encode(message, *rails),
            Cipher::Columnar { keyword } => columnar::encode(message, keyword),
        }
    }

    pub fn decode(&self, message: &str) -> String {
        match self {
            Cipher::Substitution { shift } => substitution::decode(message, *shift),
            Cipher::Replacement => replacement::decode(message),
            Cipher::Vigenere { keyword } => vigenere::decode(message, keyword),
            Cipher::RailFence { rails } => rail_fence::decode(message, *rails),
            Cipher::Columnar { keyword } => columnar::decode(message, keyword),
        }
    }

    pub fn apply(&self, mode: Mode, message: &str) -> String {
        match mode {
            Mode::Encode => self.encode(message),
            Mode::Decode => self.decode(message),
        }
    }

    /// Transposition layout of `plaintext`; `None` for substitution methods
    pub fn layout(&self, plaintext: &str) -> Option<Layout> {
        match self {
            Cipher::RailFence { rails } => Some(Layout::Zigzag(rail_fence::grid(plaintext, *rails))),
            Cipher::Columnar { keyword } => Some(Layout::Columns(columnar::grid(plaintext, keyword))),
            _ => None,
        }
    }

    /// Parameter record that reproduces this cipher
    pub fn spec(&self) -> CipherSpec {
        let mut spec = CipherSpec::new(self.method());
        match self {
            Cipher::Substitution { shift } => spec.shift = Some(*shift),
            Cipher::Replacement => {}
            Cipher::Vigenere { keyword } | Cipher::Columnar { keyword } => {
                spec.keyword = Some(keyword.to_string())
            }
            Cipher::RailFence { rails } => spec.rails = Some(rails.get()),
        }
        spec
    }
}

/// Unvalidated method + parameters, as supplied by a caller or a profile file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CipherSpec {
    pub method: Method,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rails: Option<usize>,
}

impl CipherSpec {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    fn missing(&self, parameter: &'static str) -> CipherError {
        CipherError::MissingParameter {
            method: self.method.to_string(),
            parameter,
        }
    }

    /// Validate the parameters the method needs; parameters it ignores are not checked
    pub fn to_cipher(&self) -> Result<Cipher> {
        match self.method {
            Method::Substitution => {
                let shift = self.shift.ok_or_else(|| self.missing("shift"))?;
                if !SHIFT_RANGE.contains(&shift) {
                    return Err(CipherError::InvalidShift(shift));
                }
                Ok(Cipher::Substitution { shift })
            }
            Method::Replacement => Ok(Cipher::Replacement),
            Method::Vigenere => {
                let keyword = self.keyword.as_deref().ok_or_else(|| self.missing("keyword"))?;
                Ok(Cipher::Vigenere {
                    keyword: Keyword::new(keyword)?,
                })
            }
            Method::RailFence => {
                let rails = self.rails.ok_or_else(|| self.missing("rails"))?;
                Ok(Cipher::RailFence {
                    rails: Rails::new(rails)?,
                })
            }
            Method::Columnar => {
                let keyword = self.keyword.as_deref().ok_or_else(|| self.missing("keyword"))?;
                Ok(Cipher::Columnar {
                    keyword: Keyword::new(keyword)?,
                })
            }
        }
    }

    /// Read a profile from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write this profile as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Result of one engine invocation
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub method: Method,
    pub mode: Mode,
    pub input: String,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

/// Run `cipher` over `message`, optionally capturing the transposition layout.
///
/// The layout is always drawn from the plaintext side: the input when
/// encoding, the recovered message when decoding.
pub fn run(cipher: &Cipher, mode: Mode, message: &str, with_layout: bool) -> Transcript {
    let output = cipher.apply(mode, message);
    let layout = if with_layout {
        let plaintext = match mode {
            Mode::Encode => message,
            Mode::Decode => output.as_str(),
        };
        cipher.layout(plaintext)
    } else {
        None
    };

    Transcript {
        method: cipher.method(),
        mode,
        input: message.to_string(),
        output,
        layout,
    }
}
