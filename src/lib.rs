//! Cipherkit - a small classical cipher engine
//!
//! Five deterministic, invertible text transforms, each with an encode and a
//! matching decode:
//!
//! - **Substitution**: Caesar shift within each letter's case
//! - **Replacement**: fixed table of 3-character codes per letter
//! - **Vigenere**: keyword-driven shift, skipping non-letters
//! - **Rail Fence**: zigzag transposition across N rails
//! - **Columnar**: keyword-ordered column transposition (drops whitespace)
//!
//! These are teaching ciphers and offer no real secrecy.
//!
//! Parameters are validated once, at the boundary, into [`Keyword`] and
//! [`Rails`]; the transforms themselves cannot fail.
//!
//! ## Example
//!
//! ```
//! use cipherkit::{CipherSpec, Method};
//!
//! let mut spec = CipherSpec::new(Method::Columnar);
//! spec.keyword = Some("ZEBRAS".into());
//! let cipher = spec.to_cipher().unwrap();
//!
//! let encoded = cipher.encode("WE ARE DISCOVERED");
//! assert_eq!(encoded, "EVACDESERODEWIR");
//! assert_eq!(cipher.decode(&encoded), "WEAREDISCOVERED");
//! ```

pub mod cipher;
pub mod cli;
pub mod engine;
pub mod error;
pub mod layout;
pub mod method;

pub use engine::{run, Cipher, CipherSpec, Transcript};
pub use error::{CipherError, Result};
pub use layout::Layout;
pub use method::{Keyword, Method, Mode, Rails};
