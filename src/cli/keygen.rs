use crate::engine::{CipherSpec, SHIFT_RANGE};
use crate::error::{CipherError, Result};
use crate::method::Method;
use rand::rngs::OsRng;
use rand::Rng;
use std::ops::RangeInclusive;
use std::path::Path;

/// Rail counts handed out by keygen
pub const KEYGEN_RAILS: RangeInclusive<usize> = 2..=8;

/// Options for the keygen command
#[derive(Debug, Clone)]
pub struct KeygenOptions {
    pub method: Method,
    /// Keyword length for keyword methods
    pub length: usize,
}

impl Default for KeygenOptions {
    fn default() -> Self {
        Self {
            method: Method::Vigenere,
            length: 6,
        }
    }
}

/// Random valid parameters for `options.method`
pub fn generate_spec<R: Rng>(options: &KeygenOptions, rng: &mut R) -> Result<CipherSpec> {
    let mut spec = CipherSpec::new(options.method);
    match options.method {
        Method::Substitution => spec.shift = Some(rng.gen_range(SHIFT_RANGE)),
        Method::Replacement => {}
        Method::Vigenere | Method::Columnar => {
            if options.length == 0 {
                return Err(CipherError::InvalidKeyword(String::new()));
            }
            let keyword: String = (0..options.length)
                .map(|_| (b'A' + rng.gen_range(0..26u8)) as char)
                .collect();
            spec.keyword = Some(keyword);
        }
        Method::RailFence => spec.rails = Some(rng.gen_range(KEYGEN_RAILS)),
    }
    // Generated parameters must pass the same boundary checks as user input
    spec.to_cipher()?;
    Ok(spec)
}

/// Generate parameters from the OS RNG and optionally save them as a profile
pub fn keygen(options: &KeygenOptions, save: Option<&Path>) -> Result<CipherSpec> {
    let mut rng = OsRng;
    let spec = generate_spec(options, &mut rng)?;
    if let Some(path) = save {
        spec.save(path)?;
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    #[test]
    fn test_generated_specs_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for method in Method::ALL {
            let options = KeygenOptions { method, length: 5 };
            for _ in 0..20 {
                let spec = generate_spec(&options, &mut rng).unwrap();
                assert_eq!(spec.method, method);
                assert!(spec.to_cipher().is_ok());
            }
        }
    }

    #[test]
    fn test_keyword_length_respected() {
        let mut rng = StdRng::seed_from_u64(1);
        let options = KeygenOptions {
            method: Method::Columnar,
            length: 9,
        };
        let spec = generate_spec(&options, &mut rng).unwrap();
        let keyword = spec.keyword.unwrap();
        assert_eq!(keyword.len(), 9);
        assert!(keyword.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_zero_length_keyword_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let options = KeygenOptions {
            method: Method::Vigenere,
            length: 0,
        };
        assert!(generate_spec(&options, &mut rng).is_err());
    }

    #[test]
    fn test_keygen_saves_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rails.json");
        let options = KeygenOptions {
            method: Method::RailFence,
            ..Default::default()
        };
        let spec = keygen(&options, Some(&path)).unwrap();
        let rails = spec.rails.unwrap();
        assert!(KEYGEN_RAILS.contains(&rails));
        assert_eq!(CipherSpec::load(&path).unwrap(), spec);
    }
}
