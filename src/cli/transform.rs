use crate::engine::{run, CipherSpec, Transcript};
use crate::error::{CipherError, Result};
use crate::method::{Method, Mode};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Options for the encode and decode commands
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub profile: Option<PathBuf>,
    pub method: Option<Method>,
    pub shift: Option<i32>,
    pub keyword: Option<String>,
    pub rails: Option<usize>,
    pub show_grid: bool,
}

impl TransformOptions {
    /// Profile contents with explicit options layered on top
    pub fn resolve_spec(&self) -> Result<CipherSpec> {
        let mut spec = match &self.profile {
            Some(path) => CipherSpec::load(path)?,
            None => CipherSpec::new(self.method.ok_or(CipherError::MethodRequired)?),
        };
        if let Some(method) = self.method {
            spec.method = method;
        }
        if self.shift.is_some() {
            spec.shift = self.shift;
        }
        if self.keyword.is_some() {
            spec.keyword = self.keyword.clone();
        }
        if self.rails.is_some() {
            spec.rails = self.rails;
        }
        Ok(spec)
    }
}

/// Validate the options and run the cipher over `message`
pub fn transform_message(message: &str, mode: Mode, options: &TransformOptions) -> Result<Transcript> {
    let cipher = options.resolve_spec()?.to_cipher()?;
    Ok(run(&cipher, mode, message, options.show_grid))
}

/// Message from the command line, a file, or stdin.
///
/// A single trailing newline is dropped from stdin.
pub fn read_message(message: Option<String>, input: Option<&Path>) -> Result<String> {
    if let Some(message) = message {
        return Ok(message);
    }
    if let Some(path) = input {
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

/// Plain-text rendering: the result line, then the layout if one was captured
pub fn render_transcript(transcript: &Transcript) -> String {
    let mut output = String::new();
    output.push_str(&transcript.output);
    output.push('\n');
    if let Some(layout) = &transcript.layout {
        output.push('\n');
        output.push_str(&format!("{} layout:\n", transcript.method.title()));
        output.push_str(&layout.to_string());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_transform_requires_method() {
        let options = TransformOptions::default();
        assert!(matches!(
            transform_message("hi", Mode::Encode, &options),
            Err(CipherError::MethodRequired)
        ));
    }

    #[test]
    fn test_transform_with_flags() {
        let options = TransformOptions {
            method: Some(Method::Substitution),
            shift: Some(1),
            ..Default::default()
        };
        let transcript = transform_message("Hi, Bob!", Mode::Encode, &options).unwrap();
        assert_eq!(transcript.output, "Ij, Cpc!");
    }

    #[test]
    fn test_flags_override_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vigenere.json");
        let mut profile = CipherSpec::new(Method::Vigenere);
        profile.keyword = Some("LEMON".into());
        profile.save(&path).unwrap();

        let from_profile = TransformOptions {
            profile: Some(path.clone()),
            ..Default::default()
        };
        let transcript = transform_message("ATTACKATDAWN", Mode::Encode, &from_profile).unwrap();
        assert_eq!(transcript.output, "LXFOPVEFRNHR");

        let overridden = TransformOptions {
            profile: Some(path),
            keyword: Some("A".into()),
            ..Default::default()
        };
        let transcript = transform_message("ATTACKATDAWN", Mode::Encode, &overridden).unwrap();
        assert_eq!(transcript.output, "ATTACKATDAWN");
    }

    #[test]
    fn test_invalid_keyword_withholds_output() {
        let options = TransformOptions {
            method: Some(Method::Columnar),
            keyword: Some("zebra5".into()),
            ..Default::default()
        };
        assert!(matches!(
            transform_message("WEAREDISCOVERED", Mode::Encode, &options),
            Err(CipherError::InvalidKeyword(_))
        ));
    }

    #[test]
    fn test_read_message_sources() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("message.txt");
        std::fs::write(&path, "from file\n").unwrap();

        assert_eq!(read_message(Some("inline".into()), Some(&path)).unwrap(), "inline");
        assert_eq!(read_message(None, Some(&path)).unwrap(), "from file\n");
    }

    #[test]
    fn test_render_includes_layout() {
        let options = TransformOptions {
            method: Some(Method::RailFence),
            rails: Some(2),
            show_grid: true,
            ..Default::default()
        };
        let transcript = transform_message("abcd", Mode::Encode, &options).unwrap();
        let rendered = render_transcript(&transcript);
        assert_eq!(rendered, "acbd\n\nRail Fence layout:\na . c .\n. b . d\n");
    }
}
