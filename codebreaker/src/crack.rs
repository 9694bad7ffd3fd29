use crate::analysis::{letter_counts, rank_shifts};
use anyhow::{bail, Result};
use std::path::Path;

const PREVIEW_CHARS: usize = 48;

/// Try every Caesar shift on a file and report the most English-looking ones.
pub fn crack_file(path: &Path, top: usize) -> Result<String> {
    let ciphertext = std::fs::read_to_string(path)?;
    let letters: u64 = letter_counts(&ciphertext).iter().sum();
    if letters == 0 {
        bail!("No letters to analyze in {}", path.display());
    }

    let mut output = String::new();
    output.push_str("Codebreaker Caesar Attack\n");
    output.push_str("=========================\n\n");
    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("Letters analyzed: {}\n\n", letters));
    output.push_str(&format!("{:>5}  {:>10}  {}\n", "Shift", "Chi-square", "Preview"));

    for candidate in rank_shifts(&ciphertext).into_iter().take(top.max(1)) {
        output.push_str(&format!(
            "{:>5}  {:>10.2}  {}\n",
            candidate.shift,
            candidate.chi_square,
            preview(&candidate.plaintext)
        ));
    }
    Ok(output)
}

fn preview(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .take(PREVIEW_CHARS)
        .collect();
    if text.chars().count() > PREVIEW_CHARS {
        format!("{}...", flat)
    } else {
        flat
    }
}
