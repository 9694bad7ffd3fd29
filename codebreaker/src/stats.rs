use crate::analysis::{
    chi_square, friedman_key_length, index_of_coincidence, letter_counts, rank_shifts, ENGLISH_IC,
    RANDOM_IC,
};
use anyhow::{bail, Result};
use std::path::Path;

/// Letter statistics of a file plus a guess at the cipher family.
pub fn run(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)?;
    let counts = letter_counts(&text);
    let total: u64 = counts.iter().sum();
    if total == 0 {
        bail!("No letters to analyze in {}", path.display());
    }

    let ic = index_of_coincidence(&counts);
    let chi = chi_square(&counts);

    let mut output = String::new();
    output.push_str("Codebreaker Letter Statistics\n");
    output.push_str("=============================\n\n");
    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("Characters: {}\n", text.chars().count()));
    output.push_str(&format!("Letters: {}\n\n", total));

    output.push_str("Letter frequencies:\n");
    for (idx, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let percent = count as f64 * 100.0 / total as f64;
        output.push_str(&format!(
            "  {}  {:>6}  {:>5.1}%  {}\n",
            (b'A' + idx as u8) as char,
            count,
            percent,
            "#".repeat(percent.round() as usize)
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "Index of coincidence: {:.4} (English {:.4}, random {:.4})\n",
        ic, ENGLISH_IC, RANDOM_IC
    ));
    output.push_str(&format!("Chi-square vs English: {:.2}\n", chi));
    if let Some(length) = friedman_key_length(&counts) {
        output.push_str(&format!("Friedman key length estimate: {:.1}\n", length));
    }
    output.push_str(&format!("Verdict: {}\n", verdict(&text, ic)));
    Ok(output)
}

fn verdict(text: &str, ic: f64) -> String {
    let midpoint = (ENGLISH_IC + RANDOM_IC) / 2.0;
    if ic < midpoint {
        return "flat letter distribution, polyalphabetic substitution likely (Vigenere)"
            .to_string();
    }
    match rank_shifts(text).first() {
        Some(best) if best.shift != 0 => format!(
            "monoalphabetic substitution likely (Caesar shift {} fits best)",
            best.shift
        ),
        _ => "English letter distribution, plaintext or transposition likely (Rail Fence, Columnar)"
            .to_string(),
    }
}
