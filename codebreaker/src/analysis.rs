use cipherkit::cipher::substitution;

/// English letter frequencies in percent, A to Z
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Index of coincidence of English text
pub const ENGLISH_IC: f64 = 0.0667;
/// Index of coincidence of uniformly random letters
pub const RANDOM_IC: f64 = 1.0 / 26.0;

/// Case-folded counts of ASCII letters
pub fn letter_counts(text: &str) -> [u64; 26] {
    let mut counts = [0u64; 26];
    for c in text.chars().filter(|c| c.is_ascii_alphabetic()) {
        counts[(c.to_ascii_lowercase() as u8 - b'a') as usize] += 1;
    }
    counts
}

/// Chi-square distance of the counts from English letter frequencies
pub fn chi_square(counts: &[u64; 26]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    counts
        .iter()
        .zip(ENGLISH_FREQUENCIES.iter())
        .map(|(&observed, &percent)| {
            let expected = total as f64 * percent / 100.0;
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

pub fn index_of_coincidence(counts: &[u64; 26]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total < 2 {
        return 0.0;
    }
    let pairs: u64 = counts.iter().map(|&n| n * n.saturating_sub(1)).sum();
    pairs as f64 / (total * (total - 1)) as f64
}

/// Friedman estimate of a polyalphabetic key length
pub fn friedman_key_length(counts: &[u64; 26]) -> Option<f64> {
    let total = counts.iter().sum::<u64>() as f64;
    let ic = index_of_coincidence(counts);
    let denominator = (total - 1.0) * ic - RANDOM_IC * total + ENGLISH_IC;
    if total < 2.0 || denominator <= 0.0 {
        return None;
    }
    Some((ENGLISH_IC - RANDOM_IC) * total / denominator)
}

/// One Caesar decryption attempt
#[derive(Debug, Clone)]
pub struct ShiftCandidate {
    pub shift: i32,
    pub chi_square: f64,
    pub plaintext: String,
}

/// Every shift 0..26, best English match first
pub fn rank_shifts(ciphertext: &str) -> Vec<ShiftCandidate> {
    let mut candidates: Vec<ShiftCandidate> = (0..26)
        .map(|shift| {
            let plaintext = substitution::decode(ciphertext, shift);
            ShiftCandidate {
                shift,
                chi_square: chi_square(&letter_counts(&plaintext)),
                plaintext,
            }
        })
        .collect();
    candidates.sort_by(|a, b| a.chi_square.total_cmp(&b.chi_square));
    candidates
}
