//! Rail Fence zigzag transposition.
//!
//! Characters are written diagonally across `rails` tracks, bouncing at the
//! top and bottom track, then read off track by track. A single rail is the
//! identity transform.

use crate::layout::ZigzagGrid;
use crate::method::Rails;

/// Rails that can hold at least one character of a `len`-character message.
///
/// Tracks past the message length stay empty, so they are never allocated.
pub fn effective_rails(len: usize, rails: Rails) -> usize {
    rails.get().min(len.max(1))
}

/// Track visited at each message position
pub fn zigzag_tracks(len: usize, rails: Rails) -> Vec<usize> {
    let rails = effective_rails(len, rails);
    if rails == 1 {
        return vec![0; len];
    }

    let mut tracks = Vec::with_capacity(len);
    let mut track = 0usize;
    let mut down = true;
    for _ in 0..len {
        tracks.push(track);
        track = if down { track + 1 } else { track - 1 };
        if track == 0 || track == rails - 1 {
            down = !down;
        }
    }
    tracks
}

/// Characters per track for a `len`-character message, over the effective rails
pub fn track_lengths(len: usize, rails: Rails) -> Vec<usize> {
    let mut lengths = vec![0usize; effective_rails(len, rails)];
    for track in zigzag_tracks(len, rails) {
        lengths[track] += 1;
    }
    lengths
}

pub fn encode(text: &str, rails: Rails) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut fence: Vec<String> = vec![String::new(); effective_rails(chars.len(), rails)];
    for (c, track) in chars.iter().zip(zigzag_tracks(chars.len(), rails)) {
        fence[track].push(*c);
    }
    fence.concat()
}

pub fn decode(text: &str, rails: Rails) -> String {
    let chars: Vec<char> = text.chars().collect();
    let tracks = zigzag_tracks(chars.len(), rails);

    // Slice the cipher text into per-track segments, in track order
    let lengths = track_lengths(chars.len(), rails);
    let mut segments: Vec<&[char]> = Vec::with_capacity(lengths.len());
    let mut start = 0;
    for len in &lengths {
        segments.push(&chars[start..start + len]);
        start += len;
    }

    // Walk the zigzag again, taking the next character of each visited track
    let mut cursors = vec![0usize; lengths.len()];
    tracks
        .into_iter()
        .map(|track| {
            let c = segments[track][cursors[track]];
            cursors[track] += 1;
            c
        })
        .collect()
}

/// Zigzag layout of `text`; only the rails that receive characters get a row.
pub fn grid(text: &str, rails: Rails) -> ZigzagGrid {
    let chars: Vec<char> = text.chars().collect();
    let mut cells = vec![vec![None; chars.len()]; effective_rails(chars.len(), rails)];
    for (col, (c, track)) in chars
        .iter()
        .zip(zigzag_tracks(chars.len(), rails))
        .enumerate()
    {
        cells[track][col] = Some(*c);
    }
    ZigzagGrid {
        rails: rails.get(),
        cells,
    }
}
