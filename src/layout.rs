//! Intermediate layouts of the transposition ciphers, for display.

use serde::Serialize;
use std::fmt;

const EMPTY_CELL: char = '.';

/// Rail Fence zigzag: one row per track that can receive a character, one
/// column per message character. `rails` is the requested rail count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZigzagGrid {
    pub rails: usize,
    pub cells: Vec<Vec<Option<char>>>,
}

impl ZigzagGrid {
    /// Characters on a single track, in visiting order
    pub fn track(&self, rail: usize) -> String {
        self.cells
            .get(rail)
            .map(|row| row.iter().flatten().collect())
            .unwrap_or_default()
    }
}

/// Columnar grid: keyword header, read rank per column and the row-major fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnGrid {
    pub keyword: String,
    /// `ranks[col]` is the position of column `col` in the read order
    pub ranks: Vec<usize>,
    pub rows: Vec<Vec<Option<char>>>,
}

impl ColumnGrid {
    /// Characters of one column, top to bottom
    pub fn column(&self, col: usize) -> String {
        self.rows.iter().filter_map(|row| row.get(col).copied().flatten()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Layout {
    Zigzag(ZigzagGrid),
    Columns(ColumnGrid),
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[Option<char>]) -> fmt::Result {
    let line: Vec<String> = cells
        .iter()
        .map(|cell| cell.unwrap_or(EMPTY_CELL).to_string())
        .collect();
    writeln!(f, "{}", line.join(" "))
}

impl fmt::Display for ZigzagGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            write_cells(f, row)?;
        }
        Ok(())
    }
}

impl fmt::Display for ColumnGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<Option<char>> = self
            .keyword
            .chars()
            .map(|c| Some(c.to_ascii_uppercase()))
            .collect();
        write_cells(f, &header)?;
        let ranks: Vec<String> = self.ranks.iter().map(|rank| (rank + 1).to_string()).collect();
        writeln!(f, "{}", ranks.join(" "))?;
        writeln!(f, "{}", vec!["-"; self.ranks.len()].join(" "))?;
        for row in &self.rows {
            write_cells(f, row)?;
        }
        Ok(())
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Zigzag(grid) => fmt::Display::fmt(grid, f),
            Layout::Columns(grid) => fmt::Display::fmt(grid, f),
        }
    }
}
