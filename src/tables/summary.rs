//! Numeric column summary
//!
//! Row 0 is the header. Every other cell is parsed as a locale-flexible
//! number; a column appears in the summary only when at least one of its
//! cells parsed.

use serde::{Deserialize, Serialize};

use super::Table;

/// Sum and average of the parseable cells of one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Header text, or `Column N` when the header cell is blank
    pub label: String,
    pub sum: f64,
    pub avg: f64,
    /// Number of cells that contributed
    pub count: usize,
}

/// Parse a cell as a number, accepting a decimal comma
///
/// All whitespace is removed (so `"1 234"` reads as 1234) and the first
/// comma becomes a decimal point. Empty cells and anything that does not
/// parse to a finite number yield `None`.
///
/// # Examples
///
/// ```
/// use contentdash::tables::summary::parse_number;
///
/// assert_eq!(parse_number("1,5"), Some(1.5));
/// assert_eq!(parse_number(" 12 000 "), Some(12000.0));
/// assert_eq!(parse_number("x"), None);
/// assert_eq!(parse_number("   "), None);
/// ```
pub fn parse_number(cell: &str) -> Option<f64> {
    let compact: String = cell.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    let normalized = compact.replacen(',', ".", 1);
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Summarize every numeric column of `table`
///
/// Returns an empty list for tables without at least one data row.
pub fn summarize(table: &Table) -> Vec<ColumnSummary> {
    let Some((header, rows)) = table.data.split_first() else {
        return Vec::new();
    };

    let mut sums = vec![0.0_f64; header.len()];
    let mut counts = vec![0_usize; header.len()];

    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(header.len()) {
            if let Some(value) = parse_number(cell) {
                sums[idx] += value;
                counts[idx] += 1;
            }
        }
    }

    header
        .iter()
        .enumerate()
        .filter(|(idx, _)| counts[*idx] > 0)
        .map(|(idx, title)| {
            let label = if title.trim().is_empty() {
                format!("Column {}", idx + 1)
            } else {
                title.clone()
            };
            ColumnSummary {
                label,
                sum: sums[idx],
                avg: sums[idx] / counts[idx] as f64,
                count: counts[idx],
            }
        })
        .collect()
}
