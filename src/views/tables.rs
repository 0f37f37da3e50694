//! Tables page: list of the user's tables, grid view and column summary

use colored::Colorize;
use prettytable::{format, row, Cell, Row, Table as Grid};

use crate::tables::{ColumnSummary, Table};

/// Render the table list, marking the selected table
pub fn render_list(tables: &[Table], selected: Option<&str>) -> String {
    if tables.is_empty() {
        return format!(
            "{}\nCreate one with {} or {}.",
            "No tables yet.".yellow(),
            "contentdash tables new".cyan(),
            "contentdash tables template <kind>".cyan()
        );
    }

    let mut grid = Grid::new();
    grid.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    grid.set_titles(row!["", "ID", "Name", "Size", "Updated"]);

    for table in tables {
        let marker = if Some(table.id.as_str()) == selected {
            "*"
        } else {
            ""
        };
        grid.add_row(row![
            marker,
            table.id.cyan(),
            table.name,
            format!("{}x{}", table.rows(), table.cols()),
            table.updated_at.format("%Y-%m-%d %H:%M")
        ]);
    }

    format!("{}\n{}", "Tables".bold(), grid)
}

/// Render one table: the grid with row and column numbers, then its summary
pub fn render_table(table: &Table, summary: &[ColumnSummary]) -> String {
    let mut grid = Grid::new();
    grid.set_format(*format::consts::FORMAT_BOX_CHARS);

    let mut header = vec![Cell::new("#")];
    header.extend((0..table.cols()).map(|c| Cell::new(&c.to_string())));
    grid.set_titles(Row::new(header));

    for (idx, cells) in table.data.iter().enumerate() {
        let mut row = vec![Cell::new(&idx.to_string())];
        row.extend(cells.iter().map(|value| Cell::new(value)));
        grid.add_row(Row::new(row));
    }

    let mut out = format!(
        "{} {}\n{}",
        table.name.bold(),
        format!("({})", table.id).dimmed(),
        grid
    );
    out.push_str(&render_summary(summary));
    out
}

/// Render the numeric column summary
pub fn render_summary(summary: &[ColumnSummary]) -> String {
    if summary.is_empty() {
        return "No numeric columns.".dimmed().to_string();
    }

    let mut grid = Grid::new();
    grid.set_format(*format::consts::FORMAT_CLEAN);
    grid.set_titles(row!["Column", "Sum", "Average", "Cells"]);
    for column in summary {
        grid.add_row(row![
            column.label,
            format_number(column.sum),
            format_number(column.avg),
            column.count
        ]);
    }
    format!("{}\n{}", "Summary".underline(), grid)
}

/// Up to two decimals, without trailing zeros
fn format_number(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::summarize;
    use chrono::Utc;

    fn table(id: &str, data: Vec<Vec<&str>>) -> Table {
        let now = Utc::now();
        Table {
            id: id.into(),
            name: format!("Table {}", id),
            created_at: now,
            updated_at: now,
            data: data
                .into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(1.756), "1.76");
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn test_list_marks_selection() {
        let tables = vec![table("a", vec![vec![""]]), table("b", vec![vec![""]])];
        let page = render_list(&tables, Some("b"));
        let marked: Vec<&str> = page.lines().filter(|l| l.contains('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Table b"));
    }

    #[test]
    fn test_empty_list_hints_creation() {
        assert!(render_list(&[], None).contains("No tables yet"));
    }

    #[test]
    fn test_render_table_includes_cells_and_summary() {
        let t = table("t", vec![vec!["A", "B"], vec!["1,5", "x"], vec!["2", "3"]]);
        let page = render_table(&t, &summarize(&t));
        assert!(page.contains("1,5"));
        assert!(page.contains("Summary"));
        assert!(page.contains("1.75"));
    }

    #[test]
    fn test_render_summary_without_numbers() {
        assert!(render_summary(&[]).contains("No numeric columns"));
    }
}
