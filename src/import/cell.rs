use chrono::NaiveDateTime;

/// Normalized cell value handed from the file decoders to the row
/// pipeline. This is the whole contract between them: a 2D array of
/// these, header row first.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
}

impl Cell {
    pub fn from_text(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(t.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Cell content as trimmed text; numbers render without a trailing
    /// `.0` so phone-like columns survive spreadsheet numeric typing.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            Cell::DateTime(dt) => dt.to_string(),
        }
    }
}

/// A row counts as blank when every cell is empty; such rows are skipped
/// without logging.
pub fn row_is_blank(row: &[Cell]) -> bool {
    row.is_empty() || row.iter().all(Cell::is_empty)
}
