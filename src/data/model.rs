use std::collections::HashSet;
use std::fmt;

use super::error::LoadError;

// ---------------------------------------------------------------------------
// ColumnData – typed storage for one column
// ---------------------------------------------------------------------------

/// Storage type of a column, mirroring the dtypes a survey sheet ends up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
    Boolean,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// Cell values of a column. `None` is the missing marker.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
    Boolean(Vec<Option<bool>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::Boolean(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::Numeric(_) => ColumnKind::Numeric,
            ColumnData::Text(_) => ColumnKind::Text,
            ColumnData::Boolean(_) => ColumnKind::Boolean,
        }
    }
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }

    /// Numeric cells, if this is a numeric column.
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            _ => None,
        }
    }

    /// Text cells, if this is a text column.
    pub fn as_text(&self) -> Option<&[Option<String>]> {
        match &self.data {
            ColumnData::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Number of distinct non-missing values.
    pub fn distinct_count(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v
                .iter()
                .flatten()
                .map(|x| x.to_bits())
                .collect::<HashSet<_>>()
                .len(),
            ColumnData::Text(v) => v.iter().flatten().collect::<HashSet<_>>().len(),
            ColumnData::Boolean(v) => v.iter().flatten().collect::<HashSet<_>>().len(),
        }
    }

    /// Text shown for a cell in the preview table.
    pub fn display_cell(&self, row: usize) -> String {
        match &self.data {
            ColumnData::Numeric(v) => match v.get(row).copied().flatten() {
                Some(x) => format_number(x),
                None => "NaN".to_string(),
            },
            ColumnData::Text(v) => match v.get(row).and_then(|s| s.as_deref()) {
                Some(s) => s.to_string(),
                None => "None".to_string(),
            },
            ColumnData::Boolean(v) => match v.get(row).copied().flatten() {
                Some(b) => python_bool(b).to_string(),
                None => "None".to_string(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The uploaded table. Row count is shared by every column and never changes
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    /// Build a dataset, checking every column has the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self, LoadError> {
        let rows = columns.first().map(|c| c.data.len()).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.data.len() != rows) {
            return Err(LoadError::RaggedColumns {
                column: bad.name.clone(),
                expected: rows,
                found: bad.data.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns.len())
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Swap the storage of column `index` for data of the same length.
    /// Returns `false` (and leaves the column alone) on a length mismatch.
    pub(crate) fn replace_data(&mut self, index: usize, data: ColumnData) -> bool {
        match self.columns.get_mut(index) {
            Some(col) if data.len() == self.rows => {
                col.data = data;
                true
            }
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Compact number rendering: integral values without decimals, others with
/// up to four decimals.
pub fn format_number(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.fract() == 0.0 && x.abs() < 1e15 {
        return format!("{x:.0}");
    }
    let s = format!("{x:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Render a float the way Python's `str(float)` does for the common cases
/// (`25.0`, `3.5`, `nan`). Used where the textual form of a number matters.
pub fn python_float_str(x: f64) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else if x.is_infinite() {
        if x > 0.0 { "inf" } else { "-inf" }.to_string()
    } else if x.fract() == 0.0 && x.abs() < 1e16 {
        format!("{x:.1}")
    } else {
        format!("{x}")
    }
}

pub fn python_bool(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}
