use std::collections::HashMap;

use super::{mean, present, quantile, sample_std, sorted};
use crate::data::model::{python_bool, ColumnData, Dataset};

/// Row labels of the numeric summary table, in display order.
pub const NUMERIC_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Row labels of the text summary table.
pub const TEXT_ROWS: [&str; 4] = ["count", "unique", "top", "freq"];

#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl NumericSummary {
    pub fn from_values(column: &str, values: &[Option<f64>]) -> Self {
        let v = sorted(present(values));
        Self {
            column: column.to_string(),
            count: v.len(),
            mean: mean(&v),
            std: sample_std(&v),
            min: v.first().copied().unwrap_or(f64::NAN),
            q25: quantile(&v, 0.25),
            median: quantile(&v, 0.5),
            q75: quantile(&v, 0.75),
            max: v.last().copied().unwrap_or(f64::NAN),
        }
    }

    /// Values in [`NUMERIC_ROWS`] order.
    pub fn rows(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextSummary {
    pub column: String,
    pub count: usize,
    pub unique: usize,
    /// Most frequent value; the earliest one wins a tie.
    pub top: Option<String>,
    pub freq: usize,
}

impl TextSummary {
    pub fn from_values(column: &str, values: &[Option<String>]) -> Self {
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        let mut count = 0;
        for (i, v) in values.iter().enumerate() {
            if let Some(s) = v {
                count += 1;
                counts.entry(s.as_str()).or_insert((0, i)).0 += 1;
            }
        }
        let top = counts
            .iter()
            .max_by(|a, b| a.1 .0.cmp(&b.1 .0).then(b.1 .1.cmp(&a.1 .1)))
            .map(|(value, (freq, _))| (value.to_string(), *freq));

        Self {
            column: column.to_string(),
            count,
            unique: counts.len(),
            freq: top.as_ref().map(|(_, f)| *f).unwrap_or(0),
            top: top.map(|(value, _)| value),
        }
    }

    /// Cells in [`TEXT_ROWS`] order.
    pub fn rows(&self) -> [String; 4] {
        [
            self.count.to_string(),
            self.unique.to_string(),
            self.top.clone().unwrap_or_else(|| "NaN".to_string()),
            self.freq.to_string(),
        ]
    }
}

/// The summary statistics table of the descriptive tab.
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    /// One entry per numeric column.
    Numeric(Vec<NumericSummary>),
    /// Fallback when there are no numeric columns: one entry per text or
    /// boolean column.
    Text(Vec<TextSummary>),
    /// The dataset has no columns.
    Empty,
}

/// Summarise numeric columns, or every other column (text and boolean, with
/// booleans counted as `True` / `False`) when the dataset has no numeric ones.
pub fn describe(dataset: &Dataset) -> Summary {
    let numeric: Vec<NumericSummary> = dataset
        .columns()
        .iter()
        .filter_map(|c| match &c.data {
            ColumnData::Numeric(v) => Some(NumericSummary::from_values(&c.name, v)),
            _ => None,
        })
        .collect();
    if !numeric.is_empty() {
        return Summary::Numeric(numeric);
    }

    let text: Vec<TextSummary> = dataset
        .columns()
        .iter()
        .filter_map(|c| match &c.data {
            ColumnData::Text(v) => Some(TextSummary::from_values(&c.name, v)),
            ColumnData::Boolean(v) => {
                let labels: Vec<Option<String>> = v
                    .iter()
                    .map(|b| b.map(|b| python_bool(b).to_string()))
                    .collect();
                Some(TextSummary::from_values(&c.name, &labels))
            }
            ColumnData::Numeric(_) => None,
        })
        .collect();
    if !text.is_empty() {
        return Summary::Text(text);
    }
    Summary::Empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Column;

    fn strings(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn numeric_summary_matches_known_values() {
        let s = NumericSummary::from_values(
            "score",
            &[Some(4.0), Some(1.0), None, Some(3.0), Some(2.0)],
        );
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, 2.5);
        assert!((s.std - 1.290_994_448_7).abs() < 1e-9);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.q25, 1.75);
        assert_eq!(s.median, 2.5);
        assert_eq!(s.q75, 3.25);
        assert_eq!(s.max, 4.0);
    }

    #[test]
    fn empty_numeric_column_has_zero_count_and_nan_stats() {
        let s = NumericSummary::from_values("empty", &[None, None]);
        assert_eq!(s.count, 0);
        assert!(s.rows()[1..].iter().all(|x| x.is_nan()));
    }

    #[test]
    fn text_summary_prefers_earliest_on_tie() {
        let s = TextSummary::from_values(
            "city",
            &strings(&[Some("Bogor"), Some("Depok"), None, Some("Depok"), Some("Bogor")]),
        );
        assert_eq!(s.count, 4);
        assert_eq!(s.unique, 2);
        assert_eq!(s.top.as_deref(), Some("Bogor"));
        assert_eq!(s.freq, 2);
    }

    #[test]
    fn describe_falls_back_to_text_columns() {
        let ds = Dataset::new(vec![Column::new(
            "city",
            ColumnData::Text(strings(&[Some("a"), Some("b")])),
        )])
        .unwrap();
        assert!(matches!(describe(&ds), Summary::Text(ref s) if s.len() == 1));
    }

    #[test]
    fn describe_only_numeric_when_present() {
        let ds = Dataset::new(vec![
            Column::new("city", ColumnData::Text(strings(&[Some("a")]))),
            Column::new("score", ColumnData::Numeric(vec![Some(1.0)])),
        ])
        .unwrap();
        match describe(&ds) {
            Summary::Numeric(s) => {
                assert_eq!(s.len(), 1);
                assert_eq!(s[0].column, "score");
            }
            other => panic!("unexpected summary: {other:?}"),
        }
    }

    #[test]
    fn describe_summarises_booleans_without_numeric_columns() {
        let ds = Dataset::new(vec![
            Column::new("flag", ColumnData::Boolean(vec![Some(false), Some(true), Some(true), None])),
            Column::new("city", ColumnData::Text(strings(&[Some("a"), Some("a"), None, None]))),
        ])
        .unwrap();
        match describe(&ds) {
            Summary::Text(s) => {
                assert_eq!(s.len(), 2);
                assert_eq!(s[0].column, "flag");
                assert_eq!(s[0].rows(), ["3", "2", "True", "2"].map(String::from));
                assert_eq!(s[1].column, "city");
            }
            other => panic!("unexpected summary: {other:?}"),
        }
    }

    #[test]
    fn describe_without_columns_is_empty() {
        let ds = Dataset::new(Vec::new()).unwrap();
        assert_eq!(describe(&ds), Summary::Empty);
    }
}
