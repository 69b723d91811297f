use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{python_bool, python_float_str, ColumnData, Dataset};

/// Substrings (lowercase) that mark a column as holding respondent ages,
/// in English and Indonesian.
pub const AGE_TOKENS: [&str; 3] = ["usia", "umur", "age"];

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("digit pattern is valid"));

/// Whether a column name looks like an age column.
pub fn is_age_column(name: &str) -> bool {
    let lower = name.to_lowercase();
    AGE_TOKENS.iter().any(|token| lower.contains(token))
}

/// First contiguous run of ASCII digits in `text`, as a number.
///
/// `"25 years"` gives 25, `"umur: 041"` gives 41. Text without digits, or a
/// run too long to be a finite `f64`, gives `None`.
pub fn first_number(text: &str) -> Option<f64> {
    let digits = DIGIT_RUN.find(text)?.as_str();
    digits.parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Coerce every age-like column to numeric, best effort.
///
/// Each cell's text form (numbers as `25.0`, missing as `nan`) is reduced to
/// its first digit run; cells that yield nothing become missing. The load
/// never fails here. Returns the names of the columns that were rewritten.
pub fn clean_age_columns(dataset: &mut Dataset) -> Vec<String> {
    let targets: Vec<(usize, String)> = dataset
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, col)| is_age_column(&col.name))
        .map(|(i, col)| (i, col.name.clone()))
        .collect();

    let mut cleaned = Vec::with_capacity(targets.len());
    for (index, name) in targets {
        let values = coerce_digits(&dataset.columns()[index].data);
        let lost = values.iter().filter(|v| v.is_none()).count();
        if dataset.replace_data(index, ColumnData::Numeric(values)) {
            log::debug!("Age column '{name}': {lost} cells left missing");
            cleaned.push(name);
        } else {
            log::debug!("Age column '{name}' skipped");
        }
    }
    cleaned
}

fn coerce_digits(data: &ColumnData) -> Vec<Option<f64>> {
    match data {
        ColumnData::Numeric(values) => values
            .iter()
            .map(|v| first_number(&python_float_str(v.unwrap_or(f64::NAN))))
            .collect(),
        ColumnData::Text(values) => values
            .iter()
            .map(|v| v.as_deref().and_then(first_number))
            .collect(),
        ColumnData::Boolean(values) => values
            .iter()
            .map(|v| v.map(python_bool).and_then(first_number))
            .collect(),
    }
}
