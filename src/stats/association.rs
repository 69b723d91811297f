use std::collections::{BTreeSet, HashMap};

use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Pearson correlation
// ---------------------------------------------------------------------------

/// Square correlation matrix over numeric columns. `None` where the
/// coefficient is undefined (fewer than two paired values, or no variance).
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row)?.get(col).copied().flatten()
    }
}

/// Pearson's r over the rows where both `x` and `y` are present.
pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx <= 0.0 || syy <= 0.0 {
        return None;
    }
    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// Pairwise correlation of the named numeric columns. Names that are not
/// numeric columns of `dataset` are skipped.
pub fn correlation_matrix(dataset: &Dataset, columns: &[String]) -> CorrelationMatrix {
    let series: Vec<(&str, &[Option<f64>])> = columns
        .iter()
        .filter_map(|name| {
            let values = dataset.column(name)?.as_numeric()?;
            Some((name.as_str(), values))
        })
        .collect();

    let values = series
        .iter()
        .map(|(_, x)| series.iter().map(|(_, y)| pearson(x, y)).collect())
        .collect();

    CorrelationMatrix {
        columns: series.iter().map(|(name, _)| name.to_string()).collect(),
        values,
    }
}

// ---------------------------------------------------------------------------
// Cross-tabulation
// ---------------------------------------------------------------------------

/// Joint frequency table of two categorical columns. Labels are sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossTab {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    /// `counts[row][col]`
    pub counts: Vec<Vec<usize>>,
}

impl CrossTab {
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

}

/// Count co-occurrences of `x` (rows) and `y` (columns), skipping rows where
/// either value is missing.
pub fn crosstab(x: &[Option<String>], y: &[Option<String>]) -> CrossTab {
    let pairs: Vec<(&str, &str)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some((a.as_deref()?, b.as_deref()?)))
        .collect();

    let row_labels: Vec<String> = pairs
        .iter()
        .map(|(a, _)| *a)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();
    let col_labels: Vec<String> = pairs
        .iter()
        .map(|(_, b)| *b)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    let row_index: HashMap<&str, usize> = row_labels
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect();
    let col_index: HashMap<&str, usize> = col_labels
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect();

    let mut counts = vec![vec![0usize; col_labels.len()]; row_labels.len()];
    for (a, b) in &pairs {
        if let (Some(&r), Some(&c)) = (row_index.get(a), col_index.get(b)) {
            counts[r][c] += 1;
        }
    }

    CrossTab {
        row_labels,
        col_labels,
        counts,
    }
}
