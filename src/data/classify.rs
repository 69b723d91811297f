use super::model::{ColumnKind, Dataset};

// ---------------------------------------------------------------------------
// Column classification: which columns feed which widgets
// ---------------------------------------------------------------------------

/// Partition of a dataset's column names, in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnClasses {
    /// Numeric storage.
    pub numeric: Vec<String>,
    /// Text with fewer than `max_categories` distinct values.
    pub categorical: Vec<String>,
    /// Text with too many distinct values to chart (ids, free text, emails).
    pub excluded: Vec<String>,
}

/// Classify every column of `dataset`.
///
/// * numeric column → `numeric`
/// * text column with `< max_categories` distinct values → `categorical`
/// * text column with `>= max_categories` distinct values → `excluded`
/// * boolean columns belong to no class
pub fn classify(dataset: &Dataset, max_categories: usize) -> ColumnClasses {
    let mut classes = ColumnClasses::default();

    for col in dataset.columns() {
        match col.kind() {
            ColumnKind::Numeric => classes.numeric.push(col.name.clone()),
            ColumnKind::Text => {
                if col.distinct_count() < max_categories {
                    classes.categorical.push(col.name.clone());
                } else {
                    classes.excluded.push(col.name.clone());
                }
            }
            ColumnKind::Boolean => {}
        }
    }

    log::debug!(
        "Classified columns: {} numeric, {} categorical, {} excluded",
        classes.numeric.len(),
        classes.categorical.len(),
        classes.excluded.len()
    );
    classes
}
