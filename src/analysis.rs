//! View model: for every section of the two tabs, decide whether it has what
//! it needs to draw a chart or falls back to a placeholder.
//!
//! Views are built from the [`Dataset`] once per interaction (upload or
//! dropdown change) and held in [`crate::state::ViewCache`] until the next one.

use crate::config::Settings;
use crate::data::classify::ColumnClasses;
use crate::data::model::Dataset;
use crate::i18n::Strings;
use crate::state::Selections;
use crate::stats::association::{correlation_matrix, crosstab, CorrelationMatrix, CrossTab};
use crate::stats::describe::{describe, Summary};
use crate::stats::distribution::{histogram, kde_curve, top_values, Histogram};
use crate::stats::present;

// ---------------------------------------------------------------------------
// Chart-or-placeholder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Why a section shows a placeholder instead of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoCategorical,
    NoNumeric,
    NoValues,
    NoSummary,
    NeedTwoNumeric,
    NeedTwoCategorical,
    SameColumns,
}

impl Notice {
    pub fn severity(self) -> Severity {
        match self {
            Notice::NeedTwoNumeric | Notice::SameColumns => Severity::Warning,
            _ => Severity::Info,
        }
    }

    pub fn text(self, strings: &Strings) -> &'static str {
        match self {
            Notice::NoCategorical => strings.no_categorical,
            Notice::NoNumeric => strings.no_numeric,
            Notice::NoValues => strings.no_values,
            Notice::NoSummary => strings.no_summary,
            Notice::NeedTwoNumeric => strings.need_two_numeric,
            Notice::NeedTwoCategorical => strings.need_two_categorical,
            Notice::SameColumns => strings.pick_different,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Chart(T),
    Placeholder(Notice),
}

impl<T> Section<T> {
    pub fn chart(&self) -> Option<&T> {
        match self {
            Section::Chart(t) => Some(t),
            Section::Placeholder(_) => None,
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        match self {
            Section::Chart(_) => None,
            Section::Placeholder(n) => Some(*n),
        }
    }
}

// ---------------------------------------------------------------------------
// Dropdowns
// ---------------------------------------------------------------------------

/// A dropdown's options and the value it currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picker {
    pub options: Vec<String>,
    pub selected: String,
}

/// The user's choice if it is still one of `options`, otherwise the option at
/// `default_index` (clamped to the last one). `None` when there are no options.
pub fn resolve_choice(chosen: Option<&str>, options: &[String], default_index: usize) -> Option<String> {
    if let Some(c) = chosen {
        if options.iter().any(|o| o == c) {
            return Some(c.to_string());
        }
    }
    let last = options.len().checked_sub(1)?;
    options.get(default_index.min(last)).cloned()
}

fn picker(chosen: Option<&str>, options: &[String], default_index: usize) -> Option<Picker> {
    resolve_choice(chosen, options, default_index).map(|selected| Picker {
        options: options.to_vec(),
        selected,
    })
}

// ---------------------------------------------------------------------------
// Descriptive tab
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChart {
    pub picker: Picker,
    /// Top values, most frequent first.
    pub counts: Section<Vec<(String, usize)>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramPlot {
    pub histogram: Histogram,
    /// Density overlay scaled to bar heights (`density * n * bin width`).
    pub density: Option<Vec<[f64; 2]>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramChart {
    pub picker: Picker,
    pub plot: Section<HistogramPlot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveView {
    pub rows: usize,
    pub columns: usize,
    pub summary: Section<Summary>,
    pub categories: Section<CategoryChart>,
    pub numbers: Section<HistogramChart>,
}

pub fn descriptive(
    dataset: &Dataset,
    classes: &ColumnClasses,
    selections: &Selections,
    settings: &Settings,
) -> DescriptiveView {
    let (rows, columns) = dataset.shape();

    let summary = match describe(dataset) {
        Summary::Empty => Section::Placeholder(Notice::NoSummary),
        s => Section::Chart(s),
    };

    let categories = match picker(selections.category.as_deref(), &classes.categorical, 0) {
        Some(picker) => {
            let values = dataset
                .column(&picker.selected)
                .and_then(|c| c.as_text())
                .unwrap_or_default();
            let top = top_values(values, settings.top_categories);
            let counts = if top.is_empty() {
                Section::Placeholder(Notice::NoValues)
            } else {
                Section::Chart(top)
            };
            Section::Chart(CategoryChart { picker, counts })
        }
        None => Section::Placeholder(Notice::NoCategorical),
    };

    let numbers = match picker(selections.numeric.as_deref(), &classes.numeric, 0) {
        Some(picker) => {
            let values = dataset
                .column(&picker.selected)
                .and_then(|c| c.as_numeric())
                .map(present)
                .unwrap_or_default();
            let plot = match histogram(&values, settings.max_histogram_bins) {
                Some(histogram) => {
                    let scale = values.len() as f64 * histogram.bin_width();
                    let density = kde_curve(&values, settings.kde_points).map(|curve| {
                        curve.into_iter().map(|[x, d]| [x, d * scale]).collect()
                    });
                    Section::Chart(HistogramPlot { histogram, density })
                }
                None => Section::Placeholder(Notice::NoValues),
            };
            Section::Chart(HistogramChart { picker, plot })
        }
        None => Section::Placeholder(Notice::NoNumeric),
    };

    DescriptiveView {
        rows,
        columns,
        summary,
        categories,
        numbers,
    }
}

// ---------------------------------------------------------------------------
// Association tab
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CrossTabPanel {
    pub x: Picker,
    pub y: Picker,
    pub table: Section<CrossTab>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssociationView {
    pub correlation: Section<CorrelationMatrix>,
    pub crosstab: Section<CrossTabPanel>,
    /// Text columns left out of the dropdowns for having too many values.
    pub hidden: Vec<String>,
}

pub fn association(
    dataset: &Dataset,
    classes: &ColumnClasses,
    selections: &Selections,
) -> AssociationView {
    let correlation = if classes.numeric.len() > 1 {
        Section::Chart(correlation_matrix(dataset, &classes.numeric))
    } else {
        Section::Placeholder(Notice::NeedTwoNumeric)
    };

    let crosstab = if classes.categorical.len() > 1 {
        let x = picker(selections.cross_x.as_deref(), &classes.categorical, 0);
        let y = picker(selections.cross_y.as_deref(), &classes.categorical, 1);
        match (x, y) {
            (Some(x), Some(y)) => {
                let table = if x.selected == y.selected {
                    Section::Placeholder(Notice::SameColumns)
                } else {
                    let text = |name: &str| {
                        dataset
                            .column(name)
                            .and_then(|c| c.as_text())
                            .unwrap_or_default()
                    };
                    let table = crosstab(text(&x.selected), text(&y.selected));
                    if table.total() == 0 {
                        Section::Placeholder(Notice::NoValues)
                    } else {
                        Section::Chart(table)
                    }
                };
                Section::Chart(CrossTabPanel { x, y, table })
            }
            _ => Section::Placeholder(Notice::NeedTwoCategorical),
        }
    } else {
        Section::Placeholder(Notice::NeedTwoCategorical)
    };

    AssociationView {
        correlation,
        crosstab,
        hidden: classes.excluded.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::classify::classify;
    use crate::data::model::{Column, ColumnData};
    use crate::i18n::EN;

    fn text(values: &[&str]) -> ColumnData {
        ColumnData::Text(values.iter().map(|v| Some(v.to_string())).collect())
    }

    fn numbers(values: &[f64]) -> ColumnData {
        ColumnData::Numeric(values.iter().copied().map(Some).collect())
    }

    fn survey() -> Dataset {
        Dataset::new(vec![
            Column::new("gender", text(&["F", "M", "F", "F"])),
            Column::new("region", text(&["W", "E", "E", "W"])),
            Column::new("age", numbers(&[25.0, 30.0, 41.0, 19.0])),
            Column::new("score", numbers(&[3.0, 4.0, 5.0, 2.0])),
        ])
        .unwrap()
    }

    fn views(ds: &Dataset, selections: &Selections) -> (DescriptiveView, AssociationView) {
        let classes = classify(ds, 50);
        (
            descriptive(ds, &classes, selections, &Settings::default()),
            association(ds, &classes, selections),
        )
    }

    #[test]
    fn resolve_choice_falls_back_to_default() {
        let options = vec!["a".to_string(), "b".to_string()];
        assert_eq!(resolve_choice(Some("b"), &options, 0).as_deref(), Some("b"));
        assert_eq!(resolve_choice(Some("gone"), &options, 0).as_deref(), Some("a"));
        assert_eq!(resolve_choice(None, &options, 1).as_deref(), Some("b"));
        assert_eq!(resolve_choice(None, &options, 5).as_deref(), Some("b"));
        assert_eq!(resolve_choice(None, &[], 0), None);
    }

    #[test]
    fn full_survey_renders_every_chart() {
        let (desc, assoc) = views(&survey(), &Selections::default());

        assert_eq!((desc.rows, desc.columns), (4, 4));
        assert!(matches!(desc.summary, Section::Chart(Summary::Numeric(_))));

        let cats = desc.categories.chart().unwrap();
        assert_eq!(cats.picker.selected, "gender");
        assert_eq!(
            cats.counts.chart().unwrap(),
            &vec![("F".to_string(), 3), ("M".to_string(), 1)]
        );

        let hist = desc.numbers.chart().unwrap();
        assert_eq!(hist.picker.selected, "age");
        assert_eq!(hist.plot.chart().unwrap().histogram.counts.iter().sum::<usize>(), 4);

        assert!(assoc.correlation.chart().is_some());
        let panel = assoc.crosstab.chart().unwrap();
        assert_eq!((panel.x.selected.as_str(), panel.y.selected.as_str()), ("gender", "region"));
        assert_eq!(panel.table.chart().unwrap().total(), 4);
    }

    #[test]
    fn single_numeric_column_only_warns_for_correlation() {
        let ds = Dataset::new(vec![
            Column::new("age", numbers(&[25.0, 30.0])),
            Column::new("gender", text(&["F", "M"])),
        ])
        .unwrap();
        let (_, assoc) = views(&ds, &Selections::default());

        assert_eq!(assoc.correlation.notice(), Some(Notice::NeedTwoNumeric));
        assert_eq!(Notice::NeedTwoNumeric.severity(), Severity::Warning);
        assert_eq!(Notice::NeedTwoNumeric.text(&EN), "Need 2+ numerical columns for correlation.");
    }

    #[test]
    fn identical_crosstab_selections_warn_instead_of_charting() {
        let selections = Selections {
            cross_x: Some("region".into()),
            cross_y: Some("region".into()),
            ..Selections::default()
        };
        let (_, assoc) = views(&survey(), &selections);

        let panel = assoc.crosstab.chart().unwrap();
        assert_eq!(panel.table.notice(), Some(Notice::SameColumns));
        assert!(panel.table.chart().is_none());
    }

    #[test]
    fn crosstab_without_paired_values_gives_placeholder() {
        let ds = Dataset::new(vec![
            Column::new("a", ColumnData::Text(vec![Some("x".into()), None])),
            Column::new("b", ColumnData::Text(vec![None, Some("y".into())])),
        ])
        .unwrap();
        let (_, assoc) = views(&ds, &Selections::default());

        let panel = assoc.crosstab.chart().unwrap();
        assert_eq!(panel.table.notice(), Some(Notice::NoValues));
    }

    #[test]
    fn fewer_than_two_categorical_columns_gives_info() {
        let ds = Dataset::new(vec![
            Column::new("gender", text(&["F", "M"])),
            Column::new("a", numbers(&[1.0, 2.0])),
            Column::new("b", numbers(&[2.0, 1.0])),
        ])
        .unwrap();
        let (_, assoc) = views(&ds, &Selections::default());

        assert_eq!(assoc.crosstab.notice(), Some(Notice::NeedTwoCategorical));
        assert_eq!(Notice::NeedTwoCategorical.severity(), Severity::Info);
        assert!(assoc.correlation.chart().is_some());
    }

    #[test]
    fn missing_column_categories_give_placeholders() {
        let ds = Dataset::new(vec![Column::new(
            "flag",
            ColumnData::Boolean(vec![Some(true), Some(false)]),
        )])
        .unwrap();
        let (desc, _) = views(&ds, &Selections::default());

        assert!(matches!(desc.summary, Section::Chart(Summary::Text(_))));
        assert_eq!(desc.categories.notice(), Some(Notice::NoCategorical));
        assert_eq!(desc.numbers.notice(), Some(Notice::NoNumeric));
    }

    #[test]
    fn dataset_without_columns_has_no_summary() {
        let ds = Dataset::new(Vec::new()).unwrap();
        let (desc, _) = views(&ds, &Selections::default());
        assert_eq!(desc.summary.notice(), Some(Notice::NoSummary));
    }

    #[test]
    fn high_cardinality_columns_never_reach_a_dropdown() {
        let ids: Vec<String> = (0..60).map(|i| format!("user{i}@mail.test")).collect();
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        let groups: Vec<&str> = (0..60).map(|i| if i % 2 == 0 { "A" } else { "B" }).collect();
        let ds = Dataset::new(vec![
            Column::new("email", text(&ids)),
            Column::new("group", text(&groups)),
        ])
        .unwrap();

        let selections = Selections {
            category: Some("email".into()),
            ..Selections::default()
        };
        let (desc, assoc) = views(&ds, &selections);

        let cats = desc.categories.chart().unwrap();
        assert_eq!(cats.picker.options, vec!["group"]);
        assert_eq!(cats.picker.selected, "group");
        assert_eq!(assoc.hidden, vec!["email"]);
    }

    #[test]
    fn density_is_scaled_to_counts() {
        let (desc, _) = views(&survey(), &Selections {
            numeric: Some("score".into()),
            ..Selections::default()
        });
        let plot = desc.numbers.chart().unwrap().plot.chart().unwrap();
        let peak = plot
            .density
            .as_ref()
            .unwrap()
            .iter()
            .map(|p| p[1])
            .fold(0.0, f64::max);
        // a density peak is well below 1; scaled by n * width it is comparable to bar heights
        assert!(peak > 0.5, "peak = {peak}");
    }
}
