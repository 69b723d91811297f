use eframe::egui::{RichText, Ui};

use super::heatmap::{self, Heatmap};
use super::{column_picker, notice, subheader};
use crate::analysis::{AssociationView, Section};
use crate::color::{self, ColorMap};
use crate::i18n::Strings;
use crate::state::Selections;
use crate::stats::association::CrossTab;

// ---------------------------------------------------------------------------
// Association tab
// ---------------------------------------------------------------------------

/// Render the tab from a prepared view. Returns `true` when a dropdown
/// changed, meaning `view` is stale.
pub fn show(
    ui: &mut Ui,
    view: &AssociationView,
    selections: &mut Selections,
    strings: &Strings,
) -> bool {
    subheader(ui, strings.corr_matrix);
    match &view.correlation {
        Section::Chart(matrix) => Heatmap {
            row_labels: &matrix.columns,
            col_labels: &matrix.columns,
            values: matrix.values.clone(),
            colormap: ColorMap::RdPu,
            annotate: heatmap::two_decimals,
        }
        .show(ui),
        Section::Placeholder(n) => notice(ui, *n, strings),
    }

    ui.separator();

    subheader(ui, strings.crosstab);
    ui.label(RichText::new(strings.warning_unique).small().color(color::WARNING_TEXT));
    if !view.hidden.is_empty() {
        log::trace!("Hidden from dropdowns: {:?}", view.hidden);
    }

    let panel = match &view.crosstab {
        Section::Chart(panel) => panel,
        Section::Placeholder(n) => {
            notice(ui, *n, strings);
            return false;
        }
    };

    let mut changed = false;
    ui.columns(2, |columns: &mut [Ui]| {
        changed |= column_picker(
            &mut columns[0],
            "crosstab_x",
            strings.select_col_x,
            &panel.x.options,
            &panel.x.selected,
            &mut selections.cross_x,
        );
        changed |= column_picker(
            &mut columns[1],
            "crosstab_y",
            strings.select_col_y,
            &panel.y.options,
            &panel.y.selected,
            &mut selections.cross_y,
        );
    });

    ui.add_space(6.0);
    match &panel.table {
        Section::Chart(table) => crosstab_heatmap(ui, table),
        Section::Placeholder(n) => notice(ui, *n, strings),
    }
    changed
}

fn crosstab_heatmap(ui: &mut Ui, table: &CrossTab) {
    let values = table
        .counts
        .iter()
        .map(|row| row.iter().map(|&c| Some(c as f64)).collect())
        .collect();
    Heatmap {
        row_labels: &table.row_labels,
        col_labels: &table.col_labels,
        values,
        colormap: ColorMap::PuRd,
        annotate: heatmap::integer,
    }
    .show(ui);
}
