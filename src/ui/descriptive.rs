use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use super::{charts, column_picker, notice, subheader};
use crate::analysis::{DescriptiveView, Section};
use crate::config::Settings;
use crate::data::model::{format_number, Dataset};
use crate::i18n::Strings;
use crate::state::Selections;
use crate::stats::describe::{Summary, NUMERIC_ROWS, TEXT_ROWS};

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Descriptive tab
// ---------------------------------------------------------------------------

/// Render the tab from a prepared view. Returns `true` when a dropdown
/// changed, meaning `view` is stale.
pub fn show(
    ui: &mut Ui,
    view: &DescriptiveView,
    dataset: &Dataset,
    selections: &mut Selections,
    settings: &Settings,
    strings: &Strings,
) -> bool {
    egui::CollapsingHeader::new(RichText::new(strings.show_data).strong())
        .id_salt("raw_data")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.label(RichText::new(strings.dimensions_line(view.rows, view.columns)).strong());
            preview_table(ui, dataset, settings.preview_height);
        });

    subheader(ui, strings.stats);
    match &view.summary {
        Section::Chart(summary) => summary_table(ui, summary),
        Section::Placeholder(n) => notice(ui, *n, strings),
    }

    ui.separator();

    let mut changed = false;
    ui.columns(2, |columns: &mut [Ui]| {
        // ---- categorical distribution ----
        let ui = &mut columns[0];
        subheader(ui, strings.cat_dist);
        match &view.categories {
            Section::Chart(chart) => {
                changed |= column_picker(
                    ui,
                    "category_column",
                    &format!("{} (Cat)", strings.select_col_x),
                    &chart.picker.options,
                    &chart.picker.selected,
                    &mut selections.category,
                );
                match &chart.counts {
                    Section::Chart(counts) => charts::top_values_chart(
                        ui,
                        "category_chart",
                        &chart.picker.selected,
                        counts,
                        strings.count_axis,
                    ),
                    Section::Placeholder(n) => notice(ui, *n, strings),
                }
            }
            Section::Placeholder(n) => notice(ui, *n, strings),
        }

        // ---- numeric distribution ----
        let ui = &mut columns[1];
        subheader(ui, strings.num_dist);
        match &view.numbers {
            Section::Chart(chart) => {
                changed |= column_picker(
                    ui,
                    "numeric_column",
                    &format!("{} (Num)", strings.select_col_x),
                    &chart.picker.options,
                    &chart.picker.selected,
                    &mut selections.numeric,
                );
                match &chart.plot {
                    Section::Chart(plot) => charts::histogram_chart(
                        ui,
                        "numeric_chart",
                        &chart.picker.selected,
                        plot,
                        strings.count_axis,
                    ),
                    Section::Placeholder(n) => notice(ui, *n, strings),
                }
            }
            Section::Placeholder(n) => notice(ui, *n, strings),
        }
    });

    changed
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Every row of the dataset in a virtualised, scrollable table.
fn preview_table(ui: &mut Ui, dataset: &Dataset, height: f32) {
    let columns = dataset.columns();
    ui.push_id("preview_table", |ui: &mut Ui| {
        ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(Layout::left_to_right(Align::Center))
                .column(TableColumn::auto().at_least(40.0))
                .columns(TableColumn::auto().at_least(80.0).clip(true), columns.len())
                .min_scrolled_height(0.0)
                .max_scroll_height(height)
                .header(ROW_HEIGHT, |mut header| {
                    header.col(|ui: &mut Ui| {
                        ui.strong("");
                    });
                    for col in columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(col.name.as_str());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, dataset.row_count(), |mut row| {
                        let index = row.index();
                        row.col(|ui: &mut Ui| {
                            ui.label(RichText::new(index.to_string()).weak());
                        });
                        for col in columns {
                            row.col(|ui: &mut Ui| {
                                ui.label(col.display_cell(index));
                            });
                        }
                    });
                });
        });
    });
}

/// Summary statistics: one row per statistic, one column per dataset column.
fn summary_table(ui: &mut Ui, summary: &Summary) {
    let (headers, rows): (Vec<&str>, Vec<(&str, Vec<String>)>) = match summary {
        Summary::Numeric(cols) => (
            cols.iter().map(|c| c.column.as_str()).collect(),
            NUMERIC_ROWS
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    let cells = cols
                        .iter()
                        .map(|c| format_stat(c.rows()[i], i == 0))
                        .collect();
                    (*label, cells)
                })
                .collect(),
        ),
        Summary::Text(cols) => (
            cols.iter().map(|c| c.column.as_str()).collect(),
            TEXT_ROWS
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    let cells = cols.iter().map(|c| c.rows()[i].clone()).collect();
                    (*label, cells)
                })
                .collect(),
        ),
        Summary::Empty => return,
    };

    ui.push_id("summary_table", |ui: &mut Ui| {
        ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(Layout::left_to_right(Align::Center))
                .column(TableColumn::auto().at_least(48.0))
                .columns(TableColumn::auto().at_least(90.0), headers.len())
                .vscroll(false)
                .header(ROW_HEIGHT, |mut header| {
                    header.col(|ui: &mut Ui| {
                        ui.strong("");
                    });
                    for name in &headers {
                        header.col(|ui: &mut Ui| {
                            ui.strong(*name);
                        });
                    }
                })
                .body(|mut body| {
                    for (label, cells) in &rows {
                        body.row(ROW_HEIGHT, |mut row| {
                            row.col(|ui: &mut Ui| {
                                ui.strong(*label);
                            });
                            for cell in cells {
                                row.col(|ui: &mut Ui| {
                                    ui.label(cell.as_str());
                                });
                            }
                        });
                    }
                });
        });
    });
}

fn format_stat(value: f64, is_count: bool) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if is_count {
        format_number(value)
    } else {
        format!("{value:.4}")
    }
}
