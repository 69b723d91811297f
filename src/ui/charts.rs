use eframe::egui::{Stroke, Ui};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints};

use crate::analysis::HistogramPlot;
use crate::color::{self, ColorMap};
use crate::data::model::format_number;

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Ranked categories (horizontal bars)
// ---------------------------------------------------------------------------

/// Horizontal bar chart of the most frequent values, most frequent on top.
pub fn top_values_chart(ui: &mut Ui, id: &str, column: &str, counts: &[(String, usize)], count_label: &str) {
    let n = counts.len();
    let colors = ColorMap::RdPu.ranked(n);

    let bars: Vec<Bar> = counts
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(rank, ((label, count), fill))| {
            // rank 0 sits at the top of the y axis
            Bar::new((n - 1 - rank) as f64, *count as f64)
                .width(0.8)
                .name(label)
                .fill(fill)
                .stroke(Stroke::new(1.0, color::TITLE))
        })
        .collect();

    let labels: Vec<String> = counts.iter().rev().map(|(label, _)| label.clone()).collect();
    let y_labels = move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
        let pos = mark.value;
        if pos.fract().abs() > f64::EPSILON || pos < 0.0 {
            return String::new();
        }
        labels.get(pos as usize).cloned().unwrap_or_default()
    };

    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label(count_label.to_string())
        .y_axis_label(column.to_string())
        .y_axis_formatter(y_labels)
        .include_x(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().name(column));
        });
}

// ---------------------------------------------------------------------------
// Histogram with density overlay
// ---------------------------------------------------------------------------

pub fn histogram_chart(ui: &mut Ui, id: &str, column: &str, plot: &HistogramPlot, count_label: &str) {
    let width = plot.histogram.bin_width();
    let bars: Vec<Bar> = plot
        .histogram
        .bars()
        .map(|(center, count)| {
            Bar::new(center, count as f64)
                .width(width)
                .fill(color::HISTOGRAM.gamma_multiply(0.75))
                .stroke(Stroke::new(1.0, color::HISTOGRAM))
        })
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label(column.to_string())
        .y_axis_label(count_label.to_string())
        .x_axis_formatter(|mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            format_number(mark.value)
        })
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(color::HISTOGRAM).name(column));
            if let Some(curve) = &plot.density {
                let points: PlotPoints = curve.iter().copied().collect();
                plot_ui.line(Line::new(points).color(color::DENSITY).width(2.0));
            }
        });
}
