use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::color::{self, contrast_text, ColorMap};

// ---------------------------------------------------------------------------
// Annotated heatmap
// ---------------------------------------------------------------------------

/// A labelled grid of values to paint. `None` cells are left blank.
pub struct Heatmap<'a> {
    pub row_labels: &'a [String],
    pub col_labels: &'a [String],
    pub values: Vec<Vec<Option<f64>>>,
    pub colormap: ColorMap,
    /// Text drawn inside each cell.
    pub annotate: fn(f64) -> String,
}

const CELL_MIN: f32 = 28.0;
const CELL_MAX: f32 = 72.0;
const LABEL_FONT: f32 = 12.0;
const COLORBAR_WIDTH: f32 = 14.0;
const COLORBAR_GAP: f32 = 12.0;
const COLORBAR_STEPS: usize = 48;

impl Heatmap<'_> {
    fn value_range(&self) -> Option<(f64, f64)> {
        let mut present = self.values.iter().flatten().flatten().copied();
        let first = present.next()?;
        Some(present.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Paint the heatmap into the available width.
    pub fn show(&self, ui: &mut Ui) {
        let rows = self.row_labels.len();
        let cols = self.col_labels.len();
        if rows == 0 || cols == 0 {
            return;
        }

        let font = FontId::proportional(LABEL_FONT);
        let label_width = |labels: &[String]| {
            labels
                .iter()
                .map(|l| l.chars().count())
                .max()
                .unwrap_or(0)
                .min(24) as f32
                * LABEL_FONT
                * 0.6
                + 8.0
        };
        let left = label_width(self.row_labels);
        let bottom = label_width(self.col_labels).min(140.0);
        let right = COLORBAR_GAP + COLORBAR_WIDTH + 48.0;

        let available = ui.available_width() - left - right;
        let cell = (available / cols as f32).clamp(CELL_MIN, CELL_MAX);
        let grid_size = Vec2::new(cell * cols as f32, cell * rows as f32);
        let total = Vec2::new(left + grid_size.x + right, grid_size.y + bottom);

        let (response, painter) = ui.allocate_painter(total, Sense::hover());
        let origin = response.rect.min + Vec2::new(left, 0.0);
        let (lo, hi) = self.value_range().unwrap_or((0.0, 1.0));

        // cells
        for (r, row) in self.values.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                let min = origin + Vec2::new(c as f32 * cell, r as f32 * cell);
                let rect = Rect::from_min_size(min, Vec2::splat(cell));
                let Some(v) = value else {
                    painter.rect_filled(rect, 0.0, Color32::WHITE);
                    continue;
                };
                let fill = self.colormap.scaled(*v, lo, hi);
                painter.rect_filled(rect, 0.0, fill);
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    (self.annotate)(*v),
                    font.clone(),
                    contrast_text(fill),
                );
            }
        }

        // row labels, right-aligned against the grid
        for (r, label) in self.row_labels.iter().enumerate() {
            let pos = origin + Vec2::new(-6.0, (r as f32 + 0.5) * cell);
            painter.text(pos, Align2::RIGHT_CENTER, truncate(label), font.clone(), color::TEXT);
        }

        // column labels, under the grid
        for (c, label) in self.col_labels.iter().enumerate() {
            let pos = origin + Vec2::new((c as f32 + 0.5) * cell, grid_size.y + 6.0);
            painter.text(pos, Align2::CENTER_TOP, truncate(label), font.clone(), color::TEXT);
        }

        self.paint_colorbar(&painter, origin + Vec2::new(grid_size.x + COLORBAR_GAP, 0.0), grid_size.y, lo, hi);
    }

    fn paint_colorbar(&self, painter: &egui::Painter, top_left: Pos2, height: f32, lo: f64, hi: f64) {
        let step = height / COLORBAR_STEPS as f32;
        for i in 0..COLORBAR_STEPS {
            // top of the bar is the high end
            let t = 1.0 - (i as f64 + 0.5) / COLORBAR_STEPS as f64;
            let rect = Rect::from_min_size(
                top_left + Vec2::new(0.0, i as f32 * step),
                Vec2::new(COLORBAR_WIDTH, step + 0.5),
            );
            painter.rect_filled(rect, 0.0, self.colormap.sample(t));
        }

        let outline = Stroke::new(1.0, color::GRID);
        let right = top_left.x + COLORBAR_WIDTH;
        painter.line_segment([top_left, Pos2::new(right, top_left.y)], outline);
        painter.line_segment(
            [Pos2::new(top_left.x, top_left.y + height), Pos2::new(right, top_left.y + height)],
            outline,
        );

        let font = FontId::proportional(LABEL_FONT - 1.0);
        let label_x = right + 4.0;
        painter.text(
            Pos2::new(label_x, top_left.y),
            Align2::LEFT_TOP,
            (self.annotate)(hi),
            font.clone(),
            color::TEXT,
        );
        painter.text(
            Pos2::new(label_x, top_left.y + height),
            Align2::LEFT_BOTTOM,
            (self.annotate)(lo),
            font,
            color::TEXT,
        );
    }
}

fn truncate(label: &str) -> String {
    const MAX: usize = 24;
    if label.chars().count() <= MAX {
        label.to_string()
    } else {
        let head: String = label.chars().take(MAX - 1).collect();
        format!("{head}…")
    }
}

/// Two-decimal annotation for correlations.
pub fn two_decimals(v: f64) -> String {
    format!("{v:.2}")
}

/// Integer annotation for counts.
pub fn integer(v: f64) -> String {
    format!("{}", v.round() as i64)
}
