pub mod association;
pub mod celebration;
pub mod charts;
pub mod descriptive;
pub mod heatmap;
pub mod panels;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::analysis::{Notice, Severity};
use crate::color;
use crate::i18n::Strings;

/// Coloured callout box (info / warning / error).
pub fn callout(ui: &mut Ui, text: &str, fill: Color32, text_color: Color32) {
    egui::Frame::group(ui.style())
        .fill(fill)
        .stroke(egui::Stroke::NONE)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(text_color));
        });
}

/// Placeholder shown instead of a chart.
pub fn notice(ui: &mut Ui, notice: Notice, strings: &Strings) {
    let (fill, text_color) = match notice.severity() {
        Severity::Info => (color::INFO_FILL, color::INFO_TEXT),
        Severity::Warning => (color::WARNING_FILL, color::WARNING_TEXT),
    };
    callout(ui, notice.text(strings), fill, text_color);
}

/// Section title in the dashboard's title colour.
pub fn subheader(ui: &mut Ui, text: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(text).size(20.0).strong().color(color::TITLE));
    ui.add_space(4.0);
}

/// Dropdown over `options`; writes the new choice into `choice`.
/// Returns `true` when the user picked something.
pub fn column_picker(
    ui: &mut Ui,
    id: &str,
    label: &str,
    options: &[String],
    selected: &str,
    choice: &mut Option<String>,
) -> bool {
    let mut changed = false;
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .width(ui.available_width().min(320.0))
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                if ui.selectable_label(option == selected, option.as_str()).clicked() {
                    *choice = Some(option.clone());
                    changed = true;
                }
            }
        });
    changed
}
