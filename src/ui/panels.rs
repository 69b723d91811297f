use eframe::egui::{self, RichText, Ui};

use crate::color;
use crate::data::loader::SourceFormat;
use crate::i18n::{Language, Strings};
use crate::state::{AppState, LoadState};

// ---------------------------------------------------------------------------
// Left side panel – language and upload
// ---------------------------------------------------------------------------

/// Render the sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("🌸").size(56.0));
    });
    ui.add_space(4.0);

    ui.strong(state.strings().language_label);
    let mut language = state.language;
    egui::ComboBox::from_id_salt("language")
        .selected_text(language.code())
        .show_ui(ui, |ui: &mut Ui| {
            for lang in Language::ALL {
                ui.selectable_value(&mut language, lang, lang.code());
            }
        });
    if language != state.language {
        log::debug!("Language switched to {language}");
        state.language = language;
    }

    let strings = state.strings();
    ui.add_space(8.0);
    ui.heading(strings.sidebar_title);
    ui.separator();

    ui.label(strings.upload_label);
    if ui.button(strings.browse).clicked() {
        let now = ui.input(|i| i.time);
        open_file_dialog(state, now);
    }
    ui.label(RichText::new(strings.drop_hint).small().weak());

    match &state.load {
        LoadState::Loaded { file_name, .. } => {
            ui.add_space(6.0);
            ui.label(format!("📄 {}: {file_name}", strings.loaded_file));
        }
        LoadState::Failed { file_name, .. } => {
            ui.add_space(6.0);
            ui.label(RichText::new(format!("📄 {file_name}")).color(color::ERROR_TEXT));
        }
        LoadState::NoFile => {}
    }
}

// ---------------------------------------------------------------------------
// Page header
// ---------------------------------------------------------------------------

/// Title, welcome line and separator at the top of the main area.
pub fn header(ui: &mut Ui, strings: &Strings) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(strings.title)
                .size(32.0)
                .strong()
                .color(color::TITLE),
        );
        ui.label(strings.welcome);
    });
    ui.separator();
}

// ---------------------------------------------------------------------------
// File input
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState, now: f64) {
    let file = rfd::FileDialog::new()
        .set_title(state.strings().upload_label)
        .add_filter("CSV / Excel", &SourceFormat::EXTENSIONS)
        .add_filter("CSV", &["csv"])
        .add_filter("Excel", &["xlsx"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path, now);
    }
}

/// Load the first file dropped onto the window, if any.
pub fn handle_dropped_files(ctx: &egui::Context, state: &mut AppState) {
    let (dropped, now) = ctx.input(|i| (i.raw.dropped_files.first().cloned(), i.time));
    let Some(file) = dropped else {
        return;
    };

    if let Some(bytes) = &file.bytes {
        let name = if file.name.is_empty() {
            file.path
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            file.name.clone()
        };
        state.open_bytes(&name, bytes, now);
    } else if let Some(path) = &file.path {
        state.open_path(path, now);
    } else {
        log::warn!("Dropped file '{}' has neither a path nor contents", file.name);
    }
}
