use eframe::egui::{self, RichText};

use crate::color;
use crate::state::{AppState, LoadState, Tab};
use crate::theme;
use crate::ui::{self, association, celebration, descriptive, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SurveyDashboardApp {
    pub state: AppState,
}

impl SurveyDashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        theme::apply(&cc.egui_ctx);
        Self { state }
    }
}

impl eframe::App for SurveyDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        theme::paint_background(ctx);
        panels::handle_dropped_files(ctx, &mut self.state);

        // ---- Left side panel: language and upload ----
        egui::SidePanel::left("upload_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard ----
        egui::CentralPanel::default()
            .frame(theme::transparent_frame(ctx))
            .show(ctx, |ui| {
                let strings = self.state.strings();
                panels::header(ui, strings);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let state = &mut self.state;

                        if state.dataset().is_some() {
                            ui.horizontal(|ui| {
                                ui.selectable_value(
                                    &mut state.tab,
                                    Tab::Descriptive,
                                    RichText::new(strings.desc_header).strong(),
                                );
                                ui.selectable_value(
                                    &mut state.tab,
                                    Tab::Association,
                                    RichText::new(strings.assoc_header).strong(),
                                );
                            });
                            ui.separator();
                        }
                        state.refresh_views();

                        let changed = match &state.load {
                            LoadState::NoFile => {
                                ui::callout(ui, strings.no_data, color::INFO_FILL, color::INFO_TEXT);
                                false
                            }
                            LoadState::Failed { message, .. } => {
                                ui::callout(
                                    ui,
                                    &format!("{}: {message}", strings.load_error),
                                    color::ERROR_FILL,
                                    color::ERROR_TEXT,
                                );
                                false
                            }
                            LoadState::Loaded { dataset, .. } => match state.tab {
                                Tab::Descriptive => state.views.descriptive.as_ref().is_some_and(|view| {
                                    descriptive::show(
                                        ui,
                                        view,
                                        dataset,
                                        &mut state.selections,
                                        &state.settings,
                                        strings,
                                    )
                                }),
                                Tab::Association => state.views.association.as_ref().is_some_and(|view| {
                                    association::show(ui, view, &mut state.selections, strings)
                                }),
                            },
                        };

                        if changed {
                            state.selections_changed();
                            ui.ctx().request_repaint();
                        }
                    });
            });

        celebration::show(ctx, &mut self.state);
    }
}
