use eframe::egui::epaint::Mesh;
use eframe::egui::{self, Color32, Shape};

use crate::color;

/// Install the pink pastel light theme.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.override_text_color = Some(color::TEXT);
    visuals.panel_fill = color::SIDEBAR;
    visuals.window_fill = Color32::WHITE;
    visuals.extreme_bg_color = color::PLOT_BACKGROUND;
    visuals.faint_bg_color = Color32::from_rgb(0xfd, 0xf2, 0xf7);
    visuals.hyperlink_color = color::TITLE;
    visuals.selection.bg_fill = color::BACKGROUND_BOTTOM;
    visuals.selection.stroke.color = color::TITLE;
    visuals.widgets.inactive.weak_bg_fill = Color32::WHITE;
    visuals.widgets.inactive.bg_fill = Color32::WHITE;
    visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(0xfc, 0xe4, 0xec);
    visuals.widgets.active.weak_bg_fill = color::BACKGROUND_BOTTOM;

    ctx.set_theme(egui::Theme::Light);
    ctx.set_visuals_of(egui::Theme::Light, visuals);
}

/// Paint the diagonal background gradient behind every panel.
pub fn paint_background(ctx: &egui::Context) {
    let rect = ctx.screen_rect();
    let painter = ctx.layer_painter(egui::LayerId::background());

    let mid = lerp_color(color::BACKGROUND_TOP, color::BACKGROUND_BOTTOM, 0.5);
    let mut mesh = Mesh::default();
    // top-left, top-right, bottom-right, bottom-left
    mesh.colored_vertex(rect.left_top(), color::BACKGROUND_TOP);
    mesh.colored_vertex(rect.right_top(), mid);
    mesh.colored_vertex(rect.right_bottom(), color::BACKGROUND_BOTTOM);
    mesh.colored_vertex(rect.left_bottom(), mid);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Central panel frame that lets the gradient show through.
pub fn transparent_frame(ctx: &egui::Context) -> egui::Frame {
    egui::Frame::central_panel(&ctx.style()).fill(Color32::TRANSPARENT)
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
