use eframe::egui::{self, Align2, Color32, Id, LayerId, Order, Pos2, RichText, Stroke, Vec2};

use crate::color::{self, ColorMap};
use crate::state::AppState;

const BALLOONS: usize = 24;
const RADIUS: f32 = 18.0;

// ---------------------------------------------------------------------------
// Welcome balloons and success toast
// ---------------------------------------------------------------------------

/// Draw the running celebration on top of everything, then retire it once
/// both parts have finished.
pub fn show(ctx: &egui::Context, state: &mut AppState) {
    let now = ctx.input(|i| i.time);
    state.expire_celebration(now);
    let Some(celebration) = state.celebration else {
        return;
    };
    let elapsed = celebration.elapsed(now);

    if elapsed < state.settings.celebration_secs {
        let progress = (elapsed / state.settings.celebration_secs) as f32;
        paint_balloons(ctx, progress);
    }
    if elapsed < state.settings.toast_secs {
        toast(ctx, state.strings().success);
    }

    ctx.request_repaint();
}

/// Horizontal slot, sway phase and speed for balloon `i`; a small LCG keeps
/// the layout stable from frame to frame.
fn balloon_seed(i: usize) -> (f32, f32, f32) {
    let mut x = (i as u64).wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = || {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((x >> 33) as f32) / (u32::MAX >> 1) as f32
    };
    (next(), next() * std::f32::consts::TAU, 0.7 + 0.6 * next())
}

fn paint_balloons(ctx: &egui::Context, progress: f32) {
    let screen = ctx.screen_rect();
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("balloons")));
    let palette = ColorMap::RdPu.ranked(6);
    let travel = screen.height() + 4.0 * RADIUS;

    for i in 0..BALLOONS {
        let (slot, phase, speed) = balloon_seed(i);
        let rise = (progress * speed * 1.3).min(1.3) * travel;
        let sway = (progress * 9.0 + phase).sin() * 14.0;
        let center = Pos2::new(
            screen.left() + slot * screen.width() + sway,
            screen.bottom() + 2.0 * RADIUS - rise,
        );
        if center.y < screen.top() - 3.0 * RADIUS {
            continue;
        }

        let fill = palette[i % palette.len()];
        let knot = center + Vec2::new(0.0, RADIUS * 1.15);
        painter.line_segment(
            [knot, knot + Vec2::new(sway * 0.2, RADIUS * 2.0)],
            Stroke::new(1.0, color::TITLE.gamma_multiply(0.6)),
        );
        painter.add(egui::epaint::EllipseShape::filled(
            center,
            Vec2::new(RADIUS * 0.85, RADIUS * 1.1),
            fill,
        ));
        painter.circle_filled(
            center + Vec2::new(-RADIUS * 0.3, -RADIUS * 0.4),
            RADIUS * 0.18,
            Color32::from_white_alpha(140),
        );
    }
}

fn toast(ctx: &egui::Context, text: &str) {
    egui::Area::new(Id::new("upload_toast"))
        .order(Order::Foreground)
        .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-16.0, -16.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(color::SIDEBAR)
                .stroke(Stroke::new(1.0, color::HISTOGRAM))
                .show(ui, |ui| {
                    ui.label(RichText::new(text).strong().color(color::TITLE));
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balloon_layout_is_stable_and_on_screen() {
        for i in 0..BALLOONS {
            let (slot, phase, speed) = balloon_seed(i);
            assert_eq!(balloon_seed(i), (slot, phase, speed));
            assert!((0.0..=1.0).contains(&slot), "slot {slot}");
            assert!((0.0..=std::f32::consts::TAU).contains(&phase));
            assert!((0.7..1.31).contains(&speed));
        }
        assert_ne!(balloon_seed(0).0, balloon_seed(1).0);
    }
}
