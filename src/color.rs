use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Pink pastel accents
// ---------------------------------------------------------------------------

pub const BACKGROUND_TOP: Color32 = Color32::from_rgb(0xff, 0xf0, 0xf6);
pub const BACKGROUND_BOTTOM: Color32 = Color32::from_rgb(0xf8, 0xbb, 0xd0);
pub const SIDEBAR: Color32 = Color32::from_rgb(0xfc, 0xe4, 0xec);
pub const TITLE: Color32 = Color32::from_rgb(0x88, 0x0e, 0x4f);
pub const TEXT: Color32 = Color32::from_rgb(0x4a, 0x14, 0x8c);
pub const PLOT_BACKGROUND: Color32 = Color32::from_rgb(0xff, 0xf0, 0xf6);
pub const GRID: Color32 = Color32::from_rgb(0xf8, 0xbb, 0xd0);
pub const HISTOGRAM: Color32 = Color32::from_rgb(0xec, 0x40, 0x7a);
pub const DENSITY: Color32 = Color32::from_rgb(0xad, 0x14, 0x57);
pub const INFO_FILL: Color32 = Color32::from_rgb(0xe3, 0xf2, 0xfd);
pub const INFO_TEXT: Color32 = Color32::from_rgb(0x0d, 0x47, 0xa1);
pub const WARNING_FILL: Color32 = Color32::from_rgb(0xff, 0xf8, 0xe1);
pub const WARNING_TEXT: Color32 = Color32::from_rgb(0x8d, 0x5b, 0x00);
pub const ERROR_FILL: Color32 = Color32::from_rgb(0xff, 0xeb, 0xee);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xb7, 0x1c, 0x1c);

// ---------------------------------------------------------------------------
// Sequential colour maps
// ---------------------------------------------------------------------------

/// Nine-stop sequential ramps (ColorBrewer), light to dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    /// Red-purple, used for correlations and category bars.
    RdPu,
    /// Purple-red, used for cross-tab counts.
    PuRd,
}

const RDPU: [u32; 9] = [
    0xfff7f3, 0xfde0dd, 0xfcc5c0, 0xfa9fb5, 0xf768a1, 0xdd3497, 0xae017e, 0x7a0177, 0x49006a,
];
const PURD: [u32; 9] = [
    0xf7f4f9, 0xe7e1ef, 0xd4b9da, 0xc994c7, 0xdf65b0, 0xe7298a, 0xce1256, 0x980043, 0x67001f,
];

fn hex_to_linear(hex: u32) -> LinSrgb {
    let rgb = Srgb::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    );
    rgb.into_linear()
}

fn to_color32(lin: LinSrgb) -> Color32 {
    let rgb: Srgb = Srgb::from_linear(lin);
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

impl ColorMap {
    fn stops(self) -> &'static [u32; 9] {
        match self {
            ColorMap::RdPu => &RDPU,
            ColorMap::PuRd => &PURD,
        }
    }

    /// Colour at position `t` in `0.0..=1.0`, interpolated in linear RGB.
    /// NaN maps to the lightest stop.
    pub fn sample(self, t: f64) -> Color32 {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (stops.len() - 1) as f64;
        let lo = scaled.floor() as usize;
        let hi = (lo + 1).min(stops.len() - 1);
        let frac = (scaled - lo as f64) as f32;
        to_color32(hex_to_linear(stops[lo]).mix(hex_to_linear(stops[hi]), frac))
    }

    /// Colour for `value` on a scale spanning `min..=max`.
    pub fn scaled(self, value: f64, min: f64, max: f64) -> Color32 {
        let span = max - min;
        if span.abs() < f64::EPSILON {
            return self.sample(0.5);
        }
        self.sample((value - min) / span)
    }

    /// `n` colours evenly spread over the darker half of the ramp, darkest
    /// first. Used to colour ranked bars.
    pub fn ranked(self, n: usize) -> Vec<Color32> {
        match n {
            0 => Vec::new(),
            1 => vec![self.sample(0.75)],
            _ => (0..n)
                .map(|i| self.sample(1.0 - 0.6 * i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_text(background: Color32) -> Color32 {
    let channel = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    let luminance = 0.2126 * channel(background.r())
        + 0.7152 * channel(background.g())
        + 0.0722 * channel(background.b());
    if luminance > 0.408 {
        Color32::from_rgb(0x26, 0x26, 0x26)
    } else {
        Color32::WHITE
    }
}
