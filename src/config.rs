// ---------------------------------------------------------------------------
// Settings – compiled-in tunables
// ---------------------------------------------------------------------------

/// Knobs for classification, charts and window layout. There is no config
/// file; `main` uses [`Settings::default`] and tests tweak fields directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Text columns with this many distinct values or more are hidden from
    /// every dropdown.
    pub max_categories: usize,
    /// Bars in the categorical distribution chart.
    pub top_categories: usize,
    /// Height of the raw data preview table, in points.
    pub preview_height: f32,
    /// Samples along the density overlay.
    pub kde_points: usize,
    /// Upper bound on histogram bins.
    pub max_histogram_bins: usize,
    /// How long the welcome balloons float, in seconds.
    pub celebration_secs: f64,
    /// How long the success toast stays up, in seconds.
    pub toast_secs: f64,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_categories: 50,
            top_categories: 10,
            preview_height: 500.0,
            kde_points: 200,
            max_histogram_bins: 500,
            celebration_secs: 4.0,
            toast_secs: 5.0,
            window_size: [1280.0, 860.0],
            min_window_size: [720.0, 480.0],
        }
    }
}
