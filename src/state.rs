use std::path::Path;

use crate::analysis::{self, AssociationView, DescriptiveView};
use crate::config::Settings;
use crate::data::classify::{classify, ColumnClasses};
use crate::data::error::LoadError;
use crate::data::loader;
use crate::data::model::Dataset;
use crate::i18n::{Language, Strings};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Descriptive,
    Association,
}

/// Outcome of the latest upload.
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    NoFile,
    Loaded {
        file_name: String,
        dataset: Dataset,
    },
    /// The page shows only the error until the next upload.
    Failed {
        file_name: String,
        message: String,
    },
}

/// Column chosen in each dropdown. `None` means "use the default option".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    pub category: Option<String>,
    pub numeric: Option<String>,
    pub cross_x: Option<String>,
    pub cross_y: Option<String>,
}

/// Views built for the current dataset and selections. Filled on demand for
/// the visible tab; emptied by every upload and every dropdown change, so
/// the statistics run once per interaction rather than once per frame.
#[derive(Debug, Default)]
pub struct ViewCache {
    classes: Option<ColumnClasses>,
    pub descriptive: Option<DescriptiveView>,
    pub association: Option<AssociationView>,
}

/// Balloons + toast shown once per session, after the first good upload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Celebration {
    pub started_at: f64,
}

impl Celebration {
    pub fn elapsed(&self, now: f64) -> f64 {
        (now - self.started_at).max(0.0)
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub settings: Settings,

    pub language: Language,

    pub load: LoadState,

    pub selections: Selections,

    pub views: ViewCache,

    pub tab: Tab,

    /// Session flag: the welcome celebration has already played.
    pub welcome_shown: bool,

    /// Running celebration, if any.
    pub celebration: Option<Celebration>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            language: Language::default(),
            load: LoadState::NoFile,
            selections: Selections::default(),
            views: ViewCache::default(),
            tab: Tab::default(),
            welcome_shown: false,
            celebration: None,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.load {
            LoadState::Loaded { dataset, .. } => Some(dataset),
            _ => None,
        }
    }

    /// Load a file picked from disk.
    pub fn open_path(&mut self, path: &Path, now: f64) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.ingest(name, loader::load_file(path), now);
    }

    /// Load a file whose bytes are already in memory (drag and drop).
    pub fn open_bytes(&mut self, file_name: &str, bytes: &[u8], now: f64) {
        self.ingest(file_name.to_string(), loader::load_bytes(file_name, bytes), now);
    }

    /// Replace the current dataset with a load result.
    ///
    /// A success resets the dropdowns and, the first time in the session,
    /// starts the celebration. A failure drops the previous dataset.
    pub fn ingest(&mut self, file_name: String, result: Result<Dataset, LoadError>, now: f64) {
        match result {
            Ok(dataset) => {
                let (rows, cols) = dataset.shape();
                log::info!("Loaded {file_name}: {rows} rows, {cols} columns");

                self.selections = Selections::default();
                self.views = ViewCache::default();
                self.load = LoadState::Loaded { file_name, dataset };

                if !self.welcome_shown {
                    self.welcome_shown = true;
                    self.celebration = Some(Celebration { started_at: now });
                }
            }
            Err(e) => {
                log::error!("Failed to load {file_name}: {e}");
                self.views = ViewCache::default();
                self.load = LoadState::Failed {
                    file_name,
                    message: e.to_string(),
                };
            }
        }
    }

    /// Build the view for the visible tab if the cache does not hold one.
    pub fn refresh_views(&mut self) {
        let LoadState::Loaded { dataset, .. } = &self.load else {
            return;
        };
        let views = &mut self.views;
        let classes = views
            .classes
            .get_or_insert_with(|| classify(dataset, self.settings.max_categories));

        match self.tab {
            Tab::Descriptive if views.descriptive.is_none() => {
                log::debug!("Building descriptive view");
                views.descriptive = Some(analysis::descriptive(
                    dataset,
                    classes,
                    &self.selections,
                    &self.settings,
                ));
            }
            Tab::Association if views.association.is_none() => {
                log::debug!("Building association view");
                views.association = Some(analysis::association(dataset, classes, &self.selections));
            }
            _ => {}
        }
    }

    /// Forget the views after a dropdown change. Column classes depend on the
    /// dataset alone and are kept until the next upload.
    pub fn selections_changed(&mut self) {
        self.views.descriptive = None;
        self.views.association = None;
    }

    /// Drop the celebration once both the balloons and the toast are done.
    pub fn expire_celebration(&mut self, now: f64) {
        let limit = self.settings.celebration_secs.max(self.settings.toast_secs);
        if self.celebration.is_some_and(|c| c.elapsed(now) > limit) {
            self.celebration = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &[u8] = b"Age,Gender\n25 years,F\n30 yrs,M\n";

    #[test]
    fn starts_with_no_file() {
        let state = AppState::default();
        assert!(matches!(state.load, LoadState::NoFile));
        assert!(!state.welcome_shown);
        assert!(state.dataset().is_none());
    }

    #[test]
    fn first_successful_load_celebrates_once() {
        let mut state = AppState::default();

        state.open_bytes("a.csv", CSV, 1.0);
        assert!(state.welcome_shown);
        assert_eq!(state.celebration, Some(Celebration { started_at: 1.0 }));

        state.celebration = None;
        state.open_bytes("b.csv", CSV, 2.0);
        assert!(state.welcome_shown);
        assert_eq!(state.celebration, None);
    }

    #[test]
    fn failure_does_not_set_the_welcome_flag() {
        let mut state = AppState::default();

        state.open_bytes("broken.csv", b"a,b\n1,2,3\n", 1.0);
        assert!(!state.welcome_shown);
        assert!(state.celebration.is_none());
        match &state.load {
            LoadState::Failed { file_name, message } => {
                assert_eq!(file_name, "broken.csv");
                assert!(message.contains("Expected 2 fields"));
            }
            other => panic!("unexpected state: {other:?}"),
        }

        state.open_bytes("good.csv", CSV, 2.0);
        assert!(state.welcome_shown);
        assert!(state.celebration.is_some());
    }

    #[test]
    fn failed_upload_replaces_previous_dataset() {
        let mut state = AppState::default();
        state.open_bytes("a.csv", CSV, 1.0);
        assert!(state.dataset().is_some());

        state.open_bytes("notes.txt", b"hello", 2.0);
        assert!(state.dataset().is_none());
        assert!(matches!(state.load, LoadState::Failed { .. }));
    }

    #[test]
    fn new_upload_resets_selections() {
        let mut state = AppState::default();
        state.selections.category = Some("Gender".into());
        state.open_bytes("a.csv", CSV, 1.0);
        assert_eq!(state.selections, Selections::default());
    }

    #[test]
    fn uploaded_ages_are_cleaned() {
        let mut state = AppState::default();
        state.open_bytes("a.csv", CSV, 0.0);
        let age = state.dataset().unwrap().column("Age").unwrap();
        assert_eq!(age.as_numeric().unwrap(), &[Some(25.0), Some(30.0)]);
    }

    #[test]
    fn views_are_built_once_per_interaction() {
        let mut state = AppState::default();
        state.open_bytes("a.csv", b"Gender,Region,Score\nF,W,1\nM,E,2\nF,E,3\n", 0.0);
        assert!(state.views.descriptive.is_none());

        state.refresh_views();
        let chosen = |state: &AppState| {
            let view = state.views.descriptive.as_ref().unwrap();
            view.categories.chart().unwrap().picker.selected.clone()
        };
        assert_eq!(chosen(&state), "Gender");
        assert!(state.views.association.is_none());

        // a later frame with no interaction reuses the cached view
        state.selections.category = Some("Region".into());
        state.refresh_views();
        assert_eq!(chosen(&state), "Gender");

        state.selections_changed();
        state.refresh_views();
        assert_eq!(chosen(&state), "Region");
    }

    #[test]
    fn switching_tabs_builds_the_other_view() {
        let mut state = AppState::default();
        state.open_bytes("a.csv", b"x,y\n1,2\n2,4\n3,5\n", 0.0);
        state.refresh_views();
        state.tab = Tab::Association;
        state.refresh_views();
        assert!(state.views.descriptive.is_some());
        let assoc = state.views.association.as_ref().unwrap();
        assert!(assoc.correlation.chart().is_some());
    }

    #[test]
    fn new_upload_clears_cached_views() {
        let mut state = AppState::default();
        state.open_bytes("a.csv", CSV, 0.0);
        state.refresh_views();
        assert!(state.views.descriptive.is_some());

        state.open_bytes("b.csv", b"Region\nW\n", 1.0);
        assert!(state.views.descriptive.is_none());
        state.refresh_views();
        let view = state.views.descriptive.as_ref().unwrap();
        assert_eq!(view.columns, 1);

        state.open_bytes("c.txt", b"nope", 2.0);
        state.refresh_views();
        assert!(state.views.descriptive.is_none());
    }

    #[test]
    fn celebration_expires_after_the_toast() {
        let mut state = AppState::default();
        state.open_bytes("a.csv", CSV, 10.0);

        state.expire_celebration(12.0);
        assert!(state.celebration.is_some());

        state.expire_celebration(10.0 + state.settings.toast_secs + 0.1);
        assert!(state.celebration.is_none());
        assert!(state.welcome_shown);
    }
}
