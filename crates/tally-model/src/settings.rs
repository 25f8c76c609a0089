//! Read-only configuration handed to the rendering layer.

use tally_style::Theme;

use crate::record::Observation;

/// Configuration consumed by group views and default-tally rendering.
///
/// Settings are shared by reference across all groups during rendering and
/// never mutated by the update engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// The active observation theme.
    pub theme: Theme,
    /// Quick-pick observations, keyed by topic id.
    pub observations: Vec<(String, Observation)>,
    /// Whether group tallies are rendered.
    pub show_tally: bool,
}

impl Settings {
    /// Create settings around a theme.
    #[must_use]
    pub fn new(theme: Theme, observations: Vec<(String, Observation)>, show_tally: bool) -> Self {
        Self {
            theme,
            observations,
            show_tally,
        }
    }

    /// The seed observations shared by every group at quiz construction.
    #[must_use]
    pub fn seed_observations(&self) -> Vec<Observation> {
        self.observations.iter().map(|(_, obs)| obs.clone()).collect()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(Theme::default(), Vec::new(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shows_tally_with_standard_theme() {
        let settings = Settings::default();
        assert!(settings.show_tally);
        assert_eq!(settings.theme, Theme::default());
        assert!(settings.seed_observations().is_empty());
    }

    #[test]
    fn seed_observations_drop_ids() {
        let settings = Settings::new(
            Theme::default(),
            vec![("obs".to_owned(), Observation::new("obs", "on task"))],
            false,
        );
        let seed = settings.seed_observations();
        assert_eq!(seed, vec![Observation::new("obs", "on task")]);
    }
}
