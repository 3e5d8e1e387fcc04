use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use super::theme::Theme;

/// Represents all user prefs. Intended for saving to a file, editing in a
/// settings dialog, etc.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    theme: Theme,
}

impl UserPrefs {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Creates a UserPrefs instance from environment variables, with an
    /// in-code default.
    ///
    /// # Environment Variables (case-insensitive):
    /// - `EAZYSTORE_THEME`: "light" or "dark". Defaults to light.
    pub fn from_env() -> Self {
        let theme = env::var("EAZYSTORE_THEME")
            .ok()
            .and_then(|s| Theme::from_str(&s).ok())
            .unwrap_or_default();
        Self { theme }
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let prefs = UserPrefs::new(Theme::Dark);
        let json = serde_json::to_string(&prefs).unwrap();
        let back: UserPrefs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn new_sets_the_theme() {
        assert_eq!(UserPrefs::new(Theme::Dark).theme(), Theme::Dark);
        assert_eq!(UserPrefs::new(Theme::Light).theme(), Theme::Light);
    }
}
