//! Defines the mutable, reactive state for the application's UI.

use api::prefs::theme::Theme;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The chrome theme currently in effect. Read once from the server at
    /// startup, written back on every toggle.
    pub theme: Signal<Theme>,
}
