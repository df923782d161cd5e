use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Overview,
    CustomerCenteredSelling,
    BookPipeline,
    ScriptDatabase,
    SubmitIntel,
    TrainingTechniques,
}

impl View {
    /// Navigation order; the first entry is home.
    pub const ALL: [View; 6] = [
        View::Overview,
        View::CustomerCenteredSelling,
        View::BookPipeline,
        View::ScriptDatabase,
        View::SubmitIntel,
        View::TrainingTechniques,
    ];

    pub const HOME: View = View::ALL[0];

    pub fn label(self) -> &'static str {
        match self {
            View::Overview => "🏠 Overview",
            View::CustomerCenteredSelling => "📖 Customer Centered Selling",
            View::BookPipeline => "📚 Book Pipeline",
            View::ScriptDatabase => "🎭 Script Database",
            View::SubmitIntel => "🕵️ Submit Intel",
            View::TrainingTechniques => "🧠 Training Techniques",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::CustomerCenteredSelling => "customer-centered-selling",
            View::BookPipeline => "book-pipeline",
            View::ScriptDatabase => "script-database",
            View::SubmitIntel => "submit-intel",
            View::TrainingTechniques => "training-techniques",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for View {
    type Err = Error;

    /// Accepts either the navigation label or the slug.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw_trimmed = raw.trim();
        View::ALL
            .into_iter()
            .find(|v| v.label() == raw_trimmed || v.slug().eq_ignore_ascii_case(raw_trimmed))
            .ok_or_else(|| Error::InvalidNavigationState(raw.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    current: View,
}

/// Result of a navigation step: the state to store and whether the view must
/// be rendered again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: NavState,
    pub rerender: bool,
}

impl NavState {
    pub fn new(view: View) -> Self {
        Self { current: view }
    }

    pub fn current(self) -> View {
        self.current
    }

    /// Rebuilds state from what the session stored. Missing or corrupted
    /// values start over at home.
    pub fn restore(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<View>) {
            None => Self::default(),
            Some(Ok(view)) => Self::new(view),
            Some(Err(err)) => {
                tracing::warn!(%err, "resetting navigation to home");
                Self::default()
            }
        }
    }

    /// Selection from the navigation control. Re-renders only on change.
    #[must_use]
    pub fn select(self, label: &str) -> Transition {
        let next = Self::new(resolve(label));
        Transition {
            state: next,
            rerender: next != self,
        }
    }

    /// Programmatic navigation from an in-page button. Always re-renders,
    /// even when the target is already current.
    #[must_use]
    pub fn navigate_to(self, label: &str) -> Transition {
        Transition {
            state: Self::new(resolve(label)),
            rerender: true,
        }
    }
}

fn resolve(label: &str) -> View {
    label.parse().unwrap_or_else(|err: Error| {
        tracing::warn!(%err, "unknown view; falling back to home");
        View::HOME
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        assert_eq!(NavState::default().current(), View::Overview);
        assert_eq!(View::HOME, View::Overview);
    }

    #[test]
    fn select_by_label_and_slug() {
        let state = NavState::default();
        let t = state.select("🎭 Script Database");
        assert_eq!(t.state.current(), View::ScriptDatabase);
        assert!(t.rerender);

        let t = t.state.select("training-techniques");
        assert_eq!(t.state.current(), View::TrainingTechniques);
    }

    #[test]
    fn select_same_view_does_not_rerender() {
        let state = NavState::new(View::BookPipeline);
        let t = state.select("📚 Book Pipeline");
        assert_eq!(t.state, state);
        assert!(!t.rerender);
    }

    #[test]
    fn navigate_to_current_view_is_idempotent_and_rerenders() {
        let state = NavState::new(View::SubmitIntel);
        let t = state.navigate_to("🕵️ Submit Intel");
        assert_eq!(t.state, state);
        assert!(t.rerender);
        assert_eq!(t.state.navigate_to("submit-intel"), t);
    }

    #[test]
    fn unknown_label_resets_to_home() {
        let state = NavState::new(View::ScriptDatabase);
        assert_eq!(state.navigate_to("📦 Warehouse").state.current(), View::Overview);
        assert_eq!(state.select("").state.current(), View::Overview);
    }

    #[test]
    fn restore_falls_back_to_home() {
        assert_eq!(NavState::restore(None).current(), View::Overview);
        assert_eq!(NavState::restore(Some("%%garbage")).current(), View::Overview);
        assert_eq!(
            NavState::restore(Some("book-pipeline")).current(),
            View::BookPipeline
        );
    }

    #[test]
    fn labels_and_slugs_round_trip() {
        for view in View::ALL {
            assert_eq!(view.label().parse::<View>().unwrap(), view);
            assert_eq!(view.slug().parse::<View>().unwrap(), view);
        }
    }
}
