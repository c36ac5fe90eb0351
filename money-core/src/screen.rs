//! Screen navigation for the main window.
//!
//! The window has one region per [`Screen`]. Which region is visible is never
//! stored per region; it is derived from the single `current` field of the
//! [`Navigator`], so at most one region can be shown at any time.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

/// A logical view of the application, mapped onto one window region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Welcome view shown at startup.
    Initial,
    /// Bank statement upload view.
    FileUpload,
}

impl Screen {
    pub fn all() -> &'static [Screen] {
        &[Screen::Initial, Screen::FileUpload]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Initial => "Initial",
            Screen::FileUpload => "File Upload",
        }
    }

    /// Returns `true` when the navigation graph has an edge from `self` to `target`.
    ///
    /// The only edge is `Initial -> FileUpload`; there is no way back.
    pub fn can_transition_to(
        &self,
        target: Screen,
    ) -> bool {
        matches!((self, target), (Screen::Initial, Screen::FileUpload))
    }
}

impl fmt::Display for Screen {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("navigation already started on the {0} screen")]
    AlreadyStarted(Screen),

    #[error("navigation has not been started")]
    NotStarted,

    #[error("no transition from the {from} screen to the {to} screen")]
    NotAllowed { from: Screen, to: Screen },
}

/// Tracks the active screen.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Option<Screen>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active screen, or `None` before [`Navigator::start`].
    pub fn current(&self) -> Option<Screen> {
        self.current
    }

    pub fn is_visible(
        &self,
        screen: Screen,
    ) -> bool {
        self.current == Some(screen)
    }

    /// Shows the initial screen. Only valid once.
    pub fn start(&mut self) -> Result<Screen, NavigationError> {
        if let Some(current) = self.current {
            warn!(%current, "start requested twice");
            return Err(NavigationError::AlreadyStarted(current));
        }
        self.navigate(Screen::Initial)
    }

    /// Shows the file upload screen.
    ///
    /// Already being on the upload screen is not an error.
    pub fn navigate_to_upload(&mut self) -> Result<Screen, NavigationError> {
        self.navigate(Screen::FileUpload)
    }

    fn navigate(
        &mut self,
        target: Screen,
    ) -> Result<Screen, NavigationError> {
        match self.current {
            None if target == Screen::Initial => {}
            None => {
                warn!(%target, "navigation requested before start");
                return Err(NavigationError::NotStarted);
            }
            Some(from) if from == target => {
                debug!(%target, "already on requested screen");
                return Ok(target);
            }
            Some(from) if from.can_transition_to(target) => {}
            Some(from) => {
                warn!(%from, to = %target, "navigation rejected");
                return Err(NavigationError::NotAllowed { from, to: target });
            }
        }

        info!(from = ?self.current, to = %target, "navigating");
        self.current = Some(target);
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_navigator_shows_nothing() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), None);
        assert!(Screen::all().iter().all(|s| !nav.is_visible(*s)));
    }

    #[test]
    fn start_shows_only_initial() {
        let mut nav = Navigator::new();
        assert_eq!(nav.start(), Ok(Screen::Initial));
        assert!(nav.is_visible(Screen::Initial));
        assert!(!nav.is_visible(Screen::FileUpload));
    }

    #[test]
    fn upload_hides_initial() {
        let mut nav = Navigator::new();
        nav.start().unwrap();
        assert_eq!(nav.navigate_to_upload(), Ok(Screen::FileUpload));
        assert!(!nav.is_visible(Screen::Initial));
        assert!(nav.is_visible(Screen::FileUpload));
    }

    #[test]
    fn upload_before_start_is_rejected() {
        let mut nav = Navigator::new();
        assert_eq!(nav.navigate_to_upload(), Err(NavigationError::NotStarted));
        assert_eq!(nav.current(), None);
    }

    #[test]
    fn upload_twice_is_a_no_op() {
        let mut nav = Navigator::new();
        nav.start().unwrap();
        nav.navigate_to_upload().unwrap();
        assert_eq!(nav.navigate_to_upload(), Ok(Screen::FileUpload));
        assert_eq!(nav.current(), Some(Screen::FileUpload));
    }

    #[test]
    fn start_after_upload_does_not_reshow_initial() {
        let mut nav = Navigator::new();
        nav.start().unwrap();
        nav.navigate_to_upload().unwrap();
        assert_eq!(
            nav.start(),
            Err(NavigationError::AlreadyStarted(Screen::FileUpload))
        );
        assert!(!nav.is_visible(Screen::Initial));
    }

    #[test]
    fn only_edge_is_initial_to_upload() {
        assert!(Screen::Initial.can_transition_to(Screen::FileUpload));
        assert!(!Screen::FileUpload.can_transition_to(Screen::Initial));
        assert!(!Screen::Initial.can_transition_to(Screen::Initial));
    }
}
