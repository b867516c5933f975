//! Navigation intents and the sink the hosting shell plugs in.
//!
//! The library never navigates by itself. State transitions and route guards
//! return [`NavigationIntent`] values for the shell to interpret; the one
//! exception is the HTTP client's forced session reset, which has no caller
//! to hand an intent to and goes through the injected [`Navigator`] instead.

use std::sync::Mutex;

/// Where the shell should send the user next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// The unauthenticated landing screen (login form).
    ToLogin,
    /// The default authenticated landing screen.
    ToDashboard,
}

/// Sink for navigations the library must force out-of-band.
pub trait Navigator: Send + Sync {
    fn navigate(&self, intent: NavigationIntent);
}

/// Navigator that only logs. Useful for shells that poll session state
/// instead of reacting to forced navigations.
#[derive(Debug, Default)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        tracing::debug!("navigation intent dropped: {:?}", intent);
    }
}

/// Records every forced navigation. Test double, also handy for shells that
/// drain intents on their own schedule.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    intents: Mutex<Vec<NavigationIntent>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded intents and clears the record.
    pub fn drain(&self) -> Vec<NavigationIntent> {
        std::mem::take(&mut *self.intents.lock().expect("navigator lock poisoned"))
    }

    pub fn recorded(&self) -> Vec<NavigationIntent> {
        self.intents.lock().expect("navigator lock poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        self.intents
            .lock()
            .expect("navigator lock poisoned")
            .push(intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_navigator_records_in_order() {
        // Given a recording navigator
        let navigator = RecordingNavigator::new();

        // When navigating twice
        navigator.navigate(NavigationIntent::ToLogin);
        navigator.navigate(NavigationIntent::ToDashboard);

        // Then both intents are recorded in order
        assert_eq!(
            navigator.recorded(),
            vec![NavigationIntent::ToLogin, NavigationIntent::ToDashboard]
        );
    }

    #[test]
    fn test_drain_empties_the_record() {
        let navigator = RecordingNavigator::new();
        navigator.navigate(NavigationIntent::ToLogin);

        let drained = navigator.drain();

        assert_eq!(drained, vec![NavigationIntent::ToLogin]);
        assert!(navigator.recorded().is_empty());
    }
}
