//! Intro completion gate

use super::view::View;

/// Monotonic flag set once the intro sequence has finished
///
/// Until then the navbar and the home side navigation stay hidden and the
/// home page holds back its entrance animations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IntroGate {
    finished: bool,
}

impl IntroGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the intro as finished. Returns `true` only on the first call.
    pub fn complete(&mut self) -> bool {
        let first = !self.finished;
        self.finished = true;
        first
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the primary navigation chrome renders
    pub fn shows_chrome(&self) -> bool {
        self.finished
    }

    /// Whether the in-page side navigation renders
    pub fn shows_side_nav(&self, view: View) -> bool {
        self.finished && view == View::Home
    }

    /// Whether home entrance animations play
    pub fn plays_entrance(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_is_monotonic() {
        let mut gate = IntroGate::new();
        assert!(!gate.shows_chrome());
        assert!(gate.complete());
        assert!(!gate.complete());
        assert!(gate.is_finished());
    }

    #[test]
    fn test_side_nav_only_on_home() {
        let mut gate = IntroGate::new();
        assert!(!gate.shows_side_nav(View::Home));
        gate.complete();
        assert!(gate.shows_side_nav(View::Home));
        assert!(!gate.shows_side_nav(View::About));
    }
}
