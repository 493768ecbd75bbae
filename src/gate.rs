//! In-memory change detection for the observation loop.

use crate::appearance::Appearance;

/// Remembers the last propagated appearance.
///
/// The first observation always passes so a fresh session re-establishes
/// state left behind by an unknown prior session.
#[derive(Debug, Clone, Default)]
pub struct ChangeGate {
    last: Option<Appearance>,
}

impl ChangeGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `next`; returns whether propagation should run.
    pub fn observe(&mut self, next: Appearance) -> bool {
        let changed = self.last != Some(next);
        self.last = Some(next);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_always_passes() {
        let mut gate = ChangeGate::new();
        assert!(gate.observe(Appearance::Light));
        assert!(!gate.observe(Appearance::Light));
    }

    #[test]
    fn repeated_value_is_blocked_until_it_changes() {
        let mut gate = ChangeGate::new();
        assert!(gate.observe(Appearance::Dark));
        assert!(!gate.observe(Appearance::Dark));
        assert!(!gate.observe(Appearance::Dark));
        assert!(gate.observe(Appearance::Light));
        assert!(!gate.observe(Appearance::Light));
        assert!(gate.observe(Appearance::Dark));
    }
}
