//! Single-click vs. double-click disambiguation, keyed per activatable target.
//!
//! The first press on a target selects it and opens an intent window. A second press on the same
//! target while that window is open activates it. When the window lapses the press resolves as
//! select-only. Windows of different targets never interact.

use std::collections::BTreeMap;

use crate::{
    model::TargetId,
    timer::{ScopedTimer, TimerCommand, TimerSlot, TimerToken},
};

const DEFAULT_INTENT_WINDOW_MS: u32 = 400;

/// Meaning of one press on an activatable target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressIntent {
    /// First press: select now, wait for a possible second press.
    Select,
    /// Second press inside the intent window.
    Activate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickIntentClassifier {
    window_ms: u32,
    pending: BTreeMap<TargetId, ScopedTimer>,
}

impl Default for ClickIntentClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_INTENT_WINDOW_MS)
    }
}

impl ClickIntentClassifier {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            pending: BTreeMap::new(),
        }
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    pub fn is_pending(&self, id: &TargetId) -> bool {
        self.pending.get(id).is_some_and(ScopedTimer::is_armed)
    }

    /// Classifies a press on `id` and returns the timer request that goes with it.
    pub fn press(&mut self, id: &TargetId) -> (PressIntent, TimerCommand) {
        let window_ms = self.window_ms;
        let timer = self
            .pending
            .entry(id.clone())
            .or_insert_with(|| ScopedTimer::once(TimerSlot::ClickIntent(id.clone())));
        match timer.cancel() {
            Some(cancel) => (PressIntent::Activate, cancel),
            None => (PressIntent::Select, timer.arm(window_ms)),
        }
    }

    /// Resolves a lapsed intent window. Returns the target whose press stays select-only.
    pub fn fire(&mut self, token: &TimerToken) -> Option<TargetId> {
        let TimerSlot::ClickIntent(id) = &token.slot else {
            return None;
        };
        let timer = self.pending.get_mut(id)?;
        timer.fire(token).then(|| id.clone())
    }

    pub fn cancel_all(&mut self) -> Vec<TimerCommand> {
        self.pending
            .values_mut()
            .filter_map(ScopedTimer::cancel)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn token_of(command: &TimerCommand) -> TimerToken {
        match command {
            TimerCommand::Schedule { token, .. } | TimerCommand::Cancel(token) => token.clone(),
        }
    }

    #[test]
    fn second_press_inside_window_activates() {
        let mut classifier = ClickIntentClassifier::new(400);
        let id = TargetId::new("fiches-gratuit");

        let (first, schedule) = classifier.press(&id);
        let (second, cancel) = classifier.press(&id);

        assert_eq!(first, PressIntent::Select);
        assert_eq!(second, PressIntent::Activate);
        assert_eq!(cancel, TimerCommand::Cancel(token_of(&schedule)));
        assert!(!classifier.is_pending(&id));
        assert_eq!(classifier.fire(&token_of(&schedule)), None);
    }

    #[test]
    fn lapsed_window_resolves_select_only_and_rearms_next_press() {
        let mut classifier = ClickIntentClassifier::new(400);
        let id = TargetId::new("api");

        let (_, schedule) = classifier.press(&id);
        assert_eq!(classifier.fire(&token_of(&schedule)), Some(id.clone()));
        assert!(!classifier.is_pending(&id));

        let (intent, _) = classifier.press(&id);
        assert_eq!(intent, PressIntent::Select);
    }

    #[test]
    fn targets_keep_independent_windows() {
        let mut classifier = ClickIntentClassifier::new(400);
        let a = TargetId::new("a");
        let b = TargetId::new("b");

        let (_, schedule_a) = classifier.press(&a);
        let (intent_b, _) = classifier.press(&b);
        let (intent_a, _) = classifier.press(&a);

        assert_eq!(intent_b, PressIntent::Select);
        assert_eq!(intent_a, PressIntent::Activate);
        assert!(classifier.is_pending(&b));
        assert_eq!(classifier.fire(&token_of(&schedule_a)), None);
    }

    #[test]
    fn cancel_all_clears_every_pending_window() {
        let mut classifier = ClickIntentClassifier::default();
        classifier.press(&TargetId::new("a"));
        classifier.press(&TargetId::new("b"));

        assert_eq!(classifier.cancel_all().len(), 2);
        assert!(classifier.cancel_all().is_empty());
        assert_eq!(classifier.window_ms(), 400);
    }
}
