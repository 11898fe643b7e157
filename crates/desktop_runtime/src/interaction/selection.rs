//! Single-slot icon selection with press flash feedback.

use crate::{
    model::TargetId,
    timer::{ScopedTimer, TimerCommand, TimerSlot, TimerToken},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<TargetId>,
    flashing: bool,
    flash: ScopedTimer,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected: None,
            flashing: false,
            flash: ScopedTimer::once(TimerSlot::IconFlash),
        }
    }
}

impl SelectionState {
    pub fn selected(&self) -> Option<&TargetId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &TargetId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn is_flashing(&self, id: &TargetId) -> bool {
        self.flashing && self.is_selected(id)
    }

    /// Replaces the current selection with `id` and restarts the flash.
    pub fn select(&mut self, id: TargetId, flash_ms: u32) -> Vec<TimerCommand> {
        self.selected = Some(id);
        self.flashing = true;
        self.flash.rearm(flash_ms)
    }

    pub fn clear(&mut self) -> Option<TimerCommand> {
        self.selected = None;
        self.flashing = false;
        self.flash.cancel()
    }

    /// Ends the flash when `token` is the live flash timer.
    pub fn fire(&mut self, token: &TimerToken) -> bool {
        if !self.flash.fire(token) {
            return false;
        }
        self.flashing = false;
        true
    }

    pub fn cancel_timers(&mut self) -> Option<TimerCommand> {
        self.flashing = false;
        self.flash.cancel()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn schedule_token(commands: &[TimerCommand]) -> TimerToken {
        commands
            .iter()
            .find_map(|command| match command {
                TimerCommand::Schedule { token, .. } => Some(token.clone()),
                TimerCommand::Cancel(_) => None,
            })
            .expect("schedule command")
    }

    #[test]
    fn selecting_replaces_previous_target() {
        let mut selection = SelectionState::default();
        let a = TargetId::new("a");
        let b = TargetId::new("b");

        selection.select(a.clone(), 200);
        selection.select(b.clone(), 200);

        assert_eq!(selection.selected(), Some(&b));
        assert!(!selection.is_selected(&a));
    }

    #[test]
    fn flash_ends_when_timer_fires_but_selection_stays() {
        let mut selection = SelectionState::default();
        let id = TargetId::new("a");
        let token = schedule_token(&selection.select(id.clone(), 200));

        assert!(selection.is_flashing(&id));
        assert!(selection.fire(&token));
        assert!(!selection.is_flashing(&id));
        assert!(selection.is_selected(&id));
    }

    #[test]
    fn reselecting_restarts_flash_and_ignores_old_token() {
        let mut selection = SelectionState::default();
        let id = TargetId::new("a");
        let first = schedule_token(&selection.select(id.clone(), 200));
        let commands = selection.select(id.clone(), 200);

        assert_eq!(commands[0], TimerCommand::Cancel(first.clone()));
        assert!(!selection.fire(&first));
        assert!(selection.is_flashing(&id));
    }

    #[test]
    fn clear_drops_selection_and_pending_flash() {
        let mut selection = SelectionState::default();
        selection.select(TargetId::new("a"), 200);

        assert!(matches!(selection.clear(), Some(TimerCommand::Cancel(_))));
        assert_eq!(selection.selected(), None);
        assert_eq!(selection.clear(), None);
    }
}
