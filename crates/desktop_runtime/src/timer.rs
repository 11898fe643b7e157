//! Scoped, cancelable timers owned by individual interaction controllers.
//!
//! Controllers never hold host timer handles. They own a [`ScopedTimer`] per deferred concern and
//! hand out [`TimerToken`] values; the host schedules the real callback and reports the token back
//! through [`crate::DesktopAction::TimerFired`]. A token is honored only while it is the current
//! generation of an armed timer, so late or duplicate callbacks are ignored.

use serde::{Deserialize, Serialize};

use crate::model::TargetId;

/// Identifies the deferred concern a timer serves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimerSlot {
    /// Single-vs-double click window for one activatable target.
    ClickIntent(TargetId),
    /// Press feedback flash on the selected icon.
    IconFlash,
    /// Hover delay before the tooltip appears.
    TooltipArm,
    /// Repeating one-second billing tick.
    BillingTick,
    /// Auto-hide of the billing popup after the timer stops.
    BillingPopupAutoHide,
    /// Phase changes of the cheat-code visual effect.
    CheatEffect,
}

/// Handle identifying one arming of a [`ScopedTimer`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerToken {
    /// Concern this timer serves.
    pub slot: TimerSlot,
    /// Arming generation; bumps on every [`ScopedTimer::arm`].
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Whether a timer disarms after firing.
pub enum TimerMode {
    /// Fires once, then disarms.
    Once,
    /// Fires repeatedly until canceled.
    Repeating,
}

/// Host-facing request produced by a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerCommand {
    /// Start a host timer that reports `token` after `delay_ms`.
    Schedule {
        /// Token to report back when the timer fires.
        token: TimerToken,
        /// Delay (or period for repeating timers) in milliseconds.
        delay_ms: u32,
        /// One-shot or repeating.
        mode: TimerMode,
    },
    /// Stop the host timer associated with `token`.
    Cancel(TimerToken),
}

/// One cancelable deferred callback slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedTimer {
    slot: TimerSlot,
    mode: TimerMode,
    generation: u64,
    armed: bool,
}

impl ScopedTimer {
    /// Creates a disarmed one-shot timer.
    pub fn once(slot: TimerSlot) -> Self {
        Self {
            slot,
            mode: TimerMode::Once,
            generation: 0,
            armed: false,
        }
    }

    /// Creates a disarmed repeating timer.
    pub fn repeating(slot: TimerSlot) -> Self {
        Self {
            mode: TimerMode::Repeating,
            ..Self::once(slot)
        }
    }

    pub fn slot(&self) -> &TimerSlot {
        &self.slot
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Token for the current arming, if armed.
    pub fn current_token(&self) -> Option<TimerToken> {
        self.armed.then(|| self.token())
    }

    /// Arms the timer and returns the schedule request for the host.
    ///
    /// Callers must cancel a pending arming first; [`ScopedTimer::rearm`] does both.
    pub fn arm(&mut self, delay_ms: u32) -> TimerCommand {
        self.generation = self.generation.saturating_add(1);
        self.armed = true;
        TimerCommand::Schedule {
            token: self.token(),
            delay_ms,
            mode: self.mode,
        }
    }

    /// Disarms the timer, returning the cancel request when something was pending.
    pub fn cancel(&mut self) -> Option<TimerCommand> {
        if !self.armed {
            return None;
        }
        self.armed = false;
        Some(TimerCommand::Cancel(self.token()))
    }

    /// Cancels any pending arming, then arms again.
    pub fn rearm(&mut self, delay_ms: u32) -> Vec<TimerCommand> {
        let mut commands: Vec<TimerCommand> = self.cancel().into_iter().collect();
        commands.push(self.arm(delay_ms));
        commands
    }

    /// Accepts a fired token. Returns `true` only for the live arming of this timer.
    pub fn fire(&mut self, token: &TimerToken) -> bool {
        if !self.armed || token.slot != self.slot || token.generation != self.generation {
            return false;
        }
        if self.mode == TimerMode::Once {
            self.armed = false;
        }
        true
    }

    fn token(&self) -> TimerToken {
        TimerToken {
            slot: self.slot.clone(),
            generation: self.generation,
        }
    }
}
