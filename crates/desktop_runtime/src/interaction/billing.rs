//! Start/stop elapsed-seconds counter with a derived amount.
//!
//! Elapsed time is a running total: stopping keeps it and the next start continues from it.
//! The tick timer is armed exactly while the counter runs.

use crate::timer::{ScopedTimer, TimerCommand, TimerSlot, TimerToken};

const SECONDS_PER_HOUR: u64 = 3600;

/// Which line of copy the billing popup shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingRemark {
    /// Nothing has been billed yet.
    #[default]
    Idle,
    Running,
    /// Index into the configured closing remarks, picked when the counter stopped.
    Closing(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingTimer {
    running: bool,
    elapsed_seconds: u64,
    remark: BillingRemark,
    tick: ScopedTimer,
    popup: ScopedTimer,
}

impl Default for BillingTimer {
    fn default() -> Self {
        Self {
            running: false,
            elapsed_seconds: 0,
            remark: BillingRemark::Idle,
            tick: ScopedTimer::repeating(TimerSlot::BillingTick),
            popup: ScopedTimer::once(TimerSlot::BillingPopupAutoHide),
        }
    }
}

impl BillingTimer {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn remark(&self) -> BillingRemark {
        self.remark
    }

    /// `idle -> running`. A pending popup auto-hide from the previous stop is dropped.
    pub fn start(&mut self, tick_ms: u32) -> Vec<TimerCommand> {
        if self.running {
            return Vec::new();
        }
        self.running = true;
        self.remark = BillingRemark::Running;
        let mut commands: Vec<TimerCommand> = self.popup.cancel().into_iter().collect();
        commands.extend(self.tick.rearm(tick_ms));
        commands
    }

    /// `running -> idle`. Arms the popup auto-hide.
    pub fn stop(&mut self, remark_index: usize, popup_ms: u32) -> Vec<TimerCommand> {
        if !self.running {
            return Vec::new();
        }
        self.running = false;
        self.remark = BillingRemark::Closing(remark_index);
        let mut commands: Vec<TimerCommand> = self.tick.cancel().into_iter().collect();
        commands.extend(self.popup.rearm(popup_ms));
        commands
    }

    /// Counts one second when `token` is the live tick of a running counter.
    pub fn fire_tick(&mut self, token: &TimerToken) -> bool {
        if !self.tick.fire(token) || !self.running {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        true
    }

    /// Returns whether the popup should hide now.
    pub fn fire_popup(&mut self, token: &TimerToken) -> bool {
        self.popup.fire(token)
    }

    /// Drops the auto-hide once the popup was dismissed another way.
    pub fn cancel_popup(&mut self) -> Option<TimerCommand> {
        self.popup.cancel()
    }

    /// Stops everything without choosing a closing remark. Elapsed time is kept.
    pub fn cancel_timers(&mut self) -> Vec<TimerCommand> {
        self.running = false;
        self.tick
            .cancel()
            .into_iter()
            .chain(self.popup.cancel())
            .collect()
    }

    /// Elapsed time as `HH:MM:SS`; hours keep growing past 99.
    pub fn display(&self) -> String {
        let s = self.elapsed_seconds;
        format!(
            "{:02}:{:02}:{:02}",
            s / SECONDS_PER_HOUR,
            (s % SECONDS_PER_HOUR) / 60,
            s % 60
        )
    }

    /// Billed amount in cents, rounded half up.
    pub fn amount_cents(&self, hourly_rate: u32) -> u64 {
        let numerator = self
            .elapsed_seconds
            .saturating_mul(u64::from(hourly_rate))
            .saturating_mul(100);
        numerator.saturating_add(SECONDS_PER_HOUR / 2) / SECONDS_PER_HOUR
    }

    /// Amount with two decimals and a comma separator, e.g. `8,47`.
    pub fn amount(&self, hourly_rate: u32) -> String {
        let cents = self.amount_cents(hourly_rate);
        format!("{},{:02}", cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tick_token(commands: &[TimerCommand]) -> TimerToken {
        commands
            .iter()
            .find_map(|command| match command {
                TimerCommand::Schedule { token, .. } if token.slot == TimerSlot::BillingTick => {
                    Some(token.clone())
                }
                _ => None,
            })
            .expect("tick schedule")
    }

    #[test]
    fn ticks_accumulate_only_while_running() {
        let mut billing = BillingTimer::default();
        let token = tick_token(&billing.start(1000));
        for _ in 0..5 {
            assert!(billing.fire_tick(&token));
        }
        billing.stop(0, 4000);

        assert!(!billing.fire_tick(&token));
        assert_eq!(billing.elapsed_seconds(), 5);
        assert!(!billing.is_running());
    }

    #[test]
    fn restart_continues_from_running_total() {
        let mut billing = BillingTimer::default();
        let first = tick_token(&billing.start(1000));
        billing.fire_tick(&first);
        billing.fire_tick(&first);
        billing.stop(3, 4000);
        let second = tick_token(&billing.start(1000));
        billing.fire_tick(&second);

        assert_eq!(billing.elapsed_seconds(), 3);
        assert!(!billing.fire_tick(&first));
        assert_eq!(billing.remark(), BillingRemark::Running);
    }

    #[test]
    fn display_and_amount_follow_elapsed_seconds() {
        let mut billing = BillingTimer::default();
        let token = tick_token(&billing.start(1000));
        for _ in 0..3661 {
            billing.fire_tick(&token);
        }

        assert_eq!(billing.display(), "01:01:01");
        assert_eq!(billing.amount_cents(500), 50847);
        assert_eq!(billing.amount(500), "508,47");
    }

    #[test]
    fn amount_rounds_to_nearest_cent() {
        let mut billing = BillingTimer::default();
        assert_eq!(billing.amount(500), "0,00");

        let token = tick_token(&billing.start(1000));
        billing.fire_tick(&token);
        assert_eq!(billing.amount(500), "0,14");
        for _ in 1..61 {
            billing.fire_tick(&token);
        }
        assert_eq!(billing.amount(500), "8,47");
    }

    #[test]
    fn stop_arms_popup_and_start_drops_it() {
        let mut billing = BillingTimer::default();
        billing.start(1000);
        let stop = billing.stop(6, 4000);

        assert_eq!(billing.remark(), BillingRemark::Closing(6));
        assert_eq!(stop.len(), 2);
        let restart = billing.start(1000);
        assert!(matches!(
            &restart[0],
            TimerCommand::Cancel(token) if token.slot == TimerSlot::BillingPopupAutoHide
        ));
    }

    #[test]
    fn repeated_start_or_stop_is_a_noop() {
        let mut billing = BillingTimer::default();

        assert!(billing.stop(0, 4000).is_empty());
        assert!(!billing.start(1000).is_empty());
        assert!(billing.start(1000).is_empty());
        assert_eq!(billing.cancel_timers().len(), 1);
        assert!(!billing.is_running());
    }
}
