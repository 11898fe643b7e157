//! Global key-sequence detector and the color effect it triggers.

use crate::timer::{ScopedTimer, TimerCommand, TimerSlot, TimerToken};

/// Strict left-to-right matcher: any mismatch restarts from the first element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheatCodeDetector {
    sequence: Vec<u32>,
    match_index: usize,
}

impl CheatCodeDetector {
    pub fn new(sequence: Vec<u32>) -> Self {
        Self {
            sequence,
            match_index: 0,
        }
    }

    pub fn match_index(&self) -> usize {
        self.match_index
    }

    /// Feeds one key code. Returns `true` exactly when it completes the sequence.
    pub fn on_key(&mut self, code: u32) -> bool {
        if self.sequence.get(self.match_index) != Some(&code) {
            self.match_index = 0;
            return false;
        }
        self.match_index += 1;
        if self.match_index < self.sequence.len() {
            return false;
        }
        self.match_index = 0;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheatPhase {
    #[default]
    Idle,
    HueShift,
    DeepShift,
}

impl CheatPhase {
    /// CSS `filter` applied to the desktop for this phase.
    pub fn css_filter(self) -> &'static str {
        match self {
            Self::Idle => "none",
            Self::HueShift => "hue-rotate(90deg) saturate(1.5)",
            Self::DeepShift => "hue-rotate(180deg) saturate(2)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheatEffect {
    phase: CheatPhase,
    timer: ScopedTimer,
}

impl Default for CheatEffect {
    fn default() -> Self {
        Self {
            phase: CheatPhase::Idle,
            timer: ScopedTimer::once(TimerSlot::CheatEffect),
        }
    }
}

impl CheatEffect {
    pub fn phase(&self) -> CheatPhase {
        self.phase
    }

    /// Starts (or restarts) the effect from its first phase.
    pub fn trigger(&mut self, phase_two_ms: u32) -> Vec<TimerCommand> {
        self.phase = CheatPhase::HueShift;
        self.timer.rearm(phase_two_ms)
    }

    /// Advances one phase on a live token; arms the next step with `deep_shift_ms` if any.
    pub fn fire(&mut self, token: &TimerToken, deep_shift_ms: u32) -> Vec<TimerCommand> {
        if !self.timer.fire(token) {
            return Vec::new();
        }
        match self.phase {
            CheatPhase::HueShift => {
                self.phase = CheatPhase::DeepShift;
                vec![self.timer.arm(deep_shift_ms)]
            }
            CheatPhase::DeepShift | CheatPhase::Idle => {
                self.phase = CheatPhase::Idle;
                Vec::new()
            }
        }
    }

    pub fn cancel(&mut self) -> Option<TimerCommand> {
        self.phase = CheatPhase::Idle;
        self.timer.cancel()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const KONAMI: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

    fn feed(detector: &mut CheatCodeDetector, keys: &[u32]) -> usize {
        keys.iter().filter(|code| detector.on_key(**code)).count()
    }

    #[test]
    fn exact_sequence_fires_once_and_resets() {
        let mut detector = CheatCodeDetector::new(KONAMI.to_vec());

        assert_eq!(feed(&mut detector, &KONAMI), 1);
        assert_eq!(detector.match_index(), 0);
    }

    #[test]
    fn sequence_twice_fires_twice() {
        let mut detector = CheatCodeDetector::new(KONAMI.to_vec());
        let doubled: Vec<u32> = KONAMI.iter().chain(KONAMI.iter()).copied().collect();

        assert_eq!(feed(&mut detector, &doubled), 2);
    }

    #[test]
    fn any_substitution_prevents_firing() {
        for position in 0..KONAMI.len() {
            let mut keys = KONAMI.to_vec();
            keys[position] = 13;
            let mut detector = CheatCodeDetector::new(KONAMI.to_vec());

            assert_eq!(feed(&mut detector, &keys), 0, "substituted at {position}");
        }
    }

    #[test]
    fn mismatch_restarts_without_partial_credit() {
        let mut detector = CheatCodeDetector::new(KONAMI.to_vec());
        feed(&mut detector, &[38, 38]);

        // A third 38 does not count as the start of a new attempt.
        assert!(!detector.on_key(38));
        assert_eq!(detector.match_index(), 0);
        assert_eq!(feed(&mut detector, &KONAMI[1..]), 0);
    }

    #[test]
    fn empty_sequence_never_fires() {
        let mut detector = CheatCodeDetector::new(Vec::new());
        assert!(!detector.on_key(38));
    }

    #[test]
    fn effect_walks_through_phases() {
        let mut effect = CheatEffect::default();
        let first = match effect.trigger(1000).pop() {
            Some(TimerCommand::Schedule { token, delay_ms, .. }) => {
                assert_eq!(delay_ms, 1000);
                token
            }
            other => panic!("expected schedule, got {other:?}"),
        };
        assert_eq!(effect.phase().css_filter(), "hue-rotate(90deg) saturate(1.5)");

        let second = match effect.fire(&first, 1500).pop() {
            Some(TimerCommand::Schedule { token, delay_ms, .. }) => {
                assert_eq!(delay_ms, 1500);
                token
            }
            other => panic!("expected schedule, got {other:?}"),
        };
        assert_eq!(effect.phase(), CheatPhase::DeepShift);

        assert!(effect.fire(&second, 1500).is_empty());
        assert_eq!(effect.phase(), CheatPhase::Idle);
        assert!(effect.fire(&second, 1500).is_empty());
    }
}
