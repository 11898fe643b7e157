//! Registry of live browser timers keyed by reducer timer token.

use std::{collections::HashMap, rc::Rc, time::Duration};

use leptos::leptos_dom::helpers::{
    set_interval_with_handle, set_timeout_with_handle, IntervalHandle, TimeoutHandle,
};

use crate::timer::{TimerMode, TimerToken};

pub(crate) trait ClearTimer {
    fn clear(&self);
}

impl<T: ClearTimer + ?Sized> ClearTimer for Box<T> {
    fn clear(&self) {
        (**self).clear();
    }
}

/// Starts host timers whose callbacks report back into the runtime.
pub(crate) trait TimerScheduler {
    fn schedule(
        &self,
        delay_ms: u32,
        mode: TimerMode,
        on_fire: Rc<dyn Fn()>,
    ) -> Result<Box<dyn ClearTimer>, String>;
}

/// Leptos `setTimeout`/`setInterval` scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BrowserTimers;

impl TimerScheduler for BrowserTimers {
    fn schedule(
        &self,
        delay_ms: u32,
        mode: TimerMode,
        on_fire: Rc<dyn Fn()>,
    ) -> Result<Box<dyn ClearTimer>, String> {
        let handle = schedule_host_timer(delay_ms, mode, move || on_fire())?;
        Ok(Box::new(handle))
    }
}

#[derive(Debug, Clone, Copy)]
enum HostTimerHandle {
    Timeout(TimeoutHandle),
    Interval(IntervalHandle),
}

impl ClearTimer for HostTimerHandle {
    fn clear(&self) {
        match self {
            Self::Timeout(handle) => handle.clear(),
            Self::Interval(handle) => handle.clear(),
        }
    }
}

fn schedule_host_timer(
    delay_ms: u32,
    mode: TimerMode,
    on_fire: impl Fn() + 'static,
) -> Result<HostTimerHandle, String> {
    let duration = Duration::from_millis(u64::from(delay_ms));
    match mode {
        TimerMode::Once => set_timeout_with_handle(on_fire, duration)
            .map(HostTimerHandle::Timeout)
            .map_err(|err| format!("{err:?}")),
        TimerMode::Repeating => set_interval_with_handle(on_fire, duration)
            .map(HostTimerHandle::Interval)
            .map_err(|err| format!("{err:?}")),
    }
}

/// At most one live handle per token.
pub(crate) struct TimerRegistry<H: ClearTimer> {
    handles: HashMap<TimerToken, H>,
}

impl<H: ClearTimer> Default for TimerRegistry<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H: ClearTimer> TimerRegistry<H> {
    pub fn insert(&mut self, token: TimerToken, handle: H) {
        if let Some(replaced) = self.handles.insert(token, handle) {
            replaced.clear();
        }
    }

    pub fn cancel(&mut self, token: &TimerToken) {
        if let Some(handle) = self.handles.remove(token) {
            handle.clear();
        }
    }

    /// Forgets a one-shot handle whose callback already ran.
    pub fn finish(&mut self, token: &TimerToken) {
        self.handles.remove(token);
    }

    pub fn clear_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }
}
