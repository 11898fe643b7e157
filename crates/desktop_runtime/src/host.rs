//! Host-side execution of reducer effects.
//!
//! The reducer only describes timers, URL opens, and outbound signals. This module owns the
//! browser timer handles and the global key subscription, and routes timer callbacks back into
//! the reducer as [`DesktopAction::TimerFired`].

mod timers;

use std::{cell::RefCell, rc::Rc};

use leptos::{logging, spawn_local, Callable, Callback};
use platform_host::{
    ExternalUrlService, GlobalKeySource, HostServices, KeySubscription, LinkTarget, OutboundSignal,
    SignalSink,
};

use self::timers::{BrowserTimers, ClearTimer, TimerRegistry, TimerScheduler};
use crate::{
    reducer::{DesktopAction, RuntimeEffect},
    timer::{TimerMode, TimerToken},
};

#[derive(Clone)]
/// Host service bundle plus the live handles the runtime owns on its behalf.
pub struct DesktopHostContext {
    external_urls: Rc<dyn ExternalUrlService>,
    signals: Rc<dyn SignalSink>,
    keys: Rc<dyn GlobalKeySource>,
    scheduler: Rc<dyn TimerScheduler>,
    timers: Rc<RefCell<TimerRegistry<Box<dyn ClearTimer>>>>,
    key_subscription: Rc<RefCell<Option<KeySubscription>>>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::stub())
    }
}

impl DesktopHostContext {
    /// Wraps an injected host bundle.
    pub fn new(services: HostServices) -> Self {
        Self::with_scheduler(services, Rc::new(BrowserTimers))
    }

    fn with_scheduler(services: HostServices, scheduler: Rc<dyn TimerScheduler>) -> Self {
        Self {
            external_urls: services.external_urls,
            signals: services.signals,
            keys: services.keys,
            scheduler,
            timers: Rc::new(RefCell::new(TimerRegistry::default())),
            key_subscription: Rc::new(RefCell::new(None)),
        }
    }

    /// Number of host timers currently scheduled.
    pub fn pending_timer_count(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, dispatch: Callback<DesktopAction>, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ScheduleTimer {
                token,
                delay_ms,
                mode,
            } => self.schedule_timer(dispatch, token, delay_ms, mode),
            RuntimeEffect::CancelTimer { token } => self.timers.borrow_mut().cancel(&token),
            RuntimeEffect::OpenExternalUrl { url, target } => self.open_external_url(&url, target),
            RuntimeEffect::EmitSignal(signal) => self.emit_signal(signal),
        }
    }

    /// Opens a URL outside the widget through the injected service.
    pub fn open_external_url(&self, url: &str, target: LinkTarget) {
        let url = url.to_string();
        let service = self.external_urls.clone();
        spawn_local(async move {
            if let Err(err) = service.open_url(&url, target).await {
                logging::warn!("open external url failed for `{url}`: {err}");
            }
        });
    }

    fn emit_signal(&self, signal: OutboundSignal) {
        if let Err(err) = self.signals.emit(signal) {
            logging::warn!("signal `{}` dispatch failed: {err}", signal.event_name());
        }
    }

    fn schedule_timer(
        &self,
        dispatch: Callback<DesktopAction>,
        token: TimerToken,
        delay_ms: u32,
        mode: TimerMode,
    ) {
        let registry = Rc::downgrade(&self.timers);
        let fired = token.clone();
        let on_fire = Rc::new(move || {
            if mode == TimerMode::Once {
                if let Some(registry) = registry.upgrade() {
                    registry.borrow_mut().finish(&fired);
                }
            }
            dispatch.call(DesktopAction::TimerFired {
                token: fired.clone(),
            });
        });
        match self.scheduler.schedule(delay_ms, mode, on_fire) {
            Ok(handle) => self.timers.borrow_mut().insert(token, handle),
            Err(err) => logging::warn!("scheduling {:?} timer failed: {err}", token.slot),
        }
    }

    /// Subscribes the global key source, replacing any earlier subscription.
    pub fn install_key_source(&self, dispatch: Callback<DesktopAction>) {
        let handler = Rc::new(move |code: u32| dispatch.call(DesktopAction::KeyDown { code }));
        match self.keys.subscribe(handler) {
            Ok(subscription) => {
                if let Some(previous) = self.key_subscription.borrow_mut().replace(subscription) {
                    previous.unsubscribe();
                }
            }
            Err(err) => logging::warn!("global key subscription failed: {err}"),
        }
    }

    /// Clears every outstanding timer and releases the key subscription.
    pub fn shutdown(&self) {
        self.timers.borrow_mut().clear_all();
        if let Some(subscription) = self.key_subscription.borrow_mut().take() {
            subscription.unsubscribe();
        }
    }
}
