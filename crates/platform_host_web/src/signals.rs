//! Outbound signals delivered as DOM events on the widget's host element.

use platform_host::{OutboundSignal, SignalSink};

#[derive(Debug, Clone)]
/// Dispatches each signal as a bubbling, composed `CustomEvent` so listeners outside the shadow
/// root receive it.
pub struct CustomEventSignalSink {
    target: web_sys::EventTarget,
}

impl CustomEventSignalSink {
    /// Creates a sink dispatching on `target`.
    pub fn new(target: web_sys::EventTarget) -> Self {
        Self { target }
    }
}

impl SignalSink for CustomEventSignalSink {
    fn emit(&self, signal: OutboundSignal) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let init = web_sys::CustomEventInit::new();
            init.set_bubbles(true);
            init.set_composed(true);
            let event = web_sys::CustomEvent::new_with_event_init_dict(signal.event_name(), &init)
                .map_err(|err| format!("creating `{}` failed: {err:?}", signal.event_name()))?;
            return self
                .target
                .dispatch_event(&event)
                .map(|_| ())
                .map_err(|err| format!("dispatching `{}` failed: {err:?}", signal.event_name()));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (&self.target, signal);
            Ok(())
        }
    }
}
