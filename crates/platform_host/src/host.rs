//! Shared host-bundle model for browser and native runtime composition.

use std::rc::Rc;

use crate::{
    ExternalUrlService, GlobalKeySource, NoopExternalUrlService, NoopKeySource, NoopSignalSink,
    SignalSink,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition embedded in a host page.
    Browser,
    /// Native composition with no-op adapters (tests, tooling).
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the interaction engine decoupled from DOM details.
#[derive(Clone)]
pub struct HostServices {
    /// URL opening service for activated targets.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Outbound signal delivery to the embedding page.
    pub signals: Rc<dyn SignalSink>,
    /// Document-wide key press source.
    pub keys: Rc<dyn GlobalKeySource>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Host bundle whose services all do nothing.
    pub fn stub() -> Self {
        Self {
            external_urls: Rc::new(NoopExternalUrlService),
            signals: Rc::new(NoopSignalSink),
            keys: Rc::new(NoopKeySource),
            host_strategy: HostStrategy::Stub,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::OutboundSignal;

    #[test]
    fn stub_bundle_accepts_every_call() {
        let host = HostServices::stub();
        assert_eq!(host.host_strategy.as_str(), "stub");
        assert_eq!(host.signals.emit(OutboundSignal::LoginClick), Ok(()));
        let subscription = host.keys.subscribe(Rc::new(|_: u32| {})).expect("subscribe");
        subscription.unsubscribe();
    }
}
