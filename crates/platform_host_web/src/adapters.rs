use std::rc::Rc;

use platform_host::{HostServices, HostStrategy};

use crate::{CustomEventSignalSink, DocumentKeySource, WebExternalUrlService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(any(feature = "desktop-host-stub", not(target_arch = "wasm32")))]
    {
        HostStrategy::Stub
    }

    #[cfg(all(not(feature = "desktop-host-stub"), target_arch = "wasm32"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the host bundle for a widget mounted under `host`.
///
/// Signals are dispatched on `host` itself so the embedding page can listen on the element it
/// owns. The stub strategy returns inert services.
pub fn build_host_services(host: &web_sys::Element) -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            external_urls: Rc::new(WebExternalUrlService),
            signals: Rc::new(CustomEventSignalSink::new(host.clone().into())),
            keys: Rc::new(DocumentKeySource),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Stub => HostServices::stub(),
    }
}
