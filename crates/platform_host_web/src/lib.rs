//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! The widget's host element is the only DOM node these adapters need: outbound signals are
//! dispatched on it, its attributes feed [`platform_host::ExternalIdentity`], and key presses are
//! observed on the owning document. Native builds compile the same API with inert fallbacks so
//! the workspace builds and tests off the browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the host-bundle factory.
pub mod adapters;
pub mod external_url;
pub mod identity;
pub mod keys;
pub mod signals;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use external_url::WebExternalUrlService;
pub use identity::{observe_identity, read_identity, IdentityObserver};
pub use keys::DocumentKeySource;
pub use signals::CustomEventSignalSink;
