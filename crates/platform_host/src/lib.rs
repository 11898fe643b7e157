//! Typed host-domain contracts shared by the desktop widget runtime and its browser adapters.
//!
//! This crate is the API-first boundary between the interaction engine and the embedding page.
//! It exposes the inbound attribute contract ([`ExternalIdentity`]), the outbound signal contract
//! ([`OutboundSignal`]), and the service traits for opening URLs and listening to global key
//! presses. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod host;
pub mod identity;
pub mod input;
pub mod signals;
pub mod time;

pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, LinkTarget, MemoryExternalUrlService,
    NoopExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
pub use identity::{
    parse_paid_user, parse_user_name, ExternalIdentity, PAID_USER_ATTRIBUTE, USER_NAME_ATTRIBUTE,
};
pub use input::{GlobalKeySource, KeyHandler, KeySubscription, ManualKeySource, NoopKeySource};
pub use signals::{MemorySignalSink, NoopSignalSink, OutboundSignal, SignalSink};
pub use time::{format_clock_hh_mm, local_clock_now, unix_time_ms_now, LocalClockTime};
