//! Interaction state engine and Leptos shell for the embeddable desktop widget.
//!
//! The engine ([`reduce_desktop`] over [`DesktopState`] and [`InteractionState`]) is plain Rust
//! and has no DOM dependency. [`DesktopProvider`] and [`DesktopShell`] render it and execute its
//! [`RuntimeEffect`]s against the injected host services.

pub mod catalog;
pub mod components;
mod effect_executor;
pub mod host;
pub mod interaction;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod timer;

pub use catalog::{CatalogError, DesktopCatalog, DesktopTimings};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use interaction::menus::MenuId;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use timer::{ScopedTimer, TimerCommand, TimerMode, TimerSlot, TimerToken};
