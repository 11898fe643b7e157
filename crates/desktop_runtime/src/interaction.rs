//! Interaction controllers composed by the desktop reducer.
//!
//! Each controller owns its own slice of state and its own [`crate::timer::ScopedTimer`]s. None of
//! them talk to each other; the reducer decides which controller sees an action and forwards the
//! returned [`crate::timer::TimerCommand`]s to the host.

pub mod billing;
pub mod cheat_code;
pub mod click_intent;
pub mod drag_select;
pub mod menus;
pub mod selection;
pub mod tooltip;
pub mod window_drag;
