//! Outbound signal contract delivered to the embedding page.

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

/// Payload-free signals the widget raises for the embedding page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutboundSignal {
    /// The login affordance was activated.
    LoginClick,
    /// Logout was chosen from the account menu.
    LogoutClick,
}

impl OutboundSignal {
    /// Returns the DOM event name used for this signal.
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::LoginClick => "login-click",
            Self::LogoutClick => "logout-click",
        }
    }
}

/// Host service delivering [`OutboundSignal`] values to the embedding page.
pub trait SignalSink {
    /// Emits one signal.
    fn emit(&self, signal: OutboundSignal) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Sink that drops every signal.
pub struct NoopSignalSink;

impl SignalSink for NoopSignalSink {
    fn emit(&self, _signal: OutboundSignal) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory sink recording emitted signals in order.
pub struct MemorySignalSink {
    emitted: Rc<RefCell<Vec<OutboundSignal>>>,
}

impl MemorySignalSink {
    /// Returns every signal emitted so far.
    pub fn emitted(&self) -> Vec<OutboundSignal> {
        self.emitted.borrow().clone()
    }
}

impl SignalSink for MemorySignalSink {
    fn emit(&self, signal: OutboundSignal) -> Result<(), String> {
        self.emitted.borrow_mut().push(signal);
        Ok(())
    }
}
