//! Global keyboard input source contract.
//!
//! Key presses used by the cheat-code detector are observed document-wide rather than on the
//! widget root, so the subscription reaches outside the widget boundary. Modeling it as an
//! injected source with an explicit [`KeySubscription`] keeps that listener's lifetime tied to
//! the widget instance.

use std::{cell::RefCell, fmt, rc::Rc};

/// Callback receiving legacy numeric key codes (`KeyboardEvent.keyCode`).
pub type KeyHandler = Rc<dyn Fn(u32)>;

/// Live subscription handle. Dropping it or calling [`KeySubscription::unsubscribe`] detaches the
/// handler.
pub struct KeySubscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl KeySubscription {
    /// Wraps the detach routine for an active subscription.
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Subscription that owns nothing.
    pub fn detached() -> Self {
        Self { detach: None }
    }

    /// Detaches the handler now.
    pub fn unsubscribe(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for KeySubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySubscription")
            .field("active", &self.detach.is_some())
            .finish()
    }
}

/// Host service delivering document-wide key presses.
pub trait GlobalKeySource {
    /// Registers `handler` for every key press until the returned subscription is released.
    fn subscribe(&self, handler: KeyHandler) -> Result<KeySubscription, String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Source that never produces key presses.
pub struct NoopKeySource;

impl GlobalKeySource for NoopKeySource {
    fn subscribe(&self, _handler: KeyHandler) -> Result<KeySubscription, String> {
        Ok(KeySubscription::detached())
    }
}

#[derive(Clone, Default)]
/// Programmatic key source used by tests and non-browser hosts.
pub struct ManualKeySource {
    handlers: Rc<RefCell<Vec<(u64, KeyHandler)>>>,
    next_id: Rc<RefCell<u64>>,
}

impl ManualKeySource {
    /// Delivers one key press to every live subscriber.
    pub fn press(&self, key_code: u32) {
        let handlers: Vec<KeyHandler> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(key_code);
        }
    }

    /// Returns the number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl GlobalKeySource for ManualKeySource {
    fn subscribe(&self, handler: KeyHandler) -> Result<KeySubscription, String> {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        self.handlers.borrow_mut().push((id, handler));
        let handlers = self.handlers.clone();
        Ok(KeySubscription::new(move || {
            handlers.borrow_mut().retain(|(handler_id, _)| *handler_id != id);
        }))
    }
}
