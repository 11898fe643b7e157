//! External URL host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Browsing context a URL should be opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    /// A new tab or window (`_blank`).
    NewContext,
    /// The top-level embedding page (`_top`).
    TopLevel,
}

impl LinkTarget {
    /// Returns the HTML target token for this context.
    pub const fn as_html_target(self) -> &'static str {
        match self {
            Self::NewContext => "_blank",
            Self::TopLevel => "_top",
        }
    }
}

/// Host service for opening URLs outside the widget.
pub trait ExternalUrlService {
    /// Opens a URL using the host's navigation mechanism.
    fn open_url<'a>(
        &'a self,
        url: &'a str,
        target: LinkTarget,
    ) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(
        &'a self,
        _url: &'a str,
        _target: LinkTarget,
    ) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory URL service that records every open request.
pub struct MemoryExternalUrlService {
    opened: Rc<RefCell<Vec<(String, LinkTarget)>>>,
}

impl MemoryExternalUrlService {
    /// Returns every URL opened so far, oldest first.
    pub fn opened(&self) -> Vec<(String, LinkTarget)> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for MemoryExternalUrlService {
    fn open_url<'a>(
        &'a self,
        url: &'a str,
        target: LinkTarget,
    ) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.opened.borrow_mut().push((url.to_string(), target));
            Ok(())
        })
    }
}
