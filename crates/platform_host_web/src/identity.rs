//! Host-element attribute bridge for [`ExternalIdentity`].

use platform_host::{ExternalIdentity, PAID_USER_ATTRIBUTE, USER_NAME_ATTRIBUTE};

/// Reads the identity attributes currently set on `host`.
pub fn read_identity(host: &web_sys::Element) -> ExternalIdentity {
    ExternalIdentity::from_attributes(
        host.get_attribute(PAID_USER_ATTRIBUTE).as_deref(),
        host.get_attribute(USER_NAME_ATTRIBUTE).as_deref(),
    )
}

/// Live attribute observation started by [`observe_identity`]. Dropping it disconnects.
pub struct IdentityObserver {
    #[cfg(target_arch = "wasm32")]
    observer: web_sys::MutationObserver,
    #[cfg(target_arch = "wasm32")]
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>,
}

impl std::fmt::Debug for IdentityObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityObserver").finish_non_exhaustive()
    }
}

impl Drop for IdentityObserver {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        self.observer.disconnect();
    }
}

/// Calls `on_change` with the re-read identity whenever `paid-user` or `user-name` changes.
///
/// # Errors
///
/// Returns an error when the `MutationObserver` cannot be created or attached.
pub fn observe_identity(
    host: &web_sys::Element,
    on_change: impl Fn(ExternalIdentity) + 'static,
) -> Result<IdentityObserver, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast, JsValue};

        let observed = host.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>::new(
            move |_records: js_sys::Array, _observer: web_sys::MutationObserver| {
                on_change(read_identity(&observed));
            },
        );
        let observer = web_sys::MutationObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|err| format!("MutationObserver unavailable: {err:?}"))?;

        let filter = js_sys::Array::of2(
            &JsValue::from_str(PAID_USER_ATTRIBUTE),
            &JsValue::from_str(USER_NAME_ATTRIBUTE),
        );
        let options = web_sys::MutationObserverInit::new();
        options.set_attributes(true);
        options.set_attribute_filter(&filter);
        observer
            .observe_with_options(host, &options)
            .map_err(|err| format!("observing host attributes failed: {err:?}"))?;

        return Ok(IdentityObserver {
            observer,
            _callback: callback,
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (host, on_change);
        Ok(IdentityObserver {})
    }
}
