//! External URL adapter backed by `window.open`.

use platform_host::{ExternalUrlFuture, ExternalUrlService, LinkTarget};

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(
        &'a self,
        url: &'a str,
        target: LinkTarget,
    ) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
                return window
                    .open_with_url_and_target(url, target.as_html_target())
                    .map(|_| ())
                    .map_err(|err| format!("window.open failed: {err:?}"));
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (url, target);
                Err("external URLs can only be opened in a browser".to_string())
            }
        })
    }
}
