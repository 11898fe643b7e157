//! Document-wide `keydown` source for the cheat-code detector.

use platform_host::{GlobalKeySource, KeyHandler, KeySubscription};

#[derive(Debug, Clone, Copy, Default)]
/// Listens for `keydown` on the current document and reports `KeyboardEvent.keyCode`.
pub struct DocumentKeySource;

impl GlobalKeySource for DocumentKeySource {
    fn subscribe(&self, handler: KeyHandler) -> Result<KeySubscription, String> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::{closure::Closure, JsCast};

            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| "document unavailable".to_string())?;
            let listener = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(
                move |ev: web_sys::KeyboardEvent| handler(ev.key_code()),
            );
            document
                .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
                .map_err(|err| format!("keydown listener registration failed: {err:?}"))?;
            return Ok(KeySubscription::new(move || {
                let _ = document
                    .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
            }));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = handler;
            Ok(KeySubscription::detached())
        }
    }
}
