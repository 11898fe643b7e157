mod web_app;

pub use web_app::{DesktopEntry, HOST_TAG};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub use web_app::mount;
