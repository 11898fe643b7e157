//! Binary entrypoint for the browser-hosted widget bundle.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    if let Err(err) = site::mount() {
        leptos::logging::error!("desktop widget failed to mount: {err}");
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `site_app` for wasm32 with the `csr` feature and load it next to a <{}> element.",
        site::HOST_TAG
    );
}
