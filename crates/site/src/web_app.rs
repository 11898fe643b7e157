use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use platform_host::{ExternalIdentity, HostServices};

/// Tag of the element the widget mounts into. Created under `<body>` when the page has none.
pub const HOST_TAG: &str = "goodlegal-desktop";

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
const STYLES: &str = include_str!("../style/desktop.css");

#[component]
pub fn DesktopEntry(
    host_services: HostServices,
    #[prop(into)] identity: Signal<ExternalIdentity>,
) -> impl IntoView {
    view! {
        <DesktopProvider host_services identity>
            <DesktopShell />
        </DesktopProvider>
    }
}

/// Mounts the widget into the shadow root of the page's host element.
///
/// # Errors
///
/// Returns a description of the DOM operation that failed.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() -> Result<(), String> {
    use platform_host_web::{build_host_services, host_strategy_name, observe_identity, read_identity};
    use wasm_bindgen::JsCast;

    let dom_err = |what: &'static str| move |err: wasm_bindgen::JsValue| format!("{what}: {err:?}");

    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "document unavailable".to_string())?;
    let host = match document
        .query_selector(HOST_TAG)
        .map_err(dom_err("host lookup failed"))?
    {
        Some(host) => host,
        None => {
            let host = document
                .create_element(HOST_TAG)
                .map_err(dom_err("creating host element failed"))?;
            document
                .body()
                .ok_or_else(|| "document has no body".to_string())?
                .append_child(&host)
                .map_err(dom_err("attaching host element failed"))?;
            host
        }
    };

    let shadow = match host.shadow_root() {
        Some(shadow) => shadow,
        None => host
            .attach_shadow(&web_sys::ShadowRootInit::new(web_sys::ShadowRootMode::Open))
            .map_err(dom_err("attaching shadow root failed"))?,
    };
    shadow.set_inner_html("");

    let style = document
        .create_element("style")
        .map_err(dom_err("creating style element failed"))?;
    style.set_text_content(Some(STYLES));
    shadow
        .append_child(&style)
        .map_err(dom_err("injecting styles failed"))?;

    let container = document
        .create_element("div")
        .map_err(dom_err("creating mount point failed"))?;
    shadow
        .append_child(&container)
        .map_err(dom_err("attaching mount point failed"))?;
    let container = container
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| "mount point is not an HTML element".to_string())?;

    let host_services = build_host_services(&host);
    leptos::mount_to(container, move || {
        let identity = create_rw_signal(read_identity(&host));
        match observe_identity(&host, move |next| identity.set(next)) {
            Ok(observer) => {
                store_value(observer);
            }
            Err(err) => logging::warn!("host attributes will not be tracked: {err}"),
        }
        view! { <DesktopEntry host_services identity /> }
    });

    logging::log!("desktop widget mounted ({} host)", host_strategy_name());
    Ok(())
}
