#[cfg(any(target_arch = "wasm32", test))]
mod policy_select;
#[cfg(target_arch = "wasm32")]
mod shell_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::{Cell, RefCell};

    use gloo_timers::future::sleep;
    use js_sys::{Function, Object, Reflect};
    use tgprofile_client_core::env::{environment_label, resolve_scheme_token};
    use tgprofile_client_core::identity::{PAGE_SUBTITLE_TEXT, UserIdentity, page_title};
    use tgprofile_client_core::link::{
        HostCapabilities, LinkPolicy, ResolvedLink, RouteDecision, decide_route,
    };
    use tgprofile_client_core::preview::{PREVIEW_HINT_DELAY_MS, PreviewViewer};
    use tgprofile_client_core::theme::{NATIVE_COLOR_SCHEME_PROPERTY, ThemeParams};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Document, HtmlElement, HtmlIFrameElement};
    use web_time::Duration;

    use crate::policy_select::select_policy;
    use crate::shell_constants::*;

    mod bridge;
    mod dom;
    mod lifecycle;
    mod routing;

    use bridge::*;
    use dom::*;
    use lifecycle::*;
    use routing::*;

    thread_local! {
        static VIEWER: RefCell<PreviewViewer> = RefCell::new(PreviewViewer::default());
        static LINK_POLICY: Cell<LinkPolicy> = const { Cell::new(LinkPolicy::InlinePreview) };
        static LINK_CLICK_HANDLERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> = RefCell::new(Vec::new());
        static PREVIEW_OPEN_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static PREVIEW_CLOSE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static PREVIEW_FRAME_LOAD_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static THEME_CHANGED_HANDLER: RefCell<Option<Closure<dyn FnMut()>>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(error) = boot() {
            set_boot_error(&error);
        }
    }

    /// JSON snapshot of the shell for diagnostics and host-page scripting.
    #[wasm_bindgen]
    pub fn shell_state_json() -> String {
        let viewer = VIEWER.with(|viewer| {
            serde_json::to_value(&*viewer.borrow()).unwrap_or(serde_json::Value::Null)
        });
        let snapshot = serde_json::json!({
            "in_host": host_bridge().is_some(),
            "policy": LINK_POLICY.get(),
            "viewer": viewer,
        });
        serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string())
    }

    /// Programmatic counterpart of clicking a `data-link` element.
    #[wasm_bindgen]
    pub fn open_link(url: String) {
        handle_link_activation(&url, "");
    }

    fn boot() -> Result<(), String> {
        let bridge = host_bridge();
        if let Some(bridge) = bridge.as_ref() {
            bridge_ready(bridge);
        }

        ensure_profile_dom()?;
        render_environment_hint(bridge.as_ref());
        apply_host_theme(bridge.as_ref());
        install_theme_change_handler(bridge.as_ref());
        populate_identity(bridge.as_ref());

        let (policy, policy_error) = select_policy(policy_global_token().as_deref(), &location_search());
        LINK_POLICY.set(policy);
        if let Some(error) = policy_error {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "link policy fallback to default: {error}"
            )));
        }

        install_link_handlers()?;
        install_preview_handlers();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{shell_state_json, start};

#[cfg(not(target_arch = "wasm32"))]
pub fn shell_state_json() -> String {
    "{\"in_host\":false,\"detail\":\"profile shell state only available on wasm\"}".to_string()
}
