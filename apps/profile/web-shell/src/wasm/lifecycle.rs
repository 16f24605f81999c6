use super::*;

pub(super) fn set_boot_error(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("profile shell boot failed: {message}")));
    if let Some(document) = document() {
        if let Some(hint) = html_element_by_id(&document, ENV_HINT_ID) {
            hint.set_inner_text(&format!("启动失败：{message}"));
            let _ = hint.style().set_property("color", "#f87171");
        }
    }
}

fn browser_prefers_light() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    window
        .match_media("(prefers-color-scheme: light)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

pub(super) fn render_environment_hint(bridge: Option<&Object>) {
    let Some(document) = document() else {
        return;
    };
    let platform = bridge.and_then(|bridge| bridge_string(bridge, "platform"));
    let host_scheme = bridge.and_then(|bridge| bridge_string(bridge, "colorScheme"));
    let scheme = resolve_scheme_token(host_scheme.as_deref(), browser_prefers_light());
    let label = environment_label(platform.as_deref(), &scheme);
    set_text(&document, ENV_HINT_ID, &format!("{ENV_HINT_PREFIX}{label}"));
}

/// Writes each present, non-empty theme role onto the document root and
/// mirrors the host color scheme onto the native appearance hint. Applying
/// the same parameters twice is a no-op.
pub(super) fn apply_host_theme(bridge: Option<&Object>) {
    let Some(bridge) = bridge else {
        return;
    };
    let Some(document) = document() else {
        return;
    };
    let Some(root) = document
        .document_element()
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    if let Some(params) = host_theme_params(bridge) {
        for (variable, value) in params.css_variable_writes() {
            let _ = root.style().set_property(variable, value);
        }
    }

    if let Some(scheme) = bridge_string(bridge, "colorScheme") {
        let _ = root
            .style()
            .set_property(NATIVE_COLOR_SCHEME_PROPERTY, scheme.trim());
    }
}

/// Re-applies theme tokens and the environment hint whenever the host
/// signals a theme change. Identity is deliberately not re-populated.
pub(super) fn install_theme_change_handler(bridge: Option<&Object>) {
    let Some(bridge) = bridge else {
        return;
    };
    THEME_CHANGED_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let bridge = host_bridge();
            apply_host_theme(bridge.as_ref());
            render_environment_hint(bridge.as_ref());
        }));
        subscribe_theme_changed(bridge, callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
}

/// Runs exactly once at startup. Without a usable name the text regions keep
/// their static defaults.
pub(super) fn populate_identity(bridge: Option<&Object>) {
    let Some(bridge) = bridge else {
        return;
    };
    let Some(identity) = host_user_identity(bridge) else {
        return;
    };
    let Some(display_name) = identity.display_name() else {
        return;
    };
    let Some(document) = document() else {
        return;
    };
    set_text(&document, DISPLAY_NAME_ID, &display_name);
    set_text(&document, PAGE_TITLE_ID, &page_title(&display_name));
    set_text(&document, PAGE_SUBTITLE_ID, PAGE_SUBTITLE_TEXT);
}

pub(super) fn policy_global_token() -> Option<String> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(POLICY_GLOBAL_NAME))
        .ok()?
        .as_string()
        .filter(|token| !token.trim().is_empty())
}

pub(super) fn location_search() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.location().search().unwrap_or_default()
}

pub(super) fn current_page_origin() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.location().origin().unwrap_or_default()
}
