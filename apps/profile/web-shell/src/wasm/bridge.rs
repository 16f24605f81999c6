use super::*;

/// The embedding host's bridge object, `window.Telegram.WebApp`. Absent in a
/// plain browser; every consumer must tolerate `None`.
pub(super) fn host_bridge() -> Option<Object> {
    let window = web_sys::window()?;
    let telegram = Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
    if !telegram.is_object() {
        return None;
    }
    let web_app = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    web_app.dyn_into::<Object>().ok()
}

pub(super) fn bridge_string(bridge: &Object, key: &str) -> Option<String> {
    Reflect::get(bridge, &JsValue::from_str(key))
        .ok()?
        .as_string()
        .filter(|value| !value.trim().is_empty())
}

fn bridge_function(bridge: &Object, name: &str) -> Option<Function> {
    Reflect::get(bridge, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Signals readiness so the host stops showing its placeholder and starts
/// delivering theme and viewport updates.
pub(super) fn bridge_ready(bridge: &Object) {
    if let Some(ready) = bridge_function(bridge, "ready") {
        let _ = ready.call0(bridge);
    }
}

pub(super) fn host_capabilities(bridge: Option<&Object>) -> HostCapabilities {
    match bridge {
        Some(bridge) => HostCapabilities {
            can_open_link: bridge_function(bridge, "openLink").is_some(),
            can_open_telegram_link: bridge_function(bridge, "openTelegramLink").is_some(),
        },
        None => HostCapabilities::default(),
    }
}

/// Invokes a host link-opening capability. Returns false when the capability
/// is missing or throws, so the caller can fall back to in-place navigation.
pub(super) fn call_host_opener(bridge: &Object, name: &str, url: &str) -> bool {
    let Some(opener) = bridge_function(bridge, name) else {
        return false;
    };
    opener.call1(bridge, &JsValue::from_str(url)).is_ok()
}

fn bridge_field_json(container: &JsValue, key: &str) -> Option<String> {
    let value = Reflect::get(container, &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&value).ok().map(String::from)
}

pub(super) fn host_theme_params(bridge: &Object) -> Option<ThemeParams> {
    let raw = bridge_field_json(bridge, "themeParams")?;
    ThemeParams::from_json_str(&raw).ok()
}

pub(super) fn host_user_identity(bridge: &Object) -> Option<UserIdentity> {
    let init_data = Reflect::get(bridge, &JsValue::from_str("initDataUnsafe")).ok()?;
    if !init_data.is_object() {
        return None;
    }
    let raw = bridge_field_json(&init_data, "user")?;
    UserIdentity::from_json_str(&raw).ok()
}

pub(super) fn subscribe_theme_changed(bridge: &Object, callback: &Function) {
    if let Some(on_event) = bridge_function(bridge, "onEvent") {
        let _ = on_event.call2(bridge, &JsValue::from_str("themeChanged"), callback);
    }
}
