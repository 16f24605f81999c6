#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

/// A host page may ship its own `profile-root` markup without the preview
/// panel. Boot must still succeed and render the environment hint instead of
/// replacing it with an error.
#[wasm_bindgen_test]
fn boot_tolerates_host_markup_without_preview_controls() {
    let document = web_sys::window()
        .expect("window should exist")
        .document()
        .expect("document should exist");
    let body = document.body().expect("body should exist");
    // Drop any skeleton built during module startup; this scenario is a host
    // page that provides its own minimal markup.
    body.set_inner_html("");

    let root = document
        .create_element("section")
        .expect("root should be creatable");
    root.set_id("profile-root");
    let hint = document
        .create_element("div")
        .expect("hint should be creatable");
    hint.set_id("env-hint");
    root.append_child(&hint).expect("hint should attach");
    body.append_child(&root).expect("root should attach");

    tgprofile_web_shell::start();

    let hint = hint
        .dyn_into::<HtmlElement>()
        .expect("hint should be an HtmlElement");
    let text = hint.inner_text();
    assert!(
        text.starts_with("环境："),
        "environment hint should be rendered, got: {text}"
    );

    let snapshot: serde_json::Value = serde_json::from_str(&tgprofile_web_shell::shell_state_json())
        .expect("shell state should be valid JSON");
    assert_eq!(snapshot["policy"], "inline-preview");
    assert_eq!(snapshot["viewer"]["visible"], false);
}
