use super::*;

/// Resolves a raw link target against the page location. `None` means the
/// target is unparseable; the router then degrades to raw navigation.
pub(super) fn resolve_link(document: &Document, raw_url: &str) -> Option<ResolvedLink> {
    let base = document.url().ok()?;
    let url = web_sys::Url::new_with_base(raw_url, &base).ok()?;
    let scheme = url.protocol().trim_end_matches(':').to_ascii_lowercase();
    Some(ResolvedLink {
        href: url.href(),
        scheme,
        origin: url.origin(),
    })
}

pub(super) fn handle_link_activation(raw_url: &str, label: &str) {
    route_with_policy(LINK_POLICY.get(), raw_url, label);
}

/// The preview panel's explicit "open" action keeps same-window delegate
/// semantics regardless of the active policy.
pub(super) fn open_previewed_link_in_current_window() {
    let Some(url) = VIEWER.with(|viewer| viewer.borrow().url().map(str::to_string)) else {
        return;
    };
    route_with_policy(LinkPolicy::SameWindow, &url, "");
}

fn route_with_policy(policy: LinkPolicy, raw_url: &str, label: &str) {
    let Some(document) = document() else {
        return;
    };
    let bridge = host_bridge();
    let capabilities = host_capabilities(bridge.as_ref());
    let resolved = resolve_link(&document, raw_url);
    let decision = decide_route(
        policy,
        raw_url,
        resolved.as_ref(),
        &current_page_origin(),
        capabilities,
    );
    execute_decision(decision, label, bridge.as_ref());
}

fn execute_decision(decision: RouteDecision, label: &str, bridge: Option<&Object>) {
    match decision {
        RouteDecision::OpenTelegramLink(url) => {
            let delegated =
                bridge.is_some_and(|bridge| call_host_opener(bridge, "openTelegramLink", &url));
            if !delegated {
                navigate_in_place(&url);
            }
        }
        RouteDecision::NavigateInPlace(url) => navigate_in_place(&url),
        RouteDecision::DelegateToHost(url) => {
            let delegated = bridge.is_some_and(|bridge| call_host_opener(bridge, "openLink", &url));
            if !delegated {
                navigate_in_place(&url);
            }
        }
        RouteDecision::OpenNewTab(url) => {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target_and_features(
                    &url,
                    "_blank",
                    "noopener,noreferrer",
                );
            }
        }
        RouteDecision::ShowPreview(url) => open_preview(&url, label),
    }
}

fn navigate_in_place(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    if location.assign(url).is_err() {
        let _ = location.set_href(url);
    }
}

fn open_preview(url: &str, label: &str) {
    let Some(document) = document() else {
        return;
    };
    let Some(frame) = document
        .get_element_by_id(PREVIEW_FRAME_ID)
        .and_then(|frame| frame.dyn_into::<HtmlIFrameElement>().ok())
    else {
        return;
    };

    let generation = VIEWER.with(|viewer| viewer.borrow_mut().open(url));

    let title = if label.trim().is_empty() { url } else { label };
    set_text(&document, PREVIEW_TITLE_ID, title);
    if let Some(hint) = html_element_by_id(&document, PREVIEW_HINT_ID) {
        let _ = hint.style().set_property("display", "none");
    }

    // The previous link's load handler is replaced, never queued, so a stale
    // callback cannot fire against the new generation.
    PREVIEW_FRAME_LOAD_HANDLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(previous) = slot.take() {
            let _ = frame
                .remove_event_listener_with_callback("load", previous.as_ref().unchecked_ref());
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            frame_load_signal(generation);
        }));
        let _ = frame.add_event_listener_with_callback("load", callback.as_ref().unchecked_ref());
        *slot = Some(callback);
    });

    frame.set_src(url);

    if let Some(panel) = html_element_by_id(&document, PREVIEW_PANEL_ID) {
        let _ = panel.style().set_property("display", "flex");
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        panel.scroll_into_view_with_scroll_into_view_options(&options);
    }

    spawn_local(async move {
        sleep(Duration::from_millis(PREVIEW_HINT_DELAY_MS)).await;
        hint_deadline(generation);
    });
}

fn frame_load_signal(generation: u64) {
    VIEWER.with(|viewer| {
        viewer.borrow_mut().frame_loaded(generation);
    });
}

/// Embedding refusal is invisible cross-origin, so a missing load signal by
/// the deadline reveals the hint instead.
fn hint_deadline(generation: u64) {
    let show_hint = VIEWER.with(|viewer| viewer.borrow_mut().hint_deadline_elapsed(generation));
    if !show_hint {
        return;
    }
    let Some(document) = document() else {
        return;
    };
    if let Some(hint) = html_element_by_id(&document, PREVIEW_HINT_ID) {
        let _ = hint.style().set_property("display", "block");
    }
}

pub(super) fn close_preview() {
    VIEWER.with(|viewer| viewer.borrow_mut().close());
    let Some(document) = document() else {
        return;
    };
    if let Some(frame) = document
        .get_element_by_id(PREVIEW_FRAME_ID)
        .and_then(|frame| frame.dyn_into::<HtmlIFrameElement>().ok())
    {
        frame.set_src(BLANK_FRAME_URL);
    }
    if let Some(panel) = html_element_by_id(&document, PREVIEW_PANEL_ID) {
        let _ = panel.style().set_property("display", "none");
    }
    if let Some(hint) = html_element_by_id(&document, PREVIEW_HINT_ID) {
        let _ = hint.style().set_property("display", "none");
    }
}
