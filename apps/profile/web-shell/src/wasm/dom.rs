use super::*;

pub(super) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub(super) fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Writes `text` into the element with the given id; silently no-ops when the
/// element is absent.
pub(super) fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(element) = html_element_by_id(document, id) {
        element.set_inner_text(text);
    }
}

fn create_html_element(
    document: &Document,
    tag: &str,
    id: &str,
) -> Result<HtmlElement, String> {
    let element = document
        .create_element(tag)
        .map_err(|_| format!("failed to create {id} element"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("{id} element is not HtmlElement"))?;
    if !id.is_empty() {
        element.set_id(id);
    }
    Ok(element)
}

/// Builds the profile page skeleton unless the host page already ships its
/// own markup with the expected ids. Visual tokens reference the CSS custom
/// properties the theme adapter writes, with static fallbacks.
pub(super) fn ensure_profile_dom() -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    let document = window
        .document()
        .ok_or_else(|| "document is unavailable".to_string())?;
    let body = document
        .body()
        .ok_or_else(|| "document body is unavailable".to_string())?;

    if document.get_element_by_id(PROFILE_ROOT_ID).is_some() {
        return Ok(());
    }

    if let Ok(html) = document
        .document_element()
        .ok_or(())
        .and_then(|root| root.dyn_into::<HtmlElement>().map_err(|_| ()))
    {
        let _ = html.style().set_property("background", "var(--bg, #17212b)");
        let _ = html.style().set_property("color", "var(--text, #f5f5f5)");
    }

    let root = create_html_element(&document, "section", PROFILE_ROOT_ID)?;
    let _ = root.style().set_property("max-width", "640px");
    let _ = root.style().set_property("margin", "0 auto");
    let _ = root.style().set_property("padding", "24px 16px 48px");
    let _ = root.style().set_property(
        "font-family",
        "-apple-system, BlinkMacSystemFont, \"Segoe UI\", sans-serif",
    );

    let env_hint = create_html_element(&document, "div", ENV_HINT_ID)?;
    let _ = env_hint.style().set_property("font-size", "12px");
    let _ = env_hint.style().set_property("color", "var(--muted, #708499)");
    let _ = env_hint.style().set_property("margin-bottom", "16px");
    let _ = root.append_child(&env_hint);

    let title = create_html_element(&document, "h1", PAGE_TITLE_ID)?;
    title.set_inner_text(DEFAULT_PAGE_TITLE_TEXT);
    let _ = title.style().set_property("font-size", "22px");
    let _ = title.style().set_property("margin", "0 0 4px");
    let _ = root.append_child(&title);

    let display_name = create_html_element(&document, "div", DISPLAY_NAME_ID)?;
    display_name.set_inner_text(DEFAULT_DISPLAY_NAME_TEXT);
    let _ = display_name.style().set_property("font-size", "16px");
    let _ = root.append_child(&display_name);

    let subtitle = create_html_element(&document, "div", PAGE_SUBTITLE_ID)?;
    subtitle.set_inner_text(DEFAULT_PAGE_SUBTITLE_TEXT);
    let _ = subtitle.style().set_property("color", "var(--muted, #708499)");
    let _ = subtitle.style().set_property("margin", "4px 0 20px");
    let _ = root.append_child(&subtitle);

    let links = create_html_element(&document, "div", PROFILE_LINKS_ID)?;
    let _ = links.style().set_property("display", "flex");
    let _ = links.style().set_property("flex-direction", "column");
    let _ = links.style().set_property("gap", "10px");
    for (label, url) in PROFILE_LINKS {
        let card = create_html_element(&document, "button", "")?;
        let _ = card.set_attribute("type", "button");
        let _ = card.set_attribute(LINK_TARGET_ATTRIBUTE, url);
        card.set_inner_text(label);
        let _ = card.style().set_property("text-align", "left");
        let _ = card.style().set_property("padding", "12px 14px");
        let _ = card.style().set_property("border-radius", "10px");
        let _ = card.style().set_property("border", "none");
        let _ = card.style().set_property("background", "var(--card, #232e3c)");
        let _ = card.style().set_property("color", "var(--text, #f5f5f5)");
        let _ = card.style().set_property("font-size", "15px");
        let _ = card.style().set_property("cursor", "pointer");
        let _ = links.append_child(&card);
    }
    let _ = root.append_child(&links);

    let panel = create_html_element(&document, "section", PREVIEW_PANEL_ID)?;
    let _ = panel.style().set_property("display", "none");
    let _ = panel.style().set_property("flex-direction", "column");
    let _ = panel.style().set_property("gap", "8px");
    let _ = panel.style().set_property("margin-top", "20px");
    let _ = panel.style().set_property("padding", "12px");
    let _ = panel.style().set_property("border-radius", "12px");
    let _ = panel.style().set_property("background", "var(--card, #232e3c)");

    let panel_header = create_html_element(&document, "div", "")?;
    let _ = panel_header.style().set_property("display", "flex");
    let _ = panel_header.style().set_property("align-items", "center");
    let _ = panel_header.style().set_property("gap", "8px");

    let preview_title = create_html_element(&document, "span", PREVIEW_TITLE_ID)?;
    let _ = preview_title.style().set_property("flex", "1");
    let _ = preview_title.style().set_property("font-size", "14px");
    let _ = preview_title.style().set_property("overflow", "hidden");
    let _ = preview_title.style().set_property("text-overflow", "ellipsis");
    let _ = preview_title.style().set_property("white-space", "nowrap");
    let _ = panel_header.append_child(&preview_title);

    for (id, label) in [
        (PREVIEW_OPEN_ID, PREVIEW_OPEN_LABEL),
        (PREVIEW_CLOSE_ID, PREVIEW_CLOSE_LABEL),
    ] {
        let button = create_html_element(&document, "button", id)?;
        let _ = button.set_attribute("type", "button");
        button.set_inner_text(label);
        let _ = button.style().set_property("padding", "6px 10px");
        let _ = button.style().set_property("border-radius", "8px");
        let _ = button.style().set_property("border", "none");
        let _ = button
            .style()
            .set_property("background", "var(--primary, #5288c1)");
        let _ = button.style().set_property("color", "var(--text, #f5f5f5)");
        let _ = button.style().set_property("cursor", "pointer");
        let _ = panel_header.append_child(&button);
    }
    let _ = panel.append_child(&panel_header);

    let frame = document
        .create_element("iframe")
        .map_err(|_| "failed to create preview frame".to_string())?
        .dyn_into::<HtmlIFrameElement>()
        .map_err(|_| "preview frame is not HtmlIFrameElement".to_string())?;
    frame.set_id(PREVIEW_FRAME_ID);
    let _ = frame.style().set_property("width", "100%");
    let _ = frame.style().set_property("height", "320px");
    let _ = frame.style().set_property("border", "none");
    let _ = frame.style().set_property("border-radius", "8px");
    let _ = frame.style().set_property("background", "#ffffff");
    let _ = panel.append_child(&frame);

    let hint = create_html_element(&document, "div", PREVIEW_HINT_ID)?;
    hint.set_inner_text(PREVIEW_HINT_TEXT);
    let _ = hint.style().set_property("display", "none");
    let _ = hint.style().set_property("font-size", "12px");
    let _ = hint.style().set_property("color", "var(--muted, #708499)");
    let _ = panel.append_child(&hint);

    let _ = root.append_child(&panel);
    body.append_child(&root)
        .map_err(|_| "failed to append profile root".to_string())?;
    Ok(())
}

/// Attaches a click handler to every element carrying a link-target
/// attribute. Installed once; the page's link set is static.
pub(super) fn install_link_handlers() -> Result<(), String> {
    let document = document().ok_or_else(|| "document is unavailable".to_string())?;
    let targets = document
        .query_selector_all(&format!("[{LINK_TARGET_ATTRIBUTE}]"))
        .map_err(|_| "link target query failed".to_string())?;

    LINK_CLICK_HANDLERS.with(|slot| {
        let mut handlers = slot.borrow_mut();
        if !handlers.is_empty() {
            return;
        }
        for index in 0..targets.length() {
            let Some(node) = targets.item(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<HtmlElement>() else {
                continue;
            };
            let Some(url) = element.get_attribute(LINK_TARGET_ATTRIBUTE) else {
                continue;
            };
            if url.trim().is_empty() {
                continue;
            }
            let label = element.inner_text();
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
                handle_link_activation(&url, &label);
            }));
            let _ = element
                .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
            handlers.push(callback);
        }
    });
    Ok(())
}

/// Wires the preview panel's open and close buttons. The panel is optional:
/// a host page that ships its own markup without preview controls gets no
/// handlers, and absent elements are skipped like every other lookup.
pub(super) fn install_preview_handlers() {
    let Some(document) = document() else {
        return;
    };

    if let Some(open_button) = html_element_by_id(&document, PREVIEW_OPEN_ID) {
        PREVIEW_OPEN_HANDLER.with(|slot| {
            if slot.borrow().is_some() {
                return;
            }
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
                open_previewed_link_in_current_window();
            }));
            let _ = open_button
                .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
            *slot.borrow_mut() = Some(callback);
        });
    }

    if let Some(close_button) = html_element_by_id(&document, PREVIEW_CLOSE_ID) {
        PREVIEW_CLOSE_HANDLER.with(|slot| {
            if slot.borrow().is_some() {
                return;
            }
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
                close_preview();
            }));
            let _ = close_button
                .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
            *slot.borrow_mut() = Some(callback);
        });
    }
}
