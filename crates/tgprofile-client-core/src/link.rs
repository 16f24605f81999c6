use serde::Serialize;

pub const TELEGRAM_SHORT_LINK_HOSTS: [&str; 2] = ["t.me", "telegram.me"];

/// Navigation strategy applied to every activated link. One policy is
/// selected at startup; the variants are alternatives, not layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkPolicy {
    /// Short links go to the host opener, everything else navigates the
    /// current window in place.
    SameWindow,
    /// Targets open inside the embedded preview panel first.
    #[default]
    InlinePreview,
    /// Internal targets navigate in place, external ones are handed to the
    /// host link opener when present.
    OriginAware,
    /// Delegate to the host opener, else an isolated new tab. The only
    /// policy allowed to create a new top-level context.
    HostNewTab,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyParseError {
    #[error("link policy token must not be empty")]
    EmptyToken,
    #[error("unknown link policy token: {0}")]
    UnknownToken(String),
}

impl LinkPolicy {
    pub fn parse(raw: &str) -> Result<Self, PolicyParseError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" => Err(PolicyParseError::EmptyToken),
            "same" | "same-window" => Ok(Self::SameWindow),
            "preview" | "inline-preview" => Ok(Self::InlinePreview),
            "origin" | "origin-aware" => Ok(Self::OriginAware),
            "newtab" | "new-tab" | "host-new-tab" => Ok(Self::HostNewTab),
            other => Err(PolicyParseError::UnknownToken(other.to_string())),
        }
    }
}

/// Which link-opening calls the host bridge actually exposes as functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostCapabilities {
    pub can_open_link: bool,
    pub can_open_telegram_link: bool,
}

/// A link target already resolved against the page location by the shell.
/// `scheme` is lowercase without the trailing colon; `origin` is the serialized
/// origin (empty for opaque origins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub href: String,
    pub scheme: String,
    pub origin: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Internal,
    External,
}

/// Internal means part of the same application context: a non-http(s) scheme
/// or a same-origin http(s) target.
pub fn classify_link(resolved: &ResolvedLink, page_origin: &str) -> LinkKind {
    if resolved.scheme != "http" && resolved.scheme != "https" {
        return LinkKind::Internal;
    }
    if !page_origin.is_empty() && resolved.origin == page_origin {
        return LinkKind::Internal;
    }
    LinkKind::External
}

/// Matches the host's short-link form: `http(s)://t.me/...` or
/// `http(s)://telegram.me/...`, case-insensitively, on the raw target.
pub fn is_telegram_short_link(url: &str) -> bool {
    let lowered = url.trim().to_ascii_lowercase();
    let Some(remainder) = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
    else {
        return false;
    };
    TELEGRAM_SHORT_LINK_HOSTS.iter().any(|host| {
        remainder
            .strip_prefix(host)
            .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// What the shell should do with an activated link. Every variant carries the
/// URL to act on; parse failures degrade to navigating the raw string instead
/// of aborting the click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    OpenTelegramLink(String),
    NavigateInPlace(String),
    DelegateToHost(String),
    OpenNewTab(String),
    ShowPreview(String),
}

pub fn decide_route(
    policy: LinkPolicy,
    raw_url: &str,
    resolved: Option<&ResolvedLink>,
    page_origin: &str,
    capabilities: HostCapabilities,
) -> RouteDecision {
    let target = resolved.map_or(raw_url, |resolved| resolved.href.as_str());
    match policy {
        LinkPolicy::SameWindow => {
            if capabilities.can_open_telegram_link && is_telegram_short_link(raw_url) {
                return RouteDecision::OpenTelegramLink(raw_url.to_string());
            }
            RouteDecision::NavigateInPlace(target.to_string())
        }
        LinkPolicy::InlinePreview => RouteDecision::ShowPreview(target.to_string()),
        LinkPolicy::OriginAware => match resolved {
            Some(resolved) => match classify_link(resolved, page_origin) {
                LinkKind::Internal => RouteDecision::NavigateInPlace(resolved.href.clone()),
                LinkKind::External if capabilities.can_open_link => {
                    RouteDecision::DelegateToHost(resolved.href.clone())
                }
                // Outside the host an external link still stays in this
                // window; a new tab is never opened here.
                LinkKind::External => RouteDecision::NavigateInPlace(resolved.href.clone()),
            },
            None => RouteDecision::NavigateInPlace(raw_url.to_string()),
        },
        LinkPolicy::HostNewTab => {
            if capabilities.can_open_link {
                RouteDecision::DelegateToHost(target.to_string())
            } else {
                RouteDecision::OpenNewTab(target.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(href: &str, scheme: &str, origin: &str) -> ResolvedLink {
        ResolvedLink {
            href: href.to_string(),
            scheme: scheme.to_string(),
            origin: origin.to_string(),
        }
    }

    fn host_capabilities() -> HostCapabilities {
        HostCapabilities {
            can_open_link: true,
            can_open_telegram_link: true,
        }
    }

    #[test]
    fn policy_tokens_parse_case_insensitively() {
        assert_eq!(LinkPolicy::parse("Preview"), Ok(LinkPolicy::InlinePreview));
        assert_eq!(LinkPolicy::parse(" same-window "), Ok(LinkPolicy::SameWindow));
        assert_eq!(LinkPolicy::parse("origin"), Ok(LinkPolicy::OriginAware));
        assert_eq!(LinkPolicy::parse("newtab"), Ok(LinkPolicy::HostNewTab));
    }

    #[test]
    fn policy_serializes_as_kebab_case_token() {
        let snapshot = serde_json::to_value(LinkPolicy::HostNewTab).expect("policy serializes");
        assert_eq!(snapshot, serde_json::json!("host-new-tab"));
        let default = serde_json::to_value(LinkPolicy::default()).expect("policy serializes");
        assert_eq!(default, serde_json::json!("inline-preview"));
    }

    #[test]
    fn policy_parse_rejects_empty_and_unknown_tokens() {
        assert_eq!(LinkPolicy::parse("  "), Err(PolicyParseError::EmptyToken));
        assert_eq!(
            LinkPolicy::parse("popup"),
            Err(PolicyParseError::UnknownToken("popup".to_string()))
        );
    }

    #[test]
    fn short_link_detection_matches_both_hosts() {
        assert!(is_telegram_short_link("https://t.me/example"));
        assert!(is_telegram_short_link("HTTP://Telegram.ME/example"));
        assert!(!is_telegram_short_link("https://t.me.evil.example/x"));
        assert!(!is_telegram_short_link("https://example.com/t.me/x"));
        assert!(!is_telegram_short_link("tg://resolve?domain=example"));
    }

    #[test]
    fn same_window_prefers_host_short_link_opener() {
        let link = resolved("https://t.me/example", "https", "https://t.me");
        let decision = decide_route(
            LinkPolicy::SameWindow,
            "https://t.me/example",
            Some(&link),
            "https://profile.example",
            host_capabilities(),
        );
        assert_eq!(
            decision,
            RouteDecision::OpenTelegramLink("https://t.me/example".to_string())
        );
    }

    #[test]
    fn same_window_navigates_in_place_without_short_link_capability() {
        let link = resolved("https://t.me/example", "https", "https://t.me");
        let decision = decide_route(
            LinkPolicy::SameWindow,
            "https://t.me/example",
            Some(&link),
            "https://profile.example",
            HostCapabilities::default(),
        );
        assert_eq!(
            decision,
            RouteDecision::NavigateInPlace("https://t.me/example".to_string())
        );
    }

    #[test]
    fn unresolvable_target_falls_back_to_raw_navigation() {
        let decision = decide_route(
            LinkPolicy::SameWindow,
            "http://[broken",
            None,
            "https://profile.example",
            host_capabilities(),
        );
        assert_eq!(
            decision,
            RouteDecision::NavigateInPlace("http://[broken".to_string())
        );
    }

    #[test]
    fn origin_aware_same_origin_never_reaches_host_opener() {
        let link = resolved(
            "https://profile.example/projects",
            "https",
            "https://profile.example",
        );
        let decision = decide_route(
            LinkPolicy::OriginAware,
            "/projects",
            Some(&link),
            "https://profile.example",
            host_capabilities(),
        );
        assert_eq!(
            decision,
            RouteDecision::NavigateInPlace("https://profile.example/projects".to_string())
        );
    }

    #[test]
    fn origin_aware_non_http_scheme_is_internal() {
        let link = resolved("mailto:ada@example.com", "mailto", "");
        let decision = decide_route(
            LinkPolicy::OriginAware,
            "mailto:ada@example.com",
            Some(&link),
            "https://profile.example",
            host_capabilities(),
        );
        assert_eq!(
            decision,
            RouteDecision::NavigateInPlace("mailto:ada@example.com".to_string())
        );
    }

    #[test]
    fn origin_aware_external_delegates_to_host() {
        let link = resolved("https://blog.example/post", "https", "https://blog.example");
        let decision = decide_route(
            LinkPolicy::OriginAware,
            "https://blog.example/post",
            Some(&link),
            "https://profile.example",
            host_capabilities(),
        );
        assert_eq!(
            decision,
            RouteDecision::DelegateToHost("https://blog.example/post".to_string())
        );
    }

    #[test]
    fn origin_aware_external_without_host_stays_in_window() {
        let link = resolved("https://blog.example/post", "https", "https://blog.example");
        let decision = decide_route(
            LinkPolicy::OriginAware,
            "https://blog.example/post",
            Some(&link),
            "https://profile.example",
            HostCapabilities::default(),
        );
        assert_eq!(
            decision,
            RouteDecision::NavigateInPlace("https://blog.example/post".to_string())
        );
    }

    #[test]
    fn inline_preview_carries_resolved_href() {
        let link = resolved(
            "https://profile.example/projects",
            "https",
            "https://profile.example",
        );
        let decision = decide_route(
            LinkPolicy::InlinePreview,
            "/projects",
            Some(&link),
            "https://profile.example",
            HostCapabilities::default(),
        );
        assert_eq!(
            decision,
            RouteDecision::ShowPreview("https://profile.example/projects".to_string())
        );
    }

    #[test]
    fn host_new_tab_prefers_host_opener_then_isolated_tab() {
        let link = resolved("https://blog.example/post", "https", "https://blog.example");
        let delegated = decide_route(
            LinkPolicy::HostNewTab,
            "https://blog.example/post",
            Some(&link),
            "https://profile.example",
            host_capabilities(),
        );
        assert_eq!(
            delegated,
            RouteDecision::DelegateToHost("https://blog.example/post".to_string())
        );

        let standalone = decide_route(
            LinkPolicy::HostNewTab,
            "https://blog.example/post",
            Some(&link),
            "https://profile.example",
            HostCapabilities::default(),
        );
        assert_eq!(
            standalone,
            RouteDecision::OpenNewTab("https://blog.example/post".to_string())
        );
    }
}
