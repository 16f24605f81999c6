pub const BROWSER_PLATFORM_LABEL: &str = "Browser";
pub const HOST_PLATFORM_PREFIX: &str = "Telegram";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_browser_preference(prefers_light: bool) -> Self {
        if prefers_light { Self::Light } else { Self::Dark }
    }
}

/// Scheme token shown in the environment hint. A non-empty host-reported
/// value is taken verbatim, however the host spells it; only when the host
/// reports nothing does the browser media-query preference decide.
pub fn resolve_scheme_token(host_scheme: Option<&str>, browser_prefers_light: bool) -> String {
    host_scheme
        .map(str::trim)
        .filter(|scheme| !scheme.is_empty())
        .map_or_else(
            || {
                ColorScheme::from_browser_preference(browser_prefers_light)
                    .as_str()
                    .to_string()
            },
            str::to_string,
        )
}

/// Human-readable environment hint: `<platform-or-Browser> · <scheme>`.
pub fn environment_label(host_platform: Option<&str>, scheme_token: &str) -> String {
    let platform = host_platform
        .map(str::trim)
        .filter(|platform| !platform.is_empty())
        .map_or_else(
            || BROWSER_PLATFORM_LABEL.to_string(),
            |platform| format!("{HOST_PLATFORM_PREFIX}/{platform}"),
        );
    format!("{platform} · {scheme_token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_scheme_wins_over_browser_preference() {
        assert_eq!(resolve_scheme_token(Some("dark"), true), "dark");
    }

    #[test]
    fn host_scheme_is_reported_verbatim() {
        assert_eq!(resolve_scheme_token(Some("sepia"), true), "sepia");
        assert_eq!(resolve_scheme_token(Some(" Dark "), true), "Dark");
    }

    #[test]
    fn browser_preference_is_authoritative_without_host() {
        assert_eq!(resolve_scheme_token(None, true), "light");
        assert_eq!(resolve_scheme_token(None, false), "dark");
    }

    #[test]
    fn blank_host_scheme_falls_back_to_browser() {
        assert_eq!(resolve_scheme_token(Some("   "), false), "dark");
        assert_eq!(resolve_scheme_token(Some(""), true), "light");
    }

    #[test]
    fn label_includes_host_platform() {
        let label = environment_label(Some("ios"), "dark");
        assert_eq!(label, "Telegram/ios · dark");
    }

    #[test]
    fn label_falls_back_to_browser_for_blank_platform() {
        assert_eq!(environment_label(Some("   "), "light"), "Browser · light");
        assert_eq!(environment_label(None, "light"), "Browser · light");
    }
}
