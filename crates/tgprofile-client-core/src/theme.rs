use serde::{Deserialize, Serialize};

/// CSS custom property written to the document root when the host's
/// `color-scheme` string is present; keeps form controls and scrollbars in
/// step with the reported scheme.
pub const NATIVE_COLOR_SCHEME_PROPERTY: &str = "color-scheme";

/// Recognized theme roles supplied by the host. Anything the host sends
/// beyond these is ignored; anything absent is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeParams {
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub hint_color: Option<String>,
    #[serde(default)]
    pub secondary_bg_color: Option<String>,
    #[serde(default)]
    pub button_color: Option<String>,
}

impl ThemeParams {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// CSS custom property writes for every present, non-empty role. The
    /// values are applied verbatim; empty or whitespace-only entries are
    /// skipped so a style variable is never cleared by a falsy host value.
    pub fn css_variable_writes(&self) -> Vec<(&'static str, &str)> {
        [
            ("--bg", self.bg_color.as_deref()),
            ("--text", self.text_color.as_deref()),
            ("--muted", self.hint_color.as_deref()),
            ("--card", self.secondary_bg_color.as_deref()),
            ("--primary", self.button_color.as_deref()),
        ]
        .into_iter()
        .filter_map(|(variable, value)| {
            let value = value?;
            if value.trim().is_empty() {
                None
            } else {
                Some((variable, value))
            }
        })
        .collect()
    }
}
