use serde::{Deserialize, Serialize};

pub const PAGE_TITLE_SUFFIX: &str = "个人主页";
pub const PAGE_SUBTITLE_TEXT: &str = "欢迎来看看我的技能与作品";

/// User identity fields supplied by the host with the initial data payload.
/// Every field is optional; the page keeps its static markup defaults when no
/// usable name can be derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl UserIdentity {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Trimmed `first last` concatenation, falling back to the username,
    /// falling back to `None`. Never yields an empty string.
    pub fn display_name(&self) -> Option<String> {
        let full_name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full_name.is_empty() {
            return Some(full_name);
        }
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|username| !username.is_empty())
            .map(str::to_string)
    }
}

pub fn page_title(display_name: &str) -> String {
    format!("{display_name} · {PAGE_TITLE_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(
        first_name: Option<&str>,
        last_name: Option<&str>,
        username: Option<&str>,
    ) -> UserIdentity {
        UserIdentity {
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
            username: username.map(str::to_string),
        }
    }

    #[test]
    fn full_name_joins_first_and_last() {
        let name = identity(Some("Ada"), Some("Lovelace"), Some("ada"))
            .display_name()
            .expect("display name");
        assert_eq!(name, "Ada Lovelace");
        assert_eq!(page_title(&name), "Ada Lovelace · 个人主页");
    }

    #[test]
    fn lone_first_name_is_used_without_trailing_space() {
        let name = identity(Some(" Ada "), None, None)
            .display_name()
            .expect("display name");
        assert_eq!(name, "Ada");
    }

    #[test]
    fn username_fallback_when_names_are_blank() {
        let name = identity(Some("  "), Some(""), Some("ada_l"))
            .display_name()
            .expect("display name");
        assert_eq!(name, "ada_l");
    }

    #[test]
    fn no_usable_field_yields_none() {
        assert_eq!(identity(None, None, Some("   ")).display_name(), None);
        assert_eq!(UserIdentity::default().display_name(), None);
    }

    #[test]
    fn parses_host_user_payload_with_extra_fields() {
        let parsed = UserIdentity::from_json_str(
            r#"{"id":1,"first_name":"Ada","last_name":"Lovelace","language_code":"en"}"#,
        )
        .expect("valid user payload");
        assert_eq!(parsed.display_name().as_deref(), Some("Ada Lovelace"));
    }
}
