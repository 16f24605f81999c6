pub(crate) const PROFILE_ROOT_ID: &str = "profile-root";
pub(crate) const ENV_HINT_ID: &str = "env-hint";
pub(crate) const DISPLAY_NAME_ID: &str = "display-name";
pub(crate) const PAGE_TITLE_ID: &str = "page-title";
pub(crate) const PAGE_SUBTITLE_ID: &str = "page-subtitle";
pub(crate) const PROFILE_LINKS_ID: &str = "profile-links";
pub(crate) const PREVIEW_PANEL_ID: &str = "preview-panel";
pub(crate) const PREVIEW_TITLE_ID: &str = "preview-title";
pub(crate) const PREVIEW_FRAME_ID: &str = "preview-frame";
pub(crate) const PREVIEW_OPEN_ID: &str = "preview-open";
pub(crate) const PREVIEW_CLOSE_ID: &str = "preview-close";
pub(crate) const PREVIEW_HINT_ID: &str = "preview-hint";

pub(crate) const LINK_TARGET_ATTRIBUTE: &str = "data-link";
pub(crate) const POLICY_GLOBAL_NAME: &str = "__TGPROFILE_LINK_POLICY__";

pub(crate) const DEFAULT_PAGE_TITLE_TEXT: &str = "个人主页";
pub(crate) const DEFAULT_DISPLAY_NAME_TEXT: &str = "访客";
pub(crate) const DEFAULT_PAGE_SUBTITLE_TEXT: &str = "技能与作品一览";
pub(crate) const ENV_HINT_PREFIX: &str = "环境：";
pub(crate) const PREVIEW_OPEN_LABEL: &str = "在当前页打开";
pub(crate) const PREVIEW_CLOSE_LABEL: &str = "关闭";
pub(crate) const PREVIEW_HINT_TEXT: &str =
    "目标站点可能拒绝被嵌入，预览不可用；可改用「在当前页打开」。";
pub(crate) const BLANK_FRAME_URL: &str = "about:blank";

pub(crate) const PROFILE_LINKS: [(&str, &str); 4] = [
    ("GitHub", "https://github.com/example"),
    ("Telegram 频道", "https://t.me/example"),
    ("博客", "https://blog.example.com/"),
    ("项目", "/projects.html"),
];
