use tgprofile_client_core::link::{LinkPolicy, PolicyParseError};

pub(crate) const POLICY_QUERY_KEY: &str = "links";

/// First `links=` value in the location search string, if any.
pub(crate) fn policy_token_from_search(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == POLICY_QUERY_KEY && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

/// Resolves the link policy for this page load. The window global override
/// wins over the query string; an unparseable token keeps the default and is
/// reported back so the shell can log it.
pub(crate) fn select_policy(
    global_token: Option<&str>,
    search: &str,
) -> (LinkPolicy, Option<PolicyParseError>) {
    let token = global_token
        .map(str::to_string)
        .filter(|token| !token.trim().is_empty())
        .or_else(|| policy_token_from_search(search));
    match token {
        None => (LinkPolicy::default(), None),
        Some(token) => match LinkPolicy::parse(&token) {
            Ok(policy) => (policy, None),
            Err(error) => (LinkPolicy::default(), Some(error)),
        },
    }
}
