/// Default maximum length of a meta description
pub const MAX_DESCRIPTION_LENGTH: usize = 160;

/// Join a base URL and a site path.
///
/// Runs of `/` in the joined path are collapsed, so the result only holds
/// `//` right after the scheme. Query and fragment are left untouched.
pub fn join_url(base: &str, path: &str) -> String {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    let (scheme, rest) = match joined.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, joined.as_str()),
    };
    let (location, suffix) = rest.split_at(rest.find(['?', '#']).unwrap_or(rest.len()));

    let mut url = String::with_capacity(joined.len());
    if let Some(scheme) = scheme {
        url.push_str(scheme);
        url.push_str("://");
    }
    url.push_str(&collapse_slashes(location));
    url.push_str(suffix);
    url
}

/// Normalize a page path: leading slash ensured, repeated slashes collapsed
pub fn normalize_path(path: Option<&str>) -> String {
    match path.map(str::trim) {
        Some(p) if !p.is_empty() => collapse_slashes(&format!("/{}", p)),
        _ => "/".to_string(),
    }
}

fn collapse_slashes(s: &str) -> String {
    let mut collapsed = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '/' && collapsed.ends_with('/') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed
}

/// Shorten a description to `max_length` characters, ending with `...`
pub fn truncate_description(desc: &str, max_length: usize) -> String {
    if desc.chars().count() <= max_length {
        return desc.to_string();
    }

    let keep = max_length.saturating_sub(3);
    let mut truncated: String = desc.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}
