/// URL name inference
///
/// Names are derived from the final URL, overrides included.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters replaced by underscores: slash and dash
static TO_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[/-]").unwrap());

/// Removed in one left-to-right pass, first alternative wins:
/// leading underscores, angle brackets, `converter:` prefixes, trailing underscores
static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^_+|[<>]|\w+:|_+$").unwrap());

/// Name given to the root URL
pub const INDEX_NAME: &str = "index";

/// Infers the URL name of a route
///
/// **Pure function**. A non-empty `name_override` wins. The root URL (`""` or
/// `"/"`) is named `index`. Anything else has slashes and dashes turned into
/// underscores, then loses leading and trailing underscores, angle brackets
/// and path-converter prefixes. A URL with nothing left after that (`_`, `-`)
/// is named `index` as well, so a name is never empty.
///
/// # Examples
///
/// ```
/// use samurai_router::get_url_name;
///
/// assert_eq!(get_url_name("colors/add/", None), "colors_add");
/// assert_eq!(get_url_name("colors/<slug:slug>", None), "colors_slug");
/// assert_eq!(get_url_name("current-time", None), "current_time");
/// assert_eq!(get_url_name("", None), "index");
/// assert_eq!(get_url_name("", Some("home")), "home");
/// ```
pub fn get_url_name(url: &str, name_override: Option<&str>) -> String {
    if let Some(name) = name_override.filter(|name| !name.is_empty()) {
        return name.to_string();
    }

    if url.is_empty() || url == "/" {
        return INDEX_NAME.to_string();
    }

    let underscored = TO_UNDERSCORES.replace_all(url, "_");
    let name = DISALLOWED_CHARS.replace_all(&underscored, "");
    if name.is_empty() {
        return INDEX_NAME.to_string();
    }

    name.into_owned()
}
