//! Character set detection from the process locale.

use std::env;

/// Reported when no locale is configured or the codeset is unknown.
pub const ASCII_CHARMAP: &str = "US-ASCII";

/// The codeset of the active locale, e.g. `UTF-8`.
///
/// Looks at `LC_ALL`, `LC_CTYPE` and `LANG` in that order, like the C library
/// does for `LC_CTYPE`.
pub fn charmap() -> String {
    if cfg!(windows) {
        return ASCII_CHARMAP.to_string();
    }

    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|name| env::var(name).ok().filter(|value| !value.is_empty()));

    charmap_from_locale(locale.as_deref().unwrap_or_default())
}

/// Extracts the codeset from a `language[_territory][.codeset][@modifier]`
/// locale name.
pub fn charmap_from_locale(locale: &str) -> String {
    let name = match locale.split_once('@') {
        Some((name, _modifier)) => name,
        None => locale,
    };

    match name.split_once('.') {
        Some((_, codeset)) if !codeset.is_empty() => codeset.to_string(),
        _ => ASCII_CHARMAP.to_string(),
    }
}

pub fn is_utf8(charmap: &str) -> bool {
    charmap.eq_ignore_ascii_case("UTF-8") || charmap.eq_ignore_ascii_case("UTF8")
}
