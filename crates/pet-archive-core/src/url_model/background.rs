//! Background colour rewriting for pet image URLs.

use url::Url;

/// Query parameter the image server reads the background colour from.
pub const BACKGROUND_PARAM: &str = "bg";

/// Sets `bg=<color>` on an image URL, with any leading `#` stripped from `color_hex`.
///
/// An existing `bg` is overwritten, never duplicated. Returns `image_url`
/// unchanged if it is not an absolute URL.
///
/// # Examples
///
/// - `set_background("https://example.com/img.png?x=1", "#ff00aa")` → `"https://example.com/img.png?x=1&bg=ff00aa"`
/// - `set_background("not a url", "#000000")` → `"not a url"`
pub fn set_background(image_url: &str, color_hex: &str) -> String {
    let mut url = match Url::parse(image_url) {
        Ok(url) => url,
        Err(_) => return image_url.to_string(),
    };
    let color = color_hex.strip_prefix('#').unwrap_or(color_hex);
    set_query_param(&mut url, BACKGROUND_PARAM, color);
    url.to_string()
}

/// Insert-or-overwrite a query parameter.
///
/// The first `name` pair keeps its position and takes `value`; later pairs
/// with the same name are removed. If there is none, the pair is appended.
/// The query is re-serialized as `application/x-www-form-urlencoded`.
pub fn set_query_param(url: &mut Url, name: &str, value: &str) {
    let mut found = false;
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter_map(|(k, v)| {
            if k == name {
                if found {
                    return None;
                }
                found = true;
                Some((k.into_owned(), value.to_string()))
            } else {
                Some((k.into_owned(), v.into_owned()))
            }
        })
        .collect();

    let mut query = url.query_pairs_mut();
    query.clear().extend_pairs(pairs);
    if !found {
        query.append_pair(name, value);
    }
}
