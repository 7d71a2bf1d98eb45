//! Query-string editing for filter chip removal.

use percent_encoding::percent_decode_str;

/// Drops every pair whose decoded name is in `names` and keeps the rest in
/// their original order and encoding. Returns `""` when nothing is left,
/// otherwise a string starting with `?`.
pub fn strip_params<S: AsRef<str>>(search: &str, names: &[S]) -> String {
    let query = search.strip_prefix('?').unwrap_or(search);
    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let name = decode_name(pair_name(pair));
            !names.iter().any(|n| n.as_ref() == name)
        })
        .collect();

    if kept.is_empty() {
        String::new()
    } else {
        format!("?{}", kept.join("&"))
    }
}

fn pair_name(pair: &str) -> &str {
    pair.split_once('=').map_or(pair, |(name, _)| name)
}

/// Form decoding: `+` is a space, then percent escapes.
fn decode_name(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
