//! URL fragment to tab matching.

/// Index of the first tab whose `href` equals `hash` (e.g. `#aba-documentos`).
/// An empty hash or a bare `#` never selects anything.
pub fn match_fragment<'a, I>(hash: &str, hrefs: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    if hash.len() <= 1 || !hash.starts_with('#') {
        return None;
    }
    hrefs.into_iter().position(|href| href == hash)
}
