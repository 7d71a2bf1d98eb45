//! Clipboard payloads for the copy buttons.

/// Title line followed by the page URL. A missing title leaves the first line empty.
pub fn title_and_url(title: Option<&str>, url: &str) -> String {
    format!("{}\n{}", title.map(str::trim).unwrap_or_default(), url)
}

pub fn summary(text: &str) -> String {
    text.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed_and_joined_with_newline() {
        let text = title_and_url(
            Some("\n   Pregão 12/2025 - Prefeitura  \n"),
            "https://licita.ai/oportunidades/42/",
        );
        assert_eq!(text, "Pregão 12/2025 - Prefeitura\nhttps://licita.ai/oportunidades/42/");
    }

    #[test]
    fn missing_title_keeps_leading_newline() {
        assert_eq!(title_and_url(None, "https://x/y"), "\nhttps://x/y");
    }

    #[test]
    fn summary_is_trimmed() {
        assert_eq!(summary("  Objeto: obras.\n\n"), "Objeto: obras.");
    }
}
