use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::warn;

// Create static selectors to avoid recompiling them each time
static ARTICLE_PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("article p").expect("Failed to parse article selector")
});

static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("p").expect("Failed to parse paragraph selector")
});

/// True when the (trimmed) input should be treated as a link rather than
/// claim text. The prefix check is case-sensitive.
pub fn looks_like_url(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}

/// Fetches a page and pulls out its main article text. `None` means the
/// caller should fall back to the raw URL string.
#[async_trait]
pub trait ArticleExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> Option<String>;
}

pub struct HttpArticleExtractor {
    client: Client,
}

impl HttpArticleExtractor {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArticleExtractor for HttpArticleExtractor {
    async fn extract(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!(url, status = %response.status(), "article fetch returned non-success status");
                return None;
            }
            Err(e) => {
                warn!(url, error = %e, "article fetch failed");
                return None;
            }
        };

        let html = match response.text().await {
            Ok(html) => html,
            Err(e) => {
                warn!(url, error = %e, "failed to read article body");
                return None;
            }
        };

        extract_article_text(&html)
    }
}

/// Pulls paragraph text out of an HTML document, preferring paragraphs
/// inside an `<article>` element over page-wide ones.
pub fn extract_article_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let mut paragraphs: Vec<String> = document
        .select(&ARTICLE_PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if paragraphs.is_empty() {
        paragraphs = document
            .select(&PARAGRAPH_SELECTOR)
            .map(|p| p.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
    }

    if paragraphs.is_empty() {
        return None;
    }

    Some(paragraphs.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_accepts_http_and_https_prefixes() {
        assert!(looks_like_url("http://example.com/nota"));
        assert!(looks_like_url("https://example.com/nota"));
    }

    #[test]
    fn classifier_rejects_plain_text_and_other_schemes() {
        assert!(!looks_like_url("La Tierra es plana"));
        assert!(!looks_like_url("ftp://example.com"));
        assert!(!looks_like_url("HTTP://example.com"));
        assert!(!looks_like_url("ver https://example.com"));
    }

    #[test]
    fn extraction_prefers_article_paragraphs() {
        let html = r#"
            <html><body>
              <p>Menú de navegación</p>
              <article>
                <p>Primer párrafo de la noticia.</p>
                <p>Segundo párrafo.</p>
              </article>
            </body></html>
        "#;
        let text = extract_article_text(html).unwrap();
        assert_eq!(text, "Primer párrafo de la noticia.\n\nSegundo párrafo.");
    }

    #[test]
    fn extraction_falls_back_to_page_paragraphs() {
        let html = "<html><body><div><p>Solo un párrafo suelto.</p></div></body></html>";
        assert_eq!(
            extract_article_text(html).as_deref(),
            Some("Solo un párrafo suelto.")
        );
    }

    #[test]
    fn extraction_returns_none_without_text() {
        assert_eq!(extract_article_text("<html><body><img src=\"x\"></body></html>"), None);
        assert_eq!(extract_article_text(""), None);
    }
}
