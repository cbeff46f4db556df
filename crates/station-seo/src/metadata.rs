//! Per-page `<head>` metadata: title, description, keywords, canonical link,
//! robots directives, search-console verification, Open Graph and Twitter cards.

use station_core::{AppConfig, PageConfig, SiteProfile, SocialText};

use crate::html::{escape, escape_attr};

const ROBOTS: &str = "index, follow";
const GOOGLEBOT: &str =
    "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1";
const OG_TYPE: &str = "website";
const TWITTER_CARD: &str = "summary_large_image";

/// Deployment-specific values that are not part of the site profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadSettings {
    pub site_url: String,
    pub google_verification: Option<String>,
    pub yandex_verification: Option<String>,
}

impl HeadSettings {
    #[must_use]
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            google_verification: None,
            yandex_verification: None,
        }
    }

    /// Resolve a path (or pass through an absolute URL) against the site URL.
    #[must_use]
    pub fn absolute_url(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("https://") || path_or_url.starts_with("http://") {
            return path_or_url.to_string();
        }
        format!(
            "{}/{}",
            self.site_url.trim_end_matches('/'),
            path_or_url.trim_start_matches('/')
        )
    }
}

impl From<&AppConfig> for HeadSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            site_url: config.site_base().to_string(),
            google_verification: config.google_verification.clone(),
            yandex_verification: config.yandex_verification.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub locale: String,
    pub site_name: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub image_width: u32,
    pub image_height: u32,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadMetadata {
    pub title: String,
    pub description: String,
    /// Document language, also served as `Content-Language`.
    pub language: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub canonical_url: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub google_verification: Option<String>,
    pub yandex_verification: Option<String>,
}

/// A single element rendered into the page head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    Meta { name: &'static str, content: String },
    HttpEquiv { name: &'static str, content: String },
    Property { property: &'static str, content: String },
    Link { rel: &'static str, href: String },
}

impl HeadTag {
    fn meta(name: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            name,
            content: content.into(),
        }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Property {
            property,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        match self {
            HeadTag::Title(text) => format!("<title>{}</title>", escape(text)),
            HeadTag::Meta { name, content } => {
                format!(
                    "<meta name=\"{name}\" content=\"{}\"/>",
                    escape_attr(content)
                )
            }
            HeadTag::HttpEquiv { name, content } => format!(
                "<meta http-equiv=\"{name}\" content=\"{}\"/>",
                escape_attr(content)
            ),
            HeadTag::Property { property, content } => format!(
                "<meta property=\"{property}\" content=\"{}\"/>",
                escape_attr(content)
            ),
            HeadTag::Link { rel, href } => {
                format!("<link rel=\"{rel}\" href=\"{}\"/>", escape_attr(href))
            }
        }
    }
}

impl HeadMetadata {
    /// Resolve head metadata for `page`, falling back to the site defaults for
    /// anything the page does not set.
    #[must_use]
    pub fn for_page(site: &SiteProfile, page: &PageConfig, settings: &HeadSettings) -> Self {
        let meta = &site.metadata;

        let title = page.title.as_deref().map_or_else(
            || meta.default_title.clone(),
            |t| meta.title_template.replacen("%s", t, 1),
        );
        let description = page
            .description
            .clone()
            .unwrap_or_else(|| meta.description.clone());
        let keywords = if page.keywords.is_empty() {
            meta.keywords.clone()
        } else {
            page.keywords.clone()
        };
        let canonical_url = settings.absolute_url(&page.path);
        let (og_title, og_description) = share_text(page, &meta.open_graph, &title, &description);
        let (twitter_title, twitter_description) =
            share_text(page, &meta.twitter, &title, &description);

        Self {
            open_graph: OpenGraph {
                locale: meta.locale.clone(),
                site_name: site.business.name.clone(),
                url: canonical_url.clone(),
                title: og_title,
                description: og_description,
                image_url: settings.absolute_url(&meta.og_image.url),
                image_width: meta.og_image.width,
                image_height: meta.og_image.height,
                image_alt: meta.og_image.alt.clone(),
            },
            twitter: TwitterCard {
                title: twitter_title,
                description: twitter_description,
                image_url: settings.absolute_url(&meta.twitter_image),
            },
            title,
            description,
            language: meta.language.clone(),
            keywords,
            author: meta.author.clone(),
            canonical_url,
            google_verification: settings.google_verification.clone(),
            yandex_verification: settings.yandex_verification.clone(),
        }
    }

    /// Tags in the order they are rendered.
    #[must_use]
    pub fn tags(&self) -> Vec<HeadTag> {
        let mut tags = vec![
            HeadTag::Title(self.title.clone()),
            HeadTag::HttpEquiv {
                name: "content-language",
                content: self.language.clone(),
            },
            HeadTag::meta("description", &self.description),
            HeadTag::meta("author", &self.author),
        ];

        if !self.keywords.is_empty() {
            tags.push(HeadTag::meta("keywords", self.keywords.join(", ")));
        }

        tags.extend([
            HeadTag::meta("creator", &self.author),
            HeadTag::meta("publisher", &self.author),
            HeadTag::meta("robots", ROBOTS),
            HeadTag::meta("googlebot", GOOGLEBOT),
            HeadTag::Link {
                rel: "canonical",
                href: self.canonical_url.clone(),
            },
        ]);

        if let Some(token) = &self.google_verification {
            tags.push(HeadTag::meta("google-site-verification", token));
        }
        if let Some(token) = &self.yandex_verification {
            tags.push(HeadTag::meta("yandex-verification", token));
        }

        let og = &self.open_graph;
        tags.extend([
            HeadTag::property("og:title", &og.title),
            HeadTag::property("og:description", &og.description),
            HeadTag::property("og:url", &og.url),
            HeadTag::property("og:site_name", &og.site_name),
            HeadTag::property("og:locale", &og.locale),
            HeadTag::property("og:image", &og.image_url),
            HeadTag::property("og:image:width", og.image_width.to_string()),
            HeadTag::property("og:image:height", og.image_height.to_string()),
            HeadTag::property("og:image:alt", &og.image_alt),
            HeadTag::property("og:type", OG_TYPE),
            HeadTag::meta("twitter:card", TWITTER_CARD),
            HeadTag::meta("twitter:title", &self.twitter.title),
            HeadTag::meta("twitter:description", &self.twitter.description),
            HeadTag::meta("twitter:image", &self.twitter.image_url),
        ]);

        tags
    }

    /// Render all tags, one per line.
    #[must_use]
    pub fn render(&self) -> String {
        self.tags()
            .iter()
            .map(HeadTag::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Share-card title and description. A page's own title or description wins;
/// otherwise the site's share text applies, then the resolved head values.
fn share_text(
    page: &PageConfig,
    text: &SocialText,
    title: &str,
    description: &str,
) -> (String, String) {
    let title = match (&page.title, &text.title) {
        (None, Some(shared)) => shared.clone(),
        _ => title.to_string(),
    };
    let description = match (&page.description, &text.description) {
        (None, Some(shared)) => shared.clone(),
        _ => description.to_string(),
    };
    (title, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> HeadSettings {
        HeadSettings::new("https://station2290.ru")
    }

    fn for_slug(slug: &str, settings: &HeadSettings) -> HeadMetadata {
        let site = SiteProfile::station2290();
        let page = site.page(slug).expect("page exists");
        HeadMetadata::for_page(&site, page, settings)
    }

    #[test]
    fn home_uses_default_title_and_site_keywords() {
        let meta = for_slug("home", &settings());
        assert_eq!(
            meta.title,
            "Station2290 - Кофейня в Махачкале | Кофе, Коктейли, Десерты"
        );
        assert!(meta.keywords.contains(&"кофейня махачкала".to_string()));
        assert_eq!(meta.canonical_url, "https://station2290.ru/");
    }

    #[test]
    fn home_uses_site_share_text() {
        let meta = for_slug("home", &settings());
        assert_eq!(meta.twitter.title, "Station2290 - Кофейня в Махачкале");
        assert_eq!(
            meta.twitter.description,
            "Уютная кофейня в центре Махачкалы. Свежеобжаренный кофе, авторские коктейли и изысканные десерты."
        );
        assert_eq!(
            meta.open_graph.title,
            "Station2290 - Кофейня в Махачкале | Кофе, Коктейли, Десерты"
        );
        assert_eq!(
            meta.open_graph.description,
            "Station2290 - уютная кофейня в центре Махачкалы. Свежеобжаренный кофе, авторские коктейли и изысканные десерты."
        );
        assert_ne!(meta.open_graph.description, meta.description);

        let rendered = meta.render();
        assert!(rendered.contains(
            "<meta name=\"twitter:title\" content=\"Station2290 - Кофейня в Махачкале\"/>"
        ));
    }

    #[test]
    fn pages_with_own_text_override_share_text() {
        let meta = for_slug("about", &settings());
        assert_eq!(meta.twitter.title, "О нас | Station2290 - Кофейня в Махачкале");
        assert_eq!(meta.open_graph.title, meta.title);
        assert_eq!(meta.open_graph.description, meta.description);
    }

    #[test]
    fn share_text_falls_back_to_head_values_when_unset() {
        let mut site = SiteProfile::station2290();
        site.metadata.twitter = SocialText::default();
        let page = site.page("home").unwrap();
        let meta = HeadMetadata::for_page(&site, page, &settings());
        assert_eq!(meta.twitter.title, meta.title);
        assert_eq!(meta.twitter.description, meta.description);
    }

    #[test]
    fn render_declares_document_language() {
        let meta = for_slug("menu", &settings());
        assert_eq!(meta.language, "ru");
        assert!(meta
            .render()
            .contains("<meta http-equiv=\"content-language\" content=\"ru\"/>"));
    }

    #[test]
    fn page_title_goes_through_template() {
        let meta = for_slug("menu", &settings());
        assert_eq!(meta.title, "Меню | Station2290 - Кофейня в Махачкале");
        assert_eq!(meta.canonical_url, "https://station2290.ru/menu");
        assert_eq!(meta.open_graph.url, meta.canonical_url);
        assert_eq!(meta.keywords[0], "меню station2290");
    }

    #[test]
    fn images_resolve_against_site_url() {
        let meta = for_slug("about", &HeadSettings::new("https://staging.station2290.ru/"));
        assert_eq!(
            meta.open_graph.image_url,
            "https://staging.station2290.ru/og-image.jpg"
        );
        assert_eq!(
            meta.twitter.image_url,
            "https://staging.station2290.ru/twitter-image.jpg"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            settings().absolute_url("https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn verification_tags_only_when_configured() {
        let without = for_slug("home", &settings()).render();
        assert!(!without.contains("google-site-verification"));

        let mut with_tokens = settings();
        with_tokens.google_verification = Some("g-token".to_string());
        with_tokens.yandex_verification = Some("y-token".to_string());
        let rendered = for_slug("home", &with_tokens).render();
        assert!(rendered.contains("<meta name=\"google-site-verification\" content=\"g-token\"/>"));
        assert!(rendered.contains("<meta name=\"yandex-verification\" content=\"y-token\"/>"));
    }

    #[test]
    fn render_includes_robots_and_open_graph() {
        let rendered = for_slug("contact", &settings()).render();
        assert!(rendered.starts_with("<title>Контакты | Station2290 - Кофейня в Махачкале</title>"));
        assert!(rendered.contains("<meta name=\"robots\" content=\"index, follow\"/>"));
        assert!(rendered.contains("max-image-preview:large"));
        assert!(rendered.contains("<link rel=\"canonical\" href=\"https://station2290.ru/contact\"/>"));
        assert!(rendered.contains("<meta property=\"og:type\" content=\"website\"/>"));
        assert!(rendered.contains("<meta property=\"og:locale\" content=\"ru_RU\"/>"));
        assert!(rendered.contains("<meta property=\"og:image:width\" content=\"1200\"/>"));
        assert!(rendered.contains("<meta name=\"twitter:card\" content=\"summary_large_image\"/>"));
    }

    #[test]
    fn render_escapes_attribute_values() {
        let mut site = SiteProfile::station2290();
        site.pages[1].description = Some("Tea \"&\" <coffee>".to_string());
        let page = site.page("about").unwrap();
        let rendered = HeadMetadata::for_page(&site, page, &settings()).render();
        assert!(rendered.contains("content=\"Tea &quot;&amp;&quot; &lt;coffee&gt;\""));
    }
}
