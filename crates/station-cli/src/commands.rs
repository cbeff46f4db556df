//! Command handlers for the CLI.
//!
//! Each handler returns the text to print so `main` owns stdout and the
//! handlers stay testable without capturing output.

use std::fmt;
use std::path::{Path, PathBuf};

use station_core::SiteProfile;
use station_seo::{
    render_script, to_json, HeadSettings, JsonStyle, PageHead, PageKind, StructuredDataBuilder,
};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct JsonldOptions {
    pub compact: bool,
    pub script: bool,
    pub strict: bool,
}

/// Render the JSON-LD record for a page-kind tag.
///
/// Unrecognized tags fall back to the general profile with a warning unless
/// `strict` is set.
///
/// # Errors
///
/// Returns an error if `strict` is set and the tag is not a known kind, or
/// if serialization fails.
pub(crate) fn render_jsonld(
    builder: &StructuredDataBuilder,
    kind: &str,
    options: JsonldOptions,
) -> anyhow::Result<String> {
    let data = if options.strict {
        builder.build(kind.parse::<PageKind>()?)
    } else {
        builder.build_for_tag(kind).value
    };

    let style = if options.compact {
        JsonStyle::Compact
    } else {
        JsonStyle::Pretty
    };

    let rendered = if options.script {
        render_script(&data, style)?
    } else {
        to_json(&data, style)?
    };
    Ok(rendered)
}

/// Render the `<head>` fragment for the page registered under `slug`.
///
/// # Errors
///
/// Returns an error if no page has that slug.
pub(crate) fn render_head(
    builder: &StructuredDataBuilder,
    settings: &HeadSettings,
    slug: &str,
) -> anyhow::Result<String> {
    let head = PageHead::for_slug(builder, settings, slug)?;
    Ok(head.render()?.trim_end().to_string())
}

pub(crate) fn render_pages(site: &SiteProfile) -> String {
    let slug_width = site
        .pages
        .iter()
        .map(|p| p.slug.len())
        .max()
        .unwrap_or(0);
    let path_width = site
        .pages
        .iter()
        .map(|p| p.path.len())
        .max()
        .unwrap_or(0);

    site.pages
        .iter()
        .map(|page| {
            let resolution = PageKind::resolve(&page.structured_data);
            let marker = if resolution.is_fallback() {
                format!(" (unrecognized '{}')", page.structured_data)
            } else {
                String::new()
            };
            format!(
                "{:<slug_width$}  {:<path_width$}  {}{marker}",
                page.slug,
                page.path,
                resolution.kind()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Outcome of a successful `check` run.
#[derive(Debug)]
pub(crate) struct SiteCheck {
    pub path: PathBuf,
    pub business: String,
    pub pages: usize,
    pub menu_items: usize,
}

impl fmt::Display for SiteCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ok ({}, {} pages, {} menu items)",
            self.path.display(),
            self.business,
            self.pages,
            self.menu_items
        )
    }
}

/// Validate the site file and make sure every page declares a known kind.
///
/// Unlike the other commands this never falls back to the built-in profile:
/// a missing file is an error.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated, or if
/// any page carries an unrecognized structured-data tag.
pub(crate) fn check_site(path: &Path) -> anyhow::Result<SiteCheck> {
    let site = station_core::load_site(path)?;

    let unrecognized: Vec<String> = site
        .pages
        .iter()
        .filter(|page| PageKind::resolve(&page.structured_data).is_fallback())
        .map(|page| format!("{} ('{}')", page.slug, page.structured_data))
        .collect();
    if !unrecognized.is_empty() {
        anyhow::bail!(
            "pages with unrecognized structured-data kinds: {}",
            unrecognized.join(", ")
        );
    }

    Ok(SiteCheck {
        path: path.to_path_buf(),
        business: site.business.name.clone(),
        pages: site.pages.len(),
        menu_items: site.menu.sections.iter().map(|s| s.items.len()).sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_yaml() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/site.yaml")
    }

    #[test]
    fn jsonld_defaults_to_pretty_json() {
        let builder = StructuredDataBuilder::default();
        let out = render_jsonld(&builder, "menu", JsonldOptions::default()).unwrap();
        assert!(out.starts_with("{\n"));
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["hasMenu"]["@type"], "Menu");
    }

    #[test]
    fn jsonld_compact_is_single_line() {
        let builder = StructuredDataBuilder::default();
        let options = JsonldOptions {
            compact: true,
            ..JsonldOptions::default()
        };
        let out = render_jsonld(&builder, "about", options).unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn jsonld_script_wraps_output() {
        let builder = StructuredDataBuilder::default();
        let options = JsonldOptions {
            script: true,
            ..JsonldOptions::default()
        };
        let out = render_jsonld(&builder, "restaurant", options).unwrap();
        assert!(out.starts_with("<script type=\"application/ld+json\">\n"));
        assert!(out.ends_with("\n</script>"));
    }

    #[test]
    fn jsonld_unknown_kind_falls_back_unless_strict() {
        let builder = StructuredDataBuilder::default();
        let fallback = render_jsonld(&builder, "blog", JsonldOptions::default()).unwrap();
        let general = render_jsonld(&builder, "restaurant", JsonldOptions::default()).unwrap();
        assert_eq!(fallback, general);

        let strict = JsonldOptions {
            strict: true,
            ..JsonldOptions::default()
        };
        assert!(render_jsonld(&builder, "blog", strict).is_err());
        assert!(render_jsonld(&builder, "menu", strict).is_ok());
    }

    #[test]
    fn head_renders_known_page() {
        let builder = StructuredDataBuilder::default();
        let settings = HeadSettings::new("https://station2290.ru");
        let out = render_head(&builder, &settings, "contact").unwrap();
        assert!(out.contains("<link rel=\"canonical\" href=\"https://station2290.ru/contact\"/>"));
        assert!(out.ends_with("</script>"));
    }

    #[test]
    fn head_rejects_unknown_page() {
        let builder = StructuredDataBuilder::default();
        let settings = HeadSettings::new("https://station2290.ru");
        assert!(render_head(&builder, &settings, "blog").is_err());
    }

    #[test]
    fn pages_lists_every_page_with_its_kind() {
        let out = render_pages(&SiteProfile::station2290());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("home"));
        assert!(lines[0].ends_with("restaurant"));
        assert!(lines[3].ends_with("local-business"));
    }

    #[test]
    fn pages_marks_unrecognized_kinds() {
        let mut site = SiteProfile::station2290();
        site.pages[1].structured_data = "aboot".to_string();
        let out = render_pages(&site);
        assert!(out.contains("restaurant (unrecognized 'aboot')"));
    }

    #[test]
    fn check_accepts_bundled_site_file() {
        let report = check_site(&site_yaml()).unwrap();
        assert_eq!(report.business, "Station2290");
        assert_eq!(report.pages, 4);
        assert!(report.to_string().contains(": ok (Station2290, 4 pages"));
    }

    #[test]
    fn check_fails_on_missing_file() {
        assert!(check_site(Path::new("/nonexistent/site.yaml")).is_err());
    }
}
