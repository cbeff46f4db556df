//! JSON-LD serialization and the `<script>` element that carries it.

use std::borrow::Cow;

use crate::jsonld::StructuredData;
use crate::SeoError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Two-space indentation.
    #[default]
    Pretty,
    Compact,
}

/// Serialize a record to JSON text.
///
/// # Errors
///
/// Returns `SeoError::Serialize` if serialization fails.
pub fn to_json(data: &StructuredData, style: JsonStyle) -> Result<String, SeoError> {
    let json = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(data)?,
        JsonStyle::Compact => serde_json::to_string(data)?,
    };
    Ok(json)
}

/// Render a record as a `<script type="application/ld+json">` element.
///
/// # Errors
///
/// Returns `SeoError::Serialize` if serialization fails.
pub fn render_script(data: &StructuredData, style: JsonStyle) -> Result<String, SeoError> {
    let json = to_json(data, style)?;
    Ok(format!(
        "<script type=\"application/ld+json\">\n{}\n</script>",
        escape_script_json(&json)
    ))
}

/// Replace `<`, `>` and `&` with JSON unicode escapes so the payload can never
/// terminate the enclosing script element. The result parses to the same value.
pub fn escape_script_json(json: &str) -> Cow<'_, str> {
    if !json.contains(['<', '>', '&']) {
        return Cow::Borrowed(json);
    }

    let mut out = String::with_capacity(json.len() + 16);
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use station_core::SiteProfile;

    use super::*;
    use crate::{PageKind, StructuredDataBuilder};

    #[test]
    fn pretty_output_uses_two_space_indent() {
        let data = StructuredDataBuilder::default().build(PageKind::General);
        let json = to_json(&data, JsonStyle::Pretty).unwrap();
        assert!(json.starts_with("{\n  \"@context\": \"https://schema.org\","));
    }

    #[test]
    fn compact_output_is_single_line() {
        let data = StructuredDataBuilder::default().build(PageKind::Menu);
        let json = to_json(&data, JsonStyle::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with("{\"@context\":\"https://schema.org\",\"@type\":\"Restaurant\""));
    }

    #[test]
    fn script_wraps_json_ld() {
        let data = StructuredDataBuilder::default().build(PageKind::About);
        let script = render_script(&data, JsonStyle::Compact).unwrap();
        assert!(script.starts_with("<script type=\"application/ld+json\">\n{"));
        assert!(script.ends_with("}\n</script>"));
    }

    #[test]
    fn script_cannot_be_closed_by_content() {
        let mut site = SiteProfile::station2290();
        site.business.description = "</script><script>alert(1)</script> & more".to_string();
        let data = StructuredDataBuilder::new(site).build(PageKind::General);

        let script = render_script(&data, JsonStyle::Compact).unwrap();
        assert_eq!(script.matches("</script>").count(), 1);

        let body = script
            .strip_prefix("<script type=\"application/ld+json\">\n")
            .and_then(|s| s.strip_suffix("\n</script>"))
            .unwrap();
        let parsed: Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed["description"],
            "</script><script>alert(1)</script> & more"
        );
    }

    #[test]
    fn escape_borrows_clean_input() {
        assert!(matches!(escape_script_json("{\"a\":1}"), Cow::Borrowed(_)));
    }
}
