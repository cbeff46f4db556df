use crate::builder::StructuredDataBuilder;
use crate::jsonld::StructuredData;
use crate::metadata::{HeadMetadata, HeadSettings};
use crate::page_kind::Resolved;
use crate::script::{render_script, JsonStyle};
use crate::SeoError;

/// Everything a page view embeds in its `<head>`.
#[derive(Debug, Clone)]
pub struct PageHead {
    pub slug: String,
    pub metadata: HeadMetadata,
    pub structured_data: Resolved<StructuredData>,
}

impl PageHead {
    /// Assemble the head for the page registered under `slug`.
    ///
    /// # Errors
    ///
    /// Returns `SeoError::UnknownPage` if no page has that slug.
    pub fn for_slug(
        builder: &StructuredDataBuilder,
        settings: &HeadSettings,
        slug: &str,
    ) -> Result<Self, SeoError> {
        let site = builder.site();
        let page = site
            .page(slug)
            .ok_or_else(|| SeoError::UnknownPage(slug.to_string()))?;

        Ok(Self {
            slug: page.slug.clone(),
            metadata: HeadMetadata::for_page(site, page, settings),
            structured_data: builder.build_for_tag(&page.structured_data),
        })
    }

    /// Render metadata tags followed by the JSON-LD script.
    ///
    /// # Errors
    ///
    /// Returns `SeoError::Serialize` if the structured data cannot be serialized.
    pub fn render(&self) -> Result<String, SeoError> {
        let script = render_script(&self.structured_data.value, JsonStyle::Pretty)?;
        Ok(format!("{}\n{script}\n", self.metadata.render()))
    }
}
