use std::sync::Arc;

use station_core::SiteProfile;

use crate::jsonld::{BusinessRecord, MenuRecord, OrganizationRecord, StructuredData};
use crate::page_kind::{KindResolution, PageKind, Resolved};

/// Builds the JSON-LD record for a page from an injected site profile.
///
/// Every call constructs a fresh record; the builder holds no mutable state
/// and can be shared across threads.
#[derive(Debug, Clone)]
pub struct StructuredDataBuilder {
    site: Arc<SiteProfile>,
}

impl StructuredDataBuilder {
    pub fn new(site: impl Into<Arc<SiteProfile>>) -> Self {
        Self { site: site.into() }
    }

    #[must_use]
    pub fn site(&self) -> &SiteProfile {
        &self.site
    }

    /// Build the record for `kind`. Total over [`PageKind`].
    #[must_use]
    pub fn build(&self, kind: PageKind) -> StructuredData {
        let business = BusinessRecord::from(&self.site.business);

        match kind {
            PageKind::General => StructuredData::General(business),
            PageKind::LocalBusiness => StructuredData::LocalBusiness(business),
            PageKind::Menu => StructuredData::Menu {
                business,
                menu: MenuRecord::from(&self.site.menu),
            },
            PageKind::About => StructuredData::About {
                business,
                organization: OrganizationRecord::from(&self.site.organization),
            },
        }
    }

    /// Build from a page-kind tag, degrading unknown tags to the general
    /// profile. The fallback is logged and reported in the resolution.
    #[must_use]
    pub fn build_for_tag(&self, tag: &str) -> Resolved<StructuredData> {
        let resolution = PageKind::resolve(tag);

        if let KindResolution::Fallback { requested } = &resolution {
            tracing::warn!(
                requested = %requested,
                fallback = %PageKind::General,
                "unrecognized page kind; emitting general structured data"
            );
        }

        Resolved {
            value: self.build(resolution.kind()),
            resolution,
        }
    }
}

impl Default for StructuredDataBuilder {
    fn default() -> Self {
        Self::new(SiteProfile::station2290())
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
