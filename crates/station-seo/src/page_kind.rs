use std::str::FromStr;

use crate::SeoError;

/// Page context that decides which extension is attached to the business record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    General,
    LocalBusiness,
    About,
    Menu,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [
        PageKind::General,
        PageKind::LocalBusiness,
        PageKind::About,
        PageKind::Menu,
    ];

    /// Wire tag used in page configuration and URLs.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            PageKind::General => "restaurant",
            PageKind::LocalBusiness => "local-business",
            PageKind::About => "about",
            PageKind::Menu => "menu",
        }
    }

    /// Resolve a tag without failing: unrecognized tags degrade to
    /// [`PageKind::General`], and the returned resolution records that they did.
    #[must_use]
    pub fn resolve(tag: &str) -> KindResolution {
        match tag.parse::<PageKind>() {
            Ok(kind) => KindResolution::Exact(kind),
            Err(_) => KindResolution::Fallback {
                requested: tag.to_string(),
            },
        }
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PageKind {
    type Err = SeoError;

    /// Strict parse. Only the exact wire tags match; any other spelling,
    /// including a different case or surrounding whitespace, is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restaurant" => Ok(PageKind::General),
            "local-business" => Ok(PageKind::LocalBusiness),
            "about" => Ok(PageKind::About),
            "menu" => Ok(PageKind::Menu),
            _ => Err(SeoError::UnrecognizedPageKind(s.to_string())),
        }
    }
}

/// Outcome of resolving a page-kind tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindResolution {
    Exact(PageKind),
    /// The tag was not recognized; the general profile stands in for it.
    Fallback { requested: String },
}

impl KindResolution {
    #[must_use]
    pub fn kind(&self) -> PageKind {
        match self {
            KindResolution::Exact(kind) => *kind,
            KindResolution::Fallback { .. } => PageKind::General,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, KindResolution::Fallback { .. })
    }
}

/// A value produced from a page-kind tag, along with how the tag resolved.
#[derive(Debug, Clone)]
pub struct Resolved<T> {
    pub value: T,
    pub resolution: KindResolution,
}
