//! Search-engine metadata for Station2290 pages.
//!
//! [`StructuredDataBuilder`] maps a [`PageKind`] to a schema.org JSON-LD record
//! built from an injected [`station_core::SiteProfile`]. [`PageHead`] combines
//! that record with the per-page `<title>`/`<meta>` tags.

pub mod builder;
pub mod error;
pub mod head;
mod html;
pub mod jsonld;
pub mod metadata;
pub mod page_kind;
pub mod script;

pub use builder::StructuredDataBuilder;
pub use error::SeoError;
pub use head::PageHead;
pub use jsonld::StructuredData;
pub use metadata::{HeadMetadata, HeadSettings, HeadTag};
pub use page_kind::{KindResolution, PageKind, Resolved};
pub use script::{render_script, to_json, JsonStyle};
