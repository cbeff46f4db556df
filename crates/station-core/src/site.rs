//! Site profile: the business identity, menu, organization and page registry
//! that every structured-data record and page head is derived from.
//!
//! The profile is loaded from `config/site.yaml` (see [`load_site`]) or, when
//! no file exists, taken from the built-in Station2290 snapshot
//! ([`SiteProfile::station2290`]). Either way it is validated once at load and
//! treated as immutable afterwards.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// schema.org type emitted for the business record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessType {
    #[default]
    Restaurant,
    CafeOrCoffeeShop,
    BarOrPub,
    LocalBusiness,
}

impl BusinessType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BusinessType::Restaurant => "Restaurant",
            BusinessType::CafeOrCoffeeShop => "CafeOrCoffeeShop",
            BusinessType::BarOrPub => "BarOrPub",
            BusinessType::LocalBusiness => "LocalBusiness",
        }
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code, e.g. `RU`.
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(with = "rust_decimal::serde::str")]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub longitude: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating on a 0–5 scale.
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
    pub review_count: u32,
}

/// Identity, contact and location data shared by every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    #[serde(default)]
    pub business_type: BusinessType,
    pub name: String,
    pub description: String,
    pub url: String,
    pub telephone: String,
    pub email: String,
    pub address: PostalAddress,
    pub geo: GeoPoint,
    /// Day-range/time-range rules such as `Mo-Th 08:00-22:00`, in display order.
    pub opening_hours: Vec<String>,
    pub cuisines: Vec<String>,
    pub price_range: String,
    pub currencies_accepted: Vec<String>,
    pub payment_accepted: Vec<String>,
    pub rating: Rating,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub social_profiles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// ISO 4217 currency code, e.g. `RUB`.
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub name: String,
    pub description: String,
    pub items: Vec<MenuItem>,
}

/// Editorial menu snapshot attached to the menu page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuProfile {
    pub name: String,
    pub description: String,
    pub sections: Vec<MenuSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub name: String,
    pub job_title: String,
    pub description: String,
}

/// Company history and team attached to the about page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationProfile {
    pub founding_year: u16,
    pub founder: String,
    pub staff: Vec<StaffMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenGraphImage {
    /// Absolute URL or a path relative to the site URL.
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

/// Share-card text used by pages that set no title or description of their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialText {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Site-wide head defaults, overridden per page where [`PageConfig`] says so.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub default_title: String,
    /// Title template with a single `%s` placeholder for the page title.
    pub title_template: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub author: String,
    pub locale: String,
    /// BCP 47 document language, e.g. `ru`.
    pub language: String,
    #[serde(default)]
    pub open_graph: SocialText,
    #[serde(default)]
    pub twitter: SocialText,
    pub og_image: OpenGraphImage,
    pub twitter_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub slug: String,
    pub path: String,
    /// Structured-data page-kind tag (`restaurant`, `local-business`, `about`, `menu`).
    pub structured_data: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub business: BusinessProfile,
    pub menu: MenuProfile,
    pub organization: OrganizationProfile,
    pub metadata: SiteMetadata,
    pub pages: Vec<PageConfig>,
}

/// Where a loaded [`SiteProfile`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSource {
    File(PathBuf),
    Builtin,
}

impl std::fmt::Display for SiteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteSource::File(path) => write!(f, "{}", path.display()),
            SiteSource::Builtin => write!(f, "built-in profile"),
        }
    }
}

impl SiteProfile {
    /// Look up a page by slug.
    #[must_use]
    pub fn page(&self, slug: &str) -> Option<&PageConfig> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    /// Check the profile against the structured-data required-field contract
    /// and the page registry rules.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` describing the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_business(&self.business)?;
        validate_menu(&self.menu)?;
        validate_organization(&self.organization)?;
        validate_metadata(&self.metadata)?;
        validate_pages(&self.pages)
    }
}

/// Load and validate a site profile from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_site(path: &Path) -> Result<SiteProfile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SiteFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let site: SiteProfile = serde_yaml::from_str(&content)?;
    site.validate()?;

    Ok(site)
}

/// Load the site file at `path`, or the built-in snapshot when no file exists.
///
/// A file that exists but is unreadable or invalid is still an error.
///
/// # Errors
///
/// Returns `ConfigError` if an existing file cannot be read, parsed, or validated.
pub fn load_site_or_builtin(path: &Path) -> Result<(SiteProfile, SiteSource), ConfigError> {
    if path.exists() {
        let site = load_site(path)?;
        return Ok((site, SiteSource::File(path.to_path_buf())));
    }

    Ok((SiteProfile::station2290(), SiteSource::Builtin))
}

fn require_text(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!(
            "{field} must be non-empty"
        )));
    }
    Ok(())
}

fn require_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    if !(value.starts_with("https://") || value.starts_with("http://")) {
        return Err(ConfigError::Validation(format!(
            "{field} must be an absolute http(s) URL, got '{value}'"
        )));
    }
    Ok(())
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

fn validate_business(business: &BusinessProfile) -> Result<(), ConfigError> {
    require_text("business.name", &business.name)?;
    require_text("business.description", &business.description)?;
    require_http_url("business.url", &business.url)?;
    require_text("business.telephone", &business.telephone)?;
    require_text("business.address.street", &business.address.street)?;
    require_text("business.address.locality", &business.address.locality)?;

    let country = &business.address.country_code;
    if country.len() != 2 || !country.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ConfigError::Validation(format!(
            "business.address.country_code must be a two-letter uppercase code, got '{country}'"
        )));
    }

    let lat = business.geo.latitude;
    if lat < Decimal::from(-90) || lat > Decimal::from(90) {
        return Err(ConfigError::Validation(format!(
            "business.geo.latitude {lat} is outside -90..=90"
        )));
    }
    let lon = business.geo.longitude;
    if lon < Decimal::from(-180) || lon > Decimal::from(180) {
        return Err(ConfigError::Validation(format!(
            "business.geo.longitude {lon} is outside -180..=180"
        )));
    }

    let rating = business.rating.value;
    if rating < Decimal::ZERO || rating > Decimal::from(5) {
        return Err(ConfigError::Validation(format!(
            "business.rating.value {rating} is outside 0..=5"
        )));
    }

    if business.currencies_accepted.is_empty() {
        return Err(ConfigError::Validation(
            "business.currencies_accepted must list at least one currency".to_string(),
        ));
    }
    if let Some(bad) = business
        .currencies_accepted
        .iter()
        .find(|c| !is_currency_code(c))
    {
        return Err(ConfigError::Validation(format!(
            "business.currencies_accepted has invalid currency code '{bad}'"
        )));
    }

    for url in business.images.iter().chain(&business.social_profiles) {
        require_http_url("business image/social URL", url)?;
    }

    Ok(())
}

fn validate_menu(menu: &MenuProfile) -> Result<(), ConfigError> {
    require_text("menu.name", &menu.name)?;

    for section in &menu.sections {
        require_text("menu section name", &section.name)?;
        if section.items.is_empty() {
            return Err(ConfigError::Validation(format!(
                "menu section '{}' has no items",
                section.name
            )));
        }

        for item in &section.items {
            require_text("menu item name", &item.name)?;
            if item.price <= Decimal::ZERO {
                return Err(ConfigError::Validation(format!(
                    "menu item '{}' has non-positive price {}",
                    item.name, item.price
                )));
            }
            if !is_currency_code(&item.currency) {
                return Err(ConfigError::Validation(format!(
                    "menu item '{}' has invalid currency code '{}'",
                    item.name, item.currency
                )));
            }
        }
    }

    Ok(())
}

fn validate_organization(org: &OrganizationProfile) -> Result<(), ConfigError> {
    require_text("organization.founder", &org.founder)?;
    if org.founding_year < 1000 {
        return Err(ConfigError::Validation(format!(
            "organization.founding_year {} is not a four-digit year",
            org.founding_year
        )));
    }
    for member in &org.staff {
        require_text("staff member name", &member.name)?;
        require_text("staff member job_title", &member.job_title)?;
    }
    Ok(())
}

fn validate_metadata(meta: &SiteMetadata) -> Result<(), ConfigError> {
    require_text("metadata.default_title", &meta.default_title)?;
    if meta.title_template.matches("%s").count() != 1 {
        return Err(ConfigError::Validation(format!(
            "metadata.title_template must contain exactly one '%s', got '{}'",
            meta.title_template
        )));
    }
    require_text("metadata.locale", &meta.locale)?;
    let lang = &meta.language;
    if !(2..=3).contains(&lang.len()) || !lang.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(ConfigError::Validation(format!(
            "metadata.language must be a two- or three-letter lowercase code, got '{lang}'"
        )));
    }
    require_text("metadata.og_image.url", &meta.og_image.url)?;
    Ok(())
}

fn validate_pages(pages: &[PageConfig]) -> Result<(), ConfigError> {
    let mut seen_slugs = HashSet::new();
    let mut seen_paths = HashSet::new();

    for page in pages {
        require_text("page slug", &page.slug)?;

        if !page.path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "page '{}' path must start with '/', got '{}'",
                page.slug, page.path
            )));
        }

        if !seen_slugs.insert(page.slug.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate page slug: '{}'",
                page.slug
            )));
        }

        if !seen_paths.insert(page.path.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate page path: '{}' (page '{}')",
                page.path, page.slug
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
