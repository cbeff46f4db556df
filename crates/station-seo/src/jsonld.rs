//! Typed schema.org records for the JSON-LD block embedded in each page.
//!
//! Field names follow the schema.org vocabulary (`streetAddress`,
//! `hasMenuSection`, ...). Decimal quantities (prices, coordinates, rating)
//! are emitted as strings with their configured scale, e.g. `"42.9849"`.
//! Counts and years are emitted as strings too (`"127"`, `"2020"`), and both
//! strings and numbers are accepted when reading records back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use station_core::{
    BusinessProfile, BusinessType, MenuItem, MenuProfile, MenuSection, OrganizationProfile,
    StaffMember,
};

use crate::PageKind;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaType {
    Restaurant,
    CafeOrCoffeeShop,
    BarOrPub,
    LocalBusiness,
    PostalAddress,
    GeoCoordinates,
    AggregateRating,
    Menu,
    MenuSection,
    MenuItem,
    Offer,
    Organization,
    Person,
}

impl From<BusinessType> for SchemaType {
    fn from(value: BusinessType) -> Self {
        match value {
            BusinessType::Restaurant => SchemaType::Restaurant,
            BusinessType::CafeOrCoffeeShop => SchemaType::CafeOrCoffeeShop,
            BusinessType::BarOrPub => SchemaType::BarOrPub,
            BusinessType::LocalBusiness => SchemaType::LocalBusiness,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub street_address: String,
    pub address_locality: String,
    pub address_region: String,
    pub postal_code: String,
    pub address_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    #[serde(with = "rust_decimal::serde::str")]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub longitude: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    #[serde(with = "rust_decimal::serde::str")]
    pub rating_value: Decimal,
    #[serde(with = "display_str")]
    pub review_count: u32,
}

/// Base record shared by every page kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub name: String,
    pub description: String,
    pub url: String,
    pub telephone: String,
    pub email: String,
    pub address: AddressRecord,
    pub geo: GeoRecord,
    pub opening_hours: Vec<String>,
    pub serves_cuisine: Vec<String>,
    pub price_range: String,
    pub currencies_accepted: String,
    pub payment_accepted: String,
    pub aggregate_rating: RatingRecord,
    pub image: Vec<String>,
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRecord {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub price_currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemRecord {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub name: String,
    pub description: String,
    pub offers: OfferRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSectionRecord {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub name: String,
    pub description: String,
    pub has_menu_item: Vec<MenuItemRecord>,
}

/// Attached under `hasMenu` on the menu page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecord {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub name: String,
    pub description: String,
    pub has_menu_section: Vec<MenuSectionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FounderRecord {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub name: String,
    pub job_title: String,
    pub description: String,
}

/// Fields merged into the business record on the about page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationRecord {
    #[serde(with = "display_str")]
    pub founding_date: u16,
    pub founder: FounderRecord,
    pub employee: Vec<PersonRecord>,
}

/// Structured data for one page: the business record plus the extension
/// that belongs to the page kind.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredData {
    General(BusinessRecord),
    LocalBusiness(BusinessRecord),
    Menu {
        business: BusinessRecord,
        menu: MenuRecord,
    },
    About {
        business: BusinessRecord,
        organization: OrganizationRecord,
    },
}

impl StructuredData {
    #[must_use]
    pub fn kind(&self) -> PageKind {
        match self {
            StructuredData::General(_) => PageKind::General,
            StructuredData::LocalBusiness(_) => PageKind::LocalBusiness,
            StructuredData::Menu { .. } => PageKind::Menu,
            StructuredData::About { .. } => PageKind::About,
        }
    }

    #[must_use]
    pub fn business(&self) -> &BusinessRecord {
        match self {
            StructuredData::General(business)
            | StructuredData::LocalBusiness(business)
            | StructuredData::Menu { business, .. }
            | StructuredData::About { business, .. } => business,
        }
    }

    #[must_use]
    pub fn menu(&self) -> Option<&MenuRecord> {
        match self {
            StructuredData::Menu { menu, .. } => Some(menu),
            _ => None,
        }
    }

    #[must_use]
    pub fn organization(&self) -> Option<&OrganizationRecord> {
        match self {
            StructuredData::About { organization, .. } => Some(organization),
            _ => None,
        }
    }
}

/// Flat view serialized for every variant: base fields first, then the
/// extension keys in a fixed position.
#[derive(Serialize)]
struct Document<'a> {
    #[serde(flatten)]
    business: &'a BusinessRecord,
    #[serde(rename = "hasMenu", skip_serializing_if = "Option::is_none")]
    has_menu: Option<&'a MenuRecord>,
    #[serde(flatten)]
    organization: Option<&'a OrganizationRecord>,
}

impl Serialize for StructuredData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Document {
            business: self.business(),
            has_menu: self.menu(),
            organization: self.organization(),
        }
        .serialize(serializer)
    }
}

impl From<&BusinessProfile> for BusinessRecord {
    fn from(profile: &BusinessProfile) -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_string(),
            schema_type: profile.business_type.into(),
            name: profile.name.clone(),
            description: profile.description.clone(),
            url: profile.url.clone(),
            telephone: profile.telephone.clone(),
            email: profile.email.clone(),
            address: AddressRecord {
                schema_type: SchemaType::PostalAddress,
                street_address: profile.address.street.clone(),
                address_locality: profile.address.locality.clone(),
                address_region: profile.address.region.clone(),
                postal_code: profile.address.postal_code.clone(),
                address_country: profile.address.country_code.clone(),
            },
            geo: GeoRecord {
                schema_type: SchemaType::GeoCoordinates,
                latitude: profile.geo.latitude,
                longitude: profile.geo.longitude,
            },
            opening_hours: profile.opening_hours.clone(),
            serves_cuisine: profile.cuisines.clone(),
            price_range: profile.price_range.clone(),
            currencies_accepted: profile.currencies_accepted.join(", "),
            payment_accepted: profile.payment_accepted.join(", "),
            aggregate_rating: RatingRecord {
                schema_type: SchemaType::AggregateRating,
                rating_value: profile.rating.value,
                review_count: profile.rating.review_count,
            },
            image: profile.images.clone(),
            same_as: profile.social_profiles.clone(),
        }
    }
}

impl From<&MenuItem> for MenuItemRecord {
    fn from(item: &MenuItem) -> Self {
        Self {
            schema_type: SchemaType::MenuItem,
            name: item.name.clone(),
            description: item.description.clone(),
            offers: OfferRecord {
                schema_type: SchemaType::Offer,
                price: item.price,
                price_currency: item.currency.clone(),
            },
        }
    }
}

impl From<&MenuSection> for MenuSectionRecord {
    fn from(section: &MenuSection) -> Self {
        Self {
            schema_type: SchemaType::MenuSection,
            name: section.name.clone(),
            description: section.description.clone(),
            has_menu_item: section.items.iter().map(MenuItemRecord::from).collect(),
        }
    }
}

impl From<&MenuProfile> for MenuRecord {
    fn from(menu: &MenuProfile) -> Self {
        Self {
            schema_type: SchemaType::Menu,
            name: menu.name.clone(),
            description: menu.description.clone(),
            has_menu_section: menu.sections.iter().map(MenuSectionRecord::from).collect(),
        }
    }
}

impl From<&StaffMember> for PersonRecord {
    fn from(member: &StaffMember) -> Self {
        Self {
            schema_type: SchemaType::Person,
            name: member.name.clone(),
            job_title: member.job_title.clone(),
            description: member.description.clone(),
        }
    }
}

impl From<&OrganizationProfile> for OrganizationRecord {
    fn from(org: &OrganizationProfile) -> Self {
        Self {
            founding_date: org.founding_year,
            founder: FounderRecord {
                schema_type: SchemaType::Organization,
                name: org.founder.clone(),
            },
            employee: org.staff.iter().map(PersonRecord::from).collect(),
        }
    }
}

/// Serialize through `Display`; deserialize from a string or a bare number.
mod display_str {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s,
            Raw::Number(n) => n.to_string(),
        };
        text.trim().parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use station_core::SiteProfile;

    use super::*;

    #[test]
    fn offer_serializes_price_as_decimal_string() {
        let offer = OfferRecord {
            schema_type: SchemaType::Offer,
            price: Decimal::new(320, 0),
            price_currency: "RUB".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&offer).unwrap(),
            json!({"@type": "Offer", "price": "320", "priceCurrency": "RUB"})
        );
    }

    #[test]
    fn rating_accepts_numeric_review_count() {
        let rating: RatingRecord = serde_json::from_value(json!({
            "@type": "AggregateRating",
            "ratingValue": "4.8",
            "reviewCount": 127
        }))
        .unwrap();
        assert_eq!(rating.review_count, 127);
        assert_eq!(rating.rating_value, Decimal::new(48, 1));
    }

    #[test]
    fn organization_rejects_non_numeric_founding_date() {
        let result: Result<OrganizationRecord, _> = serde_json::from_value(json!({
            "foundingDate": "twenty-twenty",
            "founder": {"@type": "Organization", "name": "Team"},
            "employee": []
        }));
        assert!(result.is_err());
    }

    #[test]
    fn business_record_keys_follow_vocabulary_order() {
        let business = BusinessRecord::from(&SiteProfile::station2290().business);
        let value = serde_json::to_value(&business).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            [
                "@context",
                "@type",
                "name",
                "description",
                "url",
                "telephone",
                "email",
                "address",
                "geo",
                "openingHours",
                "servesCuisine",
                "priceRange",
                "currenciesAccepted",
                "paymentAccepted",
                "aggregateRating",
                "image",
                "sameAs",
            ]
        );
    }

    #[test]
    fn business_record_joins_payment_methods() {
        let business = BusinessRecord::from(&SiteProfile::station2290().business);
        assert_eq!(business.payment_accepted, "Cash, Credit Card");
        assert_eq!(business.currencies_accepted, "RUB");
    }

    #[test]
    fn custom_business_type_is_emitted() {
        let mut profile = SiteProfile::station2290().business;
        profile.business_type = BusinessType::CafeOrCoffeeShop;
        let value = serde_json::to_value(BusinessRecord::from(&profile)).unwrap();
        assert_eq!(value["@type"], "CafeOrCoffeeShop");
    }
}
