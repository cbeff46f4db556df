//! Built-in Station2290 profile, used when no site file is present.
//!
//! `config/site.yaml` carries the same snapshot; `site_test.rs` keeps the two
//! in sync.

use rust_decimal::Decimal;

use crate::site::{
    BusinessProfile, BusinessType, GeoPoint, MenuItem, MenuProfile, MenuSection, OpenGraphImage,
    OrganizationProfile, PageConfig, PostalAddress, Rating, SiteMetadata, SiteProfile,
    SocialText, StaffMember,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn rub(name: &str, description: &str, price: i64) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(price, 0),
        currency: "RUB".to_string(),
    }
}

fn staff(name: &str, job_title: &str, description: &str) -> StaffMember {
    StaffMember {
        name: name.to_string(),
        job_title: job_title.to_string(),
        description: description.to_string(),
    }
}

fn page(
    slug: &str,
    path: &str,
    structured_data: &str,
    title: Option<&str>,
    description: Option<&str>,
    keywords: &[&str],
) -> PageConfig {
    PageConfig {
        slug: slug.to_string(),
        path: path.to_string(),
        structured_data: structured_data.to_string(),
        title: title.map(str::to_string),
        description: description.map(str::to_string),
        keywords: strings(keywords),
    }
}

impl SiteProfile {
    /// The Station2290 coffee shop in Makhachkala.
    #[must_use]
    pub fn station2290() -> Self {
        Self {
            business: business(),
            menu: menu(),
            organization: organization(),
            metadata: metadata(),
            pages: pages(),
        }
    }
}

fn business() -> BusinessProfile {
    BusinessProfile {
        business_type: BusinessType::Restaurant,
        name: "Station2290".to_string(),
        description: "Уютная кофейня в центре Махачкалы. Свежеобжаренный кофе, авторские коктейли и изысканные десерты.".to_string(),
        url: "https://station2290.ru".to_string(),
        telephone: "+7 (8722) 22-90-22".to_string(),
        email: "info@station2290.ru".to_string(),
        address: PostalAddress {
            street: "ул. Примерная, 2290".to_string(),
            locality: "Махачкала".to_string(),
            region: "Республика Дагестан".to_string(),
            postal_code: "367000".to_string(),
            country_code: "RU".to_string(),
        },
        geo: GeoPoint {
            latitude: Decimal::new(429_849, 4),
            longitude: Decimal::new(475_047, 4),
        },
        opening_hours: strings(&["Mo-Th 08:00-22:00", "Fr-Sa 08:00-23:00", "Su 09:00-22:00"]),
        cuisines: strings(&["Coffee", "Cocktails", "Desserts", "European"]),
        price_range: "₽₽".to_string(),
        currencies_accepted: strings(&["RUB"]),
        payment_accepted: strings(&["Cash", "Credit Card"]),
        rating: Rating {
            value: Decimal::new(48, 1),
            review_count: 127,
        },
        images: strings(&[
            "https://station2290.ru/images/restaurant-1.jpg",
            "https://station2290.ru/images/restaurant-2.jpg",
            "https://station2290.ru/images/restaurant-3.jpg",
        ]),
        social_profiles: strings(&[
            "https://t.me/station2290",
            "https://instagram.com/station2290_mhk",
            "https://vk.com/station2290",
        ]),
    }
}

fn menu() -> MenuProfile {
    MenuProfile {
        name: "Меню Station2290".to_string(),
        description: "Полное меню кофейни Station2290 с кофе, коктейлями и десертами".to_string(),
        sections: vec![
            MenuSection {
                name: "Кофе".to_string(),
                description: "Свежеобжаренный кофе собственной обжарки".to_string(),
                items: vec![
                    rub("Эспрессо", "Классический итальянский эспрессо", 150),
                    rub("Капучино", "Эспрессо с взбитым молоком", 220),
                    rub("Латте", "Нежное сочетание эспрессо и молока", 250),
                ],
            },
            MenuSection {
                name: "Коктейли".to_string(),
                description: "Авторские и классические коктейли".to_string(),
                items: vec![
                    rub("Мохито", "Классический мохито с мятой и лаймом", 350),
                    rub("Station Spritz", "Авторский коктейль с просекко", 450),
                ],
            },
            MenuSection {
                name: "Десерты".to_string(),
                description: "Изысканные десерты собственного производства".to_string(),
                items: vec![
                    rub("Тирамису", "Классический итальянский десерт", 320),
                    rub("Дагестанская пахлава", "Традиционная восточная сладость", 220),
                ],
            },
        ],
    }
}

fn organization() -> OrganizationProfile {
    OrganizationProfile {
        founding_year: 2020,
        founder: "Station2290 Team".to_string(),
        staff: vec![
            staff(
                "Амина Магомедова",
                "Главный бариста",
                "Мастер кофейного дела с 8-летним опытом",
            ),
            staff(
                "Салим Алиев",
                "Шеф-кондитер",
                "Творец наших изысканных десертов",
            ),
            staff(
                "Марьям Исаева",
                "Бармен-миксолог",
                "Автор наших фирменных коктейлей",
            ),
        ],
    }
}

fn metadata() -> SiteMetadata {
    SiteMetadata {
        default_title: "Station2290 - Кофейня в Махачкале | Кофе, Коктейли, Десерты".to_string(),
        title_template: "%s | Station2290 - Кофейня в Махачкале".to_string(),
        description: "Station2290 - уютная кофейня в центре Махачкалы. Свежеобжаренный кофе, авторские коктейли и изысканные десерты. Место встреч для кофейных гурманов и ценителей качества.".to_string(),
        keywords: strings(&[
            "кофейня махачкала",
            "кофе махачкала",
            "station2290",
            "коктейли махачкала",
            "десерты махачкала",
            "кофе дагестан",
            "кофейня дагестан",
        ]),
        author: "Station2290".to_string(),
        locale: "ru_RU".to_string(),
        language: "ru".to_string(),
        open_graph: SocialText {
            title: Some("Station2290 - Кофейня в Махачкале | Кофе, Коктейли, Десерты".to_string()),
            description: Some("Station2290 - уютная кофейня в центре Махачкалы. Свежеобжаренный кофе, авторские коктейли и изысканные десерты.".to_string()),
        },
        twitter: SocialText {
            title: Some("Station2290 - Кофейня в Махачкале".to_string()),
            description: Some("Уютная кофейня в центре Махачкалы. Свежеобжаренный кофе, авторские коктейли и изысканные десерты.".to_string()),
        },
        og_image: OpenGraphImage {
            url: "/og-image.jpg".to_string(),
            width: 1200,
            height: 630,
            alt: "Station2290 - Кофейня в Махачкале".to_string(),
        },
        twitter_image: "/twitter-image.jpg".to_string(),
    }
}

fn pages() -> Vec<PageConfig> {
    vec![
        page("home", "/", "restaurant", None, None, &[]),
        page(
            "about",
            "/about",
            "about",
            Some("О нас"),
            Some("Узнайте историю Station2290 - уютной кофейни в центре Махачкалы. Наша команда профессионалов создает особую атмосферу для любителей качественного кофе, коктейлей и десертов."),
            &[
                "о нас station2290",
                "история кофейни",
                "команда station2290",
                "кофейня махачкала история",
            ],
        ),
        page(
            "menu",
            "/menu",
            "menu",
            Some("Меню"),
            Some("Меню кофейни Station2290 в Махачкале: свежеобжаренный кофе от 150₽, авторские коктейли от 350₽, изысканные десерты от 180₽. Большой выбор эспрессо, капучино, латте, мохито и тирамису."),
            &[
                "меню station2290",
                "кофе цены махачкала",
                "коктейли цены",
                "десерты кофейня",
                "эспрессо капучино латте",
                "мохито тирамису",
            ],
        ),
        page(
            "contact",
            "/contact",
            "local-business",
            Some("Контакты"),
            Some("Контакты кофейни Station2290 в Махачкале: адрес ул. Примерная, 2290, телефон +7 (8722) 22-90-22, режим работы 08:00-23:00. Как добраться, парковка, онлайн бронирование столиков."),
            &[
                "контакты station2290",
                "адрес кофейня махачкала",
                "телефон station2290",
                "как добраться",
                "бронирование столиков",
            ],
        ),
    ]
}
