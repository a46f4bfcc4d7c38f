//! The static product catalog and the storefront's contact endpoints.
//!
//! Everything here is a compile-time literal. The catalog is small enough
//! that the whole data set lives in source; there is no fetching layer and
//! no mutation anywhere in the application.

use crate::types::{Category, Product};

/// WhatsApp number, international format, as used in `wa.me` links.
pub const WHATSAPP_PHONE: &str = "5511999999999";

/// Bare chat link used by the footer's contact button.
pub const WHATSAPP_URL: &str = "https://wa.me/5511999999999";

/// Display form of the WhatsApp number.
pub const WHATSAPP_DISPLAY: &str = "(11) 99999-9999";

pub const CONTACT_EMAIL: &str = "contato@toposdebolo.com.br";
pub const INSTAGRAM_URL: &str = "https://instagram.com/toposdebolo";
pub const FACEBOOK_URL: &str = "https://facebook.com/toposdebolo";

const CASAMENTOS: [Product; 2] = [
    Product {
        title: "Topo Clássico Romântico",
        description: "Topo de bolo elegante para casamentos com acabamento em dourado",
        price: "129,90",
        code: "CAS001",
        image: "/images/casamento-classico.jpg",
    },
    Product {
        title: "Topo Minimalista",
        description: "Design moderno e clean para casamentos contemporâneos",
        price: "99,90",
        code: "CAS002",
        image: "/images/casamento-minimalista.jpg",
    },
];

const ANIVERSARIOS: [Product; 2] = [
    Product {
        title: "Topo Personalizado Idade",
        description: "Topo comemorativo com número personalizável",
        price: "79,90",
        code: "ANI001",
        image: "/images/aniversario-idade.jpg",
    },
    Product {
        title: "Topo Festa Adulto",
        description: "Design elegante para festas de adultos",
        price: "89,90",
        code: "ANI002",
        image: "/images/aniversario-adulto.jpg",
    },
];

const INFANTIS: [Product; 2] = [
    Product {
        title: "Topo Super-Heróis",
        description: "Topo temático com seus heróis favoritos",
        price: "89,90",
        code: "INF001",
        image: "/images/infantil-herois.jpg",
    },
    Product {
        title: "Topo Princesas",
        description: "Topo encantado para festas de princesas",
        price: "89,90",
        code: "INF002",
        image: "/images/infantil-princesas.jpg",
    },
];

impl Category {
    /// Products shown on this category's tab, in display order.
    #[must_use]
    pub const fn products(self) -> &'static [Product] {
        match self {
            Self::Casamentos => &CASAMENTOS,
            Self::Aniversarios => &ANIVERSARIOS,
            Self::Infantis => &INFANTIS,
        }
    }
}

impl Product {
    /// Chat link pre-filled with a request message quoting this product.
    ///
    /// The message text is interpolated verbatim; the messaging service
    /// tolerates unescaped spaces and accents in the `text` parameter.
    #[must_use]
    pub fn request_url(&self) -> String {
        format!(
            "https://wa.me/{WHATSAPP_PHONE}?text=Olá! Gostaria de informações sobre o topo de bolo {} - {}",
            self.code, self.title
        )
    }

    /// Price with the storefront currency prefix, e.g. "R$ 129,90".
    #[must_use]
    pub fn price_display(&self) -> String {
        format!("R$ {}", self.price)
    }

    /// SKU line shown next to the price, e.g. "Código: CAS001".
    #[must_use]
    pub fn code_display(&self) -> String {
        format!("Código: {}", self.code)
    }
}

/// Iterates the whole catalog in tab order.
pub fn all_products() -> impl Iterator<Item = &'static Product> {
    Category::ALL
        .into_iter()
        .flat_map(|category| category.products())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sku_codes_are_unique() {
        let mut seen = HashSet::new();
        for product in all_products() {
            assert!(
                seen.insert(product.code),
                "duplicate SKU code: {}",
                product.code
            );
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_every_category_has_two_products() {
        for category in Category::ALL {
            assert_eq!(
                category.products().len(),
                2,
                "category {} should list two products",
                category.key()
            );
        }
    }

    #[test]
    fn test_codes_carry_their_category_prefix() {
        let prefixes = [
            (Category::Casamentos, "CAS"),
            (Category::Aniversarios, "ANI"),
            (Category::Infantis, "INF"),
        ];
        for (category, prefix) in prefixes {
            for product in category.products() {
                assert!(
                    product.code.starts_with(prefix),
                    "{} should start with {}",
                    product.code,
                    prefix
                );
            }
        }
    }

    #[test]
    fn test_prices_use_decimal_comma() {
        for product in all_products() {
            let (reais, centavos) = product
                .price
                .split_once(',')
                .expect("price should contain a decimal comma");
            assert!(reais.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(centavos.len(), 2);
            assert!(centavos.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_image_paths_point_at_the_asset_dir() {
        for product in all_products() {
            assert!(product.image.starts_with("/images/"));
            assert!(product.image.ends_with(".jpg"));
        }
    }

    #[test]
    fn test_request_url_quotes_code_and_title() {
        let classic = &Category::Casamentos.products()[0];
        let url = classic.request_url();
        assert!(url.starts_with("https://wa.me/5511999999999?text="));
        assert!(url.contains("CAS001"));
        assert!(url.contains("Topo Clássico Romântico"));
    }

    #[test]
    fn test_request_url_per_product_is_distinct() {
        let urls: HashSet<String> = all_products().map(Product::request_url).collect();
        assert_eq!(urls.len(), 6);
    }

    #[test]
    fn test_price_and_code_display() {
        let classic = &Category::Casamentos.products()[0];
        assert_eq!(classic.price_display(), "R$ 129,90");
        assert_eq!(classic.code_display(), "Código: CAS001");
    }

    #[test]
    fn test_contact_endpoints_are_consistent() {
        assert_eq!(WHATSAPP_URL, format!("https://wa.me/{WHATSAPP_PHONE}"));
        assert!(CONTACT_EMAIL.contains('@'));
        assert!(INSTAGRAM_URL.starts_with("https://"));
        assert!(FACEBOOK_URL.starts_with("https://"));
    }
}
