//! Shop and product catalog.
//!
//! The catalog is an immutable, explicitly passed dataset. It is validated
//! once on construction and never mutated by searches.

use crate::{Result, SearchError};
use aroundin_geo::Coordinate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Bundled demo dataset.
static DEMO_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json_str(include_str!("../data/demo_catalog.json"))
        .expect("bundled demo catalog is valid")
});

/// Shop category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopCategory {
    /// Phones, audio, accessories
    Electronics,
    /// Restaurants, groceries, bakeries
    Food,
    /// Repairs and other services
    Service,
    /// Everything else
    General,
}

impl ShopCategory {
    /// All categories, in display order.
    pub const ALL: [ShopCategory; 4] = [
        ShopCategory::Electronics,
        ShopCategory::Food,
        ShopCategory::Service,
        ShopCategory::General,
    ];

    /// Display name, also the text matched by search.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShopCategory::Electronics => "Electronics",
            ShopCategory::Food => "Food",
            ShopCategory::Service => "Service",
            ShopCategory::General => "General",
        }
    }
}

impl fmt::Display for ShopCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShopCategory {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SearchError::InvalidQuery(format!("unknown shop category: {s}")))
    }
}

/// An item sold by exactly one shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identifier, unique within the owning shop
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub stock: u32,
    /// Free-text category (e.g. "Audio")
    pub category: String,
    /// Optional image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A vendor storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    /// Identifier, unique across the catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Shop category
    pub category: ShopCategory,
    /// Storefront position
    pub location: Coordinate,
    /// Precomputed distance label, shown when the requester position is unknown
    #[serde(rename = "distance")]
    pub distance_label: String,
    /// Average rating, 0.0 to 5.0
    pub rating: f64,
    /// Products in listing order
    #[serde(default)]
    pub products: Vec<Product>,
    /// Image reference
    pub image: String,
    /// Whether the customer bookmarked this shop
    #[serde(default)]
    pub is_saved: bool,
}

impl Shop {
    /// Looks up a product of this shop by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns true if `product` is one of this shop's products.
    pub fn owns(&self, product: &Product) -> bool {
        self.products.iter().any(|p| std::ptr::eq(p, product))
    }
}

/// Ordered, validated collection of shops.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    shops: Vec<Shop>,
}

impl Catalog {
    /// Builds a catalog, validating identifiers and numeric ranges.
    pub fn new(shops: Vec<Shop>) -> Result<Self> {
        validate(&shops)?;
        Ok(Self { shops })
    }

    /// Parses a JSON array of shops.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let shops: Vec<Shop> = serde_json::from_str(json)?;
        Self::new(shops)
    }

    /// Reads a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// The bundled demo catalog.
    pub fn demo() -> &'static Catalog {
        &DEMO_CATALOG
    }

    /// Shops in catalog order.
    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    /// Looks up a shop by id.
    pub fn shop(&self, id: &str) -> Option<&Shop> {
        self.shops.iter().find(|s| s.id == id)
    }

    /// Number of shops.
    pub fn len(&self) -> usize {
        self.shops.len()
    }

    /// Returns true if the catalog has no shops.
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Shop;
    type IntoIter = std::slice::Iter<'a, Shop>;

    fn into_iter(self) -> Self::IntoIter {
        self.shops.iter()
    }
}

fn validate(shops: &[Shop]) -> Result<()> {
    let mut shop_ids = HashSet::with_capacity(shops.len());

    for shop in shops {
        if !shop_ids.insert(shop.id.as_str()) {
            return Err(SearchError::DuplicateShopId(shop.id.clone()));
        }

        if !(0.0..=5.0).contains(&shop.rating) {
            return Err(SearchError::InvalidRecord(format!(
                "shop {} has rating {} outside 0.0-5.0",
                shop.id, shop.rating
            )));
        }

        let mut product_ids = HashSet::with_capacity(shop.products.len());
        for product in &shop.products {
            if !product_ids.insert(product.id.as_str()) {
                return Err(SearchError::DuplicateProductId {
                    shop: shop.id.clone(),
                    product: product.id.clone(),
                });
            }

            if product.price < 0.0 || product.price.is_nan() {
                return Err(SearchError::InvalidRecord(format!(
                    "product {} in shop {} has negative price {}",
                    product.id, shop.id, product.price
                )));
            }
        }
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use std::io::Write;

    #[test]
    fn test_demo_catalog_loads() {
        let catalog = Catalog::demo();
        assert!(!catalog.is_empty());
        assert!(catalog.shop("s1").is_some());
    }

    #[test]
    fn test_duplicate_shop_id_rejected() {
        let shops = vec![
            shop("a", "One", ShopCategory::Food, vec![]),
            shop("a", "Two", ShopCategory::Food, vec![]),
        ];
        let err = Catalog::new(shops).unwrap_err();
        assert!(matches!(err, SearchError::DuplicateShopId(id) if id == "a"));
    }

    #[test]
    fn test_duplicate_product_id_rejected() {
        let shops = vec![shop(
            "a",
            "One",
            ShopCategory::Food,
            vec![product("p", "Bread", "Bakery"), product("p", "Milk", "Dairy")],
        )];
        let err = Catalog::new(shops).unwrap_err();
        assert!(matches!(err, SearchError::DuplicateProductId { .. }));
    }

    #[test]
    fn test_same_product_id_in_different_shops_allowed() {
        let shops = vec![
            shop("a", "One", ShopCategory::Food, vec![product("p1", "Bread", "Bakery")]),
            shop("b", "Two", ShopCategory::Food, vec![product("p1", "Milk", "Dairy")]),
        ];
        assert_eq!(Catalog::new(shops).unwrap().len(), 2);
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut bad = product("p", "Bread", "Bakery");
        bad.price = -1.0;
        let err = Catalog::new(vec![shop("a", "One", ShopCategory::Food, vec![bad])]).unwrap_err();
        assert!(matches!(err, SearchError::InvalidRecord(_)));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut bad = shop("a", "One", ShopCategory::Food, vec![]);
        bad.rating = 5.5;
        assert!(Catalog::new(vec![bad]).is_err());
    }

    #[test]
    fn test_from_json_camel_case_shape() {
        let json = r#"[{
            "id": "s9",
            "name": "Corner Shop",
            "category": "General",
            "location": {"latitude": -1.28, "longitude": 36.82},
            "distance": "1.1km",
            "rating": 4.1,
            "products": [
                {"id": "p1", "name": "Soap", "price": 1.5, "stock": 20, "category": "Household"}
            ],
            "image": "/images/corner-1024.webp",
            "isSaved": true
        }]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let shop = catalog.shop("s9").unwrap();
        assert_eq!(shop.distance_label, "1.1km");
        assert!(shop.is_saved);
        assert_eq!(shop.product("p1").unwrap().image, None);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, SearchError::Catalog(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(Catalog::demo()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = Catalog::from_path(file.path()).unwrap();
        assert_eq!(&loaded, Catalog::demo());
    }

    #[test]
    fn test_from_missing_path() {
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SearchError::Io { .. }));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("electronics".parse::<ShopCategory>().unwrap(), ShopCategory::Electronics);
        assert_eq!(" Food ".parse::<ShopCategory>().unwrap(), ShopCategory::Food);
        assert!("toys".parse::<ShopCategory>().is_err());
    }

    #[test]
    fn test_shop_owns_product() {
        let catalog = Catalog::new(vec![
            shop("a", "One", ShopCategory::Food, vec![product("p1", "Bread", "Bakery")]),
            shop("b", "Two", ShopCategory::Food, vec![product("p1", "Bread", "Bakery")]),
        ])
        .unwrap();
        let a = catalog.shop("a").unwrap();
        let b = catalog.shop("b").unwrap();
        assert!(a.owns(&a.products[0]));
        assert!(!a.owns(&b.products[0]));
    }
}
