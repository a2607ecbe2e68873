//! Shop browsing filters for the discovery view.

use crate::catalog::{Catalog, Shop, ShopCategory};
use crate::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum rating for a shop to count as recommended.
pub const RECOMMENDED_MIN_RATING: f64 = 4.5;

/// Which shops to list when browsing without a query.
///
/// Serialized as its display string (`"all"`, `"recommended"`, `"food"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ShopFilter {
    /// Every shop
    #[default]
    All,
    /// Highly rated shops only
    Recommended,
    /// Shops of one category
    Category(ShopCategory),
}

impl ShopFilter {
    /// Returns true if `shop` passes this filter, using `min_rating` for
    /// [`ShopFilter::Recommended`].
    pub fn matches(&self, shop: &Shop, min_rating: f64) -> bool {
        match self {
            ShopFilter::All => true,
            ShopFilter::Recommended => shop.rating >= min_rating,
            ShopFilter::Category(category) => shop.category == *category,
        }
    }
}

impl fmt::Display for ShopFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopFilter::All => f.write_str("all"),
            ShopFilter::Recommended => f.write_str("recommended"),
            ShopFilter::Category(category) => write!(f, "{}", category.as_str().to_lowercase()),
        }
    }
}

impl FromStr for ShopFilter {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ShopFilter::All),
            "recommended" => Ok(ShopFilter::Recommended),
            other => other
                .parse::<ShopCategory>()
                .map(ShopFilter::Category)
                .map_err(|_| SearchError::InvalidQuery(format!("unknown shop filter: {s}"))),
        }
    }
}

impl From<ShopFilter> for String {
    fn from(filter: ShopFilter) -> Self {
        filter.to_string()
    }
}

impl TryFrom<String> for ShopFilter {
    type Error = SearchError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Lists shops passing `filter`, in catalog order.
pub fn filter_shops(catalog: &Catalog, filter: ShopFilter) -> Vec<&Shop> {
    filter_shops_with_threshold(catalog, filter, RECOMMENDED_MIN_RATING)
}

/// Like [`filter_shops`], with a custom recommendation threshold.
pub fn filter_shops_with_threshold(
    catalog: &Catalog,
    filter: ShopFilter,
    min_rating: f64,
) -> Vec<&Shop> {
    catalog
        .shops()
        .iter()
        .filter(|shop| filter.matches(shop, min_rating))
        .collect()
}
