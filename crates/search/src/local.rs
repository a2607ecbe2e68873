//! Local relevance search over the catalog.

use crate::catalog::{Catalog, Product, Shop};
use crate::relevance::{
    match_product, match_shop, normalize_query, product_relevance, shop_relevance,
};
use aroundin_geo::{format_distance, haversine_distance_meters, Coordinate};
use serde::Serialize;
use tracing::debug;

/// What a search result points at.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchHit<'a> {
    /// The shop itself matched and none of its products did.
    Shop {
        /// Matched shop
        shop: &'a Shop,
    },
    /// A product matched.
    Product {
        /// Owning shop
        shop: &'a Shop,
        /// Matched product, always one of `shop.products`
        product: &'a Product,
    },
}

/// A ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    /// Shop-level or product-level hit
    #[serde(flatten)]
    pub hit: SearchHit<'a>,
    /// Distance to the requester in meters, 0 when the requester is unknown
    pub distance: f64,
    /// Display distance: computed when the requester is known, else the shop's label
    pub formatted_distance: String,
    /// Relevance score, always positive
    pub relevance_score: u32,
}

impl<'a> SearchResult<'a> {
    /// The shop this result belongs to.
    pub fn shop(&self) -> &'a Shop {
        match self.hit {
            SearchHit::Shop { shop } | SearchHit::Product { shop, .. } => shop,
        }
    }

    /// The matched product, for product-level hits.
    pub fn product(&self) -> Option<&'a Product> {
        match self.hit {
            SearchHit::Shop { .. } => None,
            SearchHit::Product { product, .. } => Some(product),
        }
    }

    /// Returns true for shop-level hits.
    pub fn is_shop_match(&self) -> bool {
        matches!(self.hit, SearchHit::Shop { .. })
    }
}

/// Searches shops and products for `query`.
///
/// Matching is a case-insensitive (ASCII) substring check. Shops are visited
/// in catalog order and products in listing order; results are then sorted by
/// score, highest first, with ties kept in that discovery order.
///
/// A shop that matched on its own name or category is reported as a shop hit
/// only when none of its products matched; otherwise its product hits stand in
/// for it. A blank query yields no results.
///
/// # Example
/// ```
/// use aroundin_search::{search_local_data, Catalog};
///
/// let results = search_local_data(Catalog::demo(), "earphones", None);
/// assert_eq!(results[0].product().unwrap().name, "Earphones");
/// assert_eq!(results[0].relevance_score, 8);
/// ```
pub fn search_local_data<'a>(
    catalog: &'a Catalog,
    query: &str,
    requester: Option<Coordinate>,
) -> Vec<SearchResult<'a>> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let query_lower = normalize_query(query);
    let mut results = Vec::new();

    for shop in catalog {
        let (distance, formatted_distance) = match requester {
            Some(ref from) => {
                let meters = haversine_distance_meters(from, &shop.location);
                (meters, format_distance(meters))
            }
            None => (0.0, shop.distance_label.clone()),
        };

        let shop_score = shop_relevance(match_shop(shop, &query_lower));
        let mut product_matched = false;

        for product in &shop.products {
            let matched = match_product(product, &query_lower);
            product_matched |= matched.any();

            let score = product_relevance(matched);
            if score > 0 {
                results.push(SearchResult {
                    hit: SearchHit::Product { shop, product },
                    distance,
                    formatted_distance: formatted_distance.clone(),
                    relevance_score: score,
                });
            }
        }

        if shop_score > 0 && !product_matched {
            results.push(SearchResult {
                hit: SearchHit::Shop { shop },
                distance,
                formatted_distance,
                relevance_score: shop_score,
            });
        }
    }

    // Stable: equal scores keep discovery order.
    results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));

    debug!(
        query_len = query.len(),
        located = requester.is_some(),
        results = results.len(),
        "Local search complete"
    );

    results
}

impl Catalog {
    /// Runs [`search_local_data`] against this catalog.
    pub fn search(&self, query: &str, requester: Option<Coordinate>) -> Vec<SearchResult<'_>> {
        search_local_data(self, query, requester)
    }
}
