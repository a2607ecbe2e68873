//! Relevance scoring for shops and products.
//!
//! Scores are integer sums of independent field matches. A field matches when
//! it contains the query as a case-insensitive (ASCII) substring.

use crate::catalog::{Product, Shop};

/// Weight contributed by each matching field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldWeight {
    /// Product category contains the query
    ProductCategory = 4,
    /// Shop category contains the query
    ShopCategory = 5,
    /// Product name contains the query
    ProductName = 8,
    /// Shop name contains the query
    ShopName = 10,
}

impl FieldWeight {
    /// Numeric weight.
    #[inline]
    pub const fn value(self) -> u32 {
        self as u32
    }
}

/// Which fields of a record matched the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldMatch {
    /// Name contains the query
    pub name: bool,
    /// Category contains the query
    pub category: bool,
}

impl FieldMatch {
    /// Returns true if any field matched.
    #[inline]
    pub fn any(self) -> bool {
        self.name || self.category
    }
}

/// Lowercases a query once, before matching it against many fields.
///
/// Only ASCII letters are folded; other characters pass through unchanged.
#[inline]
pub fn normalize_query(query: &str) -> String {
    query.to_ascii_lowercase()
}

/// Case-insensitive substring check against an already normalized query.
///
/// Equivalent to `text.to_ascii_lowercase().contains(query_lower)` without
/// allocating.
pub fn contains_ignore_case(text: &str, query_lower: &str) -> bool {
    let needle = query_lower.as_bytes();
    if needle.is_empty() {
        return true;
    }
    text.as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

/// Matches a shop's own fields (not its products).
pub fn match_shop(shop: &Shop, query_lower: &str) -> FieldMatch {
    FieldMatch {
        name: contains_ignore_case(&shop.name, query_lower),
        category: contains_ignore_case(shop.category.as_str(), query_lower),
    }
}

/// Matches a product's fields.
pub fn match_product(product: &Product, query_lower: &str) -> FieldMatch {
    FieldMatch {
        name: contains_ignore_case(&product.name, query_lower),
        category: contains_ignore_case(&product.category, query_lower),
    }
}

/// Shop-level relevance: +10 for name, +5 for category.
pub fn shop_relevance(matched: FieldMatch) -> u32 {
    weigh(matched, FieldWeight::ShopName, FieldWeight::ShopCategory)
}

/// Product-level relevance: +8 for name, +4 for category.
pub fn product_relevance(matched: FieldMatch) -> u32 {
    weigh(matched, FieldWeight::ProductName, FieldWeight::ProductCategory)
}

#[inline]
fn weigh(matched: FieldMatch, name: FieldWeight, category: FieldWeight) -> u32 {
    let mut score = 0;
    if matched.name {
        score += name.value();
    }
    if matched.category {
        score += category.value();
    }
    score
}
