//! WASM bindings for local search.

use crate::{filter_shops, search_local_data, Catalog, ShopFilter};
use aroundin_geo::Coordinate;
use wasm_bindgen::prelude::*;

/// Search a catalog and return ranked results as JSON.
///
/// # Arguments
/// * `catalog_json` - JSON array of shops
/// * `query` - Search query
/// * `lat` / `lng` - Requester position; pass both or neither
///
/// # Returns
/// JSON array of results tagged `"shop"` or `"product"`, highest score first
#[wasm_bindgen(js_name = searchLocalData)]
pub fn search_local_data_js(
    catalog_json: &str,
    query: &str,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<String, JsValue> {
    let catalog = Catalog::from_json_str(catalog_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let requester = lat.zip(lng).map(|(lat, lng)| Coordinate::new(lat, lng));
    let results = search_local_data(&catalog, query, requester);

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Filter a catalog by `all`, `recommended` or a category name.
///
/// # Returns
/// JSON array of matching shops, in catalog order
#[wasm_bindgen(js_name = filterShops)]
pub fn filter_shops_js(catalog_json: &str, filter: &str) -> Result<String, JsValue> {
    let catalog = Catalog::from_json_str(catalog_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let filter: ShopFilter = filter.parse().map_err(|e: crate::SearchError| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&filter_shops(&catalog, filter))
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
