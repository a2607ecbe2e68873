//! Discovery flow tests with a scripted external searcher.

use aroundin_api_client::{ApiError, ApiResult, PlaceSource, PlacesAnswer};
use aroundin_core::config::Config;
use aroundin_discovery::{from_config, DiscoveryService, ExternalSearch};
use aroundin_geo::{Coordinate, FixedLocation};
use aroundin_search::Catalog;
use std::future::Future;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const NAIROBI_CBD: Coordinate = Coordinate::new(-1.2841, 36.8155);

#[derive(Clone, Default)]
struct FakeSearch {
    calls: Arc<AtomicUsize>,
    fail: bool,
    delay: Option<Duration>,
}

impl FakeSearch {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ExternalSearch for FakeSearch {
    fn find_nearby_places(
        &self,
        query: &str,
        location: Coordinate,
    ) -> impl Future<Output = ApiResult<PlacesAnswer>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let fail = self.fail;
        let delay = self.delay;
        let text = format!("{query} near {:.2},{:.2}", location.latitude, location.longitude);

        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if fail {
                return Err(ApiError::api_response(503, "unavailable"));
            }
            Ok(PlacesAnswer {
                text,
                sources: vec![PlaceSource {
                    uri: "https://maps.google.com/?cid=1".to_string(),
                    title: "Somewhere".to_string(),
                    review_snippets: Vec::new(),
                }],
            })
        }
    }
}

fn service_with(fake: FakeSearch) -> DiscoveryService<FakeSearch> {
    DiscoveryService::new(Catalog::demo().clone())
        .with_location(FixedLocation(NAIROBI_CBD))
        .with_external(fake)
}

#[tokio::test]
async fn search_attaches_external_answer() {
    let fake = FakeSearch::default();
    let service = service_with(fake.clone());

    let results = service.search("phone").await;

    assert_eq!(fake.calls(), 1);
    assert!(!results.local_results.is_empty());
    let answer = results.external.expect("expected external answer");
    assert_eq!(answer.text, "phone near -1.28,36.82");
    assert_eq!(answer.sources.len(), 1);
}

#[tokio::test]
async fn external_failure_keeps_local_results() {
    let fake = FakeSearch::failing();
    let service = service_with(fake.clone());

    let results = service.search("phone").await;

    assert_eq!(fake.calls(), 1);
    assert!(results.external.is_none());
    assert_eq!(
        results.local_results.len(),
        service.search_local("phone").len()
    );
    assert!(!results.local_results.is_empty());
}

#[tokio::test]
async fn no_external_call_without_location() {
    let fake = FakeSearch::default();
    let service = DiscoveryService::new(Catalog::demo().clone()).with_external(fake.clone());

    let results = service.search("phone").await;

    assert_eq!(fake.calls(), 0);
    assert!(results.external.is_none());
    assert!(!results.local_results.is_empty());
}

#[tokio::test]
async fn no_external_call_for_blank_query() {
    let fake = FakeSearch::default();
    let service = service_with(fake.clone());

    for query in ["", "   "] {
        let results = service.search(query).await;
        assert!(results.local_results.is_empty());
        assert!(results.external.is_none());
    }
    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn external_runs_even_without_local_matches() {
    let fake = FakeSearch::default();
    let service = service_with(fake.clone());

    let results = service.search("zebra crossing").await;

    assert!(results.local_results.is_empty());
    assert!(results.has_external_results());
    assert_eq!(fake.calls(), 1);
}

#[tokio::test]
async fn overlapping_searches_are_independent() {
    let fake = FakeSearch {
        delay: Some(Duration::from_millis(20)),
        ..FakeSearch::default()
    };
    let service = service_with(fake.clone());

    let (first, second) = tokio::join!(service.search("audio"), service.search("bakery"));

    assert_eq!(fake.calls(), 2);
    assert_eq!(first.external.unwrap().text, "audio near -1.28,36.82");
    assert_eq!(second.external.unwrap().text, "bakery near -1.28,36.82");
    assert_eq!(first.local_results[0].shop().id, "s1");
    assert_eq!(second.local_results[0].shop().id, "s2");
}

#[tokio::test]
async fn from_config_reads_location_and_threshold() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[search]
recommended_min_rating = 4.0

[external]
enabled = false

[location]
latitude = -1.2841
longitude = 36.8155
"#
    )
    .unwrap();

    let config = Config::load(file.path().to_str()).unwrap();
    let service = from_config(Catalog::demo().clone(), &config).unwrap();

    assert!(!service.has_external());
    assert_eq!(
        service
            .browse(aroundin_search::ShopFilter::Recommended)
            .len(),
        3
    );

    let results = service.search("earphones").await;
    assert_eq!(results.location, Some(NAIROBI_CBD));
    assert!(results.external.is_none());
}
