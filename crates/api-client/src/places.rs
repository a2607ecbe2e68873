//! Wire types for grounded place search
//!
//! Maps to the `models/{model}:generateContent` endpoint with the Google Maps
//! grounding tool enabled and the requester position as retrieval context.

use aroundin_geo::Coordinate;
use serde::{Deserialize, Serialize};

/// Answer to a place search: model text plus the places it was grounded on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacesAnswer {
    /// Generated answer text
    pub text: String,
    /// Places cited by the answer
    pub sources: Vec<PlaceSource>,
}

/// A place the answer was grounded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSource {
    /// Maps link for the place
    pub uri: String,
    /// Place name
    pub title: String,
    /// Review excerpts backing the answer
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub review_snippets: Vec<ReviewSnippet>,
}

/// A review excerpt for a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSnippet {
    /// Link to the review
    pub uri: String,
    /// Excerpt text
    pub text: String,
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// `generateContent` request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    tools: [Tool; 1],
    tool_config: ToolConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [TextPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_maps: GoogleMaps,
}

#[derive(Debug, Serialize)]
struct GoogleMaps {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolConfig {
    retrieval_config: RetrievalConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfig {
    lat_lng: Coordinate,
}

impl<'a> GenerateContentRequest<'a> {
    pub(crate) fn new(query: &'a str, location: Coordinate) -> Self {
        Self {
            contents: [Content {
                role: "user",
                parts: [TextPart { text: query }],
            }],
            tools: [Tool {
                google_maps: GoogleMaps {},
            }],
            tool_config: ToolConfig {
                retrieval_config: RetrievalConfig { lat_lng: location },
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// `generateContent` response body (only the fields we read)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Default, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    maps: Option<MapsChunk>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapsChunk {
    #[serde(default)]
    uri: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    place_answer_sources: Option<PlaceAnswerSources>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceAnswerSources {
    #[serde(default)]
    review_snippets: Vec<ReviewSnippet>,
}

impl GenerateContentResponse {
    /// Reduces the response to the first candidate's text and map sources.
    pub(crate) fn into_answer(self) -> PlacesAnswer {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return PlacesAnswer::default();
        };

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let sources = candidate
            .grounding_metadata
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.maps)
                    .map(|maps| PlaceSource {
                        uri: maps.uri,
                        title: maps.title,
                        review_snippets: maps
                            .place_answer_sources
                            .map(|s| s.review_snippets)
                            .unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        PlacesAnswer { text, sources }
    }
}
