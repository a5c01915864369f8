//! Wire payloads returned by the two retrieval backends
//!
//! Field names follow the backends' JSON (camelCase). Graph rows are opaque
//! string-keyed maps: the graph schema varies per query and is
//! backend-defined, so it is never statically typed here.

use serde::{Deserialize, Serialize};

/// One scored passage from vector similarity search
///
/// `score` stays a string; the backend formats it and the client only
/// displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorHit {
    pub score: String,
    pub text: String,
}

/// Successful response from the vector retrieval backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorPayload {
    pub query: String,
    pub summary: String,
    pub vector_results: Vec<VectorHit>,
}

/// Successful response from the graph retrieval backend
///
/// `cypher_result_count` is the backend's explicit count and is displayed
/// verbatim even when it disagrees with `cypher_results.len()`; a mismatch
/// is surfaced as-is, never reconciled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphPayload {
    pub query: String,
    pub summary: String,
    pub cypher_query: String,
    pub cypher_result_count: u64,
    pub cypher_results: Vec<serde_json::Map<String, serde_json::Value>>,
    /// Vector-search fallback, same shape as the vector side's results
    pub vector_results: Vec<VectorHit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_payload_deserializes_wire_format() {
        let body = r#"{
            "query": "What is diabetes?",
            "summary": "A chronic condition.",
            "vectorResults": [{"score": "0.91", "text": "Diabetes is..."}]
        }"#;
        let payload: VectorPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.query, "What is diabetes?");
        assert_eq!(payload.vector_results.len(), 1);
        assert_eq!(payload.vector_results[0].score, "0.91");
    }

    #[test]
    fn test_graph_payload_rows_are_opaque() {
        let body = r#"{
            "query": "What is diabetes?",
            "summary": "Graph summary.",
            "cypherQuery": "MATCH (d:Disease) RETURN d",
            "cypherResultCount": 2,
            "cypherResults": [
                {"name": "Type 1", "prevalence": 0.05},
                {"name": "Type 2", "onset": "adult"}
            ],
            "vectorResults": []
        }"#;
        let payload: GraphPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.cypher_result_count, 2);
        assert_eq!(payload.cypher_results.len(), 2);
        // Rows keep whatever keys the backend sent
        assert!(payload.cypher_results[0].contains_key("prevalence"));
        assert!(payload.cypher_results[1].contains_key("onset"));
    }

    #[test]
    fn test_graph_payload_count_mismatch_is_preserved() {
        // Backend claims 5 rows but sends 1; both are kept as given
        let body = r#"{
            "query": "q",
            "summary": "s",
            "cypherQuery": "MATCH (n) RETURN n",
            "cypherResultCount": 5,
            "cypherResults": [{"n": 1}],
            "vectorResults": []
        }"#;
        let payload: GraphPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.cypher_result_count, 5);
        assert_eq!(payload.cypher_results.len(), 1);
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let body = r#"{"query": "q", "vectorResults": []}"#;
        assert!(serde_json::from_str::<VectorPayload>(body).is_err());
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let body = r#"{
            "query": "q",
            "summary": "s",
            "vectorResults": [],
            "modelVersion": "v2"
        }"#;
        assert!(serde_json::from_str::<VectorPayload>(body).is_ok());
    }
}
