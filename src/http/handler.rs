//! Per-verb handlers for the graph store protocol
//!
//! Every request goes through the same three steps before touching the
//! store: validate the `graph` query parameter as an absolute IRI, resolve
//! the negotiated media type against the codec registry, then dispatch.
//! POST and PUT parse the request body *before* any store lock is taken, so
//! a slow upload never holds the store hostage.
//!
//! Verb semantics follow the protocol as originally deployed: POST clears
//! the target graph before merging (full replace, answered with a
//! `Location` header), PUT merges into existing content without clearing.
//! This is the inverse of the usual REST convention and is intentional.

use crate::codec::{self, Codec, CodecError, RdfFormat};
use crate::store::{GraphStore, StoreError};
use axum::extract::{Query, State};
use bytes::Bytes;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request-level errors, mapped onto protocol status codes
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing/invalid graph URI, unsupported media type, unparsable body
    #[error("bad request: {0}")]
    BadRequest(String),

    /// GET or DELETE against a URI with no stored graph
    #[error("graph not found")]
    NotFound,

    /// Unexpected failure in the codec or store layer
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CodecError> for ApiError {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::UnsupportedMediaType(_) | CodecError::Malformed(_) => {
                ApiError::BadRequest(e.to_string())
            }
            CodecError::Serialize(_) | CodecError::Io(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::Internal(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            warn!("request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Query parameters shared by every verb
#[derive(Deserialize)]
pub struct GraphParams {
    graph: Option<String>,
}

impl GraphParams {
    /// Validate the target graph URI: present, non-empty, absolute
    fn target(&self) -> Result<&str, ApiError> {
        let uri = self
            .graph
            .as_deref()
            .filter(|uri| !uri.is_empty())
            .ok_or_else(|| ApiError::BadRequest("missing graph parameter".to_string()))?;

        oxiri::Iri::parse(uri)
            .map_err(|e| ApiError::BadRequest(format!("invalid graph URI <{uri}>: {e}")))?;

        Ok(uri)
    }
}

/// GET: serialize the target graph in the format negotiated from `Accept`
pub async fn get_graph(
    State(store): State<Arc<GraphStore>>,
    Query(params): Query<GraphParams>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let uri = params.target()?;
    info!("GET graph <{}>", uri);

    let codec = accept_codec(&headers)?;
    let body = store.read(uri, &codec).await?;

    Ok(([(header::CONTENT_TYPE, codec.media_type())], body).into_response())
}

/// POST: full replace — clear the target graph, then merge the body in.
/// Responds 201 with a `Location` header naming the graph.
pub async fn post_graph(
    State(store): State<Arc<GraphStore>>,
    Query(params): Query<GraphParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let uri = params.target()?;
    info!("POST graph <{}> ({} bytes)", uri, body.len());

    let codec = content_codec(&headers)?;
    // Parse outside the lock; only the in-memory merge runs under it.
    let incoming = codec.parse(&body)?;
    store.write(uri, incoming, true).await;

    Ok((StatusCode::CREATED, [(header::LOCATION, uri.to_string())]).into_response())
}

/// PUT: merge the body into existing content without clearing.
/// Responds 201, no `Location` header.
pub async fn put_graph(
    State(store): State<Arc<GraphStore>>,
    Query(params): Query<GraphParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let uri = params.target()?;
    info!("PUT graph <{}> ({} bytes)", uri, body.len());

    let codec = content_codec(&headers)?;
    let incoming = codec.parse(&body)?;
    store.write(uri, incoming, false).await;

    Ok(StatusCode::CREATED.into_response())
}

/// DELETE: drop the target graph entirely
pub async fn delete_graph(
    State(store): State<Arc<GraphStore>>,
    Query(params): Query<GraphParams>,
) -> Result<Response, ApiError> {
    let uri = params.target()?;
    info!("DELETE graph <{}>", uri);

    store.delete(uri).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Liveness probe with a graph count
pub async fn status(State(store): State<Arc<GraphStore>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "graphs": store.graph_count().await,
    }))
}

/// Negotiate a codec from the `Accept` header.
///
/// First supported entry wins; a missing header or a bare wildcard falls
/// back to RDF/XML, the first format the protocol ever produced.
fn accept_codec(headers: &HeaderMap) -> Result<Codec, ApiError> {
    let accept = match headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) {
        Some(value) => value,
        None => return Ok(Codec::of(RdfFormat::RdfXml)),
    };

    for entry in accept.split(',') {
        let token = entry.split(';').next().unwrap_or("").trim();
        if token.is_empty() {
            continue;
        }
        if token == "*/*" || token == "application/*" {
            return Ok(Codec::of(RdfFormat::RdfXml));
        }
        if let Ok(codec) = codec::resolve(token) {
            return Ok(codec);
        }
    }

    Err(ApiError::BadRequest(format!(
        "no supported media type in Accept: {accept}"
    )))
}

/// Resolve the request body codec from `Content-Type` (mandatory)
fn content_codec(headers: &HeaderMap) -> Result<Codec, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::BadRequest("missing Content-Type header".to_string()))?;

    Ok(codec::resolve(content_type)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_map(name: header::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_target_rejects_missing_and_empty() {
        let missing = GraphParams { graph: None };
        assert!(matches!(missing.target(), Err(ApiError::BadRequest(_))));

        let empty = GraphParams {
            graph: Some(String::new()),
        };
        assert!(matches!(empty.target(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_target_rejects_relative_uri() {
        let relative = GraphParams {
            graph: Some("not-absolute".to_string()),
        };
        assert!(matches!(relative.target(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_target_accepts_absolute_uri() {
        let params = GraphParams {
            graph: Some("http://www.example.com/mygraph".to_string()),
        };
        assert_eq!(params.target().unwrap(), "http://www.example.com/mygraph");
    }

    #[test]
    fn test_accept_negotiation_first_supported_wins() {
        let headers = header_map(
            header::ACCEPT,
            "application/json, application/x-turtle;q=0.9, application/rdf+xml",
        );
        let codec = accept_codec(&headers).unwrap();
        assert_eq!(codec.format(), RdfFormat::Turtle);
    }

    #[test]
    fn test_accept_defaults_to_rdfxml() {
        assert_eq!(
            accept_codec(&HeaderMap::new()).unwrap().format(),
            RdfFormat::RdfXml
        );
        let wildcard = header_map(header::ACCEPT, "*/*");
        assert_eq!(accept_codec(&wildcard).unwrap().format(), RdfFormat::RdfXml);
    }

    #[test]
    fn test_accept_with_no_supported_entry() {
        let headers = header_map(header::ACCEPT, "application/json, text/html");
        assert!(matches!(
            accept_codec(&headers),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_content_type_is_mandatory() {
        assert!(matches!(
            content_codec(&HeaderMap::new()),
            Err(ApiError::BadRequest(_))
        ));
    }
}
