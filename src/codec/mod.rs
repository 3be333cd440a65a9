//! RDF serialization codecs
//!
//! Supports:
//! - Turtle (`application/x-turtle`)
//! - RDF/XML (`application/rdf+xml`)
//! - N-Triples (`application/n-triples`)
//!
//! The registry is a static mapping from media-type token to a
//! parse/serialize function pair. Resolution strips media-type parameters
//! (`; charset=...`) and accepts the legacy aliases the protocol's clients
//! historically sent (`application/turtle`, `text/turtle`, `text/plain`).

mod convert;
mod ntriples;
mod rdfxml;
mod turtle;

use crate::rdf::GraphContent;
use thiserror::Error;

/// Codec errors
#[derive(Error, Debug)]
pub enum CodecError {
    /// No codec registered for the media type
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Request body could not be parsed as the claimed format
    #[error("malformed RDF content: {0}")]
    Malformed(String),

    /// Serializer failure
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rio_turtle::TurtleError> for CodecError {
    fn from(e: rio_turtle::TurtleError) -> Self {
        CodecError::Malformed(e.to_string())
    }
}

impl From<rio_xml::RdfXmlError> for CodecError {
    fn from(e: rio_xml::RdfXmlError) -> Self {
        CodecError::Malformed(e.to_string())
    }
}

pub type CodecResult<T> = Result<T, CodecError>;

/// RDF serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle format (.ttl)
    Turtle,
    /// N-Triples format (.nt)
    NTriples,
    /// RDF/XML format (.rdf)
    RdfXml,
}

impl RdfFormat {
    /// Look up a format by media-type token (without parameters)
    pub fn from_media_type(token: &str) -> Option<Self> {
        match token {
            "application/x-turtle" | "application/turtle" | "text/turtle" => Some(Self::Turtle),
            "application/n-triples" | "text/plain" => Some(Self::NTriples),
            "application/rdf+xml" => Some(Self::RdfXml),
            _ => None,
        }
    }

    /// Canonical media type, used as the response Content-Type
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Turtle => "application/x-turtle",
            Self::NTriples => "application/n-triples",
            Self::RdfXml => "application/rdf+xml",
        }
    }
}

type ParseFn = fn(&[u8]) -> CodecResult<GraphContent>;
type SerializeFn = fn(&GraphContent) -> CodecResult<Vec<u8>>;

/// A resolved parse/serialize pair for one format
#[derive(Clone, Copy)]
pub struct Codec {
    format: RdfFormat,
    parse: ParseFn,
    serialize: SerializeFn,
}

impl Codec {
    /// Get the codec for a format
    pub fn of(format: RdfFormat) -> Self {
        match format {
            RdfFormat::Turtle => Self {
                format,
                parse: turtle::parse,
                serialize: turtle::serialize,
            },
            RdfFormat::NTriples => Self {
                format,
                parse: ntriples::parse,
                serialize: ntriples::serialize,
            },
            RdfFormat::RdfXml => Self {
                format,
                parse: rdfxml::parse,
                serialize: rdfxml::serialize,
            },
        }
    }

    /// The format this codec handles
    pub fn format(&self) -> RdfFormat {
        self.format
    }

    /// Canonical media type of the format
    pub fn media_type(&self) -> &'static str {
        self.format.media_type()
    }

    /// Parse a request body into graph content
    pub fn parse(&self, data: &[u8]) -> CodecResult<GraphContent> {
        (self.parse)(data)
    }

    /// Serialize graph content into a response body
    pub fn serialize(&self, graph: &GraphContent) -> CodecResult<Vec<u8>> {
        (self.serialize)(graph)
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec").field("format", &self.format).finish()
    }
}

/// Resolve a media type (as sent in Accept or Content-Type) to a codec
pub fn resolve(media_type: &str) -> CodecResult<Codec> {
    let essence = media_type
        .parse::<mime::Mime>()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|_| media_type.trim().to_string());

    RdfFormat::from_media_type(&essence)
        .map(Codec::of)
        .ok_or_else(|| CodecError::UnsupportedMediaType(media_type.to_string()))
}
