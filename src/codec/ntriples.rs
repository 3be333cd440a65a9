//! N-Triples codec

use super::{convert, CodecResult};
use crate::rdf::GraphContent;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesFormatter, NTriplesParser};

pub(super) fn parse(data: &[u8]) -> CodecResult<GraphContent> {
    let mut graph = GraphContent::new();
    NTriplesParser::new(data).parse_all::<super::CodecError>(&mut |t| {
        graph.insert(convert::triple(t)?);
        Ok(())
    })?;
    Ok(graph)
}

pub(super) fn serialize(graph: &GraphContent) -> CodecResult<Vec<u8>> {
    let mut formatter = NTriplesFormatter::new(Vec::new());
    for triple in graph.iter() {
        convert::format_into(&mut formatter, triple)?;
    }
    Ok(formatter.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecError;

    #[test]
    fn test_roundtrip() {
        let input = br#"<http://example.org/a> <http://example.org/p> "A" .
<http://example.org/a> <http://example.org/q> <http://example.org/b> .
"#;
        let graph = parse(input).unwrap();
        assert_eq!(graph.len(), 2);

        let serialized = serialize(&graph).unwrap();
        assert_eq!(parse(&serialized).unwrap(), graph);
    }

    #[test]
    fn test_malformed_input() {
        let err = parse(b"<http://example.org/a> broken").unwrap_err();
        assert!(matches!(err, CodecError::Malformed(_)));
    }
}
