//! Turtle codec

use super::{convert, CodecResult};
use crate::rdf::GraphContent;
use rio_api::parser::TriplesParser;
use rio_turtle::{TurtleFormatter, TurtleParser};

pub(super) fn parse(data: &[u8]) -> CodecResult<GraphContent> {
    let mut graph = GraphContent::new();
    TurtleParser::new(data, None).parse_all::<super::CodecError>(&mut |t| {
        graph.insert(convert::triple(t)?);
        Ok(())
    })?;
    Ok(graph)
}

pub(super) fn serialize(graph: &GraphContent) -> CodecResult<Vec<u8>> {
    let mut formatter = TurtleFormatter::new(Vec::new());
    for triple in graph.iter() {
        convert::format_into(&mut formatter, triple)?;
    }
    Ok(formatter.finish()?)
}
