//! Conversions between the rio streaming model and owned oxrdf terms
//!
//! The rio parsers hand out borrowed triples; we copy them into owned
//! `oxrdf::Triple`s on the way in, and borrow back out when formatting.
//! RDF-star quoted triples are rejected in both directions.

use super::CodecError;
use oxrdf::vocab::xsd;
use oxrdf::{BlankNode, Literal, NamedNode, Subject, Term, Triple};
use rio_api::formatter::TriplesFormatter;
use rio_api::model as rio;

pub(super) fn triple(t: rio::Triple<'_>) -> Result<Triple, CodecError> {
    let subject: Subject = match t.subject {
        rio::Subject::NamedNode(n) => named(n.iri)?.into(),
        rio::Subject::BlankNode(b) => blank(b.id)?.into(),
        _ => {
            return Err(CodecError::Malformed(
                "quoted triple subjects are not supported".to_string(),
            ))
        }
    };

    let predicate = named(t.predicate.iri)?;

    let object: Term = match t.object {
        rio::Term::NamedNode(n) => named(n.iri)?.into(),
        rio::Term::BlankNode(b) => blank(b.id)?.into(),
        rio::Term::Literal(rio::Literal::Simple { value }) => {
            Literal::new_simple_literal(value).into()
        }
        rio::Term::Literal(rio::Literal::LanguageTaggedString { value, language }) => {
            Literal::new_language_tagged_literal(value, language)
                .map_err(|e| CodecError::Malformed(e.to_string()))?
                .into()
        }
        rio::Term::Literal(rio::Literal::Typed { value, datatype }) => {
            Literal::new_typed_literal(value, named(datatype.iri)?).into()
        }
        _ => {
            return Err(CodecError::Malformed(
                "quoted triple objects are not supported".to_string(),
            ))
        }
    };

    Ok(Triple::new(subject, predicate, object))
}

pub(super) fn format_into<F>(formatter: &mut F, triple: &Triple) -> Result<(), CodecError>
where
    F: TriplesFormatter<Error = std::io::Error>,
{
    let subject = match &triple.subject {
        Subject::NamedNode(n) => rio::Subject::NamedNode(rio::NamedNode { iri: n.as_str() }),
        Subject::BlankNode(b) => rio::Subject::BlankNode(rio::BlankNode { id: b.as_str() }),
        _ => {
            return Err(CodecError::Serialize(
                "quoted triple subjects are not supported".to_string(),
            ))
        }
    };

    let predicate = rio::NamedNode {
        iri: triple.predicate.as_str(),
    };

    let object = match &triple.object {
        Term::NamedNode(n) => rio::Term::NamedNode(rio::NamedNode { iri: n.as_str() }),
        Term::BlankNode(b) => rio::Term::BlankNode(rio::BlankNode { id: b.as_str() }),
        Term::Literal(l) => {
            if let Some(language) = l.language() {
                rio::Term::Literal(rio::Literal::LanguageTaggedString {
                    value: l.value(),
                    language,
                })
            } else if l.datatype() == xsd::STRING {
                rio::Term::Literal(rio::Literal::Simple { value: l.value() })
            } else {
                rio::Term::Literal(rio::Literal::Typed {
                    value: l.value(),
                    datatype: rio::NamedNode {
                        iri: l.datatype().as_str(),
                    },
                })
            }
        }
        _ => {
            return Err(CodecError::Serialize(
                "quoted triple objects are not supported".to_string(),
            ))
        }
    };

    formatter
        .format(&rio::Triple {
            subject,
            predicate,
            object,
        })
        .map_err(|e| CodecError::Serialize(e.to_string()))
}

fn named(iri: &str) -> Result<NamedNode, CodecError> {
    NamedNode::new(iri).map_err(|e| CodecError::Malformed(e.to_string()))
}

fn blank(id: &str) -> Result<BlankNode, CodecError> {
    BlankNode::new(id).map_err(|e| CodecError::Malformed(e.to_string()))
}
