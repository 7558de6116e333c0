//! Cranfield collection in XML form.
//!
//! Documents are `<doc>` records with `docno`, `title`, `author`, `biblio`
//! and `text` children; queries are `<top>` records with `num` and `title`.

use super::Document;
use crate::ircore::error::{Error, Result};
use roxmltree::{Node, ParsingOptions};

const DOC_TAG: &str = "doc";
const DOC_ID_TAG: &str = "docno";
// `bib` is accepted as an alias of `biblio`
const DOC_FIELDS: &[&[&str]] = &[&["title"], &["author"], &["biblio", "bib"], &["text"]];
const QUERY_TAG: &str = "top";
const QUERY_ID_TAG: &str = "num";
const QUERY_TEXT_TAG: &str = "title";

pub fn parse_documents(xml: &str) -> Result<Vec<Document>> {
    let tree = parse_tree(xml)?;
    let mut docs = vec![];
    for node in tree.descendants().filter(|n| n.has_tag_name(DOC_TAG)) {
        let id = required_field(node, DOC_ID_TAG)?;
        let content: Vec<&str> = DOC_FIELDS
            .iter()
            .map(|names| names.iter().find_map(|name| field(node, name)).unwrap_or(""))
            .collect();
        docs.push(Document::new(id, content.join(" ")));
    }
    Ok(docs)
}

pub fn parse_queries(xml: &str) -> Result<Vec<Document>> {
    let tree = parse_tree(xml)?;
    let mut queries = vec![];
    for node in tree.descendants().filter(|n| n.has_tag_name(QUERY_TAG)) {
        let id = required_field(node, QUERY_ID_TAG)?;
        let text = field(node, QUERY_TEXT_TAG).unwrap_or("");
        queries.push(Document::new(id, text.to_string()));
    }
    Ok(queries)
}

fn parse_tree(xml: &str) -> Result<roxmltree::Document<'_>> {
    let options = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
    Ok(roxmltree::Document::parse_with_options(xml, options)?)
}

// trimmed text of the first child element with this tag
fn field<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|child| child.has_tag_name(name))
        .and_then(|child| child.text())
        .map(str::trim)
}

fn required_field(node: Node<'_, '_>, name: &str) -> Result<String> {
    match field(node, name) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(Error::Corpus(format!(
            "<{}> record at byte {} has no <{}>",
            node.tag_name().name(),
            node.range().start,
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_documents() {
        let xml = "<xml>
<doc>
<docno>1</docno>
<title>experimental investigation of the aerodynamics of a
wing in a slipstream .</title>
<author>brenckman,m.</author>
<biblio>j. ae. scs. 25, 1958, 324.</biblio>
<text>
an experimental study of a wing in a propeller slipstream .
</text>
</doc>
<doc>
<docno> 2 </docno>
<title>simple shear flow past a flat plate</title>
<author/>
<bib>j. fluid mech. 2, 1957</bib>
</doc>
</xml>";
        let docs = parse_documents(xml).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].get_id(), "1");
        assert_eq!(
            docs[0].get_content(),
            "experimental investigation of the aerodynamics of a\nwing in a slipstream . \
            brenckman,m. j. ae. scs. 25, 1958, 324. \
            an experimental study of a wing in a propeller slipstream ."
        );
        assert_eq!(docs[1].get_id(), "2");
        assert_eq!(
            docs[1].get_content(),
            "simple shear flow past a flat plate  j. fluid mech. 2, 1957 "
        );
    }

    #[test]
    fn test_parse_queries() {
        let xml = "<xml>
<top><num>1</num><title>what similarity laws must be obeyed when constructing aeroelastic models
of heated high speed aircraft .</title></top>
<top><num>2</num><title>what are the structural and aeroelastic problems associated with flight
of high speed aircraft .</title></top>
</xml>";
        let queries = parse_queries(xml).unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[1].get_id(), "2");
        assert!(queries[0].get_content().starts_with("what similarity laws"));
    }

    #[test]
    fn test_missing_id() {
        let xml = "<xml><doc><title>no id</title></doc></xml>";
        assert!(matches!(parse_documents(xml), Err(Error::Corpus(_))));
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(parse_documents("<xml><doc>"), Err(Error::Xml(_))));
    }
}
