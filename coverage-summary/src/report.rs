//! Coverage report parser using quick-xml
//!
//! Reads a (sanitized) JaCoCo XML report into an ordered view of the root
//! element and its direct child elements. Deeper elements are only checked for
//! well-formedness; packages, classes and their nested counters are not kept.

use crate::types::{CounterRecord, ReportError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Tag name of the per-metric elements summarized by a run
pub const COUNTER_TAG: &str = "counter";

/// An XML element with its attributes in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportElement {
    name: String,
    attributes: Vec<(String, String)>,
}

impl ReportElement {
    /// Tag name of the element
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the attribute `key`, if present
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in document order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    fn from_start(start: &BytesStart<'_>, position: u64) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| ReportError::parse(position, e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| ReportError::parse(position, e.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self { name, attributes })
    }
}

/// A parsed coverage report: the root element and its direct children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    root: ReportElement,
    children: Vec<ReportElement>,
}

impl CoverageReport {
    /// Parse report XML
    ///
    /// The input must already be free of DOCTYPE declarations (see
    /// [`crate::sanitize::strip_doctype`]); a remaining declaration is rejected.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut root: Option<ReportElement> = None;
        let mut children = Vec::new();
        let mut depth = 0usize;
        let mut root_closed = false;

        loop {
            let position = reader.buffer_position() as u64;
            let event = reader
                .read_event()
                .map_err(|e| ReportError::parse(reader.error_position() as u64, e.to_string()))?;

            match event {
                Event::Start(start) => {
                    match depth {
                        0 => {
                            if root.is_some() {
                                return Err(ReportError::parse(position, "multiple root elements"));
                            }
                            root = Some(ReportElement::from_start(&start, position)?);
                        }
                        1 => children.push(ReportElement::from_start(&start, position)?),
                        _ => {}
                    }
                    depth += 1;
                }
                Event::Empty(start) => match depth {
                    0 => {
                        if root.is_some() {
                            return Err(ReportError::parse(position, "multiple root elements"));
                        }
                        root = Some(ReportElement::from_start(&start, position)?);
                        root_closed = true;
                    }
                    1 => children.push(ReportElement::from_start(&start, position)?),
                    _ => {}
                },
                Event::End(_) => {
                    if depth == 0 {
                        return Err(ReportError::parse(position, "unexpected closing tag"));
                    }
                    depth -= 1;
                    if depth == 0 {
                        root_closed = true;
                    }
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| ReportError::parse(position, e.to_string()))?;
                    if depth == 0 && !text.trim().is_empty() {
                        return Err(ReportError::parse(position, "text outside of the root element"));
                    }
                }
                Event::CData(_) if depth == 0 => {
                    return Err(ReportError::parse(position, "CDATA outside of the root element"));
                }
                Event::DocType(_) => {
                    return Err(ReportError::parse(position, "DOCTYPE declarations are not allowed"));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if depth != 0 || (root.is_some() && !root_closed) {
            return Err(ReportError::parse(
                reader.buffer_position() as u64,
                "unexpected end of document: unclosed element",
            ));
        }

        let root = root.ok_or_else(|| {
            ReportError::parse(reader.buffer_position() as u64, "no root element")
        })?;

        log::debug!(
            "Parsed report <{}> with {} direct child elements",
            root.name(),
            children.len()
        );

        Ok(Self { root, children })
    }

    /// The document's root element
    pub fn root(&self) -> &ReportElement {
        &self.root
    }

    /// Direct child elements of the root, in document order
    pub fn children(&self) -> &[ReportElement] {
        &self.children
    }

    /// Project every direct `<counter>` child into a [`CounterRecord`]
    ///
    /// Fails on the first invalid counter, so callers get either every record
    /// or none.
    pub fn counters(&self) -> Result<Vec<CounterRecord>> {
        self.children
            .iter()
            .filter(|child| child.name() == COUNTER_TAG)
            .enumerate()
            .map(|(index, element)| counter_from_element(index, element))
            .collect()
    }
}

fn counter_from_element(index: usize, element: &ReportElement) -> Result<CounterRecord> {
    let kind = element
        .attribute("type")
        .ok_or_else(|| ReportError::invalid_counter(index, "missing attribute `type`"))?;
    if kind.is_empty() {
        return Err(ReportError::invalid_counter(index, "empty attribute `type`"));
    }

    let missed = count_attribute(index, element, "missed")?;
    let covered = count_attribute(index, element, "covered")?;

    Ok(CounterRecord::new(kind, missed, covered))
}

fn count_attribute(index: usize, element: &ReportElement, key: &str) -> Result<u64> {
    let raw = element
        .attribute(key)
        .ok_or_else(|| ReportError::invalid_counter(index, format!("missing attribute `{}`", key)))?;

    raw.parse::<u64>().map_err(|e| {
        ReportError::invalid_counter(index, format!("attribute `{}`={:?} is not a count: {}", key, raw, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<report name="demo">
    <sessioninfo id="host-1" start="1" dump="2"/>
    <package name="com/example">
        <counter type="LINE" missed="99" covered="1"/>
    </package>
    <counter type="INSTRUCTION" missed="10" covered="90"/>
    <counter type="BRANCH" missed="0" covered="5"/>
</report>"#;

    #[test]
    fn test_parse_direct_children_in_order() {
        let report = CoverageReport::parse(SAMPLE).unwrap();
        assert_eq!(report.root().name(), "report");
        assert_eq!(report.root().attribute("name"), Some("demo"));

        let names: Vec<&str> = report.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["sessioninfo", "package", "counter", "counter"]);
    }

    #[test]
    fn test_counters_skip_nested_and_other_elements() {
        let report = CoverageReport::parse(SAMPLE).unwrap();
        let counters = report.counters().unwrap();
        assert_eq!(
            counters,
            vec![
                CounterRecord::new("INSTRUCTION", 10, 90),
                CounterRecord::new("BRANCH", 0, 5),
            ]
        );
    }

    #[test]
    fn test_self_closing_root() {
        let report = CoverageReport::parse(r#"<report name="empty"/>"#).unwrap();
        assert!(report.children().is_empty());
        assert!(report.counters().unwrap().is_empty());
    }

    #[test]
    fn test_counter_tag_is_case_sensitive() {
        let report =
            CoverageReport::parse(r#"<report><COUNTER type="LINE" missed="1" covered="1"/></report>"#)
                .unwrap();
        assert!(report.counters().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_documents() {
        let cases = [
            "",
            "<report>",
            "<report><counter></report>",
            "<report/><report/>",
            "text<report/>",
            "</report>",
        ];
        for xml in cases {
            let result = CoverageReport::parse(xml);
            assert!(
                matches!(result, Err(ReportError::Parse { .. })),
                "expected parse error for {:?}, got {:?}",
                xml,
                result
            );
        }
    }

    #[test]
    fn test_doctype_is_rejected() {
        let result = CoverageReport::parse(r#"<!DOCTYPE report><report/>"#);
        assert!(matches!(result, Err(ReportError::Parse { .. })));
    }

    #[test]
    fn test_undefined_entity_is_not_expanded() {
        let result = CoverageReport::parse(r#"<report><counter type="&x;" missed="1" covered="1"/></report>"#);
        assert!(matches!(result, Err(ReportError::Parse { .. })));
    }

    #[test]
    fn test_invalid_counter_attributes() {
        let cases = [
            (r#"<report><counter missed="1" covered="1"/></report>"#, "type"),
            (r#"<report><counter type="" missed="1" covered="1"/></report>"#, "type"),
            (r#"<report><counter type="LINE" covered="1"/></report>"#, "missed"),
            (r#"<report><counter type="LINE" missed="ten" covered="1"/></report>"#, "missed"),
            (r#"<report><counter type="LINE" missed="1" covered="-3"/></report>"#, "covered"),
        ];
        for (xml, attribute) in cases {
            let report = CoverageReport::parse(xml).unwrap();
            match report.counters() {
                Err(ReportError::InvalidCounter { index, reason }) => {
                    assert_eq!(index, 0);
                    assert!(reason.contains(attribute), "{} should mention {}", reason, attribute);
                }
                other => panic!("expected invalid counter for {}, got {:?}", xml, other),
            }
        }
    }
}
