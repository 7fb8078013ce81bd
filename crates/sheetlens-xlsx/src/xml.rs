//! In-memory XML element tree and namespace helpers
//!
//! Parts are small enough to be read whole, so each one is turned into an
//! [`XmlElement`] tree and queried by local tag name. Prefixes are kept in
//! [`XmlElement::name`] and stripped by [`strip_namespace`] when matching.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};

/// Namespace URIs used by the parts this crate reads
pub mod ns {
    /// SpreadsheetML main namespace (workbook, worksheets, styles, shared strings)
    pub const SPREADSHEETML: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
    /// Office document relationships (`r:id` attributes)
    pub const RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    /// DrawingML chart namespace (`c:` prefix)
    pub const CHART: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
    /// DrawingML main namespace (`a:` prefix, rich text in chart titles)
    pub const DRAWINGML: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
}

/// Strip the namespace from a tag name.
///
/// Handles both Clark notation (`{uri}local`) and prefixed names
/// (`c:plotArea`). Names without a namespace are returned unchanged.
pub fn strip_namespace(tag: &str) -> &str {
    if let Some(rest) = tag.strip_prefix('{') {
        if let Some((_, local)) = rest.split_once('}') {
            return local;
        }
    }
    match tag.rsplit_once(':') {
        Some((_, local)) => local,
        None => tag,
    }
}

/// A parsed XML element with its attributes, children and direct text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    /// Qualified tag name as written (e.g. `c:ser`, `sheetData`)
    pub name: String,
    /// Attributes in document order, keys as written (e.g. `r:id`)
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<XmlElement>,
    /// Concatenated text directly inside this element, whitespace preserved
    pub text: String,
}

impl XmlElement {
    /// Parse a complete XML document and return its root element
    pub fn parse(bytes: &[u8]) -> XlsxResult<Self> {
        let mut reader = Reader::from_reader(bytes);
        reader.trim_text(false);

        let mut buf = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => stack.push(Self::from_start(&e)),
                Event::Empty(e) => {
                    let element = Self::from_start(&e);
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => root = root.or(Some(element)),
                    }
                }
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(element),
                            None => root = root.or(Some(element)),
                        }
                    }
                }
                Event::Text(e) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&e.unescape()?);
                    }
                }
                Event::CData(e) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        root.ok_or_else(|| XlsxError::Parse("document has no root element".into()))
    }

    fn from_start(e: &BytesStart<'_>) -> Self {
        let attributes = e
            .attributes()
            .flatten()
            .map(|attr| {
                let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                let value = attr
                    .unescape_value()
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
                (key, value)
            })
            .collect();

        Self {
            name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            attributes,
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Tag name without its namespace prefix
    pub fn local_name(&self) -> &str {
        strip_namespace(&self.name)
    }

    /// Check the element's local name
    pub fn is(&self, local: &str) -> bool {
        self.local_name() == local
    }

    /// Attribute value by key as written (`r`, `r:id`, ...)
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute value, treating an empty value as absent
    pub fn attr_nonempty(&self, key: &str) -> Option<&str> {
        self.attr(key).filter(|v| !v.is_empty())
    }

    /// First child with the given local name
    pub fn child(&self, local: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.is(local))
    }

    /// All children with the given local name
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.is(local))
    }

    /// Follow a path of local names through first-matching children
    pub fn path(&self, path: &[&str]) -> Option<&XmlElement> {
        path.iter()
            .try_fold(self, |element, local| element.child(local))
    }

    /// First descendant (depth-first, document order) with the given local name
    pub fn descendant(&self, local: &str) -> Option<&XmlElement> {
        self.children
            .iter()
            .find_map(|c| if c.is(local) { Some(c) } else { c.descendant(local) })
    }

    /// All descendants in depth-first document order, excluding `self`
    pub fn descendants(&self) -> Vec<&XmlElement> {
        let mut out = Vec::new();
        let mut stack: Vec<&XmlElement> = self.children.iter().rev().collect();
        while let Some(el) = stack.pop() {
            out.push(el);
            stack.extend(el.children.iter().rev());
        }
        out
    }

    /// True if the element binds `uri` as its default or a prefixed namespace
    pub fn declares_namespace(&self, uri: &str) -> bool {
        self.attributes
            .iter()
            .any(|(k, v)| (k == "xmlns" || k.starts_with("xmlns:")) && v == uri)
    }
}

/// Log when a part's root does not bind the namespace its reader expects.
///
/// Matching is by local name, so such parts are still read.
pub(crate) fn check_namespace(root: &XmlElement, uri: &str, part: &str) {
    if !root.declares_namespace(uri) {
        log::debug!("{}: root <{}> does not declare {}", part, root.name, uri);
    }
}

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// Excel uses this format to encode characters that XML cannot carry:
/// - `_x000d_` = CR (carriage return)
/// - `_x000a_` = LF (line feed)
/// - `_x0009_` = Tab
/// - `_x005f_` = Underscore (escaped underscore)
pub(crate) fn decode_excel_escapes(s: &str) -> String {
    if !s.contains("_x") {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find("_x") {
        result.push_str(&rest[..pos]);
        let candidate = &rest[pos..];

        let decoded = candidate
            .get(2..6)
            .filter(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
            .filter(|_| candidate.as_bytes().get(6) == Some(&b'_'))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .and_then(char::from_u32);

        match decoded {
            Some(c) => {
                result.push(c);
                rest = &candidate[7..];
            }
            None => {
                result.push('_');
                rest = &candidate[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_namespace() {
        assert_eq!(strip_namespace("c:plotArea"), "plotArea");
        assert_eq!(
            strip_namespace("{http://schemas.openxmlformats.org/spreadsheetml/2006/main}sheetData"),
            "sheetData"
        );
        assert_eq!(strip_namespace("sheetData"), "sheetData");
        assert_eq!(strip_namespace(""), "");
    }

    #[test]
    fn test_parse_tree() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart">
  <c:chart><c:plotArea><c:barChart/></c:plotArea></c:chart>
</c:chartSpace>"#;
        let root = XmlElement::parse(xml).unwrap();

        assert_eq!(root.name, "c:chartSpace");
        assert_eq!(root.local_name(), "chartSpace");
        assert!(root.declares_namespace(ns::CHART));
        assert!(!root.declares_namespace(ns::SPREADSHEETML));
        assert!(root.path(&["chart", "plotArea", "barChart"]).is_some());
        assert!(root.descendant("barChart").is_some());
        assert!(root.descendant("pieChart").is_none());
    }

    #[test]
    fn test_parse_attributes_and_text() {
        let xml = br#"<row r="7"><c r="A7" t="s"><v>3</v></c><c r="B7"><f>SUM(A1:A2)</f><v>5</v></c></row>"#;
        let row = XmlElement::parse(xml).unwrap();

        assert_eq!(row.attr("r"), Some("7"));
        let cells: Vec<_> = row.children_named("c").collect();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].attr("t"), Some("s"));
        assert_eq!(cells[1].attr("t"), None);
        assert_eq!(cells[1].child("f").unwrap().text, "SUM(A1:A2)");
        assert_eq!(cells[1].child("v").unwrap().text, "5");
    }

    #[test]
    fn test_parse_keeps_whitespace_and_unescapes() {
        let xml = br#"<si><t xml:space="preserve">  a &amp; b </t></si>"#;
        let si = XmlElement::parse(xml).unwrap();
        assert_eq!(si.child("t").unwrap().text, "  a & b ");
        assert_eq!(si.child("t").unwrap().attr("xml:space"), Some("preserve"));
    }

    #[test]
    fn test_descendants_in_document_order() {
        let xml = br#"<a:p xmlns:a="x">
  <a:r><a:rPr b="1"/><a:t>Sales </a:t></a:r>
  <a:r><a:t>2024</a:t></a:r>
</a:p>"#;
        let p = XmlElement::parse(xml).unwrap();
        let names: Vec<&str> = p.descendants().iter().map(|e| e.local_name()).collect();
        assert_eq!(names, vec!["r", "rPr", "t", "r", "t"]);

        let text: String = p
            .descendants()
            .into_iter()
            .filter(|e| e.is("t"))
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(text, "Sales 2024");
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(matches!(
            XmlElement::parse(b"<?xml version=\"1.0\"?>"),
            Err(XlsxError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_malformed_document() {
        assert!(XmlElement::parse(b"<a><b></a>").is_err());
    }

    #[test]
    fn test_decode_excel_escapes_carriage_return() {
        assert_eq!(decode_excel_escapes("hello_x000d_world"), "hello\rworld");
    }

    #[test]
    fn test_decode_excel_escapes_multiple() {
        assert_eq!(
            decode_excel_escapes("line1_x000d__x000a_line2"),
            "line1\r\nline2"
        );
    }

    #[test]
    fn test_decode_excel_escapes_underscore() {
        assert_eq!(decode_excel_escapes("under_x005f_score"), "under_score");
        assert_eq!(decode_excel_escapes("snake_case_name"), "snake_case_name");
    }

    #[test]
    fn test_decode_excel_escapes_partial_sequence() {
        // Incomplete sequences should be left as-is
        assert_eq!(decode_excel_escapes("_x00"), "_x00");
        assert_eq!(decode_excel_escapes("_x000d"), "_x000d");
        assert_eq!(decode_excel_escapes("_xZZZZ_"), "_xZZZZ_");
    }

    #[test]
    fn test_decode_excel_escapes_uppercase() {
        assert_eq!(decode_excel_escapes("_x000D_"), "\r");
        assert_eq!(decode_excel_escapes("tab_x0009_"), "tab\t");
    }
}
