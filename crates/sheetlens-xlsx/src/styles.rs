//! XLSX styles (styles.xml) lookup tables
//!
//! The stylesheet is parsed once into index-addressed tables. A cell's `s`
//! attribute selects a `cellXfs` entry, whose ids in turn select a number
//! format, font, fill and border.

use std::collections::HashMap;
use std::io::{Read, Seek};

use log::debug;
use sheetlens_core::style::{Border, ColorRef, Fill, Font, Format, NumFmt};

use crate::error::XlsxResult;
use crate::package::{parts, Package};
use crate::xml::{check_namespace, ns, XmlElement};

/// One `cellXfs/xf` record, mapped attribute by attribute
///
/// Attributes that are absent or not numeric are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellXf {
    pub num_fmt_id: Option<u32>,
    pub font_id: Option<u32>,
    pub fill_id: Option<u32>,
    pub border_id: Option<u32>,
    pub xf_id: Option<u32>,
    pub apply_font: Option<bool>,
    pub apply_alignment: Option<bool>,
    pub apply_border: Option<bool>,
    pub apply_fill: Option<bool>,
    pub apply_number_format: Option<bool>,
    pub apply_protection: Option<bool>,
}

impl CellXf {
    fn from_element(el: &XmlElement) -> Self {
        Self {
            num_fmt_id: parse_id(el, "numFmtId"),
            font_id: parse_id(el, "fontId"),
            fill_id: parse_id(el, "fillId"),
            border_id: parse_id(el, "borderId"),
            xf_id: parse_id(el, "xfId"),
            apply_font: parse_flag(el, "applyFont"),
            apply_alignment: parse_flag(el, "applyAlignment"),
            apply_border: parse_flag(el, "applyBorder"),
            apply_fill: parse_flag(el, "applyFill"),
            apply_number_format: parse_flag(el, "applyNumberFormat"),
            apply_protection: parse_flag(el, "applyProtection"),
        }
    }
}

fn parse_id(el: &XmlElement, key: &str) -> Option<u32> {
    el.attr(key)?.trim().parse().ok()
}

fn parse_flag(el: &XmlElement, key: &str) -> Option<bool> {
    el.attr(key).map(|v| matches!(v.trim(), "1" | "true"))
}

/// Style tables parsed from `xl/styles.xml`
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    num_fmts: HashMap<u32, NumFmt>,
    fonts: Vec<Font>,
    fills: Vec<Fill>,
    borders: Vec<Border>,
    cell_xfs: Vec<CellXf>,
}

impl StyleTable {
    /// Read the package stylesheet; a package without one gets empty tables
    pub fn load<R: Read + Seek>(package: &mut Package<R>) -> XlsxResult<Self> {
        match package.parse_part(parts::STYLES)? {
            Some(root) => {
                check_namespace(&root, ns::SPREADSHEETML, parts::STYLES);
                Ok(Self::from_element(&root))
            }
            None => {
                debug!("{} not present, using empty style tables", parts::STYLES);
                Ok(Self::default())
            }
        }
    }

    /// Parse a stylesheet document
    pub fn from_xml(bytes: &[u8]) -> XlsxResult<Self> {
        Ok(Self::from_element(&XmlElement::parse(bytes)?))
    }

    /// Build the tables from a parsed `styleSheet` element
    pub fn from_element(root: &XmlElement) -> Self {
        let items = |container: &str, item: &'static str| {
            root.child(container)
                .into_iter()
                .flat_map(move |c| c.children_named(item))
        };

        let mut num_fmts = HashMap::new();
        for el in items("numFmts", "numFmt") {
            let raw_id = el.attr("numFmtId").unwrap_or_default();
            match raw_id.trim().parse::<u32>() {
                Ok(id) => {
                    let code = el.attr("formatCode").unwrap_or_default();
                    num_fmts.insert(id, NumFmt::new(raw_id, code));
                }
                Err(_) => debug!("skipping numFmt with id {:?}", raw_id),
            }
        }

        Self {
            num_fmts,
            fonts: items("fonts", "font").map(parse_font).collect(),
            fills: items("fills", "fill").map(parse_fill).collect(),
            borders: items("borders", "border").map(parse_border).collect(),
            cell_xfs: items("cellXfs", "xf").map(CellXf::from_element).collect(),
        }
    }

    pub fn cell_xf(&self, index: usize) -> Option<&CellXf> {
        self.cell_xfs.get(index)
    }

    pub fn font(&self, index: usize) -> Option<&Font> {
        self.fonts.get(index)
    }

    pub fn fill(&self, index: usize) -> Option<&Fill> {
        self.fills.get(index)
    }

    pub fn border(&self, index: usize) -> Option<&Border> {
        self.borders.get(index)
    }

    /// Number format declared in `numFmts` under `id`
    pub fn num_fmt(&self, id: u32) -> Option<&NumFmt> {
        self.num_fmts.get(&id)
    }

    pub fn cell_xf_count(&self) -> usize {
        self.cell_xfs.len()
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Resolve a cell style index into its full format.
    ///
    /// The font is looked up at `fontId - 1`. Any index that does not resolve
    /// yields the default for that part.
    pub fn resolve(&self, cell_xf_index: usize) -> Format {
        let xf = match self.cell_xf(cell_xf_index) {
            Some(xf) => xf,
            None => {
                debug!(
                    "cellXfs index {} out of range ({} entries)",
                    cell_xf_index,
                    self.cell_xfs.len()
                );
                return Format::default();
            }
        };

        let num_fmt = match xf.num_fmt_id {
            Some(id) => self.num_fmt(id).cloned().unwrap_or_else(|| {
                debug!("numFmtId {} not defined", id);
                NumFmt::default()
            }),
            None => NumFmt::default(),
        };

        Format {
            num_fmt,
            font: lookup(
                &self.fonts,
                xf.font_id.map(|id| (id as usize).checked_sub(1)),
                "font",
            ),
            fill: lookup(&self.fills, xf.fill_id.map(|id| Some(id as usize)), "fill"),
            border: lookup(
                &self.borders,
                xf.border_id.map(|id| Some(id as usize)),
                "border",
            ),
        }
    }
}

/// Table lookup that falls back to the default entry.
///
/// `index` is `None` when the xf does not reference the table at all and
/// `Some(None)` when the reference maps below the start of the table.
fn lookup<T: Clone + Default>(table: &[T], index: Option<Option<usize>>, what: &str) -> T {
    match index {
        None => T::default(),
        Some(Some(i)) => table.get(i).cloned().unwrap_or_else(|| {
            debug!("{} index {} out of range ({} entries)", what, i, table.len());
            T::default()
        }),
        Some(None) => {
            debug!("{} reference maps before the first entry", what);
            T::default()
        }
    }
}

/// Value of a font property element: `val`, else `theme`, else `rgb`, else `indexed`
fn property_value(el: &XmlElement) -> Option<&str> {
    ["val", "theme", "rgb", "indexed"]
        .into_iter()
        .find_map(|key| el.attr_nonempty(key))
}

/// Flag elements such as `<b/>` are on unless switched off with `val="0"`
fn flag_on(el: &XmlElement) -> bool {
    !matches!(el.attr("val").map(str::trim), Some("0") | Some("false"))
}

fn parse_font(el: &XmlElement) -> Font {
    let mut font = Font::default();

    for prop in &el.children {
        let value = || property_value(prop).unwrap_or_default().to_string();
        match prop.local_name() {
            "sz" => font.sz = value(),
            "name" => font.name = value(),
            "family" => font.family = value(),
            "charset" => font.charset = value(),
            "scheme" => font.scheme = value(),
            "color" => font.color = value(),
            "condense" => font.condense = value(),
            "extend" => font.extend = value(),
            "vertAlign" => font.vert_align = value(),
            "b" => font.b = flag_on(prop),
            "i" => font.i = flag_on(prop),
            "u" => font.u = prop.attr("val") != Some("none"),
            "strike" => font.strike = flag_on(prop),
            "outline" => font.outline = flag_on(prop),
            "shadow" => font.shadow = flag_on(prop),
            _ => {}
        }
    }

    font
}

fn parse_color_ref(el: &XmlElement) -> ColorRef {
    let get = |key: &str| el.attr(key).unwrap_or_default().to_string();
    ColorRef {
        theme: get("theme"),
        rgb: get("rgb"),
        tint: get("tint"),
        indexed: get("indexed"),
    }
}

fn parse_fill(el: &XmlElement) -> Fill {
    let Some(pattern) = el.child("patternFill") else {
        return Fill::default();
    };

    Fill {
        pattern_type: pattern.attr("patternType").unwrap_or_default().to_string(),
        fg_color: pattern.child("fgColor").map(parse_color_ref),
        bg_color: pattern.child("bgColor").map(parse_color_ref),
    }
}

fn parse_border(el: &XmlElement) -> Border {
    let edge = |name: &str| {
        el.child(name)
            .and_then(|e| e.attr_nonempty("style"))
            .is_some()
    };

    Border {
        left: edge("left"),
        right: edge("right"),
        top: edge("top"),
        bottom: edge("bottom"),
        diagonal: edge("diagonal"),
    }
}
