//! Workbook fixtures shared by the integration tests

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::PathBuf;

use sheetlens::XlsxArchive;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const SPREADSHEETML: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const RELATIONSHIPS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const CHART: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
const DRAWINGML: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

/// Entries of the sample workbook, in archive order
pub const SAMPLE_ENTRIES: [&str; 9] = [
    "[Content_Types].xml",
    "_rels/.rels",
    "xl/styles.xml",
    "xl/workbook.xml",
    "docProps/app.xml",
    "docProps/core.xml",
    "xl/theme/theme1.xml",
    "xl/_rels/workbook.xml.rels",
    "xl/worksheets/sheet1.xml",
];

/// Zip the given parts in order
pub fn build(parts: &[(&str, String)]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut buf));
        let options = SimpleFileOptions::default();
        for (name, content) in parts {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }
    buf
}

fn workbook(names: &[&str]) -> String {
    let sheets: String = names
        .iter()
        .enumerate()
        .map(|(i, name)| format!(r#"<sheet name="{name}" sheetId="{id}" r:id="rId{id}"/>"#, id = i + 1))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="{SPREADSHEETML}" xmlns:r="{RELATIONSHIPS}">
  <bookViews><workbookView activeTab="0"/></bookViews>
  <sheets>{sheets}</sheets>
</workbook>"#
    )
}

fn worksheet(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="{SPREADSHEETML}" xmlns:r="{RELATIONSHIPS}">{body}</worksheet>"#
    )
}

/// One sheet `Test1`: A1 = 8, H1 = 1000, B2 = 57, C2 = B2*2, B3 = 19,
/// A7 = "SampleText"; dimension A1:I9; merges H1:I1 and A7:G9.
pub fn sample_xlsx() -> Vec<u8> {
    let sheet = worksheet(
        r#"
  <dimension ref="A1:I9"/>
  <sheetViews><sheetView workbookViewId="0"/></sheetViews>
  <sheetData>
    <row r="1" spans="1:9"><c r="A1"><v>8</v></c><c r="H1"><v>1000</v></c></row>
    <row r="2" spans="1:9"><c r="B2"><v>57</v></c><c r="C2"><f>B2*2</f><v>114</v></c></row>
    <row r="3" spans="1:9"><c r="B3"><v>19</v></c></row>
    <row r="7" spans="1:9"><c r="A7" t="inlineStr"><is><t>SampleText</t></is></c></row>
  </sheetData>
  <mergeCells count="2"><mergeCell ref="H1:I1"/><mergeCell ref="A7:G9"/></mergeCells>"#,
    );

    let styles = format!(
        r#"<styleSheet xmlns="{SPREADSHEETML}">
  <fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts>
  <fills count="1"><fill><patternFill patternType="none"/></fill></fills>
  <borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>
  <cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs>
</styleSheet>"#
    );

    build(&[
        ("[Content_Types].xml", r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#.to_string()),
        ("_rels/.rels", "<Relationships/>".to_string()),
        ("xl/styles.xml", styles),
        ("xl/workbook.xml", workbook(&["Test1"])),
        ("docProps/app.xml", "<Properties/>".to_string()),
        ("docProps/core.xml", "<coreProperties/>".to_string()),
        ("xl/theme/theme1.xml", "<theme/>".to_string()),
        ("xl/_rels/workbook.xml.rels", "<Relationships/>".to_string()),
        ("xl/worksheets/sheet1.xml", sheet),
    ])
}

/// Two sheets `Data` and `Summary` with shared strings, styles and a bar chart.
///
/// Data: A1 = "Header" (shared 0), B1 = "SampleText" (shared 1, rich, style 1),
/// A2 = 12.5 (style 1), B2 = 0.25 (style 2), no dimension.
/// Summary: empty sheetData.
pub fn styled_xlsx() -> Vec<u8> {
    let shared = format!(
        r#"<sst xmlns="{SPREADSHEETML}" count="2" uniqueCount="2">
  <si><t>Header</t></si>
  <si>
    <r><rPr><b/><sz val="11"/><color theme="1"/><rFont val="Calibri"/><family val="2"/><scheme val="minor"/></rPr><t>Sample</t></r>
    <r><rPr><sz val="9"/><color rgb="FFFF0000"/><rFont val="Arial"/><vertAlign val="superscript"/></rPr><t>Text</t></r>
  </si>
</sst>"#
    );

    let styles = format!(
        r#"<styleSheet xmlns="{SPREADSHEETML}">
  <numFmts count="1"><numFmt numFmtId="164" formatCode="0.000&quot;kg&quot;"/></numFmts>
  <fonts count="2">
    <font><sz val="11"/><name val="Calibri"/></font>
    <font><b/><sz val="14"/><color rgb="FFFF0000"/><name val="Arial"/><family val="2"/></font>
  </fonts>
  <fills count="3">
    <fill><patternFill patternType="none"/></fill>
    <fill><patternFill patternType="gray125"/></fill>
    <fill><patternFill patternType="solid"><fgColor rgb="FFFFFF00"/><bgColor indexed="64"/></patternFill></fill>
  </fills>
  <borders count="2">
    <border><left/><right/><top/><bottom/><diagonal/></border>
    <border><left style="thin"/><right style="thin"/><top style="thin"/><bottom style="thin"/><diagonal/></border>
  </borders>
  <cellXfs count="3">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>
    <xf numFmtId="164" fontId="2" fillId="2" borderId="1" xfId="0" applyNumberFormat="1" applyFont="1" applyFill="1" applyBorder="1"/>
    <xf numFmtId="10" fontId="1" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/>
  </cellXfs>
</styleSheet>"#
    );

    let data = worksheet(
        r#"<sheetData>
    <row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" s="1" t="s"><v>1</v></c></row>
    <row r="2"><c r="A2" s="1"><v>12.5</v></c><c r="B2" s="2"><v>0.25</v></c></row>
  </sheetData>"#,
    );

    let chart = format!(
        r#"<c:chartSpace xmlns:c="{CHART}" xmlns:a="{DRAWINGML}">
  <c:chart>
    <c:title><c:tx><c:rich><a:p><a:r><a:t>Weights</a:t></a:r></a:p></c:rich></c:tx></c:title>
    <c:plotArea>
      <c:barChart>
        <c:barDir val="col"/>
        <c:ser>
          <c:tx><c:strRef><c:f>Data!$A$1</c:f></c:strRef></c:tx>
          <c:cat><c:strRef><c:f>Data!$A$1:$B$1</c:f></c:strRef></c:cat>
          <c:val><c:numRef><c:f>Data!$A$2:$B$2</c:f><c:numCache><c:ptCount val="2"/><c:pt idx="0"><c:v>12.5</c:v></c:pt><c:pt idx="1"><c:v>0.25</c:v></c:pt></c:numCache></c:numRef></c:val>
        </c:ser>
      </c:barChart>
    </c:plotArea>
  </c:chart>
</c:chartSpace>"#
    );

    build(&[
        ("[Content_Types].xml", "<Types/>".to_string()),
        ("xl/workbook.xml", workbook(&["Data", "Summary"])),
        ("xl/styles.xml", styles),
        ("xl/sharedStrings.xml", shared),
        ("xl/worksheets/sheet1.xml", data),
        ("xl/worksheets/sheet2.xml", worksheet("<sheetData/>")),
        ("xl/charts/chart1.xml", chart),
    ])
}

pub fn open(bytes: Vec<u8>) -> XlsxArchive<Cursor<Vec<u8>>> {
    XlsxArchive::from_reader(Cursor::new(bytes)).unwrap()
}

/// Write `bytes` to `file_name` inside a fresh temporary directory
pub fn write_temp(bytes: &[u8], file_name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(file_name);
    std::fs::write(&path, bytes).unwrap();
    (dir, path)
}
