//! Chart parts (xl/charts/chart<N>.xml)
//!
//! Best-effort metadata: plot type, title and series references with their
//! cached numbers. Unsupported plot types still yield a [`Chart`] with no kind.

use std::io::{Read, Seek};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use sheetlens_chart::{CachedValue, Chart, ChartKind, DataSeries, SeriesRef};
use sheetlens_core::MAX_ROWS;

use crate::error::XlsxResult;
use crate::package::Package;
use crate::xml::{check_namespace, ns, XmlElement};

static CHART_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^xl/charts/chart(\d*).*\.xml$").expect("valid chart part regex"));

/// Chart part names, ordered by their number (`chart2.xml` before `chart10.xml`)
pub fn chart_parts<R: Read + Seek>(package: &Package<R>) -> Vec<String> {
    let mut parts: Vec<(u32, &str)> = package
        .entry_names()
        .filter_map(|name| {
            let caps = CHART_PART.captures(name)?;
            Some((caps[1].parse().unwrap_or(u32::MAX), name))
        })
        .collect();
    parts.sort();
    parts.into_iter().map(|(_, name)| name.to_string()).collect()
}

/// Read the chart at 1-based `index` in [`chart_parts`] order
pub fn read_chart<R: Read + Seek>(
    package: &mut Package<R>,
    index: usize,
) -> XlsxResult<Option<Chart>> {
    let parts = chart_parts(package);
    let Some(part) = index.checked_sub(1).and_then(|i| parts.get(i)) else {
        debug!("chart {} not found ({} chart parts)", index, parts.len());
        return Ok(None);
    };

    let root = package.parse_required_part(part)?;
    Ok(Some(parse_chart(part, &root)))
}

/// Extract chart metadata from a parsed `chartSpace` element
pub fn parse_chart(part: &str, root: &XmlElement) -> Chart {
    check_namespace(root, ns::CHART, part);

    let plot_area = root.path(&["chart", "plotArea"]);
    let plot = plot_area.and_then(|area| {
        ChartKind::ALL
            .into_iter()
            .find_map(|kind| area.child(kind.element_name()).map(|el| (kind, el)))
    });

    let mut chart = Chart::new(part, plot.map(|(kind, _)| kind));
    chart.title = root.path(&["chart", "title"]).and_then(parse_title);

    match plot {
        Some((_, el)) => {
            for ser in el.children_named("ser") {
                chart.add_series(parse_series(ser));
            }
        }
        None => debug!("{}: no supported plot type", part),
    }

    chart
}

fn parse_title(title: &XmlElement) -> Option<String> {
    let tx = title.child("tx")?;

    let text: String = match tx.child("rich") {
        Some(rich) => rich
            .descendants()
            .into_iter()
            .filter(|el| el.is("t"))
            .map(|el| el.text.as_str())
            .collect(),
        None => tx
            .path(&["strRef", "strCache", "pt", "v"])
            .map(|v| v.text.clone())
            .unwrap_or_default(),
    };

    Some(text).filter(|t| !t.trim().is_empty())
}

fn parse_series(ser: &XmlElement) -> DataSeries {
    DataSeries {
        name: ser.child("tx").and_then(parse_ref),
        categories: ser.child("cat").or_else(|| ser.child("xVal")).and_then(parse_ref),
        values: ser.child("val").or_else(|| ser.child("yVal")).and_then(parse_ref),
    }
}

fn parse_ref(container: &XmlElement) -> Option<SeriesRef> {
    let reference = container
        .child("numRef")
        .or_else(|| container.child("strRef"))?;

    let formula = reference.child("f").map(|f| f.text.as_str()).unwrap_or_default();
    let mut series_ref = SeriesRef::from_formula(formula);
    if let Some(cache) = reference.child("numCache") {
        series_ref.cache = parse_cache(cache);
    }
    Some(series_ref)
}

/// Cached points placed by `idx`; slots without a point stay null
fn parse_cache(cache: &XmlElement) -> Vec<CachedValue> {
    let points: Vec<(usize, CachedValue)> = cache
        .children_named("pt")
        .enumerate()
        .map(|(position, pt)| {
            let idx = pt
                .attr("idx")
                .and_then(|v| v.parse().ok())
                .unwrap_or(position);
            let value = pt.child("v").map(|v| v.text.as_str()).unwrap_or_default();
            (idx, CachedValue::parse(value))
        })
        .collect();

    let declared = cache
        .child("ptCount")
        .and_then(|c| c.attr("val"))
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    let highest = points
        .iter()
        .map(|(idx, _)| idx.saturating_add(1))
        .max()
        .unwrap_or(0);
    let len = declared.max(highest).min(MAX_ROWS as usize);

    let mut values = vec![CachedValue::Null; len];
    for (idx, value) in points {
        if let Some(slot) = values.get_mut(idx) {
            *slot = value;
        }
    }
    values
}
