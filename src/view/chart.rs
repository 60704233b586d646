use serde::Serialize;

use crate::attribute::ActiveAttribute;
use crate::classify::ColorClass;
use crate::config::TITLE_PLACEHOLDER;
use crate::data::TabularRecord;
use crate::session::Session;

use super::css::css_class;

/// Title position inside the chart frame.
const TITLE_X: f64 = 20.0;
const TITLE_Y: f64 = 40.0;
/// Labels sit this far below the top of their bar.
const LABEL_OFFSET: f64 = 15.0;

/// One bar of the coordinated chart plus its value label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSpec {
    pub key: Option<String>,
    pub name: Option<String>,
    /// `"bars <name>"`; the label uses `"numbers <name>"`.
    pub class_name: String,
    pub value: Option<f64>,
    /// Raw cell text, shown unparsed.
    pub label: String,
    pub color_class: ColorClass,
    pub fill: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    /// Proportional to the value over `domain_max`, clamped to the frame: a
    /// value above `domain_max` draws a full-height bar whose label stays
    /// inside the chart, and a negative value draws no bar.
    pub height: f64,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartModel {
    pub title: String,
    pub title_x: f64,
    pub title_y: f64,
    pub width: f64,
    pub height: f64,
    pub domain_max: f64,
    pub bars: Vec<BarSpec>,
}

/// Fill `template`'s `{attribute}` placeholder with the active attribute.
#[must_use]
pub fn chart_title(template: &str, active: &ActiveAttribute) -> String {
    template.replace(TITLE_PLACEHOLDER, active.name())
}

/// Records ordered by ascending value; absent values last, ties in input order.
fn sorted_records<'a>(records: &'a [TabularRecord], attribute: &str) -> Vec<&'a TabularRecord> {
    let mut sorted: Vec<&TabularRecord> = records.iter().collect();
    sorted.sort_by(|a, b| match (a.value(attribute), b.value(attribute)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    sorted
}

/// Compose the bar chart for the session's active attribute.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compose_chart(session: &Session) -> ChartModel {
    let chart = &session.settings().chart;
    let fields = &session.settings().fields;
    let attribute = session.active().name();
    let classifier = session.classifier();

    let records = sorted_records(session.records(), attribute);
    let fraction = if records.is_empty() {
        0.0
    } else {
        chart.width / records.len() as f64
    };

    let bars = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let value = record.value(attribute);
            let height = value.map_or(0.0, |v| (v / chart.domain_max).clamp(0.0, 1.0) * chart.height);
            let x = i as f64 * fraction;
            let name = record.raw(&fields.name_field).map(str::to_string);
            BarSpec {
                key: record.key(&fields.key_field).map(str::to_string),
                class_name: format!("bars {}", css_class(name.as_deref().unwrap_or_default())),
                name,
                value,
                label: record.raw(attribute).unwrap_or_default().to_string(),
                color_class: classifier.class_of(value),
                fill: classifier.color_of(value).to_string(),
                x,
                y: chart.height - height,
                width: fraction - 1.0,
                height,
                label_x: x + (fraction - 1.0) / 2.0,
                label_y: chart.height - height + LABEL_OFFSET,
            }
        })
        .collect();

    ChartModel {
        title: chart_title(&chart.title_template, session.active()),
        title_x: TITLE_X,
        title_y: TITLE_Y,
        width: chart.width,
        height: chart.height,
        domain_max: chart.domain_max,
        bars,
    }
}
