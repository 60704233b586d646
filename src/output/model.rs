use serde::Serialize;

use crate::classify::ClassBreak;
use crate::join::JoinReport;
use crate::projection::{ConicEqualArea, PathGenerator, SvgPathGenerator};
use crate::session::Session;
use crate::view::{ChartModel, MapUnit, compose_background, compose_chart, compose_map};

/// Map frame with its composed units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapModel {
    pub width: f64,
    pub height: f64,
    /// Context layer paths, drawn first.
    pub background: Vec<String>,
    pub units: Vec<MapUnit>,
}

/// Everything a formatter needs, derived from one session snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub title: String,
    pub active_attribute: String,
    pub attributes: Vec<String>,
    pub thresholds: Vec<f64>,
    pub legend: Vec<ClassBreak>,
    pub fallback: String,
    pub map: MapModel,
    pub chart: ChartModel,
    pub join: JoinReport,
}

impl RenderModel {
    /// Compose both views with an explicit path generator.
    #[must_use]
    pub fn build(session: &Session, paths: &dyn PathGenerator) -> Self {
        let settings = session.settings();
        let classifier = session.classifier();
        let chart = compose_chart(session);

        Self {
            title: chart.title.clone(),
            active_attribute: session.active().name().to_string(),
            attributes: session.attributes().iter().map(str::to_string).collect(),
            thresholds: classifier.thresholds().to_vec(),
            legend: classifier.breaks(),
            fallback: classifier.palette().fallback().to_string(),
            map: MapModel {
                width: settings.map.width,
                height: settings.map.height,
                background: compose_background(session, paths),
                units: compose_map(session, paths),
            },
            chart,
            join: session.report().clone(),
        }
    }

    /// Compose both views through the configured conic equal-area projection.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let projection = ConicEqualArea::from_config(&session.settings().map);
        let paths =
            SvgPathGenerator::new(projection).with_frame_width(session.settings().map.width);
        Self::build(session, &paths)
    }
}
