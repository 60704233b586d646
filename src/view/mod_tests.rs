use indexmap::IndexMap;

use super::*;
use crate::classify::{ColorClass, DEFAULT_FALLBACK, DEFAULT_PALETTE};
use crate::config::ChartConfig;
use crate::data::{GeoFeature, Geometry, TabularRecord};
use crate::loader::{Inputs, TabularData};
use crate::projection::PathGenerator;
use crate::session::{Session, SessionSettings};

/// Describes geometries by kind instead of drawing them.
struct KindPaths;

impl PathGenerator for KindPaths {
    fn path(&self, geometry: &Geometry) -> Option<String> {
        match geometry {
            Geometry::Polygon { .. } => Some("polygon".to_string()),
            _ => None,
        }
    }
}

fn polygon() -> Option<Geometry> {
    Some(Geometry::Polygon {
        coordinates: Vec::new(),
    })
}

fn record(row: usize, code: &str, name: &str, migrants: &str) -> TabularRecord {
    TabularRecord::from_pairs(
        row,
        [
            ("CountryCode", code),
            ("country", name),
            ("migrants", migrants),
            ("other", "7"),
        ],
    )
}

fn feature(code: &str, name: &str) -> GeoFeature {
    GeoFeature::new(IndexMap::new(), polygon())
        .with_property("CC", code)
        .with_property("sovereignt", name)
}

fn session_with(records: Vec<TabularRecord>, features: Vec<GeoFeature>) -> Session {
    let inputs = Inputs {
        tabular: TabularData {
            headers: ["CountryCode", "country", "migrants", "other"]
                .map(str::to_string)
                .to_vec(),
            records,
        },
        features,
        background: vec![GeoFeature::new(IndexMap::new(), polygon())],
    };
    let settings = SessionSettings {
        candidates: vec!["migrants".to_string(), "other".to_string()],
        chart: ChartConfig {
            width: 100.0,
            height: 200.0,
            domain_max: 1000.0,
            ..ChartConfig::default()
        },
        ..SessionSettings::default()
    };
    Session::build(inputs, settings).unwrap()
}

fn session() -> Session {
    session_with(
        vec![
            record(1, "RU", "Russia", "500"),
            record(2, "UA", "Ukraine", "100"),
            record(3, "BY", "Belarus", ""),
            record(4, "PL", "Poland", "2000"),
        ],
        vec![feature("RU", "Russia"), feature("DE", "Germany")],
    )
}

mod css_tests {
    use super::*;

    #[test]
    fn spaces_and_punctuation_become_underscores() {
        assert_eq!(css_class("Bosnia and Herz."), "Bosnia_and_Herz_");
        assert_eq!(css_class("Côte d'Ivoire"), "C_te_d_Ivoire");
    }

    #[test]
    fn safe_names_are_unchanged() {
        assert_eq!(css_class("Czech-Republic_1"), "Czech-Republic_1");
    }

    #[test]
    fn leading_digit_is_prefixed() {
        assert_eq!(css_class("1st"), "_1st");
    }

    #[test]
    fn empty_name_is_unknown() {
        assert_eq!(css_class(""), "unknown");
    }
}

mod map_tests {
    use super::*;

    #[test]
    fn one_unit_per_feature_in_order() {
        let units = compose_map(&session(), &KindPaths);
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].key.as_deref(), Some("RU"));
        assert_eq!(units[1].key.as_deref(), Some("DE"));
    }

    #[test]
    fn matched_unit_is_colored_from_classifier() {
        let session = session();
        let units = compose_map(&session, &KindPaths);
        assert_eq!(units[0].value, Some(500.0));
        assert_eq!(units[0].class_name, "regions Russia");
        assert_eq!(units[0].path.as_deref(), Some("polygon"));
        assert_eq!(units[0].fill, session.classifier().color_of(Some(500.0)));
        assert!(DEFAULT_PALETTE.contains(&units[0].fill.as_str()));
    }

    #[test]
    fn unmatched_unit_uses_fallback() {
        let units = compose_map(&session(), &KindPaths);
        assert_eq!(units[1].value, None);
        assert_eq!(units[1].color_class, ColorClass::Fallback);
        assert_eq!(units[1].fill, DEFAULT_FALLBACK);
    }

    #[test]
    fn nameless_feature_falls_back_to_key_then_unknown() {
        let session = session_with(
            vec![record(1, "RU", "Russia", "1")],
            vec![
                GeoFeature::new(IndexMap::new(), None).with_property("CC", "XK"),
                GeoFeature::default(),
            ],
        );
        let units = compose_map(&session, &KindPaths);
        assert_eq!(units[0].class_name, "regions XK");
        assert_eq!(units[1].class_name, "regions unknown");
        assert_eq!(units[1].path, None);
    }

    #[test]
    fn background_yields_drawable_paths() {
        assert_eq!(compose_background(&session(), &KindPaths), ["polygon"]);
    }
}

mod chart_tests {
    use super::*;

    #[test]
    fn bars_sorted_ascending_with_absent_last() {
        let chart = compose_chart(&session());
        let names: Vec<_> = chart.bars.iter().map(|b| b.name.as_deref().unwrap()).collect();
        assert_eq!(names, ["Ukraine", "Russia", "Poland", "Belarus"]);
    }

    #[test]
    fn bar_geometry_follows_frame() {
        let chart = compose_chart(&session());
        let ukraine = &chart.bars[0];
        // 100 / 1000 of a 200 high frame.
        assert!((ukraine.height - 20.0).abs() < 1e-9);
        assert!((ukraine.y - 180.0).abs() < 1e-9);
        assert!((ukraine.x - 0.0).abs() < 1e-9);
        assert!((ukraine.width - 24.0).abs() < 1e-9);
        assert!((ukraine.label_x - 12.0).abs() < 1e-9);
        assert!((ukraine.label_y - 195.0).abs() < 1e-9);

        let russia = &chart.bars[1];
        assert!((russia.x - 25.0).abs() < 1e-9);
        assert!((russia.label_x - 37.0).abs() < 1e-9);
    }

    #[test]
    fn values_beyond_domain_are_clamped() {
        let chart = compose_chart(&session());
        let poland = &chart.bars[2];
        assert!((poland.height - 200.0).abs() < 1e-9);
        assert!(poland.y.abs() < 1e-9);
        assert!((poland.label_y - 15.0).abs() < 1e-9);
    }

    #[test]
    fn absent_value_has_zero_height_and_fallback_fill() {
        let chart = compose_chart(&session());
        let belarus = &chart.bars[3];
        assert!(belarus.height.abs() < 1e-9);
        assert_eq!(belarus.label, "");
        assert_eq!(belarus.fill, DEFAULT_FALLBACK);
    }

    #[test]
    fn labels_show_raw_text() {
        let session = session_with(vec![record(1, "RU", "Russia", " 1e3 ")], Vec::new());
        let chart = compose_chart(&session);
        assert_eq!(chart.bars[0].label, " 1e3 ");
        assert_eq!(chart.bars[0].value, Some(1000.0));
    }

    #[test]
    fn bar_class_uses_css_safe_name() {
        let session = session_with(vec![record(1, "MK", "North Macedonia", "5")], Vec::new());
        assert_eq!(compose_chart(&session).bars[0].class_name, "bars North_Macedonia");
    }

    #[test]
    fn title_names_active_attribute() {
        let chart = compose_chart(&session());
        assert_eq!(chart.title, "Number of People from migrants in each country");
        assert!((chart.title_x - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn chart_title_substitutes_placeholder() {
        let session = session();
        assert_eq!(chart_title("{attribute}!", session.active()), "migrants!");
        assert_eq!(chart_title("static", session.active()), "static");
    }

    #[test]
    fn empty_records_give_empty_chart() {
        let chart = compose_chart(&session_with(Vec::new(), Vec::new()));
        assert!(chart.bars.is_empty());
    }
}

mod coordination_tests {
    use super::*;

    #[test]
    fn both_views_follow_attribute_change() {
        let mut session = session();
        session.select_attribute("other").unwrap();

        let units = compose_map(&session, &KindPaths);
        let chart = compose_chart(&session);

        assert_eq!(units[0].value, Some(7.0));
        assert!(chart.bars.iter().all(|b| b.value == Some(7.0)));
        assert!(chart.title.contains("other"));
        // Same classifier behind both views.
        assert_eq!(units[0].fill, chart.bars[0].fill);
    }

    #[test]
    fn same_value_gets_same_fill_in_both_views() {
        let session = session();
        let units = compose_map(&session, &KindPaths);
        let chart = compose_chart(&session);
        let russia_bar = chart
            .bars
            .iter()
            .find(|b| b.key.as_deref() == Some("RU"))
            .unwrap();
        assert_eq!(units[0].fill, russia_bar.fill);
        assert_eq!(units[0].color_class, russia_bar.color_class);
    }
}
