use super::*;
use crate::join::DuplicateKeyPolicy;

#[test]
fn defaults_match_bundled_dataset() {
    let config = Config::default();
    assert_eq!(config.data.key_field, "CountryCode");
    assert_eq!(config.data.feature_key, "CC");
    assert_eq!(config.attributes.candidates.len(), 5);
    assert_eq!(config.attributes.candidates[0], "Russian Federation");
    assert_eq!(config.classification.fallback, "#CCC");
    assert_eq!(config.join.duplicate_keys, DuplicateKeyPolicy::Reject);
    assert!((config.map.scale - 650.0).abs() < f64::EPSILON);
    assert!((config.chart.domain_max - 100_000.0).abs() < f64::EPSILON);
    assert!(config.chart.title_template.contains(TITLE_PLACEHOLDER));
}

#[test]
fn defaults_pass_validation() {
    validate_config_semantics(&Config::default()).unwrap();
}

#[test]
fn empty_document_is_default_config() {
    assert_eq!(parse_config("").unwrap(), Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = parse_config("[map]\nwidth = 900.0\n").unwrap();
    assert!((config.map.width - 900.0).abs() < f64::EPSILON);
    assert!((config.map.height - 460.0).abs() < f64::EPSILON);
    assert_eq!(config.data, DataConfig::default());
}

#[test]
fn data_fields_are_mapped() {
    let config = parse_config("[data]\nkey_field = \"iso\"\nfeature_key = \"ISO_A2\"\n").unwrap();
    let fields = config.data.fields();
    assert_eq!(fields.key_field, "iso");
    assert_eq!(fields.feature_key, "ISO_A2");
    assert_eq!(fields.name_field, "country");
}

#[test]
fn config_roundtrips_through_toml() {
    let text = toml::to_string(&Config::default()).unwrap();
    assert_eq!(parse_config(&text).unwrap(), Config::default());
}

mod validation_tests {
    use super::*;

    fn invalid(text: &str) -> String {
        parse_config(text).unwrap_err().to_string()
    }

    #[test]
    fn palette_size_is_checked() {
        let msg = invalid("[classification]\npalette = [\"#a\", \"#b\", \"#c\", \"#d\"]\n");
        assert!(msg.contains("got 4"));
    }

    #[test]
    fn fallback_must_differ_from_palette() {
        let msg = invalid("[classification]\nfallback = \"#d4b9da\"\n");
        assert!(msg.contains("must differ"));
    }

    #[test]
    fn palette_entries_must_be_css_colors() {
        let msg = invalid(
            "[classification]\npalette = [\"#a\", \"#b\", \"#c\\\" onload=\\\"x\", \"#d\", \"#e\"]\n",
        );
        assert!(msg.contains("classification.palette[2] is not a CSS color"));

        let msg = invalid("[classification]\nfallback = \"<gray>\"\n");
        assert!(msg.contains("classification.fallback is not a CSS color"));
    }

    #[test]
    fn functional_colors_are_accepted() {
        let config = parse_config(
            "[classification]\npalette = [\"rgb(1, 2, 3)\", \"hsl(10, 50%, 40%)\", \"red\", \"#00f\", \"#980043\"]\n",
        )
        .unwrap();
        assert_eq!(config.classification.palette[2], "red");
    }

    #[test]
    fn duplicate_candidates_rejected() {
        let msg = invalid("[attributes]\ncandidates = [\"A\", \"A\"]\n");
        assert!(msg.contains("'A' more than once"));
    }

    #[test]
    fn blank_candidate_rejected() {
        let msg = invalid("[attributes]\ncandidates = [\"A\", \" \"]\n");
        assert!(msg.contains("candidates[1]"));
    }

    #[test]
    fn active_must_be_candidate() {
        let msg = invalid("[attributes]\ncandidates = [\"A\"]\nactive = \"B\"\n");
        assert!(msg.contains("attributes.active 'B'"));
    }

    #[test]
    fn active_is_deferred_for_derived_candidates() {
        let config = parse_config("[attributes]\ncandidates = []\nactive = \"B\"\n").unwrap();
        assert_eq!(config.attributes.active.as_deref(), Some("B"));
    }

    #[test]
    fn dimensions_must_be_positive() {
        assert!(invalid("[chart]\nheight = 0.0\n").contains("chart.height"));
        assert!(invalid("[map]\nscale = -1.0\n").contains("map.scale"));
        assert!(invalid("[chart]\ndomain_max = 0.0\n").contains("chart.domain_max"));
    }

    #[test]
    fn symmetric_parallels_rejected() {
        assert!(invalid("[map]\nparallels = [30.0, -30.0]\n").contains("map.parallels"));
    }

    #[test]
    fn blank_field_name_rejected() {
        assert!(invalid("[data]\nfeature_key = \"\"\n").contains("data.feature_key"));
    }

    #[test]
    fn unknown_duplicate_policy_rejected() {
        let err = parse_config("[join]\nduplicate_keys = \"first\"\n").unwrap_err();
        assert_eq!(err.error_type(), "Config");
    }
}
