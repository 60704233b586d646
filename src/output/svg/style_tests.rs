use super::*;

#[test]
fn css_var_resolves_to_page_variable() {
    assert_eq!(ChartColor::css_var("stroke").to_css(), "var(--color-stroke)");
}

#[test]
fn hex_is_passed_through() {
    assert_eq!(ChartColor::hex("#980043").to_css(), "#980043");
}

#[test]
fn color_cannot_break_out_of_attribute() {
    let css = ChartColor::hex(r#"red" onclick="alert(1)"#).to_css();
    assert!(!css.contains('"'));
    assert_eq!(css, "red&quot; onclick=&quot;alert(1)");
}

#[test]
fn anchors_display_as_svg_keywords() {
    assert_eq!(TextAnchor::Middle.to_string(), "middle");
    assert_eq!(TextAnchor::Start.as_str(), "start");
    assert_eq!(TextAnchor::default(), TextAnchor::Start);
}
