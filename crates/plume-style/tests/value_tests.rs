//! Integration tests for the value model.

use plume_style::values::{parse_value, to_rgba};
use plume_style::{Colorf, GetValue, PropertyId, SetValue, Style, StyleDimension, StyleValueType};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[test]
fn test_factories_pick_default_units() {
    assert_eq!(SetValue::from_length(10.0, StyleDimension::Px).dimension(), StyleDimension::Px);
    assert_eq!(SetValue::from_angle(1.0, StyleDimension::Ms).dimension(), StyleDimension::Rad);
    assert_eq!(SetValue::from_time(1.0, StyleDimension::Px).dimension(), StyleDimension::S);
    assert_eq!(SetValue::from_frequency(1.0, StyleDimension::Deg).dimension(), StyleDimension::Hz);
    assert_eq!(
        SetValue::from_resolution(1.0, StyleDimension::Em).dimension(),
        StyleDimension::Dppx
    );
}

#[test]
fn test_default_is_undefined() {
    let value = SetValue::default();
    assert!(value.is_undefined());
    assert_eq!(value.as_get().value_type(), StyleValueType::Undefined);
    assert_eq!(value.as_get().text(), "");
    assert_eq!(value.color(), Colorf::TRANSPARENT);
}

#[test]
fn test_text_payloads() {
    assert_eq!(SetValue::from_keyword("auto").as_get(), GetValue::Keyword("auto"));
    assert_eq!(SetValue::from_string("Fira Sans").text(), "Fira Sans");
    assert_eq!(SetValue::from_url("a.png").as_get(), GetValue::Url("a.png"));
    assert!(SetValue::from_keyword("auto").is_keyword_named("auto"));
    assert!(!SetValue::from_string("auto").is_keyword_named("auto"));
}

#[test]
fn test_rgba_color_declaration() {
    let style = Style::parse("color: rgba(255,0,0,1)");
    let value = style.declared_value_by_name("color");
    assert!(value.is_color());
    assert_eq!(value.color(), Colorf::new(1.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_to_rgba_feeds_back_into_set() {
    let color = Colorf::from_rgba8(12, 34, 56, 255);
    let mut style = Style::new();
    style.set_with("background-color: %1", &[&to_rgba(color)]);
    assert_eq!(
        style.declared_value(PropertyId::BackgroundColor).color().to_rgba8(),
        [12, 34, 56, 255]
    );
}

#[test]
fn test_parse_value_kinds() {
    let value = |text: &str| {
        let decls = plume_style::parser::DeclarationParser::parse(&format!("x: {text}"));
        decls[0].as_ref().ok().and_then(|d| parse_value(&d.value[0]))
    };
    assert_eq!(value("12px"), Some(SetValue::from_length(12.0, StyleDimension::Px)));
    assert_eq!(value("90deg"), Some(SetValue::from_angle(90.0, StyleDimension::Deg)));
    assert_eq!(value("2x"), Some(SetValue::from_resolution(2.0, StyleDimension::Dppx)));
    assert_eq!(value("50%"), Some(SetValue::from_percentage(50.0)));
    assert_eq!(value("AUTO"), Some(SetValue::from_keyword("auto")));
    assert_eq!(value("12furlongs"), None);
}

#[quickcheck]
fn prop_length_factory_round_trips(n: f32) -> TestResult {
    if !n.is_finite() {
        return TestResult::discard();
    }
    let value = SetValue::from_length(n, StyleDimension::Em);
    TestResult::from_bool(
        value.number() == n
            && value.dimension() == StyleDimension::Em
            && value.as_get().to_owned_value() == value,
    )
}

#[quickcheck]
fn prop_percentage_and_number_round_trip(n: i32) -> bool {
    #[allow(clippy::cast_precision_loss)]
    let n = n as f32;
    SetValue::from_percentage(n).as_get() == GetValue::Percentage(n)
        && SetValue::from_number(n).number() == n
}

#[quickcheck]
fn prop_rgba_text_round_trips(r: u8, g: u8, b: u8) -> bool {
    let color = Colorf::from_rgba8(r, g, b, 255);
    let style = Style::parse(&format!("color: {}", to_rgba(color)));
    style.declared_value(PropertyId::Color).color().to_rgba8() == [r, g, b, 255]
}
