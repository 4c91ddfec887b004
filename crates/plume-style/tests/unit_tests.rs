//! Integration tests for unit conversion in computed values.

use std::f32::consts::PI;

use plume_style::cascade::{compute_angle, compute_length};
use plume_style::{
    Environment, FontDescription, FontMetrics, GetValue, Layer, PropertyId, SetValue, Style,
    StyleArena, StyleDimension, UnitContext,
};
use quickcheck_macros::quickcheck;

const LENGTH_UNITS: [StyleDimension; 14] = [
    StyleDimension::Px,
    StyleDimension::Em,
    StyleDimension::Pt,
    StyleDimension::Mm,
    StyleDimension::Cm,
    StyleDimension::In,
    StyleDimension::Pc,
    StyleDimension::Ex,
    StyleDimension::Ch,
    StyleDimension::Rem,
    StyleDimension::Vw,
    StyleDimension::Vh,
    StyleDimension::Vmin,
    StyleDimension::Vmax,
];

/// Every "0" is three quarters of the font size wide.
struct WideZero;

impl FontMetrics for WideZero {
    fn zero_advance(&self, font: &FontDescription) -> f32 {
        font.size * 0.75
    }
}

fn computed(text: &str, property: PropertyId, env: &Environment<'_>) -> GetValue<'static> {
    let mut arena = StyleArena::new();
    let style = arena.add_style(Style::parse(text));
    let id = arena.add_cascade(vec![style], None).unwrap();
    let value = arena.cascade(id, env).unwrap().computed_value(property);
    match value {
        GetValue::Length(n, d) => GetValue::Length(n, d),
        GetValue::Time(n, d) => GetValue::Time(n, d),
        GetValue::Frequency(n, d) => GetValue::Frequency(n, d),
        GetValue::Resolution(n, d) => GetValue::Resolution(n, d),
        GetValue::Percentage(n) => GetValue::Percentage(n),
        GetValue::Number(n) => GetValue::Number(n),
        _ => GetValue::Undefined,
    }
}

#[test]
fn test_absolute_length_in_cascade() {
    let env = Environment::default();
    assert_eq!(
        computed("width: 1in", PropertyId::Width, &env),
        GetValue::Length(96.0, StyleDimension::Px)
    );
    assert_eq!(computed("width: 50%", PropertyId::Width, &env), GetValue::Percentage(50.0));
}

#[test]
fn test_other_kinds_in_cascade() {
    let env = Environment::default();
    assert_eq!(
        computed("transition-duration: 1000ms", PropertyId::TransitionDuration, &env),
        GetValue::Time(1.0, StyleDimension::S)
    );
    assert_eq!(
        computed("pitch: 2khz", PropertyId::Pitch, &env),
        GetValue::Frequency(2000.0, StyleDimension::Hz)
    );
    assert_eq!(
        computed("image-resolution: 192dpi", PropertyId::ImageResolution, &env),
        GetValue::Resolution(2.0, StyleDimension::Dppx)
    );
    let angle = compute_angle(GetValue::Angle(180.0, StyleDimension::Deg));
    assert!((angle.number() - PI).abs() < 1e-6);
}

#[test]
fn test_viewport_lengths_use_environment() {
    let env = Environment::with_viewport(800.0, 600.0);
    assert_eq!(computed("width: 10vw", PropertyId::Width, &env).number(), 80.0);
    assert_eq!(computed("height: 50vmin", PropertyId::Height, &env).number(), 300.0);
    assert_eq!(
        computed("width: 10vw", PropertyId::Width, &Environment::default()).number(),
        0.0
    );
}

#[test]
fn test_ch_uses_font_metrics() {
    let metrics = WideZero;
    let env = Environment::default().with_font_metrics(&metrics);
    assert_eq!(
        computed("font-size: 20px; width: 10ch", PropertyId::Width, &env).number(),
        150.0
    );
    let plain = Environment::default();
    assert_eq!(
        computed("font-size: 20px; width: 10ch", PropertyId::Width, &plain).number(),
        100.0
    );
}

#[test]
fn test_rem_on_root() {
    let env = Environment::default();
    assert_eq!(computed("font-size: 2rem", PropertyId::FontSize, &env).number(), 32.0);
    assert_eq!(
        computed("font-size: 10px; margin-top: 3rem", PropertyId::MarginTop, &env).number(),
        30.0
    );
}

#[test]
fn test_unit_context_of_cascade() {
    let mut arena = StyleArena::new();
    let root = arena.add_style(Style::parse("font-size: 12px"));
    let leaf = arena.add_style(Style::parse("font-size: 24px"));
    let root = arena.add_cascade(vec![root], None).unwrap();
    let leaf = arena.add_cascade(vec![leaf], Some(root)).unwrap();
    let env = Environment::with_viewport(640.0, 480.0);
    let units = arena.cascade(leaf, &env).unwrap().unit_context();
    assert_eq!(
        units,
        UnitContext {
            font_size: 24.0,
            root_font_size: 12.0,
            zero_advance: None,
            viewport_width: 640.0,
            viewport_height: 480.0,
        }
    );
}

#[test]
fn test_hand_built_values_compute_in_their_own_kind() {
    let mut style = Style::new();
    style.insert(PropertyId::Width, vec![Layer::new(SetValue::Length(2.0, StyleDimension::Deg))]);
    style.insert(
        PropertyId::TransitionDuration,
        vec![Layer::new(SetValue::Time(3.0, StyleDimension::Px))],
    );
    let mut arena = StyleArena::new();
    let style = arena.add_style(style);
    let id = arena.add_cascade(vec![style], None).unwrap();
    let env = Environment::default();
    let cascade = arena.cascade(id, &env).unwrap();
    assert_eq!(
        cascade.specified_value(PropertyId::Width),
        GetValue::Length(2.0, StyleDimension::Px)
    );
    assert_eq!(
        cascade.computed_value(PropertyId::Width),
        GetValue::Length(2.0, StyleDimension::Px)
    );
    assert_eq!(
        cascade.computed_value(PropertyId::TransitionDuration),
        GetValue::Time(3.0, StyleDimension::S)
    );
}

#[quickcheck]
fn prop_length_conversion_is_idempotent(n: i16, unit: usize) -> bool {
    let units = UnitContext {
        font_size: 13.0,
        root_font_size: 11.0,
        zero_advance: Some(7.0),
        viewport_width: 1024.0,
        viewport_height: 768.0,
    };
    let value = GetValue::Length(f32::from(n), LENGTH_UNITS[unit % LENGTH_UNITS.len()]);
    let once = compute_length(value, &units);
    once.dimension() == StyleDimension::Px && compute_length(once, &units) == once
}
