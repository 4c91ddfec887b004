//! Integration tests for property sets: parsing, shorthands and substitution.

use plume_common::warning::has_warned;
use plume_style::{
    Colorf, DeclarationError, GetValue, Image, Layer, PropertyId, SetValue, Style, StyleDimension,
    parse_declarations, substitute,
};
use quickcheck_macros::quickcheck;

#[test]
fn test_malformed_declaration_is_dropped_alone() {
    let style = Style::parse("margin 4px; color: blue");
    assert!(style.declared_value_by_name("margin").is_undefined());
    assert!(style.declared_value(PropertyId::MarginTop).is_undefined());
    assert!(style.declared_value(PropertyId::Color).is_color());
    assert!(has_warned("Style", "dropping declaration: missing ':' after 'margin'"));
}

#[test]
fn test_unknown_property_and_name() {
    let results = parse_declarations("colour: red");
    assert_eq!(results, vec![Err(DeclarationError::UnknownProperty("colour".to_string()))]);
    let style = Style::parse("color: red");
    assert!(style.declared_value_by_name("colour").is_undefined());
    assert!(style.declared_value_by_name("COLOR").is_color());
}

#[test]
fn test_later_declaration_wins_and_keeps_position() {
    let style = Style::parse("color: red; margin-top: 1px; color: blue");
    let order: Vec<PropertyId> = style.iter().map(|(p, _)| p).collect();
    assert_eq!(order, vec![PropertyId::Color, PropertyId::MarginTop]);
    assert_eq!(style.declared_value(PropertyId::Color).color(), Colorf::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn test_set_merges_into_existing_style() {
    let mut style = Style::parse("width: 10px");
    style.set("height: 20px; width: 30px");
    assert_eq!(style.len(), 2);
    assert_eq!(style.declared_value(PropertyId::Width).number(), 30.0);
    style.clear();
    assert!(style.is_empty());
}

#[test]
fn test_set_with_substitutes_arguments() {
    let mut style = Style::new();
    style.set_with("width: %1px; height: %2%%", &[&120, &50]);
    assert_eq!(style.declared_value(PropertyId::Width), GetValue::Length(120.0, StyleDimension::Px));
    assert_eq!(style.declared_value(PropertyId::Height), GetValue::Percentage(50.0));
}

#[test]
fn test_out_of_range_argument_is_left_verbatim() {
    assert_eq!(substitute("width: %3px", &[&1, &2]), "width: %3px");
    let mut style = Style::new();
    style.set_with("width: %3px", &[&1]);
    assert!(style.is_empty());
}

#[test]
fn test_important_is_accepted_but_not_ranked() {
    let results = parse_declarations("color: red !important");
    let declaration = results[0].as_ref().unwrap();
    assert!(declaration.important);
    let style = Style::parse("color: red !important; color: blue");
    assert_eq!(style.declared_value(PropertyId::Color).color().b, 1.0);
}

#[test]
fn test_padding_two_values() {
    let style = Style::parse("padding: 1px 2em");
    assert_eq!(style.declared_value(PropertyId::PaddingTop).number(), 1.0);
    assert_eq!(style.declared_value(PropertyId::PaddingBottom).number(), 1.0);
    assert_eq!(
        style.declared_value(PropertyId::PaddingLeft),
        GetValue::Length(2.0, StyleDimension::Em)
    );
    assert_eq!(style.declared_value(PropertyId::Padding).number(), 1.0);
}

#[test]
fn test_border_shorthand_sets_all_sides() {
    let style = Style::parse("border: thin dashed #00ff00");
    for p in [
        PropertyId::BorderTopStyle,
        PropertyId::BorderRightStyle,
        PropertyId::BorderBottomStyle,
        PropertyId::BorderLeftStyle,
    ] {
        assert!(style.declared_value(p).is_keyword_named("dashed"));
    }
    assert!(style.declared_value(PropertyId::BorderBottomWidth).is_keyword_named("thin"));
    assert_eq!(style.declared_value(PropertyId::BorderRightColor).color().g, 1.0);
    assert_eq!(style.len(), 12);
}

#[test]
fn test_border_rejects_duplicate_parts() {
    assert!(Style::parse("border: solid dashed").is_empty());
    assert!(Style::parse("border-top: 1px 2px").is_empty());
}

#[test]
fn test_corner_radius_pair() {
    let style = Style::parse("border-top-left-radius: 4px 50%");
    assert_eq!(style.declared_value(PropertyId::BorderTopLeftRadiusX).number(), 4.0);
    assert_eq!(style.declared_value(PropertyId::BorderTopLeftRadiusY), GetValue::Percentage(50.0));
}

#[test]
fn test_background_repeat_single_keywords() {
    let style = Style::parse("background-repeat: repeat-x, space round");
    assert!(style.declared_value_at(PropertyId::BackgroundRepeatX, 0).is_keyword_named("repeat"));
    assert!(style.declared_value_at(PropertyId::BackgroundRepeatY, 0).is_keyword_named("no-repeat"));
    assert!(style.declared_value_at(PropertyId::BackgroundRepeatX, 1).is_keyword_named("space"));
    assert!(style.declared_value_at(PropertyId::BackgroundRepeatY, 1).is_keyword_named("round"));
}

#[test]
fn test_background_position_keywords() {
    let style = Style::parse("background-position: bottom left, 25% 10px");
    assert_eq!(style.declared_layers(PropertyId::BackgroundPositionX), 2);
    assert_eq!(style.declared_value_at(PropertyId::BackgroundPositionX, 0), GetValue::Percentage(0.0));
    assert_eq!(style.declared_value_at(PropertyId::BackgroundPositionY, 0), GetValue::Percentage(100.0));
    assert_eq!(style.declared_value_at(PropertyId::BackgroundPositionY, 1).number(), 10.0);
}

#[test]
fn test_background_size_one_value_defaults_height_to_auto() {
    let style = Style::parse("background-size: 40px, cover");
    assert!(style.declared_value_at(PropertyId::BackgroundSizeY, 0).is_keyword_named("auto"));
    assert!(style.declared_value_at(PropertyId::BackgroundSizeY, 1).is_keyword_named("cover"));
}

#[test]
fn test_background_shorthand_resets_and_box_keywords() {
    let style = Style::parse("background: content-box url(a.png)");
    assert!(style.declared_value(PropertyId::BackgroundOrigin).is_keyword_named("content-box"));
    assert!(style.declared_value(PropertyId::BackgroundClip).is_keyword_named("content-box"));
    assert_eq!(style.declared_value(PropertyId::BackgroundColor).color(), Colorf::TRANSPARENT);
    assert!(style.declared_value(PropertyId::BackgroundRepeatX).is_keyword_named("repeat"));

    let style = Style::parse("background: padding-box content-box red");
    assert!(style.declared_value(PropertyId::BackgroundOrigin).is_keyword_named("padding-box"));
    assert!(style.declared_value(PropertyId::BackgroundClip).is_keyword_named("content-box"));
    assert!(style.declared_value(PropertyId::BackgroundImage).is_keyword_named("none"));
}

#[test]
fn test_background_rejects_empty_layer() {
    assert!(Style::parse("background: url(a.png),, red").is_empty());
}

#[test]
fn test_image_layers_carry_images() {
    let style = Style::parse("background-image: none, url(\"b.png\"), radial-gradient(red, blue)");
    assert_eq!(style.declared_layers(PropertyId::BackgroundImage), 3);
    assert!(style.declared_image(PropertyId::BackgroundImage, 0).is_none());
    assert_eq!(
        style.declared_image(PropertyId::BackgroundImage, 1).and_then(Image::url),
        Some("b.png")
    );
    assert!(style
        .declared_value_at(PropertyId::BackgroundImage, 2)
        .is_keyword_named("radial-gradient"));
}

#[test]
fn test_insert_ignores_shorthands_and_empty_layers() {
    let mut style = Style::new();
    style.insert(PropertyId::Margin, vec![Layer::new(SetValue::from_number(1.0))]);
    style.insert(PropertyId::Width, Vec::new());
    assert!(style.is_empty());
    style.insert(PropertyId::Width, vec![Layer::new(SetValue::from_keyword("auto"))]);
    assert!(style.declared_value(PropertyId::Width).is_keyword_named("auto"));
}

#[test]
fn test_font_shorthand_resets_omitted_parts() {
    let style = Style::parse("font-weight: bold; font: 2em monospace");
    assert!(style.declared_value(PropertyId::FontWeight).is_keyword_named("normal"));
    assert!(style.declared_value(PropertyId::LineHeight).is_keyword_named("normal"));
    assert_eq!(style.declared_layers(PropertyId::FontFamily), 1);
}

#[test]
fn test_font_shorthand_needs_size_and_family() {
    assert!(Style::parse("font: bold serif").is_empty());
    assert!(Style::parse("font: 12px").is_empty());
}

#[test]
fn test_font_weight_range() {
    let mut style = Style::parse("font-weight: 1000");
    assert_eq!(style.declared_value(PropertyId::FontWeight), GetValue::Number(1000.0));
    style.set("font-weight: 5000");
    assert_eq!(style.declared_value(PropertyId::FontWeight), GetValue::Number(1000.0));
    assert!(Style::parse("font-weight: 0").is_empty());
    assert_eq!(Style::parse("font-weight: 1").declared_value(PropertyId::FontWeight).number(), 1.0);
    assert!(Style::parse("font: 5000 12px serif").is_empty());
}

#[test]
fn test_keywords_fold_case() {
    let style = Style::parse("display: BLOCK; text-align: Center");
    assert!(style.declared_value(PropertyId::Display).is_keyword_named("block"));
    assert!(style.declared_value(PropertyId::TextAlign).is_keyword_named("center"));
}

#[test]
fn test_type_mismatch_is_invalid() {
    assert!(Style::parse("width: red").is_empty());
    assert!(Style::parse("opacity: 4px").is_empty());
    assert!(Style::parse("transition-duration: 10px").is_empty());
    assert!(!Style::parse("transition-duration: 150ms, 1s").is_empty());
}

#[quickcheck]
fn prop_substitute_without_percent_is_identity(text: String) -> bool {
    text.contains('%') || substitute(&text, &[&1, &"x"]) == text
}
