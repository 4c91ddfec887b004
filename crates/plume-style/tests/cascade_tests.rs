//! Integration tests for cascade resolution across element chains.

use plume_style::render::{Canvas, DisplayList};
use plume_style::{
    CascadeError, CascadeId, Colorf, Environment, FontStyle, GetValue, PropertyId, Style,
    StyleArena, StyleDimension,
};

/// One node per text, each the child of the one before.
fn chain(arena: &mut StyleArena, texts: &[&str]) -> Vec<CascadeId> {
    let mut ids: Vec<CascadeId> = Vec::new();
    for text in texts {
        let style = arena.add_style(Style::parse(text));
        let id = arena.add_cascade(vec![style], ids.last().copied()).unwrap();
        ids.push(id);
    }
    ids
}

#[test]
fn test_override_stack_falls_through_to_base() {
    let mut arena = StyleArena::new();
    let over = arena.add_style(Style::new());
    let base = arena.add_style(Style::parse("margin: 4px"));
    let id = arena.add_cascade(vec![over, base], None).unwrap();
    let env = Environment::default();
    let cascade = arena.cascade(id, &env).unwrap();
    assert_eq!(cascade.cascade_value(PropertyId::Margin).number(), 4.0);
    assert_eq!(cascade.cascade_value(PropertyId::MarginLeft).number(), 4.0);
}

#[test]
fn test_inherited_property_takes_parent_value() {
    let mut arena = StyleArena::new();
    let ids = chain(&mut arena, &["font-family: serif; margin-top: 5px", ""]);
    let env = Environment::default();
    let child = arena.cascade(ids[1], &env).unwrap();
    assert!(child.cascade_value(PropertyId::FontFamily).is_undefined());
    assert!(child.specified_value(PropertyId::FontFamily).is_keyword_named("serif"));
    assert_eq!(
        child.computed_value(PropertyId::MarginTop),
        GetValue::Length(0.0, StyleDimension::Px)
    );
}

#[test]
fn test_root_uses_initial_values() {
    let mut arena = StyleArena::new();
    let ids = chain(&mut arena, &[""]);
    let env = Environment::default();
    let root = arena.cascade(ids[0], &env).unwrap();
    assert_eq!(root.computed_value(PropertyId::Color).color(), Colorf::BLACK);
    assert!(root.specified_value(PropertyId::Width).is_keyword_named("auto"));
    assert_eq!(root.font_size(), 16.0);
}

#[test]
fn test_css_wide_keywords() {
    let mut arena = StyleArena::new();
    let ids = chain(
        &mut arena,
        &[
            "color: red; width: 10px",
            "color: unset; width: unset",
            "color: initial; width: inherit",
        ],
    );
    let env = Environment::default();
    let middle = arena.cascade(ids[1], &env).unwrap();
    assert!(middle.specified_value(PropertyId::Width).is_keyword_named("auto"));
    assert_eq!(middle.computed_value(PropertyId::Color).color().r, 1.0);

    let leaf = arena.cascade(ids[2], &env).unwrap();
    assert_eq!(leaf.computed_value(PropertyId::Color).color(), Colorf::BLACK);
    assert!(leaf.computed_value(PropertyId::Width).is_keyword_named("auto"));
    assert!(leaf.cascade_value(PropertyId::Width).is_keyword_named("inherit"));
}

#[test]
fn test_inherit_reaches_past_an_inheriting_parent() {
    let mut arena = StyleArena::new();
    let ids = chain(&mut arena, &["width: 10px", "width: inherit", "width: inherit"]);
    let env = Environment::default();
    let leaf = arena.cascade(ids[2], &env).unwrap();
    assert_eq!(leaf.computed_value(PropertyId::Width).number(), 10.0);
}

#[test]
fn test_em_against_own_font_size() {
    let mut arena = StyleArena::new();
    let ids = chain(&mut arena, &["font-size: 20px; margin-left: 2em"]);
    let env = Environment::default();
    let cascade = arena.cascade(ids[0], &env).unwrap();
    assert_eq!(
        cascade.computed_value(PropertyId::MarginLeft),
        GetValue::Length(40.0, StyleDimension::Px)
    );
}

#[test]
fn test_font_size_keywords_and_relative_sizes() {
    let mut arena = StyleArena::new();
    let ids = chain(&mut arena, &["font-size: x-large", "font-size: smaller", "font-size: 2em"]);
    let env = Environment::default();
    let font = |i: usize| arena.cascade(ids[i], &env).unwrap().font_size();
    assert_eq!(font(0), 24.0);
    assert!((font(1) - 20.0).abs() < 1e-4);
    assert!((font(2) - 40.0).abs() < 1e-4);
}

#[test]
fn test_array_size() {
    let mut arena = StyleArena::new();
    let ids = chain(
        &mut arena,
        &["background-image: url(a.png), url(b.png), none; background-position-x: 10px"],
    );
    let env = Environment::default();
    let cascade = arena.cascade(ids[0], &env).unwrap();
    assert_eq!(cascade.array_size(PropertyId::BackgroundImage), 3);
    assert_eq!(cascade.array_size(PropertyId::BackgroundRepeatX), 1);
    assert_eq!(cascade.computed_value_at(PropertyId::BackgroundPositionX, 2).number(), 10.0);
    assert_eq!(
        cascade.computed_image(PropertyId::BackgroundImage, 1).and_then(|i| i.url()),
        Some("b.png")
    );
    assert!(cascade.computed_image(PropertyId::BackgroundImage, 2).is_none());
}

#[test]
fn test_queries_by_name() {
    let mut arena = StyleArena::new();
    let ids = chain(&mut arena, &["font-size: 10px", "padding: 1em"]);
    let env = Environment::default();
    let leaf = arena.cascade(ids[1], &env).unwrap();
    assert_eq!(
        leaf.cascade_value_by_name("padding-top"),
        GetValue::Length(1.0, StyleDimension::Em)
    );
    assert_eq!(leaf.specified_value_by_name("FONT-SIZE").number(), 10.0);
    assert_eq!(leaf.computed_value_by_name("padding").number(), 10.0);
    assert!(leaf.computed_value_by_name("paddin").is_undefined());
}

#[test]
fn test_arena_edits_are_visible() {
    let mut arena = StyleArena::new();
    let first = arena.add_style(Style::parse("width: 10px"));
    let second = arena.add_style(Style::parse("width: 20px"));
    let id = arena.add_cascade(vec![first], None).unwrap();

    arena.style_mut(first).unwrap().set("width: 15px");
    {
        let env = Environment::default();
        let cascade = arena.cascade(id, &env).unwrap();
        assert_eq!(cascade.computed_value(PropertyId::Width).number(), 15.0);
    }

    arena.set_cascade(id, vec![second, first]).unwrap();
    assert_eq!(arena.cascade_styles(id), Ok(&[second, first][..]));
    let env = Environment::default();
    let cascade = arena.cascade(id, &env).unwrap();
    assert_eq!(cascade.computed_value(PropertyId::Width).number(), 20.0);
    assert_eq!(arena.style_count(), 2);
    assert_eq!(arena.cascade_count(), 1);
}

#[test]
fn test_reparenting() {
    let mut arena = StyleArena::new();
    let ids = chain(&mut arena, &["color: red", "color: blue", ""]);
    assert_eq!(
        arena.set_parent(ids[0], Some(ids[2])),
        Err(CascadeError::Cycle {
            child: ids[0],
            parent: ids[2]
        })
    );
    arena.set_parent(ids[2], Some(ids[0])).unwrap();
    assert_eq!(arena.parent(ids[2]), Ok(Some(ids[0])));
    let env = Environment::default();
    let leaf = arena.cascade(ids[2], &env).unwrap();
    assert_eq!(leaf.computed_value(PropertyId::Color).color().r, 1.0);
    assert_eq!(leaf.root().id(), ids[0]);
}

#[test]
fn test_currentcolor() {
    let mut arena = StyleArena::new();
    let ids = chain(
        &mut arena,
        &["color: blue", "color: currentcolor; border-top-color: currentcolor"],
    );
    let env = Environment::default();
    let leaf = arena.cascade(ids[1], &env).unwrap();
    let blue = Colorf::new(0.0, 0.0, 1.0, 1.0);
    assert_eq!(leaf.computed_value(PropertyId::Color).color(), blue);
    assert_eq!(leaf.computed_value(PropertyId::BorderTopColor).color(), blue);
    assert_eq!(leaf.computed_value(PropertyId::BorderLeftColor).color(), blue);
}

#[test]
fn test_relative_font_weights() {
    let mut arena = StyleArena::new();
    let ids = chain(
        &mut arena,
        &["font-weight: bold", "font-weight: bolder", "font-weight: lighter"],
    );
    let env = Environment::default();
    let weight = |i: usize| {
        arena
            .cascade(ids[i], &env)
            .unwrap()
            .computed_value(PropertyId::FontWeight)
            .number()
    };
    assert_eq!(weight(0), 700.0);
    assert_eq!(weight(1), 900.0);
    assert_eq!(weight(2), 700.0);
}

#[test]
fn test_font_description() {
    let mut arena = StyleArena::new();
    let ids = chain(
        &mut arena,
        &["font: italic bold 20px/1.5 \"Fira Sans\", monospace", "line-height: 150%"],
    );
    let env = Environment::default();
    let root = arena.cascade(ids[0], &env).unwrap();
    let font = root.font_description();
    assert_eq!(font.families, vec!["Fira Sans".to_string(), "monospace".to_string()]);
    assert_eq!(font.size, 20.0);
    assert_eq!(font.weight, 700.0);
    assert_eq!(font.style, FontStyle::Italic);
    assert_eq!(font.line_height, Some(30.0));

    let mut list = DisplayList::new();
    let from_canvas = arena.cascade(ids[1], &env).unwrap().get_font(&mut list);
    assert_eq!(from_canvas.line_height, Some(30.0));
    assert_eq!(from_canvas, list.font(&from_canvas));
    assert!(list.is_empty());
}

#[test]
fn test_normal_line_height_is_none() {
    let mut arena = StyleArena::new();
    let ids = chain(&mut arena, &[""]);
    let env = Environment::default();
    let font = arena.cascade(ids[0], &env).unwrap().font_description();
    assert_eq!(font.line_height, None);
    assert_eq!(font.families, vec!["sans-serif".to_string()]);
}

#[test]
fn test_unknown_cascade_id() {
    let mut other = StyleArena::new();
    let ids = chain(&mut other, &["", ""]);
    let arena = StyleArena::new();
    let env = Environment::default();
    assert_eq!(
        arena.cascade(ids[1], &env).map(|c| c.id()),
        Err(CascadeError::UnknownCascade(ids[1]))
    );
}
