//! Integration tests for painting backgrounds and borders into a display list.

use plume_style::render::{
    BorderRadii, BorderStyle, Brush, DisplayCommand, DisplayList, ImageRepeat, Point, Rect,
    ViewGeometry, border_radii, border_sides, border_widths,
};
use plume_style::{CascadeId, Colorf, Environment, Style, StyleArena};

fn node(text: &str) -> (StyleArena, CascadeId) {
    let mut arena = StyleArena::new();
    let style = arena.add_style(Style::parse(text));
    let id = arena.add_cascade(vec![style], None).unwrap();
    (arena, id)
}

/// Paint `text` over `content` and return the list.
fn paint(text: &str, content: Rect, images: &[(&str, f32, f32)]) -> DisplayList {
    let (arena, id) = node(text);
    let env = Environment::default();
    let cascade = arena.cascade(id, &env).unwrap();
    let geometry = ViewGeometry::from_content_box(&cascade, content, content.width);
    let mut list = DisplayList::new();
    for (url, width, height) in images {
        list.register_image(*url, *width, *height);
    }
    cascade.render_background(&mut list, &geometry);
    cascade.render_border(&mut list, &geometry);
    list
}

#[test]
fn test_color_then_border() {
    let list = paint(
        "background-color: red; border: 2px solid blue",
        Rect::new(10.0, 10.0, 100.0, 50.0),
        &[],
    );
    let border_box = Rect::new(8.0, 8.0, 104.0, 54.0);
    let blue = Colorf::new(0.0, 0.0, 1.0, 1.0);
    assert_eq!(list.len(), 2);
    assert_eq!(
        list.commands()[0],
        DisplayCommand::FillRect {
            rect: border_box,
            radii: BorderRadii::default(),
            brush: Brush::Solid {
                color: Colorf::new(1.0, 0.0, 0.0, 1.0)
            },
        }
    );
    let DisplayCommand::DrawBorder { rect, sides, .. } = &list.commands()[1] else {
        panic!("expected a border");
    };
    assert_eq!(*rect, border_box);
    assert!(sides
        .iter()
        .all(|s| s.width == 2.0 && s.style == BorderStyle::Solid && s.color == blue));
}

#[test]
fn test_color_follows_bottom_layer_clip() {
    let list = paint(
        "background-color: red; padding: 5px; background-clip: content-box",
        Rect::new(10.0, 10.0, 100.0, 50.0),
        &[],
    );
    assert!(matches!(
        list.commands(),
        [DisplayCommand::FillRect { rect, .. }] if *rect == Rect::new(10.0, 10.0, 100.0, 50.0)
    ));
}

#[test]
fn test_positioned_image_without_repeat() {
    let list = paint(
        "background-image: url(a.png); background-repeat: no-repeat; background-position: 10px 20px",
        Rect::new(0.0, 0.0, 200.0, 100.0),
        &[("a.png", 40.0, 20.0)],
    );
    assert_eq!(
        list.commands(),
        &[DisplayCommand::DrawImage {
            url: "a.png".to_string(),
            tile: Rect::new(10.0, 20.0, 40.0, 20.0),
            clip: Rect::new(0.0, 0.0, 200.0, 100.0),
            repeat: ImageRepeat::default(),
        }]
    );
}

#[test]
fn test_space_spreads_tiles() {
    let list = paint(
        "background-image: url(a.png); background-repeat: space no-repeat",
        Rect::new(0.0, 0.0, 100.0, 100.0),
        &[("a.png", 30.0, 30.0)],
    );
    let [DisplayCommand::DrawImage { tile, repeat, .. }] = list.commands() else {
        panic!("expected one image");
    };
    assert_eq!(tile.x, 0.0);
    assert!(repeat.x && !repeat.y);
    assert_eq!(repeat.spacing, Point::new(5.0, 0.0));
}

#[test]
fn test_first_layer_is_painted_last() {
    let list = paint(
        "background: url(top.png) no-repeat, url(bottom.png) no-repeat green",
        Rect::new(0.0, 0.0, 50.0, 50.0),
        &[],
    );
    let urls: Vec<&str> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DisplayCommand::DrawImage { url, .. } => Some(url.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(urls, vec!["bottom.png", "top.png"]);
    assert!(matches!(list.commands()[0], DisplayCommand::FillRect { .. }));
}

#[test]
fn test_gradient_tiles_fill_the_clip() {
    let list = paint(
        "background-image: linear-gradient(red, blue); background-size: 50px 100%",
        Rect::new(0.0, 0.0, 200.0, 100.0),
        &[],
    );
    let xs: Vec<f32> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DisplayCommand::FillRect {
                rect,
                brush: Brush::Linear { .. },
                ..
            } => Some(rect.x),
            _ => None,
        })
        .collect();
    assert_eq!(xs, vec![0.0, 50.0, 100.0, 150.0]);
}

#[test]
fn test_percentage_radii_follow_border_box() {
    let (arena, id) = node("border-radius: 50%");
    let env = Environment::default();
    let cascade = arena.cascade(id, &env).unwrap();
    let radii = border_radii(&cascade, Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(radii.top_left, Point::new(50.0, 25.0));
    assert_eq!(radii.bottom_right, Point::new(50.0, 25.0));
}

#[test]
fn test_widths_snap_to_device_pixels() {
    let (arena, id) = node("border-top: 0.3px solid; border-left: 2.7px solid");
    let env = Environment {
        device_pixel_ratio: 2.0,
        ..Environment::default()
    };
    let cascade = arena.cascade(id, &env).unwrap();
    let widths = border_widths(&cascade);
    assert_eq!(widths.top, 0.5);
    assert_eq!(widths.left, 2.5);
    assert_eq!(widths.right, 0.0);
}

#[test]
fn test_border_without_style_is_not_drawn() {
    let list = paint(
        "border-top-width: 4px; border-top-color: red",
        Rect::new(0.0, 0.0, 10.0, 10.0),
        &[],
    );
    assert!(list.is_empty());
}

#[test]
fn test_border_color_defaults_to_color() {
    let (arena, id) = node("color: green; border: 1px solid");
    let env = Environment::default();
    let cascade = arena.cascade(id, &env).unwrap();
    let green = Colorf::from_rgba8(0, 128, 0, 255);
    assert!(border_sides(&cascade).iter().all(|s| s.color == green));
}

#[test]
fn test_display_list_serializes() {
    let list = paint("background-color: red", Rect::new(0.0, 0.0, 10.0, 10.0), &[]);
    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["commands"][0]["command"], "fill_rect");
    assert_eq!(json["commands"][0]["brush"]["type"], "solid");
    assert_eq!(json["commands"][0]["rect"]["width"], 10.0);
}
