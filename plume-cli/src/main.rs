//! Plume CLI - inspect how declarations cascade
//!
//! Every `--element` is one node; each later node is the child of the one
//! before it. Values are reported for the last node.
//!
//! Examples:
//!   plume -e 'font-size: 20px' -e 'font-size: 150%; margin: 2em' -p font-size -p margin-top
//!   plume -e 'background: url(a.png) no-repeat, red' --render 200x100 --json

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use plume_style::render::{DisplayList, Rect, ViewGeometry};
use plume_style::{Environment, GetValue, PropertyId, Style, StyleArena, StyleCascade};
use serde::Serialize;
use strum::IntoEnumIterator;

/// Plume - resolve cascaded, specified and computed CSS values
#[derive(Parser, Debug)]
#[command(name = "plume")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Inherit a font size through two nodes
    plume -e 'font-size: 20px' -e 'font-size: 150%' -p font-size

    # Theme file under an inline override
    plume --file theme.css --override 'color: red' -e 'color: blue'

    # Paint a box and dump the display list
    plume -e 'border: 2px solid; border-radius: 8px' --render 100x50 --json
"#)]
struct Cli {
    /// Declarations for one node, outermost first
    #[arg(short, long = "element", value_name = "DECLS")]
    elements: Vec<String>,

    /// Declarations that win over the innermost node's own
    #[arg(long = "override", value_name = "DECLS")]
    overrides: Option<String>,

    /// Declarations that lose to the innermost node's own
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Properties to report (default: every declared longhand)
    #[arg(short, long = "property", value_name = "NAME")]
    properties: Vec<String>,

    /// Viewport size for vw/vh units
    #[arg(long, value_name = "WxH", value_parser = parse_size, default_value = "1280x720")]
    viewport: (f32, f32),

    /// Device pixels per CSS px
    #[arg(long, default_value = "1")]
    dpr: f32,

    /// Paint background and border for a content box of this size
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    render: Option<(f32, f32)>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// One reported property.
#[derive(Serialize)]
struct Row<'a> {
    property: &'static str,
    cascaded: GetValue<'a>,
    specified: GetValue<'a>,
    computed: GetValue<'a>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut arena = StyleArena::new();
    let mut node = None;
    let count = cli.elements.len().max(1);
    for index in 0..count {
        let text = cli.elements.get(index).map_or("", String::as_str);
        let mut stack = Vec::new();
        let innermost = index + 1 == count;
        if innermost {
            if let Some(text) = &cli.overrides {
                stack.push(arena.add_style(Style::parse(text)));
            }
        }
        stack.push(arena.add_style(Style::parse(text)));
        if innermost {
            if let Some(path) = &cli.file {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading '{}'", path.display()))?;
                stack.push(arena.add_style(Style::parse(&text)));
            }
        }
        node = Some(arena.add_cascade(stack, node)?);
    }
    let Some(node) = node else {
        bail!("no element to inspect");
    };

    let env = Environment {
        device_pixel_ratio: cli.dpr,
        ..Environment::with_viewport(cli.viewport.0, cli.viewport.1)
    };
    let cascade = arena.cascade(node, &env)?;

    let properties = properties(&cli.properties, &arena, &cascade)?;
    let rows: Vec<Row<'_>> = properties
        .iter()
        .map(|p| Row {
            property: p.name(),
            cascaded: cascade.cascade_value(*p),
            specified: cascade.specified_value(*p),
            computed: cascade.computed_value(*p),
        })
        .collect();

    let list = cli.render.map(|(width, height)| {
        let geometry =
            ViewGeometry::from_content_box(&cascade, Rect::new(0.0, 0.0, width, height), width);
        let mut list = DisplayList::new();
        cascade.render_background(&mut list, &geometry);
        cascade.render_border(&mut list, &geometry);
        list
    });

    if cli.json {
        let json = serde_json::json!({
            "properties": rows,
            "font": cascade.font_description(),
            "display_list": list,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    print_rows(&rows);
    let font = cascade.font_description();
    println!(
        "\n{} {} {}px weight {} {}",
        "font:".bold(),
        font.families.join(", "),
        font.size,
        font.weight,
        font.style
    );
    if let Some(list) = list {
        println!("\n{} ({} commands)", "display list".bold(), list.len());
        for command in list.commands() {
            println!("  {command:?}");
        }
    }
    Ok(())
}

/// The requested properties, or every longhand some style in the chain
/// declares.
fn properties(
    names: &[String],
    arena: &StyleArena,
    cascade: &StyleCascade<'_>,
) -> Result<Vec<PropertyId>> {
    if !names.is_empty() {
        return names
            .iter()
            .map(|name| {
                name.parse::<PropertyId>()
                    .with_context(|| format!("unknown property '{name}'"))
            })
            .collect();
    }

    let mut declared = Vec::new();
    let mut node = Some(*cascade);
    while let Some(current) = node {
        for id in arena.cascade_styles(current.id())? {
            declared.extend(arena.style(*id)?.iter().map(|(p, _)| p));
        }
        node = current.parent();
    }
    Ok(PropertyId::iter()
        .filter(|p| !p.is_shorthand() && declared.contains(p))
        .collect())
}

fn print_rows(rows: &[Row<'_>]) {
    let width = rows.iter().map(|r| r.property.len()).max().unwrap_or(0);
    println!(
        "{:width$}  {:24} {:24} {}",
        "property".bold(),
        "cascaded".bold(),
        "specified".bold(),
        "computed".bold()
    );
    for row in rows {
        println!(
            "{:width$}  {:24} {:24} {}",
            row.property.cyan(),
            shown(row.cascaded),
            shown(row.specified),
            shown(row.computed).green()
        );
    }
}

fn shown(value: GetValue<'_>) -> String {
    if value.is_undefined() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Parse `WIDTHxHEIGHT`.
fn parse_size(text: &str) -> Result<(f32, f32), String> {
    let (w, h) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{text}'"))?;
    let w: f32 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h: f32 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    Ok((w, h))
}
