//! Skinnable custom-drawn controls.
//!
//! Each widget owns a [`Control`] (config record, interaction machine,
//! bounds, label) and paints itself into a [`skinkit_core::Scene`] from the
//! paint profile of its current state. Text extents come from a
//! [`TextMeasure`]: [`CosmicMeasure`] shapes real fonts, [`FixedMeasure`]
//! gives deterministic metrics.

pub mod button;
pub mod checkbox;
pub mod combobox;
pub mod control;
pub mod measure;
pub mod panel;
pub mod radio;
pub mod scrolled;
pub mod static_box;

pub use button::Button;
pub use checkbox::CheckBox;
pub use combobox::{ComboBox, DropDown};
pub use control::{Control, Widget, px_separation};
pub use measure::{CosmicMeasure, FixedMeasure, TextMeasure, grapheme_len};
pub use panel::Panel;
pub use radio::RadioButton;
pub use scrolled::ScrolledPanel;
pub use static_box::StaticBox;

use std::fmt::Write;

use skinkit_core::{Brush, Color, Pen, Rect, Scene, SceneNode};

fn hex(c: Color) -> String {
    format!("#{:02x}{:02x}{:02x}{:02x}", c.0, c.1, c.2, c.3)
}

fn brush(b: &Brush) -> String {
    match b {
        Brush::Solid(c) => hex(*c),
        Brush::Linear {
            start_color,
            end_color,
            ..
        } => format!("linear({}..{})", hex(*start_color), hex(*end_color)),
    }
}

fn rect(r: Rect) -> String {
    format!("{},{} {}x{}", r.x, r.y, r.w, r.h)
}

/// One line per node, for logs and snapshots.
pub fn dump_scene(scene: &Scene) -> String {
    let mut out = String::new();
    for node in &scene.nodes {
        let _ = match node {
            SceneNode::Rect {
                rect: r,
                brush: b,
                radius,
            } => writeln!(out, "rect {} r{} {}", rect(*r), radius, brush(b)),
            SceneNode::Border {
                rect: r,
                color,
                width,
                radius,
            } => writeln!(out, "border {} r{} w{} {}", rect(*r), radius, width, hex(*color)),
            SceneNode::Ellipse { rect: r, brush: b, pen } => match pen {
                Pen::None => writeln!(out, "ellipse {} {}", rect(*r), brush(b)),
                Pen::Stroke { width, color } => writeln!(
                    out,
                    "ellipse {} {} w{} {}",
                    rect(*r),
                    brush(b),
                    width,
                    hex(*color)
                ),
            },
            SceneNode::Path {
                points,
                color,
                width,
            } => {
                let pts: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
                writeln!(out, "path {} w{} {}", pts.join(" "), width, hex(*color))
            }
            SceneNode::Text {
                rect: r,
                text,
                color,
                size,
                ..
            } => writeln!(out, "text {} {:?} {}px {}", rect(*r), text, size, hex(*color)),
            SceneNode::Image { rect: r, image, .. } => {
                writeln!(out, "image {} {}", rect(*r), image.0)
            }
            SceneNode::PushClip { rect: r, .. } => writeln!(out, "clip {}", rect(*r)),
            SceneNode::PopClip => writeln!(out, "unclip"),
        };
    }
    out
}
