use smallvec::SmallVec;

use crate::config::ImageRef;
use crate::resolve::Pen;
use crate::{Brush, Color, Rect, Vec2};

/// Renderable scene: what a control painted, in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        brush: Brush,
        radius: f32,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    Ellipse {
        rect: Rect,
        brush: Brush,
        pen: Pen,
    },
    /// Open polyline (check marks, arrows).
    Path {
        points: SmallVec<[Vec2; 4]>,
        color: Color,
        width: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
        face: String,
    },
    Image {
        rect: Rect,
        image: ImageRef,
        channels: [f32; 4],
    },
    PushClip {
        rect: Rect,
        radius: f32,
    },
    PopClip,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Filled shape with an optional outline on top. A `Pen::None` outline is
    /// skipped entirely.
    pub fn fill_rounded(&mut self, rect: Rect, brush: Brush, pen: Pen, radius: f32) {
        self.nodes.push(SceneNode::Rect {
            rect,
            brush,
            radius,
        });
        if let Pen::Stroke { width, color } = pen {
            self.nodes.push(SceneNode::Border {
                rect,
                color,
                width,
                radius,
            });
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn borders(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, SceneNode::Border { .. }))
            .count()
    }
}
