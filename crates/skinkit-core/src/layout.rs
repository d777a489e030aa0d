//! # Pair layout
//!
//! Every skinned control is built from at most two objects laid side by side:
//! an image and a text, or a selector glyph and the image+text block, or an
//! arrow and a value. [`pair_size`] gives the bounding size of such a pair and
//! [`place_pair`] centers it inside a container. Both compose: the size of an
//! inner pair is an input to the outer one.
//!
//! ```rust
//! use skinkit_core::*;
//!
//! let image = Size::new(16.0, 16.0);
//! let text = Size::new(40.0, 12.0);
//! let block = pair_size(image, text, Some(4.0), Side::Right);
//! assert_eq!(block, Size::new(60.0, 16.0));
//!
//! let selector = Size::new(20.0, 20.0);
//! let outer = pair_size(selector, block, Some(5.0), Side::Right);
//! assert_eq!(outer, Size::new(85.0, 20.0));
//! ```
//!
//! `side` always names where the *second* object sits relative to the first.
//! Centering uses floor halving, so whole-pixel inputs give whole-pixel
//! placements.

use std::fmt;
use std::str::FromStr;

use crate::error::SkinError;
use crate::{Rect, Size, Vec2, dp_to_px, half};

/// Fallback separation between the two objects of a pair, in dp.
pub const DEFAULT_SEPARATION_DP: f32 = 6.0;

/// Where the second object of a pair goes relative to the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    #[default]
    Right,
    Up,
    Down,
}

impl Side {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Up => "up",
            Side::Down => "down",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = SkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            "up" => Ok(Side::Up),
            "down" => Ok(Side::Down),
            other => Err(SkinError::InvalidSide(other.to_string())),
        }
    }
}

/// Separation in px, falling back to [`DEFAULT_SEPARATION_DP`] when unset.
pub fn separation_px(separation: Option<f32>) -> f32 {
    separation.unwrap_or_else(|| dp_to_px(DEFAULT_SEPARATION_DP))
}

/// Bounding size of `a` and `b` laid out with `b` on `side` of `a`.
///
/// An absent object (zero width or height) contributes nothing, not even the
/// separation: the result is then exactly the other object's size.
pub fn pair_size(a: Size, b: Size, separation: Option<f32>, side: Side) -> Size {
    if b.is_empty() {
        return a;
    }
    if a.is_empty() {
        return b;
    }
    let sep = separation_px(separation);
    if side.is_horizontal() {
        Size {
            width: a.width + sep + b.width,
            height: a.height.max(b.height),
        }
    } else {
        Size {
            width: a.width.max(b.width),
            height: a.height + sep + b.height,
        }
    }
}

/// Top-left corners of the two objects of a pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PairPlacement {
    pub a: Vec2,
    pub b: Vec2,
}

impl PairPlacement {
    pub fn a_rect(&self, a: Size) -> Rect {
        Rect::from_origin_size(self.a, a)
    }

    pub fn b_rect(&self, b: Size) -> Rect {
        Rect::from_origin_size(self.b, b)
    }
}

fn center_on(start: f32, extent: f32, object: f32) -> f32 {
    start + half(extent) - half(object)
}

/// Places `a` and `b` inside `container`, centering the pair as a unit along
/// the axis implied by `side` and each member independently on the other.
///
/// When one object is absent the other is centered and the absent one's
/// origin is left at zero.
pub fn place_pair(
    container: Rect,
    a: Size,
    b: Size,
    separation: Option<f32>,
    side: Side,
) -> PairPlacement {
    let r = container;
    let mut out = PairPlacement::default();

    if b.is_empty() {
        out.a = Vec2 {
            x: center_on(r.x, r.w, a.width),
            y: center_on(r.y, r.h, a.height),
        };
        return out;
    }
    if a.is_empty() {
        out.b = Vec2 {
            x: center_on(r.x, r.w, b.width),
            y: center_on(r.y, r.h, b.height),
        };
        return out;
    }

    let sep = separation_px(separation);
    match side {
        Side::Right => {
            out.a.x = center_on(r.x, r.w, a.width + sep + b.width);
            out.a.y = center_on(r.y, r.h, a.height);
            out.b.x = out.a.x + a.width + sep;
            out.b.y = center_on(r.y, r.h, b.height);
        }
        Side::Left => {
            out.b.x = center_on(r.x, r.w, a.width + sep + b.width);
            out.b.y = center_on(r.y, r.h, b.height);
            out.a.x = out.b.x + b.width + sep;
            out.a.y = center_on(r.y, r.h, a.height);
        }
        Side::Up => {
            out.b.x = center_on(r.x, r.w, b.width);
            out.b.y = center_on(r.y, r.h, a.height + sep + b.height);
            out.a.x = center_on(r.x, r.w, a.width);
            out.a.y = out.b.y + b.height + sep;
        }
        Side::Down => {
            out.a.x = center_on(r.x, r.w, a.width);
            out.a.y = center_on(r.y, r.h, a.height + sep + b.height);
            out.b.x = center_on(r.x, r.w, b.width);
            out.b.y = out.a.y + a.height + sep;
        }
    }
    out
}

/// Separations for the two nesting levels of a control.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Separations {
    pub image_text: Option<f32>,
    pub selector_text: Option<f32>,
}

/// Sides for the two nesting levels of a control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sides {
    /// Side of the text relative to the image.
    pub image_text: Side,
    /// Side of the image+text block relative to the selector.
    pub selector_text: Side,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Padding {
    pub fn uniform(p: f32) -> Self {
        Self {
            horizontal: p,
            vertical: p,
        }
    }
}

/// Preferred size of a control before its first paint: image/text pair,
/// then selector/block pair, plus symmetric padding.
pub fn best_size(
    text: Size,
    image: Size,
    selector: Size,
    separations: Separations,
    sides: Sides,
    padding: Padding,
) -> Size {
    let block = pair_size(image, text, separations.image_text, sides.image_text);
    let whole = pair_size(selector, block, separations.selector_text, sides.selector_text);
    Size {
        width: whole.width + 2.0 * padding.horizontal,
        height: whole.height + 2.0 * padding.vertical,
    }
}
