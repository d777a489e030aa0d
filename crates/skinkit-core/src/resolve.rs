//! Paint profile resolution.
//!
//! [`resolve`] turns a [`ConfigRecord`] and an [`InteractionState`] into the
//! concrete parameters of one paint pass, in physical pixels. Profiles are
//! built fresh for every paint and never cached.

use crate::config::{ConfigRecord, CursorKind, ImageRef};
use crate::{Brush, Color, InteractionState, Size, dp_to_px, font_px};

/// Outline stroke. `None` means no stroke at all: painters skip the border
/// instead of drawing a zero-width line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Pen {
    #[default]
    None,
    Stroke {
        width: f32,
        color: Color,
    },
}

impl Pen {
    pub fn is_none(&self) -> bool {
        matches!(self, Pen::None)
    }

    pub fn width(&self) -> f32 {
        match self {
            Pen::None => 0.0,
            Pen::Stroke { width, .. } => *width,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Size in px.
    pub size: f32,
    pub face: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageSpec {
    pub image: ImageRef,
    /// Size in px.
    pub size: Size,
    pub channels: [f32; 4],
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaintProfile {
    pub state: InteractionState,
    pub pen: Pen,
    pub background: Brush,
    pub foreground: Brush,
    pub cursor: CursorKind,
    pub font: FontSpec,
    pub text_colour: Color,
    pub corner_radius: f32,
    pub image: Option<ImageSpec>,
    pub background_colour_active: Color,
    pub foreground_colour_active: Color,
}

/// Resolves the paint profile of `config` in `state`.
///
/// The Default state always uses the arrow cursor; other states use the
/// configured cursor, or the arrow when none is configured.
pub fn resolve(config: &ConfigRecord, state: InteractionState) -> PaintProfile {
    let k = dp_to_px(1.0);

    let border = *config.border_width.get(state);
    let pen = if border == 0.0 {
        Pen::None
    } else {
        Pen::Stroke {
            width: border * k,
            color: *config.border_colour.get(state),
        }
    };

    let background = match config.background_gradient.get(state) {
        Some(g) => g.scaled(k).into(),
        None => Brush::Solid(*config.background_colour.get(state)),
    };
    let foreground = match config.foreground_gradient.get(state) {
        Some(g) => g.scaled(k).into(),
        None => Brush::Solid(*config.foreground_colour.get(state)),
    };

    let cursor = match state {
        InteractionState::Default => CursorKind::Arrow,
        _ => config.cursor.get(state).unwrap_or_default(),
    };

    let image = config.image.get(state).as_ref().map(|image| ImageSpec {
        image: image.clone(),
        size: config.image_size.get(state).scaled(k),
        channels: *config.image_channels.get(state),
    });

    PaintProfile {
        state,
        pen,
        background,
        foreground,
        cursor,
        font: FontSpec {
            size: font_px(*config.text_font_size.get(state)),
            face: config.text_font_face.get(state).clone(),
        },
        text_colour: *config.text_colour.get(state),
        corner_radius: *config.corner_radius.get(state) * k,
        image,
        background_colour_active: *config.background_colour_active.get(state),
        foreground_colour_active: *config.foreground_colour_active.get(state),
    }
}

/// Resolves from a state name, failing fast on anything but the four
/// recognised names.
pub fn resolve_named(config: &ConfigRecord, state: &str) -> crate::Result<PaintProfile> {
    Ok(resolve(config, state.parse()?))
}
