use crate::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let s = hex.trim().trim_start_matches('#');
        if !s.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        match s.len() {
            6 => Some(Color(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Color(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    pub fn from_hex(hex: &str) -> Self {
        Self::parse_hex(hex).unwrap_or(Color::BLACK)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    pub fn is_transparent(self) -> bool {
        self.3 == 0
    }
}

/// Linear gradient between two points given in control-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    pub start: Vec2,
    pub end: Vec2,
    pub start_color: Color,
    pub end_color: Color,
}

impl Gradient {
    pub fn new(start: Vec2, end: Vec2, start_color: Color, end_color: Color) -> Self {
        Self {
            start,
            end,
            start_color,
            end_color,
        }
    }

    pub fn scaled(self, k: f32) -> Self {
        Self {
            start: Vec2 {
                x: self.start.x * k,
                y: self.start.y * k,
            },
            end: Vec2 {
                x: self.end.x * k,
                y: self.end.y * k,
            },
            ..self
        }
    }
}

/// Brush for filling shapes.
///
/// Widgets talk in terms of `Brush` rather than raw `Color` so that a
/// configured gradient and a plain colour travel the same path to the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    /// Solid color fill
    Solid(Color),

    /// Linear gradient from `start` to `end` in local coordinates of the
    /// node being drawn.
    Linear {
        start: Vec2,
        end: Vec2,
        start_color: Color,
        end_color: Color,
    },
}

impl Brush {
    /// A representative colour (the start colour for gradients).
    pub fn base_color(&self) -> Color {
        match self {
            Brush::Solid(c) => *c,
            Brush::Linear { start_color, .. } => *start_color,
        }
    }
}

impl From<Color> for Brush {
    fn from(c: Color) -> Self {
        Brush::Solid(c)
    }
}

impl From<Gradient> for Brush {
    fn from(g: Gradient) -> Self {
        Brush::Linear {
            start: g.start,
            end: g.end,
            start_color: g.start_color,
            end_color: g.end_color,
        }
    }
}
