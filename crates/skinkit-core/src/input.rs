use crate::Vec2;
use crate::scroll::Axis;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Enter,
    Leave,
    /// The host took pointer capture away (focus change, modal, ...).
    CaptureLost,
}

/// A pointer event with `position` in host coordinates, the same space as
/// control bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub event: PointerEventKind,
    pub position: Vec2,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(event: PointerEventKind, position: Vec2) -> Self {
        Self {
            id: PointerId::default(),
            event,
            position,
            modifiers: Modifiers::default(),
        }
    }

    pub fn is_primary_down(&self) -> bool {
        matches!(self.event, PointerEventKind::Down(PointerButton::Primary))
    }

    pub fn is_primary_up(&self) -> bool {
        matches!(self.event, PointerEventKind::Up(PointerButton::Primary))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win key on Windows
}

/// Mouse wheel notch. `rotation` follows the common 120-per-notch convention,
/// positive away from the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub axis: Axis,
    pub rotation: f32,
    pub position: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Wheel(WheelEvent),
}
