pub use crate::color::{Brush, Color, Gradient};
pub use crate::config::{
    ConfigOverrides, ConfigRecord, ConfigValue, ConfigWarning, ControlType, CursorKind, ImageRef,
    ScrollAxes, ScrollbarType,
};
pub use crate::error::SkinError;
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::input::*;
pub use crate::interaction::{
    Behavior, Capture, Interaction, Notification, RadioGroup, RadioGroupBuilder, RadioMember,
    Transition,
};
pub use crate::layout::{Padding, Separations, Side, Sides, best_size, pair_size, place_pair};
pub use crate::locals::{Density, TextScale, density, dp_to_px, font_px, with_density};
pub use crate::resolve::{PaintProfile, Pen, resolve};
pub use crate::scene::{Scene, SceneNode};
pub use crate::scroll::{Axis, ScrollAxis, ScrollGeometry, wheel_target};
pub use crate::state::{InteractionState, PerState};
