use skinkit_core::{
    Behavior, Brush, Color, ConfigOverrides, ConfigRecord, ConfigValue, ConfigWarning,
    ControlType, InteractionState, Pen, PointerEvent, Rect, Scene, Size, Transition,
};

use crate::control::{Control, Widget};
use crate::measure::TextMeasure;

/// Plain container surface. Panels have no interaction states: they always
/// paint from the Default profile and ignore pointer input.
pub struct Panel {
    control: Control,
    parent_background: Color,
}

impl Panel {
    pub fn new(overrides: &ConfigOverrides) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) =
            Control::new(ControlType::Panel, "", overrides, Behavior::Momentary);
        (Self::with_control(control), warnings)
    }

    pub fn from_template(
        template: &ConfigRecord,
        overrides: &ConfigOverrides,
    ) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) = Control::from_template(
            ControlType::Panel,
            "",
            template,
            overrides,
            Behavior::Momentary,
        );
        (Self::with_control(control), warnings)
    }

    fn with_control(control: Control) -> Self {
        Self {
            control,
            parent_background: Color::WHITE,
        }
    }

    /// Colour behind the panel's corners.
    pub fn set_parent_background(&mut self, colour: Color) {
        self.parent_background = colour;
    }

    pub fn background_colour(&self) -> Color {
        self.control.config().background_colour.default
    }

    pub fn set_background_colour(&mut self, colour: Color) {
        self.set_default("background_colour_default", colour);
    }

    pub fn set_border_colour(&mut self, colour: Color) {
        self.set_default("border_colour_default", colour);
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.set_default("border_width_default", width);
    }

    fn set_default(&mut self, key: &str, value: impl Into<ConfigValue>) {
        let warnings = self
            .control
            .update_config(&ConfigOverrides::new().set(key, value));
        debug_assert!(warnings.is_empty(), "{warnings:?}");
    }
}

impl Widget for Panel {
    fn control(&self) -> &Control {
        &self.control
    }

    fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    fn best_size(&self, _measure: &dyn TextMeasure) -> Size {
        let pen = self.control.profile_for(InteractionState::Default).pen;
        Size::new(2.0 * pen.width(), 2.0 * pen.width())
    }

    fn handle(&mut self, _event: &PointerEvent) -> Transition {
        Transition::default()
    }

    fn paint(&self, scene: &mut Scene, _measure: &dyn TextMeasure) {
        let bounds = self.control.bounds();
        let profile = self.control.profile_for(InteractionState::Default);
        scene.fill_rounded(bounds, Brush::Solid(self.parent_background), Pen::None, 0.0);
        scene.fill_rounded(
            bounds,
            profile.background,
            profile.pen,
            profile.corner_radius,
        );
    }
}
