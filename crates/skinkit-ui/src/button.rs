use skinkit_core::{
    Behavior, ConfigOverrides, ConfigRecord, ConfigWarning, ControlType, Padding, Scene,
    Separations, Side, Sides, Size, best_size, dp_to_px,
};

use crate::control::{Control, Widget, px_separation};
use crate::measure::TextMeasure;

/// Push button. A completed click emits `Notification::Activated`.
pub struct Button {
    control: Control,
}

impl Button {
    pub fn new(label: impl Into<String>, overrides: &ConfigOverrides) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) =
            Control::new(ControlType::Button, label, overrides, Behavior::Momentary);
        (Self { control }, warnings)
    }

    pub fn from_template(
        label: impl Into<String>,
        template: &ConfigRecord,
        overrides: &ConfigOverrides,
    ) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) = Control::from_template(
            ControlType::Button,
            label,
            template,
            overrides,
            Behavior::Momentary,
        );
        (Self { control }, warnings)
    }
}

impl Widget for Button {
    fn control(&self) -> &Control {
        &self.control
    }

    fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    fn best_size(&self, measure: &dyn TextMeasure) -> Size {
        let c = &self.control;
        let cfg = c.config();
        let profile = c.profile();
        best_size(
            c.text_size(c.label(), &profile, measure),
            c.image_size(&profile),
            Size::ZERO,
            Separations {
                image_text: px_separation(cfg.image_text_separation),
                selector_text: None,
            },
            Sides {
                image_text: cfg.image_text_side,
                selector_text: Side::Right,
            },
            Padding {
                horizontal: dp_to_px(cfg.padding_horizontal),
                vertical: dp_to_px(cfg.padding_vertical),
            },
        )
    }

    fn paint(&self, scene: &mut Scene, measure: &dyn TextMeasure) {
        let c = &self.control;
        let profile = c.profile();
        let bounds = c.bounds();
        scene.fill_rounded(
            bounds,
            profile.background.clone(),
            profile.pen,
            profile.corner_radius,
        );
        c.draw_block(scene, bounds, c.label(), &profile, measure);
    }
}
