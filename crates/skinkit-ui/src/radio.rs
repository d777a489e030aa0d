use skinkit_core::{
    Behavior, Brush, ConfigOverrides, ConfigRecord, ConfigWarning, ControlType, Padding, Pen,
    RadioGroupBuilder, RadioKey, RadioMember, Rect, Scene, SceneNode, Separations, Sides, Size,
    best_size, dp_to_px, place_pair,
};

use crate::control::{Control, Widget, px_separation};
use crate::measure::TextMeasure;

/// Radio button. Clicking selects it and clears the rest of its group.
pub struct RadioButton {
    control: Control,
}

impl RadioButton {
    pub fn new(
        label: impl Into<String>,
        member: RadioMember,
        overrides: &ConfigOverrides,
    ) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) = Control::new(
            ControlType::RadioButton,
            label,
            overrides,
            Behavior::Radio(member),
        );
        (Self { control }, warnings)
    }

    /// Joins the builder's current group, or opens a new one when
    /// `starts_group` is set.
    pub fn grouped(
        label: impl Into<String>,
        groups: &mut RadioGroupBuilder,
        starts_group: bool,
        overrides: &ConfigOverrides,
    ) -> (Self, Vec<ConfigWarning>) {
        Self::new(label, groups.member(starts_group), overrides)
    }

    pub fn from_template(
        label: impl Into<String>,
        member: RadioMember,
        template: &ConfigRecord,
        overrides: &ConfigOverrides,
    ) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) = Control::from_template(
            ControlType::RadioButton,
            label,
            template,
            overrides,
            Behavior::Radio(member),
        );
        (Self { control }, warnings)
    }

    pub fn is_selected(&self) -> bool {
        self.control.value()
    }

    /// Selects this button and returns the group member that lost the
    /// selection, which needs a repaint as well.
    pub fn select(&mut self) -> Option<RadioKey> {
        self.control.set_value(true)
    }

    /// This button's key in its group.
    pub fn key(&self) -> Option<RadioKey> {
        match self.control.interaction().behavior() {
            Behavior::Radio(m) => Some(m.key()),
            _ => None,
        }
    }

    pub fn selector_size(&self) -> Size {
        let d = dp_to_px(self.control.config().radiobutton_diameter);
        Size::new(d, d)
    }

    /// Dot radius in px: diameter over the divisor, integer division in dp.
    pub fn dot_radius(&self) -> f32 {
        let cfg = self.control.config();
        let divisor = cfg.radio_dot_divisor.max(1.0);
        dp_to_px((cfg.radiobutton_diameter / divisor).floor())
    }

    pub fn selector_rect(&self, measure: &dyn TextMeasure) -> (Rect, Rect) {
        let c = &self.control;
        let cfg = c.config();
        let profile = c.profile();
        let selector = self.selector_size();
        let block = c.block_size(c.label(), &profile, measure);
        let p = place_pair(
            c.bounds(),
            selector,
            block,
            px_separation(cfg.selector_text_separation),
            cfg.selector_text_side,
        );
        (p.a_rect(selector), p.b_rect(block))
    }
}

impl Widget for RadioButton {
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
            self.selector_size(),
            Separations {
                image_text: px_separation(cfg.image_text_separation),
                selector_text: px_separation(cfg.selector_text_separation),
            },
            Sides {
                image_text: cfg.image_text_side,
                selector_text: cfg.selector_text_side,
            },
            Padding::uniform(c.side_padding()),
        )
    }

    fn paint(&self, scene: &mut Scene, measure: &dyn TextMeasure) {
        let profile = self.control.profile();
        let (selector, block) = self.selector_rect(measure);
        let selected = self.is_selected();

        let fill = if selected {
            Brush::Solid(profile.background_colour_active)
        } else {
            profile.background.clone()
        };
        scene.push(SceneNode::Ellipse {
            rect: selector,
            brush: fill,
            pen: profile.pen,
        });

        if selected {
            let r = self.dot_radius();
            let c = selector.center();
            scene.push(SceneNode::Ellipse {
                rect: Rect::new(c.x - r, c.y - r, 2.0 * r, 2.0 * r),
                brush: profile.foreground.clone(),
                pen: Pen::None,
            });
        }

        self.control
            .draw_block(scene, block, self.control.label(), &profile, measure);
    }
}
