//! Labelled frame around a group of controls.
//!
//! The frame's top edge runs through the middle of the label line, and the
//! label sits centered on it over a patch of the parent's background. Like a
//! panel it has only a Default state.

use skinkit_core::{
    Behavior, Brush, Color, ConfigOverrides, ConfigRecord, ConfigWarning, ControlType,
    InteractionState, PaintProfile, Pen, PointerEvent, Rect, Scene, SceneNode, Size, Transition,
    dp_to_px, half,
};

use crate::control::{Control, Widget};
use crate::measure::TextMeasure;

/// Extra parent background on each side of the label, in dp.
const LABEL_PATCH_DP: f32 = 5.0;

pub struct StaticBox {
    control: Control,
    parent_background: Color,
}

impl StaticBox {
    pub fn new(label: impl Into<String>, overrides: &ConfigOverrides) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) =
            Control::new(ControlType::StaticBox, label, overrides, Behavior::Momentary);
        (Self::with_control(control), warnings)
    }

    pub fn from_template(
        label: impl Into<String>,
        template: &ConfigRecord,
        overrides: &ConfigOverrides,
    ) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) = Control::from_template(
            ControlType::StaticBox,
            label,
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

    pub fn set_parent_background(&mut self, colour: Color) {
        self.parent_background = colour;
    }

    fn profile(&self) -> PaintProfile {
        self.control.profile_for(InteractionState::Default)
    }

    fn label_height(&self, profile: &PaintProfile, measure: &dyn TextMeasure) -> f32 {
        self.control
            .text_size(self.control.label(), profile, measure)
            .height
    }

    /// The outlined frame: inset by the border width on the sides and
    /// bottom, by half the label height at the top.
    pub fn frame_rect(&self, measure: &dyn TextMeasure) -> Rect {
        let profile = self.profile();
        let b = self.control.bounds();
        let ps = dp_to_px(self.control.config().border_width.default);
        let pt = half(self.label_height(&profile, measure));
        Rect::new(
            b.x + ps,
            b.y + pt,
            (b.w - 2.0 * ps).max(0.0),
            (b.h - pt - ps).max(0.0),
        )
    }

    /// Where children go: inside the frame, below the label line.
    pub fn content_rect(&self, measure: &dyn TextMeasure) -> Rect {
        let profile = self.profile();
        let b = self.control.bounds();
        let ps = dp_to_px(self.control.config().border_width.default);
        let pad = dp_to_px(self.control.config().padding_all_sides);
        let th = self.label_height(&profile, measure);
        let side = ps + pad;
        Rect::new(
            b.x + side,
            b.y + th,
            (b.w - 2.0 * side).max(0.0),
            (b.h - th - side).max(0.0),
        )
    }

    /// Size that fits `content` plus the frame and label.
    pub fn fit_content(&self, content: Size, measure: &dyn TextMeasure) -> Size {
        let profile = self.profile();
        let ps = dp_to_px(self.control.config().border_width.default);
        let pad = dp_to_px(self.control.config().padding_all_sides);
        let label = self
            .control
            .text_size(self.control.label(), &profile, measure);
        let label_w = label.width + 2.0 * dp_to_px(LABEL_PATCH_DP) + 2.0 * ps;
        Size::new(
            (content.width + 2.0 * (ps + pad)).max(label_w),
            content.height + label.height + ps + pad,
        )
    }
}

impl Widget for StaticBox {
    fn control(&self) -> &Control {
        &self.control
    }

    fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    fn best_size(&self, measure: &dyn TextMeasure) -> Size {
        self.fit_content(Size::ZERO, measure)
    }

    fn handle(&mut self, _event: &PointerEvent) -> Transition {
        Transition::default()
    }

    fn paint(&self, scene: &mut Scene, measure: &dyn TextMeasure) {
        let c = &self.control;
        let bounds = c.bounds();
        let profile = self.profile();
        let parent = Brush::Solid(self.parent_background);

        scene.fill_rounded(bounds, parent.clone(), Pen::None, 0.0);
        scene.fill_rounded(
            self.frame_rect(measure),
            profile.background.clone(),
            profile.pen,
            profile.corner_radius,
        );

        let ts = c.text_size(c.label(), &profile, measure);
        if ts.is_empty() {
            return;
        }
        let pt = half(ts.height);
        let x = bounds.x + half(bounds.w) - half(ts.width);
        let y = bounds.y + pt - half(ts.height);
        let lateral = dp_to_px(LABEL_PATCH_DP);
        scene.fill_rounded(
            Rect::new(x - lateral, y, ts.width + 2.0 * lateral, ts.height),
            parent,
            Pen::None,
            0.0,
        );
        scene.push(SceneNode::Text {
            rect: Rect::new(x, y, ts.width, ts.height),
            text: c.label().to_string(),
            color: profile.text_colour,
            size: profile.font.size,
            face: profile.font.face.clone(),
        });
    }
}
