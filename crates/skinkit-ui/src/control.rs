//! # Control base
//!
//! Every widget wraps a [`Control`]: its config record, its interaction
//! machine, its bounds in px and its label. The base turns raw pointer
//! positions into enter/leave against the bounds, resolves the paint profile
//! for the current state and draws the image+text block most controls share.
//!
//! Hosts drive widgets through [`Widget`] in a fixed order each frame:
//! `handle` for every event, then `layout`, then `paint`.

use skinkit_core::{
    Behavior, ConfigOverrides, ConfigRecord, ConfigWarning, ControlType, InteractionState,
    Interaction, PaintProfile, PointerEvent, PointerEventKind, RadioKey, Rect, Scene, SceneNode,
    Size, Transition, dp_to_px, pair_size, place_pair, resolve,
};

use crate::measure::TextMeasure;

pub struct Control {
    kind: ControlType,
    config: ConfigRecord,
    interaction: Interaction,
    bounds: Rect,
    label: String,
}

impl Control {
    /// Defaults for `kind` with `overrides` on top. Rejected overrides come
    /// back as warnings; the control is usable either way.
    pub fn new(
        kind: ControlType,
        label: impl Into<String>,
        overrides: &ConfigOverrides,
        behavior: Behavior,
    ) -> (Self, Vec<ConfigWarning>) {
        let (config, warnings) = ConfigRecord::create(kind, overrides);
        (Self::with_config(kind, label, config, behavior), warnings)
    }

    /// Takes a private copy of a shared template.
    pub fn from_template(
        kind: ControlType,
        label: impl Into<String>,
        template: &ConfigRecord,
        overrides: &ConfigOverrides,
        behavior: Behavior,
    ) -> (Self, Vec<ConfigWarning>) {
        let (config, warnings) = ConfigRecord::from_template(template, overrides);
        (Self::with_config(kind, label, config, behavior), warnings)
    }

    pub fn with_config(
        kind: ControlType,
        label: impl Into<String>,
        config: ConfigRecord,
        behavior: Behavior,
    ) -> Self {
        Self {
            kind,
            config,
            interaction: Interaction::new(behavior),
            bounds: Rect::default(),
            label: label.into(),
        }
    }

    pub fn kind(&self) -> ControlType {
        self.kind
    }

    pub fn config(&self) -> &ConfigRecord {
        &self.config
    }

    /// Overlays `overrides` on this control's record.
    pub fn update_config(&mut self, overrides: &ConfigOverrides) -> Vec<ConfigWarning> {
        self.config.update(overrides)
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn interaction_mut(&mut self) -> &mut Interaction {
        &mut self.interaction
    }

    pub fn state(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn value(&self) -> bool {
        self.interaction.value()
    }

    /// Returns the radio member that lost the selection, if any.
    pub fn set_value(&mut self, value: bool) -> Option<RadioKey> {
        self.interaction.set_value(value)
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_enabled(&mut self, enabled: bool) -> Transition {
        self.interaction.set_enabled(enabled)
    }

    pub fn enable(&mut self) -> Transition {
        self.interaction.enable()
    }

    pub fn disable(&mut self) -> Transition {
        self.interaction.disable()
    }

    pub fn is_enabled(&self) -> bool {
        self.interaction.is_enabled()
    }

    pub fn accepts_focus(&self) -> bool {
        self.interaction.accepts_focus()
    }

    /// Paint profile for the current state.
    pub fn profile(&self) -> PaintProfile {
        resolve(&self.config, self.state())
    }

    pub fn profile_for(&self, state: InteractionState) -> PaintProfile {
        resolve(&self.config, state)
    }

    /// Feeds one pointer event through the interaction machine. Positioned
    /// events first update hover against the bounds, so a release outside
    /// the control never activates it.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Transition {
        let mut t = Transition::default();
        match event.event {
            PointerEventKind::Move | PointerEventKind::Down(_) | PointerEventKind::Up(_) => {
                t = self.track_hover(event);
                if event.event == PointerEventKind::Move {
                    return t;
                }
            }
            _ => {}
        }
        let inner = self.interaction.handle(event);
        Transition {
            repaint: t.repaint || inner.repaint,
            ..inner
        }
    }

    fn track_hover(&mut self, event: &PointerEvent) -> Transition {
        let inside = self.bounds.contains(event.position);
        let kind = match (inside, self.interaction.is_hovered()) {
            (true, false) => PointerEventKind::Enter,
            (false, true) => PointerEventKind::Leave,
            _ => return Transition::default(),
        };
        self.interaction.handle(&PointerEvent { event: kind, ..*event })
    }

    /// Side padding: the widest border over all states, in px.
    pub fn side_padding(&self) -> f32 {
        dp_to_px(self.config.max_border_width())
    }

    /// Image extent reserved in layout for `profile`.
    pub fn image_size(&self, profile: &PaintProfile) -> Size {
        if self.config.image_use_max_dimensions {
            return self.config.max_image_size().scaled(dp_to_px(1.0));
        }
        profile.image.as_ref().map_or(Size::ZERO, |i| i.size)
    }

    pub fn text_size(&self, text: &str, profile: &PaintProfile, measure: &dyn TextMeasure) -> Size {
        if text.trim().is_empty() {
            return Size::ZERO;
        }
        measure.measure(text, &profile.font)
    }

    /// Size of the image+text block for `text`.
    pub fn block_size(&self, text: &str, profile: &PaintProfile, measure: &dyn TextMeasure) -> Size {
        pair_size(
            self.image_size(profile),
            self.text_size(text, profile, measure),
            px_separation(self.config.image_text_separation),
            self.config.image_text_side,
        )
    }

    /// Draws the image and `text` centered in `rect`, text on
    /// `image_text_side` of the image. Blank text and zero-sized images are
    /// skipped.
    pub fn draw_block(
        &self,
        scene: &mut Scene,
        rect: Rect,
        text: &str,
        profile: &PaintProfile,
        measure: &dyn TextMeasure,
    ) {
        let image = self.image_size(profile);
        let text_size = self.text_size(text, profile, measure);
        let p = place_pair(
            rect,
            image,
            text_size,
            px_separation(self.config.image_text_separation),
            self.config.image_text_side,
        );

        if let Some(img) = profile.image.as_ref().filter(|i| !i.size.is_empty()) {
            scene.push(SceneNode::Image {
                rect: p.a_rect(img.size),
                image: img.image.clone(),
                channels: img.channels,
            });
        }
        if !text_size.is_empty() {
            scene.push(SceneNode::Text {
                rect: p.b_rect(text_size),
                text: text.to_string(),
                color: profile.text_colour,
                size: profile.font.size,
                face: profile.font.face.clone(),
            });
        }
    }
}

/// Configured separation in px; `None` keeps the layout fallback.
pub fn px_separation(separation_dp: Option<f32>) -> Option<f32> {
    separation_dp.map(dp_to_px)
}

/// What a host needs from every control.
pub trait Widget {
    fn control(&self) -> &Control;

    fn control_mut(&mut self) -> &mut Control;

    /// Preferred size in px before the first paint.
    fn best_size(&self, measure: &dyn TextMeasure) -> Size;

    fn paint(&self, scene: &mut Scene, measure: &dyn TextMeasure);

    fn handle(&mut self, event: &PointerEvent) -> Transition {
        self.control_mut().handle_pointer(event)
    }

    /// Lays out anything that depends on text metrics (popups, content).
    fn layout(&mut self, _measure: &dyn TextMeasure) {}

    fn set_bounds(&mut self, bounds: Rect) {
        self.control_mut().set_bounds(bounds);
    }

    fn bounds(&self) -> Rect {
        self.control().bounds()
    }
}
