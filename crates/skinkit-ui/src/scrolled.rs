//! # Scrolled panel
//!
//! A viewport over a larger content area with a vertical scrollbar on the
//! right and a horizontal one at the bottom, each shown only while its axis
//! overflows. Thumb sizing and drag math come from the core
//! [`ScrollGeometry`]; this widget owns the scroll primitive, which keeps
//! positions (in steps) inside `[0, (content - viewport) / step]`.
//!
//! Each scrollbar has its own [`Interaction`], so hover and pressed colours
//! apply to the bar under the pointer, not to the whole panel.

use skinkit_core::{
    Axis, Behavior, ConfigOverrides, ConfigRecord, ConfigWarning, ControlType, Interaction,
    InteractionState, Pen, PointerEvent, PointerEventKind, Rect, Scene, SceneNode, ScrollAxes,
    ScrollGeometry, ScrollbarType, Size, Transition, Vec2, VisibilityChange, WheelEvent, dp_to_px,
    half, wheel_target,
};

use crate::control::{Control, Widget};
use crate::measure::TextMeasure;

pub struct ScrolledPanel {
    control: Control,
    geometry: ScrollGeometry,
    content: Size,
    viewport: Size,
    // scroll position in steps, per axis
    steps: Vec2,
    bar_x: Interaction,
    bar_y: Interaction,
}

impl ScrolledPanel {
    pub fn new(overrides: &ConfigOverrides) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) = Control::new(
            ControlType::ScrolledWindow,
            "",
            overrides,
            Behavior::Momentary,
        );
        (Self::from_control(control), warnings)
    }

    pub fn from_template(
        template: &ConfigRecord,
        overrides: &ConfigOverrides,
    ) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) = Control::from_template(
            ControlType::ScrolledWindow,
            "",
            template,
            overrides,
            Behavior::Momentary,
        );
        (Self::from_control(control), warnings)
    }

    fn from_control(control: Control) -> Self {
        let cfg = control.config();
        let geometry = ScrollGeometry::new(
            dp_to_px(cfg.scroll_units_x),
            dp_to_px(cfg.scroll_units_y),
        );
        Self {
            control,
            geometry,
            content: Size::ZERO,
            viewport: Size::ZERO,
            steps: Vec2::ZERO,
            bar_x: Interaction::momentary(),
            bar_y: Interaction::momentary(),
        }
    }

    pub fn geometry(&self) -> &ScrollGeometry {
        &self.geometry
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    pub fn set_content_size(&mut self, content: Size) -> VisibilityChange {
        self.content = content;
        self.relayout()
    }

    /// Visible content area in host coordinates.
    pub fn viewport(&self) -> Rect {
        Rect::from_origin_size(self.control.bounds().origin(), self.viewport)
    }

    pub fn bar_width(&self) -> f32 {
        dp_to_px(self.control.config().scrollbar_width)
    }

    fn axis_enabled(&self, axis: Axis) -> bool {
        let axes = self.control.config().scroll_axes;
        match axis {
            Axis::Horizontal => axes.contains(ScrollAxes::X),
            Axis::Vertical => axes.contains(ScrollAxes::Y),
        }
    }

    /// Recomputes the viewport, the bars and their thumbs after a bounds,
    /// content or config change, then re-clamps the scroll position.
    pub fn relayout(&mut self) -> VisibilityChange {
        let bounds = self.control.bounds();
        let bw = self.bar_width();
        let x_on = self.axis_enabled(Axis::Horizontal);
        let y_on = self.axis_enabled(Axis::Vertical);

        let mut vw = bounds.w;
        let mut vh = bounds.h;
        let show_y = y_on && self.content.height > vh;
        if show_y {
            vw -= bw;
        }
        if x_on && self.content.width > vw {
            vh -= bw;
            // the horizontal bar can push the vertical one into view
            if !show_y && y_on && self.content.height > vh {
                vw -= bw;
            }
        }
        self.viewport = Size::new(vw.max(0.0), vh.max(0.0));

        let cfg = self.control.config();
        self.geometry.x.set_units_per_step(dp_to_px(cfg.scroll_units_x));
        self.geometry.y.set_units_per_step(dp_to_px(cfg.scroll_units_y));

        let content = Size::new(
            if x_on { self.content.width } else { 0.0 },
            if y_on { self.content.height } else { 0.0 },
        );
        let change = self.geometry.relayout(self.viewport, content, self.viewport);
        if change.any() {
            log::debug!(
                "scrollbars x={} y={} (viewport {:?}, content {:?})",
                self.geometry.x.is_visible(),
                self.geometry.y.is_visible(),
                self.viewport,
                self.content
            );
        }

        let (sx, sy) = (self.steps.x, self.steps.y);
        self.scroll_to(Axis::Horizontal, sx);
        self.scroll_to(Axis::Vertical, sy);
        change
    }

    pub fn max_steps(&self, axis: Axis) -> f32 {
        self.geometry.axis(axis).max_steps()
    }

    /// Scroll position in steps.
    pub fn position(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.steps.x,
            Axis::Vertical => self.steps.y,
        }
    }

    /// Moves `axis` to `steps`, clamped to the scrollable range. Positions
    /// inside the range snap down to whole steps; at or past the end the
    /// content stops exactly at its last px. Returns true when the position
    /// changed.
    pub fn scroll_to(&mut self, axis: Axis, steps: f32) -> bool {
        let max = self.max_steps(axis);
        let at_end = steps >= max;
        let clamped = if at_end { max } else { steps.max(0.0).floor() };
        let slot = match axis {
            Axis::Horizontal => &mut self.steps.x,
            Axis::Vertical => &mut self.steps.y,
        };
        let changed = *slot != clamped;
        *slot = clamped;
        let a = self.geometry.axis_mut(axis);
        let px = if at_end {
            a.max_offset()
        } else {
            clamped * a.units_per_step()
        };
        a.set_position(px);
        if changed {
            log::trace!("scroll {axis:?} -> {clamped} steps ({px}px)");
        }
        changed
    }

    /// Scroll offset in px.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.geometry.x.position(), self.geometry.y.position())
    }

    /// Where the content's origin lands in host coordinates.
    pub fn content_origin(&self) -> Vec2 {
        let o = self.control.bounds().origin();
        let off = self.offset();
        Vec2::new(o.x - off.x, o.y - off.y)
    }

    pub fn track_rect(&self, axis: Axis) -> Option<Rect> {
        if !self.geometry.axis(axis).is_visible() {
            return None;
        }
        let b = self.control.bounds();
        let bw = self.bar_width();
        Some(match axis {
            Axis::Vertical => Rect::new(b.x + self.viewport.width, b.y, bw, self.viewport.height),
            Axis::Horizontal => Rect::new(b.x, b.y + self.viewport.height, self.viewport.width, bw),
        })
    }

    /// Thumb extent over the full bar thickness.
    pub fn thumb_rect(&self, axis: Axis) -> Option<Rect> {
        let track = self.track_rect(axis)?;
        let a = self.geometry.axis(axis);
        Some(match axis {
            Axis::Vertical => Rect::new(track.x, track.y + a.thumb_offset(), track.w, a.thumb_size()),
            Axis::Horizontal => {
                Rect::new(track.x + a.thumb_offset(), track.y, a.thumb_size(), track.h)
            }
        })
    }

    fn along(&self, axis: Axis, p: Vec2) -> f32 {
        let track = self.track_rect(axis).unwrap_or_default();
        match axis {
            Axis::Vertical => p.y - track.y,
            Axis::Horizontal => p.x - track.x,
        }
    }

    fn bar(&self, axis: Axis) -> &Interaction {
        match axis {
            Axis::Horizontal => &self.bar_x,
            Axis::Vertical => &self.bar_y,
        }
    }

    fn bar_mut(&mut self, axis: Axis) -> &mut Interaction {
        match axis {
            Axis::Horizontal => &mut self.bar_x,
            Axis::Vertical => &mut self.bar_y,
        }
    }

    pub fn bar_state(&self, axis: Axis) -> InteractionState {
        if !self.control.is_enabled() {
            return InteractionState::Disabled;
        }
        self.bar(axis).state()
    }

    fn dragging(&self) -> Option<Axis> {
        [Axis::Vertical, Axis::Horizontal]
            .into_iter()
            .find(|a| self.geometry.axis(*a).is_dragging())
    }

    fn bar_event(&mut self, axis: Axis, kind: PointerEventKind, at: Vec2) -> Transition {
        self.bar_mut(axis).handle(&PointerEvent::new(kind, at))
    }

    fn merge(a: Transition, b: Transition) -> Transition {
        Transition {
            repaint: a.repaint || b.repaint,
            capture: a.capture.or(b.capture),
            notification: a.notification.or(b.notification),
            deselected: a.deselected.or(b.deselected),
        }
    }

    /// Disabling also ends any thumb drag and releases the bar's capture.
    pub fn set_enabled(&mut self, enabled: bool) -> Transition {
        if !enabled {
            self.geometry.end_drags();
        }
        let x = self.bar_x.set_enabled(enabled);
        let y = self.bar_y.set_enabled(enabled);
        let panel = self.control.set_enabled(enabled);
        Self::merge(panel, Self::merge(x, y))
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Transition {
        if !self.control.is_enabled() {
            return Transition::default();
        }
        let at = event.position;
        match event.event {
            PointerEventKind::Down(_) if event.is_primary_down() => {
                for axis in [Axis::Vertical, Axis::Horizontal] {
                    if self.thumb_rect(axis).is_some_and(|t| t.contains(at)) {
                        let enter = if self.bar(axis).is_hovered() {
                            Transition::default()
                        } else {
                            self.bar_event(axis, PointerEventKind::Enter, at)
                        };
                        let press = self.bar_mut(axis).handle(event);
                        let along = self.along(axis, at);
                        self.geometry.axis_mut(axis).begin_drag(along);
                        return Self::merge(enter, press);
                    }
                }
                Transition::default()
            }
            PointerEventKind::Move => {
                if let Some(axis) = self.dragging() {
                    let along = self.along(axis, at);
                    let moved = match self.geometry.axis(axis).drag_to(along) {
                        Some(steps) => self.scroll_to(axis, steps),
                        None => false,
                    };
                    return Transition {
                        repaint: moved,
                        ..Default::default()
                    };
                }
                let mut t = Transition::default();
                for axis in [Axis::Vertical, Axis::Horizontal] {
                    let over = self.track_rect(axis).is_some_and(|r| r.contains(at));
                    let hovered = self.bar(axis).is_hovered();
                    if over != hovered {
                        let kind = if over {
                            PointerEventKind::Enter
                        } else {
                            PointerEventKind::Leave
                        };
                        t = Self::merge(t, self.bar_event(axis, kind, at));
                    }
                }
                t
            }
            PointerEventKind::Up(_) if event.is_primary_up() => {
                let mut t = Transition::default();
                for axis in [Axis::Vertical, Axis::Horizontal] {
                    self.geometry.axis_mut(axis).end_drag();
                    let up = self.bar_mut(axis).handle(event);
                    let leave = self.bar_event(axis, PointerEventKind::Leave, at);
                    t = Self::merge(t, Self::merge(up, leave));
                }
                // a drag release is not a click
                t.notification = None;
                t
            }
            PointerEventKind::CaptureLost => {
                self.geometry.end_drags();
                let mut t = Transition::default();
                for axis in [Axis::Vertical, Axis::Horizontal] {
                    let lost = self.bar_mut(axis).handle(event);
                    let leave = self.bar_event(axis, PointerEventKind::Leave, at);
                    t = Self::merge(t, Self::merge(lost, leave));
                }
                t
            }
            PointerEventKind::Leave => {
                let mut t = Transition::default();
                for axis in [Axis::Vertical, Axis::Horizontal] {
                    if !self.bar(axis).has_capture() {
                        t = Self::merge(t, self.bar_event(axis, PointerEventKind::Leave, at));
                    }
                }
                t
            }
            _ => Transition::default(),
        }
    }

    /// Scrolls the wheel's axis. Ignored for disabled or hidden axes.
    pub fn handle_wheel(&mut self, event: &WheelEvent) -> Transition {
        if !self.control.is_enabled()
            || !self.axis_enabled(event.axis)
            || !self.geometry.axis(event.axis).is_visible()
        {
            return Transition::default();
        }
        let target = wheel_target(
            self.position(event.axis),
            event.rotation,
            self.control.config().wheel_divisor,
        );
        Transition {
            repaint: self.scroll_to(event.axis, target),
            ..Default::default()
        }
    }

    /// Clips to the viewport and hands `paint` the scene and the content
    /// origin.
    pub fn paint_content(&self, scene: &mut Scene, paint: impl FnOnce(&mut Scene, Vec2)) {
        scene.push(SceneNode::PushClip {
            rect: self.viewport(),
            radius: 0.0,
        });
        paint(scene, self.content_origin());
        scene.push(SceneNode::PopClip);
    }

    fn paint_bar(&self, scene: &mut Scene, axis: Axis) {
        let (Some(track), Some(thumb)) = (self.track_rect(axis), self.thumb_rect(axis)) else {
            return;
        };
        let cfg = self.control.config();
        let profile = self.control.profile_for(self.bar_state(axis));
        let pad = dp_to_px(cfg.scrollbar_padding);
        let bw = self.bar_width();

        scene.fill_rounded(track, profile.background.clone(), Pen::None, 0.0);

        let inset = match axis {
            Axis::Vertical => Rect::new(thumb.x + pad, thumb.y, (thumb.w - 2.0 * pad).max(0.0), thumb.h),
            Axis::Horizontal => Rect::new(thumb.x, thumb.y + pad, thumb.w, (thumb.h - 2.0 * pad).max(0.0)),
        };
        let radius = match cfg.scrollbar_type {
            ScrollbarType::Rectangular => 0.0,
            ScrollbarType::Rounded => half((bw - 2.0 * pad).max(0.0)),
        };
        scene.fill_rounded(inset, profile.foreground.clone(), Pen::None, radius);
    }
}

impl Widget for ScrolledPanel {
    fn control(&self) -> &Control {
        &self.control
    }

    fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    /// Big enough to show the whole content without bars.
    fn best_size(&self, _measure: &dyn TextMeasure) -> Size {
        self.content
    }

    fn paint(&self, scene: &mut Scene, _measure: &dyn TextMeasure) {
        self.paint_bar(scene, Axis::Vertical);
        self.paint_bar(scene, Axis::Horizontal);
        if let (Some(v), Some(h)) = (
            self.track_rect(Axis::Vertical),
            self.track_rect(Axis::Horizontal),
        ) {
            let profile = self.control.profile_for(InteractionState::Default);
            let corner = Rect::new(v.x, h.y, v.w, h.h);
            scene.fill_rounded(corner, profile.background, Pen::None, 0.0);
        }
    }

    fn handle(&mut self, event: &PointerEvent) -> Transition {
        self.handle_pointer(event)
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.control.set_bounds(bounds);
        self.relayout();
    }
}
