//! # Scroll drag engine
//!
//! Pure scrollbar math for a scrollable container, one [`ScrollAxis`] per
//! direction. An axis knows the viewport length, the content length, the
//! track length its scrollbar has on screen and how many pixels one scroll
//! step covers. From those it derives the thumb and turns pointer drags and
//! wheel notches into target scroll positions (in steps).
//!
//! Targets are deliberately *not* clamped here: dragging past either end of
//! the track overshoots, and the container's scroll primitive clamps to
//! `[0, (content - viewport) / step]`.
//!
//! ```rust
//! use skinkit_core::*;
//!
//! let mut y = ScrollAxis::new(15.0);
//! y.set_extent(100.0, 400.0, 100.0);
//! assert_eq!(y.thumb_size(), 25.0);
//!
//! y.begin_drag(10.0);
//! assert_eq!(y.drag_to(40.0), Some(8.0)); // 8 steps of 15px
//! y.end_drag();
//! ```

use crate::Size;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollAxis {
    viewport: f32,
    content: f32,
    track: f32,
    units_per_step: f32,
    position: f32,

    thumb_size: f32,
    thumb_offset: f32,
    visible: bool,

    // set only while a drag gesture is active
    drag_offset: Option<f32>,
}

impl ScrollAxis {
    pub fn new(units_per_step: f32) -> Self {
        Self {
            units_per_step: units_per_step.max(1.0),
            ..Default::default()
        }
    }

    /// Viewport over content; 1 or more means everything fits.
    pub fn ratio(&self) -> f32 {
        if self.content <= 0.0 {
            1.0
        } else {
            self.viewport / self.content
        }
    }

    /// Updates the lengths and recomputes the thumb. Returns true when the
    /// scrollbar switched between shown and hidden, so the host can reserve
    /// or reclaim the track space.
    pub fn set_extent(&mut self, viewport: f32, content: f32, track: f32) -> bool {
        self.viewport = viewport.max(0.0);
        self.content = content.max(0.0);
        self.track = track.max(0.0);
        let was = self.visible;
        self.recompute();
        if was != self.visible {
            log::debug!(
                "scrollbar {} (viewport {}, content {})",
                if self.visible { "shown" } else { "hidden" },
                self.viewport,
                self.content
            );
        }
        was != self.visible
    }

    /// Sets the current scroll position in px from the content origin.
    pub fn set_position(&mut self, position_px: f32) {
        self.position = position_px;
        self.recompute();
    }

    fn recompute(&mut self) {
        let ratio = self.ratio();
        if ratio >= 1.0 {
            self.visible = false;
            self.thumb_size = 0.0;
            self.thumb_offset = 0.0;
            return;
        }
        self.visible = true;
        self.thumb_size = self.track * ratio;
        self.thumb_offset = self.position * ratio;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn thumb_size(&self) -> f32 {
        self.thumb_size
    }

    /// Thumb start along the track.
    pub fn thumb_offset(&self) -> f32 {
        self.thumb_offset
    }

    pub fn track(&self) -> f32 {
        self.track
    }

    pub fn units_per_step(&self) -> f32 {
        self.units_per_step
    }

    pub fn set_units_per_step(&mut self, units: f32) {
        self.units_per_step = units.max(1.0);
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Furthest the content can scroll, in px.
    pub fn max_offset(&self) -> f32 {
        (self.content - self.viewport).max(0.0)
    }

    /// Largest valid scroll position in steps. Fractional when the range is
    /// not a whole number of steps.
    pub fn max_steps(&self) -> f32 {
        self.max_offset() / self.units_per_step
    }

    pub fn thumb_contains(&self, along: f32) -> bool {
        self.visible && along >= self.thumb_offset && along <= self.thumb_offset + self.thumb_size
    }

    /// Starts a drag with the pointer at `along` on the track.
    pub fn begin_drag(&mut self, along: f32) {
        self.drag_offset = Some(self.thumb_offset - along);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    pub fn end_drag(&mut self) {
        self.drag_offset = None;
    }

    /// Target scroll position, in steps, for the pointer at `along`.
    /// `None` when no drag is active or the thumb fills the track.
    pub fn drag_to(&self, along: f32) -> Option<f32> {
        let offset = self.drag_offset?;
        if !self.visible || self.track <= 0.0 {
            return None;
        }
        // thumb length expressed in content px
        let thumb_in_content = (self.thumb_size * self.content / self.track).floor();
        let content_range = self.content - thumb_in_content;
        let track_range = self.track - self.thumb_size.trunc();
        if track_range <= 0.0 {
            return None;
        }
        let percentage = (along + offset) / track_range;
        let steps = percentage * content_range / self.units_per_step;
        log::trace!("drag at {along}: {percentage:.3} of track -> {steps:.2} steps");
        Some(steps)
    }
}

/// Wheel target in steps: the current position moved against the rotation.
pub fn wheel_target(current_steps: f32, rotation: f32, divisor: f32) -> f32 {
    current_steps - rotation / divisor.max(f32::EPSILON)
}

/// Both axes of a scrollable container.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    pub x: ScrollAxis,
    pub y: ScrollAxis,
}

/// Which axes changed visibility in a relayout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityChange {
    pub x: bool,
    pub y: bool,
}

impl VisibilityChange {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

impl ScrollGeometry {
    pub fn new(units_x: f32, units_y: f32) -> Self {
        Self {
            x: ScrollAxis::new(units_x),
            y: ScrollAxis::new(units_y),
        }
    }

    pub fn axis(&self, axis: Axis) -> &ScrollAxis {
        match axis {
            Axis::Horizontal => &self.x,
            Axis::Vertical => &self.y,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut ScrollAxis {
        match axis {
            Axis::Horizontal => &mut self.x,
            Axis::Vertical => &mut self.y,
        }
    }

    /// Recomputes both axes after a viewport, content or track change.
    pub fn relayout(&mut self, viewport: Size, content: Size, track: Size) -> VisibilityChange {
        VisibilityChange {
            x: self.x.set_extent(viewport.width, content.width, track.width),
            y: self.y.set_extent(viewport.height, content.height, track.height),
        }
    }

    pub fn end_drags(&mut self) {
        self.x.end_drag();
        self.y.end_drag();
    }
}
