//! Combo box and its choices drop-down.
//!
//! The combo box shows the current value next to a V-shaped arrow. A click
//! opens a [`DropDown`] anchored under the control; picking a row there
//! updates the value, reports `Notification::Selected` and closes the list.
//! A press anywhere outside the open list dismisses it.

use smallvec::smallvec;

use skinkit_core::{
    Behavior, ConfigOverrides, ConfigRecord, ConfigWarning, ControlType, InteractionState,
    Notification, Pen, PointerEvent, PointerEventKind, Rect, Scene, SceneNode, Side, Size,
    Transition, Vec2, WheelEvent, dp_to_px, half, place_pair,
};

use crate::control::{Control, Widget, px_separation};
use crate::measure::{TextMeasure, grapheme_len};
use crate::scrolled::ScrolledPanel;

/// Stroke width of the drop arrow, in dp.
const ARROW_STROKE_DP: f32 = 1.0;

pub struct DropDown {
    control: Control,
    choices: Vec<String>,
    hovered: Option<usize>,
    list: ScrolledPanel,
    row_height: f32,
}

impl DropDown {
    pub fn new(
        choices: Vec<String>,
        overrides: &ConfigOverrides,
    ) -> (Self, Vec<ConfigWarning>) {
        let (control, mut warnings) =
            Control::new(ControlType::DropDown, "", overrides, Behavior::Momentary);
        let (list, list_warnings) =
            ScrolledPanel::new(&ConfigOverrides::new().set("scroll_x", false));
        warnings.extend(list_warnings);
        (
            Self {
                control,
                choices,
                hovered: None,
                list,
                row_height: 0.0,
            },
            warnings,
        )
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn list(&self) -> &ScrolledPanel {
        &self.list
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn has_capture(&self) -> bool {
        let g = self.list.geometry();
        self.control.interaction().has_capture() || g.x.is_dragging() || g.y.is_dragging()
    }

    fn line_height(&self, measure: &dyn TextMeasure) -> f32 {
        let profile = self.control.profile_for(InteractionState::Default);
        measure.measure("A", &profile.font).height
    }

    /// Row under `p`, if any.
    pub fn row_at(&self, p: Vec2) -> Option<usize> {
        if self.row_height <= 0.0 || !self.list.viewport().contains(p) {
            return None;
        }
        let origin = self.list.content_origin();
        let i = ((p.y - origin.y) / self.row_height).floor();
        (i >= 0.0 && (i as usize) < self.choices.len()).then_some(i as usize)
    }

    pub fn row_rect(&self, index: usize) -> Rect {
        let vp = self.list.viewport();
        let origin = self.list.content_origin();
        Rect::new(
            vp.x,
            origin.y + index as f32 * self.row_height,
            vp.w,
            self.row_height,
        )
    }

    pub fn handle_wheel(&mut self, event: &WheelEvent) -> Transition {
        let t = self.list.handle_wheel(event);
        if t.repaint {
            self.hovered = self.row_at(event.position);
        }
        t
    }

    fn track_row(&mut self, p: Vec2) -> bool {
        let row = self.row_at(p);
        let changed = row != self.hovered;
        self.hovered = row;
        changed
    }
}

impl Widget for DropDown {
    fn control(&self) -> &Control {
        &self.control
    }

    fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    /// Five times the width of a run of `A`s as long as the longest choice,
    /// two text lines per choice up to `dropdown_max_height`.
    fn best_size(&self, measure: &dyn TextMeasure) -> Size {
        let cfg = self.control.config();
        let profile = self.control.profile_for(InteractionState::Default);
        let longest = self
            .choices
            .iter()
            .map(|c| grapheme_len(c))
            .max()
            .unwrap_or(0);
        let width = measure.measure(&"A".repeat(longest), &profile.font).width * 5.0;
        let full = self.choices.len() as f32 * self.line_height(measure) * 2.0;
        Size::new(width, full.min(dp_to_px(cfg.dropdown_max_height)))
    }

    fn layout(&mut self, measure: &dyn TextMeasure) {
        self.row_height = self.line_height(measure) * 2.0;
        let width = self.control.bounds().w;
        self.list
            .set_content_size(Size::new(width, self.choices.len() as f32 * self.row_height));
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.control.set_bounds(bounds);
        self.list.set_bounds(bounds);
    }

    fn handle(&mut self, event: &PointerEvent) -> Transition {
        let lt = self.list.handle_pointer(event);
        let g = self.list.geometry();
        if lt.capture.is_some() || g.x.is_dragging() || g.y.is_dragging() {
            return lt;
        }

        let moved = match event.event {
            PointerEventKind::Leave | PointerEventKind::CaptureLost => {
                self.hovered.take().is_some()
            }
            _ => self.track_row(event.position),
        };

        let mut t = self.control.handle_pointer(event);
        t.repaint |= moved || lt.repaint;
        if t.notification == Some(Notification::Activated) {
            t.notification = self.row_at(event.position).map(Notification::Selected);
        }
        t
    }

    fn paint(&self, scene: &mut Scene, measure: &dyn TextMeasure) {
        let c = &self.control;
        let cfg = c.config();
        let profile = c.profile_for(InteractionState::Default);
        let hover = c.profile_for(InteractionState::Hover);
        scene.fill_rounded(
            c.bounds(),
            profile.background.clone(),
            profile.pen,
            profile.corner_radius,
        );

        let inset = dp_to_px(cfg.value_inset);
        self.list.paint_content(scene, |scene, _origin| {
            if self.row_height <= 0.0 {
                return;
            }
            let vp = self.list.viewport();
            for (i, choice) in self.choices.iter().enumerate() {
                let row = self.row_rect(i);
                if !row.intersects(&vp) {
                    continue;
                }
                let text_profile = if self.hovered == Some(i) {
                    scene.fill_rounded(row, hover.background.clone(), Pen::None, 0.0);
                    &hover
                } else {
                    &profile
                };
                let ts = c.text_size(choice, text_profile, measure);
                if ts.is_empty() {
                    continue;
                }
                let y = row.y + half(row.h) - half(ts.height);
                scene.push(SceneNode::Text {
                    rect: Rect::new(row.x + inset, y, ts.width, ts.height),
                    text: choice.clone(),
                    color: text_profile.text_colour,
                    size: text_profile.font.size,
                    face: text_profile.font.face.clone(),
                });
            }
        });
        self.list.paint(scene, measure);
    }
}

/// Where the combo box parts landed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComboLayout {
    /// Control rect inset by the pen width.
    pub frame: Rect,
    pub arrow: Rect,
    pub block: Rect,
}

pub struct ComboBox {
    control: Control,
    choices: Vec<String>,
    selection: Option<usize>,
    dropdown: Option<DropDown>,
}

impl ComboBox {
    pub fn new(
        value: impl Into<String>,
        choices: Vec<String>,
        overrides: &ConfigOverrides,
    ) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) =
            Control::new(ControlType::ComboBox, value, overrides, Behavior::Momentary);
        Self::with_control(control, choices, warnings)
    }

    pub fn from_template(
        value: impl Into<String>,
        choices: Vec<String>,
        template: &ConfigRecord,
        overrides: &ConfigOverrides,
    ) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) = Control::from_template(
            ControlType::ComboBox,
            value,
            template,
            overrides,
            Behavior::Momentary,
        );
        Self::with_control(control, choices, warnings)
    }

    fn with_control(
        control: Control,
        choices: Vec<String>,
        warnings: Vec<ConfigWarning>,
    ) -> (Self, Vec<ConfigWarning>) {
        let selection = choices.iter().position(|c| c == control.label());
        (
            Self {
                control,
                choices,
                selection,
                dropdown: None,
            },
            warnings,
        )
    }

    pub fn value(&self) -> &str {
        self.control.label()
    }

    /// Sets free text; the selection follows when it matches a choice.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.control.set_label(value);
        self.selection = self.choices.iter().position(|c| c == self.control.label());
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn set_selection(&mut self, index: usize) {
        if let Some(choice) = self.choices.get(index) {
            self.control.set_label(choice.clone());
            self.selection = Some(index);
        }
    }

    pub fn is_open(&self) -> bool {
        self.dropdown.is_some()
    }

    pub fn dropdown(&self) -> Option<&DropDown> {
        self.dropdown.as_ref()
    }

    pub fn dropdown_mut(&mut self) -> Option<&mut DropDown> {
        self.dropdown.as_mut()
    }

    /// Opens the choices list. It gets its bounds on the next `layout`.
    pub fn open(&mut self) {
        let cfg = self.control.config();
        let overrides = ConfigOverrides::new()
            .set("text_font_size", cfg.text_font_size.default)
            .set("text_font_face", cfg.text_font_face.default.clone());
        let (mut dropdown, warnings) = DropDown::new(self.choices.clone(), &overrides);
        for w in warnings {
            log::warn!("drop-down: {w}");
        }
        dropdown.hovered = self.selection;
        log::debug!("combo box opened with {} choices", self.choices.len());
        self.dropdown = Some(dropdown);
    }

    pub fn dismiss(&mut self) {
        if self.dropdown.take().is_some() {
            log::debug!("combo box dismissed");
        }
    }

    pub fn arrow_size(&self) -> Size {
        let cfg = self.control.config();
        Size::new(dp_to_px(cfg.arrow_width), dp_to_px(cfg.arrow_height))
    }

    pub fn layout_parts(&self, measure: &dyn TextMeasure) -> ComboLayout {
        let c = &self.control;
        let cfg = c.config();
        let profile = c.profile();
        let bounds = c.bounds();
        let pen = profile.pen.width();

        let arrow = self.arrow_size();
        let block = c.block_size(c.label(), &profile, measure);
        let side = cfg.arrow_text_side;
        let p = place_pair(
            bounds,
            arrow,
            block,
            px_separation(cfg.arrow_text_separation),
            side,
        );
        let inset = dp_to_px(cfg.value_inset);
        let mut block_at = p.b;
        block_at.x = if side == Side::Left {
            bounds.x + inset
        } else {
            bounds.x + bounds.w - inset - block.width
        };

        ComboLayout {
            frame: bounds.deflate(pen, pen),
            arrow: p.a_rect(arrow),
            block: Rect::from_origin_size(block_at, block),
        }
    }

    /// Wheel over the open list scrolls it.
    pub fn handle_wheel(&mut self, event: &WheelEvent) -> Transition {
        match &mut self.dropdown {
            Some(dd) if dd.bounds().contains(event.position) => dd.handle_wheel(event),
            _ => Transition::default(),
        }
    }
}

impl Widget for ComboBox {
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
        let block = c.block_size(c.label(), &profile, measure);
        let arrow = self.arrow_size();
        let sep = px_separation(cfg.arrow_text_separation).unwrap_or(0.0);
        Size::new(
            block.width + 2.0 * dp_to_px(cfg.padding_horizontal) + arrow.width + sep,
            block.height.max(arrow.height) + 2.0 * dp_to_px(cfg.padding_vertical),
        )
    }

    fn layout(&mut self, measure: &dyn TextMeasure) {
        let b = self.control.bounds();
        if let Some(dd) = &mut self.dropdown {
            let size = dd.best_size(measure);
            dd.set_bounds(Rect::new(b.x, b.bottom(), b.w.max(size.width), size.height));
            dd.layout(measure);
        }
    }

    fn handle(&mut self, event: &PointerEvent) -> Transition {
        if let Some(dd) = &mut self.dropdown {
            if dd.has_capture() || dd.bounds().contains(event.position) {
                let t = dd.handle(event);
                if let Some(Notification::Selected(i)) = t.notification {
                    self.set_selection(i);
                    self.dismiss();
                    log::debug!("combo box picked {:?}", self.value());
                    return Transition { repaint: true, ..t };
                }
                return t;
            }
            if event.is_primary_down() {
                self.dismiss();
                let mut t = Transition {
                    repaint: true,
                    ..Default::default()
                };
                if self.control.bounds().contains(event.position) {
                    // the press that closes the list does not reopen it
                    return t;
                }
                t.repaint |= self.control.handle_pointer(event).repaint;
                return t;
            }
        }

        let mut t = self.control.handle_pointer(event);
        if t.notification == Some(Notification::Activated) {
            t.notification = None;
            t.repaint = true;
            self.open();
        }
        t
    }

    fn paint(&self, scene: &mut Scene, measure: &dyn TextMeasure) {
        let c = &self.control;
        let cfg = c.config();
        let profile = c.profile();
        let parts = self.layout_parts(measure);

        scene.fill_rounded(
            parts.frame,
            profile.background.clone(),
            profile.pen,
            profile.corner_radius,
        );
        c.draw_block(scene, parts.block, c.label(), &profile, measure);

        let a = parts.arrow;
        scene.push(SceneNode::Path {
            points: smallvec![
                Vec2::new(a.x, a.y),
                Vec2::new(a.x + a.w / 2.0, a.y + a.h),
                Vec2::new(a.x + a.w, a.y),
            ],
            color: cfg.arrow_colour,
            width: dp_to_px(ARROW_STROKE_DP),
        });

        if let Some(dd) = &self.dropdown {
            dd.paint(scene, measure);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinkit_core::{Axis, PointerButton};

    use crate::dump_scene;
    use crate::measure::FixedMeasure;

    fn fruit() -> Vec<String> {
        ["Apple", "Banana", "Cherry"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn ev(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(kind, Vec2::new(x, y))
    }

    fn click(w: &mut dyn Widget, x: f32, y: f32) -> Transition {
        w.handle(&ev(PointerEventKind::Move, x, y));
        w.handle(&ev(PointerEventKind::Down(PointerButton::Primary), x, y));
        w.handle(&ev(PointerEventKind::Up(PointerButton::Primary), x, y))
    }

    fn combo() -> ComboBox {
        let (mut c, warnings) = ComboBox::new("Apple", fruit(), &ConfigOverrides::new());
        assert!(warnings.is_empty());
        c.set_bounds(Rect::new(0.0, 0.0, 100.0, 24.0));
        c
    }

    #[test]
    fn test_initial_selection_matches_value() {
        let c = combo();
        assert_eq!(c.selection(), Some(0));
        assert_eq!(c.value(), "Apple");
    }

    #[test]
    fn test_best_size() {
        let c = combo();
        // text 20x10 + 2*10 padding + 10 arrow + 6 separation
        assert_eq!(c.best_size(&FixedMeasure::default()), Size::new(56.0, 20.0));
    }

    #[test]
    fn test_paint_text_left_arrow_v() {
        let c = combo();
        let mut scene = Scene::new();
        c.paint(&mut scene, &FixedMeasure::default());
        insta::assert_snapshot!(dump_scene(&scene), @r#"
        rect 1,1 98x22 r0 #f0f0f0ff
        border 1,1 98x22 r0 w1 #c8c8c8ff
        text 5,7 20x10 "Apple" 8px #141414ff
        path 58,10 63,15 68,10 w1 #000000ff
        "#);
    }

    #[test]
    fn test_value_right_of_arrow_is_pinned_right() {
        let (mut c, _) = ComboBox::new(
            "Apple",
            fruit(),
            &ConfigOverrides::new().set("arrow_text_side", "right"),
        );
        c.set_bounds(Rect::new(0.0, 0.0, 100.0, 24.0));
        let parts = c.layout_parts(&FixedMeasure::default());
        assert_eq!(parts.block, Rect::new(75.0, 7.0, 20.0, 10.0));
    }

    #[test]
    fn test_click_opens_and_row_click_picks() {
        let m = FixedMeasure::default();
        let mut c = combo();
        let t = click(&mut c, 10.0, 10.0);
        assert!(t.repaint);
        assert_eq!(t.notification, None);
        assert!(c.is_open());

        c.layout(&m);
        let dd = c.dropdown().unwrap();
        assert_eq!(dd.bounds(), Rect::new(0.0, 24.0, 120.0, 60.0));
        assert_eq!(dd.row_height(), 20.0);
        assert_eq!(dd.hovered(), Some(0));

        let t = click(&mut c, 10.0, 54.0);
        assert_eq!(t.notification, Some(Notification::Selected(1)));
        assert_eq!(c.value(), "Banana");
        assert_eq!(c.selection(), Some(1));
        assert!(!c.is_open());
    }

    #[test]
    fn test_press_outside_dismisses() {
        let m = FixedMeasure::default();
        let mut c = combo();
        click(&mut c, 10.0, 10.0);
        c.layout(&m);
        c.handle(&ev(PointerEventKind::Down(PointerButton::Primary), 300.0, 300.0));
        assert!(!c.is_open());
        assert_eq!(c.value(), "Apple");
    }

    #[test]
    fn test_press_on_control_closes_without_reopening() {
        let m = FixedMeasure::default();
        let mut c = combo();
        click(&mut c, 10.0, 10.0);
        c.layout(&m);
        click(&mut c, 10.0, 10.0);
        assert!(!c.is_open());
    }

    #[test]
    fn test_dropdown_best_size() {
        let m = FixedMeasure::default();
        let (dd, _) = DropDown::new(fruit(), &ConfigOverrides::new());
        // "AAAAAA" is 24 wide; 3 rows of 2 * 10
        assert_eq!(dd.best_size(&m), Size::new(120.0, 60.0));

        let many: Vec<String> = (0..20).map(|i| format!("Item {i}")).collect();
        let (dd, _) = DropDown::new(many, &ConfigOverrides::new());
        assert_eq!(dd.best_size(&m).height, 150.0);
    }

    #[test]
    fn test_long_dropdown_scrolls() {
        let m = FixedMeasure::default();
        let many: Vec<String> = (0..20).map(|i| format!("Item {i}")).collect();
        let (mut dd, _) = DropDown::new(many, &ConfigOverrides::new());
        dd.set_bounds(Rect::new(0.0, 0.0, 100.0, 150.0));
        dd.layout(&m);
        assert!(dd.list().track_rect(Axis::Vertical).is_some());

        let wheel = WheelEvent {
            axis: Axis::Vertical,
            rotation: -8.0,
            position: Vec2::new(10.0, 10.0),
        };
        assert!(dd.handle_wheel(&wheel).repaint);
        assert_eq!(dd.list().offset(), Vec2::new(0.0, 15.0));
        // 10 + 15 scrolled px falls in row 1
        assert_eq!(dd.row_at(Vec2::new(10.0, 10.0)), Some(1));
        assert_eq!(dd.hovered(), Some(1));
    }

    #[test]
    fn test_dropdown_paints_hovered_row() {
        let m = FixedMeasure::default();
        let (mut dd, _) = DropDown::new(fruit(), &ConfigOverrides::new());
        dd.set_bounds(Rect::new(0.0, 0.0, 120.0, 60.0));
        dd.layout(&m);
        dd.handle(&ev(PointerEventKind::Move, 10.0, 25.0));
        assert_eq!(dd.hovered(), Some(1));

        let mut scene = Scene::new();
        dd.paint(&mut scene, &m);
        insta::assert_snapshot!(dump_scene(&scene), @r#"
        rect 0,0 120x60 r0 #f0f0f0ff
        border 0,0 120x60 r0 w1 #c8c8c8ff
        clip 0,0 120x60
        text 5,5 20x10 "Apple" 8px #141414ff
        rect 0,20 120x20 r0 #c8c8c8ff
        text 5,25 24x10 "Banana" 8px #141414ff
        text 5,45 24x10 "Cherry" 8px #141414ff
        unclip
        "#);
    }
}
