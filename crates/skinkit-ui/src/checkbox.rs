//! Check box, optionally drawn as a switch.
//!
//! The selector (square box or switch pill) sits next to the image+text
//! block on `selector_text_side`. A checked selector is filled with the
//! active background and has no outline.

use smallvec::smallvec;

use skinkit_core::{
    Behavior, Brush, ConfigOverrides, ConfigRecord, ConfigWarning, ControlType, PaintProfile,
    Padding, Pen, Rect, Scene, SceneNode, Separations, Sides, Size, Vec2, best_size, dp_to_px,
    place_pair,
};

use crate::control::{Control, Widget, px_separation};
use crate::measure::TextMeasure;

pub struct CheckBox {
    control: Control,
}

/// Where the selector and the block landed inside the bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckLayout {
    pub selector: Rect,
    pub block: Rect,
}

impl CheckBox {
    pub fn new(
        label: impl Into<String>,
        checked: bool,
        overrides: &ConfigOverrides,
    ) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) = Control::new(
            ControlType::CheckBox,
            label,
            overrides,
            Behavior::toggle(checked),
        );
        (Self { control }, warnings)
    }

    pub fn from_template(
        label: impl Into<String>,
        checked: bool,
        template: &ConfigRecord,
        overrides: &ConfigOverrides,
    ) -> (Self, Vec<ConfigWarning>) {
        let (control, warnings) = Control::from_template(
            ControlType::CheckBox,
            label,
            template,
            overrides,
            Behavior::toggle(checked),
        );
        (Self { control }, warnings)
    }

    pub fn is_checked(&self) -> bool {
        self.control.value()
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.control.set_value(checked);
    }

    /// Selector size in px for the current appearance.
    pub fn selector_size(&self) -> Size {
        self.control
            .config()
            .toggle_selector_size()
            .scaled(dp_to_px(1.0))
    }

    fn block_size(&self, profile: &PaintProfile, measure: &dyn TextMeasure) -> Size {
        self.control
            .block_size(self.control.label(), profile, measure)
    }

    pub fn layout_parts(&self, measure: &dyn TextMeasure) -> CheckLayout {
        let c = &self.control;
        let cfg = c.config();
        let profile = c.profile();
        let selector = self.selector_size();
        let block = self.block_size(&profile, measure);
        let p = place_pair(
            c.bounds(),
            selector,
            block,
            px_separation(cfg.selector_text_separation),
            cfg.selector_text_side,
        );
        CheckLayout {
            selector: p.a_rect(selector),
            block: p.b_rect(block),
        }
    }

    /// Rect of the switch indicator inside `selector`.
    pub fn switch_indicator(&self, selector: Rect) -> Rect {
        let cfg = self.control.config();
        let pad = dp_to_px(cfg.switch_selector_padding);
        let height = dp_to_px(cfg.switch_height);
        let side = (height - 2.0 * pad).max(0.0);
        let x = if self.is_checked() {
            selector.x + selector.w - height
        } else {
            selector.x
        };
        Rect::new(x + pad, selector.y + pad, side, side)
    }

    fn paint_selector(&self, scene: &mut Scene, selector: Rect, profile: &PaintProfile) {
        let cfg = self.control.config();
        let checked = self.is_checked();
        let (fill, pen) = if checked {
            (Brush::Solid(profile.background_colour_active), Pen::None)
        } else {
            (profile.background.clone(), profile.pen)
        };

        scene.fill_rounded(selector, fill, pen, profile.corner_radius);

        if cfg.switch_appearance {

            let indicator = self.switch_indicator(selector);
            let border = dp_to_px(cfg.switch_selector_border_width);
            let pen = if border == 0.0 {
                Pen::None
            } else {
                Pen::Stroke {
                    width: border,
                    color: cfg.switch_selector_border_colour,
                }
            };
            let brush = Brush::Solid(cfg.switch_selector_colour);
            if cfg.switch_rounded {
                scene.push(SceneNode::Ellipse {
                    rect: indicator,
                    brush,
                    pen,
                });
            } else {
                scene.fill_rounded(indicator, brush, pen, dp_to_px(cfg.switch_radius));
            }
            return;
        }

        if checked {
            // whole dp on each axis
            let d = cfg.checkbox_active_deflate;
            let r = selector.deflate(
                dp_to_px((d * cfg.check_deflate_scale.x).floor()),
                dp_to_px((d * cfg.check_deflate_scale.y).floor()),
            );
            scene.push(SceneNode::Path {
                points: smallvec![
                    Vec2::new(r.x, r.y + r.h / 1.5),
                    Vec2::new(r.x + r.w / 2.0, r.y + r.h),
                    Vec2::new(r.x + r.w, r.y),
                ],
                color: cfg.check_colour,
                width: dp_to_px(cfg.check_stroke_width),
            });
        }
    }
}

impl Widget for CheckBox {
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
        let parts = self.layout_parts(measure);
        self.paint_selector(scene, parts.selector, &profile);
        self.control
            .draw_block(scene, parts.block, self.control.label(), &profile, measure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinkit_core::{Notification, PointerButton, PointerEvent, PointerEventKind};

    use crate::dump_scene;
    use crate::measure::FixedMeasure;

    fn click(cb: &mut CheckBox, x: f32, y: f32) -> Option<Notification> {
        let at = Vec2::new(x, y);
        cb.handle(&PointerEvent::new(PointerEventKind::Move, at));
        cb.handle(&PointerEvent::new(
            PointerEventKind::Down(PointerButton::Primary),
            at,
        ));
        cb.handle(&PointerEvent::new(
            PointerEventKind::Up(PointerButton::Primary),
            at,
        ))
        .notification
    }

    #[test]
    fn test_best_size_checkbox() {
        let (cb, _) = CheckBox::new("OK", false, &ConfigOverrides::new());
        // selector 20x20, 6 separation, text 8x10, side padding 1
        assert_eq!(cb.best_size(&FixedMeasure::default()), Size::new(36.0, 22.0));
    }

    #[test]
    fn test_click_toggles_and_fills_active() {
        let m = FixedMeasure::default();
        let (mut cb, _) = CheckBox::new("OK", false, &ConfigOverrides::new());
        cb.set_bounds(Rect::new(0.0, 0.0, 60.0, 30.0));

        assert_eq!(click(&mut cb, 10.0, 10.0), Some(Notification::Toggled(true)));
        assert!(cb.is_checked());

        let mut scene = Scene::new();
        cb.paint(&mut scene, &m);
        let parts = cb.layout_parts(&m);
        assert_eq!(parts.selector, Rect::new(13.0, 5.0, 20.0, 20.0));
        assert_eq!(
            scene.nodes[0],
            SceneNode::Rect {
                rect: parts.selector,
                brush: Brush::Solid(skinkit_core::Color::from_rgb(57, 117, 186)),
                radius: 3.0,
            }
        );
        assert!(matches!(scene.nodes[1], SceneNode::Path { .. }));

        assert_eq!(click(&mut cb, 10.0, 10.0), Some(Notification::Toggled(false)));
        assert!(!cb.is_checked());
    }

    #[test]
    fn test_check_mark_path() {
        let m = FixedMeasure::default();
        let overrides = ConfigOverrides::new()
            .set("checkbox_active_deflate", 4.0)
            .set("check_deflate_scale", vec![1.0f32, 1.0]);
        let (mut cb, warnings) = CheckBox::new("", true, &overrides);
        assert!(warnings.is_empty());
        cb.set_bounds(Rect::new(0.0, 0.0, 20.0, 20.0));
        let mut scene = Scene::new();
        cb.paint(&mut scene, &m);
        insta::assert_snapshot!(dump_scene(&scene), @r#"
        rect 0,0 20x20 r3 #3975baff
        path 4,12 10,16 16,4 w2 #ffffffff
        "#);
    }

    #[test]
    fn test_check_mark_inset_is_whole_dp() {
        // defaults: deflate 5 scaled by 1.2 and 1.3 gives 6 and 6.5
        let (mut cb, _) = CheckBox::new("", true, &ConfigOverrides::new());
        cb.set_bounds(Rect::new(0.0, 0.0, 20.0, 20.0));
        let mut scene = Scene::new();
        cb.paint(&mut scene, &FixedMeasure::default());
        match &scene.nodes[1] {
            SceneNode::Path { points, .. } => {
                assert_eq!(points[1], Vec2::new(10.0, 14.0));
                assert_eq!(points[2], Vec2::new(14.0, 6.0));
            }
            other => panic!("expected check mark, got {other:?}"),
        }
    }

    #[test]
    fn test_switch_track_uses_corner_radius() {
        let m = FixedMeasure::default();
        let overrides = ConfigOverrides::new()
            .set("switch_appearance", true)
            .set("switch_rounded", true)
            .set("corner_radius", 10.0);
        let (mut sw, warnings) = CheckBox::new("", true, &overrides);
        assert!(warnings.is_empty());
        sw.set_bounds(Rect::new(0.0, 0.0, 50.0, 20.0));
        let mut scene = Scene::new();
        sw.paint(&mut scene, &m);
        assert_eq!(
            scene.nodes[0],
            SceneNode::Rect {
                rect: Rect::new(0.0, 0.0, 50.0, 20.0),
                brush: Brush::Solid(skinkit_core::Color::from_rgb(57, 117, 186)),
                radius: 10.0,
            }
        );

        // switch_rounded shapes only the indicator
        let (mut square, _) = CheckBox::new(
            "",
            true,
            &ConfigOverrides::new()
                .set("switch_appearance", true)
                .set("switch_rounded", true),
        );
        square.set_bounds(Rect::new(0.0, 0.0, 50.0, 20.0));
        let mut scene = Scene::new();
        square.paint(&mut scene, &m);
        match &scene.nodes[0] {
            SceneNode::Rect { radius, .. } => assert_eq!(*radius, 3.0),
            other => panic!("expected track rect, got {other:?}"),
        }
    }

    #[test]
    fn test_switch_indicator_moves_to_far_end() {
        let m = FixedMeasure::default();
        let overrides = ConfigOverrides::new().set("switch_appearance", true);
        let (mut sw, warnings) = CheckBox::new("Wi-Fi", false, &overrides);
        assert!(warnings.is_empty());
        sw.set_bounds(Rect::new(0.0, 0.0, 120.0, 30.0));

        let selector = sw.layout_parts(&m).selector;
        assert_eq!(selector.size(), Size::new(50.0, 20.0));
        let off = sw.switch_indicator(selector);
        assert_eq!(off.x, selector.x + 1.0);
        assert_eq!(off.size(), Size::new(18.0, 18.0));

        let at = selector.center();
        assert_eq!(click(&mut sw, at.x, at.y), Some(Notification::Toggled(true)));
        assert!(sw.is_checked());

        let on = sw.switch_indicator(selector);
        assert_eq!(on.right(), selector.right() - 1.0);
        assert_eq!(on.y, selector.y + 1.0);

        let mut scene = Scene::new();
        sw.paint(&mut scene, &m);
        assert_eq!(
            scene.nodes[1],
            SceneNode::Rect {
                rect: on,
                brush: Brush::Solid(skinkit_core::Color::WHITE),
                radius: 3.0,
            }
        );
    }

    #[test]
    fn test_rounded_switch_draws_ellipse_with_border() {
        let m = FixedMeasure::default();
        let overrides = ConfigOverrides::new()
            .set("switch_appearance", true)
            .set("switch_rounded", true)
            .set("switch_selector_border_width", 1.0);
        let (mut sw, _) = CheckBox::new("", false, &overrides);
        sw.set_bounds(Rect::new(0.0, 0.0, 50.0, 20.0));
        let mut scene = Scene::new();
        sw.paint(&mut scene, &m);
        let ellipse = scene
            .nodes
            .iter()
            .find(|n| matches!(n, SceneNode::Ellipse { .. }));
        match ellipse {
            Some(SceneNode::Ellipse { rect, pen, .. }) => {
                assert_eq!(*rect, Rect::new(1.0, 1.0, 18.0, 18.0));
                assert_eq!(pen.width(), 1.0);
            }
            other => panic!("expected indicator ellipse, got {other:?}"),
        }
    }

    #[test]
    fn test_disabled_ignores_click() {
        let (mut cb, _) = CheckBox::new("OK", false, &ConfigOverrides::new());
        cb.set_bounds(Rect::new(0.0, 0.0, 60.0, 30.0));
        cb.control_mut().disable();
        assert_eq!(click(&mut cb, 10.0, 10.0), None);
        assert!(!cb.is_checked());
    }
}
