#[cfg(test)]
mod tests {
    use crate::*;

    fn down(at: Vec2) -> PointerEvent {
        PointerEvent::new(PointerEventKind::Down(PointerButton::Primary), at)
    }
    fn up(at: Vec2) -> PointerEvent {
        PointerEvent::new(PointerEventKind::Up(PointerButton::Primary), at)
    }
    fn enter() -> PointerEvent {
        PointerEvent::new(PointerEventKind::Enter, Vec2::ZERO)
    }
    fn leave() -> PointerEvent {
        PointerEvent::new(PointerEventKind::Leave, Vec2::ZERO)
    }

    fn click(i: &mut Interaction) -> Transition {
        i.handle(&enter());
        i.handle(&down(Vec2::ZERO));
        i.handle(&up(Vec2::ZERO))
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::parse_hex("#12345"), None);
        assert_eq!(Color::parse_hex("zzzzzz"), None);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_rect_deflate_never_negative() {
        let r = Rect::new(0.0, 0.0, 10.0, 4.0).deflate(3.0, 3.0);
        assert_eq!(r, Rect::new(3.0, 3.0, 4.0, 0.0));
    }

    #[test]
    fn test_density_scales_dp() {
        assert_eq!(dp_to_px(6.0), 6.0);
        let px = with_density(Density { scale: 1.5 }, || dp_to_px(6.0));
        assert_eq!(px, 9.0);
        // frame popped
        assert_eq!(density().scale, 1.0);
    }

    // ---- config ----

    #[test]
    fn test_base_defaults() {
        let cfg = ConfigRecord::default();
        for s in InteractionState::ALL {
            assert_eq!(*cfg.background_colour.get(s), Color::from_rgb(150, 150, 150));
            assert_eq!(*cfg.border_width.get(s), 0.0);
            assert_eq!(*cfg.image_channels.get(s), [1.0; 4]);
            assert_eq!(*cfg.image_size.get(s), Size::ZERO);
            assert_eq!(cfg.text_font_face.get(s), "Verdana");
            assert!(cfg.image.get(s).is_none());
        }
        assert_eq!(cfg.scroll_units_y, 15.0);
        assert!(cfg.scroll_axes.contains(ScrollAxes::X | ScrollAxes::Y));
    }

    #[test]
    fn test_default_tables_are_consistent() {
        for kind in [
            ControlType::Panel,
            ControlType::Button,
            ControlType::CheckBox,
            ControlType::RadioButton,
            ControlType::ComboBox,
            ControlType::DropDown,
            ControlType::StaticBox,
            ControlType::ScrolledWindow,
        ] {
            let mut rec = ConfigRecord::default();
            let warnings = rec.update(&kind.default_overrides());
            assert!(warnings.is_empty(), "{kind}: {warnings:?}");
            assert_eq!(kind.as_str().parse::<ControlType>(), Ok(kind));
        }
    }

    #[test]
    fn test_button_table() {
        let cfg = ConfigRecord::for_control(ControlType::Button);
        assert_eq!(cfg.background_colour.default, Color::from_rgb(240, 240, 240));
        assert_eq!(cfg.background_colour.hover, Color::from_rgb(200, 200, 200));
        assert_eq!(cfg.background_colour.pressed, Color::from_rgb(180, 180, 180));
        assert_eq!(cfg.border_width.default, 1.0);
        assert_eq!(cfg.border_width.pressed, 0.0);
        assert_eq!(cfg.text_colour.hover, Color::from_rgb(20, 20, 20));
    }

    #[test]
    fn test_unknown_control_type() {
        let err = "Slider".parse::<ControlType>().unwrap_err();
        assert_eq!(err, SkinError::UnknownControlType("Slider".into()));
    }

    #[test]
    fn test_override_state_suffix_and_all_states() {
        let o = ConfigOverrides::new()
            .set("corner_radius", 4.0)
            .set("corner_radius_pressed", 1.0)
            .set("cursor_hover", "hand")
            .set("image_text_side", "down");
        let (cfg, warnings) = ConfigRecord::create(ControlType::Panel, &o);
        assert!(warnings.is_empty());
        assert_eq!(cfg.corner_radius, PerState::new(4.0, 4.0, 1.0, 4.0));
        assert_eq!(cfg.cursor.hover, Some(CursorKind::Hand));
        assert_eq!(cfg.cursor.default, None);
        assert_eq!(cfg.image_text_side, Side::Down);
    }

    #[test]
    fn test_override_unknown_and_mistyped_keep_prior() {
        let mut cfg = ConfigRecord::for_control(ControlType::Button);
        let before = cfg.clone();
        let warnings = cfg.update(
            &ConfigOverrides::new()
                .set("border_wdth", 3.0)
                .set("border_width_hover", "thick")
                .set("image_text_side", "diagonal")
                .set("background_colour_sideways", Color::WHITE),
        );
        assert_eq!(cfg, before);
        assert_eq!(
            warnings,
            vec![
                ConfigWarning::UnknownField("border_wdth".into()),
                ConfigWarning::TypeMismatch {
                    field: "border_width_hover".into(),
                    expected: "a number",
                },
                ConfigWarning::TypeMismatch {
                    field: "image_text_side".into(),
                    expected: "a side (left, right, up, down)",
                },
                ConfigWarning::UnknownField("background_colour_sideways".into()),
            ]
        );
    }

    #[test]
    fn test_override_colour_coercions() {
        let (cfg, warnings) = ConfigRecord::create(
            ControlType::Panel,
            &ConfigOverrides::new()
                .set("border_colour_default", vec![10.0f32, 20.0, 30.0])
                .set("border_colour_hover", "#0a141eff")
                .set("border_colour_pressed", vec![1.0f32, 2.0, 3.0, 4.0])
                .set("border_colour_disabled", vec![300.0f32, 0.0, 0.0]),
        );
        assert_eq!(cfg.border_colour.default, Color(10, 20, 30, 255));
        assert_eq!(cfg.border_colour.hover, Color(10, 20, 30, 255));
        assert_eq!(cfg.border_colour.pressed, Color(1, 2, 3, 4));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_scroll_axis_flags_override() {
        let (cfg, _) = ConfigRecord::create(
            ControlType::ScrolledWindow,
            &ConfigOverrides::new().set("scroll_x", false),
        );
        assert!(!cfg.scroll_axes.contains(ScrollAxes::X));
        assert!(cfg.scroll_axes.contains(ScrollAxes::Y));
    }

    #[test]
    fn test_template_copy_is_independent() {
        let mut template = ConfigRecord::for_control(ControlType::Button);
        template.background_gradient.default = Some(Gradient::new(
            Vec2::ZERO,
            Vec2::new(0.0, 20.0),
            Color::WHITE,
            Color::BLACK,
        ));
        let (widget_cfg, _) = ConfigRecord::from_template(&template, &ConfigOverrides::new());

        template.update(
            &ConfigOverrides::new()
                .set("background_colour", Color::BLACK)
                .set("background_gradient", None::<Gradient>)
                .set("text_font_face", "Mono"),
        );

        assert_eq!(widget_cfg.background_colour.default, Color::from_rgb(240, 240, 240));
        assert!(widget_cfg.background_gradient.default.is_some());
        assert_eq!(widget_cfg.text_font_face.default, "Verdana");
    }

    // ---- resolver ----

    #[test]
    fn test_pen_suppressed_iff_zero_border() {
        let (cfg, _) = ConfigRecord::create(
            ControlType::Panel,
            &ConfigOverrides::new()
                .set("border_width_default", 0.0)
                .set("border_width_hover", 2.0)
                .set("border_width_pressed", 0.0)
                .set("border_width_disabled", 1.0),
        );
        for s in InteractionState::ALL {
            let p = resolve(&cfg, s);
            assert_eq!(p.pen.is_none(), *cfg.border_width.get(s) == 0.0, "{s}");
        }
        assert_eq!(
            resolve(&cfg, InteractionState::Hover).pen,
            Pen::Stroke {
                width: 2.0,
                color: Color::from_rgb(150, 150, 150)
            }
        );
    }

    #[test]
    fn test_resolve_fill_gradient_or_solid() {
        let g = Gradient::new(Vec2::ZERO, Vec2::new(10.0, 0.0), Color::WHITE, Color::BLACK);
        let (cfg, _) = ConfigRecord::create(
            ControlType::Button,
            &ConfigOverrides::new().set("background_gradient_hover", g),
        );
        assert_eq!(resolve(&cfg, InteractionState::Hover).background, Brush::from(g));
        assert_eq!(
            resolve(&cfg, InteractionState::Default).background,
            Brush::Solid(Color::from_rgb(240, 240, 240))
        );
    }

    #[test]
    fn test_resolve_gradient_scaled_to_px() {
        let g = Gradient::new(Vec2::ZERO, Vec2::new(10.0, 4.0), Color::WHITE, Color::BLACK);
        let (cfg, _) = ConfigRecord::create(
            ControlType::Button,
            &ConfigOverrides::new().set("background_gradient", g),
        );
        let p = with_density(Density { scale: 2.0 }, || {
            resolve(&cfg, InteractionState::Default)
        });
        assert_eq!(
            p.background,
            Brush::Linear {
                start: Vec2::ZERO,
                end: Vec2::new(20.0, 8.0),
                start_color: Color::WHITE,
                end_color: Color::BLACK,
            }
        );
    }

    #[test]
    fn test_default_state_always_arrow_cursor() {
        let (cfg, _) = ConfigRecord::create(
            ControlType::Button,
            &ConfigOverrides::new().set("cursor", CursorKind::Hand),
        );
        assert_eq!(resolve(&cfg, InteractionState::Default).cursor, CursorKind::Arrow);
        assert_eq!(resolve(&cfg, InteractionState::Hover).cursor, CursorKind::Hand);
        assert_eq!(resolve(&cfg, InteractionState::Disabled).cursor, CursorKind::Hand);

        let plain = ConfigRecord::for_control(ControlType::Button);
        assert_eq!(resolve(&plain, InteractionState::Pressed).cursor, CursorKind::Arrow);
    }

    #[test]
    fn test_resolve_image_only_when_set() {
        let (cfg, _) = ConfigRecord::create(
            ControlType::Button,
            &ConfigOverrides::new()
                .set("image_hover", ImageRef::new("star.png"))
                .set("image_size_hover", Size::new(16.0, 16.0))
                .set("image_channels_hover", vec![1.0f32, 1.0, 1.0, 0.5]),
        );
        assert!(resolve(&cfg, InteractionState::Default).image.is_none());
        let img = resolve(&cfg, InteractionState::Hover).image.unwrap();
        assert_eq!(img.image, ImageRef::new("star.png"));
        assert_eq!(img.size, Size::new(16.0, 16.0));
        assert_eq!(img.channels, [1.0, 1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_resolve_named_fails_fast() {
        let cfg = ConfigRecord::default();
        assert!(resolve_named(&cfg, "pressed").is_ok());
        assert_eq!(
            resolve_named(&cfg, "focused").unwrap_err(),
            SkinError::InvalidState("focused".into())
        );
    }

    // ---- layout ----

    #[test]
    fn test_pair_size_policies() {
        let a = Size::new(16.0, 16.0);
        let b = Size::new(40.0, 10.0);
        assert_eq!(pair_size(a, b, Some(4.0), Side::Right), Size::new(60.0, 16.0));
        assert_eq!(pair_size(a, b, Some(4.0), Side::Left), Size::new(60.0, 16.0));
        assert_eq!(pair_size(a, b, Some(4.0), Side::Up), Size::new(40.0, 30.0));
        assert_eq!(pair_size(a, b, Some(4.0), Side::Down), Size::new(40.0, 30.0));
        // unset separation falls back to 6dp
        assert_eq!(pair_size(a, b, None, Side::Right), Size::new(62.0, 16.0));
    }

    #[test]
    fn test_pair_size_degenerate_is_other_object() {
        let b = Size::new(40.0, 10.0);
        for side in [Side::Left, Side::Right, Side::Up, Side::Down] {
            assert_eq!(pair_size(Size::ZERO, b, Some(6.0), side), b);
            assert_eq!(pair_size(Size::new(12.0, 0.0), b, Some(6.0), side), b);
            assert_eq!(pair_size(b, Size::new(0.0, 30.0), None, side), b);
        }
    }

    #[test]
    fn test_side_parse() {
        assert_eq!("up".parse::<Side>(), Ok(Side::Up));
        assert_eq!(
            "center".parse::<Side>(),
            Err(SkinError::InvalidSide("center".into()))
        );
    }

    #[test]
    fn test_place_pair_right() {
        let r = Rect::new(0.0, 0.0, 100.0, 20.0);
        let p = place_pair(r, Size::new(16.0, 16.0), Size::new(40.0, 10.0), Some(4.0), Side::Right);
        // pair width 60 -> starts at 50 - 30
        assert_eq!(p.a, Vec2::new(20.0, 2.0));
        assert_eq!(p.b, Vec2::new(40.0, 5.0));
    }

    #[test]
    fn test_place_pair_left_up_down() {
        let r = Rect::new(10.0, 10.0, 100.0, 100.0);
        let a = Size::new(20.0, 20.0);
        let b = Size::new(30.0, 10.0);

        let l = place_pair(r, a, b, Some(6.0), Side::Left);
        assert_eq!(l.b, Vec2::new(32.0, 55.0));
        assert_eq!(l.a, Vec2::new(68.0, 50.0));

        let u = place_pair(r, a, b, Some(6.0), Side::Up);
        assert_eq!(u.b, Vec2::new(45.0, 42.0));
        assert_eq!(u.a, Vec2::new(50.0, 58.0));

        let d = place_pair(r, a, b, Some(6.0), Side::Down);
        assert_eq!(d.a, Vec2::new(50.0, 42.0));
        assert_eq!(d.b, Vec2::new(45.0, 68.0));
    }

    #[test]
    fn test_place_pair_single_object_centered() {
        let r = Rect::new(0.0, 0.0, 101.0, 21.0);
        let p = place_pair(r, Size::new(10.0, 10.0), Size::ZERO, None, Side::Right);
        assert_eq!(p.a, Vec2::new(45.0, 5.0));
        assert_eq!(p.b, Vec2::ZERO);

        let q = place_pair(r, Size::ZERO, Size::new(10.0, 10.0), None, Side::Up);
        assert_eq!(q.b, Vec2::new(45.0, 5.0));
        assert_eq!(q.a, Vec2::ZERO);
    }

    #[test]
    fn test_place_pair_no_overlap_and_contained() {
        let container = Rect::new(3.0, 7.0, 200.0, 120.0);
        let sizes = [
            (Size::new(16.0, 16.0), Size::new(50.0, 12.0)),
            (Size::new(1.0, 40.0), Size::new(30.0, 3.0)),
            (Size::new(33.0, 17.0), Size::new(33.0, 17.0)),
        ];
        for side in [Side::Left, Side::Right, Side::Up, Side::Down] {
            for (a, b) in sizes {
                for sep in [1.0, 6.0, 11.0] {
                    let p = place_pair(container, a, b, Some(sep), side);
                    let ra = p.a_rect(a);
                    let rb = p.b_rect(b);
                    assert!(!ra.intersects(&rb), "{side} {a:?} {b:?} {sep}");
                    assert!(container.contains_rect(&ra), "{side} a escapes");
                    assert!(container.contains_rect(&rb), "{side} b escapes");
                }
            }
        }
    }

    #[test]
    fn test_place_pair_composes_two_levels() {
        let text = Size::new(30.0, 10.0);
        let image = Size::new(12.0, 12.0);
        let selector = Size::new(20.0, 20.0);
        let block = pair_size(image, text, Some(4.0), Side::Right);
        let control = Rect::new(0.0, 0.0, 120.0, 30.0);

        let outer = place_pair(control, selector, block, Some(5.0), Side::Right);
        let block_rect = outer.b_rect(block);
        let inner = place_pair(block_rect, image, text, Some(4.0), Side::Right);

        assert_eq!(outer.a, Vec2::new(25.0, 5.0));
        assert_eq!(block_rect, Rect::new(50.0, 9.0, 46.0, 12.0));
        assert_eq!(inner.a, Vec2::new(50.0, 9.0));
        assert_eq!(inner.b, Vec2::new(66.0, 10.0));
    }

    #[test]
    fn test_best_size_button_ok() {
        let text = Size::new(14.0, 10.0);
        let size = best_size(
            text,
            Size::ZERO,
            Size::ZERO,
            Separations::default(),
            Sides::default(),
            Padding {
                horizontal: 10.0,
                vertical: 5.0,
            },
        );
        assert_eq!(size, Size::new(34.0, 20.0));
        assert!(size.width >= text.width + 20.0 && size.height >= text.height + 10.0);
    }

    #[test]
    fn test_best_size_radio_with_image() {
        let size = best_size(
            Size::new(40.0, 10.0),
            Size::new(16.0, 16.0),
            Size::new(16.0, 16.0),
            Separations {
                image_text: Some(4.0),
                selector_text: Some(5.0),
            },
            Sides {
                image_text: Side::Down,
                selector_text: Side::Right,
            },
            Padding::uniform(1.0),
        );
        // block 40x30, whole 16+5+40 x 30
        assert_eq!(size, Size::new(63.0, 32.0));
    }

    // ---- interaction ----

    #[test]
    fn test_state_precedence() {
        assert_eq!(InteractionState::derive(false, true, true), InteractionState::Disabled);
        assert_eq!(InteractionState::derive(true, true, false), InteractionState::Pressed);
        assert_eq!(InteractionState::derive(true, false, true), InteractionState::Hover);
        assert_eq!(InteractionState::derive(true, false, false), InteractionState::Default);
    }

    #[test]
    fn test_toggle_click_flips_once() {
        let mut cb = Interaction::new(Behavior::toggle(false));
        assert_eq!(cb.handle(&enter()).repaint, true);
        assert_eq!(cb.state(), InteractionState::Hover);

        let t = cb.handle(&down(Vec2::ZERO));
        assert_eq!(t.capture, Some(Capture::Acquire));
        assert_eq!(cb.state(), InteractionState::Pressed);

        let t = cb.handle(&up(Vec2::ZERO));
        assert_eq!(t.capture, Some(Capture::Release));
        assert_eq!(t.notification, Some(Notification::Toggled(true)));
        assert!(cb.value());
        assert_eq!(cb.state(), InteractionState::Hover);

        // stray up without a press does nothing
        assert_eq!(cb.handle(&up(Vec2::ZERO)), Transition::default());
        assert!(cb.value());
    }

    #[test]
    fn test_release_outside_does_not_flip() {
        let mut cb = Interaction::new(Behavior::toggle(false));
        cb.handle(&enter());
        cb.handle(&down(Vec2::ZERO));
        cb.handle(&leave());
        assert_eq!(cb.state(), InteractionState::Pressed);

        let t = cb.handle(&up(Vec2::new(500.0, 500.0)));
        assert_eq!(t.capture, Some(Capture::Release));
        assert_eq!(t.notification, None);
        assert!(!cb.value());
        assert_eq!(cb.state(), InteractionState::Default);
    }

    #[test]
    fn test_capture_lost_cancels_press() {
        let mut b = Interaction::momentary();
        b.handle(&enter());
        b.handle(&down(Vec2::ZERO));
        let t = b.handle(&PointerEvent::new(PointerEventKind::CaptureLost, Vec2::ZERO));
        assert!(t.repaint);
        assert!(!b.has_capture());
        assert_eq!(b.handle(&up(Vec2::ZERO)).notification, None);
    }

    #[test]
    fn test_momentary_only_activates() {
        let mut b = Interaction::momentary();
        assert_eq!(click(&mut b).notification, Some(Notification::Activated));
        assert!(!b.value());
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut b = Interaction::momentary();
        b.handle(&enter());
        let t = b.handle(&PointerEvent::new(
            PointerEventKind::Down(PointerButton::Secondary),
            Vec2::ZERO,
        ));
        assert_eq!(t, Transition::default());
        assert!(!b.is_pressed());
    }

    #[test]
    fn test_disable_releases_capture_and_blocks_press() {
        let mut b = Interaction::momentary();
        b.handle(&enter());
        b.handle(&down(Vec2::ZERO));
        let t = b.disable();
        assert_eq!(t.capture, Some(Capture::Release));
        assert_eq!(b.state(), InteractionState::Disabled);

        assert_eq!(b.handle(&down(Vec2::ZERO)), Transition::default());
        assert_eq!(b.state(), InteractionState::Disabled);

        b.enable();
        // pointer never left
        assert_eq!(b.state(), InteractionState::Hover);
        b.handle(&leave());
        assert_eq!(b.state(), InteractionState::Default);
        assert!(!b.accepts_focus());
    }

    #[test]
    fn test_radio_group_exclusive() {
        let group = RadioGroup::new();
        let mut radios: Vec<Interaction> = (0..4)
            .map(|_| Interaction::new(Behavior::Radio(group.join())))
            .collect();
        assert_eq!(group.len(), 4);

        click(&mut radios[1]);
        let t = click(&mut radios[3]);
        assert_eq!(t.notification, Some(Notification::Toggled(true)));

        let values: Vec<bool> = radios.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![false, false, false, true]);
        assert_eq!(values.iter().filter(|v| **v).count(), 1);
    }

    #[test]
    fn test_radio_group_builder() {
        let mut groups = RadioGroupBuilder::new();
        let a = groups.member(false);
        let b = groups.member(false);
        let c = groups.member(true);
        let d = groups.member(false);
        assert!(a.group().same_group(b.group()));
        assert!(!b.group().same_group(c.group()));
        assert!(c.group().same_group(d.group()));

        let mut ra = Interaction::new(Behavior::Radio(a));
        let mut rc = Interaction::new(Behavior::Radio(c));
        click(&mut ra);
        click(&mut rc);
        assert!(ra.value() && rc.value());
    }

    #[test]
    fn test_radio_member_drop_leaves_group() {
        let group = RadioGroup::new();
        let m = group.join();
        let _n = group.join();
        drop(m);
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_set_value_radio_clears_others() {
        let group = RadioGroup::new();
        let mut a = Interaction::new(Behavior::Radio(group.join()));
        let mut b = Interaction::new(Behavior::Radio(group.join()));
        assert_eq!(a.set_value(true), None);
        let a_key = match a.behavior() {
            Behavior::Radio(m) => m.key(),
            _ => unreachable!(),
        };
        assert_eq!(b.set_value(true), Some(a_key));
        assert!(!a.value());
        assert!(b.value());
    }

    #[test]
    fn test_radio_click_reports_deselected_member() {
        let group = RadioGroup::new();
        let mut radios: Vec<Interaction> = (0..3)
            .map(|_| Interaction::new(Behavior::Radio(group.join())))
            .collect();
        let keys: Vec<RadioKey> = radios
            .iter()
            .map(|r| match r.behavior() {
                Behavior::Radio(m) => m.key(),
                _ => unreachable!(),
            })
            .collect();

        let t = click(&mut radios[0]);
        assert_eq!(t.deselected, None);

        let t = click(&mut radios[2]);
        assert!(t.repaint);
        assert_eq!(t.deselected, Some(keys[0]));

        // re-clicking the selected member takes nothing from anyone
        let t = click(&mut radios[2]);
        assert_eq!(t.deselected, None);
        assert_eq!(group.selected(), Some(keys[2]));
    }

    // ---- scroll ----

    #[test]
    fn test_thumb_suppressed_when_content_fits() {
        let mut y = ScrollAxis::new(15.0);
        y.set_extent(200.0, 200.0, 200.0);
        assert!(!y.is_visible());
        assert_eq!(y.thumb_size(), 0.0);
        y.set_extent(200.0, 150.0, 200.0);
        assert_eq!(y.thumb_size(), 0.0);
        y.set_extent(200.0, 0.0, 200.0);
        assert!(!y.is_visible());
    }

    #[test]
    fn test_thumb_half_track_when_content_double() {
        let mut y = ScrollAxis::new(15.0);
        assert!(y.set_extent(150.0, 300.0, 150.0));
        assert!((y.thumb_size() - 75.0).abs() < 0.01);
        // unchanged visibility
        assert!(!y.set_extent(150.0, 300.0, 150.0));
    }

    #[test]
    fn test_thumb_offset_follows_position() {
        let mut y = ScrollAxis::new(15.0);
        y.set_extent(100.0, 400.0, 100.0);
        y.set_position(120.0);
        assert_eq!(y.thumb_offset(), 30.0);
        assert!(y.thumb_contains(40.0));
        assert!(!y.thumb_contains(10.0));
    }

    #[test]
    fn test_drag_math() {
        let mut y = ScrollAxis::new(15.0);
        y.set_extent(100.0, 400.0, 100.0);
        assert_eq!(y.drag_to(40.0), None);

        y.begin_drag(10.0);
        assert!(y.is_dragging());
        assert_eq!(y.drag_to(10.0), Some(0.0));
        assert_eq!(y.drag_to(40.0), Some(8.0));
        // past the end overshoots; clamping is the container's job
        let over = y.drag_to(200.0).unwrap();
        assert!(over > y.max_steps());

        y.end_drag();
        assert_eq!(y.drag_to(40.0), None);
    }

    #[test]
    fn test_partial_last_step() {
        let mut y = ScrollAxis::new(15.0);
        y.set_extent(100.0, 200.0, 100.0);
        assert_eq!(y.max_offset(), 100.0);
        assert!((y.max_steps() * 15.0 - 100.0).abs() < 1e-3);
        assert!(y.max_steps().fract() > 0.0);

        y.set_position(y.max_offset());
        assert_eq!(y.thumb_offset() + y.thumb_size(), 100.0);

        y.set_extent(100.0, 80.0, 100.0);
        assert_eq!(y.max_offset(), 0.0);
        assert_eq!(y.max_steps(), 0.0);
    }

    #[test]
    fn test_wheel_target() {
        assert_eq!(wheel_target(10.0, 120.0, 8.0), -5.0);
        assert_eq!(wheel_target(10.0, -16.0, 8.0), 12.0);
    }

    #[test]
    fn test_geometry_relayout_per_axis() {
        let mut g = ScrollGeometry::new(15.0, 15.0);
        let change = g.relayout(
            Size::new(100.0, 100.0),
            Size::new(80.0, 300.0),
            Size::new(100.0, 100.0),
        );
        assert_eq!(change, VisibilityChange { x: false, y: true });
        assert!(change.any());
        assert!(!g.axis(Axis::Horizontal).is_visible());
        assert!(g.axis(Axis::Vertical).is_visible());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_overrides_from_json() {
        let json = r##"{
            "background_colour_hover": "#102030",
            "border_width": 2,
            "image": null,
            "image_size": [16, 16],
            "switch_appearance": true
        }"##;
        let o: ConfigOverrides = serde_json::from_str(json).unwrap();
        assert_eq!(o.len(), 5);
        let (cfg, warnings) = ConfigRecord::create(ControlType::CheckBox, &o);
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(cfg.background_colour.hover, Color::from_rgb(0x10, 0x20, 0x30));
        assert_eq!(cfg.border_width, PerState::uniform(2.0));
        assert_eq!(cfg.image_size.pressed, Size::new(16.0, 16.0));
        assert!(cfg.switch_appearance);
    }
}
