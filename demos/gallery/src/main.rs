//! Builds one of each control, replays a scripted pointer session against
//! them and logs what they paint.
//!
//! Run with `RUST_LOG=debug` to see the interaction transitions, and pass
//! `--fixed` to measure text with fixed advances instead of system fonts.

use skinkit_core::{
    Axis, Capture, ConfigOverrides, ConfigWarning, InputEvent, PointerButton, PointerEvent,
    PointerEventKind, RadioGroupBuilder, Rect, Scene, Size, Vec2, WheelEvent,
};
use skinkit_ui::{
    Button, CheckBox, ComboBox, CosmicMeasure, FixedMeasure, Panel, RadioButton, ScrolledPanel,
    StaticBox, TextMeasure, Widget, dump_scene,
};

const MARGIN: f32 = 8.0;
const COLUMN_WIDTH: f32 = 180.0;

struct Gallery {
    panel: Panel,
    group: StaticBox,
    ok: Button,
    check: CheckBox,
    switch: CheckBox,
    radios: Vec<RadioButton>,
    combo: ComboBox,
    scrolled: ScrolledPanel,
    captured: Option<usize>,
}

/// The demo's overrides are all valid; a warning means a typo here.
fn report(what: &str, warnings: Vec<ConfigWarning>) -> anyhow::Result<()> {
    if let Some(w) = warnings.first() {
        anyhow::bail!("{what}: {w}");
    }
    Ok(())
}

impl Gallery {
    fn build() -> anyhow::Result<Self> {
        let (panel, w) = Panel::new(&ConfigOverrides::new().set("corner_radius", 4.0));
        report("panel", w)?;
        let (group, w) = StaticBox::new("Options", &ConfigOverrides::new());
        report("static box", w)?;
        let (ok, w) = Button::new("OK", &ConfigOverrides::new().set("corner_radius", 3.0));
        report("button", w)?;
        let (check, w) = CheckBox::new("Remember me", false, &ConfigOverrides::new());
        report("check box", w)?;
        let (switch, w) = CheckBox::new(
            "Wi-Fi",
            true,
            &ConfigOverrides::new()
                .set("switch_appearance", true)
                .set("switch_rounded", true)
                .set("corner_radius", 10.0),
        );
        report("switch", w)?;

        let mut groups = RadioGroupBuilder::new();
        let mut radios = Vec::new();
        for (i, label) in ["Small", "Medium", "Large"].into_iter().enumerate() {
            let (r, w) = RadioButton::grouped(label, &mut groups, i == 0, &ConfigOverrides::new());
            report("radio", w)?;
            radios.push(r);
        }

        let (combo, w) = ComboBox::new(
            "Pear",
            ["Apple", "Pear", "Plum", "Quince"]
                .into_iter()
                .map(String::from)
                .collect(),
            &ConfigOverrides::new(),
        );
        report("combo box", w)?;

        let (scrolled, w) =
            ScrolledPanel::new(&ConfigOverrides::new().set("scrollbar_type", "rounded"));
        report("scrolled panel", w)?;

        Ok(Self {
            panel,
            group,
            ok,
            check,
            switch,
            radios,
            combo,
            scrolled,
            captured: None,
        })
    }

    /// Every control in paint order; the panel and frame come first.
    fn widgets(&self) -> Vec<&dyn Widget> {
        let mut out = vec![
            &self.panel as &dyn Widget,
            &self.group,
            &self.ok,
            &self.check,
            &self.switch,
        ];
        out.extend(self.radios.iter().map(|r| r as &dyn Widget));
        out.push(&self.scrolled);
        // last, so its list paints over the rest
        out.push(&self.combo);
        out
    }

    fn widgets_mut(&mut self) -> Vec<&mut dyn Widget> {
        let mut out = vec![
            &mut self.panel as &mut dyn Widget,
            &mut self.group,
            &mut self.ok,
            &mut self.check,
            &mut self.switch,
        ];
        out.extend(self.radios.iter_mut().map(|r| r as &mut dyn Widget));
        out.push(&mut self.scrolled);
        out.push(&mut self.combo);
        out
    }

    /// Stacks the controls in a column inside the static box.
    fn arrange(&mut self, measure: &dyn TextMeasure) {
        let mut sizes = Vec::new();
        for w in self.widgets().iter().skip(2) {
            sizes.push(w.best_size(measure));
        }
        let column: f32 = sizes.iter().map(|s| s.height + MARGIN).sum();
        let inner = Size::new(COLUMN_WIDTH, column);
        let outer = self.group.fit_content(inner, measure);

        self.panel.set_bounds(Rect::new(
            0.0,
            0.0,
            outer.width + 2.0 * MARGIN,
            outer.height + 2.0 * MARGIN,
        ));
        self.group
            .set_bounds(Rect::new(MARGIN, MARGIN, outer.width, outer.height));
        self.group
            .set_parent_background(self.panel.background_colour());

        let content = self.group.content_rect(measure);
        let mut y = content.y;
        for (w, size) in self.widgets_mut().into_iter().skip(2).zip(sizes) {
            let height = if size.height > 0.0 { size.height } else { 60.0 };
            w.set_bounds(Rect::new(content.x, y, content.w.min(COLUMN_WIDTH), height));
            y += height + MARGIN;
        }
        self.scrolled.set_content_size(Size::new(COLUMN_WIDTH, 240.0));
    }

    fn layout(&mut self, measure: &dyn TextMeasure) {
        for w in self.widgets_mut() {
            w.layout(measure);
        }
    }

    fn dispatch(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Pointer(p) => self.dispatch_pointer(p),
            InputEvent::Wheel(w) => {
                self.scrolled.handle_wheel(w).repaint || self.combo.handle_wheel(w).repaint
            }
        }
    }

    fn dispatch_pointer(&mut self, event: &PointerEvent) -> bool {
        let captured = self.captured;
        let mut repaint = false;
        let mut capture = captured;
        for (i, w) in self.widgets_mut().into_iter().enumerate() {
            if captured.is_some_and(|c| c != i) {
                continue;
            }
            let t = w.handle(event);
            repaint |= t.repaint;
            match t.capture {
                Some(Capture::Acquire) => capture = Some(i),
                Some(Capture::Release) => capture = None,
                None => {}
            }
            if let Some(n) = t.notification {
                log::info!("{} -> {n:?}", w.control().kind());
            }
            // the button that lost the selection changed too
            repaint |= t.deselected.is_some();
        }
        self.captured = capture;
        repaint
    }

    fn paint(&self, measure: &dyn TextMeasure) -> Scene {
        let mut scene = Scene::new();
        for w in self.widgets() {
            w.paint(&mut scene, measure);
        }
        scene
    }
}

fn pointer(kind: PointerEventKind, at: Vec2) -> InputEvent {
    InputEvent::Pointer(PointerEvent::new(kind, at))
}

fn click(at: Vec2) -> [InputEvent; 3] {
    [
        pointer(PointerEventKind::Move, at),
        pointer(PointerEventKind::Down(PointerButton::Primary), at),
        pointer(PointerEventKind::Up(PointerButton::Primary), at),
    ]
}

/// Clicks every control once, picks a combo choice and scrolls the panel.
fn script(g: &Gallery, measure: &dyn TextMeasure) -> Vec<InputEvent> {
    let mut events = Vec::new();
    events.extend(click(g.ok.bounds().center()));
    events.extend(click(g.check.bounds().center()));
    events.extend(click(g.switch.bounds().center()));
    events.extend(click(g.radios[2].bounds().center()));

    let combo = g.combo.bounds();
    events.extend(click(combo.center()));
    // the first row of the list opened under the control
    let row = measure.measure("A", &g.combo.control().profile().font).height;
    events.extend(click(Vec2::new(combo.x + 10.0, combo.bottom() + row)));

    let panel = g.scrolled.bounds();
    events.push(InputEvent::Wheel(WheelEvent {
        axis: Axis::Vertical,
        rotation: -120.0,
        position: panel.center(),
    }));
    events.push(pointer(PointerEventKind::Move, Vec2::new(-1.0, -1.0)));
    events
}

fn run(measure: &dyn TextMeasure) -> anyhow::Result<()> {
    let mut gallery = Gallery::build()?;
    gallery.arrange(measure);
    log::info!("initial scene:\n{}", dump_scene(&gallery.paint(measure)));

    let events = script(&gallery, measure);
    for event in &events {
        if gallery.dispatch(event) {
            gallery.layout(measure);
            log::debug!("repaint after {event:?}:\n{}", dump_scene(&gallery.paint(measure)));
        }
    }

    anyhow::ensure!(gallery.check.is_checked(), "check box did not toggle");
    anyhow::ensure!(gallery.radios[2].is_selected(), "radio group did not select");
    log::info!(
        "combo value {:?}, scrolled to {:?}",
        gallery.combo.value(),
        gallery.scrolled.offset()
    );

    let scene = gallery.paint(measure);
    println!("{}", dump_scene(&scene));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    if std::env::args().any(|a| a == "--fixed") {
        run(&FixedMeasure::default())
    } else {
        run(&CosmicMeasure)
    }
}
