//! # Interaction state machine
//!
//! Each control owns an [`Interaction`]: two pointer flags plus an enabled
//! flag, from which the [`InteractionState`] is derived (never stored).
//! Pointer events go through [`Interaction::handle`], which returns a
//! [`Transition`] telling the host whether to repaint, whether to take or
//! release pointer capture, and whether the control activated.
//!
//! What activation means depends on the [`Behavior`]:
//!
//! - `Momentary` (buttons) only emits [`Notification::Activated`].
//! - `Toggle` (checkboxes, switches) flips its value first, then emits
//!   [`Notification::Toggled`].
//! - `Radio` clears every other member of its [`RadioGroup`], sets itself,
//!   then emits [`Notification::Toggled`].
//!
//! ```rust
//! use skinkit_core::*;
//!
//! let mut cb = Interaction::new(Behavior::toggle(false));
//! let at = Vec2::new(4.0, 4.0);
//! cb.handle(&PointerEvent::new(PointerEventKind::Enter, at));
//! cb.handle(&PointerEvent::new(PointerEventKind::Down(PointerButton::Primary), at));
//! let t = cb.handle(&PointerEvent::new(PointerEventKind::Up(PointerButton::Primary), at));
//! assert_eq!(t.notification, Some(Notification::Toggled(true)));
//! assert!(cb.value());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

use crate::input::{PointerEvent, PointerEventKind};
use crate::InteractionState;

new_key_type! {
    pub struct RadioKey;
}

/// Shared handle to one mutually exclusive radio group. Values live in the
/// group; members hold a key into it.
#[derive(Clone, Default)]
pub struct RadioGroup {
    members: Rc<RefCell<SlotMap<RadioKey, bool>>>,
}

impl RadioGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member with value `false`.
    pub fn join(&self) -> RadioMember {
        let key = self.members.borrow_mut().insert(false);
        RadioMember {
            group: self.clone(),
            key,
        }
    }

    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    /// Key of the selected member, if any.
    pub fn selected(&self) -> Option<RadioKey> {
        self.members
            .borrow()
            .iter()
            .find_map(|(k, v)| v.then_some(k))
    }

    fn value(&self, key: RadioKey) -> bool {
        self.members.borrow().get(key).copied().unwrap_or(false)
    }

    /// Selects `key` and returns the member it took the selection from.
    fn select(&self, key: RadioKey) -> Option<RadioKey> {
        let mut members = self.members.borrow_mut();
        let mut previous = None;
        for (k, v) in members.iter_mut() {
            if k != key && *v {
                log::debug!("radio {k:?} deselected");
                *v = false;
                previous = Some(k);
            }
        }
        if let Some(v) = members.get_mut(key) {
            *v = true;
        }
        previous
    }

    fn set(&self, key: RadioKey, value: bool) {
        if let Some(v) = self.members.borrow_mut().get_mut(key) {
            *v = value;
        }
    }

    fn leave(&self, key: RadioKey) {
        self.members.borrow_mut().remove(key);
    }

    pub fn same_group(&self, other: &RadioGroup) -> bool {
        Rc::ptr_eq(&self.members, &other.members)
    }
}

impl std::fmt::Debug for RadioGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadioGroup")
            .field("members", &self.len())
            .field("selected", &self.selected())
            .finish()
    }
}

/// Membership of one radio button in a group. Dropping it leaves the group.
#[derive(Debug)]
pub struct RadioMember {
    group: RadioGroup,
    key: RadioKey,
}

impl RadioMember {
    pub fn key(&self) -> RadioKey {
        self.key
    }

    pub fn group(&self) -> &RadioGroup {
        &self.group
    }

    pub fn value(&self) -> bool {
        self.group.value(self.key)
    }
}

impl Drop for RadioMember {
    fn drop(&mut self) {
        self.group.leave(self.key);
    }
}

/// Assigns radio buttons to groups in creation order: a button flagged as
/// starting a group opens a new one, every other button joins the most
/// recently opened group (or opens the first one).
#[derive(Debug, Default)]
pub struct RadioGroupBuilder {
    last: Option<RadioGroup>,
}

impl RadioGroupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member(&mut self, starts_group: bool) -> RadioMember {
        match &self.last {
            Some(group) if !starts_group => group.join(),
            _ => {
                let group = RadioGroup::new();
                let member = group.join();
                self.last = Some(group);
                member
            }
        }
    }

    pub fn current(&self) -> Option<&RadioGroup> {
        self.last.as_ref()
    }
}

/// What a completed click does to the control's value.
#[derive(Debug)]
pub enum Behavior {
    Momentary,
    Toggle(bool),
    Radio(RadioMember),
}

impl Behavior {
    pub fn toggle(initial: bool) -> Self {
        Behavior::Toggle(initial)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
    /// A momentary control was clicked.
    Activated,
    /// A toggle or radio control changed (or re-asserted) its value.
    Toggled(bool),
    /// A list control picked the row at this index.
    Selected(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capture {
    Acquire,
    Release,
}

/// Outcome of one event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub repaint: bool,
    pub capture: Option<Capture>,
    pub notification: Option<Notification>,
    /// Radio member that lost the selection; the host repaints it too.
    pub deselected: Option<RadioKey>,
}

impl Transition {
    fn repaint() -> Self {
        Self {
            repaint: true,
            ..Default::default()
        }
    }
}

#[derive(Debug)]
pub struct Interaction {
    enabled: bool,
    pressed: bool,
    hover: bool,
    captured: bool,
    behavior: Behavior,
}

impl Interaction {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            enabled: true,
            pressed: false,
            hover: false,
            captured: false,
            behavior,
        }
    }

    pub fn momentary() -> Self {
        Self::new(Behavior::Momentary)
    }

    pub fn state(&self) -> InteractionState {
        InteractionState::derive(self.enabled, self.pressed, self.hover)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_hovered(&self) -> bool {
        self.hover
    }

    pub fn has_capture(&self) -> bool {
        self.captured
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Current boolean value; always false for momentary controls.
    pub fn value(&self) -> bool {
        match &self.behavior {
            Behavior::Momentary => false,
            Behavior::Toggle(v) => *v,
            Behavior::Radio(m) => m.value(),
        }
    }

    /// Sets the value without notifying. Setting a radio member to true
    /// clears the rest of its group and returns the member that lost the
    /// selection.
    pub fn set_value(&mut self, value: bool) -> Option<RadioKey> {
        match &mut self.behavior {
            Behavior::Momentary => None,
            Behavior::Toggle(v) => {
                *v = value;
                None
            }
            Behavior::Radio(m) if value => m.group.select(m.key),
            Behavior::Radio(m) => {
                m.group.set(m.key, false);
                None
            }
        }
    }

    /// Controls never take keyboard focus.
    pub fn accepts_focus(&self) -> bool {
        false
    }

    pub fn handle(&mut self, event: &PointerEvent) -> Transition {
        let before = self.state();
        let mut t = match event.event {
            PointerEventKind::Enter => {
                self.hover = true;
                Transition::default()
            }
            PointerEventKind::Leave => {
                self.hover = false;
                Transition::default()
            }
            PointerEventKind::Down(_) if event.is_primary_down() => self.press(),
            PointerEventKind::Up(_) if event.is_primary_up() => self.release(),
            PointerEventKind::CaptureLost => self.cancel(),
            _ => Transition::default(),
        };
        let after = self.state();
        if before != after {
            log::debug!("interaction {before} -> {after}");
            t.repaint = true;
        }
        t
    }

    fn press(&mut self) -> Transition {
        if !self.enabled || self.pressed {
            return Transition::default();
        }
        self.pressed = true;
        self.captured = true;
        Transition {
            repaint: true,
            capture: Some(Capture::Acquire),
            ..Default::default()
        }
    }

    fn release(&mut self) -> Transition {
        if !self.pressed {
            return Transition::default();
        }
        self.pressed = false;
        let mut t = Transition::repaint();
        if self.captured {
            self.captured = false;
            t.capture = Some(Capture::Release);
        }
        if self.hover {
            let (notification, deselected) = self.activate();
            t.notification = Some(notification);
            t.deselected = deselected;
        }
        t
    }

    fn cancel(&mut self) -> Transition {
        let was_pressed = self.pressed;
        self.pressed = false;
        self.captured = false;
        Transition {
            repaint: was_pressed,
            ..Default::default()
        }
    }

    fn activate(&mut self) -> (Notification, Option<RadioKey>) {
        match &mut self.behavior {
            Behavior::Momentary => (Notification::Activated, None),
            Behavior::Toggle(v) => {
                *v = !*v;
                (Notification::Toggled(*v), None)
            }
            Behavior::Radio(m) => (Notification::Toggled(true), m.group.select(m.key)),
        }
    }

    /// Enables or disables the control. Disabling drops any press and
    /// releases capture.
    pub fn set_enabled(&mut self, enabled: bool) -> Transition {
        if self.enabled == enabled {
            return Transition::default();
        }
        self.enabled = enabled;
        let mut t = Transition::repaint();
        if !enabled {
            self.pressed = false;
            if self.captured {
                self.captured = false;
                t.capture = Some(Capture::Release);
            }
        }
        t
    }

    pub fn enable(&mut self) -> Transition {
        self.set_enabled(true)
    }

    pub fn disable(&mut self) -> Transition {
        self.set_enabled(false)
    }
}
