//! # Config records
//!
//! A [`ConfigRecord`] is the flat bag of visual parameters one control owns.
//! State-keyed attributes are [`PerState`] values, so every state always has
//! a value. Sizes and lengths are in dp.
//!
//! Records are built from a per-control default table and an overlay:
//!
//! ```rust
//! use skinkit_core::*;
//!
//! let overrides = ConfigOverrides::new()
//!     .set("border_width_hover", 2.0)
//!     .set("background_colour", "#336699")
//!     .set("bordr_colour", Color::BLACK); // typo
//!
//! let (cfg, warnings) = ConfigRecord::create(ControlType::Button, &overrides);
//! assert_eq!(cfg.border_width.hover, 2.0);
//! assert_eq!(cfg.background_colour.pressed, Color::from_rgb(0x33, 0x66, 0x99));
//! assert_eq!(warnings, vec![ConfigWarning::UnknownField("bordr_colour".into())]);
//! ```
//!
//! Keys name a field; state-keyed fields take a `_default`, `_hover`,
//! `_pressed` or `_disabled` suffix, or no suffix to set all four states.
//! Unknown keys and mistyped values never fail: they come back as
//! [`ConfigWarning`]s (and are logged) and the previous value is kept.
//!
//! Records are plain values. Cloning one shares nothing with the source, so a
//! template can be handed to many controls and changed afterwards without
//! touching controls built from it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::SkinError;
use crate::{Color, Gradient, InteractionState, PerState, Side, Size, Vec2};

/// Mouse cursor shapes a control can ask the host for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorKind {
    #[default]
    Arrow,
    Hand,
    IBeam,
    Crosshair,
    NotAllowed,
    Wait,
    ResizeNs,
    ResizeEw,
}

impl FromStr for CursorKind {
    type Err = SkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "arrow" => CursorKind::Arrow,
            "hand" => CursorKind::Hand,
            "ibeam" => CursorKind::IBeam,
            "crosshair" => CursorKind::Crosshair,
            "not_allowed" => CursorKind::NotAllowed,
            "wait" => CursorKind::Wait,
            "resize_ns" => CursorKind::ResizeNs,
            "resize_ew" => CursorKind::ResizeEw,
            other => return Err(SkinError::InvalidCursor(other.to_string())),
        })
    }
}

/// Reference to a host-loaded bitmap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollbarType {
    #[default]
    Rectangular,
    Rounded,
}

impl FromStr for ScrollbarType {
    type Err = SkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangular" => Ok(ScrollbarType::Rectangular),
            "rounded" => Ok(ScrollbarType::Rounded),
            other => Err(SkinError::InvalidScrollbarType(other.to_string())),
        }
    }
}

bitflags::bitflags! {
    /// Axes a scrollable container may scroll along.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ScrollAxes: u8 {
        const X = 1 << 0;
        const Y = 1 << 1;
    }
}

/// Controls with a built-in default table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlType {
    Panel,
    Button,
    CheckBox,
    RadioButton,
    ComboBox,
    DropDown,
    StaticBox,
    ScrolledWindow,
}

impl ControlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlType::Panel => "Panel",
            ControlType::Button => "Button",
            ControlType::CheckBox => "CheckBox",
            ControlType::RadioButton => "RadioButton",
            ControlType::ComboBox => "ComboBox",
            ControlType::DropDown => "DropDown",
            ControlType::StaticBox => "StaticBox",
            ControlType::ScrolledWindow => "ScrolledWindow",
        }
    }

    /// The overlay applied to the base record for this control.
    pub fn default_overrides(&self) -> ConfigOverrides {
        let button = || {
            ConfigOverrides::new()
                .set("background_colour_default", Color::from_rgb(240, 240, 240))
                .set("background_colour_hover", Color::from_rgb(200, 200, 200))
                .set("background_colour_pressed", Color::from_rgb(180, 180, 180))
                .set("border_colour", Color::BLACK)
                .set("border_colour_default", Color::from_rgb(200, 200, 200))
                .set("border_width", 0.0)
                .set("border_width_default", 1.0)
                .set("text_colour", Color::from_rgb(20, 20, 20))
                .set("foreground_colour_hover", Color::from_rgb(100, 100, 100))
                .set("foreground_colour_pressed", Color::from_rgb(70, 70, 70))
        };
        let toggle = || {
            ConfigOverrides::new()
                .set("background_colour", Color::from_rgb(240, 240, 240))
                .set("background_colour_pressed", Color::from_rgb(180, 180, 180))
                .set("border_colour", Color::BLACK)
                .set("border_colour_default", Color::from_rgb(200, 200, 200))
                .set("border_width", 1.0)
                .set("border_width_pressed", 0.0)
                .set("text_colour", Color::from_rgb(20, 20, 20))
                .set("background_colour_active", Color::from_rgb(57, 117, 186))
        };
        match self {
            ControlType::Panel => ConfigOverrides::new()
                .set("background_colour", Color::WHITE)
                .set("border_colour", Color::from_rgb(150, 150, 150))
                .set("border_width", 0.0)
                .set("corner_radius", 0.0),
            ControlType::Button | ControlType::ComboBox | ControlType::DropDown => button(),
            ControlType::CheckBox => toggle()
                .set("corner_radius", 3.0)
                .set("switch_radius", 3.0)
                .set("switch_selector_padding", 1.0),
            ControlType::RadioButton => toggle(),
            ControlType::StaticBox => ConfigOverrides::new()
                .set("border_colour", Color::BLACK)
                .set("border_width", 1.0)
                .set("corner_radius", 0.0),
            ControlType::ScrolledWindow => ConfigOverrides::new()
                .set("background_colour_default", Color::from_rgb(210, 210, 210))
                .set("background_colour_hover", Color::from_rgb(200, 200, 200))
                .set("background_colour_pressed", Color::from_rgb(180, 180, 180))
                .set("foreground_colour_default", Color::from_rgb(150, 150, 150))
                .set("foreground_colour_hover", Color::from_rgb(100, 100, 100))
                .set("foreground_colour_pressed", Color::from_rgb(70, 70, 70))
                .set("border_colour", Color::BLACK)
                .set("border_width", 0.0)
                .set("scrollbar_type", ScrollbarType::Rectangular),
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlType {
    type Err = SkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Panel" => ControlType::Panel,
            "Button" => ControlType::Button,
            "CheckBox" => ControlType::CheckBox,
            "RadioButton" => ControlType::RadioButton,
            "ComboBox" => ControlType::ComboBox,
            "DropDown" => ControlType::DropDown,
            "StaticBox" => ControlType::StaticBox,
            "ScrolledWindow" => ControlType::ScrolledWindow,
            other => return Err(SkinError::UnknownControlType(other.to_string())),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigRecord {
    // per state
    pub border_width: PerState<f32>,
    pub border_colour: PerState<Color>,
    pub background_colour: PerState<Color>,
    pub background_gradient: PerState<Option<Gradient>>,
    pub foreground_colour: PerState<Color>,
    pub foreground_gradient: PerState<Option<Gradient>>,
    pub background_colour_active: PerState<Color>,
    pub foreground_colour_active: PerState<Color>,
    pub corner_radius: PerState<f32>,
    pub text_font_size: PerState<f32>,
    pub text_font_face: PerState<String>,
    pub text_colour: PerState<Color>,
    pub image: PerState<Option<ImageRef>>,
    /// RGBA multipliers applied to the image, identity by default.
    pub image_channels: PerState<[f32; 4]>,
    pub image_size: PerState<Size>,
    /// `None` means the arrow cursor.
    pub cursor: PerState<Option<CursorKind>>,

    // image and text
    pub image_text_separation: Option<f32>,
    pub image_text_side: Side,
    pub image_use_max_dimensions: bool,

    // selector and image+text block
    pub selector_text_separation: Option<f32>,
    pub selector_text_side: Side,

    pub checkbox_width: f32,
    pub checkbox_height: f32,
    pub checkbox_active_deflate: f32,
    /// Horizontal and vertical multipliers on `checkbox_active_deflate`.
    pub check_deflate_scale: Vec2,
    pub check_stroke_width: f32,
    pub check_colour: Color,

    pub switch_appearance: bool,
    pub switch_width: f32,
    pub switch_height: f32,
    pub switch_radius: f32,
    pub switch_rounded: bool,
    pub switch_selector_padding: f32,
    pub switch_selector_border_width: f32,
    pub switch_selector_border_colour: Color,
    pub switch_selector_colour: Color,

    pub radiobutton_diameter: f32,
    pub radio_dot_divisor: f32,

    pub arrow_width: f32,
    pub arrow_height: f32,
    pub arrow_text_separation: Option<f32>,
    /// Side of the value text relative to the arrow.
    pub arrow_text_side: Side,
    pub arrow_colour: Color,
    pub value_inset: f32,
    pub dropdown_max_height: f32,

    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub padding_all_sides: f32,

    pub scroll_axes: ScrollAxes,
    pub scroll_units_x: f32,
    pub scroll_units_y: f32,
    pub scrollbar_type: ScrollbarType,
    pub scrollbar_width: f32,
    pub scrollbar_padding: f32,
    pub wheel_divisor: f32,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            border_width: PerState::uniform(0.0),
            border_colour: PerState::uniform(Color::BLACK),
            background_colour: PerState::uniform(Color::from_rgb(150, 150, 150)),
            background_gradient: PerState::uniform(None),
            foreground_colour: PerState::uniform(Color::WHITE),
            foreground_gradient: PerState::uniform(None),
            background_colour_active: PerState::uniform(Color::from_rgb(0, 0, 255)),
            foreground_colour_active: PerState::uniform(Color::WHITE),
            corner_radius: PerState::uniform(0.0),
            text_font_size: PerState::uniform(8.0),
            text_font_face: PerState::uniform("Verdana".to_string()),
            text_colour: PerState::uniform(Color::BLACK),
            image: PerState::uniform(None),
            image_channels: PerState::uniform([1.0; 4]),
            image_size: PerState::uniform(Size::ZERO),
            cursor: PerState::uniform(None),

            image_text_separation: None,
            image_text_side: Side::Right,
            image_use_max_dimensions: false,
            selector_text_separation: None,
            selector_text_side: Side::Right,

            checkbox_width: 20.0,
            checkbox_height: 20.0,
            checkbox_active_deflate: 5.0,
            check_deflate_scale: Vec2 { x: 1.2, y: 1.3 },
            check_stroke_width: 2.0,
            check_colour: Color::WHITE,

            switch_appearance: false,
            switch_width: 50.0,
            switch_height: 20.0,
            switch_radius: 0.0,
            switch_rounded: false,
            switch_selector_padding: 0.0,
            switch_selector_border_width: 0.0,
            switch_selector_border_colour: Color::from_rgb(150, 150, 150),
            switch_selector_colour: Color::WHITE,

            radiobutton_diameter: 16.0,
            radio_dot_divisor: 5.0,

            arrow_width: 10.0,
            arrow_height: 5.0,
            arrow_text_separation: Some(6.0),
            arrow_text_side: Side::Left,
            arrow_colour: Color::BLACK,
            value_inset: 5.0,
            dropdown_max_height: 150.0,

            padding_horizontal: 10.0,
            padding_vertical: 5.0,
            padding_all_sides: 0.0,

            scroll_axes: ScrollAxes::X | ScrollAxes::Y,
            scroll_units_x: 15.0,
            scroll_units_y: 15.0,
            scrollbar_type: ScrollbarType::Rectangular,
            scrollbar_width: 15.0,
            scrollbar_padding: 3.0,
            wheel_divisor: 8.0,
        }
    }
}

/// A loosely typed override value. Setters coerce where it is unambiguous
/// (hex strings and number lists to colours, names to enums, ...).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(untagged))]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Number(f32),
    Text(String),
    List(Vec<f32>),
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Colour(Color),
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Gradient(Gradient),
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Size(Size),
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Side(Side),
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Cursor(CursorKind),
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Image(ImageRef),
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Scrollbar(ScrollbarType),
}

impl From<f32> for ConfigValue {
    fn from(v: f32) -> Self {
        ConfigValue::Number(v)
    }
}
impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        ConfigValue::Number(v as f32)
    }
}
impl From<i32> for ConfigValue {
    fn from(v: i32) -> Self {
        ConfigValue::Number(v as f32)
    }
}
impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        ConfigValue::Bool(v)
    }
}
impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        ConfigValue::Text(v.to_string())
    }
}
impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        ConfigValue::Text(v)
    }
}
impl From<Color> for ConfigValue {
    fn from(v: Color) -> Self {
        ConfigValue::Colour(v)
    }
}
impl From<Gradient> for ConfigValue {
    fn from(v: Gradient) -> Self {
        ConfigValue::Gradient(v)
    }
}
impl From<Size> for ConfigValue {
    fn from(v: Size) -> Self {
        ConfigValue::Size(v)
    }
}
impl From<Side> for ConfigValue {
    fn from(v: Side) -> Self {
        ConfigValue::Side(v)
    }
}
impl From<CursorKind> for ConfigValue {
    fn from(v: CursorKind) -> Self {
        ConfigValue::Cursor(v)
    }
}
impl From<ImageRef> for ConfigValue {
    fn from(v: ImageRef) -> Self {
        ConfigValue::Image(v)
    }
}
impl From<ScrollbarType> for ConfigValue {
    fn from(v: ScrollbarType) -> Self {
        ConfigValue::Scrollbar(v)
    }
}
impl From<Vec<f32>> for ConfigValue {
    fn from(v: Vec<f32>) -> Self {
        ConfigValue::List(v)
    }
}
impl<T: Into<ConfigValue>> From<Option<T>> for ConfigValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ConfigValue::Null, Into::into)
    }
}

/// Ordered field overlay.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(from = "std::collections::BTreeMap<String, ConfigValue>")
)]
pub struct ConfigOverrides {
    entries: Vec<(String, ConfigValue)>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Appends `other`'s entries after ours; later entries win.
    pub fn extend(mut self, other: ConfigOverrides) -> Self {
        self.entries.extend(other.entries);
        self
    }
}

impl From<std::collections::BTreeMap<String, ConfigValue>> for ConfigOverrides {
    fn from(map: std::collections::BTreeMap<String, ConfigValue>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

/// Non-fatal problem found while overlaying a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    #[error("unknown config field '{0}'")]
    UnknownField(String),

    #[error("config field '{field}' expects {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },
}

trait Coerce: Sized {
    const EXPECTED: &'static str;
    fn coerce(v: &ConfigValue) -> Option<Self>;
}

impl Coerce for f32 {
    const EXPECTED: &'static str = "a number";
    fn coerce(v: &ConfigValue) -> Option<Self> {
        match v {
            ConfigValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl Coerce for Option<f32> {
    const EXPECTED: &'static str = "a number or null";
    fn coerce(v: &ConfigValue) -> Option<Self> {
        match v {
            ConfigValue::Null => Some(None),
            ConfigValue::Number(n) => Some(Some(*n)),
            _ => None,
        }
    }
}

impl Coerce for bool {
    const EXPECTED: &'static str = "a boolean";
    fn coerce(v: &ConfigValue) -> Option<Self> {
        match v {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl Coerce for String {
    const EXPECTED: &'static str = "a string";
    fn coerce(v: &ConfigValue) -> Option<Self> {
        match v {
            ConfigValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

fn channel(n: f32) -> Option<u8> {
    (0.0..=255.0).contains(&n).then_some(n as u8)
}

impl Coerce for Color {
    const EXPECTED: &'static str = "a colour (hex string or 3/4 channel list)";
    fn coerce(v: &ConfigValue) -> Option<Self> {
        match v {
            ConfigValue::Colour(c) => Some(*c),
            ConfigValue::Text(s) => Color::parse_hex(s),
            ConfigValue::List(l) => match l.as_slice() {
                [r, g, b] => Some(Color(channel(*r)?, channel(*g)?, channel(*b)?, 255)),
                [r, g, b, a] => Some(Color(
                    channel(*r)?,
                    channel(*g)?,
                    channel(*b)?,
                    channel(*a)?,
                )),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Coerce for Option<Gradient> {
    const EXPECTED: &'static str = "a gradient or null";
    fn coerce(v: &ConfigValue) -> Option<Self> {
        match v {
            ConfigValue::Null => Some(None),
            ConfigValue::Gradient(g) => Some(Some(*g)),
            _ => None,
        }
    }
}

impl Coerce for Size {
    const EXPECTED: &'static str = "a size ([w, h])";
    fn coerce(v: &ConfigValue) -> Option<Self> {
        match v {
            ConfigValue::Size(s) => Some(*s),
            ConfigValue::List(l) => match l.as_slice() {
                [w, h] => Some(Size::new(*w, *h)),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Coerce for Vec2 {
    const EXPECTED: &'static str = "a pair ([x, y])";
    fn coerce(v: &ConfigValue) -> Option<Self> {
        match v {
            ConfigValue::List(l) => match l.as_slice() {
                [x, y] => Some(Vec2::new(*x, *y)),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Coerce for [f32; 4] {
    const EXPECTED: &'static str = "four channel multipliers";
    fn coerce(v: &ConfigValue) -> Option<Self> {
        match v {
            ConfigValue::List(l) => <[f32; 4]>::try_from(l.as_slice()).ok(),
            _ => None,
        }
    }
}

impl Coerce for Side {
    const EXPECTED: &'static str = "a side (left, right, up, down)";
    fn coerce(v: &ConfigValue) -> Option<Self> {
        match v {
            ConfigValue::Side(s) => Some(*s),
            ConfigValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl Coerce for Option<CursorKind> {
    const EXPECTED: &'static str = "a cursor name or null";
    fn coerce(v: &ConfigValue) -> Option<Self> {
        match v {
            ConfigValue::Null => Some(None),
            ConfigValue::Cursor(c) => Some(Some(*c)),
            ConfigValue::Text(s) => s.parse().ok().map(Some),
            _ => None,
        }
    }
}

impl Coerce for Option<ImageRef> {
    const EXPECTED: &'static str = "an image reference or null";
    fn coerce(v: &ConfigValue) -> Option<Self> {
        match v {
            ConfigValue::Null => Some(None),
            ConfigValue::Image(i) => Some(Some(i.clone())),
            ConfigValue::Text(s) => Some(Some(ImageRef(s.clone()))),
            _ => None,
        }
    }
}

impl Coerce for ScrollbarType {
    const EXPECTED: &'static str = "rectangular or rounded";
    fn coerce(v: &ConfigValue) -> Option<Self> {
        match v {
            ConfigValue::Scrollbar(t) => Some(*t),
            ConfigValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }
}

fn coerce<T: Coerce>(key: &str, v: &ConfigValue) -> Result<T, ConfigWarning> {
    T::coerce(v).ok_or_else(|| ConfigWarning::TypeMismatch {
        field: key.to_string(),
        expected: T::EXPECTED,
    })
}

fn set_states<T: Clone>(slot: &mut PerState<T>, states: &[InteractionState], v: T) {
    for s in states {
        *slot.get_mut(*s) = v.clone();
    }
}

fn split_state_suffix(key: &str) -> Option<(&str, InteractionState)> {
    let (field, suffix) = key.rsplit_once('_')?;
    let state = suffix.parse().ok()?;
    Some((field, state))
}

macro_rules! state_fields {
    ($rec:ident, $field:expr, $states:expr, $key:expr, $value:expr; $($name:ident),+ $(,)?) => {
        match $field {
            $(stringify!($name) => {
                set_states(&mut $rec.$name, $states, coerce($key, $value)?);
                Ok(())
            })+
            _ => Err(ConfigWarning::UnknownField($key.to_string())),
        }
    };
}

macro_rules! scalar_fields {
    ($rec:ident, $key:expr, $value:expr; $($name:ident),+ $(,)?) => {
        match $key {
            $(stringify!($name) => {
                $rec.$name = coerce($key, $value)?;
                Ok(())
            })+
            _ => Err(ConfigWarning::UnknownField($key.to_string())),
        }
    };
}

impl ConfigRecord {
    /// Built-in defaults for `kind`.
    pub fn for_control(kind: ControlType) -> Self {
        let mut rec = ConfigRecord::default();
        for w in rec.update(&kind.default_overrides()) {
            log::error!("default table for {kind} is inconsistent: {w}");
        }
        rec
    }

    /// Defaults for `kind` with `overrides` laid on top.
    pub fn create(kind: ControlType, overrides: &ConfigOverrides) -> (Self, Vec<ConfigWarning>) {
        let mut rec = Self::for_control(kind);
        let warnings = rec.update(overrides);
        (rec, warnings)
    }

    /// A private copy of `template` with `overrides` laid on top.
    pub fn from_template(
        template: &ConfigRecord,
        overrides: &ConfigOverrides,
    ) -> (Self, Vec<ConfigWarning>) {
        template.with_overrides(overrides)
    }

    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> (Self, Vec<ConfigWarning>) {
        let mut rec = self.clone();
        let warnings = rec.update(overrides);
        (rec, warnings)
    }

    /// Applies each entry in order. Rejected entries keep the prior value and
    /// are returned (and logged) as warnings.
    pub fn update(&mut self, overrides: &ConfigOverrides) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        for (key, value) in overrides.iter() {
            if let Err(w) = self.apply(key, value) {
                log::warn!("{w}; keeping previous value");
                warnings.push(w);
            }
        }
        warnings
    }

    fn apply(&mut self, key: &str, value: &ConfigValue) -> Result<(), ConfigWarning> {
        if let Some((field, state)) = split_state_suffix(key) {
            match self.apply_state(field, std::slice::from_ref(&state), key, value) {
                Err(ConfigWarning::UnknownField(_)) => {}
                done => return done,
            }
        }
        match self.apply_state(key, &InteractionState::ALL, key, value) {
            Err(ConfigWarning::UnknownField(_)) => {}
            done => return done,
        }
        self.apply_scalar(key, value)
    }

    fn apply_state(
        &mut self,
        field: &str,
        states: &[InteractionState],
        key: &str,
        value: &ConfigValue,
    ) -> Result<(), ConfigWarning> {
        let rec = self;
        state_fields!(rec, field, states, key, value;
            border_width,
            border_colour,
            background_colour,
            background_gradient,
            foreground_colour,
            foreground_gradient,
            background_colour_active,
            foreground_colour_active,
            corner_radius,
            text_font_size,
            text_font_face,
            text_colour,
            image,
            image_channels,
            image_size,
            cursor,
        )
    }

    fn apply_scalar(&mut self, key: &str, value: &ConfigValue) -> Result<(), ConfigWarning> {
        match key {
            "scroll_x" | "scroll_y" => {
                let on: bool = coerce(key, value)?;
                let axis = if key == "scroll_x" {
                    ScrollAxes::X
                } else {
                    ScrollAxes::Y
                };
                self.scroll_axes.set(axis, on);
                return Ok(());
            }
            _ => {}
        }
        let rec = self;
        scalar_fields!(rec, key, value;
            image_text_separation,
            image_text_side,
            image_use_max_dimensions,
            selector_text_separation,
            selector_text_side,
            checkbox_width,
            checkbox_height,
            checkbox_active_deflate,
            check_deflate_scale,
            check_stroke_width,
            check_colour,
            switch_appearance,
            switch_width,
            switch_height,
            switch_radius,
            switch_rounded,
            switch_selector_padding,
            switch_selector_border_width,
            switch_selector_border_colour,
            switch_selector_colour,
            radiobutton_diameter,
            radio_dot_divisor,
            arrow_width,
            arrow_height,
            arrow_text_separation,
            arrow_text_side,
            arrow_colour,
            value_inset,
            dropdown_max_height,
            padding_horizontal,
            padding_vertical,
            padding_all_sides,
            scroll_units_x,
            scroll_units_y,
            scrollbar_type,
            scrollbar_width,
            scrollbar_padding,
            wheel_divisor,
        )
    }

    /// Largest border width over the four states, used as side padding.
    pub fn max_border_width(&self) -> f32 {
        self.border_width.max_value()
    }

    /// Largest image extent over the four states.
    pub fn max_image_size(&self) -> Size {
        self.image_size.iter().fold(Size::ZERO, |m, s| m.max(*s))
    }

    /// Size of the selector glyph a checkbox draws in its current appearance.
    pub fn toggle_selector_size(&self) -> Size {
        if self.switch_appearance {
            Size::new(self.switch_width, self.switch_height)
        } else {
            Size::new(self.checkbox_width, self.checkbox_height)
        }
    }
}
