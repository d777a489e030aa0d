use std::fmt;
use std::str::FromStr;

use crate::error::SkinError;

/// Discrete interaction state of a control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    #[default]
    Default,
    Hover,
    Pressed,
    Disabled,
}

impl InteractionState {
    pub const ALL: [InteractionState; 4] = [
        InteractionState::Default,
        InteractionState::Hover,
        InteractionState::Pressed,
        InteractionState::Disabled,
    ];

    /// Derives the state with precedence Disabled > Pressed > Hover > Default.
    pub fn derive(enabled: bool, pressed: bool, hover: bool) -> Self {
        if !enabled {
            InteractionState::Disabled
        } else if pressed {
            InteractionState::Pressed
        } else if hover {
            InteractionState::Hover
        } else {
            InteractionState::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionState::Default => "default",
            InteractionState::Hover => "hover",
            InteractionState::Pressed => "pressed",
            InteractionState::Disabled => "disabled",
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionState {
    type Err = SkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(InteractionState::Default),
            "hover" => Ok(InteractionState::Hover),
            "pressed" => Ok(InteractionState::Pressed),
            "disabled" => Ok(InteractionState::Disabled),
            other => Err(SkinError::InvalidState(other.to_string())),
        }
    }
}

/// One value per interaction state. Every state always has a value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerState<T> {
    pub default: T,
    pub hover: T,
    pub pressed: T,
    pub disabled: T,
}

impl<T: Clone> PerState<T> {
    pub fn uniform(v: T) -> Self {
        Self {
            default: v.clone(),
            hover: v.clone(),
            pressed: v.clone(),
            disabled: v,
        }
    }
}

impl<T> PerState<T> {
    pub fn new(default: T, hover: T, pressed: T, disabled: T) -> Self {
        Self {
            default,
            hover,
            pressed,
            disabled,
        }
    }

    pub fn get(&self, state: InteractionState) -> &T {
        match state {
            InteractionState::Default => &self.default,
            InteractionState::Hover => &self.hover,
            InteractionState::Pressed => &self.pressed,
            InteractionState::Disabled => &self.disabled,
        }
    }

    pub fn get_mut(&mut self, state: InteractionState) -> &mut T {
        match state {
            InteractionState::Default => &mut self.default,
            InteractionState::Hover => &mut self.hover,
            InteractionState::Pressed => &mut self.pressed,
            InteractionState::Disabled => &mut self.disabled,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.default, &self.hover, &self.pressed, &self.disabled].into_iter()
    }
}

impl PerState<f32> {
    /// Largest value over the four states.
    pub fn max_value(&self) -> f32 {
        self.iter().fold(0.0f32, |m, v| m.max(*v))
    }
}
