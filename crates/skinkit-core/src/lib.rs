//! # Skinkit core
//!
//! The shared engines behind skinkit's custom-drawn controls. A control owns
//! a [`ConfigRecord`] and an [`Interaction`]; on every paint it resolves a
//! [`PaintProfile`] for its current [`InteractionState`], asks the pair
//! layout ([`pair_size`], [`place_pair`]) where its image, text and selector
//! go, and pushes [`SceneNode`]s into a [`Scene`]. Scrollable containers add
//! a [`ScrollGeometry`] for thumb sizing and drag-to-scroll.
//!
//! ```rust
//! use skinkit_core::*;
//!
//! let cfg = ConfigRecord::for_control(ControlType::Button);
//! let mut button = Interaction::momentary();
//!
//! let at = Vec2::new(5.0, 5.0);
//! button.handle(&PointerEvent::new(PointerEventKind::Enter, at));
//! let profile = resolve(&cfg, button.state());
//! assert_eq!(profile.state, InteractionState::Hover);
//! assert!(profile.pen.is_none()); // hover border width is 0
//! ```
//!
//! Everything here runs on the UI thread; nothing blocks.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod layout;
pub mod locals;
pub mod prelude;
pub mod resolve;
pub mod scene;
pub mod scroll;
pub mod state;
pub mod tests;

pub use color::*;
pub use config::*;
pub use error::{Result, SkinError};
pub use geometry::*;
pub use input::*;
pub use interaction::*;
pub use layout::*;
pub use locals::*;
pub use resolve::*;
pub use scene::*;
pub use scroll::*;
pub use state::*;
