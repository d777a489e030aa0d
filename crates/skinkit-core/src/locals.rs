//! # Display locals
//!
//! Skinkit keeps display parameters in thread-local "locals" rather than in
//! every config record:
//!
//! - `Density` is the dp to px scale factor of the current display.
//! - `TextScale` is the user text scaling applied on top of density.
//!
//! Config records are written in device-independent pixels; resolution and
//! painting convert with [`dp_to_px`]. Override for a block with
//! `with_density`:
//!
//! ```rust
//! use skinkit_core::*;
//!
//! let px = with_density(Density { scale: 2.0 }, || dp_to_px(6.0));
//! assert_eq!(px, 12.0);
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

/// density-independent pixels (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dp(pub f32);

impl Dp {
    /// Converts this dp value into physical pixels using the current Density.
    pub fn to_px(self) -> f32 {
        self.0 * density().scale
    }
}

/// Convenience: convert a raw dp scalar into px using current Density.
pub fn dp_to_px(dp: f32) -> f32 {
    Dp(dp).to_px()
}

/// Font size in px: dp conversion plus the current text scale.
pub fn font_px(size_dp: f32) -> f32 {
    dp_to_px(size_dp) * text_scale().0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub scale: f32, // dp→px multiplier
}
impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextScale(pub f32);
impl Default for TextScale {
    fn default() -> Self {
        Self(1.0)
    }
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // pops the frame on unwind too
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local<T: 'static>(v: T) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(TypeId::of::<T>(), Box::new(v));
        }
    });
}

fn read_local<T: Copy + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return *t;
            }
        }
        T::default()
    })
}

pub fn with_density<R>(density: Density, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local(density);
        f()
    })
}

pub fn with_text_scale<R>(ts: TextScale, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local(ts);
        f()
    })
}

pub fn density() -> Density {
    read_local::<Density>()
}

pub fn text_scale() -> TextScale {
    read_local::<TextScale>()
}
