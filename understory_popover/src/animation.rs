// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translate strategies: where the floating element slides from as it enters.
//!
//! The [popover controller](crate::popover::DynamicPopover) asks a [`TranslateFn`] for a
//! pair of translate vectors, one for the regular layout and one for the mobile layout.
//! [`DefaultTranslate`] applies [`translate_for_side`] to each side. Any closure of shape
//! `Fn(Clearances, Side, Side) -> Translations` can replace it.
//!
//! ```
//! use kurbo::Vec2;
//! use understory_popover::animation::{DefaultTranslate, TranslateFn, Translations};
//! use understory_popover::types::{Clearances, Side};
//!
//! let clear = Clearances { horizontal: -120.0, vertical: 40.0 };
//! let t = DefaultTranslate.translations(clear, Side::Top, Side::Right);
//! assert_eq!(t.translate, Vec2::new(0.0, -40.0));
//! assert_eq!(t.mobile_translate, Vec2::new(130.0, 0.0));
//!
//! // A custom strategy: no slide at all.
//! let still = |_: Clearances, _: Side, _: Side| Translations::default();
//! assert_eq!(still.translations(clear, Side::Top, Side::Top), Translations::default());
//! ```

use core::fmt;

use kurbo::Vec2;

use crate::types::{Clearances, Side};

/// Fixed visual nudge applied on the horizontal sides.
pub const SIDE_NUDGE: f64 = 10.0;

/// Translate vectors for the regular and mobile layouts.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Translations {
    /// Translation on regular screens.
    pub translate: Vec2,
    /// Translation on mobile screens.
    pub mobile_translate: Vec2,
}

/// Strategy computing [`Translations`] from clearances and the two displayed sides.
pub trait TranslateFn {
    /// Translations for the floating element shown on `side` (regular) and `mobile_side`.
    fn translations(&self, clearances: Clearances, side: Side, mobile_side: Side) -> Translations;
}

impl<F> TranslateFn for F
where
    F: Fn(Clearances, Side, Side) -> Translations,
{
    fn translations(&self, clearances: Clearances, side: Side, mobile_side: Side) -> Translations {
        self(clearances, side, mobile_side)
    }
}

/// The built-in strategy, see [`translate_for_side`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultTranslate;

impl TranslateFn for DefaultTranslate {
    fn translations(&self, clearances: Clearances, side: Side, mobile_side: Side) -> Translations {
        Translations {
            translate: translate_for_side(side, clearances),
            mobile_translate: translate_for_side(mobile_side, clearances),
        }
    }
}

/// Default translation for a single side.
///
/// - `Top`: `(0, -vertical)`
/// - `Bottom`: `(0, vertical)`
/// - `Right`: `(-horizontal + SIDE_NUDGE, 0)`
/// - `Left`: `(horizontal - SIDE_NUDGE, 0)`
pub fn translate_for_side(side: Side, clearances: Clearances) -> Vec2 {
    match side {
        Side::Top => Vec2::new(0.0, -clearances.vertical),
        Side::Bottom => Vec2::new(0.0, clearances.vertical),
        Side::Right => Vec2::new(-clearances.horizontal + SIDE_NUDGE, 0.0),
        Side::Left => Vec2::new(clearances.horizontal - SIDE_NUDGE, 0.0),
    }
}

/// Formats a translation as a CSS `translate(..)` function.
///
/// ```
/// use kurbo::Vec2;
/// use understory_popover::animation::CssTranslate;
///
/// assert_eq!(format!("{}", CssTranslate(Vec2::new(0.0, -40.0))), "translate(0px, -40px)");
/// assert_eq!(format!("{}", CssTranslate(Vec2::new(12.5, 0.0))), "translate(12.5px, 0px)");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CssTranslate(pub Vec2);

impl fmt::Display for CssTranslate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({}px, {}px)", self.0.x, self.0.y)
    }
}
