// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for placement: sides, axes, requests, and results.
//!
//! ## Overview
//!
//! These types describe the inputs and outputs of the [placement engine](crate::placement).
//! Geometry uses Kurbo: rectangles are [`Rect`] in viewport coordinates (origin at the
//! viewport's top-left), the viewport itself is a [`Size`].

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size};

/// The edge of the target a floating element is anchored to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the target.
    #[default]
    Top,
    /// To the right of the target.
    Right,
    /// Below the target.
    Bottom,
    /// To the left of the target.
    Left,
}

/// The axis a [`Side`] lies on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Left and right.
    Horizontal,
    /// Top and bottom.
    Vertical,
}

impl Side {
    /// All four sides, clockwise from the top.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The side directly across the target (top↔bottom, left↔right).
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// The axis this side lies on.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Right | Self::Left => Axis::Horizontal,
        }
    }

    /// Lowercase name, as used in markup and configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    /// The [`SideSet`] bit for this side.
    pub const fn bit(self) -> SideSet {
        match self {
            Self::Top => SideSet::TOP,
            Self::Right => SideSet::RIGHT,
            Self::Bottom => SideSet::BOTTOM,
            Self::Left => SideSet::LEFT,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing a [`Side`] from text fails.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParseSideError;

impl fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of `top`, `right`, `bottom`, `left`")
    }
}

impl core::error::Error for ParseSideError {}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|side| side.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseSideError)
    }
}

bitflags::bitflags! {
    /// A set of sides, e.g. the sides that have enough room for the floating element.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SideSet: u8 {
        /// [`Side::Top`].
        const TOP    = 0b0000_0001;
        /// [`Side::Right`].
        const RIGHT  = 0b0000_0010;
        /// [`Side::Bottom`].
        const BOTTOM = 0b0000_0100;
        /// [`Side::Left`].
        const LEFT   = 0b0000_1000;
    }
}

impl SideSet {
    /// Returns true if `side` is in the set.
    pub const fn has(self, side: Side) -> bool {
        self.contains(side.bit())
    }
}

/// Signed room available on each side of the target, in pixels.
///
/// A negative value means the floating element would overflow the viewport on that side.
/// Produced by [`room`](crate::placement::room).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Room {
    /// Room above the target.
    pub top: f64,
    /// Room to the right of the target.
    pub right: f64,
    /// Room below the target.
    pub bottom: f64,
    /// Room to the left of the target.
    pub left: f64,
}

impl Room {
    /// Room on a single side.
    pub const fn on(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Sides whose room is non-negative.
    pub fn fitting(&self) -> SideSet {
        Side::ALL
            .into_iter()
            .filter(|&side| self.on(side) >= 0.0)
            .fold(SideSet::empty(), |set, side| set | side.bit())
    }
}

/// Directional offsets the floating element must translate to clear the target.
///
/// These are not raw space measurements: the sign of `horizontal` distinguishes left
/// from right, while `vertical` is shared between top and bottom.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Clearances {
    /// Signed horizontal clearance, used for [`Side::Left`] and [`Side::Right`].
    pub horizontal: f64,
    /// Vertical clearance, used for [`Side::Top`] and [`Side::Bottom`].
    pub vertical: f64,
}

/// Input to [`place`](crate::placement::place).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Requested side on regular screens.
    pub side: Side,
    /// Requested side on mobile screens.
    pub mobile_side: Side,
    /// Target bounds in viewport coordinates.
    pub target: Rect,
    /// Floating element bounds in viewport coordinates. Only the size is consulted.
    pub floating: Rect,
    /// Inner size of the viewport.
    pub viewport: Size,
    /// Current vertical scroll offset of the document.
    pub scroll_y: f64,
    /// Extra space required between the floating element and the viewport edge.
    pub padding: f64,
    /// Extra space required between the floating element and the target.
    pub offset: f64,
    /// Added to the default gap between the floating element and the target.
    pub additional_gap: f64,
}

impl Default for PlacementRequest {
    fn default() -> Self {
        Self {
            side: Side::Top,
            mobile_side: Side::Top,
            target: Rect::ZERO,
            floating: Rect::ZERO,
            viewport: Size::ZERO,
            scroll_y: 0.0,
            padding: 0.0,
            offset: 0.0,
            additional_gap: 0.0,
        }
    }
}

/// Output of [`place`](crate::placement::place).
///
/// Derived purely from a [`PlacementRequest`]; recompute it whenever geometry changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementResult {
    /// Document-space top of the floating element (scroll adjusted).
    pub top: f64,
    /// Left of the floating element.
    pub left: f64,
    /// See [`Clearances::horizontal`].
    pub horizontal_clearance: f64,
    /// See [`Clearances::vertical`].
    pub vertical_clearance: f64,
    /// Resolved side on regular screens.
    pub side: Side,
    /// Resolved side on mobile screens.
    pub mobile_side: Side,
}

impl PlacementResult {
    /// Top-left corner of the floating element.
    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Clearances as a pair.
    pub const fn clearances(&self) -> Clearances {
        Clearances {
            horizontal: self.horizontal_clearance,
            vertical: self.vertical_clearance,
        }
    }
}
