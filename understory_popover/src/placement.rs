// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating placement engine: anchor position, clearances, and ideal side.
//!
//! ## Overview
//!
//! Every function here is pure: identical inputs give bit-identical outputs and there is no
//! hidden state. Call [`place`] whenever geometry changes (mount, enter, resize) and discard
//! the previous result.
//!
//! ## Ideal side
//!
//! [`ideal_side`] is a single-axis, single-flip heuristic. The requested side is kept unless
//! its room is negative *and* the opposite side has strictly more room, in which case the
//! opposite side is returned. It never resolves to an orthogonal side.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_popover::placement::ideal_side;
//! use understory_popover::types::Side;
//!
//! let viewport = Size::new(800.0, 600.0);
//! let floating = Rect::from_origin_size((0.0, 0.0), (200.0, 300.0));
//!
//! // Not enough room above a target near the top edge: flip to the bottom.
//! let near_top = Rect::from_origin_size((10.0, 10.0), (50.0, 50.0));
//! assert_eq!(ideal_side(Side::Top, viewport, near_top, floating, 0.0, 0.0), Side::Bottom);
//!
//! // Plenty of room above: keep the requested side.
//! let low = Rect::from_origin_size((10.0, 400.0), (50.0, 50.0));
//! assert_eq!(ideal_side(Side::Top, viewport, low, floating, 0.0, 0.0), Side::Top);
//! ```

use kurbo::{Point, Rect, Size};

use crate::types::{Clearances, PlacementRequest, PlacementResult, Room, Side};

/// Top-left of the floating element so that it is centred on the target.
///
/// `top` is shifted by `scroll_y` to convert to document coordinates.
pub fn anchor_position(target: Rect, floating: Rect, scroll_y: f64) -> Point {
    let left = target.x0 + target.width() / 2.0 - floating.width() / 2.0;
    let top = scroll_y + target.y0 + target.height() / 2.0 - floating.height() / 2.0;
    Point::new(left, top)
}

/// Offsets to translate the floating element clear of the target.
///
/// `left` is the anchored left edge from [`anchor_position`].
pub fn clearances(target: Rect, floating: Rect, left: f64, additional_gap: f64) -> Clearances {
    Clearances {
        horizontal: -floating.width() + (target.x0 - left) - additional_gap,
        vertical: floating.height() + additional_gap,
    }
}

/// Signed room on each side of `target` for a floating element of `floating`'s size.
pub fn room(viewport: Size, target: Rect, floating: Rect, padding: f64, offset: f64) -> Room {
    let (fw, fh) = (floating.width(), floating.height());
    Room {
        top: target.y0 - fh - padding - offset,
        left: target.x0 - fw - padding - offset,
        right: viewport.width - target.x0 - target.width() - fw - padding - offset,
        bottom: viewport.height - target.y0 - target.height() - fh - padding - offset,
    }
}

/// Resolve `side` against the room available in the viewport.
///
/// See the [module docs](self) for the flip rule.
pub fn ideal_side(
    side: Side,
    viewport: Size,
    target: Rect,
    floating: Rect,
    padding: f64,
    offset: f64,
) -> Side {
    resolve(side, &room(viewport, target, floating, padding, offset))
}

/// Apply the flip rule to precomputed room.
pub fn resolve(side: Side, room: &Room) -> Side {
    let here = room.on(side);
    let there = room.on(side.opposite());
    if here < 0.0 && there > here {
        side.opposite()
    } else {
        side
    }
}

/// Compute a full placement for `req`.
///
/// The desktop and mobile sides are resolved independently against the same room.
pub fn place(req: &PlacementRequest) -> PlacementResult {
    let origin = anchor_position(req.target, req.floating, req.scroll_y);
    let clear = clearances(req.target, req.floating, origin.x, req.additional_gap);
    let room = room(req.viewport, req.target, req.floating, req.padding, req.offset);
    PlacementResult {
        top: origin.y,
        left: origin.x,
        horizontal_clearance: clear.horizontal,
        vertical_clearance: clear.vertical,
        side: resolve(req.side, &room),
        mobile_side: resolve(req.mobile_side, &room),
    }
}
