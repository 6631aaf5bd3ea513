// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_popover --heading-base-level=0

//! Understory Popover: headless placement for tooltips and popovers.
//!
//! ## Overview
//!
//! This crate decides where a floating element (tooltip, popover, hover card) goes relative
//! to the target it is anchored to. It does not render anything and does not own a DOM or
//! a scene. Feed it rectangles from your toolkit and it returns positions, clearances, and
//! the side to show the element on.
//!
//! ## Placement
//!
//! [`place`](crate::placement::place) takes a [`PlacementRequest`](crate::types::PlacementRequest)
//! and returns a [`PlacementResult`](crate::types::PlacementResult):
//!
//! - the element's top-left, centred on the target (document coordinates),
//! - horizontal and vertical clearances, the signed offsets needed to slide the element clear
//!   of the target, and
//! - the resolved side for the regular and the mobile layout.
//!
//! Side resolution flips to the opposite side only when the requested side has negative room
//! and the opposite side has strictly more. It never picks an orthogonal side.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_popover::placement::place;
//! use understory_popover::types::{PlacementRequest, Side};
//!
//! let res = place(&PlacementRequest {
//!     side: Side::Left,
//!     mobile_side: Side::Top,
//!     target: Rect::from_origin_size((0.0, 0.0), (100.0, 20.0)),
//!     floating: Rect::from_origin_size((0.0, 0.0), (150.0, 40.0)),
//!     viewport: Size::new(800.0, 600.0),
//!     ..Default::default()
//! });
//! assert_eq!(res.side, Side::Right);
//! assert_eq!(res.mobile_side, Side::Bottom);
//! assert_eq!((res.left, res.top), (-25.0, -10.0));
//! ```
//!
//! ## Layering
//!
//! - [`placement`]: pure geometry, no state.
//! - [`animation`]: translate strategies for the slide-in, pluggable via [`TranslateFn`](crate::animation::TranslateFn).
//! - [`transition`]: the time-boxed enter/exit state machine; the latest toggle wins.
//! - [`listeners`]: a scoped [`Subscription`](crate::listeners::Subscription) for the target and window listeners.
//! - [`popover`]: [`DynamicPopover`](crate::popover::DynamicPopover), which wires the above to
//!   host geometry queries and produces a render-agnostic style.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

pub mod animation;
pub mod listeners;
pub mod placement;
pub mod popover;
pub mod transition;
pub mod types;
