// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics: anchored position, clearances, and ideal sides.
//!
//! Places the same floating element next to targets in each corner of an 800x600 viewport
//! and prints where each requested side resolves to.
//!
//! Run:
//! - `cargo run -p understory_examples --example popover_placement`

use kurbo::{Rect, Size};
use understory_popover::animation::{CssTranslate, DefaultTranslate, TranslateFn};
use understory_popover::placement::{place, room};
use understory_popover::types::{PlacementRequest, Side};

fn main() {
    let viewport = Size::new(800.0, 600.0);
    let floating = Rect::from_origin_size((0.0, 0.0), (200.0, 120.0));

    let corners = [
        ("top-left", Rect::from_origin_size((10.0, 10.0), (60.0, 24.0))),
        ("top-right", Rect::from_origin_size((730.0, 10.0), (60.0, 24.0))),
        ("bottom-left", Rect::from_origin_size((10.0, 566.0), (60.0, 24.0))),
        ("bottom-right", Rect::from_origin_size((730.0, 566.0), (60.0, 24.0))),
        ("centre", Rect::from_origin_size((370.0, 288.0), (60.0, 24.0))),
    ];

    for (name, target) in corners {
        let r = room(viewport, target, floating, 0.0, 0.0);
        println!("== {name} ==\n  room {r:?}\n  fitting {:?}", r.fitting());
        for side in Side::ALL {
            let res = place(&PlacementRequest {
                side,
                mobile_side: side,
                target,
                floating,
                viewport,
                ..Default::default()
            });
            let t = DefaultTranslate.translations(res.clearances(), res.side, res.mobile_side);
            println!(
                "  {side:>6} -> {:<6} at ({}, {}) {}",
                res.side,
                res.left,
                res.top,
                CssTranslate(t.translate)
            );
            assert_eq!(res.side.axis(), side.axis());
        }
    }

    // In the centre every side fits, so nothing flips.
    let centre = Rect::from_origin_size((370.0, 288.0), (60.0, 24.0));
    for side in Side::ALL {
        let res = place(&PlacementRequest {
            side,
            mobile_side: side.opposite(),
            target: centre,
            floating,
            viewport,
            ..Default::default()
        });
        assert_eq!((res.side, res.mobile_side), (side, side.opposite()));
    }
}
