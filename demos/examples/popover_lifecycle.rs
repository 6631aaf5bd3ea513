// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A popover driven through a full hover cycle by a simulated host.
//!
//! The host keeps element rectangles in a small table, records listener registrations, and
//! replays a sequence of timed events: hover, resize, leave, and a quick re-hover that
//! cancels the exit.
//!
//! Run:
//! - `cargo run -p understory_examples --example popover_lifecycle`

use core::time::Duration;
use std::collections::HashSet;

use kurbo::{Rect, Size};
use understory_popover::animation::CssTranslate;
use understory_popover::listeners::{Listener, ListenerHost, ListenerTarget, Subscription};
use understory_popover::popover::{DynamicPopover, GeometryProvider, PopoverEvent, PopoverOptions};
use understory_popover::transition::TransitionState;
use understory_popover::types::Side;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
enum Element {
    Button,
    Tooltip,
}

struct Page {
    button: Rect,
    tooltip: Rect,
    viewport: Size,
    listeners: HashSet<(Option<Element>, Listener)>,
}

impl GeometryProvider<Element> for Page {
    fn bounding_rect(&self, element: &Element) -> Option<Rect> {
        Some(match element {
            Element::Button => self.button,
            Element::Tooltip => self.tooltip,
        })
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn scroll_y(&self) -> f64 {
        0.0
    }
}

fn key(target: ListenerTarget<'_, Element>) -> Option<Element> {
    match target {
        ListenerTarget::Element(e) => Some(*e),
        ListenerTarget::Window => None,
    }
}

impl ListenerHost<Element> for Page {
    fn add_listener(&mut self, target: ListenerTarget<'_, Element>, listener: Listener) {
        self.listeners.insert((key(target), listener));
    }

    fn remove_listener(&mut self, target: ListenerTarget<'_, Element>, listener: Listener) {
        self.listeners.remove(&(key(target), listener));
    }
}

fn main() {
    let mut page = Page {
        button: Rect::from_origin_size((20.0, 20.0), (80.0, 32.0)),
        tooltip: Rect::from_origin_size((0.0, 0.0), (250.0, 90.0)),
        viewport: Size::new(1024.0, 768.0),
        listeners: HashSet::new(),
    };

    let mut popover = DynamicPopover::new(
        Element::Button,
        Element::Tooltip,
        PopoverOptions {
            placement: Side::Top,
            mobile_placement: Side::Left,
            use_ideal_side: true,
            additional_gap: 6.0,
            ..Default::default()
        },
    );

    let ms = Duration::from_millis;
    let script = [
        (0, Listener::PointerEnter),
        (16, Listener::Resize),
        (120, Listener::PointerLeave),
        (300, Listener::PointerEnter),
        (900, Listener::PointerLeave),
    ];

    {
        let mut sub = Subscription::attach(&mut page, Element::Button);
        assert_eq!(sub.host_mut().listeners.len(), 3);
        popover.mount(sub.host_mut());

        for (at, listener) in script {
            let now = ms(at);
            popover.tick(now);
            let state = popover.handle(PopoverEvent::from(listener), sub.host_mut(), now);
            popover.tick(now + ms(1));
            let style = popover.style();
            println!(
                "t={at:>4}ms {listener:?} -> {state:?}, sides {:?}, origin {:?}, {}",
                popover.effective_sides(),
                style.origin,
                CssTranslate(style.translate)
            );
        }

        // The re-hover at 300ms cancelled the exit started at 120ms.
        assert_eq!(popover.state(), TransitionState::Exiting);
        assert_eq!(popover.tick(ms(1250)), TransitionState::Unmounted);
    }

    // Dropping the subscription removed every listener.
    assert!(page.listeners.is_empty());
    assert_eq!(popover.effective_sides(), (Side::Bottom, Side::Right));
}
