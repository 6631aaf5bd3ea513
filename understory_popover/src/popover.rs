// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless dynamic popover: geometry queries, placement, transitions, and style output.
//!
//! ## Overview
//!
//! [`DynamicPopover`] ties the pieces of this crate together for one floating element
//! anchored to one target. The host supplies:
//!
//! - a [`GeometryProvider`] answering bounding-rectangle, viewport, and scroll queries for
//!   opaque element handles, and
//! - [`PopoverEvent`]s (typically from listeners registered through
//!   [`Subscription`](crate::listeners::Subscription)) plus a monotonic clock.
//!
//! In return it produces a [`PopoverStyle`] describing what to render: whether the element
//! is visible, its opacity, its anchored origin, and the slide-in translation for the
//! regular and mobile layouts.
//!
//! ## Geometry
//!
//! Placement is recomputed on [`mount`](DynamicPopover::mount), on every enter that lands in
//! [`PreEnter`](TransitionState::PreEnter), and on resize. Leaving keeps the last placement
//! so the exit animation runs from where the element was shown. If either element has no
//! geometry (not mounted yet, or already removed), the previous placement is kept as is.
//!
//! ## Minimal usage
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Rect, Size};
//! use understory_popover::popover::{DynamicPopover, GeometryProvider, PopoverEvent, PopoverOptions};
//! use understory_popover::types::Side;
//!
//! struct Page;
//!
//! impl GeometryProvider<&'static str> for Page {
//!     fn bounding_rect(&self, id: &&'static str) -> Option<Rect> {
//!         match *id {
//!             "button" => Some(Rect::from_origin_size((10.0, 10.0), (50.0, 50.0))),
//!             "tooltip" => Some(Rect::from_origin_size((0.0, 0.0), (200.0, 300.0))),
//!             _ => None,
//!         }
//!     }
//!     fn viewport(&self) -> Size { Size::new(800.0, 600.0) }
//!     fn scroll_y(&self) -> f64 { 0.0 }
//! }
//!
//! let options = PopoverOptions { use_ideal_side: true, ..Default::default() };
//! let mut popover = DynamicPopover::new("button", "tooltip", options);
//! popover.mount(&Page);
//! popover.handle(PopoverEvent::PointerEnter, &Page, Duration::ZERO);
//!
//! // Not enough room above the button: shown below instead.
//! assert_eq!(popover.effective_sides(), (Side::Bottom, Side::Bottom));
//! assert!(popover.style().visible);
//! ```

use core::time::Duration;

use kurbo::{Point, Rect, Size, Vec2};

use crate::animation::{DefaultTranslate, TranslateFn, Translations};
use crate::listeners::Listener;
use crate::placement::place;
use crate::transition::{Timeout, Transition, TransitionState};
use crate::types::{PlacementRequest, PlacementResult, Side};

/// Placeholder coordinate used before the first successful placement.
const INITIAL_PLACEMENT: f64 = 100.0;

/// Host geometry queries, answered synchronously at call time.
///
/// `T` is the host's opaque element handle.
pub trait GeometryProvider<T> {
    /// Current bounding rectangle of `element` in viewport coordinates, or `None` if the
    /// element is not in the document.
    fn bounding_rect(&self, element: &T) -> Option<Rect>;
    /// Inner size of the viewport.
    fn viewport(&self) -> Size;
    /// Vertical scroll offset of the document.
    fn scroll_y(&self) -> f64;
}

/// Configuration for a [`DynamicPopover`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PopoverOptions {
    /// Requested side on regular screens.
    pub placement: Side,
    /// Requested side on mobile screens.
    pub mobile_placement: Side,
    /// Width of the floating element on regular screens.
    pub width: f64,
    /// Width of the floating element on mobile screens.
    pub mobile_width: f64,
    /// Switch to the opposite side when the requested one lacks room.
    pub use_ideal_side: bool,
    /// Added to the default gap between the floating element and its target.
    pub additional_gap: f64,
    /// Viewport padding considered when resolving the ideal side.
    pub padding: f64,
    /// Target offset considered when resolving the ideal side.
    pub offset: f64,
    /// Enter and exit durations.
    pub timeout: Timeout,
}

impl Default for PopoverOptions {
    fn default() -> Self {
        Self {
            placement: Side::Top,
            mobile_placement: Side::Top,
            width: 250.0,
            mobile_width: 150.0,
            use_ideal_side: false,
            additional_gap: 0.0,
            padding: 0.0,
            offset: 0.0,
            timeout: Timeout::default(),
        }
    }
}

/// Events a host forwards to a [`DynamicPopover`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PopoverEvent {
    /// Pointer or focus entered the target.
    PointerEnter,
    /// Pointer or focus left the target.
    PointerLeave,
    /// The viewport was resized.
    Resize,
}

impl From<Listener> for PopoverEvent {
    fn from(listener: Listener) -> Self {
        match listener {
            Listener::PointerEnter => Self::PointerEnter,
            Listener::PointerLeave => Self::PointerLeave,
            Listener::Resize => Self::Resize,
        }
    }
}

/// Which properties animate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TransitionProperty {
    /// Only opacity animates (entering and entered).
    Opacity,
    /// Everything animates (exiting).
    All,
}

/// An active style transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StyleTransition {
    /// Animated properties.
    pub property: TransitionProperty,
    /// Duration of the animation.
    pub duration: Duration,
}

/// Render-agnostic description of the floating element for the current state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PopoverStyle {
    /// Transition state the style was derived from.
    pub state: TransitionState,
    /// Whether the element should be rendered visibly at all.
    pub visible: bool,
    /// Target opacity, `0.0` or `1.0`.
    pub opacity: f64,
    /// Document-space top-left of the element; zero while unmounted.
    pub origin: Point,
    /// Width on regular screens.
    pub width: f64,
    /// Width on mobile screens.
    pub mobile_width: f64,
    /// Slide translation on regular screens.
    pub translate: Vec2,
    /// Slide translation on mobile screens.
    pub mobile_translate: Vec2,
    /// Active transition, if any.
    pub transition: Option<StyleTransition>,
}

/// A floating element anchored to a target, driven by host events.
///
/// `T` is the host's element handle, `F` the [translate strategy](TranslateFn).
pub struct DynamicPopover<T, F = DefaultTranslate> {
    target: T,
    floating: T,
    options: PopoverOptions,
    transition: Transition,
    placement: PlacementResult,
    translate_fn: F,
}

impl<T: core::fmt::Debug, F> core::fmt::Debug for DynamicPopover<T, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DynamicPopover")
            .field("target", &self.target)
            .field("floating", &self.floating)
            .field("options", &self.options)
            .field("transition", &self.transition)
            .field("placement", &self.placement)
            .finish_non_exhaustive()
    }
}

impl<T> DynamicPopover<T> {
    /// Create an unmounted popover using the default translate strategy.
    pub fn new(target: T, floating: T, options: PopoverOptions) -> Self {
        Self {
            target,
            floating,
            options,
            transition: Transition::new(options.timeout),
            placement: PlacementResult {
                top: INITIAL_PLACEMENT,
                left: INITIAL_PLACEMENT,
                horizontal_clearance: INITIAL_PLACEMENT,
                vertical_clearance: INITIAL_PLACEMENT,
                side: options.placement,
                mobile_side: options.mobile_placement,
            },
            translate_fn: DefaultTranslate,
        }
    }
}

impl<T, F: TranslateFn> DynamicPopover<T, F> {
    /// Replace the translate strategy.
    pub fn with_translate_fn<G: TranslateFn>(self, translate_fn: G) -> DynamicPopover<T, G> {
        DynamicPopover {
            target: self.target,
            floating: self.floating,
            options: self.options,
            transition: self.transition,
            placement: self.placement,
            translate_fn,
        }
    }

    /// The target handle.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// The floating element handle.
    pub fn floating(&self) -> &T {
        &self.floating
    }

    /// Current configuration.
    pub fn options(&self) -> &PopoverOptions {
        &self.options
    }

    /// Last computed placement.
    pub fn placement(&self) -> &PlacementResult {
        &self.placement
    }

    /// Current transition state.
    pub fn state(&self) -> TransitionState {
        self.transition.state()
    }

    /// When the running animation phase ends, if any. Hosts schedule a [`tick`](Self::tick) then.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.transition.next_deadline()
    }

    /// Recompute placement from current geometry.
    ///
    /// Returns `false`, leaving the previous placement untouched, when either element has
    /// no geometry.
    pub fn reposition<G: GeometryProvider<T>>(&mut self, host: &G) -> bool {
        let (Some(target), Some(floating)) = (
            host.bounding_rect(&self.target),
            host.bounding_rect(&self.floating),
        ) else {
            return false;
        };
        self.placement = place(&PlacementRequest {
            side: self.options.placement,
            mobile_side: self.options.mobile_placement,
            target,
            floating,
            viewport: host.viewport(),
            scroll_y: host.scroll_y(),
            padding: self.options.padding,
            offset: self.options.offset,
            additional_gap: self.options.additional_gap,
        });
        true
    }

    /// Initial geometry query when the widget becomes active.
    pub fn mount<G: GeometryProvider<T>>(&mut self, host: &G) -> bool {
        self.reposition(host)
    }

    /// Forward a host event. Returns the resulting transition state.
    pub fn handle<G: GeometryProvider<T>>(
        &mut self,
        event: PopoverEvent,
        host: &G,
        now: Duration,
    ) -> TransitionState {
        match event {
            PopoverEvent::PointerEnter => {
                let before = self.transition.state();
                let state = self.transition.toggle(true, now);
                if state == TransitionState::PreEnter && before != state {
                    self.reposition(host);
                }
                state
            }
            PopoverEvent::PointerLeave => self.transition.toggle(false, now),
            PopoverEvent::Resize => {
                self.reposition(host);
                self.transition.state()
            }
        }
    }

    /// Advance the transition. Returns the resulting state.
    pub fn tick(&mut self, now: Duration) -> TransitionState {
        self.transition.tick(now)
    }

    /// Sides the element is displayed on: resolved sides when
    /// [`use_ideal_side`](PopoverOptions::use_ideal_side) is set, else the requested ones.
    pub fn effective_sides(&self) -> (Side, Side) {
        if self.options.use_ideal_side {
            (self.placement.side, self.placement.mobile_side)
        } else {
            (self.options.placement, self.options.mobile_placement)
        }
    }

    /// Slide translations for the effective sides.
    pub fn translations(&self) -> Translations {
        let (side, mobile_side) = self.effective_sides();
        self.translate_fn
            .translations(self.placement.clearances(), side, mobile_side)
    }

    /// Style for the current state.
    pub fn style(&self) -> PopoverStyle {
        use TransitionState::*;
        let state = self.transition.state();
        let t = self.translations();
        let timeout = self.transition.timeout();
        let (opacity, transition) = match state {
            Unmounted | PreEnter => (0.0, None),
            Entering | Entered => (
                1.0,
                Some(StyleTransition {
                    property: TransitionProperty::Opacity,
                    duration: timeout.enter,
                }),
            ),
            Exiting => (
                0.0,
                Some(StyleTransition {
                    property: TransitionProperty::All,
                    duration: timeout.exit,
                }),
            ),
        };
        PopoverStyle {
            state,
            visible: state.is_mounted(),
            opacity,
            origin: if state.is_mounted() {
                self.placement.origin()
            } else {
                Point::ZERO
            },
            width: self.options.width,
            mobile_width: self.options.mobile_width,
            translate: t.translate,
            mobile_translate: t.mobile_translate,
            transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::translate_for_side;
    use crate::types::Clearances;

    const TARGET: usize = 0;
    const FLOATING: usize = 1;

    struct Host {
        rects: [Option<Rect>; 2],
        viewport: Size,
        scroll_y: f64,
    }

    impl Host {
        fn new(target: Rect, floating: Rect) -> Self {
            Self {
                rects: [Some(target), Some(floating)],
                viewport: Size::new(800.0, 600.0),
                scroll_y: 0.0,
            }
        }
    }

    impl GeometryProvider<usize> for Host {
        fn bounding_rect(&self, element: &usize) -> Option<Rect> {
            self.rects.get(*element).copied().flatten()
        }

        fn viewport(&self) -> Size {
            self.viewport
        }

        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }
    }

    fn xywh(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_origin_size((x, y), (w, h))
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn cramped_host() -> Host {
        Host::new(xywh(10.0, 10.0, 50.0, 50.0), xywh(0.0, 0.0, 200.0, 300.0))
    }

    fn ideal() -> PopoverOptions {
        PopoverOptions {
            use_ideal_side: true,
            ..Default::default()
        }
    }

    #[test]
    fn initial_placement_before_geometry() {
        let p = DynamicPopover::new(TARGET, FLOATING, PopoverOptions::default());
        let r = p.placement();
        assert_eq!(r.origin(), Point::new(100.0, 100.0));
        assert_eq!(
            r.clearances(),
            Clearances {
                horizontal: 100.0,
                vertical: 100.0
            }
        );
        assert_eq!((r.side, r.mobile_side), (Side::Top, Side::Top));
        assert_eq!(p.state(), TransitionState::Unmounted);
    }

    #[test]
    fn mount_places_from_geometry() {
        let host = cramped_host();
        let mut p = DynamicPopover::new(TARGET, FLOATING, ideal());
        assert!(p.mount(&host));
        assert_eq!(p.placement().side, Side::Bottom);
        assert_eq!(p.placement().origin(), Point::new(-65.0, -115.0));
    }

    // Missing geometry keeps the previous placement, not a default.
    #[test]
    fn missing_geometry_keeps_last_placement() {
        let mut host = cramped_host();
        let mut p = DynamicPopover::new(TARGET, FLOATING, ideal());
        assert!(p.mount(&host));
        let before = *p.placement();

        host.rects[FLOATING] = None;
        host.viewport = Size::new(10.0, 10.0);
        assert!(!p.reposition(&host));
        assert_eq!(*p.placement(), before);

        host.rects = [None, Some(xywh(0.0, 0.0, 1.0, 1.0))];
        p.handle(PopoverEvent::Resize, &host, ms(0));
        assert_eq!(*p.placement(), before);
    }

    #[test]
    fn requested_sides_used_without_ideal_side() {
        let host = cramped_host();
        let mut p = DynamicPopover::new(TARGET, FLOATING, PopoverOptions::default());
        p.mount(&host);
        assert_eq!(p.placement().side, Side::Bottom);
        assert_eq!(p.effective_sides(), (Side::Top, Side::Top));
        let clear = p.placement().clearances();
        assert_eq!(p.translations().translate, translate_for_side(Side::Top, clear));
    }

    #[test]
    fn enter_recomputes_geometry() {
        let mut host = cramped_host();
        let mut p = DynamicPopover::new(TARGET, FLOATING, ideal());
        p.mount(&host);
        assert_eq!(p.placement().side, Side::Bottom);

        // Target scrolled further down; room above now suffices.
        host.rects[TARGET] = Some(xywh(10.0, 400.0, 50.0, 50.0));
        assert_eq!(
            p.handle(PopoverEvent::PointerEnter, &host, ms(0)),
            TransitionState::PreEnter
        );
        assert_eq!(p.placement().side, Side::Top);
    }

    // Leaving holds the shown geometry through the exit.
    #[test]
    fn leave_holds_geometry_until_unmounted() {
        let mut host = cramped_host();
        let mut p = DynamicPopover::new(TARGET, FLOATING, ideal());
        p.mount(&host);
        p.handle(PopoverEvent::PointerEnter, &host, ms(0));
        p.tick(ms(16));
        let shown = *p.placement();

        host.rects[TARGET] = Some(xywh(300.0, 300.0, 50.0, 50.0));
        assert_eq!(
            p.handle(PopoverEvent::PointerLeave, &host, ms(100)),
            TransitionState::Exiting
        );
        assert_eq!(*p.placement(), shown);
        let style = p.style();
        assert!(style.visible);
        assert_eq!(style.origin, shown.origin());
        assert_eq!(p.next_deadline(), Some(ms(450)));
        assert_eq!(p.tick(ms(450)), TransitionState::Unmounted);
    }

    #[test]
    fn repeated_enter_does_not_recompute() {
        let mut host = cramped_host();
        let mut p = DynamicPopover::new(TARGET, FLOATING, ideal());
        p.handle(PopoverEvent::PointerEnter, &host, ms(0));
        let first = *p.placement();
        host.rects[TARGET] = Some(xywh(10.0, 400.0, 50.0, 50.0));
        assert_eq!(
            p.handle(PopoverEvent::PointerEnter, &host, ms(5)),
            TransitionState::PreEnter
        );
        assert_eq!(*p.placement(), first);
        // Resize always recomputes.
        p.handle(PopoverEvent::Resize, &host, ms(6));
        assert_eq!(p.placement().side, Side::Top);
    }

    #[test]
    fn style_follows_state() {
        let host = cramped_host();
        let mut p = DynamicPopover::new(TARGET, FLOATING, ideal());
        p.mount(&host);

        let s = p.style();
        assert!(!s.visible);
        assert_eq!(s.opacity, 0.0);
        assert_eq!(s.origin, Point::ZERO);
        assert_eq!(s.transition, None);
        assert_eq!((s.width, s.mobile_width), (250.0, 150.0));

        p.handle(PopoverEvent::PointerEnter, &host, ms(0));
        let s = p.style();
        assert!(s.visible);
        assert_eq!(s.opacity, 0.0);
        assert_eq!(s.origin, p.placement().origin());

        p.tick(ms(16));
        let s = p.style();
        assert_eq!(s.opacity, 1.0);
        assert_eq!(
            s.transition,
            Some(StyleTransition {
                property: TransitionProperty::Opacity,
                duration: ms(350),
            })
        );

        p.handle(PopoverEvent::PointerLeave, &host, ms(500));
        let s = p.style();
        assert_eq!(s.opacity, 0.0);
        assert_eq!(
            s.transition.map(|t| t.property),
            Some(TransitionProperty::All)
        );
    }

    #[test]
    fn custom_translate_fn() {
        let host = cramped_host();
        let mut p = DynamicPopover::new(TARGET, FLOATING, ideal()).with_translate_fn(
            |c: Clearances, side: Side, mobile: Side| Translations {
                translate: Vec2::new(c.vertical, if side == Side::Bottom { 1.0 } else { 0.0 }),
                mobile_translate: Vec2::new(0.0, if mobile == Side::Bottom { 2.0 } else { 0.0 }),
            },
        );
        p.mount(&host);
        let t = p.translations();
        assert_eq!(t.translate, Vec2::new(300.0, 1.0));
        assert_eq!(t.mobile_translate, Vec2::new(0.0, 2.0));
        assert_eq!(p.style().translate, t.translate);
    }

    #[test]
    fn default_translations_use_resolved_sides() {
        let host = cramped_host();
        let mut p = DynamicPopover::new(
            TARGET,
            FLOATING,
            PopoverOptions {
                mobile_placement: Side::Left,
                additional_gap: 8.0,
                ..ideal()
            },
        );
        p.mount(&host);
        assert_eq!(p.effective_sides(), (Side::Bottom, Side::Right));
        let t = p.translations();
        assert_eq!(t.translate, Vec2::new(0.0, 308.0));
        let clear = p.placement().clearances();
        assert_eq!(t.mobile_translate, Vec2::new(-clear.horizontal + 10.0, 0.0));
    }

    #[test]
    fn listener_kinds_map_to_events() {
        assert_eq!(
            PopoverEvent::from(Listener::PointerEnter),
            PopoverEvent::PointerEnter
        );
        assert_eq!(
            PopoverEvent::from(Listener::PointerLeave),
            PopoverEvent::PointerLeave
        );
        assert_eq!(PopoverEvent::from(Listener::Resize), PopoverEvent::Resize);
    }
}
