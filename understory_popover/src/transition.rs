// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enter/exit transition state for a floating element.
//!
//! ## States
//!
//! `Unmounted → PreEnter → Entering → Entered → Exiting → Unmounted`
//!
//! - [`Transition::toggle`] with `true` moves to `PreEnter` (the element is mounted at its
//!   final position but not yet animating). This is where hosts recompute geometry.
//! - The next [`Transition::tick`] moves to `Entering` and arms the enter deadline.
//! - Once the deadline passes, `Entering` becomes `Entered`.
//! - [`Transition::toggle`] with `false` moves to `Exiting` and arms the exit deadline,
//!   after which the element is `Unmounted`.
//!
//! The latest toggle always wins: entering while exiting abandons the exit, and there is no
//! queue. Time is supplied by the caller as a monotonic [`Duration`] since any fixed epoch.
//!
//! ```
//! use core::time::Duration;
//! use understory_popover::transition::{Transition, TransitionState};
//!
//! let ms = Duration::from_millis;
//! let mut t = Transition::default();
//! assert_eq!(t.toggle(true, ms(0)), TransitionState::PreEnter);
//! assert_eq!(t.tick(ms(16)), TransitionState::Entering);
//! assert_eq!(t.tick(ms(100)), TransitionState::Entering);
//! assert_eq!(t.tick(ms(366)), TransitionState::Entered);
//! assert_eq!(t.toggle(false, ms(500)), TransitionState::Exiting);
//! assert_eq!(t.tick(ms(850)), TransitionState::Unmounted);
//! ```

use core::time::Duration;

/// Default duration of both the enter and the exit animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(350);

/// Phase of the enter/exit transition.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TransitionState {
    /// Not rendered.
    #[default]
    Unmounted,
    /// Rendered at its position, about to animate in.
    PreEnter,
    /// Animating in.
    Entering,
    /// Fully shown.
    Entered,
    /// Animating out.
    Exiting,
}

impl TransitionState {
    /// Returns true for every state except [`Unmounted`](Self::Unmounted).
    pub const fn is_mounted(self) -> bool {
        !matches!(self, Self::Unmounted)
    }

    /// Returns true while heading towards [`Entered`](Self::Entered).
    pub const fn is_enter_path(self) -> bool {
        matches!(self, Self::PreEnter | Self::Entering | Self::Entered)
    }
}

/// Enter and exit durations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Timeout {
    /// Duration of `Entering`.
    pub enter: Duration,
    /// Duration of `Exiting`.
    pub exit: Duration,
}

impl Timeout {
    /// Same duration for both directions.
    pub const fn symmetric(duration: Duration) -> Self {
        Self {
            enter: duration,
            exit: duration,
        }
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Self::symmetric(ANIMATION_DURATION)
    }
}

/// A time-boxed enter/exit state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    state: TransitionState,
    timeout: Timeout,
    deadline: Option<Duration>,
}

impl Transition {
    /// Create an unmounted transition with the given durations.
    pub fn new(timeout: Timeout) -> Self {
        Self {
            state: TransitionState::Unmounted,
            timeout,
            deadline: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Configured durations.
    pub fn timeout(&self) -> Timeout {
        self.timeout
    }

    /// When the current timed phase ends, if one is running.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Returns true unless unmounted.
    pub fn is_mounted(&self) -> bool {
        self.state.is_mounted()
    }

    /// Request the element to be shown (`true`) or hidden (`false`).
    ///
    /// Requests that match the current direction are ignored; others replace any pending
    /// deadline. Returns the new state.
    pub fn toggle(&mut self, enter: bool, now: Duration) -> TransitionState {
        use TransitionState::*;
        match (enter, self.state) {
            (true, Unmounted | Exiting) => {
                self.state = PreEnter;
                self.deadline = None;
            }
            (false, PreEnter | Entering | Entered) => {
                self.state = Exiting;
                self.deadline = Some(now + self.timeout.exit);
            }
            _ => {}
        }
        self.state
    }

    /// Advance by at most one step. Returns the new state.
    pub fn tick(&mut self, now: Duration) -> TransitionState {
        use TransitionState::*;
        let expired = self.deadline.is_some_and(|d| now >= d);
        match self.state {
            PreEnter => {
                self.state = Entering;
                self.deadline = Some(now + self.timeout.enter);
            }
            Entering if expired => {
                self.state = Entered;
                self.deadline = None;
            }
            Exiting if expired => {
                self.state = Unmounted;
                self.deadline = None;
            }
            _ => {}
        }
        self.state
    }
}
