// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Sign-up flow
//
// Four steps: phone number, student ID capture, face capture, done.
// Captures are simulated; the frontend completes them after a delay.

use crate::router::NavigationIntent;
use crate::sample::{Country, COUNTRIES};
use crate::screen::ScreenId;
use std::sync::atomic::{AtomicU64, Ordering};

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    StudentId,
    Face,
}

impl Capture {
    /// Step shown once this capture completes
    fn next_step(&self) -> u8 {
        match self {
            Self::StudentId => 3,
            Self::Face => 4,
        }
    }
}

/// Source of capture ids, shared by every flow so a timer from an
/// abandoned flow never matches a capture started in a newer one
static NEXT_CAPTURE_ID: AtomicU64 = AtomicU64::new(1);

/// One started capture. Only the most recent one can complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureId {
    pub kind: Capture,
    id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpFlow {
    step: u8,
    country: usize,
    pub show_country_menu: bool,
    capturing: Option<CaptureId>,
}

impl Default for SignUpFlow {
    fn default() -> Self {
        Self {
            step: FIRST_STEP,
            country: 0,
            show_country_menu: false,
            capturing: None,
        }
    }
}

impl SignUpFlow {
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn country(&self) -> &'static Country {
        &COUNTRIES[self.country]
    }

    pub fn capturing(&self) -> Option<Capture> {
        self.capturing.map(|c| c.kind)
    }

    pub fn next(&mut self) {
        if self.step < LAST_STEP {
            self.step += 1;
        }
    }

    /// Go back one step; leaving the first step returns to the splash screen
    pub fn back(&mut self) -> Option<NavigationIntent> {
        self.capturing = None;
        if self.step > FIRST_STEP {
            self.step -= 1;
            None
        } else {
            Some(NavigationIntent::to(ScreenId::Splash))
        }
    }

    pub fn toggle_country_menu(&mut self) {
        self.show_country_menu = !self.show_country_menu;
    }

    pub fn select_country(&mut self, index: usize) {
        if index < COUNTRIES.len() {
            self.country = index;
        }
        self.show_country_menu = false;
    }

    /// Start a simulated capture, replacing any capture in progress
    pub fn start_capture(&mut self, kind: Capture) -> CaptureId {
        let capture = CaptureId {
            kind,
            id: NEXT_CAPTURE_ID.fetch_add(1, Ordering::Relaxed),
        };
        self.capturing = Some(capture);
        capture
    }

    /// Complete the capture in progress. Captures that were abandoned or
    /// replaced are ignored.
    pub fn finish_capture(&mut self, capture: CaptureId) -> bool {
        if self.capturing != Some(capture) {
            tracing::debug!("Ignoring stale {:?} capture {}", capture.kind, capture.id);
            return false;
        }
        self.capturing = None;
        self.step = capture.kind.next_step();
        true
    }

    /// Leave the flow once verification is done
    pub fn complete(&self) -> NavigationIntent {
        NavigationIntent::to(ScreenId::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stops_at_last_step() {
        let mut flow = SignUpFlow::default();
        for _ in 0..10 {
            flow.next();
        }
        assert_eq!(flow.step(), LAST_STEP);
    }

    #[test]
    fn test_back_from_first_step_leaves_flow() {
        let mut flow = SignUpFlow::default();
        flow.next();
        assert_eq!(flow.back(), None);
        assert_eq!(flow.step(), FIRST_STEP);
        assert_eq!(flow.back().map(|i| i.target), Some(ScreenId::Splash));
    }

    #[test]
    fn test_captures_advance_steps() {
        let mut flow = SignUpFlow::default();
        flow.next();
        let id_card = flow.start_capture(Capture::StudentId);
        assert_eq!(flow.capturing(), Some(Capture::StudentId));
        assert!(flow.finish_capture(id_card));
        assert_eq!(flow.step(), 3);
        assert!(!flow.finish_capture(id_card));

        let face = flow.start_capture(Capture::Face);
        assert!(flow.finish_capture(face));
        assert_eq!(flow.step(), 4);
        assert_eq!(flow.complete().target, ScreenId::Home);
    }

    #[test]
    fn test_abandoned_capture_is_ignored() {
        let mut flow = SignUpFlow::default();
        flow.next();
        let capture = flow.start_capture(Capture::StudentId);
        flow.back();
        assert!(!flow.finish_capture(capture));
        assert_eq!(flow.step(), FIRST_STEP);
    }

    #[test]
    fn test_earlier_capture_cannot_finish_a_restarted_one() {
        // Same flow: going back and capturing again
        let mut flow = SignUpFlow::default();
        flow.next();
        let first = flow.start_capture(Capture::StudentId);
        flow.back();
        flow.next();
        let second = flow.start_capture(Capture::StudentId);
        assert!(!flow.finish_capture(first));
        assert_eq!(flow.capturing(), Some(Capture::StudentId));
        assert_eq!(flow.step(), 2);
        assert!(flow.finish_capture(second));
        assert_eq!(flow.step(), 3);

        // Fresh flow after leaving and re-entering sign-up
        let mut left = SignUpFlow::default();
        left.next();
        let abandoned = left.start_capture(Capture::StudentId);
        let mut reentered = SignUpFlow::default();
        reentered.next();
        let current = reentered.start_capture(Capture::StudentId);
        assert!(!reentered.finish_capture(abandoned));
        assert_eq!(reentered.step(), 2);
        assert!(reentered.finish_capture(current));
    }

    #[test]
    fn test_country_selection() {
        let mut flow = SignUpFlow::default();
        assert_eq!(flow.country().code, "+1");
        flow.toggle_country_menu();
        flow.select_country(2);
        assert_eq!(flow.country().name, "Germany");
        assert!(!flow.show_country_menu);
        flow.select_country(99);
        assert_eq!(flow.country().name, "Germany");
    }
}
