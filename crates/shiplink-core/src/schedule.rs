// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Delayed navigation
//
// A delayed transition is represented by a ticket. The frontend waits for the
// delay and hands the ticket back to the router, which only honours it if
// nothing has superseded or cancelled it in the meantime.

use crate::router::NavigationIntent;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Handle identifying one scheduled navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A navigation waiting for its delay to elapse
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledNavigation {
    pub ticket: Ticket,
    pub delay: Duration,
    pub intent: NavigationIntent,
}

impl ScheduledNavigation {
    /// Sleep for the configured delay and hand back the ticket
    pub async fn elapsed(self) -> Ticket {
        tokio::time::sleep(self.delay).await;
        self.ticket
    }
}

/// Outstanding tickets and the intents they will dispatch
#[derive(Debug, Default)]
pub(crate) struct PendingNavigations {
    next_id: u64,
    pending: BTreeMap<Ticket, NavigationIntent>,
}

impl PendingNavigations {
    pub(crate) fn insert(&mut self, delay: Duration, intent: NavigationIntent) -> ScheduledNavigation {
        self.next_id += 1;
        let ticket = Ticket(self.next_id);
        self.pending.insert(ticket, intent.clone());
        ScheduledNavigation {
            ticket,
            delay,
            intent,
        }
    }

    pub(crate) fn remove(&mut self, ticket: Ticket) -> Option<NavigationIntent> {
        self.pending.remove(&ticket)
    }

    /// Drop every outstanding ticket, returning how many were dropped
    pub(crate) fn clear(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ScreenId;

    #[test]
    fn test_tickets_are_monotonic() {
        let mut pending = PendingNavigations::default();
        let a = pending.insert(Duration::from_millis(10), NavigationIntent::to(ScreenId::Home));
        let b = pending.insert(Duration::from_millis(10), NavigationIntent::to(ScreenId::Profile));
        assert!(b.ticket > a.ticket);
        assert_eq!(pending.len(), 2);
    }

    #[test]
    fn test_remove_is_single_use() {
        let mut pending = PendingNavigations::default();
        let scheduled = pending.insert(Duration::ZERO, NavigationIntent::to(ScreenId::Home));
        assert_eq!(pending.remove(scheduled.ticket), Some(NavigationIntent::to(ScreenId::Home)));
        assert_eq!(pending.remove(scheduled.ticket), None);
    }

    #[test]
    fn test_clear_reports_dropped() {
        let mut pending = PendingNavigations::default();
        pending.insert(Duration::ZERO, NavigationIntent::to(ScreenId::Home));
        pending.insert(Duration::ZERO, NavigationIntent::to(ScreenId::Chat));
        assert_eq!(pending.clear(), 2);
        assert_eq!(pending.len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_waits_for_delay() {
        let mut pending = PendingNavigations::default();
        let scheduled = pending.insert(Duration::from_millis(1500), NavigationIntent::to(ScreenId::Profile));
        let expected = scheduled.ticket;

        let start = tokio::time::Instant::now();
        let ticket = scheduled.elapsed().await;
        assert_eq!(ticket, expected);
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }
}
