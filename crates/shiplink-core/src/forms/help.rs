// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - FAQ accordion

/// At most one FAQ entry is expanded at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    expanded: Option<usize>,
}

impl FaqAccordion {
    /// Open an entry, or close it if it is already open
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_entry_open_at_a_time() {
        let mut faq = FaqAccordion::default();
        faq.toggle(1);
        faq.toggle(3);
        assert_eq!(faq.expanded(), Some(3));
        assert!(!faq.is_expanded(1));
    }

    #[test]
    fn test_toggle_open_entry_closes_it() {
        let mut faq = FaqAccordion::default();
        faq.toggle(2);
        faq.toggle(2);
        assert_eq!(faq.expanded(), None);
    }
}
