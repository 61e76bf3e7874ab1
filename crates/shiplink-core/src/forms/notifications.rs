// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Notification preferences

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationToggle {
    Push,
    Email,
    Sms,
    NewMessages,
    DeliveryUpdates,
    PaymentConfirmations,
    MarketingEmails,
    WeeklyDigest,
    UrgentOnly,
}

impl NotificationToggle {
    pub const CHANNELS: [NotificationToggle; 3] = [Self::Push, Self::Email, Self::Sms];

    pub const TOPICS: [NotificationToggle; 6] = [
        Self::NewMessages,
        Self::DeliveryUpdates,
        Self::PaymentConfirmations,
        Self::MarketingEmails,
        Self::WeeklyDigest,
        Self::UrgentOnly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Push => "Push Notifications",
            Self::Email => "Email Notifications",
            Self::Sms => "SMS Notifications",
            Self::NewMessages => "New Messages",
            Self::DeliveryUpdates => "Delivery Updates",
            Self::PaymentConfirmations => "Payment Confirmations",
            Self::MarketingEmails => "Marketing & Promotions",
            Self::WeeklyDigest => "Weekly Digest",
            Self::UrgentOnly => "Urgent Only Mode",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Push => "Receive notifications on your device",
            Self::Email => "Get updates via email",
            Self::Sms => "Receive text message alerts",
            Self::NewMessages => "When someone sends you a message",
            Self::DeliveryUpdates => "Status changes on your parcels",
            Self::PaymentConfirmations => "Payment and escrow updates",
            Self::MarketingEmails => "Tips, offers, and news",
            Self::WeeklyDigest => "Summary of your activity",
            Self::UrgentOnly => "Only critical notifications",
        }
    }
}

/// Per-topic switches, kept only while the screen is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPreferences {
    pub push: bool,
    pub email: bool,
    pub sms: bool,
    pub new_messages: bool,
    pub delivery_updates: bool,
    pub payment_confirmations: bool,
    pub marketing_emails: bool,
    pub weekly_digest: bool,
    pub urgent_only: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            push: true,
            email: true,
            sms: false,
            new_messages: true,
            delivery_updates: true,
            payment_confirmations: true,
            marketing_emails: false,
            weekly_digest: true,
            urgent_only: false,
        }
    }
}

impl NotificationPreferences {
    fn slot(&mut self, toggle: NotificationToggle) -> &mut bool {
        match toggle {
            NotificationToggle::Push => &mut self.push,
            NotificationToggle::Email => &mut self.email,
            NotificationToggle::Sms => &mut self.sms,
            NotificationToggle::NewMessages => &mut self.new_messages,
            NotificationToggle::DeliveryUpdates => &mut self.delivery_updates,
            NotificationToggle::PaymentConfirmations => &mut self.payment_confirmations,
            NotificationToggle::MarketingEmails => &mut self.marketing_emails,
            NotificationToggle::WeeklyDigest => &mut self.weekly_digest,
            NotificationToggle::UrgentOnly => &mut self.urgent_only,
        }
    }

    pub fn get(&self, toggle: NotificationToggle) -> bool {
        match toggle {
            NotificationToggle::Push => self.push,
            NotificationToggle::Email => self.email,
            NotificationToggle::Sms => self.sms,
            NotificationToggle::NewMessages => self.new_messages,
            NotificationToggle::DeliveryUpdates => self.delivery_updates,
            NotificationToggle::PaymentConfirmations => self.payment_confirmations,
            NotificationToggle::MarketingEmails => self.marketing_emails,
            NotificationToggle::WeeklyDigest => self.weekly_digest,
            NotificationToggle::UrgentOnly => self.urgent_only,
        }
    }

    pub fn set(&mut self, toggle: NotificationToggle, enabled: bool) {
        *self.slot(toggle) = enabled;
    }

    pub fn toggle(&mut self, toggle: NotificationToggle) {
        let slot = self.slot(toggle);
        *slot = !*slot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.get(NotificationToggle::Push));
        assert!(!prefs.get(NotificationToggle::Sms));
        assert!(!prefs.get(NotificationToggle::MarketingEmails));
    }

    #[test]
    fn test_toggle_flips_only_one_switch() {
        let mut prefs = NotificationPreferences::default();
        prefs.toggle(NotificationToggle::Sms);
        assert!(prefs.sms);

        let mut expected = NotificationPreferences::default();
        expected.set(NotificationToggle::Sms, true);
        assert_eq!(prefs, expected);
    }

    #[test]
    fn test_every_toggle_is_listed_once() {
        let all: Vec<_> = NotificationToggle::CHANNELS
            .iter()
            .chain(NotificationToggle::TOPICS.iter())
            .collect();
        assert_eq!(all.len(), 9);
    }
}
