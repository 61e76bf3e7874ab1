// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Saved payment cards
//
// Cards live in memory for as long as the screen does. Nothing is charged.

use super::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
}

impl CardBrand {
    /// Brand inferred from the leading digits
    pub fn detect(digits: &str) -> Self {
        if digits.starts_with('5') {
            Self::Mastercard
        } else if digits.starts_with("34") || digits.starts_with("37") {
            Self::Amex
        } else {
            Self::Visa
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCard {
    pub id: u32,
    pub brand: CardBrand,
    pub last_four: String,
    pub expiry: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Number,
    Expiry,
    Cvv,
    Holder,
}

/// Input for a card being added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCard {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
    pub holder: String,
}

/// Group card digits in fours: "4242424242424242" -> "4242 4242 4242 4242"
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep digits only and insert a slash after the month: "1225" -> "12/25"
pub fn format_expiry(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 2 {
        let year: String = digits.chars().skip(2).take(2).collect();
        format!("{}/{}", &digits[..2], year)
    } else {
        digits
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    cards: Vec<PaymentCard>,
    next_id: u32,
    pub draft: NewCard,
    pub show_add_form: bool,
    pub error: Option<FormError>,
    /// Set while the "card added" notice is showing
    pub added: bool,
}

impl Default for Wallet {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Wallet {
    pub fn seeded() -> Self {
        Self {
            cards: vec![
                PaymentCard {
                    id: 1,
                    brand: CardBrand::Visa,
                    last_four: "4242".to_string(),
                    expiry: "12/25".to_string(),
                    is_default: true,
                },
                PaymentCard {
                    id: 2,
                    brand: CardBrand::Mastercard,
                    last_four: "8888".to_string(),
                    expiry: "08/26".to_string(),
                    is_default: false,
                },
            ],
            next_id: 3,
            draft: NewCard::default(),
            show_add_form: false,
            error: None,
            added: false,
        }
    }

    pub fn empty() -> Self {
        Self {
            cards: Vec::new(),
            next_id: 1,
            ..Self::seeded()
        }
    }

    pub fn cards(&self) -> &[PaymentCard] {
        &self.cards
    }

    pub fn default_card(&self) -> Option<&PaymentCard> {
        self.cards.iter().find(|c| c.is_default)
    }

    pub fn toggle_add_form(&mut self) {
        self.show_add_form = !self.show_add_form;
        self.error = None;
    }

    /// Edit the card being added, applying the field's formatting
    pub fn set(&mut self, field: CardField, value: String) {
        match field {
            CardField::Number => self.draft.number = format_card_number(&value),
            CardField::Expiry => self.draft.expiry = format_expiry(&value),
            CardField::Cvv => self.draft.cvv = value,
            CardField::Holder => self.draft.holder = value,
        }
        self.error = None;
    }

    /// Validate the draft and store it. The first card becomes the default.
    pub fn add_card(&mut self) -> Result<&PaymentCard, FormError> {
        let draft = &self.draft;
        if draft.number.is_empty()
            || draft.expiry.is_empty()
            || draft.cvv.is_empty()
            || draft.holder.is_empty()
        {
            self.error = Some(FormError::MissingFields);
            return Err(FormError::MissingFields);
        }

        let digits: String = draft.number.chars().filter(|c| !c.is_whitespace()).collect();
        if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
            self.error = Some(FormError::InvalidCardNumber);
            return Err(FormError::InvalidCardNumber);
        }

        let card = PaymentCard {
            id: self.next_id,
            brand: CardBrand::detect(&digits),
            last_four: digits[digits.len() - 4..].to_string(),
            expiry: draft.expiry.clone(),
            is_default: self.cards.is_empty(),
        };
        tracing::info!("Added {} card ending {}", card.brand.label(), card.last_four);

        self.next_id += 1;
        self.cards.push(card);
        self.draft = NewCard::default();
        self.error = None;
        self.added = true;
        Ok(&self.cards[self.cards.len() - 1])
    }

    /// Hide the notice and the form after a card was added
    pub fn dismiss_added(&mut self) {
        self.added = false;
        self.show_add_form = false;
    }

    pub fn set_default(&mut self, id: u32) {
        if !self.cards.iter().any(|c| c.id == id) {
            return;
        }
        for card in &mut self.cards {
            card.is_default = card.id == id;
        }
    }

    /// Remove a card. Deleting the default promotes the first remaining card.
    pub fn delete(&mut self, id: u32) {
        let was_default = self
            .cards
            .iter()
            .any(|c| c.id == id && c.is_default);
        self.cards.retain(|c| c.id != id);
        if was_default {
            if let Some(first) = self.cards.first_mut() {
                first.is_default = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(wallet: &mut Wallet, number: &str) {
        wallet.set(CardField::Number, number.to_string());
        wallet.set(CardField::Expiry, "0927".to_string());
        wallet.set(CardField::Cvv, "123".to_string());
        wallet.set(CardField::Holder, "Alex Thompson".to_string());
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("4242 42"), "4242 42");
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("12/255"), "12/25");
    }

    #[test]
    fn test_brand_detection() {
        assert_eq!(CardBrand::detect("5555444433332222"), CardBrand::Mastercard);
        assert_eq!(CardBrand::detect("3782822463100051"), CardBrand::Amex);
        assert_eq!(CardBrand::detect("4111111111111111"), CardBrand::Visa);
    }

    #[test]
    fn test_add_card_requires_all_fields() {
        let mut wallet = Wallet::seeded();
        wallet.set(CardField::Number, "4111111111111111".to_string());
        assert_eq!(wallet.add_card().unwrap_err(), FormError::MissingFields);
        assert_eq!(wallet.error, Some(FormError::MissingFields));
    }

    #[test]
    fn test_add_card_rejects_short_number() {
        let mut wallet = Wallet::seeded();
        fill(&mut wallet, "41111111");
        assert_eq!(wallet.add_card().unwrap_err(), FormError::InvalidCardNumber);
        assert_eq!(wallet.cards().len(), 2);
    }

    #[test]
    fn test_add_card() {
        let mut wallet = Wallet::seeded();
        fill(&mut wallet, "3782822463100051");
        let card = wallet.add_card().unwrap().clone();
        assert_eq!(card.brand, CardBrand::Amex);
        assert_eq!(card.last_four, "0051");
        assert_eq!(card.expiry, "09/27");
        assert!(!card.is_default);
        assert!(wallet.added);
        assert_eq!(wallet.draft, NewCard::default());

        wallet.dismiss_added();
        assert!(!wallet.show_add_form);
    }

    #[test]
    fn test_first_card_becomes_default() {
        let mut wallet = Wallet::empty();
        fill(&mut wallet, "4111111111111111");
        assert!(wallet.add_card().unwrap().is_default);
    }

    #[test]
    fn test_set_default_is_exclusive() {
        let mut wallet = Wallet::seeded();
        wallet.set_default(2);
        assert_eq!(wallet.default_card().map(|c| c.id), Some(2));
        assert_eq!(wallet.cards().iter().filter(|c| c.is_default).count(), 1);

        wallet.set_default(99);
        assert_eq!(wallet.default_card().map(|c| c.id), Some(2));
    }

    #[test]
    fn test_deleting_default_promotes_first_remaining() {
        let mut wallet = Wallet::seeded();
        wallet.delete(1);
        assert_eq!(wallet.cards().len(), 1);
        assert_eq!(wallet.default_card().map(|c| c.id), Some(2));
    }

    #[test]
    fn test_deleting_last_card() {
        let mut wallet = Wallet::seeded();
        wallet.delete(2);
        wallet.delete(1);
        assert!(wallet.cards().is_empty());
        assert!(wallet.default_card().is_none());
    }
}
