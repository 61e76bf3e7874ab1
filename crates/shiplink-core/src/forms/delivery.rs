// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Request, delivery confirmation and rating forms

use super::FormError;
use crate::router::NavigationIntent;
use crate::sample::PACKAGE_TYPES;
use crate::screen::ScreenId;

/// New parcel request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRequestForm {
    pub package_type: Option<&'static str>,
    pub show_package_menu: bool,
    /// Attached parcel photo, identified by its file name
    pub photo: Option<String>,
}

impl CreateRequestForm {
    pub fn toggle_package_menu(&mut self) {
        self.show_package_menu = !self.show_package_menu;
    }

    /// Pick a package type by its position in the fixed list
    pub fn select_package_type(&mut self, index: usize) {
        if let Some(kind) = PACKAGE_TYPES.get(index) {
            self.package_type = Some(*kind);
        }
        self.show_package_menu = false;
    }

    pub fn attach_photo(&mut self, file_name: impl Into<String>) {
        self.photo = Some(file_name.into());
    }

    pub fn remove_photo(&mut self) {
        self.photo = None;
    }

    /// Post the request and open its detail screen
    pub fn submit(&self) -> Result<NavigationIntent, FormError> {
        if self.package_type.is_none() {
            return Err(FormError::MissingPackageType);
        }
        Ok(NavigationIntent::to(ScreenId::RequestDetails))
    }
}

/// Star rating clamped to 1..=5
fn clamp_stars(stars: u8) -> u8 {
    stars.clamp(1, 5)
}

/// Handover confirmation with the traveler's rating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDeliveryForm {
    pub rating: u8,
    pub feedback: String,
}

impl Default for ConfirmDeliveryForm {
    fn default() -> Self {
        Self {
            rating: 5,
            feedback: String::new(),
        }
    }
}

impl ConfirmDeliveryForm {
    pub fn set_rating(&mut self, stars: u8) {
        self.rating = clamp_stars(stars);
    }

    pub fn submit(&self) -> NavigationIntent {
        tracing::info!("Delivery confirmed with {} star(s)", self.rating);
        NavigationIntent::to(ScreenId::Home)
    }
}

/// Review of the peer after a completed delivery
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatePeerForm {
    /// Zero until the user picks a star
    pub rating: u8,
    pub comment: String,
    pub share_to_feed: bool,
}

impl RatePeerForm {
    pub fn set_rating(&mut self, stars: u8) {
        self.rating = clamp_stars(stars);
    }

    pub fn toggle_share(&mut self) {
        self.share_to_feed = !self.share_to_feed;
    }

    pub fn rating_label(&self) -> &'static str {
        match self.rating {
            1 => "Poor",
            2 => "Fair",
            3 => "Good",
            4 => "Very Good",
            5 => "Excellent",
            _ => "Tap to rate",
        }
    }

    pub fn submit(&self) -> Result<NavigationIntent, FormError> {
        if self.rating == 0 {
            return Err(FormError::MissingRating);
        }
        tracing::info!(
            "Peer rated {} star(s), shared: {}",
            self.rating,
            self.share_to_feed
        );
        Ok(NavigationIntent::to(ScreenId::Home))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_package_type() {
        let mut form = CreateRequestForm::default();
        assert_eq!(form.submit(), Err(FormError::MissingPackageType));

        form.toggle_package_menu();
        form.select_package_type(2);
        assert_eq!(form.package_type, Some("Documents"));
        assert!(!form.show_package_menu);
        assert_eq!(form.submit().unwrap().target, ScreenId::RequestDetails);
    }

    #[test]
    fn test_out_of_range_package_type_is_ignored() {
        let mut form = CreateRequestForm::default();
        form.select_package_type(42);
        assert_eq!(form.package_type, None);
    }

    #[test]
    fn test_photo_attach_and_remove() {
        let mut form = CreateRequestForm::default();
        form.attach_photo("box.png");
        assert_eq!(form.photo.as_deref(), Some("box.png"));
        form.remove_photo();
        assert!(form.photo.is_none());
    }

    #[test]
    fn test_confirm_delivery_defaults_to_five_stars() {
        let mut form = ConfirmDeliveryForm::default();
        assert_eq!(form.rating, 5);
        form.set_rating(0);
        assert_eq!(form.rating, 1);
        form.set_rating(9);
        assert_eq!(form.rating, 5);
        assert_eq!(form.submit().target, ScreenId::Home);
    }

    #[test]
    fn test_rate_peer_requires_rating() {
        let mut form = RatePeerForm::default();
        assert_eq!(form.rating_label(), "Tap to rate");
        assert_eq!(form.submit(), Err(FormError::MissingRating));

        form.set_rating(4);
        form.toggle_share();
        assert_eq!(form.rating_label(), "Very Good");
        assert!(form.share_to_feed);
        assert_eq!(form.submit().unwrap().target, ScreenId::Home);
    }
}
