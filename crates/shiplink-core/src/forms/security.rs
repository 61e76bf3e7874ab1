// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Password change and two-factor switch

use super::FormError;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Current,
    New,
    Confirm,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub two_factor_enabled: bool,
    pub error: Option<FormError>,
    pub changed: bool,
}

impl SecurityForm {
    /// Edit one password field; any edit clears the error
    pub fn set(&mut self, field: PasswordField, value: String) {
        match field {
            PasswordField::Current => self.current_password = value,
            PasswordField::New => self.new_password = value,
            PasswordField::Confirm => self.confirm_password = value,
        }
        self.error = None;
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.current_password.is_empty()
            || self.new_password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FormError::MissingFields);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if self.new_password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }

    /// Simulate the password change. On success the fields are cleared and
    /// the success notice is raised until `dismiss_notice`.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if let Err(e) = self.validate() {
            self.error = Some(e.clone());
            return Err(e);
        }
        self.current_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
        self.error = None;
        self.changed = true;
        tracing::info!("Password changed");
        Ok(())
    }

    pub fn dismiss_notice(&mut self) {
        self.changed = false;
    }

    pub fn toggle_two_factor(&mut self) {
        self.two_factor_enabled = !self.two_factor_enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(current: &str, new: &str, confirm: &str) -> SecurityForm {
        let mut form = SecurityForm::default();
        form.set(PasswordField::Current, current.to_string());
        form.set(PasswordField::New, new.to_string());
        form.set(PasswordField::Confirm, confirm.to_string());
        form
    }

    #[test]
    fn test_missing_fields() {
        let mut form = filled("old", "", "");
        assert_eq!(form.submit(), Err(FormError::MissingFields));
        assert_eq!(form.error, Some(FormError::MissingFields));
    }

    #[test]
    fn test_short_password() {
        let mut form = filled("old", "short", "short");
        assert_eq!(form.submit(), Err(FormError::PasswordTooShort(8)));
        assert_eq!(
            FormError::PasswordTooShort(8).to_string(),
            "New password must be at least 8 characters"
        );
    }

    #[test]
    fn test_mismatch() {
        let mut form = filled("old", "longenough", "longenougH");
        assert_eq!(form.submit(), Err(FormError::PasswordMismatch));
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled("old", "longenough", "longenough");
        assert!(form.submit().is_ok());
        assert!(form.changed);
        assert!(form.new_password.is_empty());

        form.dismiss_notice();
        assert!(!form.changed);
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = filled("", "", "");
        let _ = form.submit();
        assert!(form.error.is_some());
        form.set(PasswordField::Current, "x".to_string());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_two_factor_toggle() {
        let mut form = SecurityForm::default();
        form.toggle_two_factor();
        assert!(form.two_factor_enabled);
    }
}
