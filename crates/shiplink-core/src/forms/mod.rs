// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Screen-local state
//
// Interactive screens keep private state that never reaches the router.
// Validation failures come back as FormError and are shown inline.

pub mod chat;
pub mod delivery;
pub mod help;
pub mod notifications;
pub mod profile;
pub mod security;
pub mod signup;
pub mod wallet;

/// Inline validation errors shown on forms
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please select a package type")]
    MissingPackageType,

    #[error("Please select a rating")]
    MissingRating,

    #[error("Invalid card number")]
    InvalidCardNumber,

    #[error("New password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("New passwords do not match")]
    PasswordMismatch,
}
