// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Signed-in user's editable profile

use crate::router::NavigationIntent;
use crate::screen::ScreenId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    University,
    Major,
    Year,
    Location,
    Bio,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::University,
        Self::Major,
        Self::Year,
        Self::Location,
        Self::Bio,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::University => "University",
            Self::Major => "Major",
            Self::Year => "Year",
            Self::Location => "Location",
            Self::Bio => "Bio",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub university: String,
    pub major: String,
    pub year: String,
    pub location: String,
    pub bio: String,
    /// Set while the "saved" banner is showing
    pub saved: bool,
}

impl Default for EditProfileForm {
    fn default() -> Self {
        Self {
            name: "Alex Thompson".to_string(),
            email: "alex.thompson@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            university: "Stanford University".to_string(),
            major: "Computer Science".to_string(),
            year: "3rd Year".to_string(),
            location: "San Francisco, CA".to_string(),
            bio: "CS student at Stanford. I frequently travel between SF and LA. Always happy to help fellow students with their packages!".to_string(),
            saved: false,
        }
    }
}

impl EditProfileForm {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::University => &self.university,
            ProfileField::Major => &self.major,
            ProfileField::Year => &self.year,
            ProfileField::Location => &self.location,
            ProfileField::Bio => &self.bio,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::University => &mut self.university,
            ProfileField::Major => &mut self.major,
            ProfileField::Year => &mut self.year,
            ProfileField::Location => &mut self.location,
            ProfileField::Bio => &mut self.bio,
        };
        *slot = value;
    }

    /// Show the saved banner and return the navigation to run once it has been seen
    pub fn save(&mut self) -> NavigationIntent {
        self.saved = true;
        tracing::info!("Profile saved for {}", self.name);
        NavigationIntent::to(ScreenId::Profile)
    }

    pub fn dismiss_saved(&mut self) {
        self.saved = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_field() {
        let mut form = EditProfileForm::default();
        form.set(ProfileField::Major, "Mathematics".to_string());
        assert_eq!(form.get(ProfileField::Major), "Mathematics");
        assert_eq!(form.get(ProfileField::Name), "Alex Thompson");
    }

    #[test]
    fn test_save_targets_profile() {
        let mut form = EditProfileForm::default();
        let intent = form.save();
        assert!(form.saved);
        assert_eq!(intent.target, ScreenId::Profile);

        form.dismiss_saved();
        assert!(!form.saved);
    }
}
