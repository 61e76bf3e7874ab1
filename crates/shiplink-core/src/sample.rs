// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Sample data
//
// Every list the prototype shows is fixed at compile time.
// Screens read from here; nothing is fetched or stored.

use crate::types::{initial_of, ChatRecipient, RequestData, SenderSummary, UserProfileData};

/// Traveler card as listed on the dashboard and in search results
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Traveler {
    pub id: u32,
    pub name: &'static str,
    pub bio: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub date: &'static str,
    pub rating: f32,
    pub status: &'static str,
    pub mutual_connections: u32,
    pub verified_student: bool,
}

impl Traveler {
    pub fn to_chat_recipient(&self) -> ChatRecipient {
        ChatRecipient::new(self.name, self.verified_student).with_rating(format_rating(self.rating))
    }
}

/// Dashboard traveler with the profile details opened from the card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturedTraveler {
    pub traveler: Traveler,
    pub university: &'static str,
    pub major: &'static str,
    pub year: &'static str,
    pub location: &'static str,
    pub total_deliveries: &'static str,
    pub success_rate: &'static str,
    pub member_since: &'static str,
    pub about: &'static str,
    pub review_count: &'static str,
}

impl FeaturedTraveler {
    pub fn to_chat_recipient(&self) -> ChatRecipient {
        self.traveler
            .to_chat_recipient()
            .with_deliveries(self.total_deliveries)
    }

    pub fn to_profile(&self) -> UserProfileData {
        UserProfileData {
            name: self.traveler.name.to_string(),
            initial: initial_of(self.traveler.name),
            verified: self.traveler.verified_student,
            rating: format_rating(self.traveler.rating),
            review_count: self.review_count.to_string(),
            university: self.university.to_string(),
            major: self.major.to_string(),
            year: self.year.to_string(),
            location: self.location.to_string(),
            total_deliveries: self.total_deliveries.to_string(),
            success_rate: self.success_rate.to_string(),
            member_since: self.member_since.to_string(),
            about: self.about.to_string(),
        }
    }
}

/// Traveler on the "available travelers" list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvailableTraveler {
    pub id: u32,
    pub name: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub date: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub status: &'static str,
    pub capacity: &'static str,
    pub transport: &'static str,
}

impl AvailableTraveler {
    fn is_verified(&self) -> bool {
        self.status == "Verified"
    }

    pub fn to_chat_recipient(&self) -> ChatRecipient {
        ChatRecipient::new(self.name, self.is_verified())
            .with_rating(format_rating(self.rating))
            .with_deliveries(self.reviews.to_string())
    }

    /// Profile synthesized from the listing; university and major follow the origin city
    pub fn to_profile(&self) -> UserProfileData {
        let (university, major) = match self.from {
            "New York" => ("Columbia University", "Business Administration"),
            "Tokyo" => ("University of Tokyo", "Computer Science"),
            "Berlin" => ("Humboldt University", "International Relations"),
            _ => ("IE University", "Economics"),
        };

        UserProfileData {
            name: self.name.to_string(),
            initial: initial_of(self.name),
            verified: self.is_verified(),
            rating: format_rating(self.rating),
            review_count: self.reviews.to_string(),
            university: university.to_string(),
            major: major.to_string(),
            year: "3rd Year".to_string(),
            location: self.from.to_string(),
            total_deliveries: self.reviews.to_string(),
            success_rate: "99%".to_string(),
            member_since: "Jan 2024".to_string(),
            about: format!(
                "Verified student traveler traveling from {} to {}. {} for delivery.",
                self.from, self.to, self.capacity
            ),
        }
    }
}

/// Parcel card on the dashboard and in search results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parcel {
    pub id: u32,
    pub title: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub weight: &'static str,
    pub reward: &'static str,
    pub status: &'static str,
}

/// Entry on the "all requests" list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParcelRequest {
    pub id: u32,
    pub title: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub weight: &'static str,
    pub reward: &'static str,
    pub reward_value: u32,
    pub status: &'static str,
    pub deadline: &'static str,
    pub is_fragile: bool,
}

/// Parcel the signed-in user is carrying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedParcel {
    pub id: u32,
    pub title: &'static str,
    pub kind: &'static str,
    pub weight: &'static str,
    pub dimensions: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub date: &'static str,
    pub reward: &'static str,
    pub status: &'static str,
    pub traveler: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Escrow,
    TravelUpdate,
    Match,
    RequestAccepted,
    Message,
}

impl NotificationKind {
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Escrow => "changes-prevent-symbolic",
            Self::TravelUpdate => "image-x-generic-symbolic",
            Self::Match => "system-users-symbolic",
            Self::RequestAccepted => "package-x-generic-symbolic",
            Self::Message => "mail-unread-symbolic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub unread: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub id: u32,
    pub reviewer: &'static str,
    pub rating: u8,
    pub comment: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Dial code offered on the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub flag: &'static str,
    pub name: &'static str,
}

/// Ratings are shown with one decimal place ("5.0", "4.9")
pub fn format_rating(rating: f32) -> String {
    format!("{:.1}", rating)
}

const SARAH: Traveler = Traveler {
    id: 1,
    name: "Sarah Johnson",
    bio: "Student at TU Munich",
    from: "New York",
    to: "London",
    date: "Dec 15",
    rating: 4.9,
    status: "Departing Soon",
    mutual_connections: 3,
    verified_student: true,
};

const MICHAEL: Traveler = Traveler {
    id: 2,
    name: "Michael Chen",
    bio: "Student at Sciences Po",
    from: "Tokyo",
    to: "Paris",
    date: "Dec 18",
    rating: 5.0,
    status: "Verified",
    mutual_connections: 5,
    verified_student: true,
};

pub const FEATURED_TRAVELERS: [FeaturedTraveler; 2] = [
    FeaturedTraveler {
        traveler: SARAH,
        university: "Technical University of Munich",
        major: "Computer Science",
        year: "3rd Year",
        location: "Munich, Germany",
        total_deliveries: "24",
        success_rate: "98%",
        member_since: "Jan 2024",
        about: "CS student at TU Munich. I frequently travel between New York and London for family visits. Always happy to help fellow students with their packages!",
        review_count: "18",
    },
    FeaturedTraveler {
        traveler: MICHAEL,
        university: "Sciences Po Paris",
        major: "International Relations",
        year: "4th Year (Senior)",
        location: "Paris, France",
        total_deliveries: "38",
        success_rate: "100%",
        member_since: "Aug 2023",
        about: "International Relations student at Sciences Po. I travel frequently between Tokyo and Paris. Reliable and communicative. Happy to help!",
        review_count: "28",
    },
];

pub const SEARCH_TRAVELERS: [Traveler; 4] = [
    SARAH,
    MICHAEL,
    Traveler {
        id: 3,
        name: "Emma Schmidt",
        bio: "Freelance Designer",
        from: "Berlin",
        to: "Munich",
        date: "Dec 20",
        rating: 4.8,
        status: "Available",
        mutual_connections: 2,
        verified_student: false,
    },
    Traveler {
        id: 4,
        name: "Carlos Ruiz",
        bio: "Business Consultant",
        from: "Madrid",
        to: "Barcelona",
        date: "Dec 22",
        rating: 4.7,
        status: "Verified",
        mutual_connections: 4,
        verified_student: false,
    },
];

pub const AVAILABLE_TRAVELERS: [AvailableTraveler; 4] = [
    AvailableTraveler {
        id: 1,
        name: "Sarah Johnson",
        from: "New York",
        to: "London",
        date: "Dec 15",
        rating: 4.9,
        reviews: 124,
        status: "Departing Soon",
        capacity: "5kg available",
        transport: "Flight",
    },
    AvailableTraveler {
        id: 2,
        name: "Michael Chen",
        from: "Tokyo",
        to: "Paris",
        date: "Dec 18",
        rating: 5.0,
        reviews: 89,
        status: "Verified",
        capacity: "10kg available",
        transport: "Flight",
    },
    AvailableTraveler {
        id: 3,
        name: "Emma Wilson",
        from: "Berlin",
        to: "Amsterdam",
        date: "Dec 20",
        rating: 4.8,
        reviews: 56,
        status: "Open for Offers",
        capacity: "2kg available",
        transport: "Train",
    },
    AvailableTraveler {
        id: 4,
        name: "James Rodriguez",
        from: "Madrid",
        to: "Barcelona",
        date: "Dec 22",
        rating: 4.7,
        reviews: 42,
        status: "Verified",
        capacity: "8kg available",
        transport: "Car",
    },
];

pub const SEARCH_PARCELS: [Parcel; 4] = [
    Parcel {
        id: 1,
        title: "Electronics Package",
        from: "Berlin",
        to: "Munich",
        weight: "2.5 kg",
        reward: "$45",
        status: "New Request",
    },
    Parcel {
        id: 2,
        title: "Document Delivery",
        from: "Madrid",
        to: "Barcelona",
        weight: "0.5 kg",
        reward: "$25",
        status: "Urgent",
    },
    Parcel {
        id: 3,
        title: "Gift Box",
        from: "Paris",
        to: "Lyon",
        weight: "1.2 kg",
        reward: "$30",
        status: "New Request",
    },
    Parcel {
        id: 4,
        title: "Medical Supplies",
        from: "London",
        to: "Manchester",
        weight: "3.0 kg",
        reward: "$55",
        status: "Urgent",
    },
];

/// The dashboard shows the first two parcels only
pub fn dashboard_parcels() -> &'static [Parcel] {
    &SEARCH_PARCELS[..2]
}

pub const PARCEL_REQUESTS: [ParcelRequest; 5] = [
    ParcelRequest {
        id: 1,
        title: "Electronics Package",
        from: "Berlin",
        to: "Munich",
        weight: "2.5 kg",
        reward: "$45",
        reward_value: 45,
        status: "New Request",
        deadline: "Dec 20",
        is_fragile: false,
    },
    ParcelRequest {
        id: 2,
        title: "Document Delivery",
        from: "Madrid",
        to: "Barcelona",
        weight: "0.5 kg",
        reward: "$25",
        reward_value: 25,
        status: "Urgent",
        deadline: "Dec 16",
        is_fragile: false,
    },
    ParcelRequest {
        id: 3,
        title: "Gift Box (Fragile)",
        from: "Paris",
        to: "Lyon",
        weight: "1.2 kg",
        reward: "$35",
        reward_value: 35,
        status: "Standard",
        deadline: "Dec 22",
        is_fragile: true,
    },
    ParcelRequest {
        id: 4,
        title: "Clothing Bundle",
        from: "London",
        to: "Manchester",
        weight: "4.0 kg",
        reward: "$50",
        reward_value: 50,
        status: "Flexible",
        deadline: "Dec 25",
        is_fragile: false,
    },
    ParcelRequest {
        id: 5,
        title: "Fragile Glassware",
        from: "Rome",
        to: "Milan",
        weight: "3.0 kg",
        reward: "$60",
        reward_value: 60,
        status: "Urgent",
        deadline: "Dec 17",
        is_fragile: true,
    },
];

pub const ACCEPTED_PARCELS: [AcceptedParcel; 4] = [
    AcceptedParcel {
        id: 1,
        title: "Gaming Console",
        kind: "Electronics",
        weight: "2.5 kg",
        dimensions: "40x30x15 cm",
        from: "Berlin",
        to: "Munich",
        date: "Dec 19, 2024",
        reward: "$45",
        status: "In Transit",
        traveler: "Sarah Johnson",
    },
    AcceptedParcel {
        id: 2,
        title: "Legal Documents",
        kind: "Documents",
        weight: "0.5 kg",
        dimensions: "A4 Envelope",
        from: "Madrid",
        to: "Barcelona",
        date: "Dec 20, 2024",
        reward: "$25",
        status: "Picked Up",
        traveler: "Carlos Ruiz",
    },
    AcceptedParcel {
        id: 3,
        title: "Handmade Ceramics",
        kind: "Fragile",
        weight: "1.2 kg",
        dimensions: "20x20x20 cm",
        from: "Paris",
        to: "Lyon",
        date: "Dec 22, 2024",
        reward: "$35",
        status: "Awaiting Pickup",
        traveler: "Marie Curie",
    },
    AcceptedParcel {
        id: 4,
        title: "Winter Clothes",
        kind: "Clothing",
        weight: "5.0 kg",
        dimensions: "50x40x30 cm",
        from: "Oslo",
        to: "Stockholm",
        date: "Dec 24, 2024",
        reward: "$60",
        status: "Pending",
        traveler: "Lars Ulrich",
    },
];

pub const NOTIFICATIONS: [Notification; 5] = [
    Notification {
        id: 1,
        kind: NotificationKind::Escrow,
        title: "Escrow Update",
        message: "Your $45 is secured for the Munich trip.",
        time: "2 min ago",
        unread: true,
    },
    Notification {
        id: 2,
        kind: NotificationKind::TravelUpdate,
        title: "Travel Update",
        message: "Sarah Johnson just posted a photo of your parcel at the gate!",
        time: "15 min ago",
        unread: true,
    },
    Notification {
        id: 3,
        kind: NotificationKind::Match,
        title: "New Match",
        message: "2 students are traveling to Tehran next week.",
        time: "1 hour ago",
        unread: true,
    },
    Notification {
        id: 4,
        kind: NotificationKind::RequestAccepted,
        title: "Request Accepted",
        message: "Sarah Johnson accepted your parcel request",
        time: "3 hours ago",
        unread: false,
    },
    Notification {
        id: 5,
        kind: NotificationKind::Message,
        title: "New Message",
        message: "Michael Chen sent you a message",
        time: "5 hours ago",
        unread: false,
    },
];

pub fn unread_notifications() -> usize {
    NOTIFICATIONS.iter().filter(|n| n.unread).count()
}

pub const REVIEWS: [Review; 3] = [
    Review {
        id: 1,
        reviewer: "Michael Chen",
        rating: 5,
        comment: "Super reliable! Delivered my textbooks on time and kept me updated throughout. Great communication!",
        date: "Dec 15, 2024",
    },
    Review {
        id: 2,
        reviewer: "Emma Rodriguez",
        rating: 5,
        comment: "Excellent service! Very careful with my laptop. Highly recommend!",
        date: "Dec 10, 2024",
    },
    Review {
        id: 3,
        reviewer: "David Kim",
        rating: 4,
        comment: "Good experience overall. Package arrived safely.",
        date: "Dec 5, 2024",
    },
];

pub const FAQS: [Faq; 8] = [
    Faq {
        question: "How does ShipLink work?",
        answer: "ShipLink connects students who need packages delivered with verified student travelers going to the same destination. Senders post delivery requests, travelers accept them, and both parties meet for secure handover using QR codes.",
    },
    Faq {
        question: "Is my payment secure?",
        answer: "Yes! All payments are held in escrow until successful delivery is confirmed by both parties. Your payment information is encrypted and we never store your full card details.",
    },
    Faq {
        question: "What if my package gets damaged?",
        answer: "ShipLink offers protection for all deliveries. If your package is damaged during transit, you can file a claim through the app within 48 hours of delivery. Our support team will review and process refunds accordingly.",
    },
    Faq {
        question: "How do I verify my student status?",
        answer: "Upload your valid student ID or .edu email during signup. Verification typically takes 1-2 business days. Verified students get a badge on their profile and access to all platform features.",
    },
    Faq {
        question: "Can I cancel a delivery request?",
        answer: "Yes, you can cancel before a traveler accepts your request at no charge. After acceptance, cancellation fees may apply depending on timing. See our cancellation policy in the Terms of Service.",
    },
    Faq {
        question: "How are rewards determined?",
        answer: "Senders set their own reward amounts. We recommend $5-15 for local deliveries and $20-50 for long-distance trips. Higher rewards typically get accepted faster.",
    },
    Faq {
        question: "What items are prohibited?",
        answer: "Prohibited items include weapons, illegal substances, hazardous materials, perishable food, live animals, and items over 50 lbs. Full list available in our Community Guidelines.",
    },
    Faq {
        question: "How do I contact customer support?",
        answer: "You can reach us via email at support@shiplink.com, through in-app chat, or by phone at 1-800-SHIPLINK. We respond within 24 hours on weekdays.",
    },
];

pub const COUNTRIES: [Country; 4] = [
    Country {
        code: "+1",
        flag: "🇺🇸",
        name: "USA",
    },
    Country {
        code: "+44",
        flag: "🇬🇧",
        name: "UK",
    },
    Country {
        code: "+49",
        flag: "🇩🇪",
        name: "Germany",
    },
    Country {
        code: "+33",
        flag: "🇫🇷",
        name: "France",
    },
];

pub const PACKAGE_TYPES: [&str; 4] = ["Electronics", "Clothing", "Documents", "Fragile"];

/// Code encoded in the handover QR for the active delivery
pub const HANDOVER_CODE: &str = "SHIP-4829-MUC";

/// Counterpart shown when the chat screen opens without a recipient
pub fn default_chat_recipient() -> ChatRecipient {
    ChatRecipient::new("Sarah Johnson", true)
}

/// Request shown when the acceptance screen opens without one
pub fn default_request() -> RequestData {
    RequestData {
        title: "Electronics Package".to_string(),
        destination: "Munich, Germany".to_string(),
        package_type: "Books".to_string(),
        weight: "5 kg".to_string(),
        reward: "$45".to_string(),
        sender: SenderSummary {
            name: "Emma Schmidt".to_string(),
            rating: "4.8".to_string(),
            deliveries: "32 deliveries".to_string(),
        },
        expected_delivery: "December 20, 2024".to_string(),
    }
}

/// Profile shown when the profile viewer opens without one
pub fn default_profile() -> UserProfileData {
    UserProfileData {
        name: "Emma Schmidt".to_string(),
        initial: "E".to_string(),
        verified: true,
        rating: "4.8".to_string(),
        review_count: "32".to_string(),
        university: "Humboldt University of Berlin".to_string(),
        major: "Business Administration".to_string(),
        year: "4th Year (Senior)".to_string(),
        location: "Berlin, Germany".to_string(),
        total_deliveries: "32".to_string(),
        success_rate: "100%".to_string(),
        member_since: "Sep 2023".to_string(),
        about: "Hey! I'm a business student at Humboldt University. I frequently travel between Berlin and other German cities for internships and conferences. Always happy to help fellow students with their packages!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_traveler_profile_matches_card() {
        let sarah = &FEATURED_TRAVELERS[0];
        let recipient = sarah.to_chat_recipient();
        let profile = sarah.to_profile();

        assert_eq!(recipient.name, profile.name);
        assert_eq!(recipient.initial, "S");
        assert_eq!(recipient.rating.as_deref(), Some("4.9"));
        assert_eq!(recipient.deliveries.as_deref(), Some("24"));
        assert_eq!(profile.review_count, "18");
    }

    #[test]
    fn test_available_traveler_verification_follows_status() {
        let sarah = &AVAILABLE_TRAVELERS[0];
        let michael = &AVAILABLE_TRAVELERS[1];
        assert!(!sarah.to_chat_recipient().verified);
        assert!(michael.to_chat_recipient().verified);
        assert_eq!(michael.to_profile().university, "University of Tokyo");
        assert_eq!(AVAILABLE_TRAVELERS[3].to_profile().university, "IE University");
    }

    #[test]
    fn test_rating_keeps_one_decimal() {
        assert_eq!(format_rating(5.0), "5.0");
        assert_eq!(format_rating(4.8), "4.8");
    }

    #[test]
    fn test_unread_count() {
        assert_eq!(unread_notifications(), 3);
    }

    #[test]
    fn test_default_request_sender_is_default_profile() {
        assert_eq!(default_request().sender.name, default_profile().name);
        assert_eq!(dashboard_parcels().len(), 2);
    }
}
