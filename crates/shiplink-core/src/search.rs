// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Search and list filters

use crate::sample::{
    Parcel, ParcelRequest, Traveler, PARCEL_REQUESTS, SEARCH_PARCELS, SEARCH_TRAVELERS,
};

/// Matches from the fixed traveler and parcel lists
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub query: String,
    pub travelers: Vec<Traveler>,
    pub parcels: Vec<Parcel>,
}

impl SearchResults {
    pub fn has_results(&self) -> bool {
        !self.travelers.is_empty() || !self.parcels.is_empty()
    }

    pub fn total(&self) -> usize {
        self.travelers.len() + self.parcels.len()
    }
}

/// Case-insensitive substring match. An empty needle matches everything.
fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Search travelers by name/origin/destination and parcels by title/origin/destination
pub fn search(query: &str) -> SearchResults {
    let needle = query.to_lowercase();

    let travelers = SEARCH_TRAVELERS
        .iter()
        .filter(|t| {
            contains_ignore_case(t.name, &needle)
                || contains_ignore_case(t.from, &needle)
                || contains_ignore_case(t.to, &needle)
        })
        .copied()
        .collect();

    let parcels = SEARCH_PARCELS
        .iter()
        .filter(|p| {
            contains_ignore_case(p.title, &needle)
                || contains_ignore_case(p.from, &needle)
                || contains_ignore_case(p.to, &needle)
        })
        .copied()
        .collect();

    let results = SearchResults {
        query: query.to_string(),
        travelers,
        parcels,
    };
    tracing::debug!("Search {:?} matched {} entries", query, results.total());
    results
}

/// Chip filter on the "all requests" list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestFilter {
    #[default]
    All,
    HighReward,
    Urgent,
    Fragile,
}

impl RequestFilter {
    pub const ALL: [RequestFilter; 4] = [
        RequestFilter::All,
        RequestFilter::HighReward,
        RequestFilter::Urgent,
        RequestFilter::Fragile,
    ];

    /// Rewards at or above this many dollars count as high
    pub const HIGH_REWARD_THRESHOLD: u32 = 40;

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::HighReward => "High Reward",
            Self::Urgent => "Urgent",
            Self::Fragile => "Fragile",
        }
    }

    pub fn matches(&self, request: &ParcelRequest) -> bool {
        match self {
            Self::All => true,
            Self::HighReward => request.reward_value >= Self::HIGH_REWARD_THRESHOLD,
            Self::Urgent => request.status == "Urgent",
            Self::Fragile => request.is_fragile,
        }
    }

    pub fn apply(&self) -> Vec<ParcelRequest> {
        PARCEL_REQUESTS
            .iter()
            .filter(|r| self.matches(r))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_berlin_matches_origin_and_destination() {
        let results = search("Berlin");
        let names: Vec<_> = results.travelers.iter().map(|t| t.name).collect();
        let titles: Vec<_> = results.parcels.iter().map(|p| p.title).collect();
        assert_eq!(names, vec!["Emma Schmidt"]);
        assert_eq!(titles, vec!["Electronics Package"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mixed = search("bErLiN");
        let exact = search("Berlin");
        assert_eq!(mixed.travelers, exact.travelers);
        assert_eq!(mixed.parcels, exact.parcels);
        assert_eq!(search("sarah").travelers.len(), 1);
    }

    #[test]
    fn test_search_matches_destination_substring() {
        let results = search("london");
        // Sarah travels to London, Medical Supplies leave from it
        assert_eq!(results.travelers.len(), 1);
        assert_eq!(results.parcels.len(), 1);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let results = search("");
        assert_eq!(results.travelers.len(), SEARCH_TRAVELERS.len());
        assert_eq!(results.parcels.len(), SEARCH_PARCELS.len());
    }

    #[test]
    fn test_no_results() {
        let results = search("Tehran");
        assert!(!results.has_results());
        assert_eq!(results.total(), 0);
    }

    #[test]
    fn test_request_filters() {
        let ids = |filter: RequestFilter| -> Vec<u32> { filter.apply().iter().map(|r| r.id).collect() };
        assert_eq!(ids(RequestFilter::All), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(RequestFilter::HighReward), vec![1, 4, 5]);
        assert_eq!(ids(RequestFilter::Urgent), vec![2, 5]);
        assert_eq!(ids(RequestFilter::Fragile), vec![3, 5]);
    }
}
