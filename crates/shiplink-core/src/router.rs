// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Screen router
//
// One RouterState holds the current screen and four payload slots.
// Screens never own it; they read the props resolved for them and
// emit NavigationIntents back into the router.

use crate::sample;
use crate::schedule::{PendingNavigations, ScheduledNavigation, Ticket};
use crate::screen::ScreenId;
use crate::types::{AppError, AppSettings, ChatRecipient, PayloadRetention, RequestData, UserProfileData};
use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

/// Data carried in the single positional payload of a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationPayload {
    SearchQuery(String),
    ChatRecipient(ChatRecipient),
}

impl From<ChatRecipient> for NavigationPayload {
    fn from(recipient: ChatRecipient) -> Self {
        NavigationPayload::ChatRecipient(recipient)
    }
}

/// A request to change screen, optionally filling payload slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub target: ScreenId,
    pub payload: Option<NavigationPayload>,
    pub request: Option<RequestData>,
    pub profile: Option<UserProfileData>,
}

impl NavigationIntent {
    pub fn to(target: ScreenId) -> Self {
        Self {
            target,
            payload: None,
            request: None,
            profile: None,
        }
    }

    pub fn payload(mut self, payload: impl Into<NavigationPayload>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn search(self, query: impl Into<String>) -> Self {
        self.payload(NavigationPayload::SearchQuery(query.into()))
    }

    pub fn recipient(self, recipient: ChatRecipient) -> Self {
        self.payload(NavigationPayload::ChatRecipient(recipient))
    }

    pub fn request(mut self, request: RequestData) -> Self {
        self.request = Some(request);
        self
    }

    pub fn profile(mut self, profile: UserProfileData) -> Self {
        self.profile = Some(profile);
        self
    }
}

impl From<ScreenId> for NavigationIntent {
    fn from(target: ScreenId) -> Self {
        NavigationIntent::to(target)
    }
}

/// Current screen plus the slots carried forward to later screens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterState {
    pub current_screen: ScreenId,
    pub pending_chat_recipient: Option<ChatRecipient>,
    pub pending_request: Option<RequestData>,
    pub pending_search_query: Option<String>,
    pub pending_profile: Option<UserProfileData>,
}

impl RouterState {
    pub fn new(initial: ScreenId) -> Self {
        Self {
            current_screen: initial,
            ..Self::default()
        }
    }

    /// Apply one navigation. Supplied values overwrite their slot,
    /// omitted ones leave it as it was.
    pub fn reduce(mut self, intent: NavigationIntent) -> Self {
        match intent.payload {
            Some(NavigationPayload::SearchQuery(query)) => self.pending_search_query = Some(query),
            Some(NavigationPayload::ChatRecipient(recipient)) => {
                self.pending_chat_recipient = Some(recipient)
            }
            None => {}
        }
        if let Some(request) = intent.request {
            self.pending_request = Some(request);
        }
        if let Some(profile) = intent.profile {
            self.pending_profile = Some(profile);
        }
        self.current_screen = intent.target;
        self
    }

    /// Props for the current screen, carrying only the slots it reads
    pub fn resolve(&self) -> ScreenProps {
        match self.current_screen {
            ScreenId::Chat => ScreenProps::Chat {
                recipient: self.pending_chat_recipient.clone(),
                profile: self.pending_profile.clone(),
            },
            ScreenId::RequestAccepted => ScreenProps::RequestAccepted {
                request: self.pending_request.clone(),
            },
            ScreenId::SearchResults => ScreenProps::SearchResults {
                query: self.pending_search_query.clone().unwrap_or_default(),
            },
            ScreenId::ViewUserProfile => ScreenProps::ViewUserProfile {
                profile: self.pending_profile.clone(),
            },
            other => ScreenProps::Static(other),
        }
    }

    /// Empty the slots the current screen reads
    fn consume(&mut self) {
        match self.current_screen {
            ScreenId::Chat => {
                self.pending_chat_recipient = None;
                self.pending_profile = None;
            }
            ScreenId::RequestAccepted => self.pending_request = None,
            ScreenId::SearchResults => self.pending_search_query = None,
            ScreenId::ViewUserProfile => self.pending_profile = None,
            _ => {}
        }
    }
}

/// What a screen is handed when it renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenProps {
    Chat {
        recipient: Option<ChatRecipient>,
        profile: Option<UserProfileData>,
    },
    RequestAccepted {
        request: Option<RequestData>,
    },
    SearchResults {
        query: String,
    },
    ViewUserProfile {
        profile: Option<UserProfileData>,
    },
    Static(ScreenId),
}

impl ScreenProps {
    pub fn screen(&self) -> ScreenId {
        match self {
            Self::Chat { .. } => ScreenId::Chat,
            Self::RequestAccepted { .. } => ScreenId::RequestAccepted,
            Self::SearchResults { .. } => ScreenId::SearchResults,
            Self::ViewUserProfile { .. } => ScreenId::ViewUserProfile,
            Self::Static(screen) => *screen,
        }
    }

    /// Chat counterpart, falling back to the default conversation
    pub fn recipient_or_default(&self) -> ChatRecipient {
        match self {
            Self::Chat {
                recipient: Some(recipient),
                ..
            } => recipient.clone(),
            _ => sample::default_chat_recipient(),
        }
    }

    pub fn request_or_default(&self) -> RequestData {
        match self {
            Self::RequestAccepted {
                request: Some(request),
            } => request.clone(),
            _ => sample::default_request(),
        }
    }

    pub fn profile_or_default(&self) -> UserProfileData {
        match self {
            Self::Chat {
                profile: Some(profile),
                ..
            }
            | Self::ViewUserProfile {
                profile: Some(profile),
            } => profile.clone(),
            _ => sample::default_profile(),
        }
    }

    pub fn query(&self) -> &str {
        match self {
            Self::SearchResults { query } => query,
            _ => "",
        }
    }
}

/// Decides whether a transition between two screens is permitted
pub trait TransitionGuard: fmt::Debug + Send + Sync {
    fn allows(&self, from: ScreenId, to: ScreenId) -> bool;
}

/// Every screen may navigate to every screen
#[derive(Debug, Default, Clone, Copy)]
pub struct AnyTransition;

impl TransitionGuard for AnyTransition {
    fn allows(&self, _from: ScreenId, _to: ScreenId) -> bool {
        true
    }
}

/// Explicit adjacency set. Staying on the same screen is always allowed.
#[derive(Debug, Default, Clone)]
pub struct AdjacencyGuard {
    edges: HashSet<(ScreenId, ScreenId)>,
}

impl AdjacencyGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow(mut self, from: ScreenId, to: ScreenId) -> Self {
        self.edges.insert((from, to));
        self
    }

    pub fn allow_all_from(mut self, from: ScreenId, targets: &[ScreenId]) -> Self {
        self.edges.extend(targets.iter().map(|to| (from, *to)));
        self
    }
}

impl TransitionGuard for AdjacencyGuard {
    fn allows(&self, from: ScreenId, to: ScreenId) -> bool {
        from == to || self.edges.contains(&(from, to))
    }
}

/// Owns the router state and dispatches navigation intents
#[derive(Debug)]
pub struct Router {
    state: RouterState,
    pending: PendingNavigations,
    retention: PayloadRetention,
    guard: Box<dyn TransitionGuard>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(ScreenId::default())
    }
}

impl Router {
    pub fn new(initial: ScreenId) -> Self {
        Self {
            state: RouterState::new(initial),
            pending: PendingNavigations::default(),
            retention: PayloadRetention::default(),
            guard: Box::new(AnyTransition),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.initial_screen).with_retention(settings.payload_retention)
    }

    pub fn with_retention(mut self, retention: PayloadRetention) -> Self {
        self.retention = retention;
        self
    }

    pub fn with_guard(mut self, guard: impl TransitionGuard + 'static) -> Self {
        self.guard = Box::new(guard);
        self
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn current(&self) -> ScreenId {
        self.state.current_screen
    }

    /// Dispatch a navigation. Any screen may go to any screen; the last call wins
    /// and outstanding delayed navigations are dropped.
    pub fn navigate(&mut self, intent: impl Into<NavigationIntent>) {
        let intent = intent.into();
        let from = self.state.current_screen;
        let to = intent.target;

        let superseded = self.pending.clear();
        if superseded > 0 {
            tracing::debug!("Navigation to {} superseded {} delayed navigation(s)", to, superseded);
        }

        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(intent);
        tracing::debug!("Navigate {} -> {}", from, to);
    }

    /// Like `navigate`, but consults the transition guard first
    pub fn try_navigate(&mut self, intent: impl Into<NavigationIntent>) -> Result<(), AppError> {
        let intent = intent.into();
        self.check_guard(intent.target)?;
        self.navigate(intent);
        Ok(())
    }

    fn check_guard(&self, to: ScreenId) -> Result<(), AppError> {
        let from = self.state.current_screen;
        if !self.guard.allows(from, to) {
            tracing::warn!("Rejected navigation {} -> {}", from, to);
            return Err(AppError::TransitionNotAllowed { from, to });
        }
        Ok(())
    }

    pub fn resolve(&self) -> ScreenProps {
        self.state.resolve()
    }

    /// Resolve props for rendering, emptying the slots read when the
    /// clear-on-consume policy is active
    pub fn resolve_and_consume(&mut self) -> ScreenProps {
        let props = self.state.resolve();
        if self.retention == PayloadRetention::ClearOnConsume {
            self.state.consume();
        }
        props
    }

    /// Queue a navigation to run after `delay`
    pub fn schedule(&mut self, delay: Duration, intent: impl Into<NavigationIntent>) -> ScheduledNavigation {
        let scheduled = self.pending.insert(delay, intent.into());
        tracing::debug!(
            "Scheduled {} to {} in {:?}",
            scheduled.ticket,
            scheduled.intent.target,
            delay
        );
        scheduled
    }

    /// Cancel a pending delayed navigation. Returns false if it already fired
    /// or was superseded.
    pub fn cancel(&mut self, ticket: Ticket) -> bool {
        self.pending.remove(ticket).is_some()
    }

    /// Run a delayed navigation whose delay has elapsed, if it is still pending
    /// and the transition guard allows it from the current screen
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        match self.pending.remove(ticket) {
            Some(intent) => {
                if self.check_guard(intent.target).is_err() {
                    return false;
                }
                self.navigate(intent);
                true
            }
            None => {
                tracing::debug!("Ignoring stale delayed navigation {}", ticket);
                false
            }
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sarah() -> ChatRecipient {
        ChatRecipient::new("Sarah Johnson", true)
    }

    #[test]
    fn test_navigate_without_payload_keeps_slots() {
        let mut router = Router::default();
        router.navigate(
            NavigationIntent::to(ScreenId::Chat)
                .recipient(sarah())
                .request(sample::default_request())
                .profile(sample::default_profile()),
        );
        router.navigate(NavigationIntent::to(ScreenId::SearchResults).search("Munich"));
        let before = router.state().clone();

        for screen in ScreenId::ALL {
            router.navigate(screen);
            assert_eq!(router.current(), screen);
            assert_eq!(router.state().pending_chat_recipient, before.pending_chat_recipient);
            assert_eq!(router.state().pending_request, before.pending_request);
            assert_eq!(router.state().pending_search_query, before.pending_search_query);
            assert_eq!(router.state().pending_profile, before.pending_profile);
        }
    }

    #[test]
    fn test_recipient_payload_leaves_query() {
        let state = RouterState::default()
            .reduce(NavigationIntent::to(ScreenId::SearchResults).search("Paris"))
            .reduce(NavigationIntent::to(ScreenId::Chat).recipient(sarah()));
        assert_eq!(state.pending_chat_recipient, Some(sarah()));
        assert_eq!(state.pending_search_query.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_query_payload_leaves_recipient() {
        let state = RouterState::default()
            .reduce(NavigationIntent::to(ScreenId::Chat).recipient(sarah()))
            .reduce(NavigationIntent::to(ScreenId::SearchResults).search("Paris"));
        assert_eq!(state.pending_search_query.as_deref(), Some("Paris"));
        assert_eq!(state.pending_chat_recipient, Some(sarah()));
    }

    #[test]
    fn test_repeated_navigation_is_idempotent() {
        let intent = NavigationIntent::to(ScreenId::Chat).recipient(sarah());
        let once = RouterState::default().reduce(intent.clone());
        let twice = once.clone().reduce(intent);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_chat_props_round_trip() {
        let recipient = sample::FEATURED_TRAVELERS[1].to_chat_recipient();
        let profile = sample::FEATURED_TRAVELERS[1].to_profile();
        let mut router = Router::default();
        router.navigate(
            NavigationIntent::to(ScreenId::Chat)
                .recipient(recipient.clone())
                .profile(profile.clone()),
        );
        assert_eq!(
            router.resolve(),
            ScreenProps::Chat {
                recipient: Some(recipient),
                profile: Some(profile),
            }
        );
    }

    #[test]
    fn test_view_profile_reads_profile_slot_not_recipient() {
        let mut router = Router::default();
        router.navigate(NavigationIntent::to(ScreenId::Chat).recipient(sarah()));
        router.navigate(ScreenId::ViewUserProfile);

        let props = router.resolve();
        assert_eq!(props, ScreenProps::ViewUserProfile { profile: None });
        assert_eq!(props.profile_or_default(), sample::default_profile());
    }

    #[test]
    fn test_back_from_profile_to_chat_keeps_recipient() {
        let profile = sample::FEATURED_TRAVELERS[0].to_profile();
        let mut router = Router::default();
        router.navigate(
            NavigationIntent::to(ScreenId::Chat)
                .recipient(sarah())
                .profile(profile.clone()),
        );
        router.navigate(ScreenId::ViewUserProfile);
        assert_eq!(router.resolve().profile_or_default(), profile);

        router.navigate(ScreenId::Chat);
        assert_eq!(
            router.resolve(),
            ScreenProps::Chat {
                recipient: Some(sarah()),
                profile: Some(profile),
            }
        );
    }

    #[test]
    fn test_fallbacks_for_absent_slots() {
        let router = Router::new(ScreenId::Chat);
        let props = router.resolve();
        assert_eq!(props.recipient_or_default(), sample::default_chat_recipient());

        let accepted = RouterState::new(ScreenId::RequestAccepted).resolve();
        assert_eq!(accepted.request_or_default(), sample::default_request());

        let search = RouterState::new(ScreenId::SearchResults).resolve();
        assert_eq!(search.query(), "");
    }

    #[test]
    fn test_static_screens_get_no_slots() {
        let state = RouterState::default()
            .reduce(NavigationIntent::to(ScreenId::Home).recipient(sarah()));
        assert_eq!(state.resolve(), ScreenProps::Static(ScreenId::Home));
        assert_eq!(state.resolve().screen(), ScreenId::Home);
    }

    #[test]
    fn test_clear_on_consume_empties_read_slots() {
        let mut router = Router::default().with_retention(PayloadRetention::ClearOnConsume);
        router.navigate(
            NavigationIntent::to(ScreenId::Chat)
                .recipient(sarah())
                .request(sample::default_request()),
        );
        let props = router.resolve_and_consume();
        assert_eq!(props.recipient_or_default(), sarah());
        assert_eq!(router.state().pending_chat_recipient, None);
        // Chat does not read the request slot
        assert!(router.state().pending_request.is_some());
    }

    #[test]
    fn test_retain_keeps_slots_after_render() {
        let mut router = Router::default();
        router.navigate(NavigationIntent::to(ScreenId::Chat).recipient(sarah()));
        router.resolve_and_consume();
        assert_eq!(router.state().pending_chat_recipient, Some(sarah()));
    }

    #[test]
    fn test_delayed_navigation_fires_once() {
        let mut router = Router::new(ScreenId::EditProfile);
        let scheduled = router.schedule(Duration::from_millis(1500), ScreenId::Profile);
        assert_eq!(router.pending_count(), 1);

        assert!(router.fire(scheduled.ticket));
        assert_eq!(router.current(), ScreenId::Profile);
        assert!(!router.fire(scheduled.ticket));
    }

    #[test]
    fn test_navigation_supersedes_delayed_navigation() {
        let mut router = Router::new(ScreenId::EditProfile);
        let scheduled = router.schedule(Duration::from_millis(1500), ScreenId::Profile);

        router.navigate(ScreenId::Home);
        assert_eq!(router.pending_count(), 0);
        assert!(!router.fire(scheduled.ticket));
        assert_eq!(router.current(), ScreenId::Home);
    }

    #[test]
    fn test_cancel_delayed_navigation() {
        let mut router = Router::new(ScreenId::EditProfile);
        let scheduled = router.schedule(Duration::from_millis(1500), ScreenId::Profile);
        assert!(router.cancel(scheduled.ticket));
        assert!(!router.cancel(scheduled.ticket));
        assert!(!router.fire(scheduled.ticket));
        assert_eq!(router.current(), ScreenId::EditProfile);
    }

    #[test]
    fn test_adjacency_guard() {
        let guard = AdjacencyGuard::new()
            .allow(ScreenId::Splash, ScreenId::SignIn)
            .allow_all_from(ScreenId::SignIn, &[ScreenId::Home, ScreenId::SignUp]);
        let mut router = Router::default().with_guard(guard);

        assert!(router.try_navigate(ScreenId::SignIn).is_ok());
        assert!(router.try_navigate(ScreenId::SignIn).is_ok());
        let err = router.try_navigate(ScreenId::PaymentMethods).unwrap_err();
        assert!(matches!(
            err,
            AppError::TransitionNotAllowed {
                from: ScreenId::SignIn,
                to: ScreenId::PaymentMethods
            }
        ));
        assert_eq!(router.current(), ScreenId::SignIn);

        // Unguarded navigation stays unconstrained
        router.navigate(ScreenId::PaymentMethods);
        assert_eq!(router.current(), ScreenId::PaymentMethods);
    }

    #[test]
    fn test_guard_applies_to_delayed_navigation() {
        let guard = AdjacencyGuard::new()
            .allow(ScreenId::Splash, ScreenId::SignIn)
            .allow(ScreenId::SignIn, ScreenId::Home);
        let mut router = Router::default().with_guard(guard);

        let rejected = router.schedule(Duration::from_millis(10), ScreenId::PaymentMethods);
        assert!(!router.fire(rejected.ticket));
        assert_eq!(router.current(), ScreenId::Splash);
        assert_eq!(router.pending_count(), 0);

        // The guard is checked against the screen current when the ticket fires
        let later = router.schedule(Duration::from_millis(10), ScreenId::Home);
        assert!(!router.fire(later.ticket));
        assert_eq!(router.current(), ScreenId::Splash);

        router.try_navigate(ScreenId::SignIn).unwrap();
        let allowed = router.schedule(Duration::from_millis(10), ScreenId::Home);
        assert!(router.fire(allowed.ticket));
        assert_eq!(router.current(), ScreenId::Home);
    }

    #[test]
    fn test_router_from_settings() {
        let settings = AppSettings {
            initial_screen: ScreenId::Home,
            payload_retention: PayloadRetention::ClearOnConsume,
            ..AppSettings::default()
        };
        let router = Router::from_settings(&settings);
        assert_eq!(router.current(), ScreenId::Home);
        assert_eq!(router.retention, PayloadRetention::ClearOnConsume);
    }
}
