// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - End-to-end navigation flows

use shiplink_core::forms::signup::SignUpFlow;
use shiplink_core::sample::{self, AVAILABLE_TRAVELERS, FEATURED_TRAVELERS};
use shiplink_core::{
    search, AdjacencyGuard, AppSettings, NavigationIntent, PayloadRetention, Router, ScreenId,
    ScreenProps, SettingsStore,
};
use std::time::Duration;

#[test]
fn test_splash_to_home() {
    let mut router = Router::default();
    assert_eq!(router.current(), ScreenId::Splash);

    router.navigate(ScreenId::SignIn);
    router.navigate(ScreenId::Home);
    assert_eq!(router.resolve(), ScreenProps::Static(ScreenId::Home));
}

#[test]
fn test_signup_flow_lands_on_home() {
    let mut router = Router::default();
    router.navigate(ScreenId::SignUp);

    let mut flow = SignUpFlow::default();
    while flow.step() < 4 {
        flow.next();
    }
    router.navigate(flow.complete());
    assert_eq!(router.current(), ScreenId::Home);
}

#[test]
fn test_traveler_profile_then_chat() {
    let mut router = Router::default();
    let traveler = &FEATURED_TRAVELERS[0];

    router.navigate(NavigationIntent::to(ScreenId::ViewUserProfile).profile(traveler.to_profile()));
    let props = router.resolve();
    assert_eq!(props.profile_or_default().name, traveler.traveler.name);

    let profile = props.profile_or_default();
    router.navigate(
        NavigationIntent::to(ScreenId::Chat)
            .recipient(profile.to_chat_recipient())
            .profile(profile.clone()),
    );
    let chat = router.resolve();
    assert_eq!(chat.recipient_or_default().name, traveler.traveler.name);
    assert_eq!(chat.profile_or_default(), profile);
}

#[test]
fn test_chat_without_payload_uses_default_recipient() {
    let mut router = Router::default();
    router.navigate(ScreenId::Chat);
    assert_eq!(
        router.resolve().recipient_or_default(),
        sample::default_chat_recipient()
    );
}

#[test]
fn test_recipient_carries_over_under_retain() {
    let mut router = Router::default();
    let traveler = &AVAILABLE_TRAVELERS[1];
    router.navigate(NavigationIntent::to(ScreenId::Chat).recipient(traveler.to_chat_recipient()));
    router.navigate(ScreenId::Home);
    router.navigate(ScreenId::Chat);
    assert_eq!(router.resolve().recipient_or_default().name, traveler.name);
}

#[test]
fn test_clear_on_consume_from_settings() {
    let settings = AppSettings {
        payload_retention: PayloadRetention::ClearOnConsume,
        ..AppSettings::default()
    };
    let mut router = Router::from_settings(&settings);
    router.navigate(NavigationIntent::to(ScreenId::SearchResults).search("Berlin"));

    assert_eq!(router.resolve_and_consume().query(), "Berlin");
    assert_eq!(router.resolve().query(), "");
}

#[test]
fn test_search_from_home() {
    let mut router = Router::new(ScreenId::Home);
    router.navigate(NavigationIntent::to(ScreenId::SearchResults).search("Berlin"));

    let results = search(router.resolve().query());
    assert_eq!(results.travelers.len(), 1);
    assert_eq!(results.travelers[0].name, "Emma Schmidt");
    assert_eq!(results.parcels.len(), 1);
    assert_eq!(results.parcels[0].title, "Electronics Package");
}

#[test]
fn test_guarded_router_rejects_unknown_edges() {
    let guard = AdjacencyGuard::new()
        .allow(ScreenId::Splash, ScreenId::SignIn)
        .allow(ScreenId::SignIn, ScreenId::Home);
    let mut router = Router::default().with_guard(guard);

    assert!(router.try_navigate(ScreenId::SignIn).is_ok());
    assert!(router.try_navigate(ScreenId::Profile).is_err());
    assert_eq!(router.current(), ScreenId::SignIn);
    assert!(router.try_navigate(ScreenId::Home).is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_leaving_edit_profile_cancels_redirect() {
    let mut router = Router::new(ScreenId::EditProfile);
    let scheduled = router.schedule(Duration::from_millis(1500), ScreenId::Profile);

    router.navigate(ScreenId::Home);
    let ticket = scheduled.elapsed().await;

    assert!(!router.fire(ticket));
    assert_eq!(router.current(), ScreenId::Home);
}

#[tokio::test(start_paused = true)]
async fn test_redirect_fires_after_delay() {
    let mut router = Router::new(ScreenId::EditProfile);
    let scheduled = router.schedule(Duration::from_millis(1500), ScreenId::Profile);

    let ticket = scheduled.elapsed().await;
    assert!(router.fire(ticket));
    assert_eq!(router.current(), ScreenId::Profile);
}

#[test]
fn test_initial_screen_from_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"initialScreen":"home"}"#).unwrap();

    let store = SettingsStore::at(&path).unwrap();
    let router = Router::from_settings(&store.get());
    assert_eq!(router.current(), ScreenId::Home);
}
