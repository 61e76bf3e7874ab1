// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Application

use crate::config::CosmicConfig;
use crate::message::Message;
use crate::pages;
use cosmic::app::{Core, Task};
use cosmic::iced::{alignment, Length};
use cosmic::{executor, theme, Action, Application, Element};
use shiplink_core::{Router, ScreenId, ScreenProps};

pub struct Flags {
    pub config: CosmicConfig,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            config: CosmicConfig::default(),
        }
    }
}

pub struct App {
    core: Core,
    router: Router,
    props: ScreenProps,

    // Page states, recreated every time their screen is entered
    sign_in_page: pages::sign_in::SignInPage,
    sign_up_page: pages::sign_up::SignUpPage,
    home_page: pages::home::HomePage,
    create_request_page: pages::create_request::CreateRequestPage,
    chat_page: pages::chat::ChatPage,
    confirm_delivery_page: pages::confirm_delivery::ConfirmDeliveryPage,
    all_requests_page: pages::all_requests::AllRequestsPage,
    rate_peer_page: pages::rate_peer::RatePeerPage,
    edit_profile_page: pages::edit_profile::EditProfilePage,
    notification_settings_page: pages::notification_settings::NotificationSettingsPage,
    privacy_security_page: pages::privacy_security::PrivacySecurityPage,
    payment_methods_page: pages::payment_methods::PaymentMethodsPage,
    help_support_page: pages::help_support::HelpSupportPage,

    // Settings
    config: CosmicConfig,
}

impl Application for App {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = crate::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Self::Message>) {
        let config = flags.config;
        let mut router = Router::from_settings(&config.settings);
        let props = router.resolve_and_consume();
        tracing::info!("Initial screen: {}", props.screen());

        let app = App {
            core,
            router,
            props,
            sign_in_page: pages::sign_in::SignInPage::new(),
            sign_up_page: pages::sign_up::SignUpPage::new(config.capture_delay()),
            home_page: pages::home::HomePage::new(),
            create_request_page: pages::create_request::CreateRequestPage::new(),
            chat_page: pages::chat::ChatPage::new(),
            confirm_delivery_page: pages::confirm_delivery::ConfirmDeliveryPage::new(),
            all_requests_page: pages::all_requests::AllRequestsPage::new(),
            rate_peer_page: pages::rate_peer::RatePeerPage::new(),
            edit_profile_page: pages::edit_profile::EditProfilePage::new(
                config.save_redirect_delay(),
            ),
            notification_settings_page:
                pages::notification_settings::NotificationSettingsPage::new(),
            privacy_security_page: pages::privacy_security::PrivacySecurityPage::new(
                config.password_notice_delay(),
            ),
            payment_methods_page: pages::payment_methods::PaymentMethodsPage::new(
                config.card_notice_delay(),
            ),
            help_support_page: pages::help_support::HelpSupportPage::new(),
            config,
        };

        (app, Task::none())
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let content: Element<Message> = match self.props.screen() {
            ScreenId::Splash => pages::splash::view(),
            ScreenId::SignIn => self.sign_in_page.view(),
            ScreenId::SignUp => self.sign_up_page.view(),
            ScreenId::Home => self.home_page.view(),
            ScreenId::CreateRequest => self.create_request_page.view(),
            ScreenId::RequestDetails => pages::request_details::view(),
            ScreenId::Chat => {
                let profile = match &self.props {
                    ScreenProps::Chat { profile, .. } => profile.clone(),
                    _ => None,
                };
                self.chat_page
                    .view(self.props.recipient_or_default(), profile)
            }
            ScreenId::ConfirmDelivery => self.confirm_delivery_page.view(),
            ScreenId::Notifications => pages::notifications::view(),
            ScreenId::Profile => pages::profile::view(),
            ScreenId::AcceptedParcels => pages::accepted_parcels::view(),
            ScreenId::AvailableTravelers => pages::available_travelers::view(),
            ScreenId::AllRequests => self.all_requests_page.view(),
            ScreenId::RequestAccepted => {
                pages::request_accepted::view(self.props.request_or_default())
            }
            ScreenId::HandoverQr => pages::handover_qr::view(),
            ScreenId::SearchResults => pages::search_results::view(self.props.query()),
            ScreenId::RatePeer => self.rate_peer_page.view(),
            ScreenId::ViewUserProfile => {
                pages::view_profile::view(self.props.profile_or_default())
            }
            ScreenId::EditProfile => self.edit_profile_page.view(),
            ScreenId::NotificationSettings => self.notification_settings_page.view(),
            ScreenId::PrivacySecurity => self.privacy_security_page.view(),
            ScreenId::PaymentMethods => self.payment_methods_page.view(),
            ScreenId::HelpSupport => self.help_support_page.view(),
            ScreenId::About => pages::about::view(),
        };

        // Fixed-size phone frame centered in the window
        let (frame_width, frame_height) = self.config.frame_size();
        let frame = cosmic::widget::container(content)
            .width(Length::Fixed(frame_width))
            .height(Length::Fixed(frame_height))
            .class(theme::Container::Card);

        cosmic::widget::container(frame)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        match message {
            Message::Navigate(intent) => {
                if self.router.try_navigate(intent).is_ok() {
                    self.enter();
                }
                Task::none()
            }
            Message::NavigateAfter(delay, intent) => {
                let scheduled = self.router.schedule(delay, intent);
                cosmic::task::future(async move { Message::DelayElapsed(scheduled.elapsed().await) })
            }
            Message::DelayElapsed(ticket) => {
                if self.router.fire(ticket) {
                    self.enter();
                }
                Task::none()
            }
            Message::SignIn(msg) => self.sign_in_page.update(msg).map(Action::from),
            Message::SignUp(msg) => self.sign_up_page.update(msg).map(Action::from),
            Message::Home(msg) => self.home_page.update(msg).map(Action::from),
            Message::CreateRequest(msg) => {
                self.create_request_page.update(msg).map(Action::from)
            }
            Message::Chat(msg) => self.chat_page.update(msg).map(Action::from),
            Message::ConfirmDelivery(msg) => {
                self.confirm_delivery_page.update(msg).map(Action::from)
            }
            Message::AllRequests(msg) => self.all_requests_page.update(msg).map(Action::from),
            Message::RatePeer(msg) => self.rate_peer_page.update(msg).map(Action::from),
            Message::EditProfile(msg) => self.edit_profile_page.update(msg).map(Action::from),
            Message::NotificationSettings(msg) => self
                .notification_settings_page
                .update(msg)
                .map(Action::from),
            Message::PrivacySecurity(msg) => {
                self.privacy_security_page.update(msg).map(Action::from)
            }
            Message::PaymentMethods(msg) => {
                self.payment_methods_page.update(msg).map(Action::from)
            }
            Message::HelpSupport(msg) => self.help_support_page.update(msg).map(Action::from),
            Message::About(msg) => pages::about::update(msg).map(Action::from),
        }
    }
}

impl App {
    /// Render the router's current screen with fresh local state
    fn enter(&mut self) {
        self.props = self.router.resolve_and_consume();
        let screen = self.props.screen();
        tracing::info!("Showing {}", screen.title());

        match screen {
            ScreenId::SignIn => self.sign_in_page = pages::sign_in::SignInPage::new(),
            ScreenId::SignUp => {
                self.sign_up_page = pages::sign_up::SignUpPage::new(self.config.capture_delay())
            }
            ScreenId::Home => self.home_page = pages::home::HomePage::new(),
            ScreenId::CreateRequest => {
                self.create_request_page = pages::create_request::CreateRequestPage::new()
            }
            ScreenId::Chat => self.chat_page = pages::chat::ChatPage::new(),
            ScreenId::ConfirmDelivery => {
                self.confirm_delivery_page = pages::confirm_delivery::ConfirmDeliveryPage::new()
            }
            ScreenId::AllRequests => {
                self.all_requests_page = pages::all_requests::AllRequestsPage::new()
            }
            ScreenId::RatePeer => self.rate_peer_page = pages::rate_peer::RatePeerPage::new(),
            ScreenId::EditProfile => {
                self.edit_profile_page =
                    pages::edit_profile::EditProfilePage::new(self.config.save_redirect_delay())
            }
            ScreenId::NotificationSettings => {
                self.notification_settings_page =
                    pages::notification_settings::NotificationSettingsPage::new()
            }
            ScreenId::PrivacySecurity => {
                self.privacy_security_page = pages::privacy_security::PrivacySecurityPage::new(
                    self.config.password_notice_delay(),
                )
            }
            ScreenId::PaymentMethods => {
                self.payment_methods_page = pages::payment_methods::PaymentMethodsPage::new(
                    self.config.card_notice_delay(),
                )
            }
            ScreenId::HelpSupport => {
                self.help_support_page = pages::help_support::HelpSupportPage::new()
            }
            _ => {}
        }
    }
}
