//! Application state and key handling

use crate::clipboard::ClipboardSink;
use crate::config::TuiConfig;
use crate::handoff::LinkOpener;
use crate::i18n::{Locale, TestimonialRotation, TextKey};
use crate::platform;
use crate::state::{
    cycle_option, AppEvent, Country, Field, Gender, Screen, Step,
    ViewController,
};
use crate::timer::Ticker;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

/// Entries in the side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    Home,
    Profile,
    Help,
    RateUs,
    AboutUs,
    InvitePeople,
    Language,
}

impl SidebarItem {
    pub const ALL: [SidebarItem; 7] = [
        SidebarItem::Home,
        SidebarItem::Profile,
        SidebarItem::Help,
        SidebarItem::RateUs,
        SidebarItem::AboutUs,
        SidebarItem::InvitePeople,
        SidebarItem::Language,
    ];

    pub fn label_key(&self) -> TextKey {
        match self {
            Self::Home => TextKey::Home,
            Self::Profile => TextKey::Profile,
            Self::Help => TextKey::Help,
            Self::RateUs => TextKey::RateUs,
            Self::AboutUs => TextKey::AboutUs,
            Self::InvitePeople => TextKey::InvitePeople,
            Self::Language => TextKey::Language,
        }
    }
}

/// Side panel visibility and cursor
#[derive(Debug, Clone, Copy, Default)]
pub struct SidebarState {
    pub open: bool,
    pub selected: usize,
}

/// Which account button is highlighted (0 = create, 1 = login)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountSelection(pub usize);

/// Main application struct
pub struct App {
    /// Screen and form state
    pub controller: ViewController,
    /// Active display language
    pub locale: Locale,
    pub config: TuiConfig,
    pub sidebar: SidebarState,
    pub account_selection: AccountSelection,
    /// Index of the focused field within the current step
    pub active_field: usize,
    pub rotation: TestimonialRotation,
    /// Non-blocking status line message
    pub notice: Option<String>,
    /// Modal error message, dismissed with Enter or Esc
    pub error_dialog: Option<String>,
    testimonial_ticker: Option<Ticker>,
    events: UnboundedSender<AppEvent>,
    clipboard: Box<dyn ClipboardSink>,
    quit: bool,
}

impl App {
    /// Create a new App instance. Must be called inside a tokio runtime.
    pub fn new(
        config: TuiConfig,
        opener: Box<dyn LinkOpener>,
        clipboard: Box<dyn ClipboardSink>,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        let controller = ViewController::new(config.handoff_settings(), opener, events.clone());
        let mut app = Self {
            controller,
            locale: config.locale(),
            config,
            sidebar: SidebarState::default(),
            account_selection: AccountSelection::default(),
            active_field: 0,
            rotation: TestimonialRotation::default(),
            notice: None,
            error_dialog: None,
            testimonial_ticker: None,
            events,
            clipboard,
            quit: false,
        };
        app.sync_screen_timers();
        app
    }

    /// Translate a key in the active locale
    pub fn t(&self, key: TextKey) -> &'static str {
        self.locale.translate(key)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn screen(&self) -> Screen {
        self.controller.screen()
    }

    #[cfg(test)]
    pub fn is_rotating_testimonials(&self) -> bool {
        self.testimonial_ticker.is_some()
    }

    /// Field under the cursor, if the current step has editable fields
    pub fn focused_field(&self) -> Option<Field> {
        self.controller
            .form()
            .step()
            .fields()
            .get(self.active_field)
            .copied()
    }

    /// Handle a timer event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::HandoffDue => self.controller.on_handoff_due(),
            AppEvent::RotateTestimonial => {
                if self.screen() == Screen::Welcome {
                    self.rotation.advance();
                }
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Error dialog is modal
        if self.error_dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.error_dialog = None;
            }
            return;
        }

        self.notice = None;

        if key.code == KeyCode::Char('y') && key.modifiers.contains(platform::COPY_MODIFIER) {
            self.copy_invite();
            return;
        }

        match key.code {
            KeyCode::F(2) => {
                self.sidebar.open = !self.sidebar.open;
                return;
            }
            KeyCode::F(3) => {
                self.sidebar.open = false;
                self.navigate(Screen::Account);
                return;
            }
            _ => {}
        }

        if self.sidebar.open {
            self.handle_sidebar_key(key);
            return;
        }

        match self.screen() {
            Screen::Welcome => self.handle_welcome_key(key),
            Screen::Account => self.handle_account_key(key),
            Screen::Form => self.handle_form_key(key),
            Screen::Redirect => self.handle_redirect_key(key),
        }
    }

    /// Change screens and start or stop screen-bound timers
    pub fn navigate(&mut self, screen: Screen) {
        if self.screen() == Screen::Form {
            self.blur_field();
        }
        self.controller.go_to(screen);
        if screen == Screen::Form {
            self.active_field = 0;
        }
        self.sync_screen_timers();
    }

    /// Run the testimonial ticker only while the welcome screen is shown
    fn sync_screen_timers(&mut self) {
        let on_welcome = self.screen() == Screen::Welcome;
        match (on_welcome, self.testimonial_ticker.is_some()) {
            (true, false) => {
                self.testimonial_ticker = Some(Ticker::start(
                    self.config.testimonial_interval(),
                    self.events.clone(),
                    AppEvent::RotateTestimonial,
                ));
            }
            (false, true) => {
                if let Some(ticker) = self.testimonial_ticker.take() {
                    ticker.stop();
                }
            }
            _ => {}
        }
    }

    /// Stop every timer owned by the presentation layer
    pub fn shutdown(&mut self) {
        if let Some(ticker) = self.testimonial_ticker.take() {
            ticker.stop();
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        let count = SidebarItem::ALL.len();
        match key.code {
            KeyCode::Esc => self.sidebar.open = false,
            KeyCode::Up | KeyCode::Char('k') => {
                self.sidebar.selected = (self.sidebar.selected + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.sidebar.selected = (self.sidebar.selected + 1) % count;
            }
            KeyCode::Enter => {
                let item = SidebarItem::ALL[self.sidebar.selected.min(count - 1)];
                self.activate_sidebar_item(item);
            }
            _ => {}
        }
    }

    fn activate_sidebar_item(&mut self, item: SidebarItem) {
        match item {
            SidebarItem::Home => {
                self.sidebar.open = false;
                self.navigate(Screen::Welcome);
            }
            SidebarItem::InvitePeople => self.copy_invite(),
            SidebarItem::Language => self.switch_locale(),
            // Informational entries have no screen of their own
            SidebarItem::Profile | SidebarItem::Help | SidebarItem::RateUs | SidebarItem::AboutUs => {}
        }
    }

    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('a') => self.navigate(Screen::Account),
            KeyCode::Char('w') => self.open_contact(),
            KeyCode::Char('l') => self.switch_locale(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_account_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
                self.account_selection.0 = 1 - self.account_selection.0.min(1);
            }
            // Create account and login lead to the same form
            KeyCode::Enter => self.navigate(Screen::Form),
            KeyCode::Esc => self.navigate(Screen::Welcome),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let step = self.controller.form().step();
        let field = self.focused_field();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(step),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(step),
            KeyCode::Enter if step.is_last() => {
                if !self.controller.submit() {
                    tracing::debug!("Submit blocked by validation");
                }
                self.sync_screen_timers();
            }
            KeyCode::Enter => {
                self.blur_field();
                if self.controller.form_mut().advance_step() {
                    self.active_field = 0;
                } else {
                    self.focus_first_error();
                }
            }
            KeyCode::Esc => {
                self.blur_field();
                if step == Step::PersonalInfo {
                    self.navigate(Screen::Account);
                } else {
                    self.controller.form_mut().retreat_step();
                    self.active_field = 0;
                }
            }
            KeyCode::Char(' ') if step.is_last() => {
                let consent = self.controller.form().consent();
                self.controller.form_mut().set_consent(!consent);
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if field.is_some_and(|f| f.is_choice()) =>
            {
                let forward = key.code != KeyCode::Left;
                if let Some(field) = field {
                    self.cycle_choice(field, forward);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = field.filter(|f| !f.is_choice()) {
                    self.input_char(field, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = field.filter(|f| !f.is_choice()) {
                    self.backspace(field);
                }
            }
            _ => {}
        }
    }

    fn handle_redirect_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('o') => self.controller.retry_handoff(),
            KeyCode::Char('s') => {
                self.controller.start_over();
                self.active_field = 0;
                self.sync_screen_timers();
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn focus_next(&mut self, step: Step) {
        let count = step.fields().len();
        if count == 0 {
            return;
        }
        self.blur_field();
        self.active_field = (self.active_field + 1) % count;
    }

    fn focus_prev(&mut self, step: Step) {
        let count = step.fields().len();
        if count == 0 {
            return;
        }
        self.blur_field();
        self.active_field = (self.active_field + count - 1) % count;
    }

    fn focus_first_error(&mut self) {
        let form = self.controller.form();
        if let Some(index) = form
            .step()
            .fields()
            .iter()
            .position(|f| form.error(*f).is_some())
        {
            self.active_field = index;
        }
    }

    /// Reformat the amount when focus leaves it
    fn blur_field(&mut self) {
        if self.focused_field() != Some(Field::Amount) {
            return;
        }
        let form = self.controller.form();
        let raw = form.record().amount.clone();
        if raw.is_empty() {
            return;
        }
        let formatted = form.format_amount(&raw, self.locale.grouping_separator());
        if formatted != raw {
            self.controller.form_mut().update_field(Field::Amount, formatted);
        }
    }

    fn input_char(&mut self, field: Field, c: char) {
        let mut value = self.controller.form().record().value(field).to_string();
        value.push(c);
        match field {
            Field::Amount => {
                let cleaned = strip_grouping(&value, self.locale.grouping_separator());
                if is_amount_input(&cleaned) {
                    self.controller.form_mut().update_field(field, cleaned);
                }
            }
            Field::Age if !c.is_ascii_digit() => {}
            _ => self.controller.form_mut().update_field(field, value),
        }
    }

    fn backspace(&mut self, field: Field) {
        let mut value = self.controller.form().record().value(field).to_string();
        if value.pop().is_none() {
            return;
        }
        if field == Field::Amount {
            value = strip_grouping(&value, self.locale.grouping_separator());
        }
        self.controller.form_mut().update_field(field, value);
    }

    fn cycle_choice(&mut self, field: Field, forward: bool) {
        let record = self.controller.form().record();
        let code = match field {
            Field::Gender => cycle_option(&Gender::ALL, record.gender, forward).map(|g| g.code()),
            Field::Country => {
                cycle_option(&Country::ALL, record.country, forward).map(|c| c.code())
            }
            _ => None,
        };
        if let Some(code) = code {
            self.controller.form_mut().update_field(field, code);
        }
    }

    fn open_contact(&mut self) {
        if let Err(err) = self.controller.open_contact() {
            self.error_dialog = Some(format!("{err}\n\n{}", self.controller.contact_link()));
        }
    }

    fn copy_invite(&mut self) {
        let text = self.t(TextKey::InviteText);
        match self.clipboard.copy_text(text) {
            Ok(()) => self.notice = Some(self.t(TextKey::Copied).to_string()),
            Err(err) => {
                tracing::warn!("Failed to copy invite text: {err}");
                self.notice = Some(self.t(TextKey::CopyFailed).to_string());
            }
        }
    }

    fn switch_locale(&mut self) {
        self.locale = self.locale.next();
        self.config.locale = Some(self.locale);
        if !self.config.save_allowed() {
            tracing::debug!("Language preference not saved, config file is unreadable");
        } else if let Err(err) = self.config.save() {
            tracing::warn!("Failed to save language preference: {err}");
        }
        tracing::info!(locale = self.locale.code(), "Switched language");
    }
}

/// Remove grouping separators from a typed amount
fn strip_grouping(value: &str, separator: char) -> String {
    value.chars().filter(|c| *c != separator).collect()
}

/// Digits with at most one decimal point
fn is_amount_input(value: &str) -> bool {
    let mut seen_dot = false;
    value.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardError, MockClipboardSink};
    use crate::handoff::MockLinkOpener;
    use crate::state::{ErrorCode, ErrorKey, HandoffStatus};
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(
        opener: MockLinkOpener,
        clipboard: MockClipboardSink,
    ) -> (App, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(TuiConfig::default(), Box::new(opener), Box::new(clipboard), tx);
        (app, rx)
    }

    fn test_app() -> (App, UnboundedReceiver<AppEvent>) {
        app_with(MockLinkOpener::new(), MockClipboardSink::new())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn open_form(app: &mut App) {
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::Form);
    }

    fn complete_personal_info(app: &mut App) {
        type_text(app, "Jane Doe");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "0712345678");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "jane@x.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "25");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));
    }

    mod navigation {
        use super::*;

        #[tokio::test]
        async fn test_welcome_to_form() {
            let (mut app, _rx) = test_app();
            assert_eq!(app.screen(), Screen::Welcome);
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.screen(), Screen::Account);
            app.handle_key(key(KeyCode::Down));
            assert_eq!(app.account_selection, AccountSelection(1));
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.screen(), Screen::Form);
        }

        #[tokio::test]
        async fn test_account_shortcut_from_anywhere() {
            let (mut app, _rx) = test_app();
            open_form(&mut app);
            app.handle_key(key(KeyCode::F(3)));
            assert_eq!(app.screen(), Screen::Account);
        }

        #[tokio::test]
        async fn test_esc_on_first_step_returns_to_account() {
            let (mut app, _rx) = test_app();
            open_form(&mut app);
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.screen(), Screen::Account);
        }

        #[tokio::test]
        async fn test_open_contact_failure_shows_dialog() {
            let mut opener = MockLinkOpener::new();
            opener
                .expect_open()
                .times(1)
                .returning(|_| {
                    Err(crate::handoff::HandoffError::Spawn(
                        std::io::ErrorKind::NotFound.into(),
                    ))
                });
            let (mut app, _rx) = app_with(opener, MockClipboardSink::new());

            app.handle_key(key(KeyCode::Char('w')));
            let dialog = app.error_dialog.clone().expect("dialog shown");
            assert!(dialog.contains("https://wa.me/254790777449"));

            // Modal swallows keys until dismissed
            app.handle_key(key(KeyCode::Char('a')));
            assert_eq!(app.screen(), Screen::Welcome);
            app.handle_key(key(KeyCode::Esc));
            assert!(app.error_dialog.is_none());
        }
    }

    mod testimonials {
        use super::*;

        #[tokio::test]
        async fn test_ticker_runs_only_on_welcome() {
            let (mut app, _rx) = test_app();
            assert!(app.is_rotating_testimonials());
            app.handle_key(key(KeyCode::Enter));
            assert!(!app.is_rotating_testimonials());
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.screen(), Screen::Welcome);
            assert!(app.is_rotating_testimonials());
            app.shutdown();
            assert!(!app.is_rotating_testimonials());
        }

        #[tokio::test]
        async fn test_rotation_event_advances_on_welcome_only() {
            let (mut app, _rx) = test_app();
            app.handle_event(AppEvent::RotateTestimonial);
            assert_eq!(app.rotation.index(), 1);

            app.navigate(Screen::Account);
            app.handle_event(AppEvent::RotateTestimonial);
            assert_eq!(app.rotation.index(), 1);
        }

        #[tokio::test(start_paused = true)]
        async fn test_ticker_delivers_rotation_events() {
            let (mut app, mut rx) = test_app();
            let event = rx.recv().await.expect("ticker event");
            assert_eq!(event, AppEvent::RotateTestimonial);
            app.handle_event(event);
            assert_eq!(app.rotation.index(), 1);
        }
    }

    mod form_input {
        use super::*;

        #[tokio::test]
        async fn test_typing_updates_record_and_clears_error() {
            let (mut app, _rx) = test_app();
            open_form(&mut app);
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(
                app.controller.form().error(Field::FullName),
                Some(ErrorCode::Required)
            );

            type_text(&mut app, "Jane");
            assert_eq!(app.controller.form().record().full_name, "Jane");
            assert_eq!(app.controller.form().error(Field::FullName), None);
            assert_eq!(
                app.controller.form().error(Field::Phone),
                Some(ErrorCode::Required)
            );
        }

        #[tokio::test]
        async fn test_failed_advance_focuses_first_error() {
            let (mut app, _rx) = test_app();
            open_form(&mut app);
            type_text(&mut app, "Jane Doe");
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.focused_field(), Some(Field::Phone));
        }

        #[tokio::test]
        async fn test_choice_fields_cycle() {
            let (mut app, _rx) = test_app();
            open_form(&mut app);
            for _ in 0..4 {
                app.handle_key(key(KeyCode::Tab));
            }
            assert_eq!(app.focused_field(), Some(Field::Gender));
            app.handle_key(key(KeyCode::Char('x')));
            assert_eq!(app.controller.form().record().gender, None);
            app.handle_key(key(KeyCode::Left));
            assert_eq!(
                app.controller.form().record().gender,
                Some(Gender::PreferNotToSay)
            );
            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.controller.form().record().gender, Some(Gender::Female));
        }

        #[tokio::test]
        async fn test_age_accepts_digits_only() {
            let (mut app, _rx) = test_app();
            open_form(&mut app);
            for _ in 0..3 {
                app.handle_key(key(KeyCode::Tab));
            }
            type_text(&mut app, "2a5");
            assert_eq!(app.controller.form().record().age, "25");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.controller.form().record().age, "2");
        }

        #[tokio::test]
        async fn test_amount_filters_and_formats_on_blur() {
            let (mut app, _rx) = test_app();
            open_form(&mut app);
            complete_personal_info(&mut app);
            assert_eq!(app.controller.form().step(), Step::FundingDetails);
            assert_eq!(app.focused_field(), Some(Field::Amount));

            type_text(&mut app, "12a345.6.7");
            assert_eq!(app.controller.form().record().amount, "12345.67");

            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.controller.form().record().amount, "12,345.67");
            assert_eq!(app.focused_field(), Some(Field::Purpose));

            app.handle_key(key(KeyCode::BackTab));
            app.handle_key(key(KeyCode::Char('8')));
            assert_eq!(app.controller.form().record().amount, "12345.678");
        }

        #[tokio::test]
        async fn test_esc_retreats_without_validation() {
            let (mut app, _rx) = test_app();
            open_form(&mut app);
            complete_personal_info(&mut app);
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.controller.form().step(), Step::PersonalInfo);
            assert_eq!(app.screen(), Screen::Form);
        }
    }

    mod submit {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn test_full_flow_hands_off_once() {
            let mut opener = MockLinkOpener::new();
            opener
                .expect_open()
                .withf(|url| url.contains("Full%20Name%3A%20Jane%20Doe"))
                .times(1)
                .returning(|_| Ok(()));
            let (mut app, mut rx) = app_with(opener, MockClipboardSink::new());
            open_form(&mut app);
            complete_personal_info(&mut app);
            type_text(&mut app, "5000");
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "Start a water kiosk");
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.controller.form().step(), Step::ReviewConsent);

            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.screen(), Screen::Form);
            assert_eq!(
                app.controller.form().error(ErrorKey::Consent),
                Some(ErrorCode::Consent)
            );

            app.handle_key(key(KeyCode::Char(' ')));
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.screen(), Screen::Redirect);

            loop {
                let event = rx.recv().await.expect("event");
                if event == AppEvent::HandoffDue {
                    app.handle_event(event);
                    break;
                }
            }
            assert_eq!(app.controller.handoff_status(), &HandoffStatus::Opened);
        }

        #[tokio::test]
        async fn test_start_over_returns_to_clean_welcome() {
            let (mut app, _rx) = test_app();
            open_form(&mut app);
            type_text(&mut app, "Jane Doe");
            app.navigate(Screen::Redirect);
            app.handle_key(key(KeyCode::Char('s')));
            assert_eq!(app.screen(), Screen::Welcome);
            assert!(app.controller.form().record().is_empty());
            assert!(app.is_rotating_testimonials());
        }
    }

    mod sidebar {
        use super::*;

        #[tokio::test]
        async fn test_language_switch_leaves_unreadable_config_alone() {
            let (tx, _rx) = mpsc::unbounded_channel();
            let mut app = App::new(
                TuiConfig::unreadable(),
                Box::new(MockLinkOpener::new()),
                Box::new(MockClipboardSink::new()),
                tx,
            );

            app.handle_key(key(KeyCode::Char('l')));

            assert_eq!(app.locale, Locale::Swahili);
            assert_eq!(app.config.locale, Some(Locale::Swahili));
            assert!(!app.config.save_allowed());
        }

        #[tokio::test]
        async fn test_invite_copies_localized_text() {
            let mut clipboard = MockClipboardSink::new();
            clipboard
                .expect_copy_text()
                .withf(|text| text.starts_with("Join AFRICAN DEV'T FUNDS"))
                .times(1)
                .returning(|_| Ok(()));
            let (mut app, _rx) = app_with(MockLinkOpener::new(), clipboard);

            app.handle_key(key(KeyCode::F(2)));
            assert!(app.sidebar.open);
            for _ in 0..5 {
                app.handle_key(key(KeyCode::Down));
            }
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.notice.as_deref(), Some("Copied to clipboard!"));
        }

        #[tokio::test]
        async fn test_clipboard_failure_is_non_fatal() {
            let mut clipboard = MockClipboardSink::new();
            clipboard
                .expect_copy_text()
                .times(1)
                .returning(|_| Err(ClipboardError::from(arboard::Error::ClipboardNotSupported)));
            let (mut app, _rx) = app_with(MockLinkOpener::new(), clipboard);

            app.handle_key(KeyEvent::new(KeyCode::Char('y'), platform::COPY_MODIFIER));
            assert_eq!(app.notice.as_deref(), Some("Could not access the clipboard"));
            assert_eq!(app.screen(), Screen::Welcome);
        }

        #[tokio::test]
        async fn test_home_returns_to_welcome() {
            let (mut app, _rx) = test_app();
            open_form(&mut app);
            app.handle_key(key(KeyCode::F(2)));
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.screen(), Screen::Welcome);
            assert!(!app.sidebar.open);
            assert!(app.is_rotating_testimonials());
        }

        #[tokio::test]
        async fn test_sidebar_wraps_selection() {
            let (mut app, _rx) = test_app();
            app.handle_key(key(KeyCode::F(2)));
            app.handle_key(key(KeyCode::Up));
            assert_eq!(app.sidebar.selected, SidebarItem::ALL.len() - 1);
            app.handle_key(key(KeyCode::Esc));
            assert!(!app.sidebar.open);
        }
    }

    mod helpers {
        use super::*;

        #[test]
        fn test_is_amount_input() {
            assert!(is_amount_input(""));
            assert!(is_amount_input("123.45"));
            assert!(is_amount_input(".5"));
            assert!(!is_amount_input("1.2.3"));
            assert!(!is_amount_input("12a"));
        }
    }
}
