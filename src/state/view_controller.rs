//! Screen navigation, submission and the delayed messaging handoff

use super::app_state::{AppEvent, HandoffStatus, Screen};
use super::forms::FormEngine;
use crate::handoff::{DeepLink, HandoffError, LinkOpener};
use crate::timer::{self, TaskHandle};
use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

/// Handoff parameters taken from configuration
#[derive(Debug, Clone)]
pub struct HandoffSettings {
    /// Contact handle the deep link points at
    pub contact_number: String,
    /// Pause between submit and opening the link
    pub delay: Duration,
}

/// Owns the visible screen and drives the form engine through submission
pub struct ViewController {
    screen: Screen,
    form: FormEngine,
    settings: HandoffSettings,
    opener: Box<dyn LinkOpener>,
    events: UnboundedSender<AppEvent>,
    pending_handoff: Option<TaskHandle>,
    handoff: HandoffStatus,
    session_id: Uuid,
    submitted_at: Option<DateTime<Local>>,
}

impl ViewController {
    pub fn new(
        settings: HandoffSettings,
        opener: Box<dyn LinkOpener>,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            screen: Screen::default(),
            form: FormEngine::new(),
            settings,
            opener,
            events,
            pending_handoff: None,
            handoff: HandoffStatus::Idle,
            session_id: Uuid::new_v4(),
            submitted_at: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn form(&self) -> &FormEngine {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormEngine {
        &mut self.form
    }

    pub fn handoff_status(&self) -> &HandoffStatus {
        &self.handoff
    }

    #[cfg(test)]
    pub fn has_pending_handoff(&self) -> bool {
        self.pending_handoff.is_some()
    }

    pub fn submitted_at(&self) -> Option<DateTime<Local>> {
        self.submitted_at
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Bare link to the messaging contact, without a message body
    pub fn contact_link(&self) -> String {
        DeepLink::new(&self.settings.contact_number).url()
    }

    /// Switch screens without validation. Leaving the redirect screen
    /// cancels a handoff that has not fired yet.
    pub fn go_to(&mut self, screen: Screen) {
        if self.screen == Screen::Redirect && screen != Screen::Redirect {
            self.cancel_pending_handoff();
        }
        tracing::debug!(from = self.screen.label(), to = screen.label(), "Screen change");
        self.screen = screen;
    }

    /// Validate the review step and, with consent given, move to the
    /// redirect screen and schedule the handoff. Returns false and stays on
    /// the form otherwise; the engine's errors explain why.
    pub fn submit(&mut self) -> bool {
        if self.screen != Screen::Form {
            return false;
        }
        let valid = self.form.validate_current_step();
        if !valid || !self.form.consent() || !self.form.step().is_last() {
            tracing::debug!(step = self.form.step().number(), "Submit rejected");
            return false;
        }

        self.screen = Screen::Redirect;
        self.submitted_at = Some(Local::now());
        self.handoff = HandoffStatus::Scheduled;
        self.pending_handoff = Some(timer::schedule_once(
            self.settings.delay,
            self.events.clone(),
            AppEvent::HandoffDue,
        ));
        tracing::info!(
            session = %self.session_id,
            delay_ms = self.settings.delay.as_millis() as u64,
            "Application submitted, handoff scheduled"
        );
        true
    }

    /// Called when the scheduled handoff fires. Stale or cancelled
    /// deliveries are ignored.
    pub fn on_handoff_due(&mut self) {
        if self.handoff != HandoffStatus::Scheduled {
            tracing::debug!("Ignoring handoff event with nothing scheduled");
            return;
        }
        self.pending_handoff = None;
        self.open_handoff();
    }

    /// Manually reopen the prefilled link from the redirect screen. The
    /// record was validated at submit and is not checked again.
    pub fn retry_handoff(&mut self) {
        if self.screen != Screen::Redirect {
            return;
        }
        self.cancel_pending_handoff();
        self.open_handoff();
    }

    /// Open a plain chat with the messaging contact
    pub fn open_contact(&self) -> Result<(), HandoffError> {
        let link = self.contact_link();
        self.opener.open(&link).inspect_err(|err| {
            tracing::warn!("Failed to open contact link: {err}");
        })
    }

    /// Discard the application and return to the welcome screen
    pub fn start_over(&mut self) {
        self.cancel_pending_handoff();
        self.form.reset();
        self.handoff = HandoffStatus::Idle;
        self.submitted_at = None;
        self.session_id = Uuid::new_v4();
        self.go_to(Screen::Welcome);
    }

    fn open_handoff(&mut self) {
        let message = self.form.generate_message();
        let link = DeepLink::with_message(&self.settings.contact_number, message).url();
        match self.opener.open(&link) {
            Ok(()) => {
                tracing::info!(session = %self.session_id, "Opened messaging handoff");
                self.handoff = HandoffStatus::Opened;
            }
            Err(err) => {
                tracing::warn!(session = %self.session_id, "Messaging handoff failed: {err}");
                self.handoff = HandoffStatus::Failed { link };
            }
        }
    }

    fn cancel_pending_handoff(&mut self) {
        if let Some(handle) = self.pending_handoff.take() {
            handle.cancel();
            tracing::debug!(session = %self.session_id, "Cancelled pending handoff");
        }
        if self.handoff == HandoffStatus::Scheduled {
            self.handoff = HandoffStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handoff::{MockLinkOpener, SystemOpener};
    use std::io;
    use crate::state::forms::{ErrorCode, ErrorKey, Field, Step};
    use tokio::sync::mpsc::{self, UnboundedReceiver};
    use tokio::time;

    const DELAY: Duration = Duration::from_millis(2500);

    fn controller_with(opener: MockLinkOpener) -> (ViewController, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let settings = HandoffSettings {
            contact_number: "254790777449".to_string(),
            delay: DELAY,
        };
        (ViewController::new(settings, Box::new(opener), tx), rx)
    }

    fn idle_opener() -> MockLinkOpener {
        let mut opener = MockLinkOpener::new();
        opener.expect_open().never();
        opener
    }

    /// Fill every step and stop on the review step without consent
    fn fill_to_review(controller: &mut ViewController) {
        controller.go_to(Screen::Form);
        let form = controller.form_mut();
        form.update_field(Field::FullName, "Jane Doe");
        form.update_field(Field::Phone, "+254 712 345 678");
        form.update_field(Field::Email, "jane@x.com");
        form.update_field(Field::Age, "25");
        form.update_field(Field::Gender, "female");
        form.update_field(Field::Country, "KE");
        assert!(form.advance_step());
        form.update_field(Field::Amount, "5,000");
        form.update_field(Field::Purpose, "Start a water kiosk in Kisumu");
        assert!(form.advance_step());
        assert_eq!(form.step(), Step::ReviewConsent);
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_starts_on_welcome() {
            let (controller, _rx) = controller_with(idle_opener());
            assert_eq!(controller.screen(), Screen::Welcome);
            assert_eq!(controller.handoff_status(), &HandoffStatus::Idle);
        }

        #[test]
        fn test_go_to_is_unconditional() {
            let (mut controller, _rx) = controller_with(idle_opener());
            controller.go_to(Screen::Account);
            assert_eq!(controller.screen(), Screen::Account);
            controller.go_to(Screen::Form);
            assert_eq!(controller.screen(), Screen::Form);
            controller.go_to(Screen::Welcome);
            assert_eq!(controller.screen(), Screen::Welcome);
        }

        #[test]
        fn test_contact_link_has_no_body() {
            let (controller, _rx) = controller_with(idle_opener());
            assert_eq!(controller.contact_link(), "https://wa.me/254790777449");
        }

        #[test]
        fn test_open_contact_reports_failure() {
            let mut opener = MockLinkOpener::new();
            opener
                .expect_open()
                .withf(|url| url == "https://wa.me/254790777449")
                .times(1)
                .returning(|_| Err(HandoffError::Spawn(io::ErrorKind::NotFound.into())));
            let (controller, _rx) = controller_with(opener);
            assert!(controller.open_contact().is_err());
        }
    }

    mod submit {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn test_requires_consent_then_transitions_once() {
            let (mut controller, _rx) = controller_with(idle_opener());
            fill_to_review(&mut controller);

            assert!(!controller.submit());
            assert_eq!(controller.screen(), Screen::Form);
            assert_eq!(
                controller.form().error(ErrorKey::Consent),
                Some(ErrorCode::Consent)
            );

            controller.form_mut().set_consent(true);
            assert!(controller.submit());
            assert_eq!(controller.screen(), Screen::Redirect);
            assert_eq!(controller.handoff_status(), &HandoffStatus::Scheduled);
            assert!(controller.submitted_at().is_some());

            assert!(!controller.submit());
            assert_eq!(controller.screen(), Screen::Redirect);
        }

        #[tokio::test(start_paused = true)]
        async fn test_rejected_before_review_step() {
            let (mut controller, _rx) = controller_with(idle_opener());
            controller.go_to(Screen::Form);
            controller.form_mut().set_consent(true);

            assert!(!controller.submit());
            assert_eq!(controller.screen(), Screen::Form);
            assert_eq!(controller.form().error(Field::FullName), Some(ErrorCode::Required));
        }

        #[test]
        fn test_ignored_outside_form_screen() {
            let (mut controller, _rx) = controller_with(idle_opener());
            assert!(!controller.submit());
            assert_eq!(controller.screen(), Screen::Welcome);
            assert!(controller.form().errors().is_empty());
        }
    }

    mod handoff {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn test_fires_once_after_delay() {
            let mut opener = MockLinkOpener::new();
            opener
                .expect_open()
                .withf(|url| {
                    url.starts_with("https://wa.me/254790777449?text=Hello!")
                        && url.contains("254712345678")
                        && url.contains("%245000")
                })
                .times(1)
                .returning(|_| Ok(()));
            let (mut controller, mut rx) = controller_with(opener);
            fill_to_review(&mut controller);
            controller.form_mut().set_consent(true);
            assert!(controller.submit());
            tokio::task::yield_now().await;

            time::advance(DELAY - Duration::from_millis(1)).await;
            assert!(rx.try_recv().is_err());

            time::advance(Duration::from_millis(1)).await;
            assert_eq!(rx.recv().await, Some(AppEvent::HandoffDue));
            controller.on_handoff_due();
            assert_eq!(controller.handoff_status(), &HandoffStatus::Opened);
            assert!(!controller.has_pending_handoff());

            // A duplicate delivery does nothing
            controller.on_handoff_due();
        }

        #[tokio::test(start_paused = true)]
        async fn test_failure_keeps_link_for_retry() {
            let mut opener = MockLinkOpener::new();
            let mut calls = 0;
            opener.expect_open().times(2).returning(move |_| {
                calls += 1;
                if calls == 1 {
                    Err(HandoffError::Spawn(io::ErrorKind::NotFound.into()))
                } else {
                    Ok(())
                }
            });
            let (mut controller, _rx) = controller_with(opener);
            fill_to_review(&mut controller);
            controller.form_mut().set_consent(true);
            assert!(controller.submit());

            controller.on_handoff_due();
            let link = controller
                .handoff_status()
                .failed_link()
                .map(str::to_string)
                .expect("link kept after failure");
            assert!(link.starts_with("https://wa.me/254790777449?text="));
            assert_eq!(controller.screen(), Screen::Redirect);

            controller.retry_handoff();
            assert_eq!(controller.handoff_status(), &HandoffStatus::Opened);
        }

        #[tokio::test(start_paused = true)]
        async fn test_leaving_redirect_cancels_pending() {
            let (mut controller, mut rx) = controller_with(idle_opener());
            fill_to_review(&mut controller);
            controller.form_mut().set_consent(true);
            assert!(controller.submit());

            controller.go_to(Screen::Account);
            assert!(!controller.has_pending_handoff());
            assert_eq!(controller.handoff_status(), &HandoffStatus::Idle);

            time::advance(DELAY * 2).await;
            assert!(rx.try_recv().is_err());

            // A late event is ignored as well
            controller.on_handoff_due();
        }

        #[tokio::test(start_paused = true)]
        async fn test_start_over_resets_everything() {
            let (mut controller, _rx) = controller_with(idle_opener());
            fill_to_review(&mut controller);
            controller.form_mut().set_consent(true);
            assert!(controller.submit());
            let first_session = controller.session_id();

            controller.start_over();

            assert_eq!(controller.screen(), Screen::Welcome);
            assert!(!controller.has_pending_handoff());
            assert_eq!(controller.handoff_status(), &HandoffStatus::Idle);
            assert!(controller.form().record().is_empty());
            assert_eq!(controller.form().step(), Step::PersonalInfo);
            assert!(!controller.form().consent());
            assert!(controller.submitted_at().is_none());
            assert_ne!(controller.session_id(), first_session);
        }

        #[cfg(unix)]
        #[tokio::test]
        async fn test_due_handoff_does_not_wait_for_handler() {
            let (tx, _rx) = mpsc::unbounded_channel();
            let settings = HandoffSettings {
                contact_number: "254790777449".to_string(),
                delay: DELAY,
            };
            // Handler that keeps running for three seconds
            let opener = SystemOpener::with_command("sh", &["-c", "sleep 3", "sh"]);
            let mut controller = ViewController::new(settings, Box::new(opener), tx);
            fill_to_review(&mut controller);
            controller.form_mut().set_consent(true);
            assert!(controller.submit());

            let started = std::time::Instant::now();
            controller.on_handoff_due();
            assert!(started.elapsed() < Duration::from_secs(1));
            assert_eq!(controller.handoff_status(), &HandoffStatus::Opened);
        }

        #[test]
        fn test_retry_ignored_off_redirect() {
            let (mut controller, _rx) = controller_with(idle_opener());
            controller.retry_handoff();
            assert_eq!(controller.handoff_status(), &HandoffStatus::Idle);
        }
    }
}
