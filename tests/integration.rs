// SPDX-License-Identifier: MPL-2.0
use async_trait::async_trait;
use portfolio_telemetry::application::port::{
    AnalyticsError, AnalyticsSink, ContactApi, ContactError, ContactReceipt,
};
use portfolio_telemetry::config::{self, Config, CONTACT_FALLBACK_MESSAGE};
use portfolio_telemetry::contact::ContactForm;
use portfolio_telemetry::domain::analytics::SectionViewEvent;
use portfolio_telemetry::domain::contact::{ContactFields, Field, SubmissionPhase};
use portfolio_telemetry::engagement::{EngagementTracker, SectionFocus};
use portfolio_telemetry::notifications::{NotificationController, ToastKind, ToastPhase};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;
use tokio::time::advance;

#[derive(Default)]
struct Views(Mutex<Vec<SectionViewEvent>>);

#[async_trait]
impl AnalyticsSink for Views {
    async fn record_event(&self, event: &SectionViewEvent) -> Result<(), AnalyticsError> {
        self.0.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Fails the first submission, accepts the rest.
#[derive(Default)]
struct FlakyContact(Mutex<usize>);

#[async_trait]
impl ContactApi for FlakyContact {
    async fn submit_contact_message(
        &self,
        _fields: &ContactFields,
    ) -> Result<ContactReceipt, ContactError> {
        tokio::time::sleep(Duration::from_millis(150)).await;
        let mut calls = self.0.lock().unwrap();
        *calls += 1;
        if *calls == 1 {
            Err(ContactError::TransportFailure("connection reset".into()))
        } else {
            Ok(ContactReceipt {
                message: "Message received".into(),
                id: None,
            })
        }
    }
}

async fn step(ms: u64) {
    advance(Duration::from_millis(ms)).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[test]
fn config_file_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("settings.toml");

    let config = Config {
        backend_url: "https://api.example.com".to_string(),
        section_dwell_ms: 1500,
        toast_duration_ms: 3000,
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.endpoints().unwrap().contact().as_str(),
        "https://api.example.com/api/contact"
    );
}

#[tokio::test(start_paused = true)]
async fn configured_timings_drive_tracking_and_toasts() {
    let config = Config {
        section_dwell_ms: 2000,
        toast_duration_ms: 2000,
        toast_fade_ms: 100,
        ..Config::default()
    };
    let views = Arc::new(Views::default());
    let tracker = EngagementTracker::from_config(views.clone(), &config);
    let toasts = NotificationController::spawn(config.toast_duration(), config.toast_fade());

    let _observation = tracker.observe_section("experience");
    toasts.handle().success("Saved");
    step(1999).await;
    assert!(views.0.lock().unwrap().is_empty());
    assert_eq!(toasts.snapshot().phase, ToastPhase::Showing);

    step(1).await;
    assert_eq!(views.0.lock().unwrap().len(), 1);
    assert_eq!(views.0.lock().unwrap()[0].client_context, config.user_agent);
    assert_eq!(toasts.snapshot().phase, ToastPhase::Hiding);

    step(100).await;
    assert_eq!(toasts.snapshot().phase, ToastPhase::Hidden);
}

#[tokio::test(start_paused = true)]
async fn visitor_session() {
    let config = Config::default();
    let views = Arc::new(Views::default());
    let toasts = NotificationController::spawn(config.toast_duration(), config.toast_fade());
    let mut focus = SectionFocus::new(EngagementTracker::from_config(views.clone(), &config));
    let form = ContactForm::new(Arc::new(FlakyContact::default()), toasts.handle());

    // Scroll past the hero, settle on contact.
    focus.focus("hero");
    step(400).await;
    focus.focus("contact");
    step(1000).await;

    for (field, value) in [
        (Field::Name, "Ada"),
        (Field::Email, "ada@example.com"),
        (Field::Subject, "Hello"),
        (Field::Message, "Nice site"),
    ] {
        form.set_field(field, value);
    }
    assert!(form.fields().missing().is_empty());

    // First attempt fails and keeps the input.
    form.submit_current().await.unwrap_err();
    step(0).await;
    assert_eq!(form.phase(), SubmissionPhase::Failed);
    assert_eq!(form.fields().name, "Ada");
    let snapshot = toasts.snapshot();
    assert_eq!(snapshot.message(), Some(CONTACT_FALLBACK_MESSAGE));
    assert_eq!(snapshot.kind(), Some(ToastKind::Error));

    // Retry replaces the error toast with the confirmation.
    form.submit_current().await.unwrap();
    step(0).await;
    assert_eq!(form.phase(), SubmissionPhase::Succeeded);
    assert_eq!(form.fields(), ContactFields::default());
    let snapshot = toasts.snapshot();
    assert_eq!(snapshot.message(), Some("Message received"));
    assert_eq!(snapshot.kind(), Some(ToastKind::Success));

    let sections: Vec<String> = views
        .0
        .lock()
        .unwrap()
        .iter()
        .map(|e| e.section.to_string())
        .collect();
    assert_eq!(sections, vec!["contact"]);
}
