//! End-to-end request flows over the in-memory fakes.

use politely::testing::{
    FakeCalendar, FakeCamera, FakeNotifications, FakePhotoLibrary, Fakes, RecordingFailureHandler,
    ScriptedPreconsent,
};
use politely::{
    AccessStatus, Capability, EntityKind, NotificationOptions, NotificationSettings,
    NotificationStatus, OptionSetting, Refusal,
};

fn push(options: NotificationOptions) -> Capability {
    Capability::PushNotifications(options)
}

#[test]
fn plain_grant_round_trip() {
    let fakes = Fakes::default();
    let broker = fakes.broker();

    assert!(!broker.is_usable(Capability::Contacts));

    let outcome = broker.request(Capability::Contacts, None, None);

    assert!(outcome.granted);
    assert_eq!(outcome.refusal, None);
    assert_eq!(fakes.contacts.requests(), 1);
    assert!(broker.is_usable(Capability::Contacts));
}

#[test]
fn denial_reaches_both_the_hook_and_the_caller() {
    let fakes = Fakes {
        camera: FakeCamera::denying(AccessStatus::NotDetermined),
        ..Fakes::default()
    };
    let broker = fakes.broker();
    let on_failure = RecordingFailureHandler::new();

    let outcome = broker.request(Capability::Camera, None, Some(&on_failure));

    assert!(!outcome.granted);
    assert_eq!(outcome.refusal, Some(Refusal::Denied));
    assert_eq!(on_failure.seen(), vec![Capability::Camera]);
}

#[test]
fn authorized_entity_short_circuits_without_touching_its_sibling() {
    let fakes = Fakes::default();
    fakes
        .calendar
        .set_status(EntityKind::Events, AccessStatus::Authorized);
    let broker = fakes.broker();

    let outcome = broker.request(Capability::Calendar(EntityKind::Events), None, None);

    assert!(outcome.granted);
    assert_eq!(fakes.calendar.requests(), 0);
    assert!(!broker.is_usable(Capability::Calendar(EntityKind::Reminders)));
}

#[test]
fn declined_preconsent_leaves_the_one_shot_prompt_unspent() {
    let fakes = Fakes::default();
    let broker = fakes.broker();
    let preconsent = ScriptedPreconsent::declining();
    let on_failure = RecordingFailureHandler::new();

    let outcome = broker.request(
        Capability::Calendar(EntityKind::Events),
        Some(&preconsent),
        Some(&on_failure),
    );

    assert_eq!(outcome.refusal, Some(Refusal::PreconsentDeclined));
    assert_eq!(fakes.calendar.requests(), 0);
    assert!(on_failure.seen().is_empty());

    // a later attempt without the gate goes through
    let retry = broker.request(Capability::Calendar(EntityKind::Events), None, None);
    assert!(retry.granted);
    assert_eq!(fakes.calendar.requests(), 1);
}

#[test]
fn accepted_preconsent_prompts_exactly_once() {
    let fakes = Fakes::default();
    let broker = fakes.broker();
    let preconsent = ScriptedPreconsent::proceeding();

    let outcome = broker.request(Capability::PhotoLibrary, Some(&preconsent), None);

    assert!(outcome.granted);
    assert_eq!(preconsent.presented(), 1);
    assert_eq!(fakes.photo_library.requests(), 1);
}

#[test]
fn limited_photo_grant_stays_unusable() {
    let fakes = Fakes {
        photo_library: FakePhotoLibrary::refusing(
            AccessStatus::NotDetermined,
            AccessStatus::Limited,
        ),
        ..Fakes::default()
    };
    let broker = fakes.broker();

    let outcome = broker.request(Capability::PhotoLibrary, None, None);

    assert!(!outcome.granted);
    assert_eq!(outcome.refusal, Some(Refusal::Limited));
    assert!(!broker.is_usable(Capability::PhotoLibrary));
}

#[test]
fn calendar_store_error_surfaces_as_provider_refusal() {
    let fakes = Fakes::default();
    fakes.calendar.fail_with("event store unavailable");
    let broker = fakes.broker();

    let outcome = broker.request(Capability::Calendar(EntityKind::Reminders), None, None);

    assert_eq!(
        outcome.refusal,
        Some(Refusal::Provider("event store unavailable".into()))
    );
}

#[test]
fn granted_push_request_enables_the_requested_options() {
    let fakes = Fakes::default();
    let broker = fakes.broker();
    let options = NotificationOptions::BADGE | NotificationOptions::SOUND;

    assert!(!broker.is_usable(push(options)));

    let outcome = broker.request(push(options), None, None);

    assert!(outcome.granted);
    assert_eq!(fakes.notifications.last_requested(), Some(options));
    // the follow-up resolve sees the granted snapshot
    assert!(broker.is_usable(push(options)));
    assert!(broker.is_usable(push(NotificationOptions::BADGE)));
}

#[test]
fn push_usability_needs_an_enabled_requested_option() {
    let fakes = Fakes::default();
    fakes.notifications.set_settings(NotificationSettings {
        status: NotificationStatus::Authorized,
        badge: OptionSetting::Enabled,
        sound: OptionSetting::Disabled,
        alert: OptionSetting::Disabled,
        car_play: OptionSetting::NotSupported,
        critical_alert: OptionSetting::NotSupported,
        provides_app_notification_settings: false,
    });
    let broker = fakes.broker();

    assert!(broker.is_usable(push(NotificationOptions::BADGE)));
    assert!(!broker.is_usable(push(NotificationOptions::SOUND)));
    assert!(broker.is_usable(push(
        NotificationOptions::BADGE | NotificationOptions::SOUND
    )));
    assert!(!broker.is_usable(push(NotificationOptions::empty())));
}

#[test]
fn refused_push_request_reports_denied() {
    let fakes = Fakes {
        notifications: FakeNotifications::denying(NotificationSettings::denied()),
        ..Fakes::default()
    };
    let broker = fakes.broker();
    let on_failure = RecordingFailureHandler::new();

    let outcome = broker.request(push(NotificationOptions::ALERT), None, Some(&on_failure));

    assert!(!outcome.granted);
    assert_eq!(outcome.refusal, Some(Refusal::Denied));
    assert_eq!(on_failure.seen(), vec![push(NotificationOptions::ALERT)]);
}

#[test]
fn outcome_converts_into_a_result() {
    let fakes = Fakes {
        calendar: FakeCalendar::denying(AccessStatus::Restricted),
        ..Fakes::default()
    };
    let broker = fakes.broker();

    let result = broker
        .request(Capability::Calendar(EntityKind::Events), None, None)
        .into_result();

    assert_eq!(result, Err(Refusal::Restricted));
}

#[test]
#[should_panic(expected = "NSRemindersFullAccessUsageDescription")]
fn resolving_an_undeclared_capability_names_the_missing_key() {
    let fakes = Fakes::default();
    let broker = fakes.broker_with(politely::StaticDeclarations::new([
        "NSCalendarsFullAccessUsageDescription",
    ]));

    let _ = broker.resolve(Capability::Calendar(EntityKind::Reminders));
}
