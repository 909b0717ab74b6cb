//! In-memory fakes for exercising the broker without the platform.
//!
//! Every fake is a cheap clone sharing its state, so a test can keep a
//! handle, move a clone into a [`ProviderSet`] and still observe calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::broker::PermissionBroker;
use crate::capability::{Capability, EntityKind, NotificationOptions};
use crate::hooks::{FailureHandler, Preconsent, PreconsentHandler};
use crate::manifest::StaticDeclarations;
use crate::providers::{
    CalendarProvider, CameraProvider, ContactsProvider, NotificationProvider, PhotoLibraryProvider,
    ProviderSet,
};
use crate::status::{AccessStatus, NotificationSettings, NotificationStatus, OptionSetting};

/// Every usage-description key the broker may demand.
pub const ALL_USAGE_KEYS: [&str; 5] = [
    "NSCameraUsageDescription",
    "NSPhotoLibraryUsageDescription",
    "NSCalendarsFullAccessUsageDescription",
    "NSRemindersFullAccessUsageDescription",
    "NSContactsUsageDescription",
];

/// Declaration table carrying all known usage keys.
#[must_use]
pub fn full_declarations() -> StaticDeclarations {
    StaticDeclarations::new(ALL_USAGE_KEYS)
}

struct CameraState {
    status: Mutex<AccessStatus>,
    grants: bool,
    status_calls: AtomicUsize,
    requests: AtomicUsize,
}

/// Camera fake: requests answer with a plain grant flag.
#[derive(Clone)]
pub struct FakeCamera {
    state: Arc<CameraState>,
}

impl FakeCamera {
    fn with(status: AccessStatus, grants: bool) -> Self {
        Self {
            state: Arc::new(CameraState {
                status: Mutex::new(status),
                grants,
                status_calls: AtomicUsize::new(0),
                requests: AtomicUsize::new(0),
            }),
        }
    }

    pub fn granting(status: AccessStatus) -> Self {
        Self::with(status, true)
    }

    pub fn denying(status: AccessStatus) -> Self {
        Self::with(status, false)
    }

    pub fn set_status(&self, status: AccessStatus) {
        *self.state.status.lock().unwrap() = status;
    }

    pub fn status_calls(&self) -> usize {
        self.state.status_calls.load(Ordering::Relaxed)
    }

    pub fn requests(&self) -> usize {
        self.state.requests.load(Ordering::Relaxed)
    }
}

impl CameraProvider for FakeCamera {
    fn status(&self) -> AccessStatus {
        self.state.status_calls.fetch_add(1, Ordering::Relaxed);
        *self.state.status.lock().unwrap()
    }

    fn request_access(&self) -> bool {
        self.state.requests.fetch_add(1, Ordering::Relaxed);
        if self.state.grants {
            *self.state.status.lock().unwrap() = AccessStatus::Authorized;
        }
        self.state.grants
    }
}

struct PhotoLibraryState {
    status: Mutex<AccessStatus>,
    request_result: AccessStatus,
    status_calls: AtomicUsize,
    requests: AtomicUsize,
}

/// Photo library fake: requests answer with a full status.
#[derive(Clone)]
pub struct FakePhotoLibrary {
    state: Arc<PhotoLibraryState>,
}

impl FakePhotoLibrary {
    fn with(status: AccessStatus, request_result: AccessStatus) -> Self {
        Self {
            state: Arc::new(PhotoLibraryState {
                status: Mutex::new(status),
                request_result,
                status_calls: AtomicUsize::new(0),
                requests: AtomicUsize::new(0),
            }),
        }
    }

    pub fn granting(status: AccessStatus) -> Self {
        Self::with(status, AccessStatus::Authorized)
    }

    /// Requests settle on `request_result` instead of a grant.
    pub fn refusing(status: AccessStatus, request_result: AccessStatus) -> Self {
        Self::with(status, request_result)
    }

    pub fn set_status(&self, status: AccessStatus) {
        *self.state.status.lock().unwrap() = status;
    }

    pub fn status_calls(&self) -> usize {
        self.state.status_calls.load(Ordering::Relaxed)
    }

    pub fn requests(&self) -> usize {
        self.state.requests.load(Ordering::Relaxed)
    }
}

impl PhotoLibraryProvider for FakePhotoLibrary {
    fn status(&self) -> AccessStatus {
        self.state.status_calls.fetch_add(1, Ordering::Relaxed);
        *self.state.status.lock().unwrap()
    }

    fn request_access(&self) -> AccessStatus {
        self.state.requests.fetch_add(1, Ordering::Relaxed);
        *self.state.status.lock().unwrap() = self.state.request_result;
        self.state.request_result
    }
}

struct CalendarState {
    statuses: Mutex<[AccessStatus; 2]>,
    grants: bool,
    error: Mutex<Option<String>>,
    status_calls: AtomicUsize,
    requests: AtomicUsize,
}

fn entity_index(entity: EntityKind) -> usize {
    match entity {
        EntityKind::Events => 0,
        EntityKind::Reminders => 1,
    }
}

/// Calendar fake covering both the events and reminders databases.
#[derive(Clone)]
pub struct FakeCalendar {
    state: Arc<CalendarState>,
}

impl FakeCalendar {
    fn with(status: AccessStatus, grants: bool) -> Self {
        Self {
            state: Arc::new(CalendarState {
                statuses: Mutex::new([status; 2]),
                grants,
                error: Mutex::new(None),
                status_calls: AtomicUsize::new(0),
                requests: AtomicUsize::new(0),
            }),
        }
    }

    pub fn granting(status: AccessStatus) -> Self {
        Self::with(status, true)
    }

    pub fn denying(status: AccessStatus) -> Self {
        Self::with(status, false)
    }

    pub fn set_status(&self, entity: EntityKind, status: AccessStatus) {
        self.state.statuses.lock().unwrap()[entity_index(entity)] = status;
    }

    /// Makes the next requests complete with `message` as the error.
    pub fn fail_with(&self, message: &str) {
        *self.state.error.lock().unwrap() = Some(message.to_string());
    }

    pub fn status_calls(&self) -> usize {
        self.state.status_calls.load(Ordering::Relaxed)
    }

    pub fn requests(&self) -> usize {
        self.state.requests.load(Ordering::Relaxed)
    }
}

impl CalendarProvider for FakeCalendar {
    fn status(&self, entity: EntityKind) -> AccessStatus {
        self.state.status_calls.fetch_add(1, Ordering::Relaxed);
        self.state.statuses.lock().unwrap()[entity_index(entity)]
    }

    fn request_access(&self, entity: EntityKind) -> (bool, Option<String>) {
        self.state.requests.fetch_add(1, Ordering::Relaxed);
        if let Some(error) = self.state.error.lock().unwrap().clone() {
            return (false, Some(error));
        }
        if self.state.grants {
            self.state.statuses.lock().unwrap()[entity_index(entity)] = AccessStatus::Authorized;
        }
        (self.state.grants, None)
    }
}

struct ContactsState {
    status: Mutex<AccessStatus>,
    grants: bool,
    error: Mutex<Option<String>>,
    status_calls: AtomicUsize,
    requests: AtomicUsize,
}

/// Contacts fake, same completion shape as the calendar.
#[derive(Clone)]
pub struct FakeContacts {
    state: Arc<ContactsState>,
}

impl FakeContacts {
    fn with(status: AccessStatus, grants: bool) -> Self {
        Self {
            state: Arc::new(ContactsState {
                status: Mutex::new(status),
                grants,
                error: Mutex::new(None),
                status_calls: AtomicUsize::new(0),
                requests: AtomicUsize::new(0),
            }),
        }
    }

    pub fn granting(status: AccessStatus) -> Self {
        Self::with(status, true)
    }

    pub fn denying(status: AccessStatus) -> Self {
        Self::with(status, false)
    }

    pub fn set_status(&self, status: AccessStatus) {
        *self.state.status.lock().unwrap() = status;
    }

    /// Makes the next requests complete with `message` as the error.
    pub fn fail_with(&self, message: &str) {
        *self.state.error.lock().unwrap() = Some(message.to_string());
    }

    pub fn status_calls(&self) -> usize {
        self.state.status_calls.load(Ordering::Relaxed)
    }

    pub fn requests(&self) -> usize {
        self.state.requests.load(Ordering::Relaxed)
    }
}

impl ContactsProvider for FakeContacts {
    fn status(&self) -> AccessStatus {
        self.state.status_calls.fetch_add(1, Ordering::Relaxed);
        *self.state.status.lock().unwrap()
    }

    fn request_access(&self) -> (bool, Option<String>) {
        self.state.requests.fetch_add(1, Ordering::Relaxed);
        if let Some(error) = self.state.error.lock().unwrap().clone() {
            return (false, Some(error));
        }
        if self.state.grants {
            *self.state.status.lock().unwrap() = AccessStatus::Authorized;
        }
        (self.state.grants, None)
    }
}

struct NotificationState {
    settings: Mutex<NotificationSettings>,
    grants: bool,
    error: Mutex<Option<String>>,
    last_requested: Mutex<Option<NotificationOptions>>,
    settings_calls: AtomicUsize,
    requests: AtomicUsize,
}

/// Notification center fake. A granted request flips the stored settings
/// to an authorized snapshot with the requested options enabled, the way
/// a real grant would read back.
#[derive(Clone)]
pub struct FakeNotifications {
    state: Arc<NotificationState>,
}

impl FakeNotifications {
    fn with(settings: NotificationSettings, grants: bool) -> Self {
        Self {
            state: Arc::new(NotificationState {
                settings: Mutex::new(settings),
                grants,
                error: Mutex::new(None),
                last_requested: Mutex::new(None),
                settings_calls: AtomicUsize::new(0),
                requests: AtomicUsize::new(0),
            }),
        }
    }

    pub fn granting(settings: NotificationSettings) -> Self {
        Self::with(settings, true)
    }

    pub fn denying(settings: NotificationSettings) -> Self {
        Self::with(settings, false)
    }

    pub fn set_settings(&self, settings: NotificationSettings) {
        *self.state.settings.lock().unwrap() = settings;
    }

    /// Makes the next requests complete with `message` as the error.
    pub fn fail_with(&self, message: &str) {
        *self.state.error.lock().unwrap() = Some(message.to_string());
    }

    /// The option set the broker passed to the last request, if any.
    pub fn last_requested(&self) -> Option<NotificationOptions> {
        *self.state.last_requested.lock().unwrap()
    }

    pub fn settings_calls(&self) -> usize {
        self.state.settings_calls.load(Ordering::Relaxed)
    }

    pub fn requests(&self) -> usize {
        self.state.requests.load(Ordering::Relaxed)
    }
}

fn granted_snapshot(requested: NotificationOptions) -> NotificationSettings {
    let enabled = |option| {
        if requested.contains(option) {
            OptionSetting::Enabled
        } else {
            OptionSetting::NotSupported
        }
    };
    NotificationSettings {
        status: NotificationStatus::Authorized,
        badge: enabled(NotificationOptions::BADGE),
        sound: enabled(NotificationOptions::SOUND),
        alert: enabled(NotificationOptions::ALERT),
        car_play: enabled(NotificationOptions::CAR_PLAY),
        critical_alert: enabled(NotificationOptions::CRITICAL_ALERT),
        provides_app_notification_settings: requested.intersects(
            NotificationOptions::PROVIDES_APP_NOTIFICATION_SETTINGS
                | NotificationOptions::PROVISIONAL,
        ),
    }
}

impl NotificationProvider for FakeNotifications {
    fn settings(&self) -> NotificationSettings {
        self.state.settings_calls.fetch_add(1, Ordering::Relaxed);
        *self.state.settings.lock().unwrap()
    }

    fn request_authorization(&self, options: NotificationOptions) -> (bool, Option<String>) {
        self.state.requests.fetch_add(1, Ordering::Relaxed);
        *self.state.last_requested.lock().unwrap() = Some(options);
        if let Some(error) = self.state.error.lock().unwrap().clone() {
            return (false, Some(error));
        }
        if self.state.grants {
            *self.state.settings.lock().unwrap() = granted_snapshot(options);
        }
        (self.state.grants, None)
    }
}

/// The five fakes behind one broker, ready for scenario tests.
pub struct Fakes {
    pub camera: FakeCamera,
    pub photo_library: FakePhotoLibrary,
    pub calendar: FakeCalendar,
    pub contacts: FakeContacts,
    pub notifications: FakeNotifications,
}

impl Default for Fakes {
    /// Everything undetermined, every request granting.
    fn default() -> Self {
        Self {
            camera: FakeCamera::granting(AccessStatus::NotDetermined),
            photo_library: FakePhotoLibrary::granting(AccessStatus::NotDetermined),
            calendar: FakeCalendar::granting(AccessStatus::NotDetermined),
            contacts: FakeContacts::granting(AccessStatus::NotDetermined),
            notifications: FakeNotifications::granting(undetermined_settings()),
        }
    }
}

fn undetermined_settings() -> NotificationSettings {
    NotificationSettings {
        status: NotificationStatus::NotDetermined,
        badge: OptionSetting::NotSupported,
        sound: OptionSetting::NotSupported,
        alert: OptionSetting::NotSupported,
        car_play: OptionSetting::NotSupported,
        critical_alert: OptionSetting::NotSupported,
        provides_app_notification_settings: false,
    }
}

impl Fakes {
    /// Boxes clones of the fakes; the originals keep observing calls.
    #[must_use]
    pub fn provider_set(&self) -> ProviderSet {
        ProviderSet {
            camera: Box::new(self.camera.clone()),
            photo_library: Box::new(self.photo_library.clone()),
            calendar: Box::new(self.calendar.clone()),
            contacts: Box::new(self.contacts.clone()),
            notifications: Box::new(self.notifications.clone()),
        }
    }

    /// Broker over these fakes with every usage key declared.
    #[must_use]
    pub fn broker(&self) -> PermissionBroker {
        self.broker_with(full_declarations())
    }

    /// Broker over these fakes with a caller-chosen declaration table.
    #[must_use]
    pub fn broker_with(&self, declarations: StaticDeclarations) -> PermissionBroker {
        PermissionBroker::new(self.provider_set(), Box::new(declarations))
    }
}

/// Fully-declared broker over default fakes, the quickest way to a
/// working instance.
#[must_use]
pub fn broker() -> PermissionBroker {
    Fakes::default().broker()
}

/// Pre-consent hook answering from a script instead of a user.
#[derive(Clone)]
pub struct ScriptedPreconsent {
    response: Preconsent,
    presented: Arc<AtomicUsize>,
}

impl ScriptedPreconsent {
    pub fn proceeding() -> Self {
        Self {
            response: Preconsent::Proceed,
            presented: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn declining() -> Self {
        Self {
            response: Preconsent::Decline,
            presented: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times the prompt was shown.
    pub fn presented(&self) -> usize {
        self.presented.load(Ordering::Relaxed)
    }
}

impl PreconsentHandler for ScriptedPreconsent {
    fn present(&self, _capability: Capability) -> Preconsent {
        self.presented.fetch_add(1, Ordering::Relaxed);
        self.response
    }
}

/// Failure hook remembering every capability it was handed.
#[derive(Clone, Default)]
pub struct RecordingFailureHandler {
    seen: Arc<Mutex<Vec<Capability>>>,
}

impl RecordingFailureHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self) -> Vec<Capability> {
        self.seen.lock().unwrap().clone()
    }
}

impl FailureHandler for RecordingFailureHandler {
    fn handle_failure(&self, capability: Capability) {
        self.seen.lock().unwrap().push(capability);
    }
}
