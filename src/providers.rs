//! Seams to the platform permission services.
//!
//! One trait per capability family, each mirroring the shape of the system
//! call it stands in for. Request shapes stay heterogeneous on purpose; the
//! broker unifies them into an [`Outcome`](crate::outcome::Outcome) right
//! after they return.

use crate::capability::{EntityKind, NotificationOptions};
use crate::status::{AccessStatus, NotificationSettings};

/// Camera service: status query plus a bool-only request prompt.
pub trait CameraProvider {
    fn status(&self) -> AccessStatus;
    fn request_access(&self) -> bool;
}

/// Photo library service: the request reports a full status, not a bool.
pub trait PhotoLibraryProvider {
    fn status(&self) -> AccessStatus;
    fn request_access(&self) -> AccessStatus;
}

/// Calendar service, shared by the events and reminders databases.
/// Requests complete with a grant flag and an optional error message.
pub trait CalendarProvider {
    fn status(&self, entity: EntityKind) -> AccessStatus;
    fn request_access(&self, entity: EntityKind) -> (bool, Option<String>);
}

/// Contacts service, same completion shape as the calendar.
pub trait ContactsProvider {
    fn status(&self) -> AccessStatus;
    fn request_access(&self) -> (bool, Option<String>);
}

/// Notification center: settings snapshot plus an options-scoped request.
pub trait NotificationProvider {
    fn settings(&self) -> NotificationSettings;
    fn request_authorization(&self, options: NotificationOptions) -> (bool, Option<String>);
}

/// The five providers a broker needs, one per capability family.
pub struct ProviderSet {
    pub camera: Box<dyn CameraProvider>,
    pub photo_library: Box<dyn PhotoLibraryProvider>,
    pub calendar: Box<dyn CalendarProvider>,
    pub contacts: Box<dyn ContactsProvider>,
    pub notifications: Box<dyn NotificationProvider>,
}
