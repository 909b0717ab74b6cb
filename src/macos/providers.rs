//! The real providers, one thin struct per platform service.

use objc2::rc::Retained;
use objc2_contacts::CNContactStore;
use objc2_event_kit::EKEventStore;
use objc2_user_notifications::UNUserNotificationCenter;

use crate::capability::{EntityKind, NotificationOptions};
use crate::ffi;
use crate::providers::{
    CalendarProvider, CameraProvider, ContactsProvider, NotificationProvider, PhotoLibraryProvider,
};
use crate::status::{AccessStatus, NotificationSettings};

pub struct SystemCamera;

impl CameraProvider for SystemCamera {
    fn status(&self) -> AccessStatus {
        ffi::av_foundation::video_authorization_status()
    }

    fn request_access(&self) -> bool {
        ffi::av_foundation::request_video_access()
    }
}

pub struct SystemPhotoLibrary;

impl PhotoLibraryProvider for SystemPhotoLibrary {
    fn status(&self) -> AccessStatus {
        ffi::photos::authorization_status()
    }

    fn request_access(&self) -> AccessStatus {
        ffi::photos::request_authorization()
    }
}

/// Calendar provider holding one event store for both entity kinds.
pub struct SystemCalendar {
    store: Retained<EKEventStore>,
}

impl SystemCalendar {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: ffi::event_kit::init_event_store(),
        }
    }
}

impl Default for SystemCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarProvider for SystemCalendar {
    fn status(&self, entity: EntityKind) -> AccessStatus {
        ffi::event_kit::authorization_status(entity)
    }

    fn request_access(&self, entity: EntityKind) -> (bool, Option<String>) {
        ffi::event_kit::request_full_access(&self.store, entity)
    }
}

pub struct SystemContacts {
    store: Retained<CNContactStore>,
}

impl SystemContacts {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: ffi::contacts::init_contact_store(),
        }
    }
}

impl Default for SystemContacts {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactsProvider for SystemContacts {
    fn status(&self) -> AccessStatus {
        ffi::contacts::authorization_status()
    }

    fn request_access(&self) -> (bool, Option<String>) {
        ffi::contacts::request_access(&self.store)
    }
}

/// Notification provider over the app's current notification center.
/// Needs a bundled app context, like the center itself.
pub struct SystemNotifications {
    center: Retained<UNUserNotificationCenter>,
}

impl SystemNotifications {
    #[must_use]
    pub fn new() -> Self {
        Self {
            center: ffi::user_notifications::current_center(),
        }
    }
}

impl Default for SystemNotifications {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationProvider for SystemNotifications {
    fn settings(&self) -> NotificationSettings {
        ffi::user_notifications::notification_settings(&self.center)
    }

    fn request_authorization(&self, options: NotificationOptions) -> (bool, Option<String>) {
        ffi::user_notifications::request_authorization(&self.center, options)
    }
}
