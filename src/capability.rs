use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar database a [`Capability::Calendar`] request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Events,
    Reminders,
}

bitflags! {
    /// Notification privileges to ask for, mirroring `UNAuthorizationOptions`
    /// bit for bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct NotificationOptions: u8 {
        const BADGE = 1 << 0;
        const SOUND = 1 << 1;
        const ALERT = 1 << 2;
        const CAR_PLAY = 1 << 3;
        const CRITICAL_ALERT = 1 << 4;
        const PROVIDES_APP_NOTIFICATION_SETTINGS = 1 << 5;
        const PROVISIONAL = 1 << 6;
    }
}

impl NotificationOptions {
    /// Returns a human-readable list of the set option names.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::BADGE) {
            names.push("badge");
        }
        if self.contains(Self::SOUND) {
            names.push("sound");
        }
        if self.contains(Self::ALERT) {
            names.push("alert");
        }
        if self.contains(Self::CAR_PLAY) {
            names.push("car play");
        }
        if self.contains(Self::CRITICAL_ALERT) {
            names.push("critical alert");
        }
        if self.contains(Self::PROVIDES_APP_NOTIFICATION_SETTINGS) {
            names.push("app notification settings");
        }
        if self.contains(Self::PROVISIONAL) {
            names.push("provisional");
        }
        names
    }
}

impl fmt::Display for NotificationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

/// A privacy-guarded system capability an app can ask the user for.
///
/// Each value carries everything the request needs: the calendar variant
/// names which entity database it wants, the push variant which
/// notification privileges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Camera,
    PhotoLibrary,
    Calendar(EntityKind),
    Contacts,
    PushNotifications(NotificationOptions),
}

impl Capability {
    /// The Info.plist usage-description key that must be declared before
    /// this capability may be requested. Push notifications need none.
    ///
    /// The calendar keys are the full-access variants required by the
    /// `requestFullAccessTo…` APIs on macOS 14 and later.
    #[must_use]
    pub fn usage_key(self) -> Option<&'static str> {
        match self {
            Self::Camera => Some("NSCameraUsageDescription"),
            Self::PhotoLibrary => Some("NSPhotoLibraryUsageDescription"),
            Self::Calendar(EntityKind::Events) => Some("NSCalendarsFullAccessUsageDescription"),
            Self::Calendar(EntityKind::Reminders) => Some("NSRemindersFullAccessUsageDescription"),
            Self::Contacts => Some("NSContactsUsageDescription"),
            Self::PushNotifications(_) => None,
        }
    }

    /// Where the user can change this permission by hand, as a
    /// human-readable System Settings path.
    #[must_use]
    pub fn settings_hint(self) -> &'static str {
        match self {
            Self::Camera => "System Settings > Privacy & Security > Camera",
            Self::PhotoLibrary => "System Settings > Privacy & Security > Photos",
            Self::Calendar(EntityKind::Events) => "System Settings > Privacy & Security > Calendars",
            Self::Calendar(EntityKind::Reminders) => {
                "System Settings > Privacy & Security > Reminders"
            }
            Self::Contacts => "System Settings > Privacy & Security > Contacts",
            Self::PushNotifications(_) => "System Settings > Notifications",
        }
    }

    /// Deep link that opens the matching System Settings pane.
    #[must_use]
    pub fn settings_url(self) -> &'static str {
        match self {
            Self::Camera => "x-apple.systempreferences:com.apple.preference.security?Privacy_Camera",
            Self::PhotoLibrary => {
                "x-apple.systempreferences:com.apple.preference.security?Privacy_Photos"
            }
            Self::Calendar(EntityKind::Events) => {
                "x-apple.systempreferences:com.apple.preference.security?Privacy_Calendars"
            }
            Self::Calendar(EntityKind::Reminders) => {
                "x-apple.systempreferences:com.apple.preference.security?Privacy_Reminders"
            }
            Self::Contacts => {
                "x-apple.systempreferences:com.apple.preference.security?Privacy_Contacts"
            }
            Self::PushNotifications(_) => {
                "x-apple.systempreferences:com.apple.Notifications-Settings.extension"
            }
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Camera => "camera",
            Self::PhotoLibrary => "photo library",
            Self::Calendar(EntityKind::Events) => "calendar",
            Self::Calendar(EntityKind::Reminders) => "reminders",
            Self::Contacts => "contacts",
            Self::PushNotifications(_) => "push notifications",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_keys_cover_every_manifest_guarded_capability() {
        assert_eq!(
            Capability::Camera.usage_key(),
            Some("NSCameraUsageDescription")
        );
        assert_eq!(
            Capability::PhotoLibrary.usage_key(),
            Some("NSPhotoLibraryUsageDescription")
        );
        assert_eq!(
            Capability::Calendar(EntityKind::Events).usage_key(),
            Some("NSCalendarsFullAccessUsageDescription")
        );
        assert_eq!(
            Capability::Calendar(EntityKind::Reminders).usage_key(),
            Some("NSRemindersFullAccessUsageDescription")
        );
        assert_eq!(
            Capability::Contacts.usage_key(),
            Some("NSContactsUsageDescription")
        );
    }

    #[test]
    fn push_notifications_need_no_usage_key() {
        assert_eq!(
            Capability::PushNotifications(NotificationOptions::BADGE).usage_key(),
            None
        );
    }

    #[test]
    fn option_bits_mirror_platform_raw_values() {
        assert_eq!(NotificationOptions::BADGE.bits(), 1);
        assert_eq!(NotificationOptions::SOUND.bits(), 2);
        assert_eq!(NotificationOptions::ALERT.bits(), 4);
        assert_eq!(NotificationOptions::CAR_PLAY.bits(), 8);
        assert_eq!(NotificationOptions::CRITICAL_ALERT.bits(), 16);
        assert_eq!(
            NotificationOptions::PROVIDES_APP_NOTIFICATION_SETTINGS.bits(),
            32
        );
        assert_eq!(NotificationOptions::PROVISIONAL.bits(), 64);
    }

    #[test]
    fn labels_distinguish_calendar_entities() {
        assert_eq!(Capability::Calendar(EntityKind::Events).to_string(), "calendar");
        assert_eq!(
            Capability::Calendar(EntityKind::Reminders).to_string(),
            "reminders"
        );
    }

    #[test]
    fn option_names_join_for_display() {
        let options = NotificationOptions::BADGE | NotificationOptions::SOUND;
        assert_eq!(options.to_string(), "badge | sound");
        assert_eq!(NotificationOptions::empty().to_string(), "(none)");
    }
}
