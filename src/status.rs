use serde::{Deserialize, Serialize};

use crate::capability::{EntityKind, NotificationOptions};

/// Raw authorization status shared by the camera, photo library, calendar
/// and contacts services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessStatus {
    NotDetermined,
    Restricted,
    Denied,
    Authorized,
    Limited,
    WriteOnly,
}

impl AccessStatus {
    /// True only for the full [`Authorized`](Self::Authorized) grant.
    /// Partial grants such as `Limited` and `WriteOnly` stay unusable.
    #[must_use]
    pub fn is_authorized(self) -> bool {
        matches!(self, Self::Authorized)
    }
}

/// Overall notification authorization reported by the notification center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    NotDetermined,
    Denied,
    Authorized,
    Provisional,
    Ephemeral,
}

/// Per-option switch inside the notification settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSetting {
    NotSupported,
    Disabled,
    Enabled,
}

impl OptionSetting {
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Snapshot of the user-visible notification settings at resolve time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub status: NotificationStatus,
    pub badge: OptionSetting,
    pub sound: OptionSetting,
    pub alert: OptionSetting,
    pub car_play: OptionSetting,
    pub critical_alert: OptionSetting,
    pub provides_app_notification_settings: bool,
}

impl NotificationSettings {
    /// A fully switched-off snapshot, used when the settings query cannot
    /// complete.
    #[must_use]
    pub fn denied() -> Self {
        Self {
            status: NotificationStatus::Denied,
            badge: OptionSetting::NotSupported,
            sound: OptionSetting::NotSupported,
            alert: OptionSetting::NotSupported,
            car_play: OptionSetting::NotSupported,
            critical_alert: OptionSetting::NotSupported,
            provides_app_notification_settings: false,
        }
    }

    /// The option bits whose settings are currently switched on.
    ///
    /// `PROVISIONAL` deliberately tracks the app-notification-settings
    /// switch, matching the platform's own bookkeeping for quiet grants.
    fn enabled_options(&self) -> NotificationOptions {
        let mut enabled = NotificationOptions::empty();
        if self.badge.is_enabled() {
            enabled |= NotificationOptions::BADGE;
        }
        if self.sound.is_enabled() {
            enabled |= NotificationOptions::SOUND;
        }
        if self.alert.is_enabled() {
            enabled |= NotificationOptions::ALERT;
        }
        if self.car_play.is_enabled() {
            enabled |= NotificationOptions::CAR_PLAY;
        }
        if self.critical_alert.is_enabled() {
            enabled |= NotificationOptions::CRITICAL_ALERT;
        }
        if self.provides_app_notification_settings {
            enabled |= NotificationOptions::PROVIDES_APP_NOTIFICATION_SETTINGS
                | NotificationOptions::PROVISIONAL;
        }
        enabled
    }

    /// True when the overall status is authorized and at least one of the
    /// requested options is enabled. An empty request can never pass.
    #[must_use]
    pub fn authorizes_any(&self, requested: NotificationOptions) -> bool {
        self.status == NotificationStatus::Authorized
            && requested.intersects(self.enabled_options())
    }
}

/// Provider-reported authorization, keyed like [`Capability`].
///
/// For push notifications the settings snapshot is paired with the
/// originally requested options, because a platform-level grant says
/// nothing about the individual option switches.
///
/// [`Capability`]: crate::capability::Capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationState {
    Camera(AccessStatus),
    PhotoLibrary(AccessStatus),
    Calendar(EntityKind, AccessStatus),
    Contacts(AccessStatus),
    PushNotifications {
        settings: NotificationSettings,
        requested: NotificationOptions,
    },
}

impl AuthorizationState {
    /// Reduces the provider-specific status to one "usable now" bit.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        match self {
            Self::Camera(status) | Self::PhotoLibrary(status) | Self::Contacts(status) => {
                status.is_authorized()
            }
            Self::Calendar(_, status) => status.is_authorized(),
            Self::PushNotifications {
                settings,
                requested,
            } => settings.authorizes_any(*requested),
        }
    }

    /// The raw access status, for the variants that carry one.
    #[must_use]
    pub fn access_status(&self) -> Option<AccessStatus> {
        match self {
            Self::Camera(status)
            | Self::PhotoLibrary(status)
            | Self::Contacts(status)
            | Self::Calendar(_, status) => Some(*status),
            Self::PushNotifications { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(status: NotificationStatus) -> NotificationSettings {
        NotificationSettings {
            status,
            badge: OptionSetting::Enabled,
            sound: OptionSetting::Disabled,
            alert: OptionSetting::NotSupported,
            car_play: OptionSetting::NotSupported,
            critical_alert: OptionSetting::NotSupported,
            provides_app_notification_settings: false,
        }
    }

    #[test]
    fn only_full_authorization_is_usable() {
        for status in [
            AccessStatus::NotDetermined,
            AccessStatus::Restricted,
            AccessStatus::Denied,
            AccessStatus::Limited,
            AccessStatus::WriteOnly,
        ] {
            assert!(!AuthorizationState::Camera(status).is_usable());
            assert!(!AuthorizationState::PhotoLibrary(status).is_usable());
            assert!(!AuthorizationState::Contacts(status).is_usable());
            assert!(!AuthorizationState::Calendar(EntityKind::Events, status).is_usable());
        }
        assert!(AuthorizationState::Camera(AccessStatus::Authorized).is_usable());
        assert!(
            AuthorizationState::Calendar(EntityKind::Reminders, AccessStatus::Authorized)
                .is_usable()
        );
    }

    #[test]
    fn push_requires_authorized_status() {
        let state = AuthorizationState::PushNotifications {
            settings: settings(NotificationStatus::Provisional),
            requested: NotificationOptions::BADGE,
        };
        assert!(!state.is_usable());

        let state = AuthorizationState::PushNotifications {
            settings: settings(NotificationStatus::Authorized),
            requested: NotificationOptions::BADGE,
        };
        assert!(state.is_usable());
    }

    #[test]
    fn push_matches_any_requested_option() {
        let authorized = settings(NotificationStatus::Authorized);

        // badge enabled, sound disabled
        assert!(authorized.authorizes_any(NotificationOptions::BADGE));
        assert!(!authorized.authorizes_any(NotificationOptions::SOUND));
        assert!(
            authorized.authorizes_any(NotificationOptions::BADGE | NotificationOptions::SOUND)
        );
    }

    #[test]
    fn push_empty_request_never_passes() {
        let authorized = settings(NotificationStatus::Authorized);
        assert!(!authorized.authorizes_any(NotificationOptions::empty()));
    }

    #[test]
    fn provisional_option_checks_app_settings_switch() {
        let mut authorized = settings(NotificationStatus::Authorized);
        assert!(!authorized.authorizes_any(NotificationOptions::PROVISIONAL));

        authorized.provides_app_notification_settings = true;
        assert!(authorized.authorizes_any(NotificationOptions::PROVISIONAL));
        assert!(
            authorized
                .authorizes_any(NotificationOptions::PROVIDES_APP_NOTIFICATION_SETTINGS)
        );
    }

    #[test]
    fn access_status_is_exposed_for_classification() {
        let state = AuthorizationState::Contacts(AccessStatus::Restricted);
        assert_eq!(state.access_status(), Some(AccessStatus::Restricted));

        let state = AuthorizationState::PushNotifications {
            settings: NotificationSettings::denied(),
            requested: NotificationOptions::ALERT,
        };
        assert_eq!(state.access_status(), None);
    }
}
