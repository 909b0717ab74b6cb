use core::ptr::NonNull;

use objc2::rc::Retained;
use objc2_user_notifications::{
    UNAuthorizationOptions, UNAuthorizationStatus, UNNotificationSetting, UNNotificationSettings,
    UNUserNotificationCenter,
};

use crate::capability::NotificationOptions;
use crate::status::{self, NotificationStatus, OptionSetting};

/// The current center is only reachable from a bundled app; calling this
/// from a bare executable raises an Objective-C exception.
pub fn current_center() -> Retained<UNUserNotificationCenter> {
    unsafe { UNUserNotificationCenter::currentNotificationCenter() }
}

fn from_platform_status(status: UNAuthorizationStatus) -> NotificationStatus {
    match status {
        UNAuthorizationStatus::NotDetermined => NotificationStatus::NotDetermined,
        UNAuthorizationStatus::Denied => NotificationStatus::Denied,
        UNAuthorizationStatus::Authorized => NotificationStatus::Authorized,
        UNAuthorizationStatus::Provisional => NotificationStatus::Provisional,
        UNAuthorizationStatus::Ephemeral => NotificationStatus::Ephemeral,
        _ => NotificationStatus::Denied,
    }
}

fn from_platform_setting(setting: UNNotificationSetting) -> OptionSetting {
    match setting {
        UNNotificationSetting::NotSupported => OptionSetting::NotSupported,
        UNNotificationSetting::Disabled => OptionSetting::Disabled,
        UNNotificationSetting::Enabled => OptionSetting::Enabled,
        _ => OptionSetting::NotSupported,
    }
}

pub fn notification_settings(center: &UNUserNotificationCenter) -> status::NotificationSettings {
    use block2::StackBlock;
    use std::sync::mpsc::channel;

    let (tx, rx) = channel();
    let completion = StackBlock::new(move |settings: NonNull<UNNotificationSettings>| {
        // Copy the fields out inside the block; the settings object does
        // not cross threads.
        let snapshot = unsafe {
            let settings = settings.as_ref();
            status::NotificationSettings {
                status: from_platform_status(settings.authorizationStatus()),
                badge: from_platform_setting(settings.badgeSetting()),
                sound: from_platform_setting(settings.soundSetting()),
                alert: from_platform_setting(settings.alertSetting()),
                car_play: from_platform_setting(settings.carPlaySetting()),
                critical_alert: from_platform_setting(settings.criticalAlertSetting()),
                provides_app_notification_settings: settings.providesAppNotificationSettings(),
            }
        };
        let _ = tx.send(snapshot);
    });
    unsafe {
        center.getNotificationSettingsWithCompletionHandler(&completion);
    }

    rx.recv()
        .unwrap_or_else(|_| status::NotificationSettings::denied())
}

pub fn request_authorization(
    center: &UNUserNotificationCenter,
    options: NotificationOptions,
) -> (bool, Option<String>) {
    use block2::StackBlock;
    use std::sync::mpsc::channel;

    let platform_options = UNAuthorizationOptions::from_bits_retain(options.bits() as usize);

    let (tx, rx) = channel();
    let completion = StackBlock::new(
        move |granted: objc2::runtime::Bool, error: *mut objc2_foundation::NSError| {
            let message = unsafe { error.as_ref() }.map(|e| e.localizedDescription().to_string());
            let _ = tx.send((granted.as_bool(), message));
        },
    );
    unsafe {
        center.requestAuthorizationWithOptions_completionHandler(platform_options, &completion);
    }

    rx.recv().unwrap_or((false, None))
}
