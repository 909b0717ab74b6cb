//! macOS backends: system providers, bundle-backed declarations and the
//! alert-based hook implementations.

mod alerts;
mod bundle;
mod providers;

pub use alerts::{AlertPreconsent, SettingsAlert};
pub use bundle::BundleDeclarations;
pub use providers::{
    SystemCalendar, SystemCamera, SystemContacts, SystemNotifications, SystemPhotoLibrary,
};

use crate::broker::PermissionBroker;
use crate::capability::Capability;
use crate::providers::ProviderSet;

/// Broker wired to the real platform services and the main bundle's
/// Info.plist declarations.
#[must_use]
pub fn system_broker() -> PermissionBroker {
    PermissionBroker::new(
        ProviderSet {
            camera: Box::new(SystemCamera),
            photo_library: Box::new(SystemPhotoLibrary),
            calendar: Box::new(SystemCalendar::new()),
            contacts: Box::new(SystemContacts::new()),
            notifications: Box::new(SystemNotifications::new()),
        },
        Box::new(BundleDeclarations),
    )
}

/// Opens the System Settings pane where the user can change the
/// permission by hand.
pub fn open_settings(capability: Capability) -> bool {
    crate::ffi::app_kit::open_url(capability.settings_url())
}
