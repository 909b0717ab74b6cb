use objc2_foundation::MainThreadMarker;

use crate::capability::Capability;
use crate::ffi;
use crate::hooks::{FailureHandler, Preconsent, PreconsentHandler};

/// Pre-consent prompt as a modal alert. Construction demands a
/// [`MainThreadMarker`], so a broker using this hook can only be driven
/// from the main thread.
#[derive(Debug, Clone, Copy)]
pub struct AlertPreconsent {
    mtm: MainThreadMarker,
}

impl AlertPreconsent {
    #[must_use]
    pub fn new(mtm: MainThreadMarker) -> Self {
        Self { mtm }
    }
}

impl PreconsentHandler for AlertPreconsent {
    fn present(&self, capability: Capability) -> Preconsent {
        let message = format!("Allow access to your {capability}?");
        let informative = format!(
            "The next prompt comes from macOS. Declining here keeps \
             {capability} access off without using up that prompt."
        );
        if ffi::app_kit::run_choice_alert(self.mtm, &message, &informative, "Allow", "Cancel") {
            Preconsent::Proceed
        } else {
            Preconsent::Decline
        }
    }
}

/// Failure alert offering to open the matching System Settings pane.
#[derive(Debug, Clone, Copy)]
pub struct SettingsAlert {
    mtm: MainThreadMarker,
}

impl SettingsAlert {
    #[must_use]
    pub fn new(mtm: MainThreadMarker) -> Self {
        Self { mtm }
    }
}

impl FailureHandler for SettingsAlert {
    fn handle_failure(&self, capability: Capability) {
        let message = format!("Access to your {capability} is unavailable");
        let informative = format!("You can grant it under {}.", capability.settings_hint());
        if ffi::app_kit::run_choice_alert(self.mtm, &message, &informative, "Open Settings", "Ok") {
            ffi::app_kit::open_url(capability.settings_url());
        }
    }
}
