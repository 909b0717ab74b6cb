use objc2::msg_send;
use objc2::rc::Retained;
use objc2_app_kit::{NSAlert, NSAlertFirstButtonReturn, NSButton, NSWorkspace};
use objc2_foundation::{MainThreadMarker, NSString, NSURL};

/// Runs a two-button modal alert and reports whether the first (confirm)
/// button was chosen.
pub fn run_choice_alert(
    mtm: MainThreadMarker,
    message: &str,
    informative: &str,
    confirm: &str,
    dismiss: &str,
) -> bool {
    let alert = NSAlert::new(mtm);
    unsafe {
        let _: () = msg_send![&*alert, setMessageText: &*NSString::from_str(message)];
        let _: () = msg_send![&*alert, setInformativeText: &*NSString::from_str(informative)];
        let _: Retained<NSButton> =
            msg_send![&*alert, addButtonWithTitle: &*NSString::from_str(confirm)];
        let _: Retained<NSButton> =
            msg_send![&*alert, addButtonWithTitle: &*NSString::from_str(dismiss)];
        let response: isize = msg_send![&*alert, runModal];
        response == NSAlertFirstButtonReturn
    }
}

pub fn open_url(url: &str) -> bool {
    match NSURL::URLWithString(&NSString::from_str(url)) {
        Some(url) => NSWorkspace::sharedWorkspace().openURL(&url),
        None => false,
    }
}
