use objc2_photos::{PHAccessLevel, PHAuthorizationStatus, PHPhotoLibrary};

use crate::status::AccessStatus;

fn from_platform(status: PHAuthorizationStatus) -> AccessStatus {
    match status {
        PHAuthorizationStatus::NotDetermined => AccessStatus::NotDetermined,
        PHAuthorizationStatus::Restricted => AccessStatus::Restricted,
        PHAuthorizationStatus::Denied => AccessStatus::Denied,
        PHAuthorizationStatus::Authorized => AccessStatus::Authorized,
        PHAuthorizationStatus::Limited => AccessStatus::Limited,
        _ => AccessStatus::Denied,
    }
}

pub fn authorization_status() -> AccessStatus {
    from_platform(unsafe {
        PHPhotoLibrary::authorizationStatusForAccessLevel(PHAccessLevel::ReadWrite)
    })
}

/// Prompts for read/write library access and reports where the status
/// settled, which may be a limited grant rather than a yes or no.
pub fn request_authorization() -> AccessStatus {
    use block2::StackBlock;
    use std::sync::mpsc::channel;

    let (tx, rx) = channel();
    unsafe {
        PHPhotoLibrary::requestAuthorizationForAccessLevel_handler(
            PHAccessLevel::ReadWrite,
            &StackBlock::new(move |status: PHAuthorizationStatus| {
                let _ = tx.send(from_platform(status));
            }),
        );
    }

    rx.recv().unwrap_or(AccessStatus::Denied)
}
