use objc2_av_foundation::{AVAuthorizationStatus, AVCaptureDevice, AVMediaTypeVideo};

use crate::status::AccessStatus;

fn from_platform(status: AVAuthorizationStatus) -> AccessStatus {
    match status {
        AVAuthorizationStatus::NotDetermined => AccessStatus::NotDetermined,
        AVAuthorizationStatus::Restricted => AccessStatus::Restricted,
        AVAuthorizationStatus::Denied => AccessStatus::Denied,
        AVAuthorizationStatus::Authorized => AccessStatus::Authorized,
        _ => AccessStatus::Denied,
    }
}

pub fn video_authorization_status() -> AccessStatus {
    from_platform(unsafe { AVCaptureDevice::authorizationStatusForMediaType(AVMediaTypeVideo) })
}

pub fn request_video_access() -> bool {
    use block2::StackBlock;
    use std::sync::mpsc::channel;

    let (tx, rx) = channel();
    unsafe {
        AVCaptureDevice::requestAccessForMediaType_completionHandler(
            AVMediaTypeVideo,
            &StackBlock::new(move |granted: objc2::runtime::Bool| {
                let _ = tx.send(granted.as_bool());
            }),
        );
    }

    rx.recv().unwrap_or(false)
}
