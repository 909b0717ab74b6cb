use objc2::rc::Retained;
use objc2_contacts::{CNAuthorizationStatus, CNContactStore, CNEntityType};

use crate::status::AccessStatus;

pub fn init_contact_store() -> Retained<CNContactStore> {
    unsafe { objc2::msg_send![objc2::class!(CNContactStore), new] }
}

fn from_platform(status: CNAuthorizationStatus) -> AccessStatus {
    match status {
        CNAuthorizationStatus::NotDetermined => AccessStatus::NotDetermined,
        CNAuthorizationStatus::Restricted => AccessStatus::Restricted,
        CNAuthorizationStatus::Denied => AccessStatus::Denied,
        CNAuthorizationStatus::Authorized => AccessStatus::Authorized,
        CNAuthorizationStatus::Limited => AccessStatus::Limited,
        _ => AccessStatus::Denied,
    }
}

pub fn authorization_status() -> AccessStatus {
    from_platform(unsafe {
        CNContactStore::authorizationStatusForEntityType(CNEntityType::Contacts)
    })
}

pub fn request_access(store: &CNContactStore) -> (bool, Option<String>) {
    use block2::StackBlock;
    use std::sync::mpsc::channel;

    let (tx, rx) = channel();
    let completion = StackBlock::new(
        move |granted: objc2::runtime::Bool, error: *mut objc2_foundation::NSError| {
            let message = unsafe { error.as_ref() }.map(|e| e.localizedDescription().to_string());
            let _ = tx.send((granted.as_bool(), message));
        },
    );
    unsafe {
        store.requestAccessForEntityType_completionHandler(CNEntityType::Contacts, &completion);
    }

    rx.recv().unwrap_or((false, None))
}
