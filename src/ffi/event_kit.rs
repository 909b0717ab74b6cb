use objc2::rc::Retained;
use objc2_event_kit::{EKAuthorizationStatus, EKEntityType, EKEventStore};

use crate::capability::EntityKind;
use crate::status::AccessStatus;

pub fn init_event_store() -> Retained<EKEventStore> {
    unsafe { objc2::msg_send![objc2::class!(EKEventStore), new] }
}

fn entity_type(entity: EntityKind) -> EKEntityType {
    match entity {
        EntityKind::Events => EKEntityType::Event,
        EntityKind::Reminders => EKEntityType::Reminder,
    }
}

fn from_platform(status: EKAuthorizationStatus) -> AccessStatus {
    match status {
        EKAuthorizationStatus::NotDetermined => AccessStatus::NotDetermined,
        EKAuthorizationStatus::Restricted => AccessStatus::Restricted,
        EKAuthorizationStatus::Denied => AccessStatus::Denied,
        EKAuthorizationStatus::FullAccess => AccessStatus::Authorized,
        EKAuthorizationStatus::WriteOnly => AccessStatus::WriteOnly,
        _ => AccessStatus::Denied,
    }
}

pub fn authorization_status(entity: EntityKind) -> AccessStatus {
    from_platform(unsafe { EKEventStore::authorizationStatusForEntityType(entity_type(entity)) })
}

pub fn request_full_access(store: &EKEventStore, entity: EntityKind) -> (bool, Option<String>) {
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
        match entity {
            EntityKind::Events => {
                store.requestFullAccessToEventsWithCompletion(&completion as *const _ as *mut _)
            }
            EntityKind::Reminders => {
                store.requestFullAccessToRemindersWithCompletion(&completion as *const _ as *mut _)
            }
        }
    }

    rx.recv().unwrap_or((false, None))
}
