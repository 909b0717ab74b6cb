use objc2::msg_send;
use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2_foundation::{NSBundle, NSString};

pub fn main_bundle_has_info_key(key: &str) -> bool {
    let key = NSString::from_str(key);
    unsafe {
        let bundle: Retained<NSBundle> = msg_send![objc2::class!(NSBundle), mainBundle];
        let value: Option<Retained<AnyObject>> =
            msg_send![&*bundle, objectForInfoDictionaryKey: &*key];
        value.is_some()
    }
}
