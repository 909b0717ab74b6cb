use crate::ffi;
use crate::manifest::UsageDeclarations;

/// Declarations read live from the main bundle's Info.plist.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundleDeclarations;

impl UsageDeclarations for BundleDeclarations {
    fn declares(&self, key: &str) -> bool {
        ffi::foundation::main_bundle_has_info_key(key)
    }
}
