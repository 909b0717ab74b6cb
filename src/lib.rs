//! Ask for macOS privacy permissions politely.
//!
//! One blocking façade over the camera, photo library, calendar, contacts
//! and notification authorization services: uniform request/outcome shape,
//! optional pre-consent and failure hooks around the one-shot system
//! prompts, and a boolean "usable now" answer normalized from the very
//! different status spaces the platform reports.
//!
//! The platform services are reached through injected providers, so the
//! orchestration runs anywhere; the real macOS backends live in the
//! `macos` module and the in-memory fakes in [`testing`].
//!
//! ```
//! use politely::{Capability, testing};
//!
//! let broker = testing::broker();
//! assert!(!broker.is_usable(Capability::Camera));
//!
//! let outcome = broker.request(Capability::Camera, None, None);
//! assert!(outcome.granted);
//! assert!(broker.is_usable(Capability::Camera));
//! ```

pub mod broker;
pub mod capability;
pub mod hooks;
pub mod manifest;
pub mod outcome;
pub mod providers;
pub mod status;
pub mod testing;

#[cfg(target_os = "macos")]
mod ffi;
#[cfg(target_os = "macos")]
pub mod macos;

pub use broker::PermissionBroker;
pub use capability::{Capability, EntityKind, NotificationOptions};
pub use hooks::{
    FailureHandler, Preconsent, PreconsentHandler, TerminalFailureNotice, TerminalPreconsent,
};
pub use manifest::{StaticDeclarations, UsageDeclarations};
pub use outcome::{Outcome, Refusal};
pub use providers::{
    CalendarProvider, CameraProvider, ContactsProvider, NotificationProvider,
    PhotoLibraryProvider, ProviderSet,
};
pub use status::{
    AccessStatus, AuthorizationState, NotificationSettings, NotificationStatus, OptionSetting,
};
