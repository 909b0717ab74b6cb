//! Thin safe wrappers around the platform frameworks. Completion blocks
//! are bridged onto the calling thread over channels, so every wrapper
//! returns synchronously.

pub mod app_kit;
pub mod av_foundation;
pub mod contacts;
pub mod event_kit;
pub mod foundation;
pub mod photos;
pub mod user_notifications;
