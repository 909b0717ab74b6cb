//! Request orchestration over the injected providers.

use crate::capability::Capability;
use crate::hooks::{FailureHandler, Preconsent, PreconsentHandler};
use crate::manifest::UsageDeclarations;
use crate::outcome::{Outcome, Refusal};
use crate::providers::ProviderSet;
use crate::status::AuthorizationState;

/// One façade over the per-capability permission services.
///
/// Resolution re-queries the providers on every call; nothing is cached
/// between requests. The broker is synchronous: a request returns exactly
/// once, after any hooks and the provider call have finished on the
/// calling thread.
pub struct PermissionBroker {
    providers: ProviderSet,
    declarations: Box<dyn UsageDeclarations>,
}

impl PermissionBroker {
    pub fn new(providers: ProviderSet, declarations: Box<dyn UsageDeclarations>) -> Self {
        Self {
            providers,
            declarations,
        }
    }

    /// Queries the current authorization state for `capability`.
    ///
    /// # Panics
    ///
    /// Panics when the app manifest misses the capability's
    /// usage-description key. Prompting without the key is a programming
    /// error the platform punishes with a kill, so it fails fast here.
    #[must_use]
    pub fn resolve(&self, capability: Capability) -> AuthorizationState {
        self.ensure_declared(capability);
        self.current_state(capability)
    }

    /// Whether the capability is usable right now, without prompting.
    ///
    /// # Panics
    ///
    /// Same manifest precondition as [`resolve`](Self::resolve).
    #[must_use]
    pub fn is_usable(&self, capability: Capability) -> bool {
        self.resolve(capability).is_usable()
    }

    /// Runs the full request flow: optional pre-consent, status check,
    /// system prompt if needed, optional failure hook.
    ///
    /// An already-usable capability short-circuits to a granted outcome
    /// without prompting. A declined pre-consent suppresses the system
    /// prompt entirely and skips the failure hook; the one-shot prompt
    /// stays available for a later attempt. The failure hook supplements
    /// the outcome, it never replaces it.
    ///
    /// # Panics
    ///
    /// Same manifest precondition as [`resolve`](Self::resolve), checked
    /// before any hook or provider runs.
    pub fn request(
        &self,
        capability: Capability,
        preconsent: Option<&dyn PreconsentHandler>,
        on_failure: Option<&dyn FailureHandler>,
    ) -> Outcome {
        self.ensure_declared(capability);

        if let Some(handler) = preconsent {
            if handler.present(capability) == Preconsent::Decline {
                tracing::debug!(
                    capability = %capability,
                    "declined at pre-consent, system prompt skipped"
                );
                return Outcome::refused(Refusal::PreconsentDeclined);
            }
        }

        let resolved = self.current_state(capability);
        if resolved.is_usable() {
            tracing::debug!(capability = %capability, "already authorized");
            return Outcome::success();
        }

        let outcome = self.request_from_provider(capability, &resolved);

        if outcome.granted {
            tracing::info!(capability = %capability, "access granted");
        } else {
            tracing::warn!(
                capability = %capability,
                refusal = ?outcome.refusal,
                "access refused"
            );
            if let Some(handler) = on_failure {
                handler.handle_failure(capability);
            }
        }

        outcome
    }

    fn ensure_declared(&self, capability: Capability) {
        if let Some(key) = capability.usage_key() {
            assert!(
                self.declarations.declares(key),
                "requesting {capability} access requires {key} in the app's Info.plist"
            );
        }
    }

    fn current_state(&self, capability: Capability) -> AuthorizationState {
        match capability {
            Capability::Camera => AuthorizationState::Camera(self.providers.camera.status()),
            Capability::PhotoLibrary => {
                AuthorizationState::PhotoLibrary(self.providers.photo_library.status())
            }
            Capability::Calendar(entity) => {
                AuthorizationState::Calendar(entity, self.providers.calendar.status(entity))
            }
            Capability::Contacts => AuthorizationState::Contacts(self.providers.contacts.status()),
            Capability::PushNotifications(requested) => AuthorizationState::PushNotifications {
                settings: self.providers.notifications.settings(),
                requested,
            },
        }
    }

    fn request_from_provider(
        &self,
        capability: Capability,
        resolved: &AuthorizationState,
    ) -> Outcome {
        // Flag-only providers cannot say why they refused; classify from
        // the status observed before the prompt.
        let fallback = resolved
            .access_status()
            .map(Refusal::classify)
            .unwrap_or(Refusal::Denied);

        match capability {
            Capability::Camera => {
                if self.providers.camera.request_access() {
                    Outcome::success()
                } else {
                    Outcome::refused(fallback)
                }
            }
            Capability::PhotoLibrary => {
                let status = self.providers.photo_library.request_access();
                if status.is_authorized() {
                    Outcome::success()
                } else {
                    Outcome::refused(Refusal::classify(status))
                }
            }
            Capability::Calendar(entity) => {
                let (granted, error) = self.providers.calendar.request_access(entity);
                Self::flag_outcome(granted, error, fallback)
            }
            Capability::Contacts => {
                let (granted, error) = self.providers.contacts.request_access();
                Self::flag_outcome(granted, error, fallback)
            }
            Capability::PushNotifications(options) => {
                let (granted, error) = self.providers.notifications.request_authorization(options);
                Self::flag_outcome(granted, error, Refusal::Denied)
            }
        }
    }

    fn flag_outcome(granted: bool, error: Option<String>, refusal: Refusal) -> Outcome {
        if let Some(message) = error {
            Outcome::refused(Refusal::Provider(message))
        } else if granted {
            Outcome::success()
        } else {
            Outcome::refused(refusal)
        }
    }
}
