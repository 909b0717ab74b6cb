use serde::Serialize;
use thiserror::Error;

use crate::status::AccessStatus;

/// Why a request finished without a usable grant.
///
/// Keeps the distinctions the single `granted` bit erases, so callers can
/// tell a user refusal from a parental-controls block or a partial grant.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Refusal {
    #[error("declined at the pre-consent prompt")]
    PreconsentDeclined,
    #[error("denied by the user")]
    Denied,
    #[error("restricted by system policy")]
    Restricted,
    #[error("granted with limited scope only")]
    Limited,
    #[error("provider error: {0}")]
    Provider(String),
}

impl Refusal {
    /// Picks the refusal that best describes a non-authorized status.
    pub(crate) fn classify(status: AccessStatus) -> Self {
        match status {
            AccessStatus::Restricted => Self::Restricted,
            AccessStatus::Limited | AccessStatus::WriteOnly => Self::Limited,
            AccessStatus::NotDetermined | AccessStatus::Denied | AccessStatus::Authorized => {
                Self::Denied
            }
        }
    }
}

/// Final answer of a permission request, delivered exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Whether the capability is usable after the request.
    pub granted: bool,
    /// Present when `granted` is false.
    pub refusal: Option<Refusal>,
}

impl Outcome {
    pub(crate) fn success() -> Self {
        Self {
            granted: true,
            refusal: None,
        }
    }

    pub(crate) fn refused(refusal: Refusal) -> Self {
        Self {
            granted: false,
            refusal: Some(refusal),
        }
    }

    /// Converts the outcome into a `Result` for `?`-style propagation.
    pub fn into_result(self) -> Result<(), Refusal> {
        if self.granted {
            Ok(())
        } else {
            Err(self.refusal.unwrap_or(Refusal::Denied))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_keeps_restriction_and_partial_grants_apart() {
        assert_eq!(
            Refusal::classify(AccessStatus::Restricted),
            Refusal::Restricted
        );
        assert_eq!(Refusal::classify(AccessStatus::Limited), Refusal::Limited);
        assert_eq!(Refusal::classify(AccessStatus::WriteOnly), Refusal::Limited);
        assert_eq!(
            Refusal::classify(AccessStatus::NotDetermined),
            Refusal::Denied
        );
        assert_eq!(Refusal::classify(AccessStatus::Denied), Refusal::Denied);
    }

    #[test]
    fn into_result_round_trips_the_refusal() {
        assert!(Outcome::success().into_result().is_ok());
        assert_eq!(
            Outcome::refused(Refusal::PreconsentDeclined).into_result(),
            Err(Refusal::PreconsentDeclined)
        );
    }

    #[test]
    fn refusals_render_for_end_users() {
        assert_eq!(
            Refusal::Provider("store offline".into()).to_string(),
            "provider error: store offline"
        );
        assert_eq!(
            Refusal::PreconsentDeclined.to_string(),
            "declined at the pre-consent prompt"
        );
    }
}
