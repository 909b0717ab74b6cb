use dialoguer::Confirm;

use crate::capability::Capability;

/// Answer of a pre-consent prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preconsent {
    /// Go on to the system prompt.
    Proceed,
    /// Stop here; the system prompt is never shown and stays available
    /// for a later attempt.
    Decline,
}

/// Shown before the one-shot system prompt, so the app can explain itself
/// while declining is still free of consequence.
pub trait PreconsentHandler {
    fn present(&self, capability: Capability) -> Preconsent;
}

/// Invoked after a refused request. Its job is remediation advice; the
/// outcome is returned to the caller regardless.
pub trait FailureHandler {
    fn handle_failure(&self, capability: Capability);
}

/// Pre-consent prompt on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPreconsent;

impl PreconsentHandler for TerminalPreconsent {
    fn present(&self, capability: Capability) -> Preconsent {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "About to ask macOS for {capability} access. Continue?"
            ))
            .default(true)
            .interact();

        match confirmed {
            Ok(true) => Preconsent::Proceed,
            // No answer and no terminal both count as a decline.
            Ok(false) | Err(_) => Preconsent::Decline,
        }
    }
}

/// Failure notice on stderr pointing at the right System Settings pane.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalFailureNotice;

impl FailureHandler for TerminalFailureNotice {
    fn handle_failure(&self, capability: Capability) {
        eprintln!("Error: {capability} access is required but unavailable");
        eprintln!("Please grant access in:");
        eprintln!("  {}", capability.settings_hint());
    }
}
