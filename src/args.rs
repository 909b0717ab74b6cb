use clap::{Parser, Subcommand, ValueEnum};

use politely::{Capability, EntityKind, NotificationOptions};

#[derive(Parser)]
#[command(name = "politely")]
#[command(about = "Ask for macOS privacy permissions politely", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show whether a permission is usable right now
    Status {
        #[arg(value_enum)]
        target: Target,
        /// Print the resolved state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Request a permission, prompting the user if needed
    Request {
        #[arg(value_enum)]
        target: Target,
        /// Confirm on the terminal before the one-shot system prompt
        #[arg(long)]
        preconsent: bool,
        /// Offer to open System Settings when the request is refused
        #[arg(long)]
        open_settings: bool,
    },
}

/// Requestable permission, as spelled on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Target {
    Camera,
    Photos,
    Calendar,
    Reminders,
    Contacts,
    Notifications,
}

impl Target {
    pub fn capability(self) -> Capability {
        match self {
            Self::Camera => Capability::Camera,
            Self::Photos => Capability::PhotoLibrary,
            Self::Calendar => Capability::Calendar(EntityKind::Events),
            Self::Reminders => Capability::Calendar(EntityKind::Reminders),
            Self::Contacts => Capability::Contacts,
            Self::Notifications => Capability::PushNotifications(
                NotificationOptions::BADGE
                    | NotificationOptions::SOUND
                    | NotificationOptions::ALERT,
            ),
        }
    }
}
