mod args;

use args::{Cli, Command};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    std::process::exit(run(cli));
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "politely=warn".into()),
    );
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(target_os = "macos")]
fn run(cli: Cli) -> i32 {
    use objc2_foundation::MainThreadMarker;
    use politely::hooks::{
        FailureHandler, PreconsentHandler, TerminalFailureNotice, TerminalPreconsent,
    };
    use politely::macos::{self, SettingsAlert};

    let broker = macos::system_broker();

    match cli.command {
        Command::Status { target, json } => {
            let capability = target.capability();
            let state = broker.resolve(capability);
            if json {
                match serde_json::to_string_pretty(&state) {
                    Ok(encoded) => println!("{encoded}"),
                    Err(e) => {
                        eprintln!("Error: failed to encode state: {e}");
                        return 1;
                    }
                }
            } else {
                println!(
                    "{capability}: {}",
                    if state.is_usable() { "usable" } else { "not usable" }
                );
            }
            0
        }
        Command::Request {
            target,
            preconsent,
            open_settings,
        } => {
            let capability = target.capability();

            let terminal_preconsent = TerminalPreconsent;
            let preconsent_hook: Option<&dyn PreconsentHandler> = if preconsent {
                Some(&terminal_preconsent)
            } else {
                None
            };

            let terminal_notice = TerminalFailureNotice;
            let settings_alert;
            let failure_hook: Option<&dyn FailureHandler> = if open_settings {
                match MainThreadMarker::new() {
                    Some(mtm) => {
                        settings_alert = SettingsAlert::new(mtm);
                        Some(&settings_alert)
                    }
                    None => Some(&terminal_notice),
                }
            } else {
                Some(&terminal_notice)
            };

            let outcome = broker.request(capability, preconsent_hook, failure_hook);
            if outcome.granted {
                println!("{capability}: granted");
                0
            } else {
                match outcome.refusal {
                    Some(refusal) => println!("{capability}: {refusal}"),
                    None => println!("{capability}: refused"),
                }
                1
            }
        }
    }
}

#[cfg(not(target_os = "macos"))]
fn run(cli: Cli) -> i32 {
    let capability = match cli.command {
        Command::Status { target, .. } | Command::Request { target, .. } => target.capability(),
    };
    eprintln!("Error: cannot reach the {capability} authorization service on this platform");
    eprintln!("politely drives the macOS privacy prompts and must run on macOS");
    1
}
