//! forge - page client CLI
//!
//! Runs the forge landing page's client operations from a terminal.
//!
//! # Examples
//!
//! ```bash
//! # Render the asset list
//! forge --settings forge.json --page-url https://example.com/forge/ assets
//!
//! # Bind an identity locally (and relay it, with consent)
//! forge identity bind --email me@example.com --token s3cret --consent
//! ```

mod cli;
mod commands;
mod identity_commands;

use crate::{cli::Cli, commands::Commands, identity_commands::IdentityCommands};

use forge_client::{FileStorage, ForgePage, IdentityForm};
use forge_config::{InjectedSettings, PageSettings};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde_json::{Value, json};
use url::Url;

const STORAGE_DIR_NAME: &str = "forge";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let page_url = match cli.page_url.as_deref().map(Url::parse).transpose() {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Error: invalid --page-url: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let injected = match cli.settings {
        Some(ref path) => match InjectedSettings::load(path) {
            Ok(injected) => injected,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => InjectedSettings::default(),
    };

    let settings = PageSettings::resolve(page_url.as_ref(), &injected);
    let storage = Arc::new(FileStorage::new(
        cli.storage_dir.clone().unwrap_or_else(default_storage_dir),
    ));
    let mut page = ForgePage::initialize(settings, page_url, storage);

    let result: Result<Value, forge_client::ClientError> = match cli.command {
        Commands::Assets => {
            let rendered = page.load_assets().await;
            Ok(json!(rendered))
        }

        Commands::Identity { action } => match action {
            IdentityCommands::Bind {
                email,
                handle,
                token,
                consent,
            } => {
                page.reveal_access();
                let form = IdentityForm {
                    email,
                    handle,
                    token,
                    consent,
                };
                page.submit_identity(&form).await.map(|outcome| {
                    let status = outcome.status_line();
                    json!({ "outcome": outcome, "status": status })
                })
            }
            IdentityCommands::Clear => page
                .clear_identity()
                .map(|status| json!({ "status": status })),
            IdentityCommands::Status => Ok(json!({ "status": page.identity_status() })),
        },

        Commands::Signup { email } => {
            let outcome = page.submit_signup(&email).await;
            let status = outcome.status_line();
            let reset_form = outcome.resets_form();
            Ok(json!({
                "outcome": outcome,
                "status": status,
                "reset_form": reset_form,
            }))
        }
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing output: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Platform data directory, falling back to ./.forge/storage.
fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(STORAGE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".forge").join("storage"))
}
