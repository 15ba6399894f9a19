//! Backand API CLI binary.
//!
//! A command-line interface for interacting with the Backand API.

use backand::cli::{access_for, Cli, Command};
use backand::output::{render, render_page};
use backand::{Access, ApiResponse, BackandClient, BackandError, PageParams};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match BackandClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, BackandError::ConfigMissing(_)) {
                eprintln!(
                    "Hint: Set BACKAND_USERNAME, BACKAND_PASSWORD, BACKAND_APPNAME and BACKAND_ANONYMOUS_TOKEN"
                );
            }
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run a command; `Ok(false)` means the server returned an error payload.
async fn run(client: &BackandClient, cli: Cli) -> backand::Result<bool> {
    match cli.command {
        Command::Token => {
            let response = client.get_token().await;
            Ok(print_response(&response, |body| render(body, cli.json)))
        }
        Command::Create { object_type, data } => {
            let response = client.create_object(&object_type, data).await?;
            Ok(print_response(&response, |body| render(body, cli.json)))
        }
        Command::List {
            object_type,
            page_size,
            page_number,
            auth,
        } => {
            let access = access_for(auth);
            if !authenticate(client, access).await {
                return Ok(false);
            }
            let params = PageParams::new(page_size, page_number);
            let response = client.get_object_list(&object_type, params, access).await?;
            Ok(print_response(&response, |body| {
                render_page(body, params, cli.json)
            }))
        }
        Command::Get {
            object_type,
            id,
            auth,
        } => {
            let access = access_for(auth);
            if !authenticate(client, access).await {
                return Ok(false);
            }
            let response = client.get_single_object(&object_type, &id, access).await?;
            Ok(print_response(&response, |body| render(body, cli.json)))
        }
    }
}

/// Reads do not fetch a token themselves; the CLI does it for `--auth`.
async fn authenticate(client: &BackandClient, access: Access) -> bool {
    if access == Access::Anonymous {
        return true;
    }
    let token = client.get_token().await;
    if !token.is_success() {
        eprintln!("Error: token request failed");
        eprintln!("{}", render(token.body(), true));
    }
    token.is_success()
}

fn print_response(response: &ApiResponse, format: impl Fn(&serde_json::Value) -> String) -> bool {
    match response {
        ApiResponse::Success { body, .. } => {
            println!("{}", format(body));
            true
        }
        ApiResponse::Failure { status, body } => {
            match status {
                Some(code) => eprintln!("Error: Backand returned HTTP {code}"),
                None => eprintln!("Error: request to Backand failed"),
            }
            eprintln!("{}", render(body, true));
            false
        }
    }
}
