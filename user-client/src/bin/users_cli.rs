//! Command-line front end for the users API.
//!
//! ```bash
//! users-cli list
//! users-cli create -n "Ana Ruiz" -e ana@example.com
//! users-cli patch 4 -e ana@nuevo.com
//! users-cli --url http://localhost:8080 delete 4
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use users_client::{UserClient, DEFAULT_BASE_URL};
use users_shared::models::{UserInput, UserPatch};

#[derive(Parser)]
#[command(name = "users-cli")]
#[command(version, about = "Client for the users REST API")]
struct Cli {
    /// Base URL of the API
    #[arg(long, env = "USERS_API_URL", default_value = DEFAULT_BASE_URL)]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    List,
    /// Show one user
    Get { id: u64 },
    /// Create a user
    Create {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
    },
    /// Replace every field of a user
    Update {
        id: u64,
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
    },
    /// Change only the given fields of a user
    Patch {
        id: u64,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Delete a user
    Delete { id: u64 },
    /// Check that the API is up
    Health,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let client = UserClient::new(cli.url);

    let outcome = match cli.command {
        Commands::List => client.list_users().await.map(|users| render(&users)),
        Commands::Get { id } => client.get_user(id).await.map(|user| render(&user)),
        Commands::Create { name, email } => client
            .create_user(&UserInput::new(name, email))
            .await
            .map(|user| render(&user)),
        Commands::Update { id, name, email } => client
            .replace_user(id, &UserInput::new(name, email))
            .await
            .map(|user| render(&user)),
        Commands::Patch { id, name, email } => client
            .patch_user(id, &UserPatch { name, email })
            .await
            .map(|user| render(&user)),
        Commands::Delete { id } => client.delete_user(id).await.map(|user| render(&user)),
        Commands::Health => client.health().await.map(|health| render(&health)),
    };

    match outcome {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn render<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("<unprintable: {err}>"))
}
