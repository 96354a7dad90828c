use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod client;

#[derive(Parser)]
#[command(about = "job board server and terminal client")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the job board API
    Listen,
    /// Log in and remember the token
    Login {
        #[arg(long, env = "JOBBOARD_EMAIL")]
        email: String,
        #[arg(long, env = "JOBBOARD_PASSWORD")]
        password: String,
    },
    /// Forget the stored token
    Logout,
    /// List jobs, optionally filtered by title or company; without flags
    /// the last page and search are shown again
    Jobs {
        #[arg(long, conflicts_with_all = ["next", "prev"])]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        search: Option<String>,
        /// Move one page forward from the last listing
        #[arg(long, conflicts_with = "prev")]
        next: bool,
        /// Move one page back from the last listing
        #[arg(long)]
        prev: bool,
    },
    /// Show one job
    Job { id: u32 },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Login { email, password }) => {
            client::login(&email, &password).await?;
        }
        Some(SubCommandType::Logout) => {
            client::logout()?;
        }
        Some(SubCommandType::Jobs {
            page,
            limit,
            search,
            next,
            prev,
        }) => {
            let nav = client::PageNav::from_flags(page, next, prev);
            client::jobs(nav, limit, search.as_deref()).await?;
        }
        Some(SubCommandType::Job { id }) => {
            client::job(id).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
