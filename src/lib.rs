//! Library root for `status-bot`.
//!
//! Status-bot answers health questions about a Jira project and a GitHub
//! repository:
//! - Ticket status lookups
//! - Pull-request reviewer and comment summaries
//! - Open pull-request and blocked-ticket listings
//!
//! Queries are classified against a fixed pattern priority list and
//! dispatched to a formatter that calls the remote API and renders a text
//! block. The architecture is built around extensible traits that allow
//! different issue trackers and code hosts to be plugged in.

pub mod base;
pub mod interaction;
pub mod prelude;
pub mod runtime;
pub mod server;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the status-bot web shell:
/// - Creates the runtime context with the issue-tracker and code-host clients
/// - Binds the web shell and serves queries until shutdown
pub async fn start(config: Config) -> Void {
    info!("Starting status-bot ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config);

    // Start the web shell.
    server::serve(runtime).await
}
