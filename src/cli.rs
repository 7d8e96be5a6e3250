use clap::Parser;
use serde::Serialize;

/// Preview a page load against the live API and print the shaped data.
#[derive(Debug, Parser, Serialize)]
pub struct Cli {
    /// Route to load, e.g. "community/42", "player/118270", "wiki/rules"
    #[serde(skip_serializing)]
    pub route: String,

    /// Override the API base URL from the command line
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}
