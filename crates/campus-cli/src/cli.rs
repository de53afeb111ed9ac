use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "Browse paged campus APIs and check sign-in redirects", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a config file (defaults to the user config location)
    #[arg(long, global = true, value_name = "FILE", env = "CAMPUS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one page of a paged list endpoint
    Page(PageArgs),
    /// Show where a completed sign-in would redirect to
    Redirect(RedirectArgs),
}

#[derive(Args)]
pub struct PageArgs {
    /// List endpoint URL (or set CAMPUS_BASE_URL)
    #[arg(long, env = "CAMPUS_BASE_URL")]
    pub url: Option<String>,
    /// Page to fetch, counted from 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long)]
    pub per_page: Option<u32>,
    /// Field to sort on, sent as `sort_order`
    #[arg(long)]
    pub sort: Option<String>,
    /// The endpoint numbers its pages from 0
    #[arg(long, conflicts_with = "one_indexed")]
    pub zero_indexed: bool,
    /// The endpoint numbers its pages from 1, overriding the config file
    #[arg(long)]
    pub one_indexed: bool,
    /// Extra query parameter, as KEY=VALUE (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

#[derive(Args)]
pub struct RedirectArgs {
    /// URL of the sign-in page the user is on
    #[arg(long)]
    pub current_url: String,
    /// Requested redirect target (the `?next=` parameter)
    #[arg(long)]
    pub next: Option<String>,
    /// Third-party auth completion URL, if a provider pipeline is running
    #[arg(long)]
    pub finish_auth_url: Option<String>,
    #[arg(long)]
    pub dashboard_url: Option<String>,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("missing key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
