use crate::marker::DEFAULT_MARKER;
use crate::provider::hcloud::DEFAULT_ENDPOINT;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hcloud-ssh-sync",
    about = "Sync your SSH config with the servers of your Hetzner Cloud projects",
    long_about = "hcloud-ssh-sync writes one SSH Host block per Hetzner Cloud server into a
marker-delimited region of your SSH config.

For each project in the configuration file it:
  • Lists the project's servers through the Hetzner Cloud API
  • Resolves user, identity file and extra directive per server
    (custom_map entry > project default > nothing)
  • Renders a Host block with the server's public IPv4 address

The blocks are written between:
  ##START <marker> ##
  ##END <marker> ##
The region is replaced if present and appended otherwise. Everything
outside it is left untouched.

Configuration file (JSON):
  {\"projects\": [{\"name\": \"prod\", \"token\": \"...\",
    \"default_user\": \"root\", \"default_key\": \"~/.ssh/id_ed25519\",
    \"default_additional\": \"\",
    \"custom_map\": [{\"name\": \"db1\", \"user\": \"postgres\"}]}]}

Examples:
  # Preview the resulting SSH config
  hcloud-ssh-sync --printonly

  # Update a specific file with a custom marker
  hcloud-ssh-sync --ssh-config-file ~/.ssh/config.d/hcloud --marker PROD",
    version,
    author
)]
pub struct Cli {
    /// Path to the projects configuration file
    #[arg(long, default_value = "config.json", value_hint = clap::ValueHint::FilePath)]
    pub config_file: PathBuf,

    /// SSH config file to update (a leading ~/ is expanded)
    #[arg(long, default_value = "~/.ssh/config", value_hint = clap::ValueHint::FilePath)]
    pub ssh_config_file: PathBuf,

    /// Name of the replacement marker
    #[arg(long, default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Print the new SSH config to stdout instead of writing it
    #[arg(long = "printonly")]
    pub print_only: bool,

    /// Create a timestamped backup of the SSH config before writing
    #[arg(short, long)]
    pub backup: bool,

    /// Hetzner Cloud API endpoint
    #[arg(long, env = "HCLOUD_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Timeout in seconds for each API request (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable debug output (shows INFO and DEBUG messages)
    #[arg(long)]
    pub debug: bool,

    /// Enable trace output (shows all log messages including TRACE)
    #[arg(short = 't', long)]
    pub trace: bool,
}
