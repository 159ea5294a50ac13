// CLI module for replygen

use clap::Parser;

/// replygen - tweet reply relay for the Fireworks completion API
#[derive(Parser, Debug)]
#[command(name = "replygen", version, about, long_about = None)]
pub struct Args {
    /// Override the address the server binds to
    #[arg(long)]
    pub host: Option<String>,

    /// Override the listening port (takes precedence over PORT)
    #[arg(long)]
    pub port: Option<u16>,
}
