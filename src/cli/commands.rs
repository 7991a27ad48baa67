use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `cmdrunner` - run allow-listed local commands from a loopback web form.
#[derive(Parser, Debug)]
#[command(name = "cmdrunner")]
#[command(version = "0.1.0")]
#[command(about = "Run allow-listed local commands with a timeout.", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.cmdrunner/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web form
    Serve {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Run one command and print the result
    Run {
        /// Command words, joined with single spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}
