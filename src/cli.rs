use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "qutebrowser-profile",
    version,
    about = "Pick and launch isolated qutebrowser profiles"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "CMD",
        help = "Menu command to use (default: rofi, then dmenu from PATH)"
    )]
    pub dmenu: Option<String>,
    #[arg(
        long,
        global = true,
        value_name = "CMD",
        default_value = "qutebrowser",
        help = "Browser command to launch"
    )]
    pub qutebrowser: String,
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Directory holding profiles (default: $XDG_DATA_HOME/qutebrowser)"
    )]
    pub profiles_root: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick an existing profile from the menu and launch it.
    Choose(ChooseArgs),
    /// Create a profile (named, or typed into the menu) and launch it.
    New(NewArgs),
    /// Launch an existing profile by name.
    Load(LoadArgs),
    /// List existing profiles.
    List,
}

#[derive(Debug, Args)]
pub struct ChooseArgs {
    #[arg(last = true, help = "Arguments passed through to the browser")]
    pub browser_args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    #[arg(help = "Profile name; prompts with the menu when omitted")]
    pub name: Option<String>,
    #[arg(last = true, help = "Arguments passed through to the browser")]
    pub browser_args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct LoadArgs {
    #[arg(help = "Profile name")]
    pub name: String,
    #[arg(last = true, help = "Arguments passed through to the browser")]
    pub browser_args: Vec<String>,
}
