// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "walkthrough")]
#[command(about = "First-person portfolio walkthrough", long_about = None)]
pub struct Cli {
    /// JSON controller configuration; built-in room layout when omitted
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "dump-config", default_value = "false")]
    pub dump_config: bool,

    /// Disable UI event logging
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Initial window width
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["walkthrough"]);
        assert!(cli.config.is_none());
        assert!(!cli.no_ui);
        assert_eq!((cli.width, cli.height), (1280, 720));
    }

    #[test]
    fn config_path_and_flags() {
        let cli = Cli::parse_from(["walkthrough", "--config", "room.json", "--no-ui", "--width", "800"]);
        assert_eq!(cli.config, Some(PathBuf::from("room.json")));
        assert!(cli.no_ui);
        assert_eq!(cli.width, 800);
    }
}
