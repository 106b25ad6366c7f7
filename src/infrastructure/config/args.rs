use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "kiosk",
    version,
    about = "A self-service ordering kiosk for the terminal",
    long_about = None
)]
/// Command line arguments. Every flag overrides the config file.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = CliArgs::parse_from([
            "kiosk",
            "--config",
            "/etc/kiosk.toml",
            "--log-level",
            "debug",
            "--mouse",
            "false",
        ]);

        assert_eq!(args.config, Some(PathBuf::from("/etc/kiosk.toml")));
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert_eq!(args.mouse, Some(false));
        assert!(args.accent_color.is_none());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
