use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pushrelay - background push to desktop notification relay
#[derive(Parser)]
#[command(name = "pushrelay")]
#[command(about = "Relays background push messages to desktop notifications")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Push one synthetic payload through the relay to verify the display path
    TestNotification {
        /// Notification title
        #[arg(long, default_value = "Pushrelay Test")]
        title: String,

        /// Notification body
        #[arg(long, default_value = "Desktop notifications are working correctly!")]
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bare_invocation() {
        let cli = Cli::parse_from(["pushrelay"]);
        assert!(cli.command.is_none());
        assert!(!cli.debug);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parses_test_notification_subcommand() {
        let cli = Cli::parse_from([
            "pushrelay",
            "--debug",
            "test-notification",
            "--title",
            "T",
            "--body",
            "B",
        ]);

        assert!(cli.debug);
        match cli.command {
            Some(Commands::TestNotification { title, body }) => {
                assert_eq!(title, "T");
                assert_eq!(body, "B");
            }
            None => panic!("expected test-notification subcommand"),
        }
    }
}
