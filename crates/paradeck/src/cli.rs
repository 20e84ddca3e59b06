use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "paradeck")]
#[command(author, version, about)]
#[command(long_about = "An animated presentation on computing paradigms.\n\n\
    Walks through high-performance, distributed, cluster and grid computing with\n\
    live diagrams.\n\n\
    Examples:\n  \
    paradeck                    Open the start screen\n  \
    paradeck --windowed         Never switch to fullscreen\n  \
    paradeck --reduced-motion   Start with diagrams paused\n  \
    paradeck slides             List the slides")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Stay in a window; fullscreen requests are refused
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start diagrams paused and skip entrance animations
    #[arg(long, global = false)]
    pub reduced_motion: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the slides in presentation order
    Slides,

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (defaults.fullscreen, defaults.reduced_motion, defaults.speed)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    /// Log level implied by `-q` and the `-v` count.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Slides) => crate::commands::slides::run(),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::version::run(self.quiet);
                Ok(())
            }
            None => {
                let config = crate::config::Config::load_or_default();
                let settings = crate::app::Settings {
                    allow_fullscreen: !self.windowed && config.fullscreen(),
                    reduced_motion: self.reduced_motion || config.reduced_motion(),
                    speed: config.speed(),
                };
                crate::app::run(settings)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["paradeck"], tracing::Level::WARN)]
    #[case(&["paradeck", "-v"], tracing::Level::DEBUG)]
    #[case(&["paradeck", "-vv"], tracing::Level::TRACE)]
    #[case(&["paradeck", "-q", "-v"], tracing::Level::ERROR)]
    fn test_log_level(#[case] args: &[&str], #[case] expected: tracing::Level) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.log_level(), expected);
    }

    #[test]
    fn test_launch_flags() {
        let cli = Cli::try_parse_from(["paradeck", "--windowed", "--reduced-motion"]).unwrap();
        assert!(cli.windowed);
        assert!(cli.reduced_motion);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_config_set_subcommand() {
        let cli = Cli::try_parse_from(["paradeck", "config", "set", "defaults.speed", "2"]).unwrap();
        match cli.command {
            Some(Commands::Config {
                command: ConfigCommands::Set { key, value },
            }) => {
                assert_eq!(key, "defaults.speed");
                assert_eq!(value, "2");
            }
            _ => panic!("expected config set"),
        }
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
