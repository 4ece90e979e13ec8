use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "abook", version)]
#[command(
    about = "Interactive in-memory address book",
    long_about = "Interactive in-memory address book.\n\n\
Commands (typed at the prompt):\n  \
hello | add <name> <phone> | change <name> <old> <new> | remove <name> <phone>\n  \
phone <name> | show all | search <term> | . | exit | close | good bye"
)]
pub struct Cli {
    /// Verbose logging to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Directory holding config.json (defaults to ABOOK_CONFIG_DIR, then the user config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["abook", "-v", "--no-color", "--config-dir", "/tmp/x"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["abook"]);
        assert!(!cli.verbose);
        assert!(!cli.no_color);
        assert!(cli.config_dir.is_none());
    }
}
