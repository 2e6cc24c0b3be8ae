use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version)]
#[command(about = "Console contact manager with a local backup file", long_about = None)]
pub struct Cli {
    /// Directory holding the backup file and config.json
    #[arg(long, env = "ROLODEX_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Contacts per page for `show` (overrides config)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["rolodex"]).unwrap();
        assert!(cli.page_size.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_flags() {
        let cli =
            Cli::try_parse_from(["rolodex", "--data-dir", "/tmp/x", "--page-size", "3", "-v"])
                .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert_eq!(cli.page_size, Some(3));
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_non_numeric_page_size() {
        assert!(Cli::try_parse_from(["rolodex", "--page-size", "many"]).is_err());
    }
}
