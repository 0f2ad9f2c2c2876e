use clap::Parser;
use std::path::PathBuf;

/// Build a duplication report from pattern-match results
///
/// Reads `{"repository_info": {...}, "pattern_matches": [...]}` on stdin and
/// writes the report as JSON on stdout. Diagnostics go to stderr.
#[derive(Parser, Debug)]
#[command(name = "dupe-report")]
#[command(version)]
#[command(about = "Build a duplication report from pattern-match results", long_about = None)]
pub struct Args {
    /// Path to a YAML file with threshold overrides
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["dupe-report"]).unwrap();
        assert!(args.config.is_none());
    }

    #[test]
    fn test_config_argument() {
        let args = Args::try_parse_from(["dupe-report", "--config", "rules.yml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("rules.yml")));

        let args = Args::try_parse_from(["dupe-report", "-c", "rules.yml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("rules.yml")));
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Args::try_parse_from(["dupe-report", "--format", "md"]).is_err());
    }

    #[test]
    fn test_config_requires_value() {
        assert!(Args::try_parse_from(["dupe-report", "--config"]).is_err());
    }
}
