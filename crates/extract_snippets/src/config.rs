// crates/extract_snippets/src/config.rs

use std::env;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use comment_marker_snippets::ExtractOptions;

/// Runtime configuration composed from CLI flags and environment overrides.
#[derive(Clone, Debug, Default)]
pub struct RunConfig {
    pub paths: Vec<PathBuf>,
    pub name: Option<String>,
    pub extensions: Vec<String>, // empty == every walked file
    pub strip_markers: bool,
    pub extended_styles: bool, // mirrors SNIPPET_EXTENDED_STYLES
    pub strict: bool,          // mirrors SNIPPET_STRICT
    pub verbose: bool,
}

pub fn build_cli() -> Command {
    Command::new("extract_snippets")
        .version("0.1.0")
        .about("Extracts snippets bounded by paired [name] marker comments")
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .required(true)
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Files or directories to scan"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .num_args(1)
                .help("Only print the snippet with this marker name"),
        )
        .arg(
            Arg::new("ext")
                .long("ext")
                .action(ArgAction::Append)
                .help("Only scan walked files with this extension (repeatable)"),
        )
        .arg(
            Arg::new("strip_markers")
                .long("strip-markers")
                .help("Remove nested marker lines from printed snippets")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extended_styles")
                .long("extended-styles")
                .help("Also recognize ## and single-line HTML comment markers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit with status 1 when any marker diagnostic is reported")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

impl RunConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        RunConfig {
            paths: matches
                .get_many::<PathBuf>("paths")
                .unwrap_or_default()
                .cloned()
                .collect(),
            name: matches.get_one::<String>("name").cloned(),
            extensions: matches
                .get_many::<String>("ext")
                .unwrap_or_default()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
            strip_markers: matches.get_flag("strip_markers"),
            extended_styles: matches.get_flag("extended_styles")
                || env_flag("SNIPPET_EXTENDED_STYLES"),
            strict: matches.get_flag("strict") || env_flag("SNIPPET_STRICT"),
            verbose: matches.get_flag("verbose"),
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        if self.extended_styles {
            ExtractOptions::extended()
        } else {
            ExtractOptions::default()
        }
    }
}

/// Any non-empty value other than "0" turns the flag on.
fn env_flag(var: &str) -> bool {
    env::var(var)
        .map(|value| !value.is_empty() && value != "0")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use comment_marker_snippets::CommentStyle;

    fn parse(args: &[&str]) -> RunConfig {
        let matches = build_cli().try_get_matches_from(args).unwrap();
        RunConfig::from_matches(&matches)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["extract_snippets", "src"]);
        assert_eq!(config.paths, vec![PathBuf::from("src")]);
        assert_eq!(config.name, None);
        assert!(config.extensions.is_empty());
        assert!(!config.strip_markers);
        assert!(!config.verbose);
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "extract_snippets",
            "--name",
            "marker 4",
            "--ext",
            ".rs",
            "--ext",
            "cpp",
            "--strip-markers",
            "--extended-styles",
            "--strict",
            "--verbose",
            "a.rs",
            "docs",
        ]);
        assert_eq!(config.paths, vec![PathBuf::from("a.rs"), PathBuf::from("docs")]);
        assert_eq!(config.name.as_deref(), Some("marker 4"));
        assert_eq!(config.extensions, vec!["rs".to_string(), "cpp".to_string()]);
        assert!(config.strip_markers && config.extended_styles && config.strict && config.verbose);
        assert_eq!(config.extract_options().styles, CommentStyle::EXTENDED.to_vec());
    }

    #[test]
    fn test_paths_are_required() {
        assert!(build_cli().try_get_matches_from(["extract_snippets"]).is_err());
    }
}
