use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bm", bin_name = "bm", version)]
#[command(about = "Bookmark a URL as a readable markdown or HTML document", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a bookmark
    #[command(alias = "a")]
    Add(AddArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// URL to bookmark
    #[arg(short, long)]
    pub url: Option<String>,

    /// Collect tags, quotes and comments interactively
    #[arg(short, long)]
    pub edit: bool,

    /// Output format: md or html (default from config, "html" out of the box)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Write to a file in DIR instead of stdout; without DIR, use the journal directory
    #[arg(short, long, value_name = "DIR", num_args = 0..=1)]
    pub output: Option<Option<PathBuf>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn add_args(cli: Cli) -> AddArgs {
        match cli.command {
            Some(Commands::Add(args)) => args,
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let cli = parse(&["bm"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_add_minimal() {
        let args = add_args(parse(&["bm", "add", "--url", "https://example.com"]));
        assert_eq!(args.url.as_deref(), Some("https://example.com"));
        assert!(!args.edit);
        assert!(args.format.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_add_all_flags() {
        let cli = parse(&[
            "bm", "add", "-u", "https://example.com", "-e", "-f", "md", "-o", "out", "-v",
        ]);
        assert!(cli.verbose);
        let args = add_args(cli);
        assert!(args.edit);
        assert_eq!(args.format.as_deref(), Some("md"));
        assert_eq!(args.output, Some(Some(PathBuf::from("out"))));
    }

    #[test]
    fn test_output_without_value() {
        let args = add_args(parse(&["bm", "add", "--output", "--url", "https://example.com"]));
        assert_eq!(args.output, Some(None));
    }

    #[test]
    fn test_verbose_is_global() {
        assert!(parse(&["bm", "-v", "add", "-u", "https://example.com"]).verbose);
    }

    #[test]
    fn test_missing_url_is_left_to_validation() {
        let args = add_args(parse(&["bm", "add"]));
        assert!(args.url.is_none());
    }
}
