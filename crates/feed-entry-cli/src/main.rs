//! Inspect the entries of an RSS or Atom feed file
//!
//! Prints, per entry, its derived XPath prefix, format, encoding, standard
//! fields and the result of each `--query`, evaluated relative to the entry.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use feed_engine_traits::Namespaces;
use feed_entry::FeedType;
use feed_xee_adapter::XeeFeedTree;

mod report;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "feed-entry", about = "Inspect the entries of an RSS or Atom feed")]
struct Args {
    /// Feed document to read
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Feed type tag (e.g. rss-20, atom-10); detected when omitted
    #[arg(long = "type", value_name = "TAG", value_parser = FeedType::from_tag)]
    feed_type: Option<FeedType>,

    /// Expression appended to each entry's prefix, e.g. `/atom:title`
    #[arg(long = "query", value_name = "EXPR")]
    queries: Vec<String>,

    /// Extra namespace binding for queries
    #[arg(long = "namespace", value_name = "PREFIX=URI", value_parser = parse_binding)]
    namespaces: Vec<(String, String)>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn parse_binding(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((prefix, uri)) if !prefix.is_empty() && !uri.is_empty() => {
            Ok((prefix.to_string(), uri.to_string()))
        }
        _ => Err(format!("expected PREFIX=URI, got `{}`", s)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut namespaces = Namespaces::new();
    for (prefix, uri) in &args.namespaces {
        namespaces.bind(prefix, uri);
    }

    let mut tree = XeeFeedTree::new();
    let document = tree
        .parse_file(&args.file)
        .with_context(|| format!("failed to parse '{}'", args.file.display()))?;
    tracing::info!(file = %args.file.display(), "feed parsed");

    let reports = report::build(&tree, document, args.feed_type, &args.queries, &namespaces)?;

    match args.format {
        OutputFormat::Text => print!("{}", report::render_text(&reports)),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&reports).context("failed to serialize reports")?;
            println!("{}", json);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_splits_on_first_equals() {
        assert_eq!(
            parse_binding("q=urn:x?a=b").unwrap(),
            ("q".to_string(), "urn:x?a=b".to_string())
        );
    }

    #[test]
    fn binding_needs_both_halves() {
        assert!(parse_binding("media").is_err());
        assert!(parse_binding("=urn:x").is_err());
        assert!(parse_binding("media=").is_err());
    }

    #[test]
    fn arguments_parse() {
        let args = Args::try_parse_from([
            "feed-entry",
            "feed.xml",
            "--type",
            "atom-10",
            "--query",
            "/atom:title",
            "--query",
            "/atom:id",
            "--namespace",
            "media=http://search.yahoo.com/mrss/",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.feed_type, Some(FeedType::Atom10));
        assert_eq!(args.queries.len(), 2);
        assert_eq!(args.namespaces[0].0, "media");
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let result = Args::try_parse_from(["feed-entry", "feed.xml", "--type", "rss-3"]);
        assert!(result.is_err());
    }
}
