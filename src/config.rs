use crate::graph::sample::Item;
use crate::{Error, Result};

/// Output format of the command line runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Configuration for a command line run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub start: Item,
    /// `None` solves for every node instead of a single destination
    pub end: Option<Item>,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start: Item::Book,
            end: Some(Item::Piano),
            format: OutputFormat::Text,
        }
    }
}

impl RunConfig {
    /// Parses `[START] [END] [--json] [--all]`, program name excluded.
    ///
    /// `--all` drops the destination so the full tables are reported.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = RunConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--json" => config.format = OutputFormat::Json,
                "--all" => config.end = None,
                flag if flag.starts_with("--") => {
                    return Err(Error::InvalidArgument(flag.to_string()));
                }
                _ => positional.push(arg),
            }
        }

        match positional.as_slice() {
            [] => {}
            [start] => config.start = start.parse()?,
            [start, end] if config.end.is_some() => {
                config.start = start.parse()?;
                config.end = Some(end.parse()?);
            }
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "unexpected arguments: {}",
                    positional.join(" ")
                )))
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<RunConfig> {
        RunConfig::from_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&[]), Ok(RunConfig::default()));
    }

    #[test]
    fn test_positional_nodes_and_flags() {
        let config = parse(&["poster", "drum_set", "--json"]).unwrap();

        assert_eq!(config.start, Item::Poster);
        assert_eq!(config.end, Some(Item::DrumSet));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_all_drops_end() {
        let config = parse(&["--all", "rare_lp"]).unwrap();

        assert_eq!(config.start, Item::RareLp);
        assert_eq!(config.end, None);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(parse(&["harp"]), Err(Error::UnknownNode("harp".to_string())));
        assert!(matches!(parse(&["--verbose"]), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse(&["book", "piano", "poster"]), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse(&["--all", "book", "piano"]), Err(Error::InvalidArgument(_))));
    }
}
