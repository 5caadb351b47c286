//! Command-line arguments

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "kube-string-finder")]
#[command(author, version, about = "Find a string in the Secrets and ConfigMaps of a Kubernetes cluster")]
pub struct Args {
    /// String to search for in resource names, keys and values
    #[arg(long = "string", value_name = "PATTERN", value_parser = NonEmptyStringValueParser::new())]
    pub pattern: String,

    /// Match case exactly
    #[arg(long = "casesensitive")]
    pub case_sensitive: bool,

    /// Enable verbose logging, including values that could not be decoded
    #[arg(long)]
    pub verbose: bool,
}
