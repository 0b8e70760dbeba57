use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

use crate::error::CliError;

pub const DEFAULT_CONFIG_PATH: &str = "typecast.toml";

#[derive(Parser)]
#[command(name = "typecast", version, about = "Convert strings to typed values")]
pub struct Cli {
    /// Path to TOML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH, env = "TYPECAST_CONFIG")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a string value to the given type
    #[command(after_help = "Examples:\n  \
        typecast convert 42 --type int\n  \
        typecast convert '{\"name\":\"John\",\"age\":30}' --type Person\n  \
        typecast convert 1,2,3,4,5 --type '[]int'\n  \
        typecast convert '1|2|3' --type '[]int' --delimiter '|'")]
    Convert(ConvertArgs),
    /// List the supported type descriptors
    Types(TypesArgs),
    /// Start the HTTP API server
    Serve(ServeArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ConvertArgs {
    /// Value to convert
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Target type descriptor (int, []float64, map[string]int, *bool, ...)
    #[arg(short = 't', long = "type")]
    pub descriptor: String,

    /// Split a slice value on this delimiter instead of trying JSON first
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Pretty-print the result as JSON
    #[arg(short, long)]
    pub pretty: bool,
}

#[derive(Args, Clone, Debug)]
pub struct TypesArgs {
    /// Print as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    /// Port to listen on (overrides [server].port)
    #[arg(short, long, env = "TYPECAST_PORT")]
    pub port: Option<u16>,

    /// Address to bind (overrides [server].host)
    #[arg(long)]
    pub host: Option<String>,
}

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub convert: ConvertSection,
}

#[derive(Debug, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Default, Deserialize)]
pub struct ConvertSection {
    /// Pretty-print JSON output by default.
    #[serde(default)]
    pub pretty: bool,
}

impl FileConfig {
    pub fn parse(toml_str: &str) -> Result<Self, CliError> {
        toml::from_str(toml_str).map_err(|e| CliError::Config {
            context: "parse",
            detail: e.to_string(),
        })
    }

    pub fn load(path: &str) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            context: "read",
            detail: format!("'{path}': {e}"),
        })?;
        Self::parse(&content).map_err(|e| match e {
            CliError::Config { context, detail } => CliError::Config {
                context,
                detail: format!("'{path}': {detail}"),
            },
            other => other,
        })
    }

    /// Like `load`, but a file that does not exist yields the defaults.
    pub fn load_or_default(path: &str) -> Result<Self, CliError> {
        if !std::path::Path::new(path).exists() {
            tracing::debug!(config = %path, "no config file, using defaults");
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        tracing::debug!(config = %path, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_file() {
        let cfg = FileConfig::parse(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [convert]
            pretty = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9000);
        assert!(cfg.convert.pretty);
    }

    #[test]
    fn empty_file_means_defaults() {
        let cfg = FileConfig::parse("").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert!(!cfg.convert.pretty);

        let cfg = FileConfig::parse("[server]\nport = 1234\n").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 1234);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let err = FileConfig::parse("[server]\nport = \"eighty\"\n").unwrap_err();
        assert!(err.to_string().starts_with("config (parse): "));
    }

    #[test]
    fn missing_file_means_defaults() {
        let cfg = FileConfig::load_or_default("/nonexistent/typecast-test.toml").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert!(FileConfig::load("/nonexistent/typecast-test.toml").is_err());
    }

    #[test]
    fn cli_parses_convert() {
        let cli = Cli::try_parse_from(["typecast", "convert", "-42", "--type", "int", "-p"]).unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.value, "-42");
                assert_eq!(args.descriptor, "int");
                assert!(args.pretty);
                assert_eq!(args.delimiter, None);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn cli_requires_type() {
        assert!(Cli::try_parse_from(["typecast", "convert", "42"]).is_err());
    }
}
