use std::io::Write;

use typecast_engine::Converter;

use crate::config::{ConvertArgs, FileConfig};
use crate::error::CliError;

pub fn run(
    args: &ConvertArgs,
    config: &FileConfig,
    converter: &Converter,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let value = match args.delimiter.as_deref() {
        Some(delimiter) => converter.convert_with_delimiter(&args.value, &args.descriptor, delimiter)?,
        None => converter.convert(&args.value, &args.descriptor)?,
    };
    tracing::debug!(descriptor = %args.descriptor, "converted");

    if args.pretty || config.convert.pretty {
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use typecast_engine::{ErrorKind, Registry};

    use super::*;

    fn converter() -> Converter {
        Converter::new(Arc::new(Registry::builtin().unwrap()))
    }

    fn args(value: &str, descriptor: &str) -> ConvertArgs {
        ConvertArgs {
            value: value.into(),
            descriptor: descriptor.into(),
            delimiter: None,
            pretty: false,
        }
    }

    fn render(args: &ConvertArgs, config: &FileConfig) -> Result<String, CliError> {
        let mut out = Vec::new();
        run(args, config, &converter(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn plain_output() {
        let cfg = FileConfig::default();
        assert_eq!(render(&args("42", "int"), &cfg).unwrap(), "42\n");
        assert_eq!(render(&args("1,2,3", "[]int"), &cfg).unwrap(), "[1 2 3]\n");
        assert_eq!(render(&args("7", "*int"), &cfg).unwrap(), "&7\n");
    }

    #[test]
    fn pretty_output() {
        let mut a = args(r#"{"a":1}"#, "map[string]int");
        a.pretty = true;
        let text = render(&a, &FileConfig::default()).unwrap();
        assert_eq!(text, "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn pretty_from_config() {
        let cfg = FileConfig::parse("[convert]\npretty = true\n").unwrap();
        assert_eq!(render(&args("true", "bool"), &cfg).unwrap(), "true\n");
        assert_eq!(render(&args("x", "string"), &cfg).unwrap(), "\"x\"\n");
    }

    #[test]
    fn delimiter_path() {
        let mut a = args("1|2|3", "[]int");
        a.delimiter = Some("|".into());
        assert_eq!(render(&a, &FileConfig::default()).unwrap(), "[1 2 3]\n");

        let mut a = args("1|2", "int");
        a.delimiter = Some("|".into());
        let err = render(&a, &FileConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "delimiter can only be used with slice types");
    }

    #[test]
    fn conversion_errors_propagate() {
        match render(&args("abc", "int"), &FileConfig::default()) {
            Err(CliError::Convert(e)) => assert_eq!(e.kind(), ErrorKind::Parse),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
