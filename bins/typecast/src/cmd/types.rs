use std::io::Write;

use typecast_engine::Converter;

use crate::config::TypesArgs;
use crate::error::CliError;

pub fn run(args: &TypesArgs, converter: &Converter, out: &mut impl Write) -> Result<(), CliError> {
    let types = converter.supported_types();
    if args.json {
        writeln!(out, "{}", serde_json::to_string(&types)?)?;
        return Ok(());
    }
    writeln!(out, "Supported types:")?;
    for name in &types {
        writeln!(out, "  {name}")?;
    }
    Ok(())
}
