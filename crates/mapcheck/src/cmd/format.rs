use mapcheck_format::{legacy, scalar, TypeTag, Value};

use crate::cmd::FormatArgs;
use crate::exit::{CliError, CliResult, FAILURE, SUCCESS, USAGE};
use crate::output::{print_format, FormatReport, OutputFormat};

pub fn run(args: FormatArgs, format: OutputFormat) -> CliResult<i32> {
    let tag: TypeTag = args
        .type_tag
        .parse()
        .map_err(|err| CliError::new(USAGE, format!("{err}")))?;
    if !tag.is_format() {
        return Err(CliError::new(
            USAGE,
            format!("{tag} is not a scalar format; use `check` with a constraint set"),
        ));
    }

    let (validator, valid) = if args.legacy {
        ("legacy", legacy::validate(&args.value, tag))
    } else {
        ("scalar", scalar::validate(&Value::from(args.value.as_str()), tag))
    };

    print_format(&FormatReport::new(validator, tag, &args.value, valid), format);
    Ok(if valid { SUCCESS } else { FAILURE })
}
