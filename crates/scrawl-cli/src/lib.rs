//! CLI logic for the Scrawl sketch tool.
//!
//! This module reads ASCII art from a file, stdin, or the built-in gallery,
//! renders it with [`SketchBuilder`], and writes SVG or JSON to a file or
//! stdout.

pub mod error_adapter;

mod args;
mod config;
mod error;

pub use args::{Args, Format};
pub use config::ConfigError;
pub use error::CliError;

use std::{
    fs::{self, File},
    io::{self, BufWriter, Read, Write},
};

use log::info;

use scrawl::{SketchBuilder, gallery, primitive::Primitive};

const STDIO: &str = "-";

/// Run the Scrawl CLI application
///
/// This function loads configuration, reads the ASCII art, and writes the
/// rendered output.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File and stream I/O errors
/// - Configuration loading and validation errors
/// - Unknown example ids or missing input
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CliError> {
    if args.list_examples {
        let stdout = io::stdout();
        return list_examples(&mut stdout.lock()).map_err(|err| CliError::io("<stdout>", err));
    }

    let output_path = args.output_path();
    info!(
        input_path = args.input.as_deref().unwrap_or_default(),
        example = args.example.as_deref().unwrap_or_default(),
        output_path;
        "Processing sketch"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::finalize(app_config, args)?;

    let source = read_source(args)?;

    let builder = SketchBuilder::new(app_config);
    let primitives = builder.parse(&source)?;

    if output_path == STDIO {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        write_output(&builder, args.format, &primitives, &mut writer)?;
        writer
            .flush()
            .map_err(|err| CliError::io("<stdout>", err))?;
    } else {
        let file = File::create(output_path).map_err(|err| CliError::io(output_path, err))?;
        let mut writer = BufWriter::new(file);
        write_output(&builder, args.format, &primitives, &mut writer)?;
        writer
            .flush()
            .map_err(|err| CliError::io(output_path, err))?;
    }

    info!(output_file = output_path, format:? = args.format; "Sketch exported successfully");

    Ok(())
}

/// Reads the ASCII art from the input path, stdin, or the gallery.
fn read_source(args: &Args) -> Result<String, CliError> {
    match (args.input.as_deref(), args.example.as_deref()) {
        (_, Some(id)) => Ok(gallery::find(id)?.source().to_string()),
        (Some(STDIO), None) => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|err| CliError::io("<stdin>", err))?;
            Ok(source)
        }
        (Some(path), None) => fs::read_to_string(path).map_err(|err| CliError::io(path, err)),
        (None, None) => Err(CliError::MissingInput),
    }
}

fn write_output(
    builder: &SketchBuilder,
    format: Format,
    primitives: &[Primitive],
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    match format {
        Format::Svg => builder.write_svg(primitives, writer)?,
        Format::Json => builder.write_json(primitives, writer)?,
    }
    Ok(())
}

/// Writes one `id  name` line per built-in example.
pub fn list_examples(writer: &mut dyn Write) -> io::Result<()> {
    for example in gallery::all() {
        writeln!(writer, "{:<8}{}", example.id(), example.name())?;
    }
    Ok(())
}
