//! Batch generation driver.
//!
//! Processes each configured class definition in turn: load, compile,
//! write. Units are independent; the batch stops at the first failing
//! unit and the error propagates to the caller.

use anyhow::{Context, Result};
use optgen_codegen::Generator;
use optgen_schema::{ClassDef, ClassIr};
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments controlling a generation batch.
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// The JSON files with the class/option definitions.
    #[arg(long = "configuration", value_name = "JSON", required = true, num_args = 1..)]
    pub configurations: Vec<PathBuf>,

    /// The output directory for the generated source, above the
    /// top-level module.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Adds the package structure to the output path.
    #[arg(long = "add-package-structure")]
    pub add_package_structure: bool,

    /// Generates any missing output directories.
    #[arg(long = "generate-dirs")]
    pub generate_dirs: bool,

    /// Enables verbose debugging output.
    #[arg(long)]
    pub verbose: bool,
}

/// Runs the generation batch, stopping at the first failure.
///
/// # Errors
/// Returns the first unit's failure, annotated with the configuration
/// path that caused it.
pub fn run(args: &GenerateArgs) -> Result<()> {
    for config in &args.configurations {
        generate_unit(config, args)
            .with_context(|| format!("failed to generate from {}", config.display()))?;
    }
    Ok(())
}

/// Loads, compiles and writes one class definition.
fn generate_unit(config: &Path, args: &GenerateArgs) -> Result<()> {
    tracing::info!("reading configuration: {}", config.display());
    let json = fs::read_to_string(config)?;
    let def = optgen_schema::load_definition(&json)?;
    tracing::debug!(
        "parsed definition: {} ({} options)",
        def.type_name(),
        def.options.len()
    );

    let ir = ClassIr::from_def(&def);
    let code = Generator::new(&ir).generate();

    let out = output_path(args, &def);
    if args.generate_dirs {
        if let Some(parent) = out.parent() {
            if !parent.exists() {
                tracing::info!("generating output directory: {}", parent.display());
                fs::create_dir_all(parent)?;
            }
        }
    }
    tracing::info!("writing generated code to: {}", out.display());
    fs::write(&out, code)?;
    Ok(())
}

/// Computes the output file path for a definition: the output directory,
/// optionally extended with the package segments, plus `<TypeName>.rs`.
#[must_use]
pub fn output_path(args: &GenerateArgs, def: &ClassDef) -> PathBuf {
    let mut out = args.output_dir.clone();
    if args.add_package_structure && !def.package.is_empty() {
        for segment in def.package.split("::") {
            out.push(segment);
        }
    }
    out.push(format!("{}.rs", def.type_name()));
    out
}
