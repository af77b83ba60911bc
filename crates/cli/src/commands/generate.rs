//! `ifacegen generate`: descriptors in, interface sources out.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use ifacegen_core::{GeneratorConfig, LoadError, TypeDescriptor, generate_with, read_descriptors};
use rayon::prelude::*;
use tracing::{debug, info};

use super::ConfigOptions;

/// Suffix of generated files.
pub const OUTPUT_SUFFIX: &str = ".g.cs";

/// Arguments of `ifacegen generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Descriptor files (.json, .yaml or .yml)
    #[arg(value_name = "FILES", required = true)]
    pub inputs: Vec<PathBuf>,
    /// Write one `<Namespace>.I<Name>.g.cs` per interface into this directory instead of stdout
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
    /// Configuration file and overrides.
    #[command(flatten)]
    pub config: ConfigOptions,
}

/// A generated interface and the class it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Namespace of the class, empty for the global namespace.
    pub namespace: String,
    /// Simple name of the class.
    pub class_name: String,
    /// Generated interface source.
    pub code: String,
}

impl Generated {
    /// Output file name, e.g. `Acme.IWidget.g.cs` or `IWidget.g.cs` in the
    /// global namespace.
    pub fn file_name(&self) -> String {
        if self.namespace.is_empty() {
            format!("I{}{OUTPUT_SUFFIX}", self.class_name)
        } else {
            format!("{}.I{}{OUTPUT_SUFFIX}", self.namespace, self.class_name)
        }
    }

    fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.class_name.clone()
        } else {
            format!("{}.{}", self.namespace, self.class_name)
        }
    }
}

/// Run the command, returning the process exit code.
pub fn run(args: GenerateArgs) -> i32 {
    match execute(&args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn execute(args: &GenerateArgs) -> Result<(), String> {
    let config = args.config.resolve().map_err(|err| err.to_string())?;
    let descriptors = load_all(&args.inputs).map_err(|err| err.to_string())?;

    let generated = generate_all(&descriptors, &config);
    let skipped = descriptors.len() - generated.len();
    if skipped > 0 {
        info!(skipped, "Skipped descriptors that are not classes.");
    }

    match &args.out_dir {
        Some(dir) => write_all(dir, &generated),
        None => {
            let joined: Vec<&str> = generated.iter().map(|g| g.code.as_str()).collect();
            print!("{}", joined.join("\n"));
            Ok(())
        }
    }
}

/// Load descriptors from every input, in input order.
pub fn load_all(inputs: &[PathBuf]) -> Result<Vec<TypeDescriptor>, LoadError> {
    let mut all = Vec::new();
    for path in inputs {
        all.extend(read_descriptors(path)?);
    }
    Ok(all)
}

/// Generate every descriptor in parallel, dropping empty results.
///
/// Output order follows input order.
pub fn generate_all(descriptors: &[TypeDescriptor], config: &GeneratorConfig) -> Vec<Generated> {
    descriptors
        .par_iter()
        .map(|ty| Generated {
            namespace: ty.namespace.trim().to_string(),
            class_name: ty.name.clone(),
            code: generate_with(ty, config),
        })
        .filter(|g| !g.code.is_empty())
        .collect()
}

/// Fail when two interfaces would be written to the same file.
fn check_file_names(generated: &[Generated]) -> Result<(), String> {
    let mut seen: HashMap<String, &Generated> = HashMap::new();
    for item in generated {
        if let Some(first) = seen.insert(item.file_name(), item) {
            return Err(format!(
                "Descriptors {} and {} both map to output file {}",
                first.qualified_name(),
                item.qualified_name(),
                item.file_name()
            ));
        }
    }
    Ok(())
}

fn write_all(dir: &Path, generated: &[Generated]) -> Result<(), String> {
    check_file_names(generated)?;
    fs::create_dir_all(dir)
        .map_err(|err| format!("Failed to create output directory {}: {err}", dir.display()))?;

    for item in generated {
        let path = dir.join(item.file_name());
        fs::write(&path, &item.code)
            .map_err(|err| format!("Failed to write {}: {err}", path.display()))?;
        debug!(path = %path.display(), code_len = item.code.len(), "Wrote interface.");
    }

    info!(
        count = generated.len(),
        out_dir = %dir.display(),
        "Generated interfaces."
    );
    Ok(())
}
