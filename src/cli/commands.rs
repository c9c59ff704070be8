//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::generator;
use crate::frontend::ast::{DataType, Declaration, DeclarationList};
use crate::frontend::diagnostics::{self, TransformError};
use crate::frontend::{extractor, syntax};

use super::config::BuildConfig;
use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let display = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{display}': {e}")))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            display,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{display}': {e}")))
}

/// Transform one unit, rendering any error against its source.
pub fn transform_source(file: &str, source: &str) -> CliResult<String> {
    generator::generate(source, file).map_err(|e| CliError::failure(diagnostics::render(file, source, e)))
}

/// Extract the declaration list of one unit, rendering any error against its source.
pub fn extract_source(file: &str, source: &str) -> CliResult<DeclarationList> {
    let extracted = syntax::parse(source).and_then(|tree| match tree.first_error() {
        Some(span) => Err(TransformError::syntax(file, span)),
        None => extractor::extract_tree(&tree),
    });
    extracted.map_err(|e| CliError::failure(diagnostics::render(file, source, e)))
}

// ============================================================================
// emit / inspect
// ============================================================================

/// Print the transformed unit to stdout.
pub fn emit_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let output = transform_source(&file_path.to_string_lossy(), &source)?;
    print!("{output}");
    Ok(ExitCode::SUCCESS)
}

/// Print the extracted declaration list (human listing or JSON).
pub fn inspect_file(file_path: &Path, json: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let declarations = extract_source(&file_path.to_string_lossy(), &source)?;

    if json {
        let out = serde_json::to_string_pretty(&declarations)
            .map_err(|e| CliError::failure(format!("Error serializing declarations: {e}")))?;
        println!("{out}");
    } else {
        print!("{}", describe(&declarations));
    }
    Ok(ExitCode::SUCCESS)
}

/// Human-readable listing of a declaration list.
pub fn describe(declarations: &[Declaration]) -> String {
    let mut out = String::new();
    for declaration in declarations {
        match declaration {
            Declaration::Import(import) => {
                let values: Vec<&str> = import.values.iter().map(String::as_str).collect();
                out.push_str(&format!(
                    "import @{} [{}] insert_pos={}\n",
                    import.span.start,
                    values.join(", "),
                    import.insert_pos
                ));
            }
            Declaration::DataObject(obj) => {
                out.push_str(&format!("data class {} @{}\n", obj.class_name, obj.decorator.start));
                for prop in &obj.properties {
                    let ty = prop.ty.as_ref().map(DataType::to_string).unwrap_or_else(|| "?".to_string());
                    let marker = if prop.shallow_ref { " (ref)" } else { "" };
                    out.push_str(&format!("  {}: {ty}{marker}", prop.name));
                    if let Some(default) = &prop.default_value {
                        out.push_str(&format!(" = {}", default.text));
                    }
                    out.push('\n');
                }
            }
        }
    }
    out
}

// ============================================================================
// build
// ============================================================================

/// A unit discovered by `build`, with its path relative to the root it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub relative: PathBuf,
}

/// Transform every input unit under `paths`.
///
/// Errors are reported per file; the command fails if any unit failed, or in check mode if any
/// generated file is missing or stale.
#[tracing::instrument(skip_all, fields(roots = paths.len(), check = config.check))]
pub fn build_paths(paths: &[PathBuf], config: &BuildConfig) -> CliResult<ExitCode> {
    let mut units = Vec::new();
    for path in paths {
        units.extend(collect_sources(path, config)?);
    }
    if units.is_empty() {
        return Err(CliError::failure("No .ts files found"));
    }

    let mut written = 0;
    let mut stale = 0;
    let mut error_count = 0;

    for unit in &units {
        let file = unit.path.to_string_lossy();
        let output = match read_source(&unit.path).and_then(|source| transform_source(&file, &source)) {
            Ok(output) => output,
            Err(e) => {
                eprintln!("{}", e.message);
                error_count += 1;
                continue;
            }
        };

        let target = config.output_path(&unit.path, &unit.relative);
        let current = fs::read_to_string(&target).ok();
        if current.as_deref() == Some(output.as_str()) {
            tracing::debug!(output = %target.display(), "up to date");
            continue;
        }

        if config.check {
            println!("Would regenerate: {}", target.display());
            stale += 1;
            continue;
        }

        if let Err(e) = write_output(&target, &output) {
            eprintln!("Error writing {}: {}", target.display(), e);
            error_count += 1;
        } else {
            println!("Generated: {}", target.display());
            written += 1;
        }
    }

    if config.check {
        if stale > 0 {
            return Err(CliError::failure(format!("\n{stale} file(s) would be regenerated")));
        }
        if error_count == 0 {
            println!("✓ {} file(s) up to date", units.len());
        }
    } else {
        println!("\n✓ {written} file(s) generated, {error_count} error(s)");
    }

    if error_count > 0 {
        return Err(CliError::reported());
    }

    Ok(ExitCode::SUCCESS)
}

fn write_output(target: &Path, output: &str) -> std::io::Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, output)
}

/// Collect input units from a file or directory (recursively, in sorted order).
pub fn collect_sources(root: &Path, config: &BuildConfig) -> CliResult<Vec<SourceUnit>> {
    if root.is_file() {
        let relative = root.file_name().map(PathBuf::from).unwrap_or_default();
        return Ok(vec![SourceUnit {
            path: root.to_path_buf(),
            relative,
        }]);
    }
    if !root.is_dir() {
        return Err(CliError::failure(format!("Path '{}' does not exist", root.display())));
    }

    let mut units = Vec::new();
    walk(root, root, config, &mut units)?;
    units.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(units)
}

fn walk(root: &Path, dir: &Path, config: &BuildConfig, units: &mut Vec<SourceUnit>) -> CliResult<()> {
    let entries =
        fs::read_dir(dir).map_err(|e| CliError::failure(format!("Error reading directory '{}': {e}", dir.display())))?;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if config.out_dir.as_deref().is_some_and(|out| path.starts_with(out)) {
                continue;
            }
            walk(root, &path, config, units)?;
        } else if config.is_input(&path) {
            let relative = path.strip_prefix(root).map(Path::to_path_buf).unwrap_or_else(|_| path.clone());
            units.push(SourceUnit { path, relative });
        }
    }
    Ok(())
}
