use std::collections::BTreeSet;
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meson_analyzer::{
    analyze_source, check_option_file, load_config, load_source, parse_source, AnalysisOptions,
    Diagnostic, DiagnosticLevel, Diagnostics, Lexer, ProjectFiles, SourceFile,
};
use meson_support::{cli_error, config_error, fs_error};
use pathdiff::diff_paths;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

const LOG_ENV: &str = "MESON_ANALYZER_LOG";
const BUILD_FILE: &str = "meson.build";
const OPTION_FILES: &[&str] = &["meson.options", "meson_options.txt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "meson-analyzer",
    version,
    about = "Static analysis for meson build files."
)]
struct Cli {
    /// Lint configuration (`.json`, `.yml` or `.yaml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log analysis events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse build and option files. Directories are searched recursively.
    Check {
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the strings an identifier may hold at a given line.
    Values {
        file: PathBuf,
        line: usize,
        name: String,
    },
    /// Dump the token stream of a file.
    Tokens { file: PathBuf },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = match &cli.config {
        Some(path) => load_config(path).with_context(|| {
            config_error("load", &path.display().to_string(), "unable to read lint switches")
        })?,
        None => AnalysisOptions::default(),
    };

    match &cli.command {
        Command::Check { paths, format } => run_check(paths, &options, *format),
        Command::Values { file, line, name } => run_values(file, *line, name, &options),
        Command::Tokens { file } => run_tokens(file),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        Some(EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_env(LOG_ENV).ok()
    };
    let Some(filter) = filter else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn is_option_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| OPTION_FILES.contains(&name))
}

fn collect_targets(path: &Path, targets: &mut BTreeSet<PathBuf>) -> Result<()> {
    if path.is_file() {
        targets.insert(path.to_path_buf());
        return Ok(());
    }
    if !path.is_dir() {
        bail!(cli_error("check", format!("{} does not exist", path.display())));
    }
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", path.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_target =
            entry.file_name().to_str() == Some(BUILD_FILE) || is_option_file(entry.path());
        if is_target {
            targets.insert(entry.into_path());
        }
    }
    Ok(())
}

fn display_path(path: &Path) -> PathBuf {
    env::current_dir()
        .ok()
        .and_then(|cwd| diff_paths(cwd.join(path), cwd))
        .filter(|relative| !relative.as_os_str().is_empty() && !relative.starts_with(".."))
        .unwrap_or_else(|| path.to_path_buf())
}

fn check_file(path: &Path, options: &AnalysisOptions) -> Result<(SourceFile, Diagnostics)> {
    let source = load_source(path)
        .with_context(|| fs_error("read", &path.display().to_string(), "unable to load file"))?;
    if is_option_file(path) {
        let diagnostics = check_option_file(&parse_source(&source));
        return Ok((source, diagnostics));
    }
    let project = ProjectFiles::discover(path)?;
    let registry = project
        .load_options()
        .with_context(|| format!("failed to load options for {}", path.display()))?;
    let analysis = analyze_source(&source, &registry, options);
    Ok((source, analysis.diagnostics))
}

fn run_check(paths: &[PathBuf], options: &AnalysisOptions, format: Format) -> Result<ExitCode> {
    let mut targets = BTreeSet::new();
    for path in paths {
        collect_targets(path, &mut targets)?;
    }
    if targets.is_empty() {
        bail!(cli_error("check", "no build or option files found"));
    }
    tracing::debug!(count = targets.len(), "collected files to check");

    let mut failed = false;
    let mut reports = Vec::new();
    let (mut errors, mut warnings) = (0usize, 0usize);
    for path in &targets {
        let (source, diagnostics) = check_file(path, options)?;
        failed |= diagnostics.has_errors();
        for diagnostic in diagnostics.entries() {
            match diagnostic.level {
                DiagnosticLevel::Error => errors += 1,
                DiagnosticLevel::Warning => warnings += 1,
            }
        }
        match format {
            Format::Text => {
                let lines: Vec<&str> = source.contents.lines().collect();
                for diagnostic in diagnostics.entries() {
                    print_diagnostic(&display_path(path), &lines, diagnostic);
                }
            }
            Format::Json => reports.push(json!({
                "path": display_path(path).display().to_string(),
                "diagnostics": diagnostics.entries().iter().map(diagnostic_json).collect::<Vec<_>>(),
            })),
        }
    }

    match format {
        Format::Text => eprintln!(
            "checked {} file(s): {errors} error(s), {warnings} warning(s)",
            targets.len()
        ),
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn diagnostic_json(diagnostic: &Diagnostic) -> serde_json::Value {
    let level = match diagnostic.level {
        DiagnosticLevel::Error => "error",
        DiagnosticLevel::Warning => "warning",
    };
    let span = diagnostic.span.map(|span| {
        json!({
            "line": span.line,
            "column": span.column,
            "end_line": span.end_line,
            "end_column": span.end_column,
        })
    });
    json!({
        "level": level,
        "message": diagnostic.message,
        "span": span,
    })
}

fn run_values(file: &Path, line: usize, name: &str, options: &AnalysisOptions) -> Result<ExitCode> {
    let source = load_source(file)?;
    let project = ProjectFiles::discover(file)?;
    let registry = project.load_options()?;
    let analysis = analyze_source(&source, &registry, options);
    let values = analysis.values_at_line(&registry, line, name);
    if values.is_empty() {
        eprintln!("no values found for `{name}` at line {line}");
        return Ok(ExitCode::FAILURE);
    }
    for value in values {
        println!("{value}");
    }
    Ok(ExitCode::SUCCESS)
}

fn run_tokens(file: &Path) -> Result<ExitCode> {
    let source = load_source(file)?;
    let result = Lexer::new(&source).tokenize();
    for token in &result.tokens {
        println!("{token}");
    }
    for error in &result.errors {
        eprintln!("error: {}:{}: {}", error.line, error.column, error);
    }
    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_diagnostic(path: &Path, lines: &[&str], diagnostic: &Diagnostic) {
    let (level_label, level_marker) = match diagnostic.level {
        DiagnosticLevel::Error => ("error", "  -"),
        DiagnosticLevel::Warning => ("warning", "  ~"),
    };
    eprintln!("{} {}: {}", level_marker, level_label, diagnostic.message);
    let Some(span) = diagnostic.span else {
        return;
    };
    eprintln!("     --> {}:{}:{}", path.display(), span.line, span.column);
    let Some(raw_line) = lines.get(span.line.saturating_sub(1)) else {
        return;
    };
    let display_line = raw_line.replace('\t', "    ");
    eprintln!("      {}", display_line);

    let mut caret_line = String::from("      ");
    for ch in raw_line.chars().take(span.column.saturating_sub(1)) {
        match ch {
            '\t' => caret_line.push_str("    "),
            _ => caret_line.push(' '),
        }
    }
    let highlight_len = if span.end_line == span.line {
        span.end_column.saturating_sub(span.column).saturating_add(1)
    } else {
        let width = display_line.chars().count();
        width.saturating_sub(span.column.saturating_sub(1).min(width))
    };
    caret_line.push_str(&"^".repeat(highlight_len.max(1)));
    eprintln!("{}", caret_line);
}
