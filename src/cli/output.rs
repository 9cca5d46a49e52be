/// Output formatting: colored status lines, tables, JSON modes, debug timing.
use std::io::Write;

use colored::Colorize;
use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ErrorOutput, GenerateOutput, OpenOutput, TemplateOutput};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all commands.
pub struct OutputCtx {
    pub format: OutputFormat,
    /// When true, print stage timings to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            debug,
        }
    }

    /// Whether results are emitted as JSON instead of status lines.
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json | OutputFormat::Compact)
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Report one file as written. Silent in JSON modes.
    pub fn file_written(&self, path: &str) {
        if !self.is_json() {
            print_success(&format!("Created {path}"));
        }
    }

    /// Report one file a dry run would write. Silent in JSON modes.
    pub fn file_planned(&self, path: &str) {
        if !self.is_json() {
            print_info(&format!("Would write {path}"));
        }
    }
}

// --- Status lines ---

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "→".blue(), message);
}

// --- Generate ---

/// Write the `generate` summary to stdout.
pub fn write_generated(result: &GenerateOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Compact => print_compact_json(result),
        OutputFormat::Text => {
            if result.dry_run {
                print_info(&format!(
                    "Dry run: {} files for {} in {}",
                    result.files.len(),
                    result.component.bold(),
                    result.directory.cyan()
                ));
            } else {
                print_success(&format!(
                    "Done! {} is ready in {}",
                    result.component.bold(),
                    result.directory.cyan()
                ));
            }
        }
    }
}

// --- Templates ---

/// Write the template listing to stdout.
pub fn write_templates(templates: &[TemplateOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(templates),
        OutputFormat::Compact => print_compact_json(templates),
        OutputFormat::Text => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(["KIND", "FILE", "DESCRIPTION"]);
            for t in templates {
                table.add_row([t.kind.as_str(), t.file_name.as_str(), t.description.as_str()]);
            }
            println!("{table}");
        }
    }
}

// --- Open ---

/// Write the `open` result to stdout.
pub fn write_open(result: &OpenOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Compact => print_compact_json(result),
        OutputFormat::Text if result.launched => {
            print_success(&format!("Opened {}", result.url.cyan()));
        }
        OutputFormat::Text => println!("{}", result.url),
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match format {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Compact => {
            let s = serde_json::to_string(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Text => {
            let _ = writeln!(out, "{} {}", "✗".red().bold(), err.error.message.red().bold());
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
