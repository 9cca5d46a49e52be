/// `generate` command: render and write a component's boilerplate.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::args::{GenerateOptions, ProjectArgs};
use crate::cli::output::write_generated;
use crate::config::{self, Config};
use crate::scaffold::{
    Guard, ScaffoldError, WrittenFile, component_dir, display_relative, planned_files, render,
    resolve_root, write_component,
};
use crate::types::{GenerateOutput, GeneratedFileOutput};

/// Run `componentgen generate <NAME>`.
///
/// The guard runs before anything touches the disk. Files are written one at
/// a time and each is reported before the next begins; the summary is printed
/// only after all four are done.
///
/// # Errors
///
/// Returns `ScaffoldError` on config failure, a failed guard, or any I/O failure.
pub fn run(
    name: &str,
    options: &GenerateOptions,
    project: &ProjectArgs,
    ctx: &OutputCtx,
) -> Result<(), ScaffoldError> {
    let t_config = ctx.timer("load_config");
    let root = resolve_root(project.root.as_deref())?;
    let config = load_project_config(&root, project, options)?;
    drop(t_config);

    if let Some(guard) = effective_guard(&config, options) {
        let _t_guard = ctx.timer("guard");
        guard.check(&root)?;
    }

    let components_dir = options
        .dir
        .clone()
        .unwrap_or_else(|| config.components_dir.clone());
    let dir = component_dir(&root, &components_dir, name);

    let t_render = ctx.timer("render");
    let rendered = render(name);
    drop(t_render);

    let files = if options.dry_run {
        let planned = planned_files(&dir, &rendered);
        for file in &planned {
            ctx.file_planned(&display_relative(&root, &file.path));
        }
        planned
    } else {
        let _t_write = ctx.timer("write");
        write_component(&dir, &rendered, |file| {
            ctx.file_written(&display_relative(&root, &file.path));
        })?
    };

    let output = GenerateOutput {
        ok: true,
        component: name.to_owned(),
        directory: display_relative(&root, &dir),
        dry_run: options.dry_run,
        files: files.iter().map(|f| file_to_output(f, &root)).collect(),
    };
    write_generated(&output, ctx);
    Ok(())
}

/// Load the project configuration.
///
/// A config file that cannot be loaded is reported only after the guard flags
/// (or the default guard) accept the root, so running from the wrong project
/// still fails with `WrongDirectory`.
fn load_project_config(
    root: &Path,
    project: &ProjectArgs,
    options: &GenerateOptions,
) -> Result<Config, ScaffoldError> {
    match config::discover(root, project.config.as_deref()) {
        Ok(config) => Ok(config),
        Err(err) => {
            if let Some(guard) = effective_guard(&Config::default(), options) {
                guard.check(root)?;
            }
            Err(err)
        }
    }
}

/// The guard for this run: CLI flags first, then the config file.
///
/// `--no-guard` disables the check. `--marker` or `--match` turn it on even
/// when the config file disables it.
fn effective_guard(config: &Config, options: &GenerateOptions) -> Option<Guard> {
    if options.no_guard {
        return None;
    }
    if options.marker.is_none() && options.match_mode.is_none() {
        return config.guard.guard();
    }
    Some(Guard::new(
        options
            .marker
            .clone()
            .unwrap_or_else(|| config.guard.marker.clone()),
        options.match_mode.unwrap_or(config.guard.mode),
    ))
}

fn file_to_output(file: &WrittenFile, root: &Path) -> GeneratedFileOutput {
    GeneratedFileOutput {
        kind: file.kind.as_str().to_owned(),
        path: display_relative(root, &file.path),
        bytes: file.bytes,
    }
}
