/// `open` command: open the component explorer in the system browser.
use std::io;
use std::process::Command;

use crate::cli::OutputCtx;
use crate::cli::args::{OpenArgs, ProjectArgs};
use crate::cli::output::write_open;
use crate::config;
use crate::scaffold::{ScaffoldError, resolve_root};
use crate::types::OpenOutput;

/// Run `componentgen open`.
///
/// # Errors
///
/// Returns `ScaffoldError` on config failure or if the browser cannot be launched.
pub fn run(args: &OpenArgs, project: &ProjectArgs, ctx: &OutputCtx) -> Result<(), ScaffoldError> {
    let root = resolve_root(project.root.as_deref())?;
    let url = config::discover(&root, project.config.as_deref())?.open.url;

    if !args.print_only {
        let _t = ctx.timer("open_browser");
        open_browser(&url).map_err(|source| ScaffoldError::Browser {
            url: url.clone(),
            source,
        })?;
    }

    write_open(
        &OpenOutput {
            ok: true,
            launched: !args.print_only,
            url,
        },
        ctx,
    );
    Ok(())
}

fn open_browser(url: &str) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn().map(|_| ())
    }
    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn().map(|_| ())
    }
    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()
            .map(|_| ())
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = url;
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "no browser opener known for this platform",
        ))
    }
}
