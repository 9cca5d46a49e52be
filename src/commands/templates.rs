/// `templates` command: list the files written for every component.
use crate::cli::OutputCtx;
use crate::cli::args::TemplatesArgs;
use crate::cli::output::write_templates;
use crate::scaffold::{ScaffoldError, TemplateKind};
use crate::types::TemplateOutput;

/// Run `componentgen templates`.
///
/// # Errors
///
/// Cannot currently fail; the templates are embedded in the binary.
pub fn run(args: &TemplatesArgs, ctx: &OutputCtx) -> Result<(), ScaffoldError> {
    let output: Vec<TemplateOutput> = TemplateKind::ALL
        .iter()
        .map(|kind| TemplateOutput {
            kind: kind.as_str().to_owned(),
            file_name: kind.file_name(&args.name),
            description: kind.description().to_owned(),
        })
        .collect();

    write_templates(&output, ctx);
    Ok(())
}
