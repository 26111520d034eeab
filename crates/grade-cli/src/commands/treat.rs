//! Treat command

use crate::TreatArgs;
use anyhow::Result;
use grade_look::{analyze, select};
use grade_ops::treatment::render_treated;
use tracing::debug;

pub fn run(args: TreatArgs, verbose: bool) -> Result<()> {
    let image = super::load_image(&args.input)?;
    debug!(input = %args.input.display(), max_dim = args.max_dim, "treat");

    let analysis = analyze(&image);
    let preset = select(&analysis);

    if verbose {
        println!(
            "Treating {} with \"{}\" ({})",
            args.input.display(),
            preset.label,
            preset.rationale
        );
    }

    let treated = render_treated(&image, &preset, args.max_dim)?;
    super::save_image(&args.output, &treated)?;

    if verbose {
        println!(
            "Wrote {} ({}x{})",
            args.output.display(),
            treated.width(),
            treated.height()
        );
    }

    Ok(())
}
