//! Export command

use crate::ExportArgs;
use anyhow::Result;
use grade_look::{analyze, select};
use grade_ops::treatment::{render_upscaled, UpscaleFactor};
use tracing::debug;

pub fn run(args: ExportArgs, verbose: bool) -> Result<()> {
    let image = super::load_image(&args.input)?;
    debug!(input = %args.input.display(), scale = %args.scale, "export");

    let factor = match args.scale.as_str() {
        "4" => UpscaleFactor::Four,
        _ => UpscaleFactor::Two,
    };

    let analysis = analyze(&image);
    let preset = select(&analysis);

    if verbose {
        println!(
            "Exporting {} at {}x with \"{}\"",
            args.input.display(),
            factor.linear(),
            preset.label
        );
    }

    let export = render_upscaled(&image, &preset, factor)?;
    super::save_image(&args.output, &export)?;

    if verbose {
        println!(
            "Wrote {} ({}x{})",
            args.output.display(),
            export.width(),
            export.height()
        );
    }

    Ok(())
}
