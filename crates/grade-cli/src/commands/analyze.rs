//! Analyze command

use crate::AnalyzeArgs;
use anyhow::{Context, Result};
use grade_look::{analyze_with_stride, select};
use serde_json::json;
use tracing::debug;

pub fn run(args: AnalyzeArgs, verbose: bool) -> Result<()> {
    let image = super::load_image(&args.input)?;
    debug!(input = %args.input.display(), stride = args.stride, "analyze");

    if verbose {
        println!(
            "Analyzing {} ({}x{}, stride {})",
            args.input.display(),
            image.width(),
            image.height(),
            args.stride
        );
    }

    let analysis = analyze_with_stride(&image, args.stride);
    let preset = select(&analysis);

    if args.json {
        let out = json!({
            "input": args.input.display().to_string(),
            "width": image.width(),
            "height": image.height(),
            "analysis": analysis,
            "preset": preset,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("Failed to serialize analysis")?
        );
        return Ok(());
    }

    println!("{}", args.input.display());
    println!("  avg hue:        {:.1}\u{b0}", analysis.avg_hue);
    println!("  avg saturation: {:.3}", analysis.avg_saturation);
    println!("  avg lightness:  {:.3}", analysis.avg_lightness);
    println!("  contrast ratio: {:.3}", analysis.contrast_ratio);
    println!("  warmth:         {:?}", analysis.warmth);
    println!("  dominant tone:  {}", analysis.dominant_tone);
    println!();
    println!("Preset: {}", preset.label);
    println!(
        "  saturation {:.2}  contrast {:.2}  brightness {:.2}",
        preset.saturation, preset.contrast, preset.brightness
    );
    println!("  {}", preset.rationale);

    Ok(())
}
