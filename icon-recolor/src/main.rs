use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::time::Instant;

mod cli;
mod color;
mod ico;
mod recolor;
mod utils;

use cli::Args;
use utils::{create_pixel_progress_bar, format_duration, verbose_println};

fn main() -> Result<()> {
    let start_time = Instant::now();
    let args = Args::parse();

    // Print banner
    println!("{}", style("Icon Recolorer").bold().blue());
    println!(
        "{}",
        style("Hue-preserving recoloring for blue-branded icons").dim()
    );
    println!();

    // Validate inputs before any processing starts
    if !args.input.exists() {
        return Err(anyhow::anyhow!(
            "Input file '{}' not found",
            args.input.display()
        ));
    }

    let target_rgb = args.parse_target_color().map_err(|e| anyhow::anyhow!(e))?;

    if args.verbose {
        println!("{}", style("Configuration:").bold());
        println!("  Input: {}", args.input.display());
        println!("  Output: {}", args.output.display());
        println!(
            "  Target color: RGB({}, {}, {})",
            target_rgb[0], target_rgb[1], target_rgb[2]
        );
        println!("  Tolerance: {}", args.tolerance);
        println!("  Preserve brightness: {}", args.preserve_brightness());
        println!("  Desktop sizes: {}", args.desktop);
        println!();
    }

    // Load and normalize to RGBA
    let img = image::open(&args.input)
        .with_context(|| format!("Failed to open image '{}'", args.input.display()))?;
    let mut img = img.to_rgba8();
    let (width, height) = img.dimensions();

    println!("Processing {}x{} image...", width, height);
    println!(
        "Target color: RGB({}, {}, {})",
        target_rgb[0], target_rgb[1], target_rgb[2]
    );

    let pb = create_pixel_progress_bar((width as u64) * (height as u64));
    let modified = recolor::recolor_image(
        &mut img,
        target_rgb,
        args.tolerance,
        args.preserve_brightness(),
        Some(&pb),
    );
    pb.finish_and_clear();

    println!("Modified {} pixels", style(modified).bold());

    // Output format follows the extension; .ico gets the multi-size container
    let is_ico = args
        .output
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("ico"))
        .unwrap_or(false);

    if is_ico {
        let sizes = ico::save_ico(&img, &args.output, args.desktop)?;
        verbose_println(
            args.verbose,
            &format!("ICO entries are PNG-compressed ({} total)", sizes.len()),
        );
        println!(
            "Created ICO with sizes: {}",
            sizes
                .iter()
                .map(|s| format!("{}x{}", s, s))
                .collect::<Vec<_>>()
                .join(", ")
        );
    } else {
        img.save(&args.output)
            .with_context(|| format!("Failed to save image '{}'", args.output.display()))?;
    }

    println!();
    println!(
        "{} Recolored icon saved to: {}",
        style("✓").green().bold(),
        style(args.output.display()).bold()
    );
    println!(
        "  Elapsed: {}",
        style(format_duration(start_time.elapsed())).dim()
    );

    Ok(())
}
