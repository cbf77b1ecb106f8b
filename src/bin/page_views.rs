use manga_panels::config::page::{load_config, PageToolConfig};
use manga_panels::image::io::{
    load_grayscale_image, load_mask_image, save_mask, write_json_file,
};
use manga_panels::image::{BinaryMask, ImageU8};
use manga_panels::{PageAnalyzer, PageReport, PageViewer};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: page_views <config.json>".to_string()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let image = gray.as_view();

    let analyzer = PageAnalyzer::new(config.params);
    let viewer = PageViewer::from(config.viewer);
    let loaded = config.mask.as_deref().map(load_mask_image).transpose()?;
    let report = match &loaded {
        Some(mask) => {
            analyzer.analyze_mask_with_diagnostics(mask, &image, config.direction)?
        }
        None => analyzer.analyze_with_diagnostics(&image, config.direction)?,
    }
    .with_views(&viewer)?;
    print_summary(&config, &report);

    let report_path = config.output.report_path();
    write_json_file(&report_path, &report)?;
    println!("Saved report to {}", report_path.display());

    if let Some(mask_path) = config.output.mask_path() {
        let mask = analyzed_mask(loaded, &analyzer, &image);
        save_mask(&mask, &mask_path)?;
        println!("Saved mask to {}", mask_path.display());
    }

    Ok(())
}

/// Mask the cells were extracted from: the configured one, or the page
/// thresholded with the analyzer's settings.
fn analyzed_mask(
    loaded: Option<BinaryMask>,
    analyzer: &PageAnalyzer,
    gray: &ImageU8<'_>,
) -> BinaryMask {
    loaded.unwrap_or_else(|| analyzer.binarize(gray))
}

fn print_summary(config: &PageToolConfig, report: &PageReport) {
    let page = &report.page;
    let seg = &report.trace.segmentation;
    println!(
        "{}: {}x{} direction={:?} inverted={}",
        config.input.display(),
        page.width,
        page.height,
        page.direction,
        seg.inverted
    );
    println!(
        "  blobs={} sized={} cells={} full_page={}",
        seg.blobs,
        seg.size_filtered,
        page.cells.len(),
        page.full_page
    );
    if let Some(views) = &report.trace.views {
        println!("  views ({}): {}", views.viewer, views.rects.len());
        for r in &views.rects {
            println!("    x={} y={} w={} h={}", r.x, r.y, r.width, r.height);
        }
    }
    println!("  total_ms={:.3}", report.trace.timings.total_ms);
}
