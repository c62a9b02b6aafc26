use clap::Parser;
use fruit_annotator::analysis::summary::{AnalysisSummary, sort_by_confidence};
use fruit_annotator::rendering::overlay::render_detections;
use fruit_annotator::rendering::style::RenderStyle;
use fruit_annotator::response::normalizer::extract_detections;
use fruit_annotator::taxonomy::resolver::resolve;
use image::RgbaImage;
use image::imageops::{self, FilterType};
use log::info;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Draws fruit detections from a saved inference response onto the analyzed
/// image and prints the analysis summary.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The image that was submitted for analysis.
    image: PathBuf,
    /// JSON response returned by the inference service.
    response: PathBuf,
    /// Where to write the annotated image.
    #[arg(short, long, default_value = "annotated.png")]
    output: PathBuf,
    /// TrueType font for label text; labels keep their chip without one.
    #[arg(long)]
    font: Option<PathBuf>,
    /// Render at a display size other than the image's own, e.g. 800x600.
    #[arg(long, value_parser = parse_dimensions)]
    display_size: Option<(u32, u32)>,
}

fn parse_dimensions(raw: &str) -> Result<(u32, u32), String> {
    let (width, height) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {:?}", raw))?;
    let width = width
        .trim()
        .parse()
        .map_err(|err| format!("bad width: {}", err))?;
    let height = height
        .trim()
        .parse()
        .map_err(|err| format!("bad height: {}", err))?;
    if width == 0 || height == 0 {
        return Err("display size must be non-zero".to_string());
    }
    Ok((width, height))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    if !args.image.exists() {
        return Err(format!(
            "Image path does not exist, or cannot be read: {:?}",
            args.image
        )
        .into());
    }
    if !args.response.exists() {
        return Err(format!(
            "Response path does not exist, or cannot be read: {:?}",
            args.response
        )
        .into());
    }

    let document: serde_json::Value = serde_json::from_str(&fs::read_to_string(&args.response)?)?;
    let detections = sort_by_confidence(extract_detections(&document));
    // The normalizer treats "nothing found" as a valid empty result; here at
    // the user-facing boundary it becomes an error.
    if detections.is_empty() {
        return Err("Aucun fruit détecté dans l'image. Essayez avec une image plus claire \
            contenant des fruits visibles."
            .into());
    }
    for (index, detection) in detections.iter().enumerate() {
        let class_info = resolve(&detection.class_label);
        info!(
            "détection #{}: {} {} {:.1}%",
            index + 1,
            class_info.emoji,
            class_info.display_name,
            detection.confidence * 100.0
        );
    }

    let mut base = image::open(&args.image)?.into_rgba8();
    let (intrinsic_width, intrinsic_height) = base.dimensions();
    let (surface_width, surface_height) = args
        .display_size
        .unwrap_or((intrinsic_width, intrinsic_height));
    if (surface_width, surface_height) != (intrinsic_width, intrinsic_height) {
        base = imageops::resize(&base, surface_width, surface_height, FilterType::Triangle);
    }

    let style = match &args.font {
        Some(path) => {
            let font = ab_glyph::FontArc::try_from_vec(fs::read(path)?)
                .map_err(|err| format!("Failed to load font {:?}: {}", path, err))?;
            RenderStyle::with_font(font)
        }
        None => RenderStyle::default(),
    };

    let mut annotations = RgbaImage::new(surface_width, surface_height);
    render_detections(
        &mut annotations,
        &detections,
        intrinsic_width,
        intrinsic_height,
        &style,
    );
    imageops::overlay(&mut base, &annotations, 0, 0);
    base.save(&args.output)?;
    info!("annotated image written to {:?}", args.output);

    println!("{}", AnalysisSummary::from_detections(&detections));
    Ok(())
}
