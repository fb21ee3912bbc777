use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use screenveil_core::classify::classifier::{classify, find_spans};
use screenveil_core::detection::domain::region_detector::{sensitive_regions, RegionDetector};
use screenveil_core::detection::domain::text_recognizer::TextBlock;
use screenveil_core::detection::infrastructure::cached_face_detector::CachedFaceDetector;
use screenveil_core::detection::infrastructure::cached_text_recognizer::CachedTextRecognizer;
use screenveil_core::io::image_file::{load_frame, save_frame};
use screenveil_core::masking::domain::mask_renderer::MaskStyle;
use screenveil_core::masking::infrastructure::blur_mask_renderer::DEFAULT_KERNEL_SIZE;
use screenveil_core::masking::infrastructure::renderer_factory::create_renderer;
use screenveil_core::shared::frame::Frame;
use screenveil_core::shared::region::Region;

/// Sensitive-content detection and masking for screen captures.
#[derive(Parser)]
#[command(name = "screenveil")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a piece of text and report matched sensitive spans.
    Classify {
        /// Text to classify.
        text: String,
    },
    /// Mask sensitive regions of an image using a detection sidecar.
    Mask {
        /// Input image file.
        input: PathBuf,

        /// Output image file.
        output: PathBuf,

        /// Detection sidecar (JSON with face boxes and recognized text).
        /// Without one the output is a passthrough copy.
        #[arg(long)]
        detections: Option<PathBuf>,

        /// Mask style: blur or fill.
        #[arg(long, default_value = "blur")]
        style: String,

        /// Gaussian blur kernel size (must be odd).
        #[arg(long, default_value_t = DEFAULT_KERNEL_SIZE)]
        kernel_size: usize,
    },
}

/// Detector output captured for one image, fed back in offline.
#[derive(Deserialize)]
struct DetectionSidecar {
    #[serde(default)]
    faces: Vec<BoxEntry>,
    #[serde(default)]
    texts: Vec<TextEntry>,
}

#[derive(Deserialize)]
struct BoxEntry {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[derive(Deserialize)]
struct TextEntry {
    text: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Classify { text } => run_classify(&text),
        Command::Mask {
            input,
            output,
            detections,
            style,
            kernel_size,
        } => {
            let style = parse_style(&style)?;
            validate_mask_args(&input, detections.as_deref(), kernel_size)?;
            run_mask(&input, &output, detections.as_deref(), style, kernel_size)
        }
    }
}

fn run_classify(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let verdict = classify(text);
    if verdict.sensitive {
        println!("sensitive: {:?}", verdict.category);
    } else {
        println!("not sensitive");
    }

    for span in find_spans(text) {
        println!(
            "  {} [{}..{}] {:?}",
            span.pattern, span.start_byte, span.end_byte, span.text
        );
    }
    Ok(())
}

fn run_mask(
    input: &Path,
    output: &Path,
    detections: Option<&Path>,
    style: MaskStyle,
    kernel_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame = load_frame(input, 0)?;

    // No sidecar means no detections: an empty region list renders a
    // passthrough copy.
    let regions = match detections {
        Some(path) => detect_from_sidecar(path, &frame)?,
        None => {
            log::info!("no detection sidecar; writing passthrough copy");
            Vec::new()
        }
    };

    let renderer = create_renderer(style, kernel_size);
    let masked = renderer.apply(&frame, &regions);
    save_frame(output, &masked)?;
    log::info!("Output written to {}", output.display());
    Ok(())
}

fn detect_from_sidecar(
    path: &Path,
    frame: &Frame,
) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
    let sidecar: DetectionSidecar = serde_json::from_reader(std::fs::File::open(path)?)?;

    let faces: Vec<Region> = sidecar
        .faces
        .into_iter()
        .map(|b| Region::new(b.x, b.y, b.width, b.height))
        .collect();
    let texts: Vec<TextBlock> = sidecar
        .texts
        .into_iter()
        .map(|t| TextBlock {
            text: t.text,
            region: Region::new(t.x, t.y, t.width, t.height),
        })
        .collect();

    let mut detector = RegionDetector::new(
        Box::new(CachedFaceDetector::new(HashMap::from([(0, faces)]))),
        Box::new(CachedTextRecognizer::new(HashMap::from([(0, texts)]))),
    );

    let items = detector.detect_regions(frame);
    let regions = sensitive_regions(&items, frame);
    log::info!(
        "{} detections, {} sensitive regions",
        items.len(),
        regions.len()
    );
    Ok(regions)
}

fn parse_style(style: &str) -> Result<MaskStyle, Box<dyn std::error::Error>> {
    match style {
        "blur" => Ok(MaskStyle::Blur),
        "fill" => Ok(MaskStyle::SolidFill),
        other => Err(format!("Mask style must be 'blur' or 'fill', got '{other}'").into()),
    }
}

fn validate_mask_args(
    input: &Path,
    detections: Option<&Path>,
    kernel_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file not found: {}", input.display()).into());
    }
    if let Some(detections) = detections {
        if !detections.exists() {
            return Err(format!("Detections file not found: {}", detections.display()).into());
        }
    }
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(format!("Kernel size must be a positive odd integer, got {kernel_size}").into());
    }
    Ok(())
}
