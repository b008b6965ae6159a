use parking_detector::config::{self, RuntimeConfig};
use parking_detector::diagnostics::DetectionReport;
use parking_detector::frames::{FrameSource, ImageSequence};
use parking_detector::image::io::{save_frame, save_mask, write_json_file};
use parking_detector::image::Frame;
use parking_detector::occupancy::{AdaptiveMask, MaskExtractor};
use parking_detector::overlay::{
    draw_lines, draw_slots, FREE_COLOR, HORIZONTAL_COLOR, VERTICAL_COLOR,
};
use parking_detector::segments::LineSegment;
use parking_detector::slots::MergedLine;
use parking_detector::store::save_slots;
use parking_detector::{Error, Result, SlotDetector};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| Error::Config("Usage: slot_detect <config.json>".to_string()))?;
    let config = config::load_config(Path::new(&config_path))?;

    let mut source = ImageSequence::open(&config.frames)?;
    let frame = source
        .next_frame()?
        .ok_or_else(|| Error::FrameSource("no frame to detect on".to_string()))?;

    let detector = SlotDetector::new(config.detection.lines, config.detection.geometry);
    let (raw_lines, report) = detector.detect_with_lines(&frame);

    println!("{report}");

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }

    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &frame, &raw_lines, &report, &config)?;
        println!("Debug artifacts written to {}", dir.display());
    }

    if report.slots.is_empty() {
        println!("No slots detected; {} left untouched", config.slots_path.display());
    } else {
        save_slots(&config.slots_path, &report.slots)?;
        println!(
            "Saved {} slots to {}",
            report.slots.len(),
            config.slots_path.display()
        );
    }
    Ok(())
}

fn save_debug_artifacts(
    dir: &Path,
    frame: &Frame,
    raw_lines: &[LineSegment],
    report: &DetectionReport,
    config: &RuntimeConfig,
) -> Result<()> {
    let mut raw = frame.clone();
    draw_lines(&mut raw, raw_lines, FREE_COLOR, 2);
    save_frame(&raw, &dir.join("lines_raw.png"))?;

    let mut merged = frame.clone();
    draw_lines(&mut merged, &segments_of(&report.merged_vertical), VERTICAL_COLOR, 2);
    draw_lines(
        &mut merged,
        &segments_of(&report.merged_horizontal),
        HORIZONTAL_COLOR,
        2,
    );
    save_frame(&merged, &dir.join("lines_merged.png"))?;

    // Foreground the tracker would see on this frame.
    let mask = AdaptiveMask::new().extract(frame);
    save_mask(&mask, &dir.join("occupancy_mask.png"))?;

    let free = vec![true; report.slots.len()];
    let slots = draw_slots(frame, &report.slots, &free, config.occupancy.alpha);
    save_frame(&slots, &dir.join("slots.png"))
}

fn segments_of(lines: &[MergedLine]) -> Vec<LineSegment> {
    lines.iter().map(MergedLine::segment).collect()
}
