use log::{info, warn};
use parking_detector::config::{self, RuntimeConfig};
use parking_detector::diagnostics::FpsMeter;
use parking_detector::frames::{FrameSource, ImageSequence};
use parking_detector::image::io::save_frame;
use parking_detector::image::Frame;
use parking_detector::overlay::{draw_slots, draw_status_bar};
use parking_detector::store::{load_slots, save_slots};
use parking_detector::{OccupancyTracker, Result, SlotDetector, SlotRect};
use std::env;
use std::path::Path;

const FPS_LOG_EVERY: usize = 30;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;

    let mut source = ImageSequence::open(&config.frames)?.with_looping(config.loop_frames);
    let slots = match bootstrap_slots(&config, &mut source)? {
        Some(slots) => slots,
        None => return Ok(()),
    };

    let mut tracker = OccupancyTracker::new(slots, config.occupancy);
    let mut fps = FpsMeter::new();
    let mut processed = 0usize;
    while config.max_frames.map_or(true, |max| processed < max) {
        let Some(frame) = source.next_frame()? else {
            break;
        };
        let snapshot = tracker.update(&frame);
        let rate = fps.tick();
        processed += 1;
        info!(
            "frame {processed}: available {}/{}",
            snapshot.available, snapshot.total
        );
        if processed % FPS_LOG_EVERY == 0 {
            info!("fps {rate:.1} (avg {:.1})", fps.average());
        }

        if let Some(dir) = &config.output.annotated_dir {
            let mut annotated =
                draw_slots(&frame, tracker.slots(), &snapshot.is_free, config.occupancy.alpha);
            draw_status_bar(&mut annotated, snapshot.available, snapshot.total);
            save_frame(&annotated, &dir.join(format!("frame_{processed:06}.png")))?;
        }
    }
    info!("processed {processed} frames");
    Ok(())
}

/// Load the persisted slots, or detect them on the first frame and save them.
/// `None` means nothing was found and the monitor should stop.
fn bootstrap_slots(
    config: &RuntimeConfig,
    source: &mut ImageSequence,
) -> Result<Option<Vec<SlotRect>>> {
    let slots = load_slots(&config.slots_path)?;
    if !slots.is_empty() {
        return Ok(Some(slots));
    }

    info!("no saved slots, detecting on the first frame");
    let Some(first) = source.next_frame()? else {
        warn!("frame source is empty");
        return Ok(None);
    };
    let slots = detect(config, &first);
    if slots.is_empty() {
        warn!("no parking slots detected, stopping");
        return Ok(None);
    }
    save_slots(&config.slots_path, &slots)?;
    Ok(Some(slots))
}

fn detect(config: &RuntimeConfig, frame: &Frame) -> Vec<SlotRect> {
    let detector = SlotDetector::new(config.detection.lines, config.detection.geometry);
    detector.detect(frame).slots
}

fn usage() -> parking_detector::Error {
    parking_detector::Error::Config("Usage: parking_monitor <config.json>".to_string())
}
