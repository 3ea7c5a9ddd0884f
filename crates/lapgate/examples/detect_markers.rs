use std::env;
use std::str::FromStr;

use image::ImageReader;
use log::{info, warn, LevelFilter};

use lapgate::core::init_with_level;
use lapgate::detect::detect_markers;
use lapgate::{Detector, DetectorParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level = env::var("LAPGATE_LOG")
        .ok()
        .and_then(|v| LevelFilter::from_str(&v).ok())
        .unwrap_or(LevelFilter::Info);
    init_with_level(level)?;

    let mut args = env::args().skip(1);
    let Some(image_path) = args.next() else {
        eprintln!("usage: detect_markers <frame.png> [--coarse]");
        std::process::exit(2);
    };
    let params = if args.any(|a| a == "--coarse") {
        DetectorParams::coarse()
    } else {
        DetectorParams::default()
    };

    let img = ImageReader::open(&image_path)?.decode()?.to_rgba8();
    info!("{}: {}x{}", image_path, img.width(), img.height());

    let mut detector = Detector::new(params);
    let markers = detect_markers(&mut detector, &img)?;

    if markers.is_empty() {
        warn!("no markers found");
    }
    for m in &markers {
        let c = m.corners;
        info!(
            "marker {:4}  corners ({:.1},{:.1}) ({:.1},{:.1}) ({:.1},{:.1}) ({:.1},{:.1})",
            m.id, c[0].x, c[0].y, c[1].x, c[1].y, c[2].x, c[2].y, c[3].x, c[3].y
        );
    }

    Ok(())
}
