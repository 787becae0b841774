//! Raw meter bytes through the scanner, decoder and stats engine together.

use rust_rf_powermon::stats::StatsEngine;
use rust_rf_powermon::telemetry::{decode_sample, FrameScanner};

#[test]
fn stream_updates_running_statistics() {
    let mut scanner = FrameScanner::new(false);
    let mut stats = StatsEngine::new(8);

    // three frames, the last terminated by the next frame's sign
    let stream = b"-01501234u-03000123u-00807654m+";
    let frames = scanner.scan(stream);
    assert_eq!(frames.len(), 3);

    let mut levels = Vec::new();
    for frame in frames {
        let sample = decode_sample(&frame).expect("valid frame");
        levels.push(sample.dbm);
        stats.update(&sample);
    }

    assert_eq!(levels, vec![-1.5, -3.0, -0.8]);

    // every observed level sits between the running extremes
    let summary = stats.summary();
    for level in levels {
        assert!(summary.min_dbm <= level && level <= summary.max_dbm);
    }
    assert_eq!(summary.min_dbm, -3.0);
    assert_eq!(summary.max_dbm, -0.8);

    // three readings plus five zero slots
    assert!((summary.avg_dbm - (-5.3 / 8.0)).abs() < 1e-3);
}

#[test]
fn noisy_stream_only_contributes_valid_frames() {
    let mut scanner = FrameScanner::new(false);
    let mut stats = StatsEngine::new(4);

    // line noise, a truncated frame, then two good ones
    let stream = b"\x00\xff garbage-015-01501234u-02001000m-";
    let mut decoded = 0;
    for frame in scanner.scan(stream) {
        if let Ok(sample) = decode_sample(&frame) {
            stats.update(&sample);
            decoded += 1;
        }
    }

    assert_eq!(decoded, 2);
    let summary = stats.summary();
    assert_eq!(summary.min_dbm, -2.0);
    assert!((summary.avg_dbm - (-3.5 / 4.0)).abs() < 1e-3);
}
