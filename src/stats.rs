use crate::models::{Sample, StatsSummary};

// sentinel extremes, always beaten by the first real reading
const MIN_SENTINEL: f32 = 99.0;
const MAX_SENTINEL: f32 = -99.0;

/// Running minimum, maximum and moving average of the relative power level
///
/// The window is a circular buffer of the most recent readings. Slots start
/// at zero and the average is always taken over the full window, so it is
/// damped toward zero until the window has been written once.
#[derive(Debug)]
pub struct StatsEngine {
    window: Vec<f32>,
    cursor: usize,
    window_len: usize,
    min_dbm: f32,
    max_dbm: f32,
    avg_dbm: f32,
}

impl StatsEngine {
    pub fn new(window_len: usize) -> Self {
        StatsEngine {
            // one spare slot: the cursor wraps only after passing
            // `window_len`, so index `window_len` is written once per cycle
            // and never enters the average
            window: vec![0.0; window_len + 1],
            cursor: 0,
            window_len,
            min_dbm: MIN_SENTINEL,
            max_dbm: MAX_SENTINEL,
            avg_dbm: 0.0,
        }
    }

    /// Fold one sample into the window and the running extremes
    ///
    /// A reading that would be both a new minimum and a new maximum (the
    /// first reading after startup or reset) only moves the minimum; the
    /// maximum catches up on the next reading that is not a new minimum.
    pub fn update(&mut self, sample: &Sample) {
        if sample.dbm < self.min_dbm {
            self.min_dbm = sample.dbm;
        } else if sample.dbm > self.max_dbm {
            self.max_dbm = sample.dbm;
        }

        self.window[self.cursor] = sample.dbm;
        let sum: f32 = self.window[..self.window_len].iter().sum();
        self.avg_dbm = sum / self.window_len as f32;

        self.cursor += 1;
        if self.cursor > self.window_len {
            self.cursor = 0;
        }
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            min_dbm: self.min_dbm,
            max_dbm: self.max_dbm,
            avg_dbm: self.avg_dbm,
        }
    }

    /// Restore the sentinel extremes and zero the average
    ///
    /// The window contents and cursor stay in place: the next update
    /// recomputes the average from whatever readings are still buffered,
    /// giving a warm restart rather than a cold one.
    pub fn reset(&mut self) {
        self.min_dbm = MIN_SENTINEL;
        self.max_dbm = MAX_SENTINEL;
        self.avg_dbm = 0.0;
    }
}
