/// Delimiter scanning over the raw meter byte stream
use log::trace;

/// Length of one complete frame: sign, three relative-level digits,
/// five absolute-level digits, unit tag
pub const FRAME_LEN: usize = 10;

fn is_delimiter(byte: u8) -> bool {
    byte == b'+' || byte == b'-'
}

/// Carves delimiter-bounded frames out of raw reads from the meter
///
/// The sign characters double as frame delimiters: a candidate frame is the
/// span from one `+`/`-` up to, but not including, the next. Spans that are
/// not exactly [`FRAME_LEN`] bytes long are dropped without comment; the
/// meter emits partial output while retuning and there is nothing to salvage
/// from those spans.
///
/// By default the scanner holds no state between reads, so a frame split
/// across two reads is lost. With `carry_partial` enabled, the unterminated
/// tail of a read (at most one frame long) is kept and prepended to the
/// next read.
#[derive(Debug, Default)]
pub struct FrameScanner {
    carry_partial: bool,
    pending: Vec<u8>,
}

impl FrameScanner {
    pub fn new(carry_partial: bool) -> Self {
        FrameScanner {
            carry_partial,
            pending: Vec::new(),
        }
    }

    /// Extract all complete frames from `data`, in stream order
    pub fn scan(&mut self, data: &[u8]) -> Vec<[u8; FRAME_LEN]> {
        let combined: Vec<u8> = if self.pending.is_empty() {
            data.to_vec()
        } else {
            let mut held = std::mem::take(&mut self.pending);
            held.extend_from_slice(data);
            held
        };

        let mut frames = Vec::new();

        // everything before the first delimiter can never belong to a frame
        let mut start = match combined.iter().position(|&b| is_delimiter(b)) {
            Some(pos) => pos,
            None => return frames,
        };

        loop {
            let end = match combined[start + 1..].iter().position(|&b| is_delimiter(b)) {
                Some(offset) => start + 1 + offset,
                None => break,
            };

            let span = &combined[start..end];
            if span.len() == FRAME_LEN {
                let mut frame = [0u8; FRAME_LEN];
                frame.copy_from_slice(span);
                frames.push(frame);
            } else {
                trace!("dropping {}-byte span", span.len());
            }
            start = end;
        }

        // the tail has no terminating delimiter yet; keep it only in carry
        // mode, and only while it could still grow into a valid frame
        let tail = &combined[start..];
        if self.carry_partial && tail.len() <= FRAME_LEN {
            self.pending = tail.to_vec();
        }

        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_without_delimiters_yields_nothing() {
        let mut scanner = FrameScanner::new(false);
        assert!(scanner.scan(b"0123456789 no signs here").is_empty());
        assert!(scanner.scan(b"").is_empty());
    }

    #[test]
    fn consecutive_frames_are_all_extracted() {
        let mut scanner = FrameScanner::new(false);
        let frames = scanner.scan(b"-01501234u-03000123u+00807654m-");
        assert_eq!(frames.len(), 3);
        assert_eq!(&frames[0], b"-01501234u");
        assert_eq!(&frames[1], b"-03000123u");
        assert_eq!(&frames[2], b"+00807654m");
    }

    #[test]
    fn garbage_before_first_delimiter_is_discarded() {
        let mut scanner = FrameScanner::new(false);
        let frames = scanner.scan(b"34u\r\n-01501234u-");
        assert_eq!(frames.len(), 1);
        assert_eq!(&frames[0], b"-01501234u");
    }

    #[test]
    fn spans_of_wrong_length_are_dropped_silently() {
        let mut scanner = FrameScanner::new(false);
        // a truncated span between two good frames
        let frames = scanner.scan(b"-01501234u-015-03000123u-");
        assert_eq!(frames.len(), 2);
        assert_eq!(&frames[0], b"-01501234u");
        assert_eq!(&frames[1], b"-03000123u");
    }

    #[test]
    fn frame_split_across_reads_is_lost_by_default() {
        let mut scanner = FrameScanner::new(false);
        assert!(scanner.scan(b"-01501").is_empty());
        // the remainder of the split frame scans as garbage
        assert!(scanner.scan(b"234u-030").is_empty());
    }

    #[test]
    fn carry_partial_reassembles_a_split_frame() {
        let mut scanner = FrameScanner::new(true);
        assert!(scanner.scan(b"-01501").is_empty());
        let frames = scanner.scan(b"234u-030");
        assert_eq!(frames.len(), 1);
        assert_eq!(&frames[0], b"-01501234u");
    }

    #[test]
    fn carry_partial_keeps_an_exactly_complete_tail_until_terminated() {
        let mut scanner = FrameScanner::new(true);
        // a full frame with no terminating delimiter yet
        assert!(scanner.scan(b"-01501234u").is_empty());
        let frames = scanner.scan(b"-");
        assert_eq!(frames.len(), 1);
        assert_eq!(&frames[0], b"-01501234u");
    }

    #[test]
    fn carry_partial_drops_tails_too_long_to_ever_match() {
        let mut scanner = FrameScanner::new(true);
        // eleven bytes after the delimiter can no longer become a frame
        assert!(scanner.scan(b"-01501234uXY").is_empty());
        assert!(scanner.scan(b"-").is_empty());
    }
}
