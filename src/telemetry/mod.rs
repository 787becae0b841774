pub mod decoder;
pub mod frame;

pub use decoder::decode_sample;
pub use frame::{FrameScanner, FRAME_LEN};
