pub mod client;
pub mod protocol;
pub mod server;

pub use client::PowermonClient;
pub use protocol::{handle_command, Command, CommandOutcome};
pub use server::ControlServer;
