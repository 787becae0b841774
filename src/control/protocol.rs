/// Text command protocol served on the control socket
use log::error;

use crate::stats::StatsEngine;

pub const CMD_READ_POWER: &str = "READ_POWER";
pub const CMD_RESET: &str = "RESET";
pub const CMD_ID: &str = "ID";
pub const CMD_SYSTEM_EXIT: &str = "SYSTEM_EXIT";

const ID_VENDOR: &str = "radiolib-org";
const ID_PRODUCT: &str = "RFpowerMon";

/// Commands accepted on the control socket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ReadPower,
    Reset,
    Id,
    SystemExit,
}

impl Command {
    /// Match a raw request line against the command set
    ///
    /// Matching is by prefix: anything after a recognized command token is
    /// ignored, and exactly one command is taken per line.
    pub fn parse(line: &str) -> Option<Command> {
        if line.starts_with(CMD_READ_POWER) {
            Some(Command::ReadPower)
        } else if line.starts_with(CMD_RESET) {
            Some(Command::Reset)
        } else if line.starts_with(CMD_ID) {
            Some(Command::Id)
        } else if line.starts_with(CMD_SYSTEM_EXIT) {
            Some(Command::SystemExit)
        } else {
            None
        }
    }
}

/// What the caller should do after dispatching one request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Write this reply, then close the connection
    Reply(String),
    /// Close the connection and stop the monitor
    Shutdown,
    /// Close the connection without replying
    Rejected,
}

/// Dispatch one request line against the statistics engine
pub fn handle_command(line: &str, stats: &mut StatsEngine) -> CommandOutcome {
    match Command::parse(line) {
        Some(Command::ReadPower) => {
            CommandOutcome::Reply(format!("{:.2}dBm\n", stats.summary().avg_dbm))
        }
        Some(Command::Reset) => {
            stats.reset();
            CommandOutcome::Reply("\n".to_string())
        }
        Some(Command::Id) => CommandOutcome::Reply(format!(
            "{},{},{}\n",
            ID_VENDOR,
            ID_PRODUCT,
            env!("CARGO_PKG_VERSION")
        )),
        Some(Command::SystemExit) => CommandOutcome::Shutdown,
        None => {
            error!("invalid socket cmd: {}", line);
            CommandOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AbsUnit, Sample};
    use time::OffsetDateTime;

    fn engine_with_average(dbm: f32) -> StatsEngine {
        let mut engine = StatsEngine::new(1);
        engine.update(&Sample {
            dbm,
            abs_level: 0.0,
            abs_unit: AbsUnit::Microwatt,
            time: OffsetDateTime::UNIX_EPOCH,
        });
        engine
    }

    #[test]
    fn read_power_replies_with_the_average() {
        let mut engine = engine_with_average(-12.34);
        assert_eq!(
            handle_command("READ_POWER", &mut engine),
            CommandOutcome::Reply("-12.34dBm\n".to_string())
        );
    }

    #[test]
    fn reset_replies_with_a_bare_newline_and_zeroes_the_average() {
        let mut engine = engine_with_average(-12.34);
        assert_eq!(
            handle_command("RESET", &mut engine),
            CommandOutcome::Reply("\n".to_string())
        );
        assert_eq!(
            handle_command("READ_POWER", &mut engine),
            CommandOutcome::Reply("0.00dBm\n".to_string())
        );
    }

    #[test]
    fn id_reports_vendor_product_and_version() {
        let mut engine = StatsEngine::new(1);
        let expected = format!("radiolib-org,RFpowerMon,{}\n", env!("CARGO_PKG_VERSION"));
        assert_eq!(
            handle_command("ID", &mut engine),
            CommandOutcome::Reply(expected)
        );
    }

    #[test]
    fn system_exit_requests_shutdown() {
        let mut engine = StatsEngine::new(1);
        assert_eq!(
            handle_command("SYSTEM_EXIT", &mut engine),
            CommandOutcome::Shutdown
        );
    }

    #[test]
    fn matching_is_by_prefix_with_trailing_text_ignored() {
        assert_eq!(Command::parse("READ_POWER please"), Some(Command::ReadPower));
        assert_eq!(Command::parse("RESET_ALL"), Some(Command::Reset));
        assert_eq!(Command::parse("IDLE"), Some(Command::Id));
        assert_eq!(Command::parse("READ"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn unknown_commands_are_rejected_without_a_reply() {
        let mut engine = engine_with_average(-12.34);
        assert_eq!(
            handle_command("UNKNOWN", &mut engine),
            CommandOutcome::Rejected
        );
        // a rejected line must not have touched the statistics
        assert_eq!(engine.summary().avg_dbm, -12.34);
    }
}
