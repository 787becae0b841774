use std::env;
use std::str::FromStr;

// defaults matching the meter's usual deployment
const PORT_DEFAULT: &str = "/dev/ttyACM0";
const SPEED_DEFAULT: u32 = 115_200;
const FREQ_DEFAULT: u32 = 434;
const ATTEN_DEFAULT: f32 = 0.0;
const WINDOW_DEFAULT: usize = 512;
const CONTROL_DEFAULT: u16 = 41122;

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Serial device path, or `tcp://host:port` for a network-attached meter
    pub port: String,
    pub speed: u32,
    pub freq: u32,
    pub atten: f32,
    pub window: usize,
    pub control_port: u16,
    /// Keep an unterminated trailing frame across reads instead of dropping it
    pub carry_partial: bool,
}

impl MonitorConfig {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Load environment variables
        dotenv::dotenv().ok();

        let port = env::var("POWERMON_PORT").unwrap_or_else(|_| PORT_DEFAULT.to_string());
        let speed = parse_var("POWERMON_SPEED", SPEED_DEFAULT)?;
        let freq = parse_var("POWERMON_FREQ", FREQ_DEFAULT)?;
        let atten = parse_var("POWERMON_ATTEN", ATTEN_DEFAULT)?;
        let window = parse_var("POWERMON_WINDOW", WINDOW_DEFAULT)?;
        let control_port = parse_var("POWERMON_CONTROL", CONTROL_DEFAULT)?;
        let carry_partial = env::var("POWERMON_CARRY_PARTIAL")
            .map(|raw| matches!(raw.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        if window == 0 {
            return Err("POWERMON_WINDOW must be at least 1".into());
        }

        Ok(MonitorConfig {
            port,
            speed,
            freq,
            atten,
            window,
            control_port,
            carry_partial,
        })
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, Box<dyn std::error::Error>> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| format!("invalid value for {}: '{}'", key, raw).into()),
        Err(_) => Ok(default),
    }
}
