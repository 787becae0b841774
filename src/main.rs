use std::io::Write;

use log::{debug, error, info};
use time::OffsetDateTime;

use rust_rf_powermon::config::MonitorConfig;
use rust_rf_powermon::control::ControlServer;
use rust_rf_powermon::error::TransportError;
use rust_rf_powermon::stats::StatsEngine;
use rust_rf_powermon::telemetry::{decode_sample, FrameScanner};
use rust_rf_powermon::transport::{self, Transport};
use rust_rf_powermon::utils::{format_datetime, format_status_line, STATUS_HEADER};

// buffer to read incoming telemetry into
const RX_BUFF_SIZE: usize = 4096;

/// Push the configured frequency and attenuation down to the meter.
async fn send_meter_setup(
    transport: &mut dyn Transport,
    freq: u32,
    atten: f32,
) -> Result<(), TransportError> {
    let setup = format!("A{:04}+{:.2}\r\n", freq, atten);
    transport.write(setup.as_bytes()).await
}

async fn main_loop(config: MonitorConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Starting RF power monitor at {}",
        format_datetime(&OffsetDateTime::now_utc())
    );

    let mut transport = transport::open(&config).await?;
    send_meter_setup(transport.as_mut(), config.freq, config.atten).await?;

    let server = ControlServer::bind(config.control_port).await?;

    let mut stats = StatsEngine::new(config.window);
    let mut scanner = FrameScanner::new(config.carry_partial);
    let mut rx_buff = [0u8; RX_BUFF_SIZE];

    println!("{}", STATUS_HEADER);

    loop {
        tokio::select! {
            read = transport.read(&mut rx_buff) => {
                let count = read?;
                if count == 0 {
                    return Err(TransportError::Closed.into());
                }

                for frame in scanner.scan(&rx_buff[..count]) {
                    match decode_sample(&frame) {
                        Ok(sample) => {
                            stats.update(&sample);
                            print!("{}", format_status_line(&sample, &stats.summary()));
                            let _ = std::io::stdout().flush();
                        }
                        Err(e) => debug!("dropping frame: {}", e),
                    }
                }
            }
            pending = server.accept() => {
                match pending {
                    Ok(connection) => match server.serve_connection(connection, &mut stats).await {
                        Ok(true) => {
                            info!("Shutdown requested over control socket");
                            return Ok(());
                        }
                        Ok(false) => {}
                        Err(e) => error!("Control connection failed: {}", e),
                    },
                    Err(e) => error!("Control accept failed: {}", e),
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    // Load configuration
    let config = match MonitorConfig::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    // Handle Ctrl+C gracefully
    let (tx, mut rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        let _ = tx.send(());
    });

    // Run the monitor loop or wait for the shutdown signal
    tokio::select! {
        result = main_loop(config) => {
            match result {
                Ok(_) => info!("Monitor stopped"),
                Err(e) => error!("Fatal error: {}", e),
            }
        }
        _ = &mut rx => {
            info!("Program terminated by user. Exiting gracefully.");
        }
    }

    Ok(())
}
