/// Byte transport to the meter, selected once at startup
use async_trait::async_trait;
use log::info;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_serial::{SerialPortBuilderExt, SerialStream};

use crate::config::MonitorConfig;
use crate::error::TransportError;

/// Prefix selecting a network-attached meter instead of a serial device
const TCP_SCHEME: &str = "tcp://";

/// Capability interface over the meter link
///
/// The monitor core reads and writes through this trait and never learns
/// whether the meter hangs off a serial port or a TCP socket.
#[async_trait]
pub trait Transport: Send {
    /// Read whatever bytes the meter has produced, up to `buf.len()`
    ///
    /// A return of `Ok(0)` means the transport was closed on the far side.
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError>;

    /// Write `data` to the meter in full
    async fn write(&mut self, data: &[u8]) -> Result<(), TransportError>;
}

pub struct SerialTransport {
    stream: SerialStream,
}

impl SerialTransport {
    pub fn new(stream: SerialStream) -> Self {
        SerialTransport { stream }
    }
}

#[async_trait]
impl Transport for SerialTransport {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        Ok(self.stream.read(buf).await?)
    }

    async fn write(&mut self, data: &[u8]) -> Result<(), TransportError> {
        Ok(self.stream.write_all(data).await?)
    }
}

pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        TcpTransport { stream }
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        Ok(self.stream.read(buf).await?)
    }

    async fn write(&mut self, data: &[u8]) -> Result<(), TransportError> {
        Ok(self.stream.write_all(data).await?)
    }
}

/// Open the transport named by the configuration
pub async fn open(config: &MonitorConfig) -> Result<Box<dyn Transport>, TransportError> {
    if let Some(addr) = config.port.strip_prefix(TCP_SCHEME) {
        info!("connecting to meter at {}", addr);
        let stream = TcpStream::connect(addr).await?;
        Ok(Box::new(TcpTransport::new(stream)))
    } else {
        info!("opening meter port {} at {} baud", config.port, config.speed);
        let stream = tokio_serial::new(config.port.as_str(), config.speed).open_native_async()?;
        Ok(Box::new(SerialTransport::new(stream)))
    }
}
