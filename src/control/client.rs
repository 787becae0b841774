/// Client side of the control protocol, one connection per command
use std::io;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::control::protocol::{CMD_ID, CMD_READ_POWER, CMD_RESET, CMD_SYSTEM_EXIT};

pub struct PowermonClient {
    addr: String,
}

impl PowermonClient {
    pub fn new(addr: impl Into<String>) -> Self {
        PowermonClient { addr: addr.into() }
    }

    /// Send one command and collect the reply until the monitor closes
    async fn exec(&self, cmd: &str) -> io::Result<String> {
        let mut stream = TcpStream::connect(&self.addr).await?;
        stream.write_all(cmd.as_bytes()).await?;
        stream.write_all(b"\n").await?;

        let mut reply = String::new();
        stream.read_to_string(&mut reply).await?;
        Ok(reply)
    }

    /// Current moving-average power level in dBm
    pub async fn read_power(&self) -> Result<f32, Box<dyn std::error::Error>> {
        let reply = self.exec(CMD_READ_POWER).await?;
        let value = reply
            .trim_end()
            .strip_suffix("dBm")
            .ok_or_else(|| format!("malformed READ_POWER reply: {:?}", reply))?;
        Ok(value.parse()?)
    }

    /// Clear the monitor's running statistics
    pub async fn reset(&self) -> io::Result<()> {
        self.exec(CMD_RESET).await.map(|_| ())
    }

    /// Vendor, product and version string of the monitor
    pub async fn id(&self) -> io::Result<String> {
        Ok(self.exec(CMD_ID).await?.trim_end().to_string())
    }

    /// Ask the monitor process to exit
    ///
    /// No reply is expected; the monitor may be gone before one could be
    /// written.
    pub async fn system_exit(&self) -> io::Result<()> {
        let mut stream = TcpStream::connect(&self.addr).await?;
        stream.write_all(CMD_SYSTEM_EXIT.as_bytes()).await?;
        stream.write_all(b"\n").await?;
        Ok(())
    }
}
