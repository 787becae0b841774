/// Control socket: accepts one command per connection
use std::io;

use log::{debug, info};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::control::protocol::{handle_command, CommandOutcome};
use crate::stats::StatsEngine;

pub struct ControlServer {
    listener: TcpListener,
}

impl ControlServer {
    /// Bind the control listener on all interfaces
    pub async fn bind(port: u16) -> io::Result<Self> {
        let listener = TcpListener::bind(("0.0.0.0", port)).await?;
        info!(
            "control socket listening on port {}",
            listener.local_addr()?.port()
        );
        Ok(ControlServer { listener })
    }

    /// Port actually bound, for callers that asked for port 0
    pub fn local_port(&self) -> io::Result<u16> {
        Ok(self.listener.local_addr()?.port())
    }

    /// Wait for the next control connection
    pub async fn accept(&self) -> io::Result<TcpStream> {
        let (stream, addr) = self.listener.accept().await?;
        debug!("control connection from {}", addr);
        Ok(stream)
    }

    /// Serve exactly one command on an accepted connection
    ///
    /// The request is a single line, newline- or EOF-terminated. The
    /// connection is closed on return in every case; the return value is
    /// `true` when the command asked the monitor to shut down.
    pub async fn serve_connection(
        &self,
        stream: TcpStream,
        stats: &mut StatsEngine,
    ) -> io::Result<bool> {
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        reader.read_line(&mut line).await?;
        let request = line.trim_end_matches(|c| c == '\n' || c == '\r');

        match handle_command(request, stats) {
            CommandOutcome::Reply(reply) => {
                reader.get_mut().write_all(reply.as_bytes()).await?;
                Ok(false)
            }
            CommandOutcome::Shutdown => Ok(true),
            CommandOutcome::Rejected => Ok(false),
        }
    }
}
