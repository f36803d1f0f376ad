//! Network transport for raw ZPL print jobs
//!
//! Label printers accept jobs on the raw printing port with no
//! handshake: open a TCP connection, write the job bytes, close. This
//! module wraps that sequence with a per-phase deadline and a typed
//! outcome.

use crate::error::{PrintError, PrintResult};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, instrument, warn};

/// Default bound on the connect phase and on the write phase.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Conventional raw-socket printing port.
pub const RAW_PRINT_PORT: u16 = 9100;

/// Trait for printer transports
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Send a raw print job to the printer
    async fn print(&self, data: &[u8]) -> PrintResult<()>;

    /// Check if the printer is reachable
    async fn is_online(&self) -> bool;
}

/// Network label printer (raw TCP, conventionally port 9100)
///
/// The destination is kept as (host, port) and resolved by the OS at
/// connect time, so DNS names work as well as IP literals.
#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    host: String,
    port: u16,
    timeout: Duration,
}

impl NetworkPrinter {
    /// Create a new network printer with the default 10 second timeout
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the bound applied to the connect phase and to the write phase
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the printer host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the printer port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the configured timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Connect, write the whole job, flush.
    ///
    /// The stream is scoped to this call: every return path drops it,
    /// which closes the socket.
    async fn send(&self, data: &[u8]) -> PrintResult<()> {
        info!("Connecting to printer at {}:{}", self.host, self.port);

        let mut stream = tokio::time::timeout(
            self.timeout,
            TcpStream::connect((self.host.as_str(), self.port)),
        )
        .await
        .map_err(|_| {
            PrintError::Timeout(format!(
                "connection to {}:{} timed out after {:?}",
                self.host, self.port, self.timeout
            ))
        })?
        .map_err(|e| PrintError::Connection(format!("{}:{}: {}", self.host, self.port, e)))?;

        info!("Sending {} bytes", data.len());

        tokio::time::timeout(self.timeout, async {
            stream.write_all(data).await?;
            stream.flush().await
        })
        .await
        .map_err(|_| {
            PrintError::Timeout(format!(
                "write to {}:{} timed out after {:?}",
                self.host, self.port, self.timeout
            ))
        })??;

        info!("Print job sent successfully");
        Ok(())
    }
}

impl Printer for NetworkPrinter {
    #[instrument(skip(data), fields(host = %self.host, port = self.port, data_len = data.len()))]
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        let result = self.send(data).await;

        // The stream lives inside send(), so it is already dropped here
        // whatever the outcome.
        info!("Connection closed");

        result
    }

    #[instrument(fields(host = %self.host, port = self.port))]
    async fn is_online(&self) -> bool {
        let probe_timeout = Duration::from_millis(500);

        match tokio::time::timeout(
            probe_timeout,
            TcpStream::connect((self.host.as_str(), self.port)),
        )
        .await
        {
            Ok(Ok(_)) => {
                info!("Printer online");
                true
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Printer offline");
                false
            }
            Err(_) => {
                warn!("Printer check timeout");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_printer_new() {
        let printer = NetworkPrinter::new("192.168.1.50", RAW_PRINT_PORT);
        assert_eq!(printer.host(), "192.168.1.50");
        assert_eq!(printer.port(), 9100);
        assert_eq!(printer.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_with_timeout() {
        let printer =
            NetworkPrinter::new("printer.local", RAW_PRINT_PORT).with_timeout(Duration::from_secs(2));
        assert_eq!(printer.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_hostname_destination_is_kept_verbatim() {
        let printer = NetworkPrinter::new("labels.internal", 9101);
        assert_eq!(printer.host(), "labels.internal");
        assert_eq!(printer.port(), 9101);
    }
}
