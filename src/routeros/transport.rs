// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Socket establishment for the RouterOS client

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Opens and closes the byte streams a client talks over.
///
/// [`TcpConnector`] is the production implementation; tests substitute
/// in-memory streams.
pub trait Connector {
    type Stream: Read + Write;

    /// Opens a stream whose reads and writes are bounded by `timeout`
    fn open(&mut self, host: &str, port: u16, timeout: Duration) -> io::Result<Self::Stream>;

    /// Best-effort close; must not fail
    fn close(&mut self, stream: Self::Stream) {
        drop(stream);
    }

    /// Waits between connect attempts
    fn pause(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Blocking TCP connector
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl Connector for TcpConnector {
    type Stream = TcpStream;

    fn open(&mut self, host: &str, port: u16, timeout: Duration) -> io::Result<TcpStream> {
        tracing::trace!("Attempting TCP connection to: {}:{}", host, port);
        let mut last_error = None;
        for addr in (host, port).to_socket_addrs()? {
            match TcpStream::connect_timeout(&addr, timeout) {
                Ok(stream) => {
                    stream.set_read_timeout(Some(timeout))?;
                    stream.set_write_timeout(Some(timeout))?;
                    stream.set_nodelay(true)?;
                    tracing::trace!("TCP connection established to: {}", addr);
                    return Ok(stream);
                }
                Err(e) => {
                    tracing::trace!("TCP connection to {} failed: {}", addr, e);
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no addresses resolved for {host}"),
            )
        }))
    }

    fn close(&mut self, stream: TcpStream) {
        if let Err(e) = stream.shutdown(Shutdown::Both) {
            tracing::trace!("Socket shutdown failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn test_tcp_connector_applies_timeouts() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let stream = TcpConnector
            .open("127.0.0.1", port, Duration::from_millis(750))
            .unwrap();

        assert_eq!(stream.read_timeout().unwrap(), Some(Duration::from_millis(750)));
        assert_eq!(stream.write_timeout().unwrap(), Some(Duration::from_millis(750)));
        TcpConnector.close(stream);
    }

    #[test]
    fn test_tcp_connector_refused() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let result = TcpConnector.open("127.0.0.1", port, Duration::from_millis(500));
        assert!(result.is_err());
    }
}
