// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! High-level RouterOS API client

use super::connection::Connection;
use super::error::ClientError;
use super::transport::{Connector, TcpConnector};
use super::types::{ClientOptions, Response};

/// `MikroTik` `RouterOS` API client
///
/// Holds at most one authenticated session. Commands are strictly
/// sequential: the protocol carries no request identifiers, so callers that
/// need concurrency open one client per concurrent operation.
pub struct RouterOsClient<C: Connector = TcpConnector> {
    connector: C,
    options: ClientOptions,
    connection: Option<Connection<C::Stream>>,
    failed_attempts: u32,
}

impl RouterOsClient {
    /// Creates a TCP client with the given options
    #[must_use]
    pub fn new(options: ClientOptions) -> Self {
        Self::with_connector(TcpConnector, options)
    }
}

impl<C: Connector> RouterOsClient<C> {
    #[must_use]
    pub fn with_connector(connector: C, options: ClientOptions) -> Self {
        Self {
            connector,
            options,
            connection: None,
            failed_attempts: 0,
        }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Attempts that failed during the most recent [`connect`](Self::connect)
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Opens a socket and logs in, retrying the pair up to `attempts` times.
    ///
    /// A socket that opens but fails login is closed before the next attempt.
    /// The client waits `retry_delay` between attempts, never after the last.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConnectFailed`] once every attempt has failed.
    pub fn connect(
        &mut self,
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        self.disconnect();
        self.failed_attempts = 0;

        let attempts = self.options.attempts.max(1);
        for attempt in 1..=attempts {
            match self.try_connect(host, port, username, password) {
                Ok(connection) => {
                    tracing::debug!(
                        "Connected to {}:{} as {} (attempt {}/{})",
                        host,
                        port,
                        username,
                        attempt,
                        attempts
                    );
                    self.connection = Some(connection);
                    return Ok(());
                }
                Err(e) => {
                    self.failed_attempts += 1;
                    tracing::warn!(
                        "Connection attempt {}/{} to {}:{} failed: {}",
                        attempt,
                        attempts,
                        host,
                        port,
                        e
                    );
                }
            }
            if attempt < attempts {
                self.connector.pause(self.options.retry_delay);
            }
        }
        Err(ClientError::ConnectFailed { attempts })
    }

    fn try_connect(
        &mut self,
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<Connection<C::Stream>, ClientError> {
        let stream = self
            .connector
            .open(host, port, self.options.timeout)
            .map_err(ClientError::Connect)?;
        let mut connection = Connection::new(stream, self.options.debug);
        match connection.login(username, password) {
            Ok(()) => Ok(connection),
            Err(e) => {
                self.connector.close(connection.into_inner());
                Err(e)
            }
        }
    }

    /// Closes the session, if any. Never fails.
    pub fn disconnect(&mut self) {
        if let Some(connection) = self.connection.take() {
            self.connector.close(connection.into_inner());
            tracing::debug!("Disconnected from router");
        }
    }

    /// Runs `path` with `attributes` (sent in the given order) and returns the
    /// router's reply.
    ///
    /// A `!trap` reply is a successful exchange and comes back as
    /// [`Response::Trap`]. Transport or framing failures are returned as errors
    /// and close the session, since the stream position is no longer known.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotConnected`] without a session, or the I/O or
    /// protocol error that interrupted the exchange.
    pub fn execute(
        &mut self,
        path: &str,
        attributes: &[(&str, &str)],
    ) -> Result<Response, ClientError> {
        let connection = self.connection.as_mut().ok_or(ClientError::NotConnected)?;
        match connection.command(path, attributes) {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::error!("Command {} failed: {}", path, e);
                self.disconnect();
                Err(e)
            }
        }
    }
}

impl<C: Connector> Drop for RouterOsClient<C> {
    fn drop(&mut self) {
        self.disconnect();
    }
}
