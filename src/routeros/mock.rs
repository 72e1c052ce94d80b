// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! In-memory router sockets for unit tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Cursor, Read, Write};
use std::rc::Rc;
use std::time::Duration;

use super::connection::protocol::{read_word, write_word};
use super::transport::Connector;

/// Encodes reply sentences, each followed by its terminator
pub(crate) fn reply(sentences: &[&[&str]]) -> Vec<u8> {
    let mut buf = Vec::new();
    for sentence in sentences {
        for word in *sentence {
            write_word(&mut buf, word.as_bytes()).unwrap();
        }
        write_word(&mut buf, &[]).unwrap();
    }
    buf
}

/// Bytes written by the client, shared with the test after the stream is moved
#[derive(Clone, Default)]
pub(crate) struct Written(Rc<RefCell<Vec<u8>>>);

impl Written {
    /// Decodes every written word, terminators included as empty strings
    pub(crate) fn words(&self) -> Vec<String> {
        let bytes = self.0.borrow().clone();
        let mut reader = Cursor::new(bytes);
        let mut words = Vec::new();
        while (reader.position() as usize) < reader.get_ref().len() {
            let word = read_word(&mut reader).unwrap();
            words.push(String::from_utf8(word).unwrap());
        }
        words
    }
}

/// Scripted duplex stream that can hand out data in small chunks
pub(crate) struct MockStream {
    input: Cursor<Vec<u8>>,
    written: Written,
    chunk: usize,
}

impl MockStream {
    pub(crate) fn new(input: Vec<u8>) -> Self {
        Self::trickle(input, usize::MAX)
    }

    /// Stream whose reads return at most `chunk` bytes each
    pub(crate) fn trickle(input: Vec<u8>, chunk: usize) -> Self {
        Self {
            input: Cursor::new(input),
            written: Written::default(),
            chunk,
        }
    }

    pub(crate) fn written(&self) -> Written {
        self.written.clone()
    }
}

impl Read for MockStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let limit = buf.len().min(self.chunk);
        self.input.read(&mut buf[..limit])
    }
}

impl Write for MockStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// What a [`ScriptedConnector`] was asked to do
#[derive(Default)]
pub(crate) struct ConnectorLog {
    pub(crate) opened: usize,
    pub(crate) closed: usize,
    pub(crate) pauses: Vec<Duration>,
    pub(crate) streams: Vec<Written>,
}

/// Connector that replays a fixed list of socket outcomes.
///
/// `None` refuses the connection; `Some(bytes)` opens a stream that will
/// answer with `bytes`.
pub(crate) struct ScriptedConnector {
    outcomes: VecDeque<Option<Vec<u8>>>,
    log: Rc<RefCell<ConnectorLog>>,
}

impl ScriptedConnector {
    pub(crate) fn new(outcomes: Vec<Option<Vec<u8>>>) -> (Self, Rc<RefCell<ConnectorLog>>) {
        let log = Rc::new(RefCell::new(ConnectorLog::default()));
        let connector = Self {
            outcomes: outcomes.into(),
            log: log.clone(),
        };
        (connector, log)
    }
}

impl Connector for ScriptedConnector {
    type Stream = MockStream;

    fn open(&mut self, _host: &str, _port: u16, _timeout: Duration) -> io::Result<MockStream> {
        let mut log = self.log.borrow_mut();
        log.opened += 1;
        match self.outcomes.pop_front().flatten() {
            Some(bytes) => {
                let stream = MockStream::new(bytes);
                log.streams.push(stream.written());
                Ok(stream)
            }
            None => Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
        }
    }

    fn close(&mut self, stream: MockStream) {
        self.log.borrow_mut().closed += 1;
        drop(stream);
    }

    fn pause(&mut self, delay: Duration) {
        self.log.borrow_mut().pauses.push(delay);
    }
}
