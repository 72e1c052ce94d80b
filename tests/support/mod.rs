// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Loopback stand-in for a RouterOS API endpoint

#![allow(dead_code)]

use std::io::{BufReader, BufWriter, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use hotspot_register::routeros::{read_word, write_word};

/// One reply per request sentence, each reply a list of sentences
pub type Script = Vec<Vec<Vec<&'static str>>>;

pub struct FakeRouter {
    addr: SocketAddr,
    handle: JoinHandle<Vec<Vec<String>>>,
}

impl FakeRouter {
    /// Accepts a single connection and answers its request sentences in order
    /// with `script`. Once the script runs out it keeps reading until the
    /// client hangs up.
    pub fn spawn(script: Script) -> Self {
        Self::start(script, false)
    }

    /// Like [`FakeRouter::spawn`], but hangs up right after the last reply
    pub fn spawn_closing(script: Script) -> Self {
        Self::start(script, true)
    }

    fn start(script: Script, hang_up: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            serve(stream, script, hang_up)
        });
        Self { addr, handle }
    }

    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Every request sentence received, in order
    pub fn requests(self) -> Vec<Vec<String>> {
        self.handle.join().unwrap()
    }
}

fn serve(stream: TcpStream, script: Script, hang_up: bool) -> Vec<Vec<String>> {
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut writer = BufWriter::new(stream);
    let mut requests = Vec::new();
    let mut replies = script.into_iter().peekable();

    while let Some(request) = read_sentence(&mut reader) {
        requests.push(request);
        let Some(reply) = replies.next() else {
            continue;
        };
        for sentence in reply {
            for word in sentence {
                write_word(&mut writer, word.as_bytes()).unwrap();
            }
            write_word(&mut writer, &[]).unwrap();
        }
        writer.flush().unwrap();
        if hang_up && replies.peek().is_none() {
            break;
        }
    }
    requests
}

fn read_sentence(reader: &mut BufReader<TcpStream>) -> Option<Vec<String>> {
    let mut sentence = Vec::new();
    loop {
        let word = read_word(reader).ok()?;
        if word.is_empty() {
            return Some(sentence);
        }
        sentence.push(String::from_utf8_lossy(&word).into_owned());
    }
}

/// Port on loopback with nothing listening
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
