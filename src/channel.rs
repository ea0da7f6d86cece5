//! Command channel to the arbiter.
//!
//! One persistent TCP connection carries newline-terminated sighting reports
//! out and 4-hex-character command lines back in. At most one connection is
//! live at a time; it is replaced wholesale on reconnect, never pooled. A
//! failed connect attempt stalls the caller for the configured retry delay
//! before control returns, and with it the entire control loop.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

/// What happened to an outbound line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Written to the live connection
    Sent,
    /// No live connection; the line was dropped and a reconnect attempted
    Dropped,
}

pub struct CommandChannel {
    arbiter: String,
    retry_delay: Duration,
    conn: Option<Conn>,
}

struct Conn {
    writer: OwnedWriteHalf,
    inbound: mpsc::UnboundedReceiver<String>,
}

impl CommandChannel {
    pub fn new(arbiter: String, retry_delay: Duration) -> Self {
        Self {
            arbiter,
            retry_delay,
            conn: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Try to establish the connection.
    ///
    /// On failure the retry delay is waited out before this returns, so the
    /// whole control loop stalls. That is the only place the device blocks.
    pub async fn connect(&mut self) -> bool {
        match TcpStream::connect(&self.arbiter).await {
            Ok(stream) => {
                println!("Connected to arbiter at {}", self.arbiter);
                let (reader, writer) = stream.into_split();
                let (tx, rx) = mpsc::unbounded_channel();
                tokio::spawn(read_lines(BufReader::new(reader), tx));
                self.conn = Some(Conn {
                    writer,
                    inbound: rx,
                });
                true
            }
            Err(e) => {
                eprintln!(
                    "Connection to {} failed ({}). Retrying in {:?}...",
                    self.arbiter, e, self.retry_delay
                );
                tokio::time::sleep(self.retry_delay).await;
                false
            }
        }
    }

    /// Send one already-framed line.
    ///
    /// Fire-and-forget: without a live connection the line is dropped and
    /// the drop triggers a reconnect attempt, the system's only retry path.
    /// A failed write also drops the line and tears the connection down.
    pub async fn send_line(&mut self, line: &str) -> SendOutcome {
        let Some(conn) = self.conn.as_mut() else {
            self.connect().await;
            return SendOutcome::Dropped;
        };

        if let Err(e) = conn.writer.write_all(line.as_bytes()).await {
            eprintln!("Write to arbiter failed: {:?}", e);
            self.conn = None;
            return SendOutcome::Dropped;
        }

        SendOutcome::Sent
    }

    /// Take the next complete inbound line, if one has arrived. Never blocks.
    pub fn poll_line(&mut self) -> Option<String> {
        let conn = self.conn.as_mut()?;
        match conn.inbound.try_recv() {
            Ok(line) => Some(line),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                println!("Arbiter closed the connection");
                self.conn = None;
                None
            }
        }
    }

    /// Liveness check: reconnect if the connection has gone away.
    pub async fn ensure_connected(&mut self) {
        if self.conn.is_none() {
            self.connect().await;
        }
    }
}

async fn read_lines(mut reader: BufReader<OwnedReadHalf>, tx: mpsc::UnboundedSender<String>) {
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => return,
            Ok(_n) => {
                if tx.send(line.trim_end().to_string()).is_err() {
                    // Connection was replaced; stop reading the old stream
                    return;
                }
            }
            Err(e) => {
                eprintln!("Read error: {:?}", e);
                return;
            }
        }
    }
}
