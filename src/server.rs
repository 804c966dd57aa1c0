//! TCP query server for the word finder.
//!
//! Clients send length-delimited protobuf `WordRequest` messages and get a
//! length-delimited `WordsReply` back for each one, in order. Several
//! requests may share a single write; a request may also arrive split over
//! several reads.

use crate::console::Console;
use crate::solver::{SolveMode, Solver};
use prost::Message;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};
use tokio::task::JoinSet;

/// Address `serve` listens on unless told otherwise.
pub const DEFAULT_ADDR: &str = "0.0.0.0:1984";

/// Longest possible varint length prefix.
const MAX_PREFIX_LEN: usize = 10;

/// Which solver a request wants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum SolverKind {
    Ouija = 0,
    Scrabble = 1,
}

impl From<SolverKind> for SolveMode {
    fn from(kind: SolverKind) -> Self {
        match kind {
            SolverKind::Ouija => SolveMode::Ouija,
            SolverKind::Scrabble => SolveMode::Scrabble,
        }
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct WordRequest {
    #[prost(string, tag = "1")]
    pub letters: String,
    #[prost(enumeration = "SolverKind", tag = "2")]
    pub kind: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct WordsReply {
    #[prost(string, repeated, tag = "1")]
    pub words: Vec<String>,
}

/// Errors that end a single client connection.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Reading from or writing to the socket failed
    #[error("Connection error: {0}")]
    Io(#[from] io::Error),

    /// The client sent bytes that are not a valid request
    #[error("Malformed request: {0}")]
    Decode(#[from] prost::DecodeError),
}

/// Removes one complete length-delimited message from the front of `buf`.
///
/// Returns `Ok(None)` while the message is still incomplete.
pub fn take_frame<M: Message + Default>(
    buf: &mut Vec<u8>,
) -> Result<Option<M>, prost::DecodeError> {
    if buf.is_empty() {
        return Ok(None);
    }

    let len = match prost::decode_length_delimiter(&buf[..]) {
        Ok(len) => len,
        Err(_) if buf.len() < MAX_PREFIX_LEN => return Ok(None),
        Err(e) => return Err(e),
    };

    let start = prost::length_delimiter_len(len);
    let end = start + len;
    if buf.len() < end {
        return Ok(None);
    }

    let message = M::decode(&buf[start..end])?;
    buf.drain(..end);
    Ok(Some(message))
}

/// Answers one request.
pub fn answer(solver: &Solver, request: &WordRequest) -> WordsReply {
    let words = solver
        .solve(&request.letters, request.kind().into())
        .into_iter()
        .map(str::to_string)
        .collect();
    WordsReply { words }
}

/// Serves one client until it disconnects.
async fn serve_client(mut socket: TcpStream, solver: Arc<Solver>) -> Result<(), ServerError> {
    let mut buf = Vec::with_capacity(4096);

    loop {
        while let Some(request) = take_frame::<WordRequest>(&mut buf)? {
            let reply = answer(&solver, &request);
            socket.write_all(&reply.encode_length_delimited_to_vec()).await?;
        }

        if socket.read_buf(&mut buf).await? == 0 {
            return Ok(());
        }
    }
}

/// Word finder server, one task per connected client.
pub struct Server {
    listener: TcpListener,
    solver: Arc<Solver>,
    console: Console,
}

impl Server {
    /// Binds the listening socket.
    pub async fn bind<A: ToSocketAddrs>(
        addr: A,
        solver: Solver,
        console: Console,
    ) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            solver: Arc::new(solver),
            console,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts clients forever.
    ///
    /// A failed accept or a misbehaving client is reported and the server
    /// keeps going.
    pub async fn run(self) {
        let mut clients = JoinSet::new();

        loop {
            match self.listener.accept().await {
                Ok((socket, peer)) => {
                    let solver = Arc::clone(&self.solver);
                    let console = self.console.clone();
                    clients.spawn(async move {
                        if let Err(e) = serve_client(socket, solver).await {
                            console.warning(&format!("Client {}: {}", peer, e));
                        }
                    });
                }
                Err(e) => self.console.warning(&format!("Accept failed: {}", e)),
            }

            while clients.try_join_next().is_some() {}
        }
    }
}
