//! Infrared link seam.
//!
//! The control loop talks to the infrared hardware through
//! [`IrTransceiver`]: a fire-and-forget transmit of one 32-bit word and a
//! non-blocking poll for anything received. The pulse-level hardware lives
//! behind this trait and is not modeled here.
//!
//! [`UdpIr`] stands in for the optical channel on a bench: each word travels
//! as one 4-byte big-endian datagram broadcast to a fixed peer address.
//! Like the real channel it is unacknowledged and lossy.

use std::io;
use std::net::SocketAddr;

use tokio::net::UdpSocket;

use crate::protocol::nec;

/// One observation taken off the infrared link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrEvent {
    /// A complete 32-bit word
    Word(u32),
    /// Something that was not a 4-byte NEC frame
    Noise { len: usize },
}

pub trait IrTransceiver {
    /// Key one 32-bit word onto the channel. Fire-and-forget.
    fn transmit(&mut self, code: u32) -> io::Result<()>;

    /// Take the next received observation, if one arrived. Never blocks.
    fn poll_receive(&mut self) -> Option<IrEvent>;
}

pub struct UdpIr {
    socket: UdpSocket,
    peer: SocketAddr,
}

impl UdpIr {
    pub async fn bind(listen: &str, peer: &str) -> io::Result<Self> {
        let socket = UdpSocket::bind(listen).await?;
        socket.set_broadcast(true)?;
        let peer = peer
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        Ok(Self { socket, peer })
    }
}

impl IrTransceiver for UdpIr {
    fn transmit(&mut self, code: u32) -> io::Result<()> {
        self.socket
            .try_send_to(&nec::to_wire_bytes(code), self.peer)?;
        Ok(())
    }

    fn poll_receive(&mut self) -> Option<IrEvent> {
        let mut buf = [0u8; 16];
        match self.socket.try_recv_from(&mut buf) {
            Ok((4, _)) => Some(IrEvent::Word(nec::from_wire_bytes(&buf[..4]))),
            Ok((len, _)) => Some(IrEvent::Noise { len }),
            Err(_) => None,
        }
    }
}
