use std::fmt;
use std::fmt::Formatter;
use std::net::{Ipv4Addr, SocketAddrV4};
use serde::Serialize;
use crate::tracker::structs::peer_key::PeerKey;

impl PeerKey {
    pub fn new(ip: Ipv4Addr, port: u16) -> PeerKey {
        let octets = ip.octets();
        let port = port.to_be_bytes();
        PeerKey([octets[0], octets[1], octets[2], octets[3], port[0], port[1]])
    }

    pub fn ip(&self) -> Ipv4Addr {
        Ipv4Addr::new(self.0[0], self.0[1], self.0[2], self.0[3])
    }

    pub fn port(&self) -> u16 {
        u16::from_be_bytes([self.0[4], self.0[5]])
    }

    pub fn socket_addr(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.ip(), self.port())
    }
}

impl From<SocketAddrV4> for PeerKey {
    fn from(addr: SocketAddrV4) -> Self {
        PeerKey::new(*addr.ip(), addr.port())
    }
}

impl fmt::Display for PeerKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.socket_addr())
    }
}

impl Serialize for PeerKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
