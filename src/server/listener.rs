// Listener construction.
// Binds on all interfaces, with SO_REUSEADDR so a port left in TIME_WAIT
// by a previous run can be reclaimed immediately.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

use crate::error::ServerError;

/// Create the listening socket for `port`.
///
/// A bind failure with `AddrInUse` is reported as
/// [`ServerError::PortInUse`] so the operator gets an actionable message;
/// any other OS failure passes through as [`ServerError::Bind`].
pub fn bind_listener(port: u16) -> Result<TcpListener, ServerError> {
    let addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port));

    create_listener(addr).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            ServerError::PortInUse { port }
        } else {
            ServerError::Bind { source: e }
        }
    })
}

fn create_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // Allow rebinding a port still in TIME_WAIT after a restart. An
    // actively bound port still fails with AddrInUse.
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility.
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_a_free_port() {
        let listener = bind_listener(0).unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn occupied_port_reports_port_in_use() {
        let first = bind_listener(0).unwrap();
        let port = first.local_addr().unwrap().port();

        let second = bind_listener(port);
        match second {
            Err(ServerError::PortInUse { port: reported }) => assert_eq!(reported, port),
            other => panic!("expected PortInUse, got {other:?}"),
        }

        // The first listener keeps serving uninterrupted.
        let client = tokio::net::TcpStream::connect(("127.0.0.1", port)).await;
        assert!(client.is_ok());
        let accepted = first.accept().await;
        assert!(accepted.is_ok());
    }

    #[tokio::test]
    async fn port_is_released_on_drop() {
        let first = bind_listener(0).unwrap();
        let port = first.local_addr().unwrap().port();
        drop(first);

        let rebound = bind_listener(port);
        assert!(rebound.is_ok());
    }
}
