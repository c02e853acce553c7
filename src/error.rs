use std::net::SocketAddr;

/// Failures that stop the server binary.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to load leptos configuration: {0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[from] std::io::Error),
}
