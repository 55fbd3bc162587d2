// Server loop module
// Accepts connections until Ctrl+C

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::listener::create_listener;
use crate::config::AppState;

/// Bind the configured address and serve until Ctrl+C
///
/// Must run inside a `LocalSet`: connections are served with `spawn_local`.
pub async fn run(state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let addr = state.config.resolve_socket_addr().await?;
    let listener = create_listener(addr)?;
    state
        .logger
        .log_server_start(&state.config.server.host, &listener.local_addr()?);

    start_server_loop(listener, state).await;
    Ok(())
}

#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>) {
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => state.logger.log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            _ = &mut shutdown => {
                state.logger.log("Shutdown requested, no longer accepting connections.");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, ServerConfig};
    use crate::logger::Logger;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn state(files_dir: &std::path::Path) -> Arc<AppState> {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                files_dir: files_dir.to_path_buf(),
                read_timeout: 5,
                server_name: "exchange".to_string(),
                max_body_size: 1024,
            },
            logging: LoggingConfig {
                verbose: false,
                file_logging: false,
                log_file: std::path::PathBuf::from("server-logs.log"),
            },
        };
        Arc::new(AppState::new(config, Arc::new(Logger::silent())))
    }

    async fn exchange(addr: std::net::SocketAddr, raw: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(raw.as_bytes()).await.unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn test_serves_over_tcp() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("readme.txt"), "over the wire").unwrap();

        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let local = tokio::task::LocalSet::new();
        local.spawn_local(start_server_loop(listener, state(dir.path())));

        local
            .run_until(async move {
                let response = exchange(
                    addr,
                    "GET /?filePath=readme.txt HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
                )
                .await;
                assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
                assert!(response.contains("content-type: text/plain; charset=utf-8"));
                assert!(response.ends_with("over the wire"));

                let response = exchange(
                    addr,
                    "POST / HTTP/1.1\r\nHost: localhost\r\nContent-Type: text/plain\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
                )
                .await;
                assert!(response.starts_with("HTTP/1.1 201 Created"), "{response}");

                let response = exchange(
                    addr,
                    "DELETE / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
                )
                .await;
                assert!(response.starts_with("HTTP/1.1 405 Method Not Allowed"), "{response}");
                assert!(response.contains("allow: GET, POST, OPTIONS"));
            })
            .await;
    }
}
