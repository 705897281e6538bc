use super::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Serve `router` on an ephemeral port and issue one raw HTTP/1.1 GET.
async fn get_status_line(router: Router, path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response.lines().next().unwrap_or_default().to_owned()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_route_is_mounted() {
    let status = get_status_line(base_routes(), "/healthz").await;
    assert!(status.starts_with("HTTP/1.1 200"), "unexpected status line: {status}");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let status = get_status_line(base_routes(), "/nope").await;
    assert!(status.starts_with("HTTP/1.1 404"), "unexpected status line: {status}");
}
