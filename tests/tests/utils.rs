use std::net::SocketAddr;
use std::path::Path;
use std::sync::{mpsc, OnceLock};
use tempfile::TempDir;
use tracing::error;

/// Start the mock service once per test binary and return its address.
///
/// Every `#[tokio::test]` owns a runtime that dies with the test, so the service gets a
/// runtime of its own on a background thread.
#[allow(unused)]
pub fn init() -> SocketAddr {
    static ADDR: OnceLock<SocketAddr> = OnceLock::new();

    *ADDR.get_or_init(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            default_panic(info);
            error!("Panic occurred: {info:?}");
        }));

        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .expect("mock service runtime");
            rt.block_on(async move {
                let addr = mock_service::spawn()
                    .await
                    .expect("mock service failed to bind");
                tx.send(addr).expect("test thread hung up");
                std::future::pending::<()>().await;
            });
        });
        rx.recv().expect("mock service thread died")
    })
}

/// Scratch directory for artifacts; removed when the returned handle drops.
#[allow(unused)]
pub fn scratch_dir() -> TempDir {
    TempDir::new().expect("failed to create scratch dir")
}

#[allow(unused)]
pub fn read_artifact(path: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(path).expect("artifact missing");
    serde_json::from_str(&raw).expect("artifact is not JSON")
}
