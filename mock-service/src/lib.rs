//! Local stand-in for the benchmark's target endpoint.
use axum::{debug_handler, extract::Path, http::StatusCode, routing::get, Json, Router};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use lazy_static::lazy_static;
use metrics::counter;
use serde::Serialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::{
    num::NonZeroU32,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, RwLock,
    },
    time::Duration,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::debug;

pub fn router() -> Router {
    Router::new()
        .route("/posts/:id", get(post))
        .route("/status/:code", get(status))
        .route("/delay/ms/:delay_ms", get(delay))
        .route("/max/:max_tps/scenario/:scenario_name", get(max))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router()).await
}

/// Serve on an ephemeral localhost port in the background and return the bound address.
pub async fn spawn() -> std::io::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router()).await {
            tracing::error!("Mock service stopped: {err}");
        }
    });
    Ok(addr)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub body: String,
}

#[debug_handler]
pub async fn post(Path(id): Path<u32>) -> Result<Json<Post>, StatusCode> {
    served();
    if id == 0 {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(Post {
        user_id: 1,
        id,
        title: "sunt aut facere repellat provident".to_string(),
        body: "quia et suscipit suscipit recusandae consequuntur expedita".to_string(),
    }))
}

#[debug_handler]
pub async fn status(Path(code): Path<u16>) -> StatusCode {
    served();
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

#[debug_handler]
pub async fn delay(Path(delay_ms): Path<u64>) {
    served();
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
}

lazy_static! {
    static ref MAX_MAP: Arc<RwLock<HashMap<String, DefaultDirectRateLimiter>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

/// Succeeds up to `max_tps` per second per scenario name, then answers 500.
#[debug_handler]
pub async fn max(
    Path((max_tps, scenario_name)): Path<(u32, String)>,
) -> Result<(), StatusCode> {
    served();
    let max_tps = NonZeroU32::new(max_tps).ok_or(StatusCode::BAD_REQUEST)?;

    {
        let map = MAX_MAP
            .read()
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        if let Some(limiter) = map.get(&scenario_name) {
            return limiter.check().map_err(|_| {
                debug!("MOCK SERVER ___ LIMITED");
                StatusCode::INTERNAL_SERVER_ERROR
            });
        }
    }

    let mut map = MAX_MAP
        .write()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let limiter = map
        .entry(scenario_name)
        .or_insert_with(|| rate_limiter(max_tps));
    limiter
        .check()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/** Utils **/

pub fn rate_limiter(tps: NonZeroU32) -> DefaultDirectRateLimiter {
    RateLimiter::direct(Quota::per_second(tps))
}

fn served() {
    counter!("mock_service_requests").increment(1);
    TPS_MEASURE.fetch_add(1, Ordering::Relaxed);
}

/** TPS Printer **/

static TPS_MEASURE: AtomicU64 = AtomicU64::new(0);

pub async fn tps_measure_task() {
    loop {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let transactions = TPS_MEASURE.swap(0, Ordering::Relaxed);
        println!("{transactions} TPS");
    }
}
