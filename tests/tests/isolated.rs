mod utils;
#[allow(unused)]
use utils::*;

use polybench::prelude::*;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::time::Duration;

#[tracing_test::traced_test]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn all_requests_succeed() {
    let addr = init();
    let temp = scratch_dir();
    let path = temp.path().join("ok.json");

    let report = api_benchmark()
        .url(&format!("http://{addr}/posts/1"))
        .requests(150)
        .output(&path)
        .await
        .unwrap();

    assert_eq!(report.total_requests, 150);
    assert_eq!(report.successful_requests, 150);
    assert_eq!(report.failed_requests, 0);
    assert_eq!(report.timeseries.len(), 150);
    assert!(report.requests_per_sec > 0.);
    assert!(report.response_times.min_ms <= report.response_times.median_ms);
    assert!(report.response_times.p99_ms <= report.response_times.max_ms);

    let value = read_artifact(&path);
    assert_eq!(value["language"], "rust");
    assert_eq!(value["successful_requests"], 150);
    assert_eq!(value["timeseries"].as_array().unwrap().len(), 150);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn non_200_responses_count_as_failures() {
    let addr = init();
    let temp = scratch_dir();

    for url in [
        format!("http://{addr}/status/404"),
        format!("http://{addr}/status/500"),
        format!("http://{addr}/status/204"),
        format!("http://{addr}/posts/0"),
    ] {
        let report = api_benchmark()
            .url(&url)
            .requests(50)
            .output(temp.path().join("status.json"))
            .await
            .unwrap();

        assert_eq!(report.failed_requests, 50, "{url}");
        assert_eq!(report.successful_requests, 0);
        assert_eq!(report.requests_per_sec, 0.);
        assert_eq!(report.response_times, Default::default());
        assert!(report.timeseries.is_empty());
        // wall time is still measured
        assert!(report.total_time_sec >= 0.);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn timeouts_are_counted_as_failures() {
    let addr = init();
    let temp = scratch_dir();

    let report = api_benchmark()
        .url(&format!("http://{addr}/delay/ms/2000"))
        .requests(20)
        .timeout(Duration::from_millis(200))
        .output(temp.path().join("timeout.json"))
        .await
        .unwrap();

    assert_eq!(report.failed_requests, 20);
    // every request was bounded by its own timeout, not serialized behind the others
    assert!(report.total_time_sec < 2.);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn latency_reflects_server_delay() {
    let addr = init();
    let temp = scratch_dir();

    let report = api_benchmark()
        .url(&format!("http://{addr}/delay/ms/50"))
        .requests(60)
        .output(temp.path().join("delay.json"))
        .await
        .unwrap();

    assert_eq!(report.successful_requests, 60);
    assert!(report.response_times.min_ms >= 50.);
    // concurrent dispatch: the batch takes about one delay, not sixty
    assert!(report.total_time_sec < 5.);
    assert!(report
        .timeseries
        .iter()
        .all(|p| p.timestamp_sec * 1000. + 1. >= p.latency_ms));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn mixed_outcomes_add_up() {
    let addr = init();
    let temp = scratch_dir();

    // Rate limited route: the first five requests pass, the rest get 500.
    let report = api_benchmark()
        .url(&format!("http://{addr}/max/5/scenario/mixed"))
        .requests(60)
        .output(temp.path().join("mixed.json"))
        .await
        .unwrap();

    assert_eq!(
        report.total_requests,
        report.successful_requests + report.failed_requests
    );
    assert_eq!(report.timeseries.len(), report.successful_requests);
    assert!(report.successful_requests >= 1);
    assert!(report.failed_requests >= 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn bounded_concurrency_keeps_report_shape() {
    let addr = init();
    let temp = scratch_dir();

    let report = api_benchmark()
        .url(&format!("http://{addr}/posts/1"))
        .requests(300)
        .concurrency(Concurrency::Limited(NonZeroUsize::new(16).unwrap()))
        .output(temp.path().join("bounded.json"))
        .await
        .unwrap();

    assert_eq!(report.total_requests, 300);
    assert_eq!(report.successful_requests, 300);
    assert_eq!(report.timeseries.len(), 300);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn batch_outcomes_cover_every_id() {
    let addr = init();
    let config = polybench_core::BenchConfig {
        num_requests: 100,
        ..polybench_core::BenchConfig::new(&format!("http://{addr}/posts/1"))
    };

    let client = polybench::orchestrator::build_client(&config).unwrap();
    let batch = polybench::orchestrator::dispatch(&client, &config)
        .await
        .unwrap();

    let ids: HashSet<_> = batch.outcomes.iter().map(|o| o.id).collect();
    assert_eq!(ids.len(), 100);
    assert!(batch.outcomes.iter().all(|o| o.status == Some(200)));
    assert!(batch.outcomes.iter().all(|o| o.error_message.is_none()));
    let last = batch
        .outcomes
        .iter()
        .map(|o| o.timestamp_sec)
        .fold(0., f64::max);
    assert!(last <= batch.elapsed.as_secs_f64());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn unwritable_artifact_does_not_fail_the_run() {
    let addr = init();
    let temp = scratch_dir();
    let path = temp.path().join("no-such-dir").join("api_results.json");

    let report = api_benchmark()
        .url(&format!("http://{addr}/posts/1"))
        .requests(10)
        .output(&path)
        .await
        .unwrap();

    assert_eq!(report.successful_requests, 10);
    assert!(!path.exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn non_200_outcomes_carry_no_error_message() {
    let addr = init();

    for code in [404u16, 500] {
        let config = polybench_core::BenchConfig {
            num_requests: 20,
            ..polybench_core::BenchConfig::new(&format!("http://{addr}/status/{code}"))
        };
        let client = polybench::orchestrator::build_client(&config).unwrap();
        let batch = polybench::orchestrator::dispatch(&client, &config)
            .await
            .unwrap();

        assert_eq!(batch.outcomes.len(), 20);
        for outcome in &batch.outcomes {
            assert!(!outcome.success, "{code}");
            assert_eq!(outcome.status, Some(code));
            assert!(outcome.error_message.is_none(), "{code}: {:?}", outcome.error_message);
        }
    }
}

#[tokio::test]
async fn single_execution_classifies_status() {
    let addr = init();
    let client = reqwest::Client::new();
    let start = std::time::Instant::now();

    let ok = polybench::executor::execute(
        &client,
        &format!("http://{addr}/posts/1"),
        0,
        start,
        polybench_core::API_REQUEST_LABELS,
    )
    .await;
    assert!(ok.success);
    assert_eq!(ok.status, Some(200));
    assert!(ok.error_message.is_none());

    let not_found = polybench::executor::execute(
        &client,
        &format!("http://{addr}/status/404"),
        1,
        start,
        polybench_core::API_REQUEST_LABELS,
    )
    .await;
    assert!(!not_found.success);
    assert_eq!(not_found.status, Some(404));
    assert!(not_found.error_message.is_none());
    assert!(not_found.timestamp_sec >= ok.timestamp_sec);
}
