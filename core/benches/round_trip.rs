use std::net::SocketAddr;

use criterion::{criterion_group, criterion_main, Criterion};

criterion_group!(benches, bench_round_trip);
criterion_main!(benches);

fn bench_round_trip(c: &mut Criterion) {
    let addr = spawn_server();
    let health = format!("http://{addr}/api/health/status");
    let payload = format!("http://{addr}/");

    let mut group = c.benchmark_group("round_trip");

    group.bench_function("fetch_status_small", |b| {
        b.iter(|| assert_eq!(probe_core::fetch_status(&health), 200));
    });

    group.bench_function("fetch_status_1mib", |b| {
        b.iter(|| assert_eq!(probe_core::fetch_status(&payload), 200));
    });

    // Pooled baseline: one agent reused across calls, body read into memory.
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();
    group.bench_function("pooled_agent_small", |b| {
        b.iter(|| {
            let mut response = agent.get(&health).call().unwrap();
            let _ = response.body_mut().read_to_vec().unwrap();
            assert_eq!(response.status().as_u16(), 200);
        });
    });

    group.finish();
}

fn spawn_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            let config = mock_server::Config {
                payload_len: 1024 * 1024,
                ..Default::default()
            };
            mock_server::run_with(listener, config).await
        })
        .unwrap();
    });

    addr
}
