use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Instant;
use threadlog_core::render::render;
use threadlog_core::{EngineConfig, Logger, RenderMode, StatusSink, log_debug, log_info};
use tracing::info;

const ROUTES: &[(&str, &str)] = &[
    ("GET", "/profile"),
    ("POST", "/orders"),
    ("GET", "/search"),
    ("DELETE", "/sessions"),
];

pub struct DemoOptions {
    pub requests: usize,
    pub workers: usize,
    pub mode: RenderMode,
    pub config: EngineConfig,
}

#[derive(Default)]
struct Tally {
    records: AtomicUsize,
    failed: AtomicUsize,
}

/// Status sink standing in for an HTTP response writer.
#[derive(Default)]
struct DemoResponse {
    status: Option<u16>,
}

impl StatusSink for DemoResponse {
    fn set_status(&mut self, code: u16) {
        self.status = Some(code);
    }
}

pub fn run_demo(opts: DemoOptions) -> Result<()> {
    if opts.workers == 0 {
        bail!("--workers must be at least 1");
    }

    let logger = Logger::from_config(&opts.config);
    let tally = Arc::new(Tally::default());

    let mode = opts.mode;
    let marker = opts.config.path_marker.clone();
    let seen = Arc::clone(&tally);
    logger.set_on_log(move |record| {
        seen.records.fetch_add(1, Ordering::Relaxed);
        print!("{}", render(&record, mode, &marker));
    });

    let failed = Arc::clone(&tally);
    logger.set_on_error(move |_| {
        failed.failed.fetch_add(1, Ordering::Relaxed);
    });

    info!(
        requests = opts.requests,
        workers = opts.workers,
        "demo starting"
    );

    let mut maintenance = logger.session("maintenance");
    maintenance.info("rotating request buffers");

    thread::scope(|s| {
        for worker in 0..opts.workers {
            let logger = &logger;
            s.spawn(move || {
                for n in (worker..opts.requests).step_by(opts.workers) {
                    handle_request(logger, n);
                }
            });
        }
    });

    if maintenance.seen_error() {
        maintenance.error("maintenance saw errors");
    }
    log_debug!(maintenance, "{} open threads left", logger.store().open_threads());
    maintenance.end();

    // Nothing was buffered, so this session is suppressed.
    logger.session("noop").end();

    println!(
        "\n{} records, {} with errors",
        tally.records.load(Ordering::Relaxed).green(),
        tally.failed.load(Ordering::Relaxed).red()
    );

    Ok(())
}

fn handle_request(logger: &Logger, n: usize) {
    let started = Instant::now();
    let id = logger.new_id();
    let (method, route) = ROUTES[n % ROUTES.len()];
    let mut response = DemoResponse::default();

    log_info!(logger.thread(&id), "handling {method} {route}").data("request", n);
    logger.debug(&id, "loaded request fixtures");

    match n % 7 {
        3 => logger.not_found(&id, &mut response),
        5 => {
            logger
                .bad_request(&id, &mut response, "payload failed validation")
                .data("field", "email");
        }
        _ => logger.http_status(&id, &mut response, 200),
    }

    if n % 11 == 10 {
        logger.error_multi(
            &id,
            "upstream retries exhausted",
            "cause",
            ["timeout", "timeout", "connection reset"],
        );
    }

    logger
        .info(&id, "response written")
        .data("status", response.status.unwrap_or_default());

    let address = format!("192.0.2.{}", n % 250 + 1);
    logger.end(&id, &address, method, route, started.elapsed());
}
