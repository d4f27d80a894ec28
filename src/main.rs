use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{debug, error, info, warn};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use torrust_swarm::common::common::{setup_logging, shutdown_waiting};
use torrust_swarm::config::structs::configuration::Configuration;
use torrust_swarm::stats::enums::stats_event::StatsEvent;
use torrust_swarm::structs::Cli;
use torrust_swarm::tasks::enums::task_kind::TaskKind;
use torrust_swarm::tasks::structs::requester::Requester;
use torrust_swarm::tasks::structs::worker_pool::WorkerPool;
use torrust_swarm::tasks::types::ResultBuffers;
use torrust_swarm::tracker::structs::reaper::Reaper;
use torrust_swarm::tracker::structs::torrent_tracker::TorrentTracker;

/// Requester id used for the reports this process asks for itself.
const CONSOLE_REQUESTER: Requester = Requester(0);

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    let tracker = Arc::new(TorrentTracker::new(config.clone()));

    let workers = match WorkerPool::start(tracker.clone()) {
        Ok(workers) => workers,
        Err(error) => {
            error!("[BOOT] Unable to start workers: {error}");
            exit(1);
        }
    };

    let reaper = Reaper::new(tracker.clone(), Duration::from_secs(config.workers.reaper_interval));
    if let Err(error) = reaper.start() {
        error!("[BOOT] Unable to start the Reaper: {error}");
        exit(1);
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = tracker_spawn_stats.config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                loop {
                    if shutdown_waiting(Duration::from_secs(console_interval), stats_handler.clone()).await {
                        info!("[BOOT] Shutting down thread for console updates...");
                        return;
                    }

                    tracker_spawn_stats.set_stats(StatsEvent::TimestampConsole, chrono::Utc::now().timestamp());
                    let stats = tracker_spawn_stats.get_stats();
                    info!(
                        "[STATS] Swarms: {} - Seeds: {} - Peers: {} - Completed: {} | Announces: {} - Scrapes: {} - Failures: {}",
                        stats.swarms, stats.seeds, stats.peers, stats.completed,
                        stats.announces, stats.scrapes, stats.upsert_failures
                    );
                    info!(
                        "[STATS TASKS] Submitted: {} - Completed: {} - Canceled: {} - Failed: {} - Discarded: {} | Reaps: {} - Swarms reaped: {} - Peers reaped: {} | Lock stalls: {} - Violations: {}",
                        stats.scans_submitted, stats.scans_completed, stats.scans_canceled, stats.scans_failed, stats.results_discarded,
                        stats.reap_sweeps, stats.swarms_reaped, stats.peers_reaped,
                        stats.lock_stalls, stats.lock_violations
                    );

                    if let Err(error) = tracker_spawn_stats.submit_full_scan(CONSOLE_REQUESTER, TaskKind::Stats) {
                        warn!("[STATS] Unable to queue statistics report: {error}");
                    }
                }
            });

            let results_handler = tokio_shutdown.clone();
            let tracker_spawn_results = tracker.clone();
            info!("[BOOT] Starting thread for result delivery...");

            tokio::spawn(async move {
                loop {
                    let tracker_clone = tracker_spawn_results.clone();
                    tokio::select! {
                        result = tokio::task::spawn_blocking(move || tracker_clone.wait_scan_result(Duration::from_secs(1))) => {
                            match result {
                                Ok(Some((requester, buffers))) => deliver_result(requester, buffers),
                                Ok(None) => {}
                                Err(error) => {
                                    error!("[TASKS] Result poller failed: {error}");
                                    return;
                                }
                            }
                        }
                        _ = results_handler.handle() => {
                            info!("[BOOT] Shutting down thread for result delivery...");
                            return;
                        }
                    }
                }
            });

            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Shutdown request received, shutting down..."),
                Err(error) => error!("Unable to listen for shutdown signal: {error}"),
            }

            tracker.shutdown();
            tokio_shutdown.handle().await;
            tokio::time::sleep(Duration::from_secs(1)).await;
        });

    reaper.stop();
    workers.join();
    info!("Server shutting down completed");
    Ok(())
}

/// Hands a finished task's buffers to their requester. Connections belong to
/// the protocol layer; this process only consumes its own statistics reports.
fn deliver_result(requester: Requester, buffers: ResultBuffers)
{
    if requester != CONSOLE_REQUESTER {
        let bytes: usize = buffers.iter().map(Vec::len).sum();
        debug!("[TASKS] {} buffer(s), {bytes} bytes ready for {requester}", buffers.len());
        return;
    }

    for buffer in buffers {
        match serde_json::from_slice::<serde_json::Value>(&buffer) {
            Ok(report) => {
                info!(
                    "[STATS REPORT] Generation: {} - Totals: {} - Top swarms: {}",
                    report["generation"], report["totals"], report["top_swarms"]
                );
            }
            Err(error) => warn!("[STATS REPORT] Unreadable report: {error}"),
        }
    }
}
