use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use log::{error, info};
use parking_lot::{Condvar, Mutex};
use crate::tracker::errors::StoreError;
use crate::tracker::structs::reaper::Reaper;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl Reaper {
    pub fn new(tracker: Arc<TorrentTracker>, interval: Duration) -> Reaper {
        Reaper {
            tracker,
            interval: interval.max(Duration::from_millis(1)),
            stop: Arc::new((Mutex::new(false), Condvar::new())),
            handle: Mutex::new(None),
        }
    }

    /// Spawns the timer thread. A second call while running does nothing.
    pub fn start(&self) -> Result<(), StoreError> {
        let mut handle = self.handle.lock();
        if handle.is_some() {
            return Ok(());
        }
        *self.stop.0.lock() = false;

        let tracker = self.tracker.clone();
        let stop = self.stop.clone();
        let interval = self.interval;
        info!("[BOOT] Starting Reaper thread with {} seconds delay...", interval.as_secs());
        *handle = Some(thread::Builder::new()
            .name("reaper".to_string())
            .spawn(move || Self::run(tracker, stop, interval))?);
        Ok(())
    }

    /// Signals the thread and waits for it to finish its current sweep.
    pub fn stop(&self) {
        {
            let (stopped, wakeup) = &*self.stop;
            *stopped.lock() = true;
            wakeup.notify_all();
        }
        let handle = self.handle.lock().take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                error!("[REAPER] Reaper thread panicked");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.lock().is_some()
    }

    fn run(tracker: Arc<TorrentTracker>, stop: Arc<(Mutex<bool>, Condvar)>, interval: Duration) {
        let (stopped, wakeup) = &*stop;
        loop {
            {
                let deadline = Instant::now() + interval;
                let mut guard = stopped.lock();
                while !*guard {
                    if wakeup.wait_until(&mut guard, deadline).timed_out() {
                        break;
                    }
                }
                if *guard {
                    info!("[BOOT] Shutting down Reaper thread...");
                    return;
                }
            }

            tracker.clock.refresh();
            match tracker.reap_all() {
                Ok(_) => {}
                Err(StoreError::ShuttingDown) => {
                    info!("[BOOT] Reaper interrupted by shutdown");
                    return;
                }
                Err(error) => {
                    error!("[REAPER] Sweep failed: {error}");
                }
            }
        }
    }
}

impl Drop for Reaper {
    fn drop(&mut self) {
        self.stop();
    }
}
