//! Background scan queue.
//!
//! Whole-table operations (full scrape, statistics, reaping) are too expensive
//! for the request path. They are pushed onto the `WorkQueue` as tasks, picked
//! up by long-lived worker threads from the `WorkerPool`, computed shard by
//! shard, and parked on the queue again as result buffers until the
//! requester collects them.
//!
//! # Lifecycle
//!
//! 1. `push_task(requester, kind)` appends an unassigned task (id 0)
//! 2. `pop_task(kind)` hands it to exactly one worker and assigns a unique id
//! 3. `push_result(id, buffers)` attaches the result, or reports it was canceled
//! 4. `pop_result()` / `wait_result(timeout)` delivers it back to the requester
//!
//! `cancel_task(requester)` may drop a task at any point before delivery.
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_swarm::tasks::enums::task_kind::TaskKind;
//! use torrust_swarm::tasks::structs::requester::Requester;
//!
//! tracker.submit_full_scan(Requester(7), TaskKind::FullScrape)?;
//! if let Some((requester, buffers)) = tracker.wait_scan_result(Duration::from_secs(5)) {
//!     // deliver `buffers` to `requester`
//! }
//! ```

/// Task kind enumeration.
pub mod enums;

/// Task, requester, queue and worker pool structures.
pub mod structs;

/// Implementation blocks for the queue and the worker pool.
pub mod impls;

/// Type aliases shared by the queue and its callers.
pub mod types;
