/// Display for TaskKind.
pub mod task_kind;

/// Display for Requester.
pub mod requester;

/// Task construction and state.
pub mod task;

/// Queue operations.
pub mod work_queue;

/// Worker thread lifecycle.
pub mod worker_pool;
