/// Opaque handle identifying who a task's result goes to.
pub mod requester;

/// One job on the work queue.
pub mod task;

/// The shared job board.
pub mod work_queue;

/// Worker threads draining the job board.
pub mod worker_pool;
