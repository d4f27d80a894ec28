use std::collections::VecDeque;
use parking_lot::{Condvar, Mutex};
use crate::tasks::structs::task::Task;

/// Mutex-protected task list with one condition variable for workers waiting
/// on new tasks and one for pollers waiting on results.
#[derive(Debug, Default)]
pub struct WorkQueue {
    pub(crate) state: Mutex<WorkQueueState>,
    pub(crate) task_available: Condvar,
    pub(crate) result_available: Condvar,
}

#[derive(Debug, Default)]
pub(crate) struct WorkQueueState {
    pub(crate) tasks: VecDeque<Task>,
    pub(crate) last_id: u64,
    pub(crate) shutdown: bool,
}
