use std::time::{Duration, Instant};
use log::{debug, warn};
use crate::tasks::enums::task_kind::TaskKind;
use crate::tasks::structs::requester::Requester;
use crate::tasks::structs::task::Task;
use crate::tasks::structs::work_queue::WorkQueue;
use crate::tasks::types::ResultBuffers;
use crate::tracker::errors::StoreError;

impl WorkQueue {
    pub fn new() -> WorkQueue {
        WorkQueue::default()
    }

    /// Appends an unassigned task and wakes every waiting worker.
    pub fn push_task(&self, requester: Requester, kind: TaskKind) -> Result<(), StoreError> {
        let mut state = self.state.lock();
        if state.shutdown {
            return Err(StoreError::ShuttingDown);
        }
        state.tasks.push_back(Task::new(requester, kind));
        drop(state);
        self.task_available.notify_all();
        debug!("[TASKS] Queued {kind} task for {requester}");
        Ok(())
    }

    /// Blocks until an unassigned task of `kind` exists, claims it and returns
    /// its freshly assigned id. Scan and claim share one critical section, so
    /// each task is handed to exactly one caller.
    pub fn pop_task(&self, kind: TaskKind) -> Result<u64, StoreError> {
        let mut state = self.state.lock();
        loop {
            if state.shutdown {
                return Err(StoreError::ShuttingDown);
            }
            let claimable = state.tasks.iter().position(|task| task.kind == kind && !task.is_assigned());
            if let Some(index) = claimable {
                state.last_id += 1;
                let id = state.last_id;
                state.tasks[index].id = id;
                return Ok(id);
            }
            self.task_available.wait(&mut state);
        }
    }

    /// Attaches `buffers` to task `id`. Returns false when the task is gone
    /// (canceled meanwhile) or already done; the buffers are dropped then.
    pub fn push_result(&self, id: u64, buffers: ResultBuffers) -> bool {
        if id == 0 {
            return false;
        }
        let mut state = self.state.lock();
        match state.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) if !task.is_done() => {
                task.result = Some(buffers);
            }
            Some(_) => {
                warn!("[TASKS] Result pushed twice for task {id}, dropping the second one");
                return false;
            }
            None => {
                debug!("[TASKS] Task {id} was canceled before its result arrived");
                return false;
            }
        }
        drop(state);
        self.result_available.notify_all();
        true
    }

    /// Removes the first finished task, if any, without blocking.
    pub fn pop_result(&self) -> Option<(Requester, ResultBuffers)> {
        let mut state = self.state.lock();
        let index = state.tasks.iter().position(Task::is_done)?;
        let task = state.tasks.remove(index)?;
        Some((task.requester, task.result.unwrap_or_default()))
    }

    /// Like `pop_result`, but waits up to `timeout` for a result to arrive.
    pub fn wait_result(&self, timeout: Duration) -> Option<(Requester, ResultBuffers)> {
        let deadline = Instant::now() + timeout;
        let mut state = self.state.lock();
        loop {
            if let Some(index) = state.tasks.iter().position(Task::is_done) {
                let task = state.tasks.remove(index)?;
                return Some((task.requester, task.result.unwrap_or_default()));
            }
            if state.shutdown {
                return None;
            }
            if self.result_available.wait_until(&mut state, deadline).timed_out() {
                let index = state.tasks.iter().position(Task::is_done)?;
                let task = state.tasks.remove(index)?;
                return Some((task.requester, task.result.unwrap_or_default()));
            }
        }
    }

    /// Removes claimed task `id` whose computation failed, so its requester
    /// never receives a result that looks complete. Returns false when the
    /// task was already canceled or finished.
    pub fn fail_task(&self, id: u64) -> bool {
        let mut state = self.state.lock();
        match state.tasks.iter().position(|task| task.id == id && id != 0 && !task.is_done()) {
            Some(index) => {
                state.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drops every task tied to `requester`, including finished results.
    /// Returns how many were removed.
    pub fn cancel_task(&self, requester: Requester) -> usize {
        let mut state = self.state.lock();
        let before = state.tasks.len();
        state.tasks.retain(|task| task.requester != requester);
        before - state.tasks.len()
    }

    pub fn len(&self) -> usize {
        self.state.lock().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().tasks.is_empty()
    }

    /// Unassigned tasks of `kind` still waiting for a worker.
    pub fn pending(&self, kind: TaskKind) -> usize {
        self.state.lock().tasks.iter().filter(|task| task.kind == kind && !task.is_assigned()).count()
    }

    /// Wakes every blocked `pop_task` and `wait_result` caller. Afterwards
    /// `pop_task` and `push_task` fail with `ShuttingDown`; results already
    /// parked can still be collected.
    pub fn shutdown(&self) {
        let mut state = self.state.lock();
        state.shutdown = true;
        drop(state);
        self.task_available.notify_all();
        self.result_available.notify_all();
    }

    pub fn is_shutdown(&self) -> bool {
        self.state.lock().shutdown
    }
}
