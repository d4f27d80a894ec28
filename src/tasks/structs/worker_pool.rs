use std::thread::JoinHandle;

/// Named worker threads, a configured number per task kind.
#[derive(Debug)]
pub struct WorkerPool {
    pub(crate) handles: Vec<JoinHandle<()>>,
}
