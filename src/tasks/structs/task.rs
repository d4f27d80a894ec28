use crate::tasks::enums::task_kind::TaskKind;
use crate::tasks::structs::requester::Requester;
use crate::tasks::types::ResultBuffers;

/// A queued whole-table job.
///
/// `id` is 0 until a worker claims the task. `result` is only set once the
/// worker finished, which is what marks the task as done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub kind: TaskKind,
    pub requester: Requester,
    pub result: Option<ResultBuffers>,
}
