use crate::tasks::enums::task_kind::TaskKind;
use crate::tasks::structs::requester::Requester;
use crate::tasks::structs::task::Task;

impl Task {
    pub fn new(requester: Requester, kind: TaskKind) -> Task {
        Task {
            id: 0,
            kind,
            requester,
            result: None,
        }
    }

    #[inline(always)]
    pub fn is_assigned(&self) -> bool {
        self.id != 0
    }

    #[inline(always)]
    pub fn is_done(&self) -> bool {
        self.result.is_some()
    }
}
