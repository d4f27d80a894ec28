/// Kind of whole-table operation a task asks for.
pub mod task_kind;
