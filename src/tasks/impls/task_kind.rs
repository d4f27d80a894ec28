use std::fmt;
use crate::tasks::enums::task_kind::TaskKind;

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [TaskKind::Reap, TaskKind::FullScrape, TaskKind::Stats];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Reap => "reap",
            TaskKind::FullScrape => "full_scrape",
            TaskKind::Stats => "stats",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
