use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Advance every swarm's generational ring and drop exhausted swarms.
    Reap,
    /// Binary scrape record for every swarm in the table.
    FullScrape,
    /// JSON statistics report.
    Stats,
}
