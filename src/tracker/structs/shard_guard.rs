use crate::tracker::structs::swarm_table::SwarmTable;

/// Exclusive access to one shard; the shard is released on drop.
#[derive(Debug)]
pub struct ShardGuard<'a> {
    pub(crate) table: &'a SwarmTable,
    pub(crate) index: usize,
}
