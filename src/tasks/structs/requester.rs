use serde::{Deserialize, Serialize};

/// Opaque delivery handle, typically a connection id owned by the protocol layer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Requester(pub u64);
