/// Result payload of a finished task: a list of independently sendable buffers.
pub type ResultBuffers = Vec<Vec<u8>>;
