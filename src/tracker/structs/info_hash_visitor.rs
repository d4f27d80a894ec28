/// Serde visitor turning a 40 character hex string into an `InfoHash`.
pub struct InfoHashVisitor;
