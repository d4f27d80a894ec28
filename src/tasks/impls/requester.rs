use std::fmt;
use crate::tasks::structs::requester::Requester;

impl fmt::Display for Requester {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for Requester {
    fn from(value: u64) -> Self {
        Requester(value)
    }
}
