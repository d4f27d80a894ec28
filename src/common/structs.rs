/// Message-only error used at the process boundary.
pub mod custom_error;
