/// Constructor, Display and Error for CustomError.
pub mod custom_error;
