use log::warn;
use std::fmt::Display;

pub trait ResultUtils<T> {
    /// Logs a warning with the error, if any, and discards it.
    fn warn_if_err(self, description: &str) -> Option<T>;
}

impl<T, E> ResultUtils<T> for Result<T, E>
where
    E: Display,
{
    fn warn_if_err(self, description: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("{}: {}.", description, e);
                None
            }
        }
    }
}
