use carelink_core::errors::{CareError, CareResult};
use tracing::{Level, error, warn};

/// Short-lived status messages shown to the person at the keyboard.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);

    fn failure(&self, message: &str);
}

/// Yes/no prompt shown before a mutating admin action.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// A server saying no is routine and logs as a warning. Anything that kept
/// the call from getting an answer logs as an error.
pub fn failure_level(err: &CareError) -> Level {
    if err.is_server_rejection() {
        Level::WARN
    } else {
        Level::ERROR
    }
}

/// Drops a failed call into a failure toast. Nothing is retried; the caller
/// keeps whatever state it had.
pub fn toast_failure<T>(notifier: &dyn Notifier, action: &str, result: CareResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            if failure_level(&err) == Level::WARN {
                warn!("{} rejected: {}", action, err);
            } else {
                error!("{} failed: {}", action, err);
            }
            notifier.failure(&err.user_message());
            None
        }
    }
}

/// Like [`toast_failure`], with a success toast when the call went through.
pub fn toast_outcome<T>(
    notifier: &dyn Notifier,
    action: &str,
    success: &str,
    result: CareResult<T>,
) -> Option<T> {
    let value = toast_failure(notifier, action, result)?;
    notifier.success(success);
    Some(value)
}
