//! A computation that is known to fail, and the catch-all that absorbs it.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use crate::error::{FaultError, FaultResult};

pub fn divide(dividend: i64, divisor: i64) -> FaultResult<i64> {
    if divisor == 0 {
        return Err(FaultError::DivisionByZero { dividend });
    }
    dividend
        .checked_div(divisor)
        .ok_or(FaultError::Overflow { dividend, divisor })
}

/// Runs `f` and folds every way it can fail into one `anyhow::Error`.
///
/// Both a returned error of any type and a panic unwinding out of `f` end up
/// on the `Err` side, so callers never match on what actually went wrong.
pub fn catch_any<T, E, F>(f: F) -> anyhow::Result<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<anyhow::Error>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result.map_err(Into::into),
        Err(payload) => Err(FaultError::Panicked(panic_message(payload.as_ref())).into()),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
