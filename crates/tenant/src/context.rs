// Request-scoped clinic context
//
// The slot is a tokio task-local: it lives inside the future of one request,
// so concurrent requests never share it and nothing survives once that future
// completes or is dropped, even when the worker thread is reused.

use crate::error::{Result, TenantError};
use clinic_models::ClinicId;
use std::cell::Cell;
use std::future::Future;

tokio::task_local! {
    static CURRENT_CLINIC: Cell<Option<ClinicId>>;
}

pub struct TenantContext;

impl TenantContext {
    /// Runs `f` with a fresh, empty tenant slot.
    pub async fn open<F>(f: F) -> F::Output
    where
        F: Future,
    {
        CURRENT_CLINIC.scope(Cell::new(None), f).await
    }

    /// Runs `f` with the slot already holding `clinic_id`.
    pub async fn scope<F>(clinic_id: ClinicId, f: F) -> F::Output
    where
        F: Future,
    {
        CURRENT_CLINIC.scope(Cell::new(Some(clinic_id)), f).await
    }

    /// Stores `clinic_id` in the innermost open slot.
    ///
    /// The returned guard empties the slot when dropped, whether the caller
    /// returns normally, propagates an error or unwinds.
    #[must_use = "the clinic is cleared as soon as the guard is dropped"]
    pub fn set(clinic_id: ClinicId) -> Result<TenantGuard> {
        CURRENT_CLINIC
            .try_with(|slot| slot.set(Some(clinic_id)))
            .map_err(|_| TenantError::NoActiveScope)?;
        Ok(TenantGuard { _private: () })
    }

    /// The clinic of the request being handled, if any.
    pub fn current() -> Option<ClinicId> {
        CURRENT_CLINIC.try_with(Cell::get).ok().flatten()
    }

    /// Empties the slot. Safe to call repeatedly or outside any scope.
    pub fn clear() {
        let _ = CURRENT_CLINIC.try_with(|slot| slot.set(None));
    }

    /// Carries the current clinic into a future that will run on another task.
    ///
    /// Task-locals are not inherited by `tokio::spawn`, so work spawned while
    /// handling a request must be wrapped here to keep seeing its clinic.
    pub fn propagate<F>(f: F) -> impl Future<Output = F::Output>
    where
        F: Future,
    {
        CURRENT_CLINIC.scope(Cell::new(Self::current()), f)
    }
}

/// Clears the tenant slot on drop.
#[derive(Debug)]
pub struct TenantGuard {
    _private: (),
}

impl Drop for TenantGuard {
    fn drop(&mut self) {
        TenantContext::clear();
    }
}
