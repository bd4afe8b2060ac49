//! Login throttling.
//!
//! A single process-wide token bucket guards `POST /api/admin/login` so the
//! shared admin secret cannot be brute-forced quickly.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter as GovRateLimiter,
};
use std::num::NonZeroU32;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_admin_login;

type DirectRateLimiter = GovRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

pub struct LoginRateLimiter {
    limiter: DirectRateLimiter,
    clock: DefaultClock,
    per_minute: u32,
}

impl LoginRateLimiter {
    /// Returns `None` when `per_minute` is 0, which disables throttling.
    pub fn new(per_minute: u32) -> Option<Self> {
        let quota = Quota::per_minute(NonZeroU32::new(per_minute)?);
        Some(Self {
            limiter: GovRateLimiter::direct(quota),
            clock: DefaultClock::default(),
            per_minute,
        })
    }

    /// Ok if the attempt may proceed, otherwise the number of seconds to wait.
    pub fn check(&self) -> Result<(), u64> {
        self.limiter
            .check()
            .map_err(|not_until| not_until.wait_time_from(self.clock.now()).as_secs().max(1))
    }
}

impl std::fmt::Debug for LoginRateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRateLimiter")
            .field("per_minute", &self.per_minute)
            .finish()
    }
}

pub async fn login_rate_limit(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(limiter) = &state.login_limiter {
        if let Err(retry_after) = limiter.check() {
            tracing::warn!(retry_after, "Admin login throttled");
            record_admin_login("throttled");
            return ApiError::RateLimited {
                retry_after_secs: Some(retry_after),
            }
            .into_response();
        }
    }

    next.run(req).await
}
