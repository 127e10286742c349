use crate::error::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::{num::NonZeroU32, sync::Arc, time::Duration};

/// Global rate limiter: one bucket shared by all callers and all routes.
pub type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Create a limiter admitting `max_requests` per rolling `window_seconds`
/// window. `max_requests` is clamped to at least 1.
pub fn create_rate_limiter(max_requests: u32, window_seconds: u64) -> SharedRateLimiter {
    let max_requests = max_requests.max(1);
    let period = Duration::from_millis((window_seconds * 1000) / max_requests as u64);
    let quota = Quota::with_period(period)
        .expect("rate limit period must be non-zero")
        .allow_burst(NonZeroU32::new(max_requests).expect("max_requests is clamped to non-zero"));

    Arc::new(RateLimiter::direct(quota))
}

/// Request-admission gate in front of every endpoint.
pub async fn rate_limit_middleware(
    State(limiter): State<SharedRateLimiter>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match limiter.check() {
        Ok(_) => Ok(next.run(request).await),
        Err(negative) => {
            let wait_time = negative.wait_time_from(DefaultClock::default().now());
            Err(AppError::TooManyRequests(
                "Too many requests. Please try again later.".to_string(),
                Some(wait_time.as_secs()),
            ))
        }
    }
}
