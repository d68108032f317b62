//! Endpoint-shape fallback orchestration
//!
//! Migration-era compatibility: try the new API shape, then the legacy one.
//! Only "this shape isn't supported here" status codes advance to the next
//! attempt; genuine failures (500, network, 401) surface immediately. One
//! pass over the attempt list, no backoff, no jitter.

use futures::future::BoxFuture;

use crate::error::ApiError;

/// Which status codes mean "try the next endpoint shape"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Route-shape migration: 404/405
    EndpointShape,
    /// Report endpoints additionally reject unsupported query shapes with
    /// 400, and unimplemented aggregations with 501
    Report,
}

impl FallbackPolicy {
    pub fn is_try_next(&self, err: &ApiError) -> bool {
        let Some(code) = err.status_code() else {
            return false;
        };
        match self {
            FallbackPolicy::EndpointShape => matches!(code, 404 | 405),
            FallbackPolicy::Report => matches!(code, 400 | 404 | 405 | 501),
        }
    }
}

/// Run `attempts` in order; first success wins, first non-fallback-eligible
/// error aborts immediately. Exhaustion yields the last observed error.
///
/// Attempts are lazy futures: an attempt that is never reached is never
/// polled, so its request is never issued.
pub async fn request_with_fallback<T>(
    policy: FallbackPolicy,
    attempts: Vec<BoxFuture<'_, Result<T, ApiError>>>,
) -> Result<T, ApiError> {
    let total = attempts.len();
    let mut last_err: Option<ApiError> = None;

    for (index, attempt) in attempts.into_iter().enumerate() {
        match attempt.await {
            Ok(value) => return Ok(value),
            Err(err) if policy.is_try_next(&err) => {
                tracing::debug!(
                    attempt = index + 1,
                    total,
                    error = %err,
                    "Endpoint shape not supported, trying next"
                );
                last_err = Some(err);
            }
            Err(err) => return Err(err),
        }
    }

    Err(last_err
        .unwrap_or_else(|| ApiError::Domain("No request attempts provided".to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn test_first_success_wins() {
        let attempts: Vec<BoxFuture<'_, Result<i32, ApiError>>> =
            vec![async { Ok(1) }.boxed(), async { Ok(2) }.boxed()];
        let value = request_with_fallback(FallbackPolicy::EndpointShape, attempts)
            .await
            .unwrap();
        assert_eq!(value, 1);
    }

    #[tokio::test]
    async fn test_404_chains_to_next_attempt() {
        let attempts: Vec<BoxFuture<'_, Result<i32, ApiError>>> = vec![
            async { Err(ApiError::Status(404, "not here".to_string())) }.boxed(),
            async { Ok(7) }.boxed(),
        ];
        let value = request_with_fallback(FallbackPolicy::EndpointShape, attempts)
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_500_short_circuits_without_polling_later_attempts() {
        let second_ran = AtomicBool::new(false);

        let attempts: Vec<BoxFuture<'_, Result<i32, ApiError>>> = vec![
            async { Err(ApiError::Status(500, "boom".to_string())) }.boxed(),
            async {
                second_ran.store(true, Ordering::SeqCst);
                Ok(7)
            }
            .boxed(),
        ];

        let err = request_with_fallback(FallbackPolicy::EndpointShape, attempts)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert!(!second_ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_unauthorized_is_never_fallback_eligible() {
        let attempts: Vec<BoxFuture<'_, Result<i32, ApiError>>> =
            vec![async { Err(ApiError::Unauthorized) }.boxed(), async { Ok(7) }.boxed()];
        let err = request_with_fallback(FallbackPolicy::Report, attempts)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn test_report_policy_accepts_400_and_501() {
        for code in [400u16, 404, 405, 501] {
            let attempts: Vec<BoxFuture<'_, Result<i32, ApiError>>> = vec![
                async move { Err(ApiError::Status(code, String::new())) }.boxed(),
                async { Ok(9) }.boxed(),
            ];
            let value = request_with_fallback(FallbackPolicy::Report, attempts)
                .await
                .unwrap();
            assert_eq!(value, 9, "code {code}");
        }
    }

    #[tokio::test]
    async fn test_endpoint_shape_policy_rejects_400() {
        let attempts: Vec<BoxFuture<'_, Result<i32, ApiError>>> = vec![
            async { Err(ApiError::Status(400, "bad".to_string())) }.boxed(),
            async { Ok(9) }.boxed(),
        ];
        let err = request_with_fallback(FallbackPolicy::EndpointShape, attempts)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(400));
    }

    #[tokio::test]
    async fn test_exhaustion_returns_last_error() {
        let attempts: Vec<BoxFuture<'_, Result<i32, ApiError>>> = vec![
            async { Err(ApiError::Status(404, "first".to_string())) }.boxed(),
            async { Err(ApiError::Status(405, "second".to_string())) }.boxed(),
        ];
        let err = request_with_fallback(FallbackPolicy::EndpointShape, attempts)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(405));
    }

    #[tokio::test]
    async fn test_empty_attempts_yields_generic_error() {
        let attempts: Vec<BoxFuture<'_, Result<i32, ApiError>>> = Vec::new();
        let err = request_with_fallback(FallbackPolicy::EndpointShape, attempts)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Domain(_)));
    }
}
