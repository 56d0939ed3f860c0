//! Memoized one-time provider initialization.
//!
//! The first caller installs a shared init future; everyone arriving while it
//! is pending awaits that same future. Success is kept for the life of the
//! process. A failure is delivered to every awaiter of that attempt and then
//! cleared, so the next caller starts a fresh attempt.

use futures::future::{BoxFuture, FutureExt, Shared};
use std::sync::{Arc, Mutex};

use super::{BaseEmailProvider, ProviderError};

type InitFuture = Shared<BoxFuture<'static, Result<(), ProviderError>>>;

#[derive(Default)]
pub struct ProviderInit {
    slot: Mutex<Option<InitFuture>>,
}

impl ProviderInit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `provider.init(public_key)` at most once per successful attempt.
    pub async fn ensure(
        &self,
        provider: Arc<dyn BaseEmailProvider>,
        public_key: &str,
    ) -> Result<(), ProviderError> {
        let attempt = {
            let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
            match slot.as_ref() {
                Some(pending) => pending.clone(),
                None => {
                    let public_key = public_key.to_string();
                    let fresh = async move {
                        tracing::debug!("Initializing email provider");
                        provider.init(&public_key).await
                    }
                    .boxed()
                    .shared();
                    *slot = Some(fresh.clone());
                    fresh
                }
            }
        };

        let result = attempt.clone().await;

        if result.is_err() {
            let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
            if slot.as_ref().is_some_and(|current| current.ptr_eq(&attempt)) {
                *slot = None;
            }
        }

        result
    }

    pub fn is_ready(&self) -> bool {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        slot.as_ref()
            .and_then(|pending| pending.peek())
            .is_some_and(|outcome| outcome.is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::MockEmailProvider;

    #[tokio::test]
    async fn concurrent_callers_share_one_init() {
        let mock = Arc::new(MockEmailProvider::new().with_init_delay_ms(30));
        let init = Arc::new(ProviderInit::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let init = init.clone();
                let provider: Arc<dyn BaseEmailProvider> = mock.clone();
                tokio::spawn(async move { init.ensure(provider, "pk").await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        assert_eq!(mock.init_count(), 1);
        assert!(init.is_ready());
    }

    #[tokio::test]
    async fn success_is_memoized() {
        let mock = Arc::new(MockEmailProvider::new());
        let init = ProviderInit::new();

        init.ensure(mock.clone(), "pk").await.unwrap();
        init.ensure(mock.clone(), "pk").await.unwrap();

        assert_eq!(mock.init_count(), 1);
    }

    #[tokio::test]
    async fn failure_reaches_all_awaiters_then_retries() {
        let mock = Arc::new(
            MockEmailProvider::new()
                .with_init_delay_ms(30)
                .fail_init_times(1, ProviderError::with_message("Invalid public key")),
        );
        let init = Arc::new(ProviderInit::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let init = init.clone();
                let provider: Arc<dyn BaseEmailProvider> = mock.clone();
                tokio::spawn(async move { init.ensure(provider, "pk").await })
            })
            .collect();

        for handle in handles {
            let err = handle.await.unwrap().unwrap_err();
            assert_eq!(err.message.as_deref(), Some("Invalid public key"));
        }
        assert_eq!(mock.init_count(), 1);
        assert!(!init.is_ready());

        init.ensure(mock.clone(), "pk").await.unwrap();
        assert_eq!(mock.init_count(), 2);
        assert!(init.is_ready());
    }
}
