// TestDependencies - mock implementations for testing
//
// Provides a scriptable email provider that records every call so tests can
// assert on call counts and payloads.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseEmailProvider, ProviderError, ProviderResponse, ServerDeps};
use crate::config::ServiceConfig;
use crate::domains::contact::models::ContactTemplateParams;

// =============================================================================
// Mock Email Provider
// =============================================================================

/// Arguments captured from a send call
#[derive(Debug, Clone)]
pub struct SendCallArgs {
    pub service_id: String,
    pub template_id: String,
    pub params: ContactTemplateParams,
}

/// Scripted behavior for the next send call
#[derive(Debug, Clone)]
pub enum SendBehavior {
    Respond(ProviderResponse),
    Reject(ProviderError),
    /// Settle after a delay, then behave like the inner script
    Delayed(u64, Box<SendBehavior>),
    /// Never settle
    Hang,
    Panic,
}

pub struct MockEmailProvider {
    send_script: Arc<Mutex<VecDeque<SendBehavior>>>,
    init_failures: Arc<Mutex<VecDeque<ProviderError>>>,
    init_delay_ms: u64,
    init_calls: Arc<Mutex<Vec<String>>>,
    send_calls: Arc<Mutex<Vec<SendCallArgs>>>,
    completed_sends: Arc<Mutex<usize>>,
}

impl MockEmailProvider {
    pub fn new() -> Self {
        Self {
            send_script: Arc::new(Mutex::new(VecDeque::new())),
            init_failures: Arc::new(Mutex::new(VecDeque::new())),
            init_delay_ms: 0,
            init_calls: Arc::new(Mutex::new(Vec::new())),
            send_calls: Arc::new(Mutex::new(Vec::new())),
            completed_sends: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a send behavior (consumed in order; default is 200 "OK")
    pub fn with_send(self, behavior: SendBehavior) -> Self {
        self.send_script.lock().unwrap().push_back(behavior);
        self
    }

    pub fn with_status(self, status: u16) -> Self {
        self.with_send(SendBehavior::Respond(ProviderResponse {
            status,
            text: "OK".to_string(),
        }))
    }

    pub fn with_rejection(self, error: ProviderError) -> Self {
        self.with_send(SendBehavior::Reject(error))
    }

    pub fn with_init_delay_ms(mut self, delay_ms: u64) -> Self {
        self.init_delay_ms = delay_ms;
        self
    }

    /// Fail the next `times` init calls with `error`
    pub fn fail_init_times(self, times: usize, error: ProviderError) -> Self {
        {
            let mut failures = self.init_failures.lock().unwrap();
            for _ in 0..times {
                failures.push_back(error.clone());
            }
        }
        self
    }

    pub fn init_count(&self) -> usize {
        self.init_calls.lock().unwrap().len()
    }

    /// Public keys passed to init, in call order
    pub fn init_keys(&self) -> Vec<String> {
        self.init_calls.lock().unwrap().clone()
    }

    pub fn send_count(&self) -> usize {
        self.send_calls.lock().unwrap().len()
    }

    pub fn send_calls(&self) -> Vec<SendCallArgs> {
        self.send_calls.lock().unwrap().clone()
    }

    /// Sends that ran to completion, including ones the caller stopped waiting on
    pub fn completed_sends(&self) -> usize {
        *self.completed_sends.lock().unwrap()
    }
}

impl Default for MockEmailProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseEmailProvider for MockEmailProvider {
    async fn init(&self, public_key: &str) -> Result<(), ProviderError> {
        self.init_calls.lock().unwrap().push(public_key.to_string());

        if self.init_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.init_delay_ms)).await;
        }

        let failure = self.init_failures.lock().unwrap().pop_front();
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &ContactTemplateParams,
    ) -> Result<ProviderResponse, ProviderError> {
        // Record the call
        self.send_calls.lock().unwrap().push(SendCallArgs {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            params: params.clone(),
        });

        let scripted = self.send_script.lock().unwrap().pop_front();
        let mut behavior = scripted.unwrap_or(SendBehavior::Respond(ProviderResponse {
            status: 200,
            text: "OK".to_string(),
        }));

        loop {
            match behavior {
                SendBehavior::Delayed(delay_ms, inner) => {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    behavior = *inner;
                }
                SendBehavior::Hang => std::future::pending::<()>().await,
                SendBehavior::Panic => panic!("mock provider panicked"),
                SendBehavior::Respond(response) => {
                    *self.completed_sends.lock().unwrap() += 1;
                    return Ok(response);
                }
                SendBehavior::Reject(error) => {
                    *self.completed_sends.lock().unwrap() += 1;
                    return Err(error);
                }
            }
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Ready-made ServerDeps wired to a MockEmailProvider
pub struct TestDependencies {
    pub provider: Arc<MockEmailProvider>,
    pub config: ServiceConfig,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            provider: Arc::new(MockEmailProvider::new()),
            config: configured_service(),
        }
    }

    pub fn with_provider(mut self, provider: MockEmailProvider) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    pub fn into_server_deps(self) -> (ServerDeps, Arc<MockEmailProvider>) {
        let deps = ServerDeps::new(self.config, self.provider.clone());
        (deps, self.provider)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully configured ServiceConfig with placeholder identifiers
pub fn configured_service() -> ServiceConfig {
    ServiceConfig {
        service_id: "test_service_id".to_string(),
        template_id: "test_template_id".to_string(),
        public_key: "test_public_key".to_string(),
        ..ServiceConfig::default()
    }
}
