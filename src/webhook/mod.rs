pub mod targets;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde_json::Value;
use thiserror::Error;

use crate::config::{self, WebhookConfig};
use crate::resource::MutationKind;
use targets::{AuditTrail, TableFeed, WebhookTarget};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("delivery to {target} failed: {source}")]
    Transport {
        target: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{target} answered {status}")]
    Rejected {
        target: &'static str,
        status: reqwest::StatusCode,
    },
}

/// Canonical envelope for a committed mutation. Targets reshape this into
/// their own payload; the write path never sees target-specific formats.
#[derive(Debug, Clone)]
pub struct MutationEvent {
    pub operation: MutationKind,
    pub resource: &'static str,
    pub data: Value,
    pub timestamp: DateTime<Utc>,
}

impl MutationEvent {
    pub fn new(operation: MutationKind, resource: &'static str, data: Value) -> Self {
        Self {
            operation,
            resource,
            data,
            timestamp: Utc::now(),
        }
    }
}

/// Fans a mutation event out to the configured webhook targets, one after
/// the other, in configured order. Invoked only after the write committed;
/// a failing delivery surfaces as the endpoint's error even though the row
/// is already durable.
pub struct Notifier {
    client: reqwest::Client,
    targets: Vec<Box<dyn WebhookTarget>>,
}

impl Notifier {
    pub fn from_config(webhooks: &WebhookConfig) -> Self {
        let mut targets: Vec<Box<dyn WebhookTarget>> = Vec::new();
        if let Some(url) = &webhooks.table_feed_url {
            targets.push(Box::new(TableFeed::new(url.clone())));
        }
        if let Some(url) = &webhooks.audit_trail_url {
            targets.push(Box::new(AuditTrail::new(url.clone())));
        }
        Self {
            client: reqwest::Client::new(),
            targets,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.targets.is_empty()
    }

    /// Deliver `event` to every configured target. Sequential, no parallel
    /// fan-out; the first failure aborts the remainder.
    pub async fn publish(&self, event: &MutationEvent) -> Result<(), NotifyError> {
        for target in &self.targets {
            target.deliver(&self.client, event).await?;
            tracing::debug!(target = target.name(), table = event.resource, "webhook delivered");
        }
        Ok(())
    }
}

static NOTIFIER: Lazy<Notifier> = Lazy::new(|| Notifier::from_config(&config::config().webhooks));

pub fn notifier() -> &'static Notifier {
    &NOTIFIER
}
