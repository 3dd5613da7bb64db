use async_trait::async_trait;
use serde_json::{json, Value};
use url::Url;

use super::{MutationEvent, NotifyError};

/// One external mutation consumer. Each target owns its payload shape;
/// delivery is a plain POST of that shape as JSON.
#[async_trait]
pub trait WebhookTarget: Send + Sync {
    /// Target name for logging and error reporting
    fn name(&self) -> &'static str;

    fn url(&self) -> &Url;

    /// Reshape the canonical envelope into this target's payload.
    fn payload(&self, event: &MutationEvent) -> Value;

    async fn deliver(
        &self,
        client: &reqwest::Client,
        event: &MutationEvent,
    ) -> Result<(), NotifyError> {
        let response = client
            .post(self.url().clone())
            .json(&self.payload(event))
            .send()
            .await
            .map_err(|source| NotifyError::Transport {
                target: self.name(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected {
                target: self.name(),
                status,
            });
        }
        Ok(())
    }
}

/// Row-replication feed: receives `{table, data}`.
pub struct TableFeed {
    url: Url,
}

impl TableFeed {
    pub fn new(url: Url) -> Self {
        Self { url }
    }
}

#[async_trait]
impl WebhookTarget for TableFeed {
    fn name(&self) -> &'static str {
        "table-feed"
    }

    fn url(&self) -> &Url {
        &self.url
    }

    fn payload(&self, event: &MutationEvent) -> Value {
        json!({
            "table": event.resource,
            "data": event.data,
        })
    }
}

/// Audit trail: receives `{operacion, table, data}` with the operation tag.
pub struct AuditTrail {
    url: Url,
}

impl AuditTrail {
    pub fn new(url: Url) -> Self {
        Self { url }
    }
}

#[async_trait]
impl WebhookTarget for AuditTrail {
    fn name(&self) -> &'static str {
        "audit-trail"
    }

    fn url(&self) -> &Url {
        &self.url
    }

    fn payload(&self, event: &MutationEvent) -> Value {
        json!({
            "operacion": event.operation,
            "table": event.resource,
            "data": event.data,
        })
    }
}
