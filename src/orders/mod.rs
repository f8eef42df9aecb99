//! Contact and custom-order submissions kept in the persistent area.
//!
//! Every accepted submission is appended to the order log under
//! [`ORDERS_KEY`] and also replaces the snapshot under [`LAST_ORDER_KEY`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::page::Form;
use crate::storage::{
    parse_or_default, to_json, PersistentStore, Result, LAST_ORDER_KEY, ORDERS_KEY,
};

/// Form field names read into an [`OrderRecord`].
pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const CONTACT_REASON: &str = "contactReason";
    pub const MESSAGE: &str = "message";
    pub const CUSTOM_ORDER: &str = "customOrder";
}

/// One submitted contact/custom-order form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRecord {
    /// ISO-8601 UTC with milliseconds, e.g. `2026-10-18T09:30:00.000Z`.
    pub timestamp: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub contact_reason: String,
    pub message: String,
    pub custom_order: String,
}

impl OrderRecord {
    /// Snapshot the form's current values. Absent fields read as `""`.
    pub fn from_form(form: &Form, submitted_at: DateTime<Utc>) -> Self {
        let value = |name: &str| form.value(name).unwrap_or_default().to_string();
        Self {
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            full_name: value(fields::FULL_NAME),
            email: value(fields::EMAIL),
            phone: value(fields::PHONE),
            contact_reason: value(fields::CONTACT_REASON),
            message: value(fields::MESSAGE),
            custom_order: value(fields::CUSTOM_ORDER),
        }
    }
}

/// Order log and last-order snapshot in the persistent area.
#[derive(Debug, Clone)]
pub struct OrderBook {
    persistent: PersistentStore,
}

impl OrderBook {
    pub fn new(persistent: PersistentStore) -> Self {
        Self { persistent }
    }

    /// All recorded orders, oldest first. Malformed or unreadable data reads
    /// as an empty log.
    pub async fn orders(&self) -> Vec<OrderRecord> {
        let raw = self.read(ORDERS_KEY).await;
        parse_or_default(raw.as_deref(), Vec::new())
    }

    /// The most recent order, if one is stored and readable.
    pub async fn last_order(&self) -> Option<OrderRecord> {
        let raw = self.read(LAST_ORDER_KEY).await;
        parse_or_default(raw.as_deref(), None)
    }

    /// Append `record` to the log and make it the last order.
    ///
    /// A malformed log is replaced; a failed read aborts so the stored log
    /// is never overwritten blind.
    pub async fn record(&self, record: &OrderRecord) -> Result<()> {
        let raw = self.persistent.get(ORDERS_KEY).await?;
        let mut log: Vec<OrderRecord> = parse_or_default(raw.as_deref(), Vec::new());
        log.push(record.clone());

        self.persistent.set(ORDERS_KEY, &to_json(&log)?).await?;
        self.persistent
            .set(LAST_ORDER_KEY, &to_json(record)?)
            .await?;

        info!(
            timestamp = %record.timestamp,
            contact_reason = %record.contact_reason,
            logged = log.len(),
            "Order recorded"
        );
        Ok(())
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.persistent.get(key).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    scope = self.persistent.scope(),
                    key,
                    error = %e,
                    "Order read failed, using default"
                );
                None
            }
        }
    }
}
