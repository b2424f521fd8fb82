use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{BillingRecordId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BillingStatus {
    Paid,
    Pending,
    Failed,
    Refunded,
}

/// Append-only ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillingRecord {
    pub id: BillingRecordId,
    pub user_id: UserId,
    pub amount: f64,
    pub description: String,
    pub status: BillingStatus,
    pub invoice_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBillingRecord {
    pub user_id: UserId,
    pub amount: f64,
    pub description: String,
    pub status: BillingStatus,
    #[serde(default)]
    pub invoice_id: Option<String>,
}

impl NewBillingRecord {
    pub fn new(
        user_id: UserId,
        amount: f64,
        description: impl Into<String>,
        status: BillingStatus,
    ) -> Self {
        Self {
            user_id,
            amount,
            description: description.into(),
            status,
            invoice_id: None,
        }
    }

    pub fn with_invoice(mut self, invoice_id: impl Into<String>) -> Self {
        self.invoice_id = Some(invoice_id.into());
        self
    }

    pub fn into_record(self, id: BillingRecordId, now: DateTime<Utc>) -> BillingRecord {
        BillingRecord {
            id,
            user_id: self.user_id,
            amount: self.amount,
            description: self.description,
            status: self.status,
            invoice_id: self.invoice_id,
            created_at: now,
        }
    }
}
