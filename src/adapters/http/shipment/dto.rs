//! HTTP DTOs for shipment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::shipment::{
    Page, Priority, Shipment, ShipmentDetails, ShipmentError, ShipmentStatus, StatusStats,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of create and full update requests.
///
/// Status and priority arrive as raw strings so an unknown value is reported
/// against its field instead of as a generic body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentRequest {
    pub sender_name: String,
    pub sender_address: String,
    pub recipient_name: String,
    pub recipient_address: String,
    #[serde(default)]
    pub package_description: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub is_express: bool,
}

impl ShipmentRequest {
    /// Parses enumerated fields; absent or blank values take their defaults.
    pub fn into_details(self) -> Result<ShipmentDetails, ShipmentError> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => ShipmentStatus::default(),
            Some(raw) => raw.parse::<ShipmentStatus>()?,
        };
        let priority = match self.priority.as_deref().map(str::trim) {
            None | Some("") => Priority::default(),
            Some(raw) => raw.parse::<Priority>()?,
        };

        Ok(ShipmentDetails {
            sender_name: self.sender_name,
            sender_address: self.sender_address,
            recipient_name: self.recipient_name,
            recipient_address: self.recipient_address,
            package_description: self.package_description,
            weight: self.weight,
            status,
            priority,
            is_express: self.is_express,
        })
    }
}

/// Query parameters for listing or searching shipments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListShipmentsParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub express: Option<String>,
    /// Free-text search term. When non-blank, the filters above are ignored.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl ListShipmentsParams {
    /// The search term, if one was supplied.
    pub fn search_term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

/// Query parameters for the pricing preview.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteParams {
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub express: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full shipment view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ShipmentResponse {
    pub id: Option<i64>,
    pub tracking_number: Option<String>,
    pub user_id: i64,
    pub sender_name: String,
    pub sender_address: String,
    pub recipient_name: String,
    pub recipient_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_description: Option<String>,
    pub weight: f64,
    pub status: ShipmentStatus,
    pub priority: Priority,
    pub is_express: bool,
    pub shipping_cost: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Shipment> for ShipmentResponse {
    fn from(shipment: Shipment) -> Self {
        Self {
            id: shipment.id().map(|id| id.as_i64()),
            tracking_number: shipment.tracking_number().map(|t| t.as_str().to_string()),
            user_id: shipment.user_id().as_i64(),
            sender_name: shipment.sender_name().to_string(),
            sender_address: shipment.sender_address().to_string(),
            recipient_name: shipment.recipient_name().to_string(),
            recipient_address: shipment.recipient_address().to_string(),
            package_description: shipment.package_description().map(str::to_string),
            weight: shipment.weight(),
            status: shipment.status(),
            priority: shipment.priority(),
            is_express: shipment.is_express(),
            shipping_cost: shipment.shipping_cost(),
            created_at: shipment.created_at().as_datetime().to_rfc3339(),
            updated_at: shipment.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Paginated list of shipments.
#[derive(Debug, Clone, Serialize)]
pub struct ShipmentListResponse {
    pub items: Vec<ShipmentResponse>,
    pub total_count: u64,
    pub total_pages: u32,
    pub page: u32,
    pub per_page: u32,
    pub has_next: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ShipmentListResponse {
    pub fn new(page: Page<Shipment>, search: Option<String>) -> Self {
        let has_next = page.has_next();
        let page = page.map(ShipmentResponse::from);
        Self {
            items: page.items,
            total_count: page.total_count,
            total_pages: page.total_pages,
            page: page.page,
            per_page: page.per_page,
            has_next,
            search,
        }
    }
}

/// Per-status aggregates for the caller.
#[derive(Debug, Clone, Serialize)]
pub struct StatusStatsResponse {
    pub stats: Vec<StatusStats>,
}

/// Result of a delete request.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteShipmentResponse {
    pub deleted: bool,
}

/// Pricing preview result.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub shipping_cost: f64,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn conflict(constraint: &str, message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "constraint": constraint })),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            code: "SERVICE_UNAVAILABLE".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "retryable": true })),
        }
    }
}
