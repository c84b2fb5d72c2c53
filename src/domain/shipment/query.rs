//! Query specifications for listing, searching and aggregating shipments.
//!
//! A [`QuerySpec`] is an ordered list of predicates that every storage
//! adapter interprets. The count query and the row query of a listing are
//! both derived from the same spec, so they always agree on which rows
//! match.

use serde::{Deserialize, Serialize};

use super::{Priority, Shipment, ShipmentStatus};
use crate::domain::foundation::{OwnedByUser, UserId, ValidationError};

/// Optional equality filters for a list query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentFilter {
    pub status: Option<ShipmentStatus>,
    pub priority: Option<Priority>,
    /// Only express shipments. There is no "only non-express" filter.
    pub express_only: bool,
}

impl ShipmentFilter {
    /// Builds a filter from raw query-string values.
    ///
    /// Blank values mean "no filter". The express filter is set only by
    /// the literal string `"true"`; any other value leaves it unset.
    ///
    /// # Errors
    ///
    /// - `ValidationError` for an unknown status or priority
    pub fn from_raw(
        status: Option<&str>,
        priority: Option<&str>,
        express: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let status = non_blank(status).map(str::parse).transpose()?;
        let priority = non_blank(priority).map(str::parse).transpose()?;
        let express_only = express == Some("true");

        Ok(Self {
            status,
            priority,
            express_only,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && !self.express_only
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Columns matched by free-text search.
pub const SEARCH_COLUMNS: [&str; 4] = [
    "tracking_number",
    "sender_name",
    "recipient_name",
    "package_description",
];

/// A single condition on the shipments table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Rows owned by this user.
    Owner(UserId),
    Status(ShipmentStatus),
    Priority(Priority),
    Express(bool),
    /// Substring match on any of [`SEARCH_COLUMNS`].
    Search(String),
}

impl Predicate {
    /// Evaluates the predicate against an in-memory shipment.
    ///
    /// Search is case-sensitive, matching PostgreSQL `LIKE`.
    pub fn matches(&self, shipment: &Shipment) -> bool {
        match self {
            Predicate::Owner(user_id) => shipment.is_owner(user_id),
            Predicate::Status(status) => shipment.status() == *status,
            Predicate::Priority(priority) => shipment.priority() == *priority,
            Predicate::Express(express) => shipment.is_express() == *express,
            Predicate::Search(term) => {
                let tracking = shipment.tracking_number().map(|t| t.as_str()).unwrap_or("");
                [
                    tracking,
                    shipment.sender_name(),
                    shipment.recipient_name(),
                    shipment.package_description().unwrap_or(""),
                ]
                .iter()
                .any(|field| field.contains(term.as_str()))
            }
        }
    }
}

/// Conjunction of predicates, always scoped to one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    predicates: Vec<Predicate>,
}

impl QuerySpec {
    /// Every shipment owned by `user_id`.
    pub fn for_owner(user_id: UserId) -> Self {
        Self {
            predicates: vec![Predicate::Owner(user_id)],
        }
    }

    /// Owner scope plus the equality filters that are set.
    pub fn filtered(user_id: UserId, filter: &ShipmentFilter) -> Self {
        let mut spec = Self::for_owner(user_id);
        if let Some(status) = filter.status {
            spec.predicates.push(Predicate::Status(status));
        }
        if let Some(priority) = filter.priority {
            spec.predicates.push(Predicate::Priority(priority));
        }
        if filter.express_only {
            spec.predicates.push(Predicate::Express(true));
        }
        spec
    }

    /// Owner scope plus a free-text search term.
    pub fn search(user_id: UserId, term: &str) -> Self {
        let mut spec = Self::for_owner(user_id);
        spec.predicates.push(Predicate::Search(term.to_string()));
        spec
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns true if the shipment satisfies every predicate.
    pub fn matches(&self, shipment: &Shipment) -> bool {
        self.predicates.iter().all(|p| p.matches(shipment))
    }
}

/// A requested page window, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Creates a page request; page 0 is treated as page 1 and a zero page
    /// size as 1.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Rows to skip: `(page - 1) * per_page`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    /// Number of pages for `total` rows. Never less than 1.
    pub fn total_pages(&self, total: u64) -> u32 {
        let pages = total.div_ceil(u64::from(self.per_page)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

/// One page of results plus the size of the full matching set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub total_pages: u32,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: u64, request: PageRequest) -> Self {
        Self {
            items,
            total_count,
            total_pages: request.total_pages(total_count),
            page: request.page(),
            per_page: request.per_page(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// Aggregate figures for one status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusStats {
    pub status: ShipmentStatus,
    pub count: u64,
    pub avg_cost: f64,
    pub total_cost: f64,
}
