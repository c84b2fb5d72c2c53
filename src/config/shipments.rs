//! Shipment listing configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::PageSizePolicy;

/// Pagination settings for shipment lists and search
#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentsConfig {
    /// Page size used when a request gives none
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,

    /// Largest page size a request may ask for
    #[serde(default = "default_max_per_page")]
    pub max_per_page: u32,
}

impl ShipmentsConfig {
    /// Page size rules for the list and search handlers
    pub fn page_size_policy(&self) -> PageSizePolicy {
        PageSizePolicy::new(self.items_per_page, self.max_per_page)
    }

    /// Validate pagination settings
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.items_per_page == 0 || self.max_per_page == 0 {
            return Err(ValidationError::InvalidPageSize);
        }
        if self.items_per_page > self.max_per_page {
            return Err(ValidationError::DefaultPageSizeTooLarge);
        }
        Ok(())
    }
}

impl Default for ShipmentsConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            max_per_page: default_max_per_page(),
        }
    }
}

fn default_items_per_page() -> u32 {
    PageSizePolicy::DEFAULT_PER_PAGE
}

fn default_max_per_page() -> u32 {
    PageSizePolicy::MAX_PER_PAGE
}
