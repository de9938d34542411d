//! Species wire types
//!
//! Mirrors the JSON shapes returned by the species endpoint.

use serde::{Deserialize, Serialize};

/// Sentinel filter value meaning "no filtering on this dimension"
pub const ALL: &str = "all";

/// A single species entry as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    /// Taxon identifier
    #[serde(rename = "taxonid")]
    pub taxon_id: i64,
    /// Taxonomic class code (e.g. "AVES")
    pub class_name: String,
    /// Latin binomial
    pub scientific_name: String,
    /// Conservation category code (e.g. "LC")
    pub category: String,
}

/// One page of species results plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Records in server order
    #[serde(rename = "result", default)]
    pub items: Vec<SpeciesRecord>,
    /// Zero-based page index
    #[serde(default)]
    pub current_page: u32,
    /// Total number of pages (at least 1)
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

fn default_max_pages() -> u32 {
    1
}

impl Default for PageResult {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 0,
            max_pages: 1,
        }
    }
}

impl PageResult {
    /// Clamp pagination metadata into a consistent shape
    ///
    /// Servers that report zero pages for an empty result are treated as
    /// having a single empty page, and the current page is kept inside
    /// `0..max_pages`.
    pub fn normalized(mut self) -> Self {
        self.max_pages = self.max_pages.max(1);
        if self.current_page >= self.max_pages {
            self.current_page = self.max_pages - 1;
        }
        self
    }

    /// Check if the page has no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Parameters of a species request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpeciesQuery {
    /// Region identifier (non-empty)
    pub region: String,
    /// Zero-based page index
    pub page: u32,
    /// Category code or [`ALL`]
    pub category: String,
    /// Class code or [`ALL`]
    pub class_filter: String,
}

impl SpeciesQuery {
    /// Query the first page of a region with no filters
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            page: 0,
            category: ALL.to_string(),
            class_filter: ALL.to_string(),
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_class_filter(mut self, class_filter: impl Into<String>) -> Self {
        self.class_filter = class_filter.into();
        self
    }
}
