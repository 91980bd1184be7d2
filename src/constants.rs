//! Application-wide constants.
//!
//! Centralizes magic numbers and the column vocabulary so defaults live in
//! one place.

// ============================================================================
// Pagination & Rendering
// ============================================================================

/// Rows exposed per "load more" step, and the initial visible window
pub const DEFAULT_PAGE_SIZE: usize = 500;

/// Rows emitted per render batch before yielding back to the host
pub const RENDER_CHUNK_SIZE: usize = 200;

// ============================================================================
// Column Selection
// ============================================================================

/// Header names considered important when the vocabulary-filtered column
/// policy is active. Matched case-insensitively as substrings.
pub const IMPORTANT_COLUMN_NAMES: &[&str] = &[
    "SiteID",
    "SiteId",
    "SITEID",
    "Site",
    "SiteName",
    "Site Name",
    "Region",
    "Subarea",
    "MajorArea",
    "MinorArea",
    "City",
    "Address",
    "Latitude",
    "Longitude",
    "Status",
    "Priority",
    "Vendor",
    "Technology",
    "TeamOwner",
    "Team Owner",
    "IsHub",
];

/// Columns kept when the vocabulary matches nothing
pub const FALLBACK_COLUMN_COUNT: usize = 25;

/// Canonical identifier header, lowercased
pub const SITE_ID_CANONICAL: &str = "siteid";

// ============================================================================
// Data Loading
// ============================================================================

/// CSV files looked up in the data directory when auto-loading
pub const DEFAULT_AUTO_CSV_FILES: &[&str] = &[
    "CAIRO-GIZA.csv",
    "Giza-Alex-Classification-2024.csv",
    "SITE-MANAGEMENT.csv",
    "All-Nigh.csv",
    "sites_master_flat.csv",
    "GRD.csv",
    "SOC.csv",
    "sites_master_consolidated.csv",
];
