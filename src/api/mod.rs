//! Object-store HTTP access.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ObjectsClient`] | CRUD requests against one collection URL |
//! | [`ApiResponse`] | Buffered response with status/content checks |
//! | [`ObjectRecord`] | Object payload |
//! | [`ExpectedObject`] | Field values a fetched object must carry |

// ============================================================================
// Submodules
// ============================================================================

/// HTTP client and response checks.
pub mod client;

/// Payload types and expected values.
pub mod record;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{ApiResponse, DEFAULT_API_URL, DEFAULT_HTTP_TIMEOUT, ObjectsClient};
pub use record::{
    DeletionNotice, ExpectedObject, ObjectData, ObjectRecord, TEMPLATE_NAME, UPDATED_NAME,
};
