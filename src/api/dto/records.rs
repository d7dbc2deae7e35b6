//! DTOs for record collections.

use serde::Serialize;

/// Response containing every stored record of one type.
#[derive(Debug, Serialize)]
pub struct RecordListResponse<R> {
    pub items: Vec<R>,
}
