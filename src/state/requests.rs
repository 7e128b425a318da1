//! Cross-page selection state for verification requests.
//!
//! DESIGN
//! ======
//! List pages stash the record a reviewer opened so the detail routes can
//! render it without refetching; a detail route visited without a selection
//! bounces back to its list.

use crate::net::types::{ClientVerifyRequest, EngineerVerifyRequest};

/// Currently opened records, one slot per applicant type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestsState {
    pub selected_client: Option<ClientVerifyRequest>,
    pub selected_engineer: Option<EngineerVerifyRequest>,
}
