//! Row types that only exist in the reference data.

use serde::Serialize;

/// An informational string for the landing page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Fact {
    pub id: u32,
    pub text: String,
}
