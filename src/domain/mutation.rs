// Mutation request domain model
use serde::Serialize;

/// Payload shape shared by the add and remove operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationRequest {
    pub name: String,
}

impl MutationRequest {
    /// Build a request from the raw text of the single form field.
    /// Surrounding whitespace is stripped; hyphens stay intact on the wire.
    pub fn from_field(raw: &str) -> Self {
        Self {
            name: raw.trim().to_string(),
        }
    }

    pub fn display_name(&self) -> String {
        self.name.replace('-', " ")
    }
}
