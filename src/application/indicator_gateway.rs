// Gateway trait for the remote indicators endpoint
use crate::domain::indicator::Indicator;
use crate::domain::mutation::MutationRequest;
use async_trait::async_trait;

/// Why a gateway call failed. Callers can tell a transport failure apart
/// from a request the endpoint rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("network failure talking to the indicators endpoint: {0}")]
    Network(String),
    #[error("indicators endpoint rejected the request with status {status}")]
    Rejected { status: u16 },
    #[error("could not decode indicators response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait IndicatorGateway: Send + Sync {
    /// Fetch the current list of recently updated indicators.
    async fn list_indicators(&self) -> Result<Vec<Indicator>, GatewayError>;

    /// Report an indicator as updated.
    async fn add_indicator(&self, request: &MutationRequest) -> Result<(), GatewayError>;

    /// Retract a previously reported indicator.
    async fn remove_indicator(&self, request: &MutationRequest) -> Result<(), GatewayError>;
}
