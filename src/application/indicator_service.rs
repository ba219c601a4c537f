// Indicator service - Use cases for listing and mutating indicators
use crate::application::indicator_gateway::{GatewayError, IndicatorGateway};
use crate::domain::indicator::Indicator;
use crate::domain::mutation::MutationRequest;
use std::sync::Arc;

#[derive(Clone)]
pub struct IndicatorService {
    gateway: Arc<dyn IndicatorGateway>,
}

impl IndicatorService {
    pub fn new(gateway: Arc<dyn IndicatorGateway>) -> Self {
        Self { gateway }
    }

    pub async fn active_indicators(&self) -> Result<Vec<Indicator>, GatewayError> {
        self.gateway.list_indicators().await
    }

    pub async fn add(&self, request: &MutationRequest) -> Result<(), GatewayError> {
        self.gateway.add_indicator(request).await
    }

    pub async fn remove(&self, request: &MutationRequest) -> Result<(), GatewayError> {
        self.gateway.remove_indicator(request).await
    }
}
