// Indicator board - list rendering and form submission handlers
use crate::application::indicator_gateway::GatewayError;
use crate::application::indicator_service::IndicatorService;
use crate::domain::mutation::MutationRequest;
use crate::presentation::view::{EMPTY_LIST_MESSAGE, IndicatorListView, ListEntry, Notifier};

pub const ADD_FAILURE_MESSAGE: &str = "Failed to add indicator.";
pub const REMOVE_FAILURE_MESSAGE: &str = "Failed to remove indicator.";

/// The page controller. Owns the list container and the notifier so nothing
/// binds to them at module scope; both are injected at construction.
pub struct IndicatorBoard<V, N> {
    service: IndicatorService,
    view: V,
    notifier: N,
}

impl<V: IndicatorListView, N: Notifier> IndicatorBoard<V, N> {
    pub fn new(service: IndicatorService, view: V, notifier: N) -> Self {
        Self {
            service,
            view,
            notifier,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetch the current list and replace the rendered entries with it,
    /// falling back to the single placeholder entry when the server reports
    /// an empty list. On failure the previous rendering is left in place.
    pub async fn refresh(&mut self) -> Result<(), GatewayError> {
        let indicators = self.service.active_indicators().await?;

        self.view.clear();
        if indicators.is_empty() {
            self.view
                .append(ListEntry::Placeholder(EMPTY_LIST_MESSAGE.to_string()));
        } else {
            for indicator in indicators {
                self.view
                    .append(ListEntry::Indicator(indicator.display_name()));
            }
        }

        Ok(())
    }

    /// Add-form submission: build the trimmed mutation request, submit it,
    /// and on success re-render the list and confirm. On failure the user is
    /// alerted with a fixed message and the list is not re-rendered.
    pub async fn submit_add(&mut self, raw_field: &str) -> Result<(), GatewayError> {
        let request = MutationRequest::from_field(raw_field);

        match self.service.add(&request).await {
            Ok(()) => {
                if let Err(error) = self.refresh().await {
                    tracing::warn!("List refresh after add failed: {}", error);
                }
                self.notifier.confirm(&format!(
                    "Success! Added {} to the updates list.",
                    request.display_name()
                ));
                Ok(())
            }
            Err(error) => {
                self.notifier.alert(ADD_FAILURE_MESSAGE);
                Err(error)
            }
        }
    }

    /// Remove-form submission, mirroring `submit_add`.
    pub async fn submit_remove(&mut self, raw_field: &str) -> Result<(), GatewayError> {
        let request = MutationRequest::from_field(raw_field);

        match self.service.remove(&request).await {
            Ok(()) => {
                if let Err(error) = self.refresh().await {
                    tracing::warn!("List refresh after remove failed: {}", error);
                }
                self.notifier.confirm(&format!(
                    "{} indicator removed from update list.",
                    request.display_name()
                ));
                Ok(())
            }
            Err(error) => {
                self.notifier.alert(REMOVE_FAILURE_MESSAGE);
                Err(error)
            }
        }
    }
}
