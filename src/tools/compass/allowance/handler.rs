use super::dto::SetAllowanceInput;
use crate::tools::compass::implementation::CompassTools;

/// Sets an allowance and returns the decoded response, or `None` if the
/// request failed for any reason. Failures are logged, never propagated.
pub async fn set_allowance(
    tools: &CompassTools,
    input: SetAllowanceInput,
) -> Option<serde_json::Value> {
    match tools.set_allowance(input).await {
        Ok(output) => Some(output.response),
        Err(e) => {
            tracing::error!("Error fetching allowance: {}", e);
            None
        }
    }
}
