pub mod ui;

use contracts::domain::stats::DashboardStats;

use crate::shared::api_client::{ApiClient, ApiError};

pub async fn fetch_stats(client: &ApiClient) -> Result<DashboardStats, ApiError> {
    client.get("/master/stats").await
}
