use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::domain::history::model::BrowsingHistory;
use crate::domain::history::repository::HistoryRepository;
use crate::domain::history::use_cases::get_history::GetHistoryUseCase;
use crate::domain::shared::value_objects::ProductId;

pub struct GetHistoryUseCaseImpl {
    pub repository: Arc<dyn HistoryRepository>,
}

#[async_trait]
impl GetHistoryUseCase for GetHistoryUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ProductId>, StorageError> {
        let history = BrowsingHistory::from_entries(self.repository.load().await?);
        Ok(history.into_entries())
    }
}
