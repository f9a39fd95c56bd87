use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::domain::history::model::BrowsingHistory;
use crate::domain::history::repository::HistoryRepository;
use crate::domain::history::use_cases::record_view::{RecordViewParams, RecordViewUseCase};
use crate::domain::logger::Logger;

pub struct RecordViewUseCaseImpl {
    pub repository: Arc<dyn HistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecordViewUseCase for RecordViewUseCaseImpl {
    async fn execute(&self, params: RecordViewParams) -> Result<(), StorageError> {
        let mut history = BrowsingHistory::from_entries(self.repository.load().await?);
        history.record(params.product_id.clone());

        if self.repository.save(history.entries()).await.is_err() {
            self.logger.warn(&format!(
                "Failed to persist browsing history after viewing {}",
                params.product_id
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::model::MAX_HISTORY_LENGTH;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub HistoryRepo {}

        #[async_trait]
        impl HistoryRepository for HistoryRepo {
            async fn load(&self) -> Result<Vec<ProductId>, StorageError>;
            async fn save(&self, entries: &[ProductId]) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_prepend_view_and_persist() {
        let mut mock_repo = MockHistoryRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(vec![ProductId::new("prod_002")]));
        mock_repo
            .expect_save()
            .withf(|entries| entries.len() == 2 && entries[0].as_str() == "prod_001")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RecordViewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecordViewParams {
                product_id: ProductId::new("prod_001"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_move_existing_entry_to_front() {
        let mut mock_repo = MockHistoryRepo::new();
        mock_repo.expect_load().returning(|| {
            Ok(vec![ProductId::new("prod_002"), ProductId::new("prod_001")])
        });
        mock_repo
            .expect_save()
            .withf(|entries| entries.len() == 2 && entries[0].as_str() == "prod_001")
            .returning(|_| Ok(()));

        let use_case = RecordViewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecordViewParams {
                product_id: ProductId::new("prod_001"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_truncate_to_bound_when_full() {
        let mut mock_repo = MockHistoryRepo::new();
        mock_repo.expect_load().returning(|| {
            Ok((0..MAX_HISTORY_LENGTH)
                .map(|i| ProductId::new(format!("prod_{i:03}")))
                .collect())
        });
        mock_repo
            .expect_save()
            .withf(|entries| {
                entries.len() == MAX_HISTORY_LENGTH && entries[0].as_str() == "prod_new"
            })
            .returning(|_| Ok(()));

        let use_case = RecordViewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecordViewParams {
                product_id: ProductId::new("prod_new"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_even_when_persistence_write_fails() {
        let mut mock_repo = MockHistoryRepo::new();
        mock_repo.expect_load().returning(|| Ok(vec![]));
        mock_repo
            .expect_save()
            .returning(|_| Err(StorageError::WriteFailed));

        let use_case = RecordViewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecordViewParams {
                product_id: ProductId::new("prod_001"),
            })
            .await;

        assert!(result.is_ok());
    }
}
