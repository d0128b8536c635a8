use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, IsolationLevel, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{debug, error, info, warn};

use crate::modules::news::adapter::outgoing::sea_orm_entity::{news, news_categories};
use crate::modules::news::application::domain::entities::{
    CategoryId, NewsId, NewsWithCategories,
};
use crate::modules::news::application::domain::patch_field::PatchField;
use crate::modules::news::application::ports::outgoing::{
    CreateNewsData, NewsChanges, NewsRepository, NewsRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct NewsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    operation_timeout: Duration,
}

impl NewsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, operation_timeout: Duration) -> Self {
        Self {
            db,
            operation_timeout,
        }
    }

    /// Runs one repository operation under the configured deadline.
    /// When it fires the future is dropped together with its open
    /// transaction, which rolls back.
    async fn with_deadline<T, F>(
        &self,
        operation: &'static str,
        fut: F,
    ) -> Result<T, NewsRepositoryError>
    where
        F: Future<Output = Result<T, NewsRepositoryError>>,
    {
        match tokio::time::timeout(self.operation_timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                error!(
                    operation,
                    timeout = ?self.operation_timeout,
                    "Repository operation exceeded deadline"
                );
                Err(NewsRepositoryError::DatabaseError(format!(
                    "{operation}: deadline of {:?} exceeded",
                    self.operation_timeout
                )))
            }
        }
    }
}

#[async_trait]
impl NewsRepository for NewsRepositoryPostgres {
    async fn get_news(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<NewsWithCategories>, NewsRepositoryError> {
        self.with_deadline("get_news", async {
            let txn = self
                .db
                .begin_with_config(
                    Some(IsolationLevel::RepeatableRead),
                    Some(AccessMode::ReadOnly),
                )
                .await
                .map_err(|e| db_error("get_news", "begin", e))?;

            let result = load_page(&txn, limit, offset).await;
            if result.is_err() {
                error!(limit, offset, "Failed to load news page");
            }

            finish(txn, "get_news", result).await
        })
        .await
    }

    async fn create_news(&self, data: CreateNewsData) -> Result<NewsId, NewsRepositoryError> {
        self.with_deadline("create_news", async {
            let txn = self
                .db
                .begin()
                .await
                .map_err(|e| db_error("create_news", "begin", e))?;

            let result = insert_news(&txn, data).await;
            let news_id = finish(txn, "create_news", result).await?;

            info!(news_id, "News created");
            Ok(news_id)
        })
        .await
    }

    async fn update_news(
        &self,
        news_id: NewsId,
        changes: NewsChanges,
        categories: PatchField<Vec<CategoryId>>,
    ) -> Result<(), NewsRepositoryError> {
        self.with_deadline("update_news", async {
            let txn = self
                .db
                .begin()
                .await
                .map_err(|e| db_error("update_news", "begin", e))?;

            let result = apply_update(&txn, news_id, changes, categories).await;
            match &result {
                Err(NewsRepositoryError::NotFound) => warn!(news_id, "News not found for update"),
                Err(NewsRepositoryError::DatabaseError(_)) => {
                    error!(news_id, "Failed to update news")
                }
                Ok(()) => {}
            }

            finish(txn, "update_news", result).await?;

            info!(news_id, "News updated");
            Ok(())
        })
        .await
    }
}

// ============================================================================
// Transaction bodies
// ============================================================================

async fn load_page(
    txn: &DatabaseTransaction,
    limit: u64,
    offset: u64,
) -> Result<Vec<NewsWithCategories>, NewsRepositoryError> {
    let rows = news::Entity::find()
        .order_by_asc(news::Column::Id)
        .limit(limit)
        .offset(offset)
        .all(txn)
        .await
        .map_err(|e| db_error("get_news", "select news", e))?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<NewsId> = rows.iter().map(|row| row.id).collect();

    let links = news_categories::Entity::find()
        .filter(news_categories::Column::NewsId.is_in(ids))
        .order_by_asc(news_categories::Column::NewsId)
        .order_by_asc(news_categories::Column::CategoryId)
        .all(txn)
        .await
        .map_err(|e| db_error("get_news", "select categories", e))?;

    let mut by_news: HashMap<NewsId, Vec<CategoryId>> = HashMap::new();
    for link in links {
        by_news
            .entry(link.news_id)
            .or_default()
            .push(link.category_id);
    }

    Ok(rows
        .into_iter()
        .map(|row| NewsWithCategories {
            categories: by_news.remove(&row.id).unwrap_or_default(),
            id: row.id,
            title: row.title,
            content: row.content,
        })
        .collect())
}

async fn insert_news(
    txn: &DatabaseTransaction,
    data: CreateNewsData,
) -> Result<NewsId, NewsRepositoryError> {
    let model = news::ActiveModel {
        title: Set(data.title),
        content: Set(data.content),
        ..Default::default()
    };

    let row = model
        .insert(txn)
        .await
        .map_err(|e| db_error("create_news", "insert news", e))?;

    let categories = data.categories.unwrap_or_default();
    insert_links(txn, row.id, &categories, "create_news").await?;

    Ok(row.id)
}

async fn apply_update(
    txn: &DatabaseTransaction,
    news_id: NewsId,
    changes: NewsChanges,
    categories: PatchField<Vec<CategoryId>>,
) -> Result<(), NewsRepositoryError> {
    // Row stays locked until commit.
    let existing = news::Entity::find_by_id(news_id)
        .lock_exclusive()
        .one(txn)
        .await
        .map_err(|e| db_error("update_news", "select news", e))?;

    if existing.is_none() {
        return Err(NewsRepositoryError::NotFound);
    }

    if !changes.is_empty() {
        let mut model = <news::ActiveModel as Default>::default();

        if let PatchField::Value(title) = changes.title {
            model.title = Set(title);
        }

        if let PatchField::Value(content) = changes.content {
            model.content = Set(content);
        }

        news::Entity::update_many()
            .set(model)
            .filter(news::Column::Id.eq(news_id))
            .exec(txn)
            .await
            .map_err(|e| db_error("update_news", "update news", e))?;
    }

    if let PatchField::Value(categories) = categories {
        let removed = news_categories::Entity::delete_many()
            .filter(news_categories::Column::NewsId.eq(news_id))
            .exec(txn)
            .await
            .map_err(|e| db_error("update_news", "delete categories", e))?;

        insert_links(txn, news_id, &categories, "update_news").await?;

        debug!(
            news_id,
            removed = removed.rows_affected,
            inserted = categories.len(),
            "Categories reconciled"
        );
    }

    Ok(())
}

async fn insert_links(
    txn: &DatabaseTransaction,
    news_id: NewsId,
    categories: &[CategoryId],
    operation: &'static str,
) -> Result<(), NewsRepositoryError> {
    if categories.is_empty() {
        return Ok(());
    }

    let links = categories
        .iter()
        .map(|category_id| news_categories::ActiveModel {
            news_id: Set(news_id),
            category_id: Set(*category_id),
        });

    if let Err(e) = news_categories::Entity::insert_many(links)
        .exec_without_returning(txn)
        .await
    {
        for category_id in categories {
            debug!(news_id, category_id, "Category link in failed batch");
        }
        return Err(db_error(operation, "insert categories", e));
    }

    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Commits on success, rolls back otherwise. The body's error wins over
/// a rollback failure.
async fn finish<T>(
    txn: DatabaseTransaction,
    operation: &'static str,
    result: Result<T, NewsRepositoryError>,
) -> Result<T, NewsRepositoryError> {
    match result {
        Ok(value) => {
            txn.commit()
                .await
                .map_err(|e| db_error(operation, "commit", e))?;
            Ok(value)
        }
        Err(err) => {
            if let Err(e) = txn.rollback().await {
                error!(operation, error = %e, "Transaction rollback failed");
            }
            Err(err)
        }
    }
}

fn db_error(operation: &'static str, step: &'static str, e: DbErr) -> NewsRepositoryError {
    error!(operation, step, error = %e, "Database statement failed");
    NewsRepositoryError::DatabaseError(format!("{operation}: {step}: {e}"))
}

// ============================================================================
// Tests
// ============================================================================
