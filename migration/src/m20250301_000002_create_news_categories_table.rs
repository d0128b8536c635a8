use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create news_categories join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(NewsCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NewsCategories::NewsId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NewsCategories::CategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    // One link per (news, category) pair
                    .primary_key(
                        Index::create()
                            .col(NewsCategories::NewsId)
                            .col(NewsCategories::CategoryId),
                    )
                    // FK → news
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_categories_news_id")
                            .from(NewsCategories::Table, NewsCategories::NewsId)
                            .to(News::Table, News::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Fast lookup: all news for a category.
        // (news_id lookups are served by the composite primary key.)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_news_categories_category_id
                ON news_categories (category_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_news_categories_category_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(NewsCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NewsCategories {
    Table,
    NewsId,
    CategoryId,
}

#[derive(DeriveIden)]
enum News {
    Table,
    Id,
}
