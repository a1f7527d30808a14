//! Create `saving_goals` table.
//! One row per goal; goal names are unique across the whole table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SavingGoals::Table)
                    .if_not_exists()
                    .col(pk_auto(SavingGoals::Id))
                    .col(string_len(SavingGoals::GoalName, 100).not_null())
                    .col(string_len(SavingGoals::GoalCurrency, 10).not_null())
                    .col(double(SavingGoals::GoalValue).not_null())
                    .col(double(SavingGoals::MonthlySavings).not_null())
                    .col(double(SavingGoals::ConvertedValue).not_null())
                    .col(timestamp_with_time_zone(SavingGoals::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        // Duplicate-name writes must fail at the store, not the app layer.
        manager
            .create_index(
                Index::create()
                    .name("idx_saving_goals_name_unique")
                    .table(SavingGoals::Table)
                    .col(SavingGoals::GoalName)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SavingGoals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SavingGoals {
    Table,
    Id,
    GoalName,
    GoalCurrency,
    GoalValue,
    MonthlySavings,
    ConvertedValue,
    CreatedAt,
}
