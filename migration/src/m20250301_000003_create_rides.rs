use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_drivers::Driver;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ride::Table)
                    .if_not_exists()
                    .col(pk_auto(Ride::Id))
                    .col(text(Ride::StartLocation).not_null())
                    .col(text(Ride::EndLocation).not_null())
                    .col(integer(Ride::DriverId).not_null())
                    .col(integer(Ride::AvailableSeats).not_null())
                    .col(decimal_len(Ride::Price, 10, 2).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ride_driver")
                            .from(Ride::Table, Ride::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ride::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ride {
    Table,
    Id,
    StartLocation,
    EndLocation,
    DriverId,
    AvailableSeats,
    Price,
}
