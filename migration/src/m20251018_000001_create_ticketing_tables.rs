use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Parents first: customer and stadium have no dependencies
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Customer::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Customer::Username).string_len(100).not_null())
                    .col(ColumnDef::new(Customer::FirstName).string_len(100).not_null().default(""))
                    .col(ColumnDef::new(Customer::Email).string_len(254).not_null().unique_key())
                    .col(ColumnDef::new(Customer::IsActive).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Customer::DateJoined)
                            .date_time()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Stadium::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Stadium::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Stadium::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Stadium::Address).string_len(100).not_null())
                    .col(ColumnDef::new(Stadium::Capacity).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Events keep their stadium alive: NO ACTION rejects deleting a stadium that still has events
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Event::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Event::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Event::Date).date_time().not_null())
                    .col(ColumnDef::new(Event::StadiumId).integer().not_null())
                    .col(ColumnDef::new(Event::IsActive).boolean().not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_stadium")
                            .from(Event::Table, Event::StadiumId)
                            .to(Stadium::Table, Stadium::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Tickets go away with their event, but never with their customer
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Ticket::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Ticket::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Ticket::EventId).integer().not_null())
                    .col(ColumnDef::new(Ticket::BoughtAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_customer")
                            .from(Ticket::Table, Ticket::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_event")
                            .from(Ticket::Table, Ticket::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Secondary indexes for the columns the lookups filter on
        manager
            .create_index(
                Index::create()
                    .name("idx_customer_is_active")
                    .table(Customer::Table)
                    .col(Customer::IsActive)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_event_date")
                    .table(Event::Table)
                    .col(Event::Date)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_event_stadium")
                    .table(Event::Table)
                    .col(Event::StadiumId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_customer")
                    .table(Ticket::Table)
                    .col(Ticket::CustomerId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_event")
                    .table(Ticket::Table)
                    .col(Ticket::EventId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_bought_at")
                    .table(Ticket::Table)
                    .col(Ticket::BoughtAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse dependency order
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Stadium::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Customer {
    Table,
    Id,
    Username,
    FirstName,
    Email,
    IsActive,
    DateJoined,
}

#[derive(DeriveIden)]
enum Stadium {
    Table,
    Id,
    Name,
    Address,
    Capacity,
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
    Name,
    Date,
    StadiumId,
    IsActive,
}

#[derive(DeriveIden)]
enum Ticket {
    Table,
    Id,
    CustomerId,
    EventId,
    BoughtAt,
}
