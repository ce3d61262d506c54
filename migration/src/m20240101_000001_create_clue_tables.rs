use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Groups::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Groups::Name).string().not_null())
                    .col(ColumnDef::new(Groups::Code).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Groups::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Members::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Members::Name).string().not_null())
                    .col(ColumnDef::new(Members::GroupId).uuid().not_null())
                    .col(
                        ColumnDef::new(Members::Score)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Members::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_members_group")
                            .from(Members::Table, Members::GroupId)
                            .to(Groups::Table, Groups::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Clues::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Clues::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Clues::Text).string().not_null())
                    .col(ColumnDef::new(Clues::Answer).string().not_null())
                    .col(ColumnDef::new(Clues::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Clues::GroupId).uuid().not_null())
                    .col(ColumnDef::new(Clues::WordData).json().null())
                    .col(
                        ColumnDef::new(Clues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clues_author")
                            .from(Clues::Table, Clues::AuthorId)
                            .to(Members::Table, Members::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clues_group")
                            .from(Clues::Table, Clues::GroupId)
                            .to(Groups::Table, Groups::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Solutions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Solutions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Solutions::ClueId).uuid().not_null())
                    .col(ColumnDef::new(Solutions::MemberId).uuid().not_null())
                    .col(ColumnDef::new(Solutions::Answer).string().not_null())
                    .col(
                        ColumnDef::new(Solutions::Correct)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Solutions::HintsUsed)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Solutions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Solutions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_solutions_clue")
                            .from(Solutions::Table, Solutions::ClueId)
                            .to(Clues::Table, Clues::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_solutions_member")
                            .from(Solutions::Table, Solutions::MemberId)
                            .to(Members::Table, Members::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One attempt row per (clue, member); the solve flow's concurrency
        // guard against double-scoring a first correct solve.
        manager
            .create_index(
                Index::create()
                    .name("idx_solutions_clue_member")
                    .table(Solutions::Table)
                    .col(Solutions::ClueId)
                    .col(Solutions::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Lookup indexes for group-scoped listings and the leaderboard.
        manager
            .create_index(
                Index::create()
                    .name("idx_members_group_id")
                    .table(Members::Table)
                    .col(Members::GroupId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clues_group_id")
                    .table(Clues::Table)
                    .col(Clues::GroupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Solutions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Clues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Groups {
    Table,
    Id,
    Name,
    Code,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Members {
    Table,
    Id,
    Name,
    GroupId,
    Score,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Clues {
    Table,
    Id,
    Text,
    Answer,
    AuthorId,
    GroupId,
    WordData,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Solutions {
    Table,
    Id,
    ClueId,
    MemberId,
    Answer,
    Correct,
    HintsUsed,
    CreatedAt,
    UpdatedAt,
}
