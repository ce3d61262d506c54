use sea_orm::entity::prelude::*;

/// At most one row per (clue_id, member_id); enforced by a unique index so
/// concurrent first-solve submissions cannot both insert.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "solutions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub clue_id: Uuid,
    pub member_id: Uuid,
    pub answer: String,
    pub correct: bool,
    pub hints_used: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clues::Entity",
        from = "Column::ClueId",
        to = "super::clues::Column::Id"
    )]
    Clue,
    #[sea_orm(
        belongs_to = "super::members::Entity",
        from = "Column::MemberId",
        to = "super::members::Column::Id"
    )]
    Member,
}

impl Related<super::clues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clue.def()
    }
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
