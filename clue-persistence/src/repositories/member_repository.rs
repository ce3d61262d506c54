use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::{members, prelude::*};
use clue_types::{ClueError, LeaderboardEntry, Member};

pub struct MemberRepository {
    db: DatabaseConnection,
}

pub(crate) fn model_to_member(model: members::Model) -> Member {
    Member {
        id: model.id,
        name: model.name,
        group_id: model.group_id,
        score: model.score,
        created_at: model.created_at.to_rfc3339(),
    }
}

impl MemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, ClueError> {
        let member = Members::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ClueError::internal)?;
        Ok(member.map(model_to_member))
    }

    /// The member only if they belong to the given group; session identity
    /// checks go through here.
    pub async fn find_in_group(
        &self,
        member_id: Uuid,
        group_id: Uuid,
    ) -> Result<Option<Member>, ClueError> {
        let member = Members::find_by_id(member_id)
            .filter(members::Column::GroupId.eq(group_id))
            .one(&self.db)
            .await
            .map_err(ClueError::internal)?;
        Ok(member.map(model_to_member))
    }

    /// Group members ranked by score, highest first.
    pub async fn leaderboard(&self, group_id: Uuid) -> Result<Vec<LeaderboardEntry>, ClueError> {
        let members = Members::find()
            .filter(members::Column::GroupId.eq(group_id))
            .order_by_desc(members::Column::Score)
            .all(&self.db)
            .await
            .map_err(ClueError::internal)?;

        Ok(members
            .into_iter()
            .enumerate()
            .map(|(index, model)| LeaderboardEntry {
                member: model_to_member(model),
                rank: (index + 1) as u32,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use crate::repositories::GroupRepository;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::DatabaseConnection;

    async fn setup_test_db() -> (DatabaseConnection, GroupRepository, MemberRepository) {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        (
            db.clone(),
            GroupRepository::new(db.clone()),
            MemberRepository::new(db),
        )
    }

    #[tokio::test]
    async fn test_find_in_group_scopes_by_group() {
        let (_db, groups, members) = setup_test_db().await;

        let (group, ada) = groups.create_group("Puzzlers", "Ada").await.unwrap();
        let (other, _eve) = groups.create_group("Rivals", "Eve").await.unwrap();

        let found = members.find_in_group(ada.id, group.id).await.unwrap();
        assert!(found.is_some());

        let cross_group = members.find_in_group(ada.id, other.id).await.unwrap();
        assert!(cross_group.is_none());
    }

    #[tokio::test]
    async fn test_leaderboard_orders_by_score() {
        let (db, groups, members) = setup_test_db().await;

        let (group, ada) = groups.create_group("Puzzlers", "Ada").await.unwrap();
        let (_g, bob) = groups.join_group(&group.code, "Bob").await.unwrap();

        // Give Bob a score directly; the solve flow is exercised elsewhere.
        use sea_orm::{ActiveModelTrait, Set};
        let mut bob_active: members::ActiveModel = Members::find_by_id(bob.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap()
            .into();
        bob_active.score = Set(9);
        bob_active.update(&db).await.unwrap();

        let board = members.leaderboard(group.id).await.unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].member.id, bob.id);
        assert_eq!(board[0].member.score, 9);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[1].member.id, ada.id);
        assert_eq!(board[1].rank, 2);
    }
}
