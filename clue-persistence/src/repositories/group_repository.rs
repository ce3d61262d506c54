use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{members, prelude::*};
use crate::repositories::member_repository::model_to_member;
use clue_core::generate_join_code;
use clue_types::{ClueError, Group, Member};

pub struct GroupRepository {
    db: DatabaseConnection,
}

pub(crate) fn model_to_group(model: crate::entities::groups::Model) -> Group {
    Group {
        id: model.id,
        name: model.name,
        code: model.code,
        created_at: model.created_at.to_rfc3339(),
    }
}

impl GroupRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a group and its founding member in one transaction, minting a
    /// fresh join code.
    pub async fn create_group(
        &self,
        group_name: &str,
        member_name: &str,
    ) -> Result<(Group, Member), ClueError> {
        let txn = self.db.begin().await.map_err(ClueError::internal)?;
        let now = chrono::Utc::now().into();

        let group = crate::entities::groups::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(group_name.to_string()),
            code: Set(generate_join_code()),
            created_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(ClueError::internal)?;

        let member = members::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(member_name.to_string()),
            group_id: Set(group.id),
            score: Set(0),
            created_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(ClueError::internal)?;

        txn.commit().await.map_err(ClueError::internal)?;

        tracing::info!(group_id = %group.id, code = %group.code, "created group");
        Ok((model_to_group(group), model_to_member(member)))
    }

    /// Add a member to the group behind the given join code.
    pub async fn join_group(
        &self,
        code: &str,
        member_name: &str,
    ) -> Result<(Group, Member), ClueError> {
        let group = Groups::find()
            .filter(crate::entities::groups::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(ClueError::internal)?
            .ok_or(ClueError::GroupNotFound)?;

        let member = members::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(member_name.to_string()),
            group_id: Set(group.id),
            score: Set(0),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await
        .map_err(ClueError::internal)?;

        tracing::info!(group_id = %group.id, member_id = %member.id, "member joined group");
        Ok((model_to_group(group), model_to_member(member)))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, ClueError> {
        let group = Groups::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ClueError::internal)?;
        Ok(group.map(model_to_group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use migration::{Migrator, MigratorTrait};

    async fn setup_test_db() -> GroupRepository {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        GroupRepository::new(db)
    }

    #[tokio::test]
    async fn test_create_group_with_founding_member() {
        let repo = setup_test_db().await;

        let (group, member) = repo.create_group("Puzzlers", "Ada").await.unwrap();
        assert_eq!(group.name, "Puzzlers");
        assert_eq!(group.code.len(), 6);
        assert_eq!(member.name, "Ada");
        assert_eq!(member.group_id, group.id);
        assert_eq!(member.score, 0);

        let found = repo.find_by_id(group.id).await.unwrap().unwrap();
        assert_eq!(found.code, group.code);
    }

    #[tokio::test]
    async fn test_join_group_by_code() {
        let repo = setup_test_db().await;

        let (group, _ada) = repo.create_group("Puzzlers", "Ada").await.unwrap();
        let (joined, bob) = repo.join_group(&group.code, "Bob").await.unwrap();

        assert_eq!(joined.id, group.id);
        assert_eq!(bob.name, "Bob");
        assert_eq!(bob.group_id, group.id);
    }

    #[tokio::test]
    async fn test_join_unknown_code_fails() {
        let repo = setup_test_db().await;

        let err = repo.join_group("XXXXXX", "Bob").await.unwrap_err();
        assert_eq!(err, ClueError::GroupNotFound);
    }
}
