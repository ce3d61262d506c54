use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{clues, members, prelude::*, solutions};
use clue_core::{format_answer_length, normalize_answer, validate_classification};
use clue_types::{Clue, ClueError, ClueSummary, SolutionView, WordClassification};

pub struct ClueRepository {
    db: DatabaseConnection,
}

fn parse_word_data(raw: Option<&serde_json::Value>) -> Option<Vec<WordClassification>> {
    let value = raw?;
    match serde_json::from_value(value.clone()) {
        Ok(word_data) => Some(word_data),
        Err(err) => {
            tracing::warn!(error = %err, "malformed word_data column, treating as unclassified");
            None
        }
    }
}

fn model_to_clue(model: clues::Model) -> Clue {
    let word_data = parse_word_data(model.word_data.as_ref());
    Clue {
        id: model.id,
        text: model.text,
        answer: model.answer,
        author_id: model.author_id,
        group_id: model.group_id,
        word_data,
        created_at: model.created_at.to_rfc3339(),
    }
}

fn model_to_summary(
    model: clues::Model,
    author_name: String,
    solutions: Vec<SolutionView>,
) -> ClueSummary {
    let has_word_data = parse_word_data(model.word_data.as_ref())
        .map(|wd| !wd.is_empty())
        .unwrap_or(false);

    ClueSummary {
        id: model.id,
        text: model.text,
        author_id: model.author_id,
        author_name,
        group_id: model.group_id,
        answer_pattern: format_answer_length(&model.answer),
        has_word_data,
        solutions,
        created_at: model.created_at.to_rfc3339(),
    }
}

impl ClueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Member names of a group, for attaching author/solver names to
    /// summaries.
    async fn member_names(&self, group_id: Uuid) -> Result<HashMap<Uuid, String>, ClueError> {
        let members = Members::find()
            .filter(members::Column::GroupId.eq(group_id))
            .all(&self.db)
            .await
            .map_err(ClueError::internal)?;
        Ok(members.into_iter().map(|m| (m.id, m.name)).collect())
    }

    async fn solution_views(
        &self,
        clue_ids: &[Uuid],
        names: &HashMap<Uuid, String>,
    ) -> Result<HashMap<Uuid, Vec<SolutionView>>, ClueError> {
        let rows = Solutions::find()
            .filter(solutions::Column::ClueId.is_in(clue_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(ClueError::internal)?;

        let mut by_clue: HashMap<Uuid, Vec<SolutionView>> = HashMap::new();
        for row in rows {
            let member_name = names
                .get(&row.member_id)
                .cloned()
                .unwrap_or_else(|| "unknown".to_string());
            by_clue.entry(row.clue_id).or_default().push(SolutionView {
                member_name,
                correct: row.correct,
            });
        }
        Ok(by_clue)
    }

    /// Create a clue authored by a member of the group. The answer is stored
    /// uppercased and is immutable from then on.
    pub async fn create_clue(
        &self,
        group_id: Uuid,
        author_id: Uuid,
        text: &str,
        answer: &str,
    ) -> Result<ClueSummary, ClueError> {
        Groups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(ClueError::internal)?
            .ok_or(ClueError::GroupNotFound)?;

        let author = Members::find_by_id(author_id)
            .filter(members::Column::GroupId.eq(group_id))
            .one(&self.db)
            .await
            .map_err(ClueError::internal)?
            .ok_or(ClueError::MemberNotInGroup)?;

        let clue = clues::ActiveModel {
            id: Set(Uuid::new_v4()),
            text: Set(text.to_string()),
            answer: Set(normalize_answer(answer)),
            author_id: Set(author_id),
            group_id: Set(group_id),
            word_data: Set(None),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await
        .map_err(ClueError::internal)?;

        tracing::info!(clue_id = %clue.id, group_id = %group_id, "clue submitted");
        Ok(model_to_summary(clue, author.name, Vec::new()))
    }

    /// All clues of a group, newest first, with author and solver names
    /// attached. Answers never leave this query, only their enumeration.
    pub async fn list_for_group(&self, group_id: Uuid) -> Result<Vec<ClueSummary>, ClueError> {
        Groups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(ClueError::internal)?
            .ok_or(ClueError::GroupNotFound)?;

        let names = self.member_names(group_id).await?;
        let clue_models = Clues::find()
            .filter(clues::Column::GroupId.eq(group_id))
            .order_by_desc(clues::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(ClueError::internal)?;

        let clue_ids: Vec<Uuid> = clue_models.iter().map(|c| c.id).collect();
        let mut solutions = self.solution_views(&clue_ids, &names).await?;

        Ok(clue_models
            .into_iter()
            .map(|model| {
                let author_name = names
                    .get(&model.author_id)
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string());
                let views = solutions.remove(&model.id).unwrap_or_default();
                model_to_summary(model, author_name, views)
            })
            .collect())
    }

    /// Full clue record, answer included. Server-side use only (hint
    /// issuing and the solve flow).
    pub async fn find_clue(&self, group_id: Uuid, clue_id: Uuid) -> Result<Clue, ClueError> {
        let model = Clues::find_by_id(clue_id)
            .filter(clues::Column::GroupId.eq(group_id))
            .one(&self.db)
            .await
            .map_err(ClueError::internal)?
            .ok_or(ClueError::ClueNotFound)?;
        Ok(model_to_clue(model))
    }

    /// Replace the clue's word classification wholesale. Author-only.
    pub async fn classify(
        &self,
        group_id: Uuid,
        clue_id: Uuid,
        caller_id: Uuid,
        word_data: &[WordClassification],
    ) -> Result<ClueSummary, ClueError> {
        validate_classification(word_data)?;

        let model = Clues::find_by_id(clue_id)
            .filter(clues::Column::GroupId.eq(group_id))
            .one(&self.db)
            .await
            .map_err(ClueError::internal)?
            .ok_or(ClueError::ClueNotFound)?;

        if model.author_id != caller_id {
            return Err(ClueError::NotClueAuthor);
        }

        let json = serde_json::to_value(word_data).map_err(ClueError::internal)?;
        let mut active: clues::ActiveModel = model.into();
        active.word_data = Set(Some(json));
        let updated = active.update(&self.db).await.map_err(ClueError::internal)?;

        let names = self.member_names(group_id).await?;
        let author_name = names
            .get(&updated.author_id)
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());
        let mut solutions = self.solution_views(&[updated.id], &names).await?;
        let views = solutions.remove(&updated.id).unwrap_or_default();

        tracing::info!(clue_id = %updated.id, "clue classified");
        Ok(model_to_summary(updated, author_name, views))
    }
}
