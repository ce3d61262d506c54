use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{clues, members, prelude::*, solutions};
use clue_core::{SolveState, SubmissionOutcome, evaluate_submission, normalize_answer};
use clue_types::{ClueError, Solution, SolveResponse};

pub struct SolutionRepository {
    db: DatabaseConnection,
}

fn model_to_solution(model: solutions::Model) -> Solution {
    Solution {
        id: model.id,
        clue_id: model.clue_id,
        member_id: model.member_id,
        answer: model.answer,
        correct: model.correct,
        hints_used: model.hints_used,
    }
}

impl SolutionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Run one submission through the solve flow. The solution row write and
    /// the score increment share a transaction, and the unique
    /// (clue_id, member_id) index keeps a concurrent duplicate first-solve
    /// from scoring twice.
    pub async fn submit(
        &self,
        group_id: Uuid,
        clue_id: Uuid,
        member_id: Uuid,
        submitted: &str,
        hints_used: i32,
    ) -> Result<SolveResponse, ClueError> {
        let txn = self.db.begin().await.map_err(ClueError::internal)?;

        let clue = Clues::find_by_id(clue_id)
            .filter(clues::Column::GroupId.eq(group_id))
            .one(&txn)
            .await
            .map_err(ClueError::internal)?
            .ok_or(ClueError::ClueNotFound)?;

        let member = Members::find_by_id(member_id)
            .filter(members::Column::GroupId.eq(group_id))
            .one(&txn)
            .await
            .map_err(ClueError::internal)?
            .ok_or(ClueError::MemberNotInGroup)?;

        let prior = Solutions::find()
            .filter(solutions::Column::ClueId.eq(clue_id))
            .filter(solutions::Column::MemberId.eq(member_id))
            .one(&txn)
            .await
            .map_err(ClueError::internal)?;

        let state = match &prior {
            None => SolveState::Unattempted,
            Some(row) if row.correct => SolveState::Solved,
            Some(_) => SolveState::AttemptedIncorrect,
        };

        let outcome = evaluate_submission(state, &clue.answer, submitted, hints_used)?;
        let correct = matches!(outcome, SubmissionOutcome::Solved { .. });
        let points_earned = match outcome {
            SubmissionOutcome::Solved { points_earned } => points_earned,
            SubmissionOutcome::Incorrect => 0,
        };

        let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();
        match prior {
            Some(existing) => {
                // Conditional on `correct = false`: a solve that landed
                // between the read above and this write leaves nothing to
                // update, and the attempt is rejected instead of scored
                // twice.
                let updated = Solutions::update_many()
                    .col_expr(
                        solutions::Column::Answer,
                        Expr::value(normalize_answer(submitted)),
                    )
                    .col_expr(solutions::Column::Correct, Expr::value(correct))
                    .col_expr(solutions::Column::HintsUsed, Expr::value(hints_used))
                    .col_expr(solutions::Column::UpdatedAt, Expr::value(now))
                    .filter(solutions::Column::Id.eq(existing.id))
                    .filter(solutions::Column::Correct.eq(false))
                    .exec(&txn)
                    .await
                    .map_err(ClueError::internal)?;
                if updated.rows_affected == 0 {
                    return Err(ClueError::AlreadySolved);
                }
            }
            None => {
                solutions::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    clue_id: Set(clue_id),
                    member_id: Set(member_id),
                    answer: Set(normalize_answer(submitted)),
                    correct: Set(correct),
                    hints_used: Set(hints_used),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&txn)
                .await
                .map_err(ClueError::internal)?;
            }
        }

        // Solution row is persisted; the score update follows it inside the
        // same transaction.
        if correct {
            let new_score = member.score + points_earned;
            let mut active: members::ActiveModel = member.into();
            active.score = Set(new_score);
            active.update(&txn).await.map_err(ClueError::internal)?;
            tracing::info!(
                clue_id = %clue_id,
                member_id = %member_id,
                points_earned,
                "clue solved"
            );
        }

        txn.commit().await.map_err(ClueError::internal)?;

        Ok(SolveResponse {
            correct,
            points_earned,
        })
    }

    pub async fn find_for(
        &self,
        clue_id: Uuid,
        member_id: Uuid,
    ) -> Result<Option<Solution>, ClueError> {
        let row = Solutions::find()
            .filter(solutions::Column::ClueId.eq(clue_id))
            .filter(solutions::Column::MemberId.eq(member_id))
            .one(&self.db)
            .await
            .map_err(ClueError::internal)?;
        Ok(row.map(model_to_solution))
    }
}
