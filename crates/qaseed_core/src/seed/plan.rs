//! Target-count derivation from the scale coefficient.
//!
//! # Invariants
//! - All counts are a pure function of the coefficient.
//! - A zero coefficient yields an all-zero plan, never an error.

const QUESTIONS_PER_COEFFICIENT: u64 = 10;
const ANSWERS_PER_COEFFICIENT: u64 = 100;
const VOTE_BUDGET_PER_COEFFICIENT: u64 = 200;

/// Per-kind target counts for one seeding run.
///
/// Vote targets are halves of a combined budget; realized vote counts may
/// undershoot them when sampling collides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    pub users: u64,
    pub tags: u64,
    pub questions: u64,
    pub answers: u64,
    pub question_votes: u64,
    pub answer_votes: u64,
}

impl SeedPlan {
    /// Derives all target counts from the scale coefficient.
    pub fn for_coefficient(coefficient: u64) -> Self {
        let vote_budget = coefficient * VOTE_BUDGET_PER_COEFFICIENT;
        Self {
            users: coefficient,
            tags: coefficient,
            questions: coefficient * QUESTIONS_PER_COEFFICIENT,
            answers: coefficient * ANSWERS_PER_COEFFICIENT,
            question_votes: vote_budget / 2,
            answer_votes: vote_budget / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SeedPlan;

    #[test]
    fn ratios_follow_the_coefficient() {
        let plan = SeedPlan::for_coefficient(3);
        assert_eq!(plan.users, 3);
        assert_eq!(plan.tags, 3);
        assert_eq!(plan.questions, 30);
        assert_eq!(plan.answers, 300);
        assert_eq!(plan.question_votes, 300);
        assert_eq!(plan.answer_votes, 300);
    }

    #[test]
    fn zero_coefficient_yields_empty_plan() {
        let plan = SeedPlan::for_coefficient(0);
        assert_eq!(
            plan,
            SeedPlan {
                users: 0,
                tags: 0,
                questions: 0,
                answers: 0,
                question_votes: 0,
                answer_votes: 0,
            }
        );
    }
}
