use qaseed_core::db::open_db_in_memory;
use qaseed_core::seed::ratings::recompute_ratings;
use qaseed_core::{
    run_seeded, Answer, AnswerRepository, AnswerVote, NullProgress, Question, QuestionRepository,
    QuestionVote, SqliteAnswerRepository, SqliteQuestionRepository, SqliteUserRepository,
    SqliteVoteRepository, User, UserRepository, VoteRepository, VoteValue,
};
use rusqlite::Connection;

#[test]
fn ratings_equal_signed_vote_sums_after_a_run() {
    let conn = open_db_in_memory().unwrap();
    run_seeded(&conn, 2, 29, &NullProgress).unwrap();

    let question_mismatches: i64 = conn
        .query_row(
            "SELECT COUNT(*)
             FROM questions q
             WHERE q.rating != COALESCE(
                (SELECT SUM(v.value) FROM question_votes v WHERE v.question_uuid = q.uuid), 0
             );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(question_mismatches, 0);

    let answer_mismatches: i64 = conn
        .query_row(
            "SELECT COUNT(*)
             FROM answers a
             WHERE a.rating != COALESCE(
                (SELECT SUM(v.value) FROM answer_votes v WHERE v.answer_uuid = a.uuid), 0
             );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(answer_mismatches, 0);
}

#[test]
fn constructed_votes_aggregate_to_their_signed_sum() {
    let conn = open_db_in_memory().unwrap();
    let fixture = Fixture::build(&conn);

    let vote_repo = SqliteVoteRepository::new(&conn);
    vote_repo
        .create_question_vote(&QuestionVote {
            user_uuid: fixture.voter_a.uuid,
            question_uuid: fixture.question.uuid,
            value: VoteValue::Up,
        })
        .unwrap();
    vote_repo
        .create_question_vote(&QuestionVote {
            user_uuid: fixture.voter_b.uuid,
            question_uuid: fixture.question.uuid,
            value: VoteValue::Up,
        })
        .unwrap();
    vote_repo
        .create_answer_vote(&AnswerVote {
            user_uuid: fixture.voter_a.uuid,
            answer_uuid: fixture.answer.uuid,
            value: VoteValue::Down,
        })
        .unwrap();

    fixture.recompute(&conn);

    let question_repo = SqliteQuestionRepository::new(&conn);
    assert_eq!(
        question_repo.question_rating(fixture.question.uuid).unwrap(),
        2
    );
    let answer_repo = SqliteAnswerRepository::new(&conn);
    assert_eq!(answer_repo.answer_rating(fixture.answer.uuid).unwrap(), -1);
}

#[test]
fn zero_vote_entities_keep_zero_rating() {
    let conn = open_db_in_memory().unwrap();
    let fixture = Fixture::build(&conn);

    fixture.recompute(&conn);

    let question_repo = SqliteQuestionRepository::new(&conn);
    assert_eq!(
        question_repo.question_rating(fixture.question.uuid).unwrap(),
        0
    );
    let answer_repo = SqliteAnswerRepository::new(&conn);
    assert_eq!(answer_repo.answer_rating(fixture.answer.uuid).unwrap(), 0);
}

#[test]
fn recomputing_twice_yields_identical_ratings() {
    let conn = open_db_in_memory().unwrap();
    let fixture = Fixture::build(&conn);

    let vote_repo = SqliteVoteRepository::new(&conn);
    vote_repo
        .create_question_vote(&QuestionVote {
            user_uuid: fixture.voter_a.uuid,
            question_uuid: fixture.question.uuid,
            value: VoteValue::Down,
        })
        .unwrap();

    fixture.recompute(&conn);
    let question_repo = SqliteQuestionRepository::new(&conn);
    let first = question_repo.question_rating(fixture.question.uuid).unwrap();

    fixture.recompute(&conn);
    let second = question_repo.question_rating(fixture.question.uuid).unwrap();

    assert_eq!(first, -1);
    assert_eq!(first, second);
}

struct Fixture {
    voter_a: User,
    voter_b: User,
    question: Question,
    answer: Answer,
}

impl Fixture {
    fn build(conn: &Connection) -> Self {
        let user_repo = SqliteUserRepository::new(conn);
        let voter_a = User::new("user_0", "user_0@example.com", "testpass123");
        let voter_b = User::new("user_1", "user_1@example.com", "testpass123");
        user_repo.create_user(&voter_a).unwrap();
        user_repo.create_user(&voter_b).unwrap();

        let question_repo = SqliteQuestionRepository::new(conn);
        let question = Question::new("Fixture question.", "Body.", voter_a.uuid);
        question_repo.create_question(&question).unwrap();

        let answer_repo = SqliteAnswerRepository::new(conn);
        let answer = Answer::new("Fixture answer.", voter_b.uuid, question.uuid, false);
        answer_repo.create_answer(&answer).unwrap();

        Self {
            voter_a,
            voter_b,
            question,
            answer,
        }
    }

    fn recompute(&self, conn: &Connection) {
        let question_repo = SqliteQuestionRepository::new(conn);
        let answer_repo = SqliteAnswerRepository::new(conn);
        let vote_repo = SqliteVoteRepository::new(conn);
        recompute_ratings(
            &question_repo,
            &answer_repo,
            &vote_repo,
            std::slice::from_ref(&self.question),
            std::slice::from_ref(&self.answer),
            &NullProgress,
        )
        .unwrap();
    }
}
