use qaseed_core::db::open_db_in_memory;
use qaseed_core::{run_seeded, NullProgress};
use rusqlite::Connection;

#[test]
fn coefficient_one_creates_exact_entity_counts() {
    let conn = open_db_in_memory().unwrap();
    let summary = run_seeded(&conn, 1, 42, &NullProgress).unwrap();

    assert_eq!(summary.users, 1);
    assert_eq!(summary.tags, 1);
    assert_eq!(summary.questions, 10);
    assert_eq!(summary.answers, 100);
    assert!(summary.question_votes <= 100);
    assert!(summary.answer_votes <= 100);
    assert_eq!(
        summary.total_votes(),
        summary.question_votes + summary.answer_votes
    );
}

#[test]
fn zero_coefficient_completes_with_empty_summary() {
    let conn = open_db_in_memory().unwrap();
    let summary = run_seeded(&conn, 0, 42, &NullProgress).unwrap();

    assert_eq!(summary.users, 0);
    assert_eq!(summary.tags, 0);
    assert_eq!(summary.questions, 0);
    assert_eq!(summary.answers, 0);
    assert_eq!(summary.question_votes, 0);
    assert_eq!(summary.answer_votes, 0);
    assert_eq!(summary.total_votes(), 0);
}

#[test]
fn summary_matches_raw_table_counts() {
    let conn = open_db_in_memory().unwrap();
    let summary = run_seeded(&conn, 2, 7, &NullProgress).unwrap();

    assert_eq!(summary.users, table_count(&conn, "users"));
    assert_eq!(summary.tags, table_count(&conn, "tags"));
    assert_eq!(summary.questions, table_count(&conn, "questions"));
    assert_eq!(summary.answers, table_count(&conn, "answers"));
    assert_eq!(summary.question_votes, table_count(&conn, "question_votes"));
    assert_eq!(summary.answer_votes, table_count(&conn, "answer_votes"));
}

#[test]
fn every_user_gets_exactly_one_profile() {
    let conn = open_db_in_memory().unwrap();
    let summary = run_seeded(&conn, 3, 11, &NullProgress).unwrap();

    assert_eq!(table_count(&conn, "profiles"), summary.users);
    let orphans: i64 = conn
        .query_row(
            "SELECT COUNT(*)
             FROM profiles p
             LEFT JOIN users u ON u.uuid = p.user_uuid
             WHERE u.uuid IS NULL;",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(orphans, 0);
}

#[test]
fn content_references_only_created_entities() {
    let conn = open_db_in_memory().unwrap();
    run_seeded(&conn, 2, 13, &NullProgress).unwrap();

    let orphan_question_authors: i64 = conn
        .query_row(
            "SELECT COUNT(*)
             FROM questions q
             LEFT JOIN users u ON u.uuid = q.author_uuid
             WHERE u.uuid IS NULL;",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(orphan_question_authors, 0);

    let orphan_answers: i64 = conn
        .query_row(
            "SELECT COUNT(*)
             FROM answers a
             LEFT JOIN questions q ON q.uuid = a.question_uuid
             LEFT JOIN users u ON u.uuid = a.author_uuid
             WHERE q.uuid IS NULL OR u.uuid IS NULL;",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(orphan_answers, 0);
}

#[test]
fn every_question_has_one_to_three_tags() {
    let conn = open_db_in_memory().unwrap();
    run_seeded(&conn, 4, 17, &NullProgress).unwrap();

    let mut stmt = conn
        .prepare(
            "SELECT q.uuid, COUNT(qt.tag_uuid)
             FROM questions q
             LEFT JOIN question_tags qt ON qt.question_uuid = q.uuid
             GROUP BY q.uuid;",
        )
        .unwrap();
    let mut rows = stmt.query([]).unwrap();
    let mut seen = 0;
    while let Some(row) = rows.next().unwrap() {
        let tag_count: i64 = row.get(1).unwrap();
        assert!(
            (1..=3).contains(&tag_count),
            "question has {tag_count} tags"
        );
        seen += 1;
    }
    assert_eq!(seen, 40);
}

#[test]
fn same_seed_reproduces_generated_structure() {
    let conn_first = open_db_in_memory().unwrap();
    let conn_second = open_db_in_memory().unwrap();

    let summary_first = run_seeded(&conn_first, 2, 99, &NullProgress).unwrap();
    let summary_second = run_seeded(&conn_second, 2, 99, &NullProgress).unwrap();

    assert_eq!(summary_first, summary_second);
    assert_eq!(
        sorted_column(&conn_first, "SELECT username FROM users ORDER BY username;"),
        sorted_column(&conn_second, "SELECT username FROM users ORDER BY username;")
    );
    assert_eq!(
        sorted_column(&conn_first, "SELECT name FROM tags ORDER BY name;"),
        sorted_column(&conn_second, "SELECT name FROM tags ORDER BY name;")
    );
    assert_eq!(
        sorted_column(&conn_first, "SELECT title FROM questions ORDER BY title;"),
        sorted_column(&conn_second, "SELECT title FROM questions ORDER BY title;")
    );
    assert_eq!(
        sorted_ratings(&conn_first, "questions"),
        sorted_ratings(&conn_second, "questions")
    );
    assert_eq!(
        sorted_ratings(&conn_first, "answers"),
        sorted_ratings(&conn_second, "answers")
    );
}

#[test]
fn question_titles_stay_within_bound() {
    let conn = open_db_in_memory().unwrap();
    run_seeded(&conn, 2, 23, &NullProgress).unwrap();

    for title in sorted_column(&conn, "SELECT title FROM questions ORDER BY title;") {
        assert!(title.chars().count() <= 200);
        assert!(!title.is_empty());
    }
}

fn table_count(conn: &Connection, table: &str) -> u64 {
    let count: i64 = conn
        .query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
            row.get(0)
        })
        .unwrap();
    u64::try_from(count).unwrap()
}

fn sorted_column(conn: &Connection, sql: &str) -> Vec<String> {
    let mut stmt = conn.prepare(sql).unwrap();
    let mut rows = stmt.query([]).unwrap();
    let mut values = Vec::new();
    while let Some(row) = rows.next().unwrap() {
        values.push(row.get::<_, String>(0).unwrap());
    }
    values
}

fn sorted_ratings(conn: &Connection, table: &str) -> Vec<i64> {
    let mut stmt = conn
        .prepare(&format!("SELECT rating FROM {table} ORDER BY rating;"))
        .unwrap();
    let mut rows = stmt.query([]).unwrap();
    let mut values = Vec::new();
    while let Some(row) = rows.next().unwrap() {
        values.push(row.get::<_, i64>(0).unwrap());
    }
    values
}
