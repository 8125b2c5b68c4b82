//! Full-statement integration tests: text in, outcome out.

use quill_core::Error;
use quill_engine::{Engine, Outcome};
use quill_parser::parse_statement;

fn run(engine: &mut Engine, line: &str) -> Result<Outcome, Error> {
    let statement = parse_statement(line.as_bytes()).ok_or(Error::Syntax)?;
    engine.execute(statement)
}

fn ok(engine: &mut Engine, line: &str) -> Outcome {
    run(engine, line).unwrap_or_else(|err| panic!("`{line}` failed: {err}"))
}

fn seeded() -> Engine {
    let mut engine = Engine::new();
    ok(&mut engine, "create table users (name, role);");
    ok(
        &mut engine,
        "insert into users (name, role) values ('alice', 'admin'), ('bob', 'user'), ('carol', 'admin');",
    );
    engine
}

#[test]
fn test_create_insert_select_walk() {
    let mut engine = seeded();
    assert_eq!(ok(&mut engine, "select * from users;"), Outcome::Cursor(0));
    assert_eq!(
        ok(&mut engine, "get cursor 0;"),
        Outcome::Row(vec![b"alice".to_vec(), b"admin".to_vec()])
    );
    assert_eq!(ok(&mut engine, "advance cursor 0;"), Outcome::Advanced);
    assert_eq!(
        ok(&mut engine, "get cursor 0;"),
        Outcome::Row(vec![b"bob".to_vec(), b"user".to_vec()])
    );
    ok(&mut engine, "advance cursor 0;");
    ok(&mut engine, "advance cursor 0;");
    assert_eq!(ok(&mut engine, "get cursor 0;"), Outcome::Done);
}

#[test]
fn test_where_equals() {
    let mut engine = seeded();
    ok(&mut engine, "select * from users where role='admin';");
    assert_eq!(
        ok(&mut engine, "get cursor 0;"),
        Outcome::Row(vec![b"alice".to_vec(), b"admin".to_vec()])
    );
    ok(&mut engine, "advance cursor 0;");
    assert_eq!(
        ok(&mut engine, "get cursor 0;"),
        Outcome::Row(vec![b"carol".to_vec(), b"admin".to_vec()])
    );
    ok(&mut engine, "advance cursor 0;");
    assert_eq!(ok(&mut engine, "get cursor 0;"), Outcome::Done);
}

#[test]
fn test_where_and_or_precedence() {
    let mut engine = seeded();
    // and binds tighter: carol or (bob and admin) = carol only.
    ok(
        &mut engine,
        "select * from users where name='carol' or name='bob' and role='admin';",
    );
    assert_eq!(
        ok(&mut engine, "get cursor 0;"),
        Outcome::Row(vec![b"carol".to_vec(), b"admin".to_vec()])
    );
    ok(&mut engine, "advance cursor 0;");
    assert_eq!(ok(&mut engine, "get cursor 0;"), Outcome::Done);

    // Parentheses flip it: (carol or bob) and admin = carol.
    ok(
        &mut engine,
        "select * from users where (name='carol' or name='bob') and role='admin';",
    );
    assert_eq!(
        ok(&mut engine, "get cursor 1;"),
        Outcome::Row(vec![b"carol".to_vec(), b"admin".to_vec()])
    );
}

#[test]
fn test_or_yields_ascending_row_order() {
    let mut engine = seeded();
    ok(
        &mut engine,
        "select * from users where name='carol' or name='alice';",
    );
    assert_eq!(
        ok(&mut engine, "get cursor 0;"),
        Outcome::Row(vec![b"alice".to_vec(), b"admin".to_vec()])
    );
    ok(&mut engine, "advance cursor 0;");
    assert_eq!(
        ok(&mut engine, "get cursor 0;"),
        Outcome::Row(vec![b"carol".to_vec(), b"admin".to_vec()])
    );
}

#[test]
fn test_empty_result_is_done_not_error() {
    let mut engine = seeded();
    ok(&mut engine, "select * from users where name='nobody';");
    assert_eq!(ok(&mut engine, "get cursor 0;"), Outcome::Done);
    // But advancing past the end is an error.
    assert!(matches!(
        run(&mut engine, "advance cursor 0;").unwrap_err(),
        Error::CursorExhausted { id: 0 }
    ));
}

#[test]
fn test_update_through_cursor() {
    let mut engine = seeded();
    ok(&mut engine, "select * from users where name='bob';");
    assert_eq!(
        ok(&mut engine, "update cursor 0 set role='admin';"),
        Outcome::Updated
    );
    assert_eq!(
        ok(&mut engine, "get cursor 0;"),
        Outcome::Row(vec![b"bob".to_vec(), b"admin".to_vec()])
    );
    // The role index was not rewritten, so the old predicate still finds bob.
    ok(&mut engine, "select * from users where role='user';");
    assert_eq!(
        ok(&mut engine, "get cursor 1;"),
        Outcome::Row(vec![b"bob".to_vec(), b"admin".to_vec()])
    );
}

#[test]
fn test_cursor_snapshot_ignores_later_inserts() {
    let mut engine = seeded();
    ok(&mut engine, "select * from users;");
    ok(&mut engine, "insert into users (name) values ('dave');");
    let mut rows = 0;
    loop {
        match ok(&mut engine, "get cursor 0;") {
            Outcome::Row(_) => rows += 1,
            Outcome::Done => break,
            other => panic!("unexpected outcome {other:?}"),
        }
        ok(&mut engine, "advance cursor 0;");
    }
    assert_eq!(rows, 3);
}

#[test]
fn test_duplicate_create_keeps_existing_data() {
    let mut engine = seeded();
    assert!(matches!(
        run(&mut engine, "create table users (other);").unwrap_err(),
        Error::DuplicateTable { .. }
    ));
    ok(&mut engine, "select * from users where name='alice';");
    assert!(matches!(ok(&mut engine, "get cursor 0;"), Outcome::Row(_)));
}

#[test]
fn test_ragged_insert_is_atomic() {
    let mut engine = seeded();
    assert!(matches!(
        run(
            &mut engine,
            "insert into users (name, role) values ('dave', 'user'), ('eve');",
        )
        .unwrap_err(),
        Error::RaggedInsert { expected: 2, got: 1 }
    ));
    // Neither tuple landed.
    ok(&mut engine, "select * from users where name='dave';");
    assert_eq!(ok(&mut engine, "get cursor 0;"), Outcome::Done);
}

#[test]
fn test_unknown_table_and_column() {
    let mut engine = seeded();
    assert!(matches!(
        run(&mut engine, "select * from ghosts;").unwrap_err(),
        Error::TableNotFound { .. }
    ));
    assert!(matches!(
        run(&mut engine, "select * from users where ghost='x';").unwrap_err(),
        Error::ColumnNotFound { .. }
    ));
}

#[test]
fn test_keywords_and_columns_case_insensitive() {
    let mut engine = Engine::new();
    ok(&mut engine, "CREATE TABLE t (Name);");
    ok(&mut engine, "INSERT INTO t (NAME) VALUES ('x');");
    ok(&mut engine, "SELECT * FROM t WHERE name='x';");
    assert_eq!(
        ok(&mut engine, "GET CURSOR 0;"),
        Outcome::Row(vec![b"x".to_vec()])
    );
}

#[test]
fn test_table_names_case_sensitive() {
    let mut engine = Engine::new();
    ok(&mut engine, "create table Users (name);");
    assert!(matches!(
        run(&mut engine, "select * from users;").unwrap_err(),
        Error::TableNotFound { .. }
    ));
}

#[test]
fn test_escapes_round_trip_through_storage() {
    let mut engine = Engine::new();
    ok(&mut engine, "create table t (v);");
    ok(&mut engine, r#"insert into t (v) values ("a\x41\n");"#);
    ok(&mut engine, "select * from t;");
    assert_eq!(
        ok(&mut engine, "get cursor 0;"),
        Outcome::Row(vec![b"aA\n".to_vec()])
    );
}

#[test]
fn test_unparsable_line_is_syntax_error() {
    let mut engine = seeded();
    assert!(matches!(
        run(&mut engine, "frobnicate the database;").unwrap_err(),
        Error::Syntax
    ));
    assert!(matches!(
        run(&mut engine, "select * from users").unwrap_err(),
        Error::Syntax
    ));
}
