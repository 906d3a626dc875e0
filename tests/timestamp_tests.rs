pub mod common;

pub use common::TestContext;
use jiff::{Timestamp, tz::TimeZone};
use myapp::{Mutation, TimestampMode, timezone};

fn within_seconds(a: chrono::NaiveDateTime, b: chrono::NaiveDateTime, secs: i64) -> bool {
    (a - b).num_seconds().abs() <= secs
}

#[tokio::test]
async fn bootstrap_installs_tokyo_local_time() {
    let _ctx = TestContext::new().await;

    assert_eq!(timezone::default_zone().iana_name(), Some("Asia/Tokyo"));
    assert_eq!(timezone::timestamp_mode(), TimestampMode::Local);
}

#[tokio::test]
async fn timestamps_are_written_in_tokyo_civil_time() {
    let ctx = TestContext::new().await;
    let db = &ctx.db;
    let tokyo = timezone::resolve("Asia/Tokyo").unwrap();

    let expected = timezone::civil_now_in(&tokyo).unwrap();
    let alice = Mutation::create_user(db, "Alice").await.unwrap();
    let comment = Mutation::create_comment(db, alice.id, "hello").await.unwrap();

    assert!(within_seconds(alice.created_at, expected, 5));
    assert_eq!(alice.created_at, alice.updated_at);
    assert!(within_seconds(comment.created_at, expected, 5));

    // nine hours ahead of UTC wall clock
    let utc = timezone::civil_now_in(&TimeZone::UTC).unwrap();
    assert!(!within_seconds(alice.created_at, utc, 3600));
}

#[tokio::test]
async fn stored_timestamps_read_back_as_the_current_instant() {
    let ctx = TestContext::new().await;
    let alice = Mutation::create_user(&ctx.db, "Alice").await.unwrap();

    let instant = timezone::interpret(alice.created_at).unwrap().timestamp();
    let drift = Timestamp::now().duration_since(instant).as_secs().abs();
    assert!(drift <= 5, "{drift}");
}

#[tokio::test]
async fn update_touches_updated_at_only() {
    let ctx = TestContext::new().await;
    let db = &ctx.db;

    let alice = Mutation::create_user(db, "Alice").await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let renamed = Mutation::rename_user(db, alice.id, "Alicia").await.unwrap();

    assert_eq!(renamed.created_at, alice.created_at);
    assert!(renamed.updated_at > alice.updated_at);
}
