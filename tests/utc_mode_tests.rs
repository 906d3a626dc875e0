// Runs in its own process: it installs a different process-wide zone setup.

use jiff::{
    Timestamp,
    tz::{Offset, TimeZone},
};
use myapp::{Config, Mutation, TimestampMode, timezone};

#[tokio::test]
async fn utc_mode_writes_utc_civil_time() {
    let config = Config {
        database: ":memory:".to_owned(),
        default_timezone: TimestampMode::Utc,
        ..Config::default()
    };
    let db = myapp::bootstrap(&config).await.unwrap();

    assert_eq!(timezone::default_zone().iana_name(), Some("Asia/Tokyo"));
    assert_eq!(
        timezone::storage_zone().to_offset(Timestamp::now()),
        Offset::UTC
    );

    let expected = timezone::civil_now_in(&TimeZone::UTC).unwrap();
    let alice = Mutation::create_user(&db, "Alice").await.unwrap();

    assert!((alice.created_at - expected).num_seconds().abs() <= 5);
}
