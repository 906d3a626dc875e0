use std::process::Command;

fn myapp() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_myapp"));
    cmd.env("MYAPP_DATABASE", ":memory:")
        .env_remove("MYAPP_TIME_ZONE")
        .env_remove("MYAPP_DEFAULT_TIMEZONE")
        .env_remove("MYAPP_SQL_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn fatal_error_exits_with_its_message() {
    let output = myapp()
        .env("MYAPP_TIME_ZONE", "Nowhere/Special")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Time zone error: unknown time zone 'Nowhere/Special'"), "{stderr}");
    assert!(!stderr.contains("Timezone("), "{stderr}");
}

#[test]
fn startup_logs_statements_to_stdout() {
    let output = myapp().output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sqlx::query"), "{stdout}");
    assert!(stdout.contains("CREATE TABLE"), "{stdout}");
    assert!(stdout.contains("database ready"), "{stdout}");
}
