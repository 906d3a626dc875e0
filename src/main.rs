use std::{fmt::Display, process::exit};

use myapp::{
    Config, Result,
    entity::prelude::*,
    sea_orm::{EntityTrait, PaginatorTrait},
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    run().await.unwrap_or_else(handle_error);
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    myapp::logging::init(&config);

    let db = myapp::bootstrap(&config).await?;

    let users = User::find().count(&db).await?;
    let comments = Comment::find().count(&db).await?;
    tracing::info!(users, comments, "database ready");

    Ok(())
}

fn handle_error<E>(error: E)
where
    E: Display,
{
    eprintln!("myapp: {error}");
    exit(1);
}
