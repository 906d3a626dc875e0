//! CRUD over users and comments, all of it delegated to the ORM.

use sea_orm::*;

use crate::entity::{comment, prelude::*, user};

#[derive(Debug)]
pub struct Query;

impl Query {
    pub async fn find_user_by_id(db: &DbConn, id: i32) -> Result<Option<user::Model>, DbErr> {
        User::find_by_id(id).one(db).await
    }

    pub async fn find_comment_by_id(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<comment::Model>, DbErr> {
        Comment::find_by_id(id).one(db).await
    }

    pub async fn all_users(db: &DbConn) -> Result<Vec<user::Model>, DbErr> {
        User::find().order_by_asc(user::Column::Id).all(db).await
    }

    /// The user's comments, oldest first
    pub async fn comments_of(
        db: &DbConn,
        user: &user::Model,
    ) -> Result<Vec<comment::Model>, DbErr> {
        user.find_related(Comment)
            .order_by_asc(comment::Column::Id)
            .all(db)
            .await
    }

    pub async fn count_comments_of(db: &DbConn, user: &user::Model) -> Result<u64, DbErr> {
        user.find_related(Comment).count(db).await
    }

    /// The user a comment belongs to. The foreign key guarantees there is one.
    pub async fn author_of(db: &DbConn, comment: &comment::Model) -> Result<user::Model, DbErr> {
        comment
            .find_related(User)
            .one(db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "user {} of comment {}",
                    comment.user_id, comment.id
                ))
            })
    }

    /// Every user with their comments, loaded in one joined query
    pub async fn users_with_comments(
        db: &DbConn,
    ) -> Result<Vec<(user::Model, Vec<comment::Model>)>, DbErr> {
        User::find()
            .find_with_related(Comment)
            .order_by_asc(user::Column::Id)
            .order_by_asc(comment::Column::Id)
            .all(db)
            .await
    }
}

#[derive(Debug)]
pub struct Mutation;

impl Mutation {
    pub async fn create_user(db: &DbConn, name: &str) -> Result<user::Model, DbErr> {
        user::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn rename_user(db: &DbConn, id: i32, name: &str) -> Result<user::Model, DbErr> {
        let user: user::ActiveModel = User::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {id}")))?
            .into();

        user::ActiveModel {
            name: Set(name.to_owned()),
            ..user
        }
        .update(db)
        .await
    }

    /// Fails on the foreign key while the user still has comments.
    pub async fn delete_user(db: &DbConn, id: i32) -> Result<DeleteResult, DbErr> {
        let user: user::ActiveModel = User::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {id}")))?
            .into();

        user.delete(db).await
    }

    pub async fn create_comment(
        db: &DbConn,
        user_id: i32,
        body: &str,
    ) -> Result<comment::Model, DbErr> {
        comment::ActiveModel {
            user_id: Set(user_id),
            body: Set(body.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn edit_comment(db: &DbConn, id: i32, body: &str) -> Result<comment::Model, DbErr> {
        let comment: comment::ActiveModel = Comment::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("comment {id}")))?
            .into();

        comment::ActiveModel {
            body: Set(body.to_owned()),
            ..comment
        }
        .update(db)
        .await
    }

    pub async fn delete_comment(db: &DbConn, id: i32) -> Result<DeleteResult, DbErr> {
        let comment: comment::ActiveModel = Comment::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("comment {id}")))?
            .into();

        comment.delete(db).await
    }
}
