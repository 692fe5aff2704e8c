//! Comment entity <-> model mappers

use pulse_core::entities::Comment;
use pulse_core::traits::CommentWithAuthor;
use pulse_core::value_objects::Snowflake;

use crate::models::{CommentModel, CommentWithAuthorModel};

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            post_id: Snowflake::new(model.post_id),
            text: model.text,
            created_at: model.created_at,
        }
    }
}

impl From<CommentWithAuthorModel> for CommentWithAuthor {
    fn from(model: CommentWithAuthorModel) -> Self {
        CommentWithAuthor {
            comment: Comment {
                id: Snowflake::new(model.id),
                user_id: Snowflake::new(model.user_id),
                post_id: Snowflake::new(model.post_id),
                text: model.text,
                created_at: model.created_at,
            },
            username: model.username,
        }
    }
}
