//! Poll entity <-> model mappers

use pulse_core::entities::{Poll, PollOption, PollWithOptions};
use pulse_core::value_objects::Snowflake;

use crate::models::{PollOptionModel, PollWithOwnerModel};

impl From<PollWithOwnerModel> for PollWithOptions {
    fn from(model: PollWithOwnerModel) -> Self {
        PollWithOptions {
            poll: Poll {
                id: Snowflake::new(model.id),
                user_id: Snowflake::new(model.user_id),
                title: model.title,
                created_at: model.created_at,
            },
            username: model.username,
            options: Vec::new(),
        }
    }
}

impl From<PollOptionModel> for PollOption {
    fn from(model: PollOptionModel) -> Self {
        PollOption {
            id: Snowflake::new(model.id),
            poll_id: Snowflake::new(model.poll_id),
            text: model.text,
            vote_count: model.vote_count,
            position: model.position,
        }
    }
}
