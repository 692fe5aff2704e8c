//! Reaction entity <-> model mapper

use pulse_core::entities::Reaction;
use pulse_core::value_objects::Snowflake;

use crate::models::ReactionModel;

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            post_id: Snowflake::new(model.post_id),
            is_like: model.is_like,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
