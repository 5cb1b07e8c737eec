//! LikeAction entity <-> model mapper

use like_core::entities::LikeAction;
use like_core::error::DomainError;
use like_core::events::LikeActionRecord;

use crate::models::LikeActionModel;

/// Convert a like_actions row to a LikeAction entity
///
/// Rows go through the same record conversion as event payloads, so a zero
/// mood reads back as the default mood. A `user_id` without the user tag is a
/// corrupt row.
impl TryFrom<LikeActionModel> for LikeAction {
    type Error = DomainError;

    fn try_from(model: LikeActionModel) -> Result<Self, Self::Error> {
        let record = LikeActionRecord {
            user_id: model.user_id,
            target_id: model.target_id,
            mood: model.mood,
            deleted: model.deleted,
        };

        LikeAction::try_from(record).map_err(|e| {
            DomainError::DatabaseError(format!(
                "corrupt like_actions row ({}, {}): {e}",
                model.user_id, model.target_id
            ))
        })
    }
}
