//! UserProfile entity <-> model mapper

use like_core::entities::UserProfile;
use like_core::error::DomainError;
use like_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert a users row to a UserProfile entity
impl TryFrom<UserModel> for UserProfile {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let id = UserId::try_from(model.id).map_err(|e| {
            DomainError::DatabaseError(format!("corrupt users row {}: {e}", model.id))
        })?;

        Ok(UserProfile {
            id,
            nickname: model.nickname,
            avatar: model.avatar,
        })
    }
}
