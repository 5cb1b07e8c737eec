//! Service context - dependency container for services
//!
//! Holds the lookup ports, the event publisher and the topic events go to.

use std::sync::Arc;

use like_core::traits::{EventPublisher, LikeActionRepository, UserProfileRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Built once at bootstrap and shared by every request.
#[derive(Clone)]
pub struct ServiceContext {
    like_repo: Arc<dyn LikeActionRepository>,
    profile_repo: Arc<dyn UserProfileRepository>,
    publisher: Arc<dyn EventPublisher>,
    topic: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        like_repo: Arc<dyn LikeActionRepository>,
        profile_repo: Arc<dyn UserProfileRepository>,
        publisher: Arc<dyn EventPublisher>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            like_repo,
            profile_repo,
            publisher,
            topic: topic.into(),
        }
    }

    /// Get the like action repository
    pub fn like_repo(&self) -> &dyn LikeActionRepository {
        self.like_repo.as_ref()
    }

    /// Get the user profile repository
    pub fn profile_repo(&self) -> &dyn UserProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the event publisher
    pub fn publisher(&self) -> &dyn EventPublisher {
        self.publisher.as_ref()
    }

    /// Topic like events are published to
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("publisher", &"...")
            .field("topic", &self.topic)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    like_repo: Option<Arc<dyn LikeActionRepository>>,
    profile_repo: Option<Arc<dyn UserProfileRepository>>,
    publisher: Option<Arc<dyn EventPublisher>>,
    topic: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeActionRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn UserProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any dependency is missing or the
    /// topic is empty
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let topic = self
            .topic
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ServiceError::internal("topic is required"))?;

        Ok(ServiceContext::new(
            self.like_repo
                .ok_or_else(|| ServiceError::internal("like_repo is required"))?,
            self.profile_repo
                .ok_or_else(|| ServiceError::internal("profile_repo is required"))?,
            self.publisher
                .ok_or_else(|| ServiceError::internal("publisher is required"))?,
            topic,
        ))
    }
}
