//! Like service
//!
//! Like, unlike and reactor listing. Each operation reads the current row
//! through the lookup port, lets the state machine decide, and publishes the
//! resulting event. A transition counts as applied only once the event
//! channel has accepted it; nothing is written locally.

use like_core::{
    decide, decide_unlike, LikeAction, LikeEvent, LikeQuery, Mood, RequestMethod, TargetId,
    UnlikeDecision, UserId,
};
use tracing::{debug, info, instrument, warn};

use crate::dto::{LikeActionResponse, ReactorPage, UserProfileResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Largest page ListReactors will ask the lookup port for
pub const MAX_LIST_LIMIT: u32 = 100;

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a target, or change the mood of an existing like
    ///
    /// A missing or unrecognized mood token means `like`. Repeating the
    /// current state publishes nothing and returns the row as it is.
    #[instrument(skip(self))]
    pub async fn like(
        &self,
        raw_user_id: i64,
        target_id: TargetId,
        mood_token: Option<&str>,
    ) -> ServiceResult<LikeActionResponse> {
        let user_id = UserId::try_from(raw_user_id)?;
        let mood = Mood::resolve_or_default(mood_token);

        let existing = self
            .ctx
            .like_repo()
            .find_by_participants(user_id, target_id)
            .await
            .map_err(ServiceError::lookup)?;

        let transition = decide(existing.as_ref(), mood);
        let Some(method) = transition.method() else {
            debug!(user_id = %user_id, target_id = %target_id, "Like unchanged");
            return Ok(transition.apply(user_id, target_id).into());
        };

        let action = transition.apply(user_id, target_id);
        self.publish(method, &action).await?;

        info!(
            user_id = %user_id,
            target_id = %target_id,
            mood = %action.mood,
            method = %method,
            "Like recorded"
        );

        Ok(action.into())
    }

    /// Remove a like
    #[instrument(skip(self))]
    pub async fn unlike(&self, raw_user_id: i64, target_id: TargetId) -> ServiceResult<()> {
        let user_id = UserId::try_from(raw_user_id)?;

        let existing = self
            .ctx
            .like_repo()
            .find_by_participants(user_id, target_id)
            .await
            .map_err(ServiceError::lookup)?;

        let action = match decide_unlike(existing) {
            UnlikeDecision::MarkDeleted(action) => action,
            UnlikeDecision::Rejected(reason) => {
                debug!(user_id = %user_id, target_id = %target_id, reason = reason.code(), "Unlike rejected");
                return Err(reason.into());
            }
        };

        self.publish(RequestMethod::Delete, &action).await?;

        info!(user_id = %user_id, target_id = %target_id, "Like removed");

        Ok(())
    }

    /// List the users who like a target, most recent first
    ///
    /// A `limit` of zero asks for the default page size. Reactors whose
    /// profile cannot be resolved are skipped; `total` still counts them.
    #[instrument(skip(self))]
    pub async fn list_reactors(
        &self,
        target_id: TargetId,
        mood_token: Option<&str>,
        limit: u32,
    ) -> ServiceResult<ReactorPage> {
        let query = LikeQuery::new(Mood::filter_from_token(mood_token), limit.min(MAX_LIST_LIMIT));

        let page = self
            .ctx
            .like_repo()
            .list_by_target(target_id, query)
            .await
            .map_err(ServiceError::lookup)?;

        let mut users = Vec::with_capacity(page.actions.len());
        for action in &page.actions {
            match self.ctx.profile_repo().find_profile(action.user_id).await {
                Ok(Some(profile)) => users.push(UserProfileResponse::from(profile)),
                Ok(None) => {
                    warn!(user_id = %action.user_id, "Reactor has no profile, skipping");
                }
                Err(e) => {
                    warn!(user_id = %action.user_id, error = %e, "Failed to resolve reactor profile, skipping");
                }
            }
        }

        Ok(ReactorPage {
            users,
            total: page.total,
        })
    }

    async fn publish(&self, method: RequestMethod, action: &LikeAction) -> ServiceResult<()> {
        let event = LikeEvent::from_action(method, action)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .publisher()
            .publish(self.ctx.topic(), &event)
            .await
            .map_err(ServiceError::publish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use like_core::traits::{
        EventPublisher, LikeActionPage, LikeActionRepository, RepoResult, UserProfileRepository,
    };
    use like_core::{DomainError, UnlikeRejection, UserProfile, DEFAULT_LIST_LIMIT};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use crate::services::ServiceContextBuilder;

    const TOPIC: &str = "reaction-like-events";

    fn actor() -> UserId {
        UserId::try_from(1001).unwrap()
    }

    fn target() -> TargetId {
        TargetId::new(55)
    }

    /// In-memory lookup port
    #[derive(Default)]
    struct FakeLikes {
        rows: Mutex<HashMap<(UserId, TargetId), LikeAction>>,
        page: Mutex<Option<LikeActionPage>>,
        last_query: Mutex<Option<LikeQuery>>,
        find_calls: AtomicUsize,
        list_calls: AtomicUsize,
        fail: AtomicBool,
    }

    impl FakeLikes {
        fn row(&self) -> Option<LikeAction> {
            self.rows.lock().unwrap().get(&(actor(), target())).cloned()
        }

        fn put(&self, action: LikeAction) {
            self.rows
                .lock()
                .unwrap()
                .insert((action.user_id, action.target_id), action);
        }
    }

    #[async_trait]
    impl LikeActionRepository for FakeLikes {
        async fn find_by_participants(
            &self,
            user_id: UserId,
            target_id: TargetId,
        ) -> RepoResult<Option<LikeAction>> {
            self.find_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(DomainError::DatabaseError("connection refused".into()));
            }
            Ok(self.rows.lock().unwrap().get(&(user_id, target_id)).cloned())
        }

        async fn list_by_target(
            &self,
            _target_id: TargetId,
            query: LikeQuery,
        ) -> RepoResult<LikeActionPage> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().unwrap() = Some(query);
            if self.fail.load(Ordering::SeqCst) {
                return Err(DomainError::DatabaseError("connection refused".into()));
            }
            Ok(self.page.lock().unwrap().clone().unwrap_or_default())
        }
    }

    /// Event channel that applies accepted events to the fake store, the way
    /// the downstream consumer would
    struct FakeChannel {
        store: Arc<FakeLikes>,
        events: Mutex<Vec<LikeEvent>>,
        calls: AtomicUsize,
        fail: AtomicBool,
    }

    impl FakeChannel {
        fn new(store: Arc<FakeLikes>) -> Self {
            Self {
                store,
                events: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
                fail: AtomicBool::new(false),
            }
        }

        fn methods(&self) -> Vec<RequestMethod> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .map(|e| e.method().unwrap())
                .collect()
        }
    }

    #[async_trait]
    impl EventPublisher for FakeChannel {
        async fn publish(&self, topic: &str, event: &LikeEvent) -> RepoResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(topic, TOPIC);
            if self.fail.load(Ordering::SeqCst) {
                return Err(DomainError::PublishFailed("broker unreachable".into()));
            }
            // Round-trip through the wire format like a real consumer
            let decoded = LikeEvent::decode(&event.encode().unwrap()).unwrap();
            self.store.put(decoded.action().unwrap());
            self.events.lock().unwrap().push(decoded);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeProfiles {
        profiles: HashMap<UserId, UserProfile>,
        broken: Option<UserId>,
    }

    #[async_trait]
    impl UserProfileRepository for FakeProfiles {
        async fn find_profile(&self, user_id: UserId) -> RepoResult<Option<UserProfile>> {
            if self.broken == Some(user_id) {
                return Err(DomainError::DatabaseError("timeout".into()));
            }
            Ok(self.profiles.get(&user_id).cloned())
        }
    }

    struct Harness {
        likes: Arc<FakeLikes>,
        channel: Arc<FakeChannel>,
        ctx: ServiceContext,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_profiles(FakeProfiles::default())
        }

        fn with_profiles(profiles: FakeProfiles) -> Self {
            let likes = Arc::new(FakeLikes::default());
            let channel = Arc::new(FakeChannel::new(likes.clone()));
            let ctx = ServiceContextBuilder::new()
                .like_repo(likes.clone())
                .profile_repo(Arc::new(profiles))
                .publisher(channel.clone())
                .topic(TOPIC)
                .build()
                .unwrap();
            Self { likes, channel, ctx }
        }

        fn service(&self) -> LikeService<'_> {
            LikeService::new(&self.ctx)
        }
    }

    #[tokio::test]
    async fn test_first_like_defaults_mood_and_publishes_add() {
        let h = Harness::new();

        let response = h.service().like(1001, target(), Some("")).await.unwrap();

        assert_eq!(
            response,
            LikeActionResponse {
                user_id: "1001".into(),
                target_id: "55".into(),
                mood: Mood::Like,
                deleted: false,
            }
        );
        assert_eq!(h.channel.methods(), vec![RequestMethod::Add]);

        let record = h.channel.events.lock().unwrap()[0].record().unwrap();
        assert_eq!(record.user_id, 1001);
        assert_eq!(record.target_id, 55);
        assert_eq!(record.mood, Mood::Like.as_i32());
        assert!(!record.deleted);
    }

    #[tokio::test]
    async fn test_repeated_like_is_noop() {
        let h = Harness::new();

        h.service().like(1001, target(), Some("like")).await.unwrap();
        let second = h.service().like(1001, target(), Some("like")).await.unwrap();

        assert_eq!(h.channel.methods(), vec![RequestMethod::Add]);
        assert_eq!(second.mood, Mood::Like);
        assert!(!second.deleted);
    }

    #[tokio::test]
    async fn test_like_unlike_like_toggles_without_second_add() {
        let h = Harness::new();

        h.service().like(1001, target(), Some("like")).await.unwrap();
        h.service().unlike(1001, target()).await.unwrap();
        let again = h.service().like(1001, target(), Some("like")).await.unwrap();

        assert_eq!(
            h.channel.methods(),
            vec![RequestMethod::Add, RequestMethod::Delete, RequestMethod::Update]
        );
        assert!(!again.deleted);

        let delete = h.channel.events.lock().unwrap()[1].action().unwrap();
        assert!(delete.deleted);
    }

    #[tokio::test]
    async fn test_mood_change_is_update() {
        let h = Harness::new();
        h.likes.put(LikeAction::new(actor(), target(), Mood::Like));

        let response = h.service().like(1001, target(), Some("love")).await.unwrap();

        assert_eq!(h.channel.methods(), vec![RequestMethod::Update]);
        assert_eq!(response.mood, Mood::Love);
    }

    #[tokio::test]
    async fn test_unknown_mood_token_means_like() {
        let h = Harness::new();
        h.likes.put(LikeAction::new(actor(), target(), Mood::Like));

        h.service().like(1001, target(), Some("ecstatic")).await.unwrap();

        assert!(h.channel.methods().is_empty());
    }

    #[tokio::test]
    async fn test_unlike_without_like_is_rejected() {
        let h = Harness::new();

        let err = h.service().unlike(1001, target()).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::TransitionRejected(UnlikeRejection::NoSuchReaction)
        ));
        assert_eq!(h.channel.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unlike_twice_is_rejected() {
        let h = Harness::new();
        h.likes.put(LikeAction {
            deleted: true,
            ..LikeAction::new(actor(), target(), Mood::Sad)
        });

        let err = h.service().unlike(1001, target()).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::TransitionRejected(UnlikeRejection::AlreadyDeleted)
        ));
        assert_eq!(h.channel.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_user_actor_touches_no_port() {
        let h = Harness::new();

        let like = h.service().like(1002, target(), None).await.unwrap_err();
        let unlike = h.service().unlike(4, target()).await.unwrap_err();

        assert!(matches!(like, ServiceError::InvalidActor(1002)));
        assert!(matches!(unlike, ServiceError::InvalidActor(4)));
        assert_eq!(h.likes.find_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.channel.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_publish_failure_leaves_store_unchanged() {
        let h = Harness::new();
        h.likes.put(LikeAction::new(actor(), target(), Mood::Like));
        h.channel.fail.store(true, Ordering::SeqCst);

        let err = h.service().like(1001, target(), Some("angry")).await.unwrap_err();
        assert!(matches!(err, ServiceError::PublishFailure(_)));
        assert_eq!(h.likes.row().unwrap().mood, Mood::Like);

        let err = h.service().unlike(1001, target()).await.unwrap_err();
        assert!(matches!(err, ServiceError::PublishFailure(_)));
        assert!(!h.likes.row().unwrap().deleted);
    }

    #[tokio::test]
    async fn test_lookup_failure_publishes_nothing() {
        let h = Harness::new();
        h.likes.fail.store(true, Ordering::SeqCst);

        let err = h.service().like(1001, target(), None).await.unwrap_err();

        assert!(matches!(err, ServiceError::LookupFailure(_)));
        assert!(err.is_retryable());
        assert_eq!(h.channel.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_list_zero_limit_requests_default_page() {
        let h = Harness::new();

        h.service().list_reactors(target(), None, 0).await.unwrap();

        let query = h.likes.last_query.lock().unwrap().unwrap();
        assert_eq!(query.limit, DEFAULT_LIST_LIMIT);
        assert_eq!(query.limit, 19);
        assert_eq!(query.mood, None);
    }

    #[tokio::test]
    async fn test_list_clamps_limit_and_passes_mood_filter() {
        let h = Harness::new();

        h.service()
            .list_reactors(target(), Some("laugh"), 5000)
            .await
            .unwrap();

        let query = h.likes.last_query.lock().unwrap().unwrap();
        assert_eq!(query.limit, MAX_LIST_LIMIT);
        assert_eq!(query.mood, Some(Mood::Laugh));
    }

    #[tokio::test]
    async fn test_list_skips_unresolvable_profiles() {
        let alice = UserId::try_from(1001).unwrap();
        let bob = UserId::try_from(1003).unwrap();
        let carol = UserId::try_from(1005).unwrap();

        let mut profiles = FakeProfiles {
            broken: Some(bob),
            ..FakeProfiles::default()
        };
        profiles.profiles.insert(alice, UserProfile::new(alice, "alice"));
        profiles.profiles.insert(bob, UserProfile::new(bob, "bob"));

        let h = Harness::with_profiles(profiles);
        *h.likes.page.lock().unwrap() = Some(LikeActionPage {
            actions: vec![
                LikeAction::new(alice, target(), Mood::Like),
                LikeAction::new(bob, target(), Mood::Like),
                LikeAction::new(carol, target(), Mood::Like),
            ],
            total: 7,
        });

        let page = h.service().list_reactors(target(), None, 3).await.unwrap();

        assert_eq!(page.total, 7);
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.users[0].nickname, "alice");
        assert_eq!(page.users[0].avatar_url, "/avatars/default.png");
    }

    #[tokio::test]
    async fn test_list_lookup_failure() {
        let h = Harness::new();
        h.likes.fail.store(true, Ordering::SeqCst);

        let err = h.service().list_reactors(target(), None, 0).await.unwrap_err();

        assert!(matches!(err, ServiceError::LookupFailure(_)));
        assert_eq!(h.likes.list_calls.load(Ordering::SeqCst), 1);
    }
}
