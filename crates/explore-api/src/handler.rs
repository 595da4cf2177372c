//! The RPC handler: boundary parsing, deadline enforcement, DTO mapping.
//!
//! Each operation is a single independent request — no session state is kept
//! between calls, and concurrent requests share nothing but the store behind
//! the service. Dropping the returned future cancels the in-flight storage
//! calls; the configured deadline does the same from the inside via
//! `tokio::time::timeout`.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use explore_matchcore::MatchingService;
use explore_store::DecisionStore;
use explore_types::{ExploreError, Result, ServiceConfig, UserId};

use crate::dto::{
    CountLikedYouRequest, CountLikedYouResponse, LikerReply, ListLikedYouRequest,
    ListLikedYouResponse, ListNewLikedYouRequest, ListNewLikedYouResponse, NewLikerReply,
    PutDecisionRequest, PutDecisionResponse,
};

/// Transport-agnostic handler for the four explore operations.
pub struct ExploreHandler {
    service: MatchingService,
    request_timeout_ms: u64,
}

impl ExploreHandler {
    /// Build a handler over the given store with default configuration.
    #[must_use]
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self::with_config(store, &ServiceConfig::default())
    }

    /// Build a handler honoring the configured request deadline.
    #[must_use]
    pub fn with_config(store: Arc<dyn DecisionStore>, config: &ServiceConfig) -> Self {
        Self {
            service: MatchingService::new(store),
            request_timeout_ms: config.request_timeout_ms,
        }
    }

    /// `CountLikedYou(recipient_id) -> {count}`
    pub async fn count_liked_you(
        &self,
        request: CountLikedYouRequest,
    ) -> Result<CountLikedYouResponse> {
        let recipient = UserId::parse(&request.recipient_user_id)?;
        let count = self
            .with_deadline(self.service.count_liked_you(recipient))
            .await?;
        Ok(CountLikedYouResponse { count })
    }

    /// `ListLikedYou(recipient_id) -> {[{actor_id, unix_timestamp}]}`
    pub async fn list_liked_you(
        &self,
        request: ListLikedYouRequest,
    ) -> Result<ListLikedYouResponse> {
        let recipient = UserId::parse(&request.recipient_user_id)?;
        let likers = self
            .with_deadline(self.service.list_liked_you(recipient))
            .await?;

        Ok(ListLikedYouResponse {
            likers: likers
                .into_iter()
                .map(|liker| LikerReply {
                    actor_id: liker.actor.to_string(),
                    unix_timestamp: u64::try_from(liker.liked_at.timestamp())
                        .unwrap_or_default(),
                })
                .collect(),
        })
    }

    /// `ListNewLikedYou(recipient_id) -> {[{actor_id}]}`
    pub async fn list_new_liked_you(
        &self,
        request: ListNewLikedYouRequest,
    ) -> Result<ListNewLikedYouResponse> {
        let recipient = UserId::parse(&request.recipient_user_id)?;
        let likers = self
            .with_deadline(self.service.list_new_liked_you(recipient))
            .await?;

        Ok(ListNewLikedYouResponse {
            likers: likers
                .into_iter()
                .map(|actor| NewLikerReply {
                    actor_id: actor.to_string(),
                })
                .collect(),
        })
    }

    /// `PutDecision(actor_id, recipient_id, liked) -> {mutual_likes}`
    pub async fn put_decision(&self, request: PutDecisionRequest) -> Result<PutDecisionResponse> {
        let actor = UserId::parse(&request.actor_user_id)?;
        let recipient = UserId::parse(&request.recipient_user_id)?;
        let mutual_likes = self
            .with_deadline(
                self.service
                    .put_decision(actor, recipient, request.liked_recipient),
            )
            .await?;
        Ok(PutDecisionResponse { mutual_likes })
    }

    /// Run `fut` under the configured request deadline.
    async fn with_deadline<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        let timeout = Duration::from_millis(self.request_timeout_ms);
        match tokio::time::timeout(timeout, fut).await {
            Ok(result) => result,
            Err(_elapsed) => Err(ExploreError::DeadlineExceeded {
                timeout_ms: self.request_timeout_ms,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
