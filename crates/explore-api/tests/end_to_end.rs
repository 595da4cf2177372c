//! End-to-end tests across all layers.
//!
//! These drive the full stack — RPC handler -> `MatchingService` ->
//! `InMemoryDecisionStore` — through the wire DTOs, the way a transport
//! layer would: string IDs in, string IDs and Unix timestamps out.

use std::sync::Arc;

use explore_api::{
    CountLikedYouRequest, ErrorReply, ExploreHandler, ListLikedYouRequest,
    ListNewLikedYouRequest, PutDecisionRequest,
};
use explore_store::fixtures::seed_demo_dataset;
use explore_store::{DecisionStore, InMemoryDecisionStore};

async fn seeded_handler() -> (Arc<InMemoryDecisionStore>, ExploreHandler) {
    let store = Arc::new(InMemoryDecisionStore::new());
    seed_demo_dataset(store.as_ref()).await.unwrap();
    let handler = ExploreHandler::new(store.clone());
    (store, handler)
}

#[tokio::test]
async fn demo_dataset_through_the_wire() {
    let (_store, handler) = seeded_handler().await;

    // Likes targeting user 1: from 2 (mutual) and from 4 (one-sided).
    let count = handler
        .count_liked_you(CountLikedYouRequest {
            recipient_user_id: "1".into(),
        })
        .await
        .unwrap();
    assert_eq!(count.count, 2);

    let liked = handler
        .list_liked_you(ListLikedYouRequest {
            recipient_user_id: "1".into(),
        })
        .await
        .unwrap();
    let actor_ids: Vec<&str> = liked.likers.iter().map(|l| l.actor_id.as_str()).collect();
    assert_eq!(actor_ids, vec!["2", "4"]);
    for liker in &liked.likers {
        assert!(liker.unix_timestamp > 0, "every liker carries a timestamp");
    }

    // Only 4 is new: 1 already liked 2 back.
    let new = handler
        .list_new_liked_you(ListNewLikedYouRequest {
            recipient_user_id: "1".into(),
        })
        .await
        .unwrap();
    let new_ids: Vec<&str> = new.likers.iter().map(|l| l.actor_id.as_str()).collect();
    assert_eq!(new_ids, vec!["4"]);

    // Nobody has decided about user 4.
    let none = handler
        .list_new_liked_you(ListNewLikedYouRequest {
            recipient_user_id: "4".into(),
        })
        .await
        .unwrap();
    assert!(none.likers.is_empty());
}

#[tokio::test]
async fn put_decision_flow_like_then_retract() {
    let (store, handler) = seeded_handler().await;

    // 3 likes 1: not mutual, 1 never decided about 3.
    let first = handler
        .put_decision(PutDecisionRequest {
            actor_user_id: "3".into(),
            recipient_user_id: "1".into(),
            liked_recipient: true,
        })
        .await
        .unwrap();
    assert!(!first.mutual_likes);

    // 3 now shows up among 1's new likers.
    let new = handler
        .list_new_liked_you(ListNewLikedYouRequest {
            recipient_user_id: "1".into(),
        })
        .await
        .unwrap();
    let new_ids: Vec<&str> = new.likers.iter().map(|l| l.actor_id.as_str()).collect();
    assert_eq!(new_ids, vec!["3", "4"]);

    // 3 retracts: same row flips to a pass, still not mutual.
    let second = handler
        .put_decision(PutDecisionRequest {
            actor_user_id: "3".into(),
            recipient_user_id: "1".into(),
            liked_recipient: false,
        })
        .await
        .unwrap();
    assert!(!second.mutual_likes);

    let rows = store
        .find_decisions_by_actor(explore_types::UserId(3), None)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1, "retraction updates, never duplicates");
    assert!(!rows[0].liked);

    // And 3 dropped out of the liker lists again.
    let count = handler
        .count_liked_you(CountLikedYouRequest {
            recipient_user_id: "1".into(),
        })
        .await
        .unwrap();
    assert_eq!(count.count, 2);
}

#[tokio::test]
async fn reaffirmed_like_reports_existing_mutual() {
    let (_store, handler) = seeded_handler().await;

    // 2 -> 1 already likes, so re-putting 1 -> 2 closes as mutual.
    let resp = handler
        .put_decision(PutDecisionRequest {
            actor_user_id: "1".into(),
            recipient_user_id: "2".into(),
            liked_recipient: true,
        })
        .await
        .unwrap();
    assert!(resp.mutual_likes);
}

#[tokio::test]
async fn first_like_of_a_fresh_pair_is_one_sided() {
    let store: Arc<InMemoryDecisionStore> = Arc::new(InMemoryDecisionStore::new());
    let handler = ExploreHandler::new(store);

    let forward = handler
        .put_decision(PutDecisionRequest {
            actor_user_id: "10".into(),
            recipient_user_id: "11".into(),
            liked_recipient: true,
        })
        .await
        .unwrap();
    assert!(!forward.mutual_likes);

    let backward = handler
        .put_decision(PutDecisionRequest {
            actor_user_id: "11".into(),
            recipient_user_id: "10".into(),
            liked_recipient: true,
        })
        .await
        .unwrap();
    assert!(backward.mutual_likes);
}

#[tokio::test]
async fn malformed_ids_surface_invalid_argument_replies() {
    let (_store, handler) = seeded_handler().await;

    let err = handler
        .list_liked_you(ListLikedYouRequest {
            recipient_user_id: "one".into(),
        })
        .await
        .unwrap_err();
    let reply = ErrorReply::from(&err);
    assert_eq!(reply.code, "INVALID_ARGUMENT");
    assert!(reply.message.starts_with("XP_ERR_100"));

    let err = handler
        .put_decision(PutDecisionRequest {
            actor_user_id: "1".into(),
            recipient_user_id: "".into(),
            liked_recipient: true,
        })
        .await
        .unwrap_err();
    assert_eq!(ErrorReply::from(&err).code, "INVALID_ARGUMENT");
}

#[tokio::test]
async fn unknown_recipient_is_empty_everywhere() {
    let (_store, handler) = seeded_handler().await;

    let count = handler
        .count_liked_you(CountLikedYouRequest {
            recipient_user_id: "999".into(),
        })
        .await
        .unwrap();
    assert_eq!(count.count, 0);

    let liked = handler
        .list_liked_you(ListLikedYouRequest {
            recipient_user_id: "999".into(),
        })
        .await
        .unwrap();
    assert!(liked.likers.is_empty());

    let new = handler
        .list_new_liked_you(ListNewLikedYouRequest {
            recipient_user_id: "999".into(),
        })
        .await
        .unwrap();
    assert!(new.likers.is_empty());
}
