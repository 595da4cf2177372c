//! Wire request/response shapes.
//!
//! All user IDs are transmitted as decimal strings and parsed back to
//! integers at this boundary. Timestamps travel as Unix seconds.

use serde::{Deserialize, Serialize};

/// Request: how many people like this recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountLikedYouRequest {
    pub recipient_user_id: String,
}

/// Response to [`CountLikedYouRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountLikedYouResponse {
    pub count: u64,
}

/// Request: everyone who likes this recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListLikedYouRequest {
    pub recipient_user_id: String,
}

/// One liker with the timestamp of the last affirmation of their like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikerReply {
    pub actor_id: String,
    pub unix_timestamp: u64,
}

/// Response to [`ListLikedYouRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListLikedYouResponse {
    pub likers: Vec<LikerReply>,
}

/// Request: likers this recipient has not yet liked back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNewLikedYouRequest {
    pub recipient_user_id: String,
}

/// One new liker. Deliberately carries no timestamp — the new-liker list is
/// a bare ID list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLikerReply {
    pub actor_id: String,
}

/// Response to [`ListNewLikedYouRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNewLikedYouResponse {
    pub likers: Vec<NewLikerReply>,
}

/// Request: record one user's judgment about another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutDecisionRequest {
    pub actor_user_id: String,
    pub recipient_user_id: String,
    pub liked_recipient: bool,
}

/// Response to [`PutDecisionRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutDecisionResponse {
    pub mutual_likes: bool,
}
