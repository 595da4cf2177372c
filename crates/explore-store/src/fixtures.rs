//! Seeded demo dataset shared by the test suites.
//!
//! Dataset:
//! - Users: 1, 2, 3, 4
//! - Like: 1 → 2
//! - Like: 2 → 1
//! - Like: 4 → 1
//!
//! So user 1 has one mutual like (with 2) and one new liker (4); user 3 has
//! decided nothing and nobody has decided about them.

use explore_types::{Result, UserId};

use crate::contract::DecisionStore;

/// Seed the demo dataset into `store` and return the four user IDs in order.
pub async fn seed_demo_dataset(store: &dyn DecisionStore) -> Result<[UserId; 4]> {
    let u1 = store.create_user().await?;
    let u2 = store.create_user().await?;
    let u3 = store.create_user().await?;
    let u4 = store.create_user().await?;

    store.create_decision(u1, u2, true).await?;
    store.create_decision(u2, u1, true).await?;
    store.create_decision(u4, u1, true).await?;

    Ok([u1, u2, u3, u4])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryDecisionStore;

    #[tokio::test]
    async fn demo_dataset_shape() {
        let store = InMemoryDecisionStore::new();
        let [u1, u2, u3, u4] = seed_demo_dataset(&store).await.unwrap();

        assert_eq!([u1, u2, u3, u4], [UserId(1), UserId(2), UserId(3), UserId(4)]);
        assert!(store.exists_mutual_like(u1, u2).await.unwrap());
        assert!(!store.exists_mutual_like(u1, u4).await.unwrap());
        assert_eq!(
            store.count_liked_decisions_for_recipient(u1).await.unwrap(),
            2
        );
        assert!(
            store
                .find_decisions_by_actor(u3, None)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
