// region:    --- Imports
use super::{lock, MutationOutcome};
use crate::auction::model::Auction;
use std::sync::{Arc, Mutex};
use tracing::info;
// endregion: --- Imports

// region:    --- Wishlist Store
/// 위시리스트 스토어 (id 기준 중복 없음, 추가 순서 유지)
#[derive(Debug, Default)]
pub struct WishlistStore {
    items: Mutex<Vec<Arc<Auction>>>,
}

impl WishlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&self, auction: Arc<Auction>) -> MutationOutcome {
        let mut items = lock(&self.items);
        if items.iter().any(|a| a.id == auction.id) {
            info!("{:<12} --> 이미 찜한 경매 id: {}", "Wishlist", auction.id);
            return MutationOutcome::AlreadyPresent;
        }
        info!("{:<12} --> 위시리스트 추가 id: {}", "Wishlist", auction.id);
        items.push(auction);
        MutationOutcome::Added
    }

    pub fn remove_item(&self, auction_id: &str) -> MutationOutcome {
        let mut items = lock(&self.items);
        let before = items.len();
        items.retain(|a| a.id != auction_id);
        if items.len() == before {
            return MutationOutcome::NotFound;
        }
        info!("{:<12} --> 위시리스트 삭제 id: {}", "Wishlist", auction_id);
        MutationOutcome::Removed
    }

    pub fn clear_wishlist(&self) -> MutationOutcome {
        let count = std::mem::take(&mut *lock(&self.items)).len();
        info!("{:<12} --> 위시리스트 비우기: {}건", "Wishlist", count);
        MutationOutcome::Cleared { count }
    }

    pub fn is_in_wishlist(&self, auction_id: &str) -> bool {
        lock(&self.items).iter().any(|a| a.id == auction_id)
    }

    pub fn items(&self) -> Vec<Arc<Auction>> {
        lock(&self.items).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.items).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.items).is_empty()
    }
}
// endregion: --- Wishlist Store
