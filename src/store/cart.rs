/// 장바구니 스토어
/// 경매 참조(Arc)와 수량을 보관하며 합계는 조회 시마다 다시 계산한다
// region:    --- Imports
use super::{lock, MutationOutcome};
use crate::auction::model::Auction;
use std::sync::{Arc, Mutex};
use tracing::info;
// endregion: --- Imports

// region:    --- Cart Item
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub auction: Arc<Auction>,
    /// 현재는 항상 1 (수량 증가 경로 없음)
    pub quantity: u32,
}

impl CartItem {
    /// 소계 (i64 범위를 넘으면 최대값으로 고정)
    pub fn subtotal(&self) -> i64 {
        self.auction
            .current_bid
            .saturating_mul(i64::from(self.quantity))
    }
}
// endregion: --- Cart Item

// region:    --- Cart Store
#[derive(Debug, Default)]
pub struct CartStore {
    items: Mutex<Vec<CartItem>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 장바구니 추가 (같은 경매 id가 있으면 변경 없음)
    pub fn add_item(&self, auction: Arc<Auction>) -> MutationOutcome {
        let mut items = lock(&self.items);
        if items.iter().any(|item| item.auction.id == auction.id) {
            info!("{:<12} --> 이미 담긴 경매 id: {}", "Cart", auction.id);
            return MutationOutcome::AlreadyPresent;
        }
        info!("{:<12} --> 장바구니 추가 id: {}", "Cart", auction.id);
        items.push(CartItem {
            auction,
            quantity: 1,
        });
        MutationOutcome::Added
    }

    /// 장바구니 삭제
    pub fn remove_item(&self, auction_id: &str) -> MutationOutcome {
        let mut items = lock(&self.items);
        let before = items.len();
        items.retain(|item| item.auction.id != auction_id);
        if items.len() == before {
            return MutationOutcome::NotFound;
        }
        info!("{:<12} --> 장바구니 삭제 id: {}", "Cart", auction_id);
        MutationOutcome::Removed
    }

    /// 장바구니 비우기
    pub fn clear_cart(&self) -> MutationOutcome {
        let count = std::mem::take(&mut *lock(&self.items)).len();
        info!("{:<12} --> 장바구니 비우기: {}건", "Cart", count);
        MutationOutcome::Cleared { count }
    }

    /// 합계 (현재 입찰가 * 수량, 포화 연산)
    pub fn total(&self) -> i64 {
        lock(&self.items)
            .iter()
            .map(CartItem::subtotal)
            .fold(0i64, i64::saturating_add)
    }

    pub fn items(&self) -> Vec<CartItem> {
        lock(&self.items).clone()
    }

    pub fn contains(&self, auction_id: &str) -> bool {
        lock(&self.items)
            .iter()
            .any(|item| item.auction.id == auction_id)
    }

    pub fn len(&self) -> usize {
        lock(&self.items).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.items).is_empty()
    }
}
// endregion: --- Cart Store

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::model::AuctionStatus;
    use chrono::Utc;

    fn auction(id: &str, current_bid: i64) -> Arc<Auction> {
        Arc::new(Auction {
            id: id.to_string(),
            title: format!("Lot {}", id),
            description: String::new(),
            starting_price: current_bid,
            current_bid,
            buy_now_price: None,
            image_url: String::new(),
            end_date: Utc::now(),
            seller_id: "seller".to_string(),
            category_id: "misc".to_string(),
            status: AuctionStatus::Active,
            created_at: Utc::now(),
            total_bids: 0,
            seller: None,
            specifications: None,
            shipping: None,
        })
    }

    #[test]
    fn duplicate_add_keeps_single_item() {
        let cart = CartStore::new();
        let a1 = auction("a1", 100);

        assert_eq!(cart.add_item(Arc::clone(&a1)), MutationOutcome::Added);
        assert_eq!(cart.add_item(Arc::clone(&a1)), MutationOutcome::AlreadyPresent);

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1);
        assert_eq!(cart.total(), 100);
    }

    #[test]
    fn add_then_remove_restores_previous_state() {
        let cart = CartStore::new();
        cart.add_item(auction("a0", 30));
        let (len, total) = (cart.len(), cart.total());

        cart.add_item(auction("a1", 100));
        assert_eq!(cart.remove_item("a1"), MutationOutcome::Removed);

        assert_eq!(cart.len(), len);
        assert_eq!(cart.total(), total);
    }

    #[test]
    fn total_sums_current_bids() {
        let cart = CartStore::new();
        cart.add_item(auction("a1", 100));
        cart.add_item(auction("a2", 250));
        assert_eq!(cart.total(), 350);
    }

    #[test]
    fn clear_empties_cart() {
        let cart = CartStore::new();
        cart.add_item(auction("a1", 100));
        cart.add_item(auction("a2", 250));

        assert_eq!(cart.clear_cart(), MutationOutcome::Cleared { count: 2 });
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn clearing_empty_cart_reports_zero() {
        let cart = CartStore::new();
        assert_eq!(cart.clear_cart(), MutationOutcome::Cleared { count: 0 });
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let cart = CartStore::new();
        cart.add_item(auction("a1", i64::MAX));
        cart.add_item(auction("a2", 1));
        assert_eq!(cart.total(), i64::MAX);
    }

    #[test]
    fn removing_missing_item_reports_not_found() {
        let cart = CartStore::new();
        assert_eq!(cart.remove_item("nope"), MutationOutcome::NotFound);
    }

    #[test]
    fn items_share_the_auction_reference() {
        let cart = CartStore::new();
        let a1 = auction("a1", 100);
        cart.add_item(Arc::clone(&a1));
        assert!(Arc::ptr_eq(&cart.items()[0].auction, &a1));
    }
}
