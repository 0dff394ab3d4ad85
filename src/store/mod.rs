// region:    --- Imports
use std::sync::{Mutex, MutexGuard, PoisonError};
// endregion: --- Imports

// region:    --- Modules
pub mod auction_store;
pub mod cart;
pub mod outcome;
pub mod wishlist;

pub use auction_store::AuctionStore;
pub use cart::{CartItem, CartStore};
pub use outcome::MutationOutcome;
pub use wishlist::WishlistStore;
// endregion: --- Modules

/// 잠금 획득 (패닉으로 오염된 잠금도 복구하여 사용)
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
