/// 스토어 제공 범위 (Provider / Consumer)
/// 스코프에 마운트된 스토어는 해당 스코프와 자손 스코프에서만 조회할 수 있다
// region:    --- Imports
use crate::error::{StoreError, StoreResult};
use crate::store::{AuctionStore, CartStore, WishlistStore};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

pub mod session;
pub use session::MarketSession;
// endregion: --- Imports

// region:    --- Scoped Store
/// 스코프에 제공 가능한 스토어
pub trait ScopedStore: Any + Send + Sync {
    const NAME: &'static str;
}

impl ScopedStore for AuctionStore {
    const NAME: &'static str = "AuctionStore";
}

impl ScopedStore for CartStore {
    const NAME: &'static str = "CartStore";
}

impl ScopedStore for WishlistStore {
    const NAME: &'static str = "WishlistStore";
}
// endregion: --- Scoped Store

// region:    --- Scope
type Slot = Arc<dyn Any + Send + Sync>;

#[derive(Default)]
pub struct Scope {
    parent: Option<Arc<Scope>>,
    provided: RwLock<HashMap<TypeId, Slot>>,
}

impl Scope {
    /// 루트 스코프 생성
    pub fn root() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 자손 스코프 생성
    pub fn child(self: &Arc<Self>) -> Arc<Self> {
        Arc::new(Self {
            parent: Some(Arc::clone(self)),
            provided: RwLock::default(),
        })
    }

    /// 스토어 마운트 (같은 타입이 있으면 교체)
    pub fn provide<S: ScopedStore>(&self, store: Arc<S>) -> Arc<S> {
        info!("{:<12} --> {} 마운트", "Scope", S::NAME);
        self.write()
            .insert(TypeId::of::<S>(), Arc::clone(&store) as Slot);
        store
    }

    /// 스토어 언마운트 (마지막 참조가 사라지면 메모리 컬렉션도 폐기)
    pub fn unmount<S: ScopedStore>(&self) -> Option<Arc<S>> {
        let slot = self.write().remove(&TypeId::of::<S>())?;
        info!("{:<12} --> {} 언마운트", "Scope", S::NAME);
        slot.downcast::<S>().ok()
    }

    /// 조상 스코프를 따라 스토어 조회
    pub fn use_store<S: ScopedStore>(&self) -> StoreResult<Arc<S>> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(slot) = current.read().get(&TypeId::of::<S>()) {
                if let Ok(store) = Arc::clone(slot).downcast::<S>() {
                    return Ok(store);
                }
            }
            scope = current.parent.as_deref();
        }
        debug!("{:<12} --> {} 제공자 없음", "Scope", S::NAME);
        Err(StoreError::MissingProvider { store: S::NAME })
    }

    pub fn use_auctions(&self) -> StoreResult<Arc<AuctionStore>> {
        self.use_store()
    }

    pub fn use_cart(&self) -> StoreResult<Arc<CartStore>> {
        self.use_store()
    }

    pub fn use_wishlist(&self) -> StoreResult<Arc<WishlistStore>> {
        self.use_store()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<TypeId, Slot>> {
        self.provided.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TypeId, Slot>> {
        self.provided.write().unwrap_or_else(PoisonError::into_inner)
    }
}
// endregion: --- Scope
