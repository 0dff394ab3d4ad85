// region:    --- Imports
use super::Scope;
use crate::config::MarketConfig;
use crate::service::AuctionService;
use crate::store::{AuctionStore, CartStore, WishlistStore};
use std::sync::Arc;
use tracing::info;
// endregion: --- Imports

// region:    --- Market Session
/// 애플리케이션 세션 경계
/// 루트 스코프에 경매/장바구니/위시리스트 스토어를 마운트한다
pub struct MarketSession {
    config: MarketConfig,
    scope: Arc<Scope>,
}

impl MarketSession {
    pub fn mount(config: MarketConfig, service: Arc<dyn AuctionService>) -> Self {
        if config.auth.is_placeholder() {
            info!(
                "{:<12} --> 인증 설정이 placeholder 값을 사용 중입니다.",
                "Session"
            );
        }

        let scope = Scope::root();
        scope.provide(Arc::new(AuctionStore::new(service, config.request_timeout)));
        scope.provide(Arc::new(CartStore::new()));
        scope.provide(Arc::new(WishlistStore::new()));
        info!("{:<12} --> 세션 마운트 완료", "Session");

        Self { config, scope }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// 루트 스코프 (소비자는 child()로 하위 스코프를 만든다)
    pub fn scope(&self) -> &Arc<Scope> {
        &self.scope
    }

    /// 세션 종료: 모든 스토어 언마운트
    pub fn unmount(self) {
        self.scope.unmount::<AuctionStore>();
        self.scope.unmount::<CartStore>();
        self.scope.unmount::<WishlistStore>();
        info!("{:<12} --> 세션 언마운트 완료", "Session");
    }
}
// endregion: --- Market Session

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::mock::sample_auctions;
    use crate::service::InMemoryAuctionService;

    #[tokio::test]
    async fn mounted_session_exposes_all_stores() {
        let service = Arc::new(InMemoryAuctionService::with_auctions(sample_auctions()));
        let session = MarketSession::mount(MarketConfig::default(), service);
        let page = session.scope().child();

        let auctions = page.use_auctions().unwrap();
        auctions.fetch_auctions().await.unwrap();
        let first = auctions.auctions()[0].clone();

        page.use_cart().unwrap().add_item(Arc::clone(&first));
        page.use_wishlist().unwrap().add_item(first);

        assert_eq!(session.scope().use_cart().unwrap().len(), 1);
        assert_eq!(session.scope().use_wishlist().unwrap().len(), 1);
    }

    #[test]
    fn unmount_discards_stores() {
        let session = MarketSession::mount(
            MarketConfig::default(),
            Arc::new(InMemoryAuctionService::new()),
        );
        let page = session.scope().child();
        session.unmount();

        assert!(page.use_cart().is_err());
        assert!(page.use_auctions().is_err());
    }
}
