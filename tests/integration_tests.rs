use auction_market::auction::mock::sample_auctions;
use auction_market::auction::model::{AuctionDraft, AuctionPatch, AuctionStatus};
use auction_market::config::MarketConfig;
use auction_market::context::MarketSession;
use auction_market::error::StoreError;
use auction_market::handlers;
use auction_market::notifications::{ChannelNotifier, Notice, Notifier};
use auction_market::service::{HttpAuctionService, InMemoryAuctionService};
use auction_market::store::MutationOutcome;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tokio::net::TcpListener;

/// 목업 백엔드를 임의 포트로 실행하고 기본 URL 반환
async fn spawn_backend() -> String {
    let service = Arc::new(InMemoryAuctionService::with_auctions(sample_auctions()));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, handlers::router(service).into_make_service())
            .await
            .unwrap();
    });
    format!("http://{}", addr)
}

/// 백엔드에 연결된 세션 생성
async fn setup() -> MarketSession {
    let base_url = spawn_backend().await;
    let config = MarketConfig::from_lookup(|key| match key {
        "AUCTION_API_URL" => Some(base_url.clone()),
        _ => None,
    });
    let service = Arc::new(HttpAuctionService::new(&config.api_url).unwrap());
    MarketSession::mount(config, service)
}

fn draft(title: &str) -> AuctionDraft {
    AuctionDraft {
        title: title.to_string(),
        description: "Integration test lot".to_string(),
        starting_price: 500,
        buy_now_price: Some(1500),
        image_url: "https://images.example.com/lot.jpg".to_string(),
        end_date: Utc::now() + Duration::days(7),
        seller_id: "seller-test".to_string(),
        category_id: "art".to_string(),
        seller: None,
        specifications: None,
        shipping: None,
    }
}

/// 목록 조회 테스트
#[tokio::test]
async fn test_fetch_auctions_over_http() {
    let session = setup().await;
    let auctions = session.scope().use_auctions().unwrap();

    let fetched = auctions.fetch_auctions().await.unwrap();

    assert_eq!(fetched.len(), 3);
    assert!(!auctions.is_loading());
    assert_eq!(auctions.featured()[0].id, "auction-1");
}

/// 생성 / 수정 / 삭제 후 재조회 테스트
#[tokio::test]
async fn test_mutations_visible_after_refetch() {
    let session = setup().await;
    let auctions = session.scope().use_auctions().unwrap();

    let created = auctions.create_auction(draft("Oil Painting")).await.unwrap();
    assert_eq!(created.current_bid, 500);

    let updated = auctions
        .update_auction(
            &created.id,
            AuctionPatch {
                status: Some(AuctionStatus::Featured),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, AuctionStatus::Featured);

    auctions.delete_auction("auction-2").await.unwrap();

    auctions.fetch_auctions().await.unwrap();
    assert_eq!(
        auctions.find(&created.id).unwrap().status,
        AuctionStatus::Featured
    );
    assert!(auctions.find("auction-2").is_none());
}

/// 존재하지 않는 경매 수정/삭제 테스트
#[tokio::test]
async fn test_unknown_auction_is_not_found() {
    let session = setup().await;
    let auctions = session.scope().use_auctions().unwrap();

    let result = auctions.delete_auction("missing").await;

    assert_eq!(
        result,
        Err(StoreError::NotFound {
            id: "missing".to_string()
        })
    );
    assert!(auctions.last_error().is_some());
    assert!(!auctions.is_loading());
}

/// 백엔드 검증 실패 테스트 (스토어 검증을 거치지 않는 직접 호출)
#[tokio::test]
async fn test_backend_rejects_invalid_draft() {
    use auction_market::service::AuctionService;

    let base_url = spawn_backend().await;
    let service = HttpAuctionService::new(&base_url).unwrap();
    let mut bad = draft("Broken");
    bad.starting_price = 0;

    let result = service.create(bad).await;

    assert_eq!(
        result,
        Err(StoreError::Validation(
            "starting price must be greater than zero".to_string()
        ))
    );
}

/// 예약 문자가 포함된 id는 다른 경매를 건드리지 않음 테스트
#[tokio::test]
async fn test_reserved_characters_in_id_do_not_hit_other_auctions() {
    let session = setup().await;
    let auctions = session.scope().use_auctions().unwrap();

    for id in ["auction-1?x=1", "auction-1#frag", "auction-1/extra"] {
        assert_eq!(
            auctions.delete_auction(id).await,
            Err(StoreError::NotFound { id: id.to_string() })
        );
        assert!(matches!(
            auctions
                .update_auction(
                    id,
                    AuctionPatch {
                        status: Some(AuctionStatus::Cancelled),
                        ..Default::default()
                    },
                )
                .await,
            Err(StoreError::NotFound { .. })
        ));
    }

    auctions.fetch_auctions().await.unwrap();
    let untouched = auctions.find("auction-1").unwrap();
    assert_eq!(untouched.status, AuctionStatus::Featured);
    assert_eq!(auctions.auctions().len(), 3);
}

/// 연결 실패 시 오류 전달 테스트
#[tokio::test]
async fn test_unreachable_backend_surfaces_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = MarketConfig::default();
    let service = Arc::new(HttpAuctionService::new(&format!("http://{}", addr)).unwrap());
    let session = MarketSession::mount(config, service);
    let auctions = session.scope().use_auctions().unwrap();

    assert!(auctions.fetch_auctions().await.is_err());
    assert!(auctions.last_error().is_some());
    assert!(auctions.auctions().is_empty());
}

/// 장바구니와 위시리스트 흐름 테스트
#[tokio::test]
async fn test_cart_and_wishlist_flow() {
    let session = setup().await;
    let page = session.scope().child();
    let auctions = page.use_auctions().unwrap();
    let cart = page.use_cart().unwrap();
    let wishlist = page.use_wishlist().unwrap();
    let (notifier, mut notices) = ChannelNotifier::new();

    auctions.fetch_auctions().await.unwrap();
    let omega = auctions.find("auction-1").unwrap();
    let leica = auctions.find("auction-2").unwrap();

    notifier.notify(Notice::for_cart(cart.add_item(Arc::clone(&omega))));
    notifier.notify(Notice::for_cart(cart.add_item(Arc::clone(&leica))));
    assert_eq!(cart.total(), omega.current_bid + leica.current_bid);

    // 같은 경매는 장바구니와 위시리스트에 동시에 존재할 수 있음
    assert!(!wishlist.is_in_wishlist(&omega.id));
    assert_eq!(wishlist.add_item(Arc::clone(&omega)), MutationOutcome::Added);
    assert!(wishlist.is_in_wishlist(&omega.id));
    assert!(cart.contains(&omega.id));

    notifier.notify(Notice::for_cart(cart.clear_cart()));
    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0);
    assert_eq!(wishlist.len(), 1);

    let titles: Vec<String> = std::iter::from_fn(|| notices.try_recv().ok())
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, vec!["Added to cart", "Added to cart", "Cart cleared"]);
}

/// 제공자 밖에서의 접근 테스트
#[tokio::test]
async fn test_accessor_outside_session_fails() {
    let session = setup().await;
    let detached = auction_market::context::Scope::root();

    assert_eq!(
        detached.use_cart().unwrap_err(),
        StoreError::MissingProvider { store: "CartStore" }
    );
    assert!(session.scope().use_cart().is_ok());
}
