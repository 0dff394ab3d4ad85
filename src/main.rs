// region:    --- Imports
use auction_market::auction::mock::sample_auctions;
use auction_market::config::MarketConfig;
use auction_market::handlers;
use auction_market::service::InMemoryAuctionService;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let config = MarketConfig::from_env();

    // 목업 데이터로 경매 서비스 생성
    let service = Arc::new(InMemoryAuctionService::with_auctions(sample_auctions()));
    info!("{:<12} --> 목업 경매 서비스 생성", "Main");

    let routes_all = handlers::router(service);

    // 리스너 생성
    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!(
        "{:<12} --> Mock Backend: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
