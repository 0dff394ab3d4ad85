/// 목업 경매 데이터
/// 백엔드가 연결되기 전까지 로컬 서버와 테스트에서 사용
// region:    --- Imports
use super::model::{Auction, AuctionStatus, SellerSummary, ShippingInfo};
use chrono::{Duration, Utc};
use std::collections::BTreeMap;
// endregion: --- Imports

// region:    --- Sample Auctions
/// 샘플 경매 목록
pub fn sample_auctions() -> Vec<Auction> {
    let now = Utc::now();

    let seller = SellerSummary {
        id: "seller-1".to_string(),
        name: "Vintage Finds".to_string(),
        rating: 4.8,
        total_sales: 312,
        verified: true,
    };

    let mut watch_specs = BTreeMap::new();
    watch_specs.insert("Brand".to_string(), "Omega".to_string());
    watch_specs.insert("Movement".to_string(), "Automatic".to_string());
    watch_specs.insert("Year".to_string(), "1968".to_string());

    vec![
        Auction {
            id: "auction-1".to_string(),
            title: "Omega Seamaster 1968".to_string(),
            description: "Serviced automatic watch with original dial.".to_string(),
            starting_price: 800,
            current_bid: 1250,
            buy_now_price: Some(2500),
            image_url: "https://images.example.com/omega-seamaster.jpg".to_string(),
            end_date: now + Duration::days(2),
            seller_id: seller.id.clone(),
            category_id: "watches".to_string(),
            status: AuctionStatus::Featured,
            created_at: now - Duration::days(5),
            total_bids: 14,
            seller: Some(seller.clone()),
            specifications: Some(watch_specs),
            shipping: Some(ShippingInfo {
                cost: 25,
                estimated_days: 3,
                locations: vec!["US".to_string(), "EU".to_string()],
            }),
        },
        Auction {
            id: "auction-2".to_string(),
            title: "Leica M3 Camera Body".to_string(),
            description: "Double-stroke M3, shutter tested at all speeds.".to_string(),
            starting_price: 900,
            current_bid: 1100,
            buy_now_price: None,
            image_url: "https://images.example.com/leica-m3.jpg".to_string(),
            end_date: now + Duration::hours(20),
            seller_id: seller.id.clone(),
            category_id: "cameras".to_string(),
            status: AuctionStatus::Active,
            created_at: now - Duration::days(3),
            total_bids: 6,
            seller: Some(seller),
            specifications: None,
            shipping: None,
        },
        Auction {
            id: "auction-3".to_string(),
            title: "First Edition Dune".to_string(),
            description: "1965 hardcover, dust jacket intact.".to_string(),
            starting_price: 3000,
            current_bid: 3000,
            buy_now_price: Some(6000),
            image_url: "https://images.example.com/dune-first.jpg".to_string(),
            end_date: now - Duration::days(1),
            seller_id: "seller-2".to_string(),
            category_id: "books".to_string(),
            status: AuctionStatus::Ended,
            created_at: now - Duration::days(10),
            total_bids: 0,
            seller: None,
            specifications: None,
            shipping: None,
        },
    ]
}
// endregion: --- Sample Auctions
