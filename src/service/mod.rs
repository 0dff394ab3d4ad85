// region:    --- Imports
use crate::auction::model::{Auction, AuctionDraft, AuctionPatch};
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

pub mod http;
pub use http::HttpAuctionService;
// endregion: --- Imports

// region:    --- Auction Service Trait
/// 외부 경매 서비스 트레이트
/// 변경 호출이 성공하면 호출자는 목록을 다시 조회해야 한다
#[async_trait]
pub trait AuctionService: Send + Sync {
    async fn list(&self) -> StoreResult<Vec<Auction>>;
    async fn create(&self, draft: AuctionDraft) -> StoreResult<Auction>;
    async fn update(&self, id: &str, patch: AuctionPatch) -> StoreResult<Auction>;
    async fn delete(&self, id: &str) -> StoreResult<()>;
}
// endregion: --- Auction Service Trait

// region:    --- In-Memory Auction Service
/// 메모리 기반 경매 서비스 구현체 (목업 백엔드)
#[derive(Default)]
pub struct InMemoryAuctionService {
    auctions: RwLock<Vec<Auction>>,
}

impl InMemoryAuctionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 데이터로 서비스 생성
    pub fn with_auctions(auctions: Vec<Auction>) -> Self {
        Self {
            auctions: RwLock::new(auctions),
        }
    }

    /// 경매 단건 조회
    pub async fn get(&self, id: &str) -> StoreResult<Auction> {
        self.auctions
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }
}

/// 메모리 기반 경매 서비스 메서드 구현
#[async_trait]
impl AuctionService for InMemoryAuctionService {
    async fn list(&self) -> StoreResult<Vec<Auction>> {
        let auctions = self.auctions.read().await;
        info!("{:<12} --> 경매 목록 조회: {}건", "Service", auctions.len());
        Ok(auctions.clone())
    }

    async fn create(&self, draft: AuctionDraft) -> StoreResult<Auction> {
        let auction = Auction::from_draft(Uuid::new_v4().to_string(), draft, Utc::now());
        info!("{:<12} --> 경매 생성 id: {}", "Service", auction.id);
        self.auctions.write().await.push(auction.clone());
        Ok(auction)
    }

    async fn update(&self, id: &str, patch: AuctionPatch) -> StoreResult<Auction> {
        let mut auctions = self.auctions.write().await;
        let auction = auctions
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        auction.apply(patch);
        info!("{:<12} --> 경매 수정 id: {}", "Service", id);
        Ok(auction.clone())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut auctions = self.auctions.write().await;
        let before = auctions.len();
        auctions.retain(|a| a.id != id);
        if auctions.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        info!("{:<12} --> 경매 삭제 id: {}", "Service", id);
        Ok(())
    }
}
// endregion: --- In-Memory Auction Service

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::mock::sample_auctions;
    use crate::auction::model::AuctionStatus;
    use chrono::Duration;

    fn draft() -> AuctionDraft {
        AuctionDraft {
            title: "Record Player".to_string(),
            description: "Belt drive turntable".to_string(),
            starting_price: 75,
            buy_now_price: Some(200),
            image_url: "https://img.example/turntable.jpg".to_string(),
            end_date: Utc::now() + Duration::days(1),
            seller_id: "seller-9".to_string(),
            category_id: "audio".to_string(),
            seller: None,
            specifications: None,
            shipping: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_appends() {
        let service = InMemoryAuctionService::new();
        let created = service.create(draft()).await.unwrap();
        assert!(!created.id.is_empty());

        let listed = service.list().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn update_applies_patch() {
        let service = InMemoryAuctionService::with_auctions(sample_auctions());
        let updated = service
            .update(
                "auction-2",
                AuctionPatch {
                    status: Some(AuctionStatus::Cancelled),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, AuctionStatus::Cancelled);
        assert_eq!(
            service.get("auction-2").await.unwrap().status,
            AuctionStatus::Cancelled
        );
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let service = InMemoryAuctionService::new();
        assert_eq!(
            service.delete("missing").await,
            Err(StoreError::NotFound {
                id: "missing".to_string()
            })
        );
        assert!(matches!(
            service.update("missing", AuctionPatch::default()).await,
            Err(StoreError::NotFound { .. })
        ));
    }
}
