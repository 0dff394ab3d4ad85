/// 경매 목록 스토어
/// 1. 목록 조회
/// 2. 생성 / 수정 / 삭제 (외부 경매 서비스에 위임, 로컬 목록은 변경하지 않음)
// region:    --- Imports
use super::lock;
use crate::auction::model::{Auction, AuctionDraft, AuctionPatch, AuctionStatus};
use crate::error::{StoreError, StoreResult};
use crate::service::AuctionService;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time;
use tracing::{error, info, warn};
// endregion: --- Imports

// region:    --- Auction State
#[derive(Debug, Default)]
struct AuctionState {
    auctions: Vec<Arc<Auction>>,
    in_flight: usize,
    last_error: Option<String>,
    /// 마지막으로 발급한 조회 번호
    fetch_seq: u64,
    /// 작업 목록에 반영된 조회 번호 (더 오래된 응답은 반영하지 않음)
    applied_seq: u64,
}

/// 진행 중 요청 표시 (drop 시 해제되므로 취소된 요청도 loading을 남기지 않음)
struct LoadingGuard<'a> {
    state: &'a Mutex<AuctionState>,
}

impl<'a> LoadingGuard<'a> {
    fn enter(state: &'a Mutex<AuctionState>) -> Self {
        let mut s = lock(state);
        s.in_flight += 1;
        s.last_error = None;
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut s = lock(self.state);
        s.in_flight = s.in_flight.saturating_sub(1);
    }
}
// endregion: --- Auction State

// region:    --- Auction Store
pub struct AuctionStore {
    service: Arc<dyn AuctionService>,
    request_timeout: Duration,
    state: Mutex<AuctionState>,
}

impl AuctionStore {
    pub fn new(service: Arc<dyn AuctionService>, request_timeout: Duration) -> Self {
        Self {
            service,
            request_timeout,
            state: Mutex::new(AuctionState::default()),
        }
    }

    /// 1. 목록 조회 (작업 목록 교체, 시작 순서가 늦은 조회 결과가 우선)
    pub async fn fetch_auctions(&self) -> StoreResult<Vec<Arc<Auction>>> {
        let seq = {
            let mut state = lock(&self.state);
            state.fetch_seq += 1;
            state.fetch_seq
        };

        let service = Arc::clone(&self.service);
        let auctions = self
            .run("fetch", async move { service.list().await })
            .await?;

        let auctions: Vec<Arc<Auction>> = auctions.into_iter().map(Arc::new).collect();
        let mut state = lock(&self.state);
        if seq > state.applied_seq {
            info!("{:<12} --> 경매 목록 갱신: {}건", "AuctionStore", auctions.len());
            state.auctions = auctions.clone();
            state.applied_seq = seq;
        } else {
            warn!(
                "{:<12} --> 이전 조회 응답 무시: seq={}, applied={}",
                "AuctionStore", seq, state.applied_seq
            );
        }
        Ok(auctions)
    }

    /// 2. 경매 생성 (검증 실패 시 서비스 호출 없음)
    pub async fn create_auction(&self, draft: AuctionDraft) -> StoreResult<Auction> {
        let service = Arc::clone(&self.service);
        self.run("create", async move {
            draft.validate()?;
            service.create(draft).await
        })
        .await
    }

    /// 3. 경매 수정
    pub async fn update_auction(&self, id: &str, patch: AuctionPatch) -> StoreResult<Auction> {
        let service = Arc::clone(&self.service);
        let id = id.to_string();
        self.run("update", async move { service.update(&id, patch).await })
            .await
    }

    /// 4. 경매 삭제
    pub async fn delete_auction(&self, id: &str) -> StoreResult<()> {
        let service = Arc::clone(&self.service);
        let id = id.to_string();
        self.run("delete", async move { service.delete(&id).await })
            .await
    }

    /// 공통 실행: loading 표시, 타임아웃, 오류 기록 후 호출자에게 전달
    async fn run<T, F>(&self, op: &'static str, fut: F) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        info!("{:<12} --> {} 요청 시작", "AuctionStore", op);
        let _guard = LoadingGuard::enter(&self.state);

        let result = match time::timeout(self.request_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout {
                secs: self.request_timeout.as_secs(),
            }),
        };

        if let Err(e) = &result {
            error!("{:<12} --> {} 요청 실패: {}", "AuctionStore", op, e);
            lock(&self.state).last_error = Some(e.to_string());
        }
        result
    }

    pub fn auctions(&self) -> Vec<Arc<Auction>> {
        lock(&self.state).auctions.clone()
    }

    pub fn find(&self, id: &str) -> Option<Arc<Auction>> {
        lock(&self.state)
            .auctions
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    pub fn featured(&self) -> Vec<Arc<Auction>> {
        self.filtered(|a| a.status == AuctionStatus::Featured)
    }

    pub fn by_category(&self, category_id: &str) -> Vec<Arc<Auction>> {
        self.filtered(|a| a.category_id == category_id)
    }

    fn filtered<P>(&self, predicate: P) -> Vec<Arc<Auction>>
    where
        P: Fn(&Auction) -> bool,
    {
        lock(&self.state)
            .auctions
            .iter()
            .filter(|a| predicate(a))
            .cloned()
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).in_flight > 0
    }

    pub fn last_error(&self) -> Option<String> {
        lock(&self.state).last_error.clone()
    }
}
// endregion: --- Auction Store
