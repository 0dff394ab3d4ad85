/// REST 백엔드 경매 서비스 클라이언트
// region:    --- Imports
use super::AuctionService;
use crate::auction::model::{Auction, AuctionDraft, AuctionPatch};
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Http Auction Service
#[derive(Clone)]
pub struct HttpAuctionService {
    client: Client,
    base_url: Url,
}

impl HttpAuctionService {
    pub fn new(base_url: &str) -> StoreResult<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// 기본 URL은 경로를 가질 수 있는 http(s) URL이어야 한다
    pub fn with_client(client: Client, base_url: &str) -> StoreResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            StoreError::OperationFailed(format!("invalid base url {}: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::OperationFailed(format!(
                "invalid base url: {}",
                base_url
            )));
        }
        Ok(Self { client, base_url })
    }

    /// 기본 URL 뒤에 경로 세그먼트 추가 (세그먼트는 퍼센트 인코딩됨)
    fn url(&self, segments: &[&str]) -> StoreResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                StoreError::OperationFailed(format!("invalid base url: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn collection_url(&self) -> StoreResult<Url> {
        self.url(&["auctions"])
    }

    fn item_url(&self, id: &str) -> StoreResult<Url> {
        self.url(&["auctions", id])
    }

    /// 응답 상태 검사
    /// 400은 Validation, 404는 NotFound, 그 외 실패는 OperationFailed
    async fn check(response: Response, id: Option<&str>) -> StoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(StoreError::NotFound { id: id.to_string() });
            }
        }
        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::BAD_REQUEST {
            info!("{:<12} --> 백엔드 검증 실패: {}", "Service", body);
            return Err(StoreError::Validation(error_message(&body)));
        }
        error!(
            "{:<12} --> 백엔드 요청 실패: status={}, body={}",
            "Service", status, body
        );
        Err(StoreError::OperationFailed(format!(
            "backend responded {}: {}",
            status, body
        )))
    }

    async fn json<T: DeserializeOwned>(response: Response) -> StoreResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::OperationFailed(format!("invalid response body: {}", e)))
    }
}

/// 오류 응답 본문에서 메시지 추출 ({"error": ...} 형식이 아니면 본문 그대로)
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl AuctionService for HttpAuctionService {
    async fn list(&self) -> StoreResult<Vec<Auction>> {
        let url = self.collection_url()?;
        info!("{:<12} --> GET {}", "Service", url);
        let response = self.client.get(url).send().await?;
        Self::json(Self::check(response, None).await?).await
    }

    async fn create(&self, draft: AuctionDraft) -> StoreResult<Auction> {
        let url = self.collection_url()?;
        info!("{:<12} --> POST {}", "Service", url);
        let response = self.client.post(url).json(&draft).send().await?;
        Self::json(Self::check(response, None).await?).await
    }

    async fn update(&self, id: &str, patch: AuctionPatch) -> StoreResult<Auction> {
        let url = self.item_url(id)?;
        info!("{:<12} --> PATCH {}", "Service", url);
        let response = self.client.patch(url).json(&patch).send().await?;
        Self::json(Self::check(response, Some(id)).await?).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let url = self.item_url(id)?;
        info!("{:<12} --> DELETE {}", "Service", url);
        let response = self.client.delete(url).send().await?;
        Self::check(response, Some(id)).await?;
        Ok(())
    }
}
// endregion: --- Http Auction Service
