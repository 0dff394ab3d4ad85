/// 경매 등록 폼 검증
// region:    --- Imports
use super::model::AuctionDraft;
use crate::error::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
// endregion: --- Imports

// region:    --- Draft Validation
impl AuctionDraft {
    /// 현재 시각 기준 초안 검증
    pub fn validate(&self) -> StoreResult<()> {
        self.validate_at(Utc::now())
    }

    /// 주어진 시각 기준 초안 검증
    pub fn validate_at(&self, now: DateTime<Utc>) -> StoreResult<()> {
        if self.title.trim().is_empty() {
            return Err(StoreError::Validation("title is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(StoreError::Validation("description is required".to_string()));
        }
        if self.image_url.trim().is_empty() {
            return Err(StoreError::Validation("image url is required".to_string()));
        }
        if self.starting_price <= 0 {
            return Err(StoreError::Validation(
                "starting price must be greater than zero".to_string(),
            ));
        }
        if let Some(buy_now) = self.buy_now_price {
            if buy_now <= self.starting_price {
                return Err(StoreError::Validation(format!(
                    "buy now price {} must exceed starting price {}",
                    buy_now, self.starting_price
                )));
            }
        }
        if self.end_date <= now {
            return Err(StoreError::Validation(
                "end date must be in the future".to_string(),
            ));
        }
        Ok(())
    }
}
// endregion: --- Draft Validation
