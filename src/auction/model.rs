use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// 경매 상태
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Ended,
    Cancelled,
    Featured,
}

// 판매자 요약 정보
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SellerSummary {
    pub id: String,
    pub name: String,
    pub rating: f32,
    pub total_sales: u32,
    pub verified: bool,
}

// 배송 정보
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub cost: i64,
    pub estimated_days: u32,
    pub locations: Vec<String>,
}

// 경매 모델
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    pub id: String,
    pub title: String,
    pub description: String,
    pub starting_price: i64,
    pub current_bid: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_now_price: Option<i64>,
    pub image_url: String,
    pub end_date: DateTime<Utc>,
    pub seller_id: String,
    pub category_id: String,
    pub status: AuctionStatus,
    pub created_at: DateTime<Utc>,
    pub total_bids: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<SellerSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingInfo>,
}

impl Auction {
    /// 초안으로부터 경매 생성 (서버 할당 필드 포함)
    pub fn from_draft(id: String, draft: AuctionDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            current_bid: draft.starting_price,
            title: draft.title,
            description: draft.description,
            starting_price: draft.starting_price,
            buy_now_price: draft.buy_now_price,
            image_url: draft.image_url,
            end_date: draft.end_date,
            seller_id: draft.seller_id,
            category_id: draft.category_id,
            status: AuctionStatus::Active,
            created_at,
            total_bids: 0,
            seller: draft.seller,
            specifications: draft.specifications,
            shipping: draft.shipping,
        }
    }

    /// 패치 적용 (지정된 필드만 교체)
    pub fn apply(&mut self, patch: AuctionPatch) {
        let AuctionPatch {
            title,
            description,
            current_bid,
            buy_now_price,
            image_url,
            end_date,
            category_id,
            status,
            total_bids,
            specifications,
            shipping,
        } = patch;

        if let Some(v) = title {
            self.title = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = current_bid {
            self.current_bid = v;
        }
        if let Some(v) = buy_now_price {
            self.buy_now_price = Some(v);
        }
        if let Some(v) = image_url {
            self.image_url = v;
        }
        if let Some(v) = end_date {
            self.end_date = v;
        }
        if let Some(v) = category_id {
            self.category_id = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = total_bids {
            self.total_bids = v;
        }
        if let Some(v) = specifications {
            self.specifications = Some(v);
        }
        if let Some(v) = shipping {
            self.shipping = Some(v);
        }
    }
}

/// 경매 생성 초안 (id, 생성 시각 등 서버 할당 필드 제외)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDraft {
    pub title: String,
    pub description: String,
    pub starting_price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_now_price: Option<i64>,
    pub image_url: String,
    pub end_date: DateTime<Utc>,
    pub seller_id: String,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<SellerSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingInfo>,
}

/// 경매 부분 수정
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuctionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_bid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_now_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AuctionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_bids: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingInfo>,
}
