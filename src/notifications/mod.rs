/// 변경 결과 알림
/// 스토어는 결과만 반환하고, 표시 계층이 Notice로 변환하여 Notifier에 전달한다
// region:    --- Imports
use crate::store::MutationOutcome;
use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};
// endregion: --- Imports

// region:    --- Notice
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// 장바구니 변경 결과 알림
    pub fn for_cart(outcome: MutationOutcome) -> Self {
        match outcome {
            MutationOutcome::Added => {
                Notice::new("Added to cart", "The item has been added to your cart.")
            }
            MutationOutcome::AlreadyPresent => {
                Notice::new("Already in cart", "This item is already in your cart.")
            }
            MutationOutcome::Removed => Notice::new(
                "Removed from cart",
                "The item has been removed from your cart.",
            ),
            MutationOutcome::NotFound => {
                Notice::new("Removed from cart", "The item was not in your cart.")
            }
            MutationOutcome::Cleared { .. } => Notice::new(
                "Cart cleared",
                "All items have been removed from your cart.",
            ),
        }
    }

    /// 위시리스트 변경 결과 알림
    pub fn for_wishlist(outcome: MutationOutcome) -> Self {
        match outcome {
            MutationOutcome::Added => Notice::new(
                "Added to wishlist",
                "The item has been added to your wishlist.",
            ),
            MutationOutcome::AlreadyPresent => Notice::new(
                "Already in wishlist",
                "This item is already in your wishlist.",
            ),
            MutationOutcome::Removed => Notice::new(
                "Removed from wishlist",
                "The item has been removed from your wishlist.",
            ),
            MutationOutcome::NotFound => Notice::new(
                "Removed from wishlist",
                "The item was not in your wishlist.",
            ),
            MutationOutcome::Cleared { .. } => Notice::new(
                "Wishlist cleared",
                "All items have been removed from your wishlist.",
            ),
        }
    }
}
// endregion: --- Notice

// region:    --- Notifier
/// 알림 표시 채널 트레이트
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// 로그로만 남기는 알림 구현체
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        info!(
            "{:<12} --> {}: {}",
            "Notice", notice.title, notice.description
        );
    }
}

/// 채널로 전달하는 알림 구현체
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: UnboundedSender<Notice>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, UnboundedReceiver<Notice>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        if self.sender.send(notice).is_err() {
            warn!("{:<12} --> 알림 수신자가 없음", "Notice");
        }
    }
}
// endregion: --- Notifier
