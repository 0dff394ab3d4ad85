/// 환경 변수 기반 설정
/// 인증/백엔드 연결 정보는 외부 협력자(인증 제공자)를 위한 값이며, 미설정 시 placeholder 사용
// region:    --- Imports
use std::time::Duration;
use tracing::warn;
// endregion: --- Imports

// region:    --- Defaults
const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

const PLACEHOLDER_API_KEY: &str = "demo-api-key";
const PLACEHOLDER_AUTH_DOMAIN: &str = "demo-project.firebaseapp.com";
const PLACEHOLDER_PROJECT_ID: &str = "demo-project";
const PLACEHOLDER_STORAGE_BUCKET: &str = "demo-project.appspot.com";
const PLACEHOLDER_SENDER_ID: &str = "000000000000";
const PLACEHOLDER_APP_ID: &str = "1:000000000000:web:0000000000000000";
// endregion: --- Defaults

// region:    --- Auth Config
/// 인증 제공자 연결 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl AuthConfig {
    /// placeholder 값이 하나라도 남아 있는지 여부
    pub fn is_placeholder(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
            || self.auth_domain == PLACEHOLDER_AUTH_DOMAIN
            || self.project_id == PLACEHOLDER_PROJECT_ID
            || self.storage_bucket == PLACEHOLDER_STORAGE_BUCKET
            || self.messaging_sender_id == PLACEHOLDER_SENDER_ID
            || self.app_id == PLACEHOLDER_APP_ID
    }
}
// endregion: --- Auth Config

// region:    --- Market Config
/// 애플리케이션 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketConfig {
    pub auth: AuthConfig,
    pub api_url: String,
    pub listen_addr: String,
    pub request_timeout: Duration,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl MarketConfig {
    /// 프로세스 환경 변수에서 설정 로드
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 조회 함수에서 설정 로드
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, fallback: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        "{:<12} --> REQUEST_TIMEOUT_SECS 값이 올바르지 않음: {}",
                        "Config", raw
                    );
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Self {
            auth: AuthConfig {
                api_key: get("FIREBASE_API_KEY", PLACEHOLDER_API_KEY),
                auth_domain: get("FIREBASE_AUTH_DOMAIN", PLACEHOLDER_AUTH_DOMAIN),
                project_id: get("FIREBASE_PROJECT_ID", PLACEHOLDER_PROJECT_ID),
                storage_bucket: get("FIREBASE_STORAGE_BUCKET", PLACEHOLDER_STORAGE_BUCKET),
                messaging_sender_id: get("FIREBASE_MESSAGING_SENDER_ID", PLACEHOLDER_SENDER_ID),
                app_id: get("FIREBASE_APP_ID", PLACEHOLDER_APP_ID),
            },
            api_url: get("AUCTION_API_URL", DEFAULT_API_URL),
            listen_addr: get("LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
            request_timeout,
        }
    }
}
// endregion: --- Market Config
