//! 환경변수 기반 애플리케이션 설정
//!
//! | 환경변수 | 기본값 | 설명 |
//! |----------|--------|------|
//! | `HOST` | `127.0.0.1` | 바인드 주소 |
//! | `PORT` | `8080` | 바인드 포트 (1-65535) |
//! | `WORKERS` | `4` | 워커 스레드 수 |
//! | `CORS_ALLOWED_ORIGINS` | `http://localhost:3000,http://127.0.0.1:3000` | 쉼표로 구분한 허용 Origin |
//! | `AUDIT_ACTOR` | `user` | 감사 필드에 기록할 행위자 |
//!
//! 값이 잘못된 경우 `ConfigError`를 반환하며, 서버는 시작하지 않습니다.

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WORKERS: usize = 4;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_AUDIT_ACTOR: &str = "user";

/// 설정 로드 에러
///
/// 시작 단계에서만 발생하며 복구하지 않습니다.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{key} must not be empty")]
    Empty { key: &'static str },

    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors_allowed_origins: Vec<String>,
    pub audit_actor: String,
}

impl AppConfig {
    /// 프로세스 환경변수에서 설정을 로드합니다.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 설정을 로드합니다.
    ///
    /// 정의되지 않은 키는 기본값을 사용하고, 정의되었지만 잘못된 값은 에러입니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = non_empty(&lookup, "HOST", DEFAULT_HOST)?;

        let port = match lookup("PORT") {
            Some(value) => parse_non_zero::<u16>("PORT", &value)?,
            None => DEFAULT_PORT,
        };

        let workers = match lookup("WORKERS") {
            Some(value) => parse_non_zero::<usize>("WORKERS", &value)?,
            None => DEFAULT_WORKERS,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let audit_actor = non_empty(&lookup, "AUDIT_ACTOR", DEFAULT_AUDIT_ACTOR)?;

        Ok(Self {
            server: ServerConfig {
                host,
                port,
                workers,
            },
            cors_allowed_origins,
            audit_actor,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { key }),
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(default.to_string()),
    }
}

fn parse_non_zero<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
    T::Err: std::fmt::Display,
{
    let invalid = |reason: String| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason,
    };

    let parsed = value.trim().parse::<T>().map_err(|e| invalid(e.to_string()))?;
    if parsed == T::default() {
        return Err(invalid("must be greater than zero".to_string()));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.server.workers, 4);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
        assert_eq!(config.audit_actor, "user");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9090"),
            ("WORKERS", "2"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
            ("AUDIT_ACTOR", "system"),
        ])
        .unwrap();

        assert_eq!(config.server.bind_address(), "0.0.0.0:9090");
        assert_eq!(config.server.workers, 2);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.audit_actor, "system");
    }

    #[test]
    fn test_invalid_port_is_error() {
        assert!(matches!(
            load(&[("PORT", "http")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));
        assert!(matches!(
            load(&[("PORT", "70000")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));
        assert!(matches!(
            load(&[("PORT", "0")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));
    }

    #[test]
    fn test_empty_values_are_errors() {
        assert_eq!(load(&[("HOST", " ")]), Err(ConfigError::Empty { key: "HOST" }));
        assert_eq!(
            load(&[("AUDIT_ACTOR", "")]),
            Err(ConfigError::Empty { key: "AUDIT_ACTOR" })
        );
    }

    #[test]
    fn test_zero_workers_is_error() {
        let err = load(&[("WORKERS", "0")]).unwrap_err();

        assert!(err.to_string().contains("WORKERS"));
    }
}
