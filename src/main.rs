//! 사용자 서비스 메인 애플리케이션
//!
//! 설정을 로드하고 Actix-web 기반 HTTP 서버를 구동합니다.
//! 설정을 로드할 수 없으면 서버를 시작하지 않고 즉시 종료합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service_backend::config::AppConfig;
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::UserService;
use user_service_backend::validation::RequestValidator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 로깅을 먼저 초기화해야 .env 로드 결과가 기록된다
    init_logging();
    load_env_file();

    let config = AppConfig::load().expect("설정 로드 실패");
    info!("configuration: {:?}", config);

    start_http_server(config).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 검증기와 사용자 서비스는 한 번만 생성되어 모든 워커가 공유합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let validator = web::Data::new(RequestValidator::new());
    let user_service = web::Data::new(UserService::new(config.audit_actor.clone()));
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(validator.clone())
            .app_data(user_service.clone())
            .wrap(configure_cors(&origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(config.server.workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
