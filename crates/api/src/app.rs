use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::services::SessionGate;
use domain::store::{ContentStore, SessionStore};

use crate::config::Config;
use crate::middleware::{
    login_rate_limit, metrics_handler, metrics_middleware, require_admin,
    security_headers_middleware, trace_id, LoginRateLimiter,
};
use crate::routes::{admin, enquiries, health, long_videos, short_videos, testimonials};

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
    pub gate: Arc<SessionGate>,
    pub config: Arc<Config>,
    pub login_limiter: Option<Arc<LoginRateLimiter>>,
}

pub fn create_app(
    config: Config,
    content: Arc<dyn ContentStore>,
    sessions: Arc<dyn SessionStore>,
) -> Router {
    let config = Arc::new(config);

    let gate = Arc::new(SessionGate::new(
        &config.admin.password,
        config.admin.session_ttl_secs,
        sessions,
    ));

    let state = AppState {
        content,
        gate,
        config: config.clone(),
        login_limiter: LoginRateLimiter::new(config.security.login_rate_limit_per_minute)
            .map(Arc::new),
    };

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Session layer sits on admin method routers only; unlisted methods get 405.
    let admin_only = middleware::from_fn_with_state(state.clone(), require_admin);
    let login_throttle = middleware::from_fn_with_state(state.clone(), login_rate_limit);

    Router::new()
        .route(
            "/api/short-videos",
            get(short_videos::list_short_videos)
                .merge(post(short_videos::create_short_video).route_layer(admin_only.clone())),
        )
        .route(
            "/api/short-videos/:id",
            delete(short_videos::delete_short_video).route_layer(admin_only.clone()),
        )
        .route(
            "/api/long-videos",
            get(long_videos::list_long_videos)
                .merge(post(long_videos::create_long_video).route_layer(admin_only.clone())),
        )
        .route(
            "/api/long-videos/:id",
            delete(long_videos::delete_long_video).route_layer(admin_only.clone()),
        )
        .route(
            "/api/testimonials",
            get(testimonials::list_testimonials)
                .merge(post(testimonials::create_testimonial).route_layer(admin_only.clone())),
        )
        .route(
            "/api/testimonials/:id",
            delete(testimonials::delete_testimonial)
                .put(testimonials::update_testimonial)
                .route_layer(admin_only.clone()),
        )
        .route(
            "/api/enquiries",
            post(enquiries::create_enquiry)
                .merge(get(enquiries::list_enquiries).route_layer(admin_only.clone())),
        )
        .route("/api/admin/login", post(admin::login).route_layer(login_throttle))
        .route(
            "/api/admin/logout",
            post(admin::logout).route_layer(admin_only.clone()),
        )
        .route("/api/admin/session", get(admin::session).route_layer(admin_only))
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler))
        // Global middleware (bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
