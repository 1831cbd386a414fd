//! Challenge Router

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use std::sync::Arc;

use crate::application::config::ChallengeConfig;
use crate::domain::repository::FlagSource;
use crate::infra::flag::StaticFlagSource;
use crate::presentation::handlers::{self, ChallengeAppState};

/// Paths that serve the challenge page
pub const PAGE_PATHS: [&str; 2] = ["/", "/index.php"];

/// Create the challenge router with the flag resolved from config
pub fn challenge_router(config: ChallengeConfig) -> Router {
    let flag_source = StaticFlagSource::from(&config);
    challenge_router_generic(flag_source, &config)
}

/// Create a generic challenge router for any flag source
pub fn challenge_router_generic<F>(flag_source: F, config: &ChallengeConfig) -> Router
where
    F: FlagSource + Clone + Send + Sync + 'static,
{
    let state = ChallengeAppState {
        flag_source: Arc::new(flag_source),
    };

    let mut router = Router::new();
    for path in PAGE_PATHS {
        router = router.route(
            path,
            post(handlers::evaluate::<F>).fallback(handlers::render_page),
        );
    }

    router
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(config.max_form_bytes))
        .with_state(state)
}
