//! Nordisk Web Server
//!
//! HTTP layer for the four brand sites, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Redirect to `/software/home`
//! - `GET /{brand}` - Redirect to `/{brand}/home`
//! - `GET /{brand}/{page}` - Server-rendered page (`?menu=open` expands the sidebar)
//! - `POST /{brand}/contact` - Contact or registration form
//! - `POST /{brand}/careers/apply` - Job application
//! - `GET /static/global.css` - Shared stylesheet
//! - `GET /pkg/*` - Browser bundle for the interactive widgets
//! - `POST /fn/{name}` - Widget server functions
//!
//! ## API
//! - `GET /api/theme?path=` - Resolved theme
//! - `GET /api/routes` - Route table
//! - `GET /api/check-email/{email}` - Proxied email check
//! - `POST /api/client` - Proxied registration
//! - `POST /api/chat` - Relayed chat reply
//! - `POST /api/chat/sessions` - Open a chat session
//! - `GET /api/chat/sessions/{id}` - Transcript
//! - `POST /api/chat/sessions/{id}/messages` - Send a chat message
//! - `DELETE /api/chat/sessions/{id}` - Close a chat session
//! - `POST /api/chat/sessions/{id}/close` - Close on page exit (beacon)
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health/ready` - Readiness check
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use nordisk_sites::config::Config;
//! use nordisk_sites::web::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default();
//!     let state = AppState::from_config(&config)?;
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{WebError, WebResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::widgets::SERVER_FN_PREFIX;

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        // Theme and routing
        .route("/theme", get(routes::theme::resolve_theme))
        .route("/routes", get(routes::theme::list_routes))
        // Backend proxy
        .route("/check-email/:email", get(routes::client::check_email))
        .route("/client", post(routes::client::submit_client))
        // Chat
        .route("/chat", post(routes::chat::relay))
        .route("/chat/sessions", post(routes::chat::open_session))
        .route(
            "/chat/sessions/:id",
            get(routes::chat::get_session).delete(routes::chat::close_session),
        )
        .route("/chat/sessions/:id/messages", post(routes::chat::send_message))
        .route("/chat/sessions/:id/close", post(routes::chat::close_session_beacon));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .route("/static/global.css", get(routes::pages::global_css))
        .nest_service("/pkg", ServeDir::new(config.site_root.join("pkg")))
        .route(
            &format!("{}/*fn_name", SERVER_FN_PREFIX),
            post(routes::widgets::server_fn),
        )
        .route(
            "/:site/contact",
            get(routes::pages::show).post(routes::forms::contact),
        )
        .route("/:site/careers/apply", post(routes::forms::apply))
        // Every other path is matched against the route table
        .fallback(routes::pages::show)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .with_state(shared_state)
}

/// How often idle chat sessions are swept
fn sweep_interval(idle_timeout: Duration) -> Duration {
    (idle_timeout / 4).max(Duration::from_secs(1))
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), WebError> {
    let sweeper = state
        .sessions
        .spawn_sweeper(sweep_interval(state.sessions.idle_timeout()));
    let router = build_router(state, config);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Nordisk sites listening on {}", addr);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    sweeper.abort();
    served.map_err(|e| WebError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Nordisk sites shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::backend::{
        BackendError, ClientIntake, ClientSubmission, EmailCheck, EmailLookup, SubmitOutcome,
    };
    use crate::chat::{ChatBackend, ChatError, SessionsConfig};
    use crate::forms::registration::{FOLLOW_UP_RECEIVED, REGISTERED};
    use crate::pages::ContactDetails;
    use crate::site::SiteRegistry;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tower::util::ServiceExt;

    #[derive(Default)]
    struct FakeBackend {
        checks: AtomicUsize,
        submissions: Mutex<Vec<ClientSubmission>>,
    }

    impl FakeBackend {
        fn submissions(&self) -> Vec<ClientSubmission> {
            self.submissions.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EmailLookup for FakeBackend {
        async fn check_email(&self, email: &str, _source: &str) -> Result<EmailCheck, BackendError> {
            self.checks.fetch_add(1, Ordering::SeqCst);
            Ok(EmailCheck {
                exists: email == "known@example.com",
                ..EmailCheck::default()
            })
        }
    }

    #[async_trait]
    impl ClientIntake for FakeBackend {
        async fn submit_client(&self, submission: &ClientSubmission) -> Result<SubmitOutcome, BackendError> {
            self.submissions.lock().unwrap().push(submission.clone());
            Ok(SubmitOutcome {
                status: "success".to_string(),
                message: "Saved".to_string(),
                is_new_client: Some(!submission.is_follow_up()),
            })
        }
    }

    struct Echo;

    #[async_trait]
    impl ChatBackend for Echo {
        async fn reply(&self, message: &str) -> Result<String, ChatError> {
            Ok(format!("Echo: {}", message))
        }
    }

    fn state_with(backend: Arc<FakeBackend>) -> AppState {
        AppState::new(
            Arc::new(SiteRegistry::builtin()),
            ContactDetails::default(),
            backend.clone(),
            backend,
            Arc::new(Echo),
            SessionsConfig::default(),
        )
    }

    /// State over in-process fakes: `known@example.com` exists, chat echoes
    pub(crate) fn test_state() -> AppState {
        state_with(Arc::new(FakeBackend::default()))
    }

    fn create_test_app() -> (Router, Arc<FakeBackend>) {
        let backend = Arc::new(FakeBackend::default());
        let state = state_with(backend.clone());
        (build_router(state, &ServerConfig::default()), backend)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_root_redirects_to_default_brand() {
        let (app, _) = create_test_app();
        let response = app.oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/software/home");
    }

    #[tokio::test]
    async fn test_bare_brand_redirects_to_home() {
        let (app, _) = create_test_app();
        let response = app.oneshot(get_request("/guidance")).await.unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/guidance/home");
    }

    #[tokio::test]
    async fn test_itsupport_home_renders_brand_chrome() {
        let (app, _) = create_test_app();
        let response = app.oneshot(get_request("/itsupport/home")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Where Technology Meets Reliability"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"width="85""#));
        assert!(html.contains("--header-bg: cadetblue;"));

        let start = html.find("<nav").unwrap();
        let end = start + html[start..].find("</nav>").unwrap();
        let sidebar = &html[start..end];
        assert_eq!(sidebar.matches(r#"class="nav-link"#).count(), 7);

        let order: Vec<usize> = [
            "home", "itservices", "swservices", "dataservices", "contact", "careers", "about",
        ]
        .iter()
        .map(|slug| sidebar.find(&format!(r#"href="/itsupport/{}""#, slug)).unwrap())
        .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_menu_query_opens_sidebar() {
        let (app, _) = create_test_app();
        let response = app.oneshot(get_request("/software/about?menu=open")).await.unwrap();
        let html = body_text(response).await;

        assert!(html.contains("sidebar open"));
        assert!(html.contains(r#"class="nav-link active""#));
    }

    #[tokio::test]
    async fn test_unknown_path_renders_fallback_theme() {
        let (app, _) = create_test_app();
        let response = app.oneshot(get_request("/pricing")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = body_text(response).await;
        assert!(html.contains(r#"class="theme-software""#));
        assert!(html.contains("Page Not Found"));
    }

    #[tokio::test]
    async fn test_page_outside_brand_is_not_found() {
        let (app, _) = create_test_app();
        let response = app.oneshot(get_request("/guidance/careers")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_message_blocks_contact_post() {
        let (app, backend) = create_test_app();
        let response = app
            .oneshot(form_request(
                "/guidance/contact",
                "name=A+B&email=a%40b.com&message=",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let html = body_text(response).await;
        assert!(html.contains("Message is required"));
        assert!(html.contains("notice-warning"));
        assert_eq!(backend.checks.load(Ordering::SeqCst), 0);
        assert!(backend.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_valid_contact_post_composes_mail() {
        let (app, backend) = create_test_app();
        let response = app
            .oneshot(form_request(
                "/software/contact",
                "name=A+B&email=a%40b.com&message=hello&category=Consulting",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("mailto-result"));
        assert!(!html.contains(r#"method="post" action="mailto:"#));
        assert!(html.contains("notice-success"));
        assert!(html.contains("mailto:customercare@nordisksupport.com"));
        assert!(backend.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_itsupport_registration_posts_to_backend() {
        let (app, backend) = create_test_app();
        let response = app
            .oneshot(form_request(
                "/itsupport/contact",
                "clientfname=Ann&clientlname=Lee&email=ann%40example.com&countrycode=%2B45&mobile=12345678&query=Printer+is+broken&mode=full",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains(REGISTERED));
        assert_eq!(backend.checks.load(Ordering::SeqCst), 0);

        let submissions = backend.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].website_source, "itsupport");
        assert_eq!(submissions[0].clientfname.as_deref(), Some("Ann"));
    }

    #[tokio::test]
    async fn test_itsupport_follow_up_is_confirmed_then_sent_short() {
        let (app, backend) = create_test_app();
        let response = app
            .oneshot(form_request(
                "/itsupport/contact",
                "email=known%40example.com&query=Another+question&mode=follow_up",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains(FOLLOW_UP_RECEIVED));
        assert_eq!(backend.checks.load(Ordering::SeqCst), 1);

        let submissions = backend.submissions();
        assert_eq!(submissions.len(), 1);
        assert!(submissions[0].is_follow_up());
    }

    #[tokio::test]
    async fn test_unconfirmed_follow_up_requires_full_fields() {
        let (app, backend) = create_test_app();
        let response = app
            .oneshot(form_request(
                "/itsupport/contact",
                "email=new%40example.com&query=Another+question&mode=follow_up",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let html = body_text(response).await;
        assert!(html.contains("First name is required"));
        assert!(backend.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_application_requires_consent() {
        let (app, _) = create_test_app();
        let response = app
            .oneshot(form_request(
                "/itsupport/careers/apply",
                "position_id=2&full_name=Ann+Lee&email=ann%40example.com&phone=12345678&cover_letter=Hello",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let html = body_text(response).await;
        assert!(html.contains("GDPR"));
        assert!(!html.contains("mailto-result"));
    }

    #[tokio::test]
    async fn test_application_with_consent_composes_mail() {
        let (app, _) = create_test_app();
        let response = app
            .oneshot(form_request(
                "/itsupport/careers/apply",
                "position_id=2&full_name=Ann+Lee&email=ann%40example.com&phone=12345678&cover_letter=Hello&consent=on",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("mailto-result"));
        assert!(html.contains("mailto:careers@nordisksupport.com"));
    }

    #[tokio::test]
    async fn test_apply_outside_careers_brand_is_not_found() {
        let (app, _) = create_test_app();
        let response = app
            .oneshot(form_request("/software/careers/apply", "full_name=x"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_theme_endpoint() {
        let (app, _) = create_test_app();
        let response = app
            .oneshot(get_request("/api/theme?path=/flowsupport/services"))
            .await
            .unwrap();
        let json = body_json(response).await;

        assert_eq!(json["key"], "flowsupport");
        assert_eq!(json["matched"], true);
        assert_eq!(json["tokens"]["primary"], "#0D9488");
        assert_eq!(json["nav_links"][1]["path"], "/flowsupport/services");
    }

    #[tokio::test]
    async fn test_routes_endpoint() {
        let (app, _) = create_test_app();
        let response = app.oneshot(get_request("/api/routes")).await.unwrap();
        let json = body_json(response).await;

        assert_eq!(json["root_redirect"], "/software/home");
        let paths: Vec<&str> = json["routes"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|r| r["path"].as_str())
            .collect();
        assert!(paths.contains(&"/software/webdevelop"));
        assert!(paths.contains(&"/guidance/require"));
        assert!(paths.contains(&"/itsupport/careers"));
    }

    #[tokio::test]
    async fn test_check_email_proxy() {
        let (app, backend) = create_test_app();
        let response = app
            .oneshot(get_request(
                "/api/check-email/known%40example.com?website_source=itsupport",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["exists"], true);
        assert_eq!(backend.checks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_client_endpoint_rejects_invalid_payload() {
        let (app, backend) = create_test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/client",
                r#"{"email": "not-an-email", "query": "hi", "website_source": "itsupport"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "FORM_INVALID");
        assert_eq!(json["error"]["fields"]["email"], "Enter a valid email address");
        assert!(backend.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_client_endpoint_forwards_follow_up() {
        let (app, backend) = create_test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/client",
                r#"{"email": "known@example.com", "query": "Another question", "website_source": "itsupport"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(backend.submissions().len(), 1);
    }

    #[tokio::test]
    async fn test_chat_relay() {
        let (app, _) = create_test_app();
        let response = app
            .oneshot(json_request("POST", "/api/chat", r#"{"message": " hi "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Echo: hi");
    }

    #[tokio::test]
    async fn test_chat_session_lifecycle() {
        let (app, _) = create_test_app();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/chat/sessions", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let opened = body_json(response).await;
        let id = opened["id"].as_str().unwrap().to_string();
        assert_eq!(opened["messages"].as_array().unwrap().len(), 1);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/chat/sessions/{}/messages", id),
                r#"{"message": "hi"}"#,
            ))
            .await
            .unwrap();
        let sent = body_json(response).await;
        assert_eq!(sent["accepted"], true);
        assert_eq!(sent["transcript"]["messages"][2]["text"], "Echo: hi");
        assert_eq!(sent["transcript"]["messages"][2]["sender"], "bot");

        let response = app
            .clone()
            .oneshot(json_request("DELETE", &format!("/api/chat/sessions/{}", id), ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(get_request(&format!("/api/chat/sessions/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_beacon_closes_session_and_tolerates_repeats() {
        let state = test_state();
        let sessions = Arc::clone(&state.sessions);
        let app = build_router(state, &ServerConfig::default());
        let id = sessions.open().await.unwrap().id;

        let uri = format!("/api/chat/sessions/{}/close", id);
        let response = app.clone().oneshot(json_request("POST", &uri, "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(sessions.is_empty().await);

        let response = app.oneshot(json_request("POST", &uri, "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_email_check_server_fn() {
        use leptos::server_fn::ServerFn;

        let (app, backend) = create_test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(crate::widgets::api::CheckEmailStatus::PATH)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("email=known%40example.com&website_source=itsupport"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["state"], "exists");
        assert_eq!(backend.checks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sweep_interval() {
        assert_eq!(sweep_interval(Duration::from_secs(900)), Duration::from_secs(225));
        assert_eq!(sweep_interval(Duration::from_millis(100)), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_global_css() {
        let (app, _) = create_test_app();
        let response = app.oneshot(get_request("/static/global.css")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css; charset=utf-8");
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let (app, _) = create_test_app();

        let response = app.clone().oneshot(get_request("/health/live")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.clone().oneshot(get_request("/health/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_request("/health")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["sites"], 4);
    }
}
