//! HTTP server for the portfolio site.
//!
//! Routes are registered by [`configure`]; [`error_pages`] swaps the plain
//! text bodies actix-web produces for 404 and 500 responses with the site's
//! HTML pages. Application data is a [`Portfolio`] and a [`MessageLog`],
//! both wrapped in `web::Data` and shared across workers.

pub mod handlers;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{self, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers, Logger};
use actix_web::{error, web, App, HttpResponse, HttpServer};
use maud::Markup;
use tracing::info;

use crate::catalog::Portfolio;
use crate::config::Config;
use crate::error::Result;
use crate::pages;
use crate::storage::MessageLog;

pub use handlers::SubmissionResponse;

/// Register every route of the site.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::home))
        .route("/about", web::get().to(handlers::about))
        .route("/projects", web::get().to(handlers::projects))
        .route("/project/{id}", web::get().to(handlers::project_detail))
        .route("/contact", web::get().to(handlers::contact))
        .route("/achievements", web::get().to(handlers::achievements))
        .route("/api/stats", web::get().to(handlers::stats))
        .service(
            web::resource("/submit_contact")
                .app_data(submission_json_config())
                .route(web::post().to(handlers::submit_contact)),
        )
        .default_service(web::to(handlers::not_found));
}

/// Malformed submissions get the same JSON shape as every other reply.
fn submission_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(SubmissionResponse::invalid());
        error::InternalError::from_response(err, response).into()
    })
}

/// Middleware rendering the HTML error pages.
#[must_use]
pub fn error_pages<B: MessageBody + 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new()
        .handler(StatusCode::NOT_FOUND, |res| {
            replace_plain_body(res, pages::render_not_found)
        })
        .handler(StatusCode::INTERNAL_SERVER_ERROR, |res| {
            replace_plain_body(res, pages::render_server_error)
        })
}

/// Whether a handler already produced a body meant for the client.
fn is_rendered<B>(res: &HttpResponse<B>) -> bool {
    res.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html") || v.starts_with("application/json"))
}

fn replace_plain_body<B: MessageBody + 'static>(
    res: ServiceResponse<B>,
    render: fn(&str) -> Markup,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    if is_rendered(res.response()) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let owner = res
        .request()
        .app_data::<web::Data<Portfolio>>()
        .map_or_else(|| "Portfolio".to_string(), |p| p.owner.clone());

    let (req, res) = res.into_parts();
    let mut res = res.set_body(render(&owner).into_string());
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    let res = ServiceResponse::new(req, res)
        .map_into_boxed_body()
        .map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}

/// Run the HTTP server until it is shut down.
///
/// # Errors
///
/// Returns an error if the server cannot bind to the configured address.
pub async fn run(config: &Config, portfolio: Portfolio, log: MessageLog) -> Result<()> {
    let portfolio = web::Data::new(portfolio);
    let log = web::Data::new(log);
    let (host, port) = config.bind_address();

    info!(
        "Serving {} projects, messages stored in {}",
        portfolio.projects.len(),
        log.path().display()
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(portfolio.clone())
            .app_data(log.clone())
            .wrap(error_pages())
            .wrap(Logger::default())
            .configure(configure)
    });
    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    let server = server.bind((host.as_str(), port))?;
    info!("Listening on http://{host}:{port}");
    server.run().await?;

    info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::ContentType;
    use actix_web::test;
    use std::path::Path;

    use crate::config::SiteConfig;
    use crate::logging::init_test_logging;

    fn portfolio() -> web::Data<Portfolio> {
        web::Data::new(Portfolio::builtin(&SiteConfig::default()))
    }

    fn message_log(path: &Path) -> web::Data<MessageLog> {
        web::Data::new(MessageLog::open(path))
    }

    macro_rules! test_app {
        ($log:expr) => {
            test_app!($log, portfolio())
        };
        ($log:expr, $portfolio:expr) => {
            test::init_service(
                App::new()
                    .app_data($portfolio)
                    .app_data($log.clone())
                    .wrap(error_pages())
                    .configure(configure),
            )
            .await
        };
    }

    fn body_text(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn test_pages_render() {
        let dir = tempfile::tempdir().unwrap();
        let log = message_log(&dir.path().join("messages.json"));
        let app = test_app!(log);

        for path in ["/", "/about", "/projects", "/contact", "/achievements", "/project/3"] {
            let req = test::TestRequest::get().uri(path).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "GET {path}");
            let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
            assert!(content_type.to_str().unwrap().starts_with("text/html"));
        }
    }

    #[actix_web::test]
    async fn test_projects_category_filter() {
        let dir = tempfile::tempdir().unwrap();
        let log = message_log(&dir.path().join("messages.json"));
        let app = test_app!(log);

        let req = test::TestRequest::get()
            .uri("/projects?category=Automation")
            .to_request();
        let body = body_text(&test::call_and_read_body(&app, req).await);
        assert!(body.contains("Automated Report Generator"));
        assert!(!body.contains("SwasthaAI-Agent"));

        let req = test::TestRequest::get()
            .uri("/projects?category=all")
            .to_request();
        let body = body_text(&test::call_and_read_body(&app, req).await);
        assert!(body.contains("Automated Report Generator"));
        assert!(body.contains("SwasthaAI-Agent"));
    }

    #[actix_web::test]
    async fn test_every_category_link_selects_its_projects() {
        let dir = tempfile::tempdir().unwrap();
        let log = message_log(&dir.path().join("messages.json"));
        let mut custom = Portfolio::builtin(&SiteConfig::default());
        custom.projects[0].category = "R&D + Tools".to_string();
        let title = custom.projects[0].title.clone();
        let app = test_app!(log, web::Data::new(custom));

        let req = test::TestRequest::get().uri("/projects").to_request();
        let body = body_text(&test::call_and_read_body(&app, req).await);
        let links: Vec<&str> = body
            .split("href=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .filter(|href| href.starts_with("/projects?category="))
            .collect();
        assert_eq!(links.len(), 5, "all + four categories: {links:?}");

        for href in links {
            let req = test::TestRequest::get().uri(href).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "GET {href}");
            let page = body_text(&test::read_body(resp).await);
            assert!(!page.contains("No projects in this category yet."), "GET {href}");
            if href.contains("R%26D") {
                assert!(page.contains(&title));
                assert!(page.contains(r#"class="selected">R&amp;D + Tools</a>"#));
            }
        }
    }

    #[actix_web::test]
    async fn test_unknown_project_redirects() {
        let dir = tempfile::tempdir().unwrap();
        let log = message_log(&dir.path().join("messages.json"));
        let app = test_app!(log);

        let req = test::TestRequest::get().uri("/project/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/projects");
    }

    #[actix_web::test]
    async fn test_non_numeric_project_id_gets_html_404() {
        let dir = tempfile::tempdir().unwrap();
        let log = message_log(&dir.path().join("messages.json"));
        let app = test_app!(log);

        let req = test::TestRequest::get().uri("/project/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = body_text(&test::read_body(resp).await);
        assert!(body.contains("<h1>404</h1>"));
    }

    #[actix_web::test]
    async fn test_unknown_route_gets_html_404() {
        let dir = tempfile::tempdir().unwrap();
        let log = message_log(&dir.path().join("messages.json"));
        let app = test_app!(log);

        let req = test::TestRequest::get().uri("/no/such/page").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = body_text(&test::read_body(resp).await);
        assert!(body.contains("does not exist"));
    }

    #[actix_web::test]
    async fn test_stats_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let log = message_log(&dir.path().join("messages.json"));
        let app = test_app!(log);

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let stats: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            stats,
            serde_json::json!({
                "projects_completed": 5,
                "skills_mastered": 25,
                "years_experience": 2,
                "certifications": 5
            })
        );
    }

    #[actix_web::test]
    async fn test_submit_contact_stores_message() {
        let dir = tempfile::tempdir().unwrap();
        let log = message_log(&dir.path().join("messages.json"));
        let app = test_app!(log);

        let req = test::TestRequest::post()
            .uri("/submit_contact")
            .set_json(serde_json::json!({
                "name": "Ada",
                "email": "a@x.com",
                "subject": "Hi",
                "message": "Hello"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: SubmissionResponse = test::read_body_json(resp).await;
        assert_eq!(body, SubmissionResponse::sent());

        let stored = log.load_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name.as_deref(), Some("Ada"));
        assert_eq!(stored[0].email.as_deref(), Some("a@x.com"));
        assert_eq!(stored[0].subject.as_deref(), Some("Hi"));
        assert_eq!(stored[0].message.as_deref(), Some("Hello"));
        assert!(!stored[0].timestamp.is_empty());
    }

    #[actix_web::test]
    async fn test_submit_contact_ignores_client_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let log = message_log(&dir.path().join("messages.json"));
        let app = test_app!(log);

        let req = test::TestRequest::post()
            .uri("/submit_contact")
            .set_json(serde_json::json!({"message": "hey", "timestamp": "1999-12-31 23:59:59"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let stored = log.load_all().unwrap();
        assert_ne!(stored[0].timestamp, "1999-12-31 23:59:59");
        assert!(stored[0].name.is_none());
    }

    #[actix_web::test]
    async fn test_submit_contact_malformed_body() {
        let dir = tempfile::tempdir().unwrap();
        let log = message_log(&dir.path().join("messages.json"));
        let app = test_app!(log);

        let req = test::TestRequest::post()
            .uri("/submit_contact")
            .insert_header(ContentType::json())
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: SubmissionResponse = test::read_body_json(resp).await;
        assert_eq!(body, SubmissionResponse::invalid());
        assert_eq!(log.count().unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_submit_contact_failure_hides_details() {
        init_test_logging();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.json");
        std::fs::write(&path, "definitely not json").unwrap();
        let log = message_log(&path);
        let app = test_app!(log);

        let req = test::TestRequest::post()
            .uri("/submit_contact")
            .set_json(serde_json::json!({"name": "Ada"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: SubmissionResponse = test::read_body_json(resp).await;
        assert_eq!(body, SubmissionResponse::failed());
        assert!(!body.message.contains("messages.json"));

        // The corrupt store is left for an operator to inspect.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "definitely not json");
    }

    #[actix_web::test]
    async fn test_submissions_keep_arrival_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = message_log(&dir.path().join("messages.json"));
        let app = test_app!(log);

        for name in ["first", "second"] {
            let req = test::TestRequest::post()
                .uri("/submit_contact")
                .set_json(serde_json::json!({"name": name}))
                .to_request();
            assert!(test::call_service(&app, req).await.status().is_success());
        }

        let names: Vec<_> = log
            .load_all()
            .unwrap()
            .into_iter()
            .filter_map(|m| m.name)
            .collect();
        assert_eq!(names, ["first", "second"]);
    }
}
