//! Request handlers.

use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};
use maud::Markup;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::catalog::{Portfolio, ALL_CATEGORIES};
use crate::message::ContactSubmission;
use crate::pages;
use crate::storage::MessageLog;

/// Reply sent to a visitor after a successful submission.
pub const SENT_MESSAGE: &str = "Message sent successfully!";

/// Reply sent when a submission could not be stored. Internal details stay
/// in the server log.
pub const FAILED_MESSAGE: &str = "Sorry, your message could not be sent. Please try again later.";

/// Reply sent when the request body is not a usable submission.
pub const INVALID_MESSAGE: &str = "Invalid submission: expected a JSON object of text fields.";

/// Body of every `/submit_contact` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    /// Whether the message was stored.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

impl SubmissionResponse {
    fn new(success: bool, message: &str) -> Self {
        Self {
            success,
            message: message.to_string(),
        }
    }

    /// The message was stored.
    #[must_use]
    pub fn sent() -> Self {
        Self::new(true, SENT_MESSAGE)
    }

    /// The message could not be stored.
    #[must_use]
    pub fn failed() -> Self {
        Self::new(false, FAILED_MESSAGE)
    }

    /// The request body was rejected.
    #[must_use]
    pub fn invalid() -> Self {
        Self::new(false, INVALID_MESSAGE)
    }
}

/// Query string of `/projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    /// Category to show; missing means all.
    pub category: Option<String>,
}

fn html_page(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(markup.into_string())
}

/// `GET /`
pub async fn home(portfolio: web::Data<Portfolio>) -> HttpResponse {
    html_page(pages::render_home(&portfolio))
}

/// `GET /about`
pub async fn about(portfolio: web::Data<Portfolio>) -> HttpResponse {
    html_page(pages::render_about(&portfolio))
}

/// `GET /projects?category=...`
pub async fn projects(
    portfolio: web::Data<Portfolio>,
    query: web::Query<ProjectsQuery>,
) -> HttpResponse {
    let category = query.category.as_deref().unwrap_or(ALL_CATEGORIES);
    html_page(pages::render_projects(&portfolio, category))
}

/// `GET /project/{id}`; unknown ids redirect to the project list.
pub async fn project_detail(portfolio: web::Data<Portfolio>, id: web::Path<u32>) -> HttpResponse {
    let id = id.into_inner();
    match portfolio.project(id) {
        Some(project) => html_page(pages::render_project_detail(&portfolio, project)),
        None => {
            debug!("No project with id {id}, redirecting");
            HttpResponse::Found()
                .insert_header((header::LOCATION, "/projects"))
                .finish()
        }
    }
}

/// `GET /contact`
pub async fn contact(portfolio: web::Data<Portfolio>) -> HttpResponse {
    html_page(pages::render_contact(&portfolio))
}

/// `GET /achievements`
pub async fn achievements(portfolio: web::Data<Portfolio>) -> HttpResponse {
    html_page(pages::render_achievements(&portfolio))
}

/// `GET /api/stats`
pub async fn stats(portfolio: web::Data<Portfolio>) -> HttpResponse {
    HttpResponse::Ok().json(portfolio.stats())
}

/// `POST /submit_contact`
///
/// The log does blocking file I/O, so the append runs on the blocking pool.
pub async fn submit_contact(
    log: web::Data<MessageLog>,
    body: web::Json<ContactSubmission>,
) -> HttpResponse {
    let log = log.into_inner();
    let submission = body.into_inner();

    match tokio::task::spawn_blocking(move || log.append(submission)).await {
        Ok(Ok(_)) => HttpResponse::Ok().json(SubmissionResponse::sent()),
        Ok(Err(err)) => {
            error!(error = %err, "Failed to store contact message");
            HttpResponse::InternalServerError().json(SubmissionResponse::failed())
        }
        Err(err) => {
            error!(error = %err, "Contact message task did not complete");
            HttpResponse::InternalServerError().json(SubmissionResponse::failed())
        }
    }
}

/// Fallback for unmatched routes.
pub async fn not_found(portfolio: web::Data<Portfolio>) -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(pages::render_not_found(&portfolio.owner).into_string())
}
