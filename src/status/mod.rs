mod responses;

use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;

use self::responses::*;

pub const SERVICE_NAME: &str = "comments-api";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(health).service(docs);
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        service: SERVICE_NAME,
    })
}

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok().json(HomeResponse {
        message: "Comments API",
        version: VERSION,
        endpoints: Endpoints {
            health: "/health",
            get_comments: "GET /api/comments",
            create_comment: "POST /api/comments",
            get_comment: "GET /api/comments/{id}",
            delete_comment: "DELETE /api/comments/{id}",
        },
        documentation: "/api/docs",
    })
}

#[get("/api/docs")]
async fn docs() -> impl Responder {
    let endpoints = vec![
        DocEndpoint::new("GET", "/health", "Health check endpoint"),
        DocEndpoint::new("GET", "/", "Service information"),
        DocEndpoint::new("GET", "/api/comments", "Get all comments, most recent first"),
        DocEndpoint {
            body: Some(DocBody {
                author: "string (required)",
                content: "string (required)",
            }),
            ..DocEndpoint::new("POST", "/api/comments", "Create a new comment")
        },
        DocEndpoint::new("GET", "/api/comments/{id}", "Get a specific comment by ID"),
        DocEndpoint::new("DELETE", "/api/comments/{id}", "Delete a comment by ID"),
    ];

    HttpResponse::Ok().json(DocsResponse {
        title: "Comments API Documentation",
        version: VERSION,
        endpoints,
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_rt::test]
    async fn health_reports_service() {
        let mut app = test::init_service(App::new().configure(super::config)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], super::SERVICE_NAME);
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[actix_rt::test]
    async fn home_lists_endpoints() {
        let mut app = test::init_service(App::new().configure(super::config)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Comments API");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["endpoints"]["create_comment"], "POST /api/comments");
        assert_eq!(body["endpoints"]["delete_comment"], "DELETE /api/comments/{id}");
        assert_eq!(body["documentation"], "/api/docs");
    }

    #[actix_rt::test]
    async fn docs_describe_create_body() {
        let mut app = test::init_service(App::new().configure(super::config)).await;
        let req = test::TestRequest::get().uri("/api/docs").to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        let endpoints = body["endpoints"].as_array().unwrap();
        assert_eq!(endpoints.len(), 6);
        let create = endpoints
            .iter()
            .find(|e| e["method"] == "POST")
            .unwrap();
        assert_eq!(create["body"]["author"], "string (required)");
        assert!(endpoints
            .iter()
            .filter(|e| e["method"] != "POST")
            .all(|e| e.get("body").is_none()));
    }
}
