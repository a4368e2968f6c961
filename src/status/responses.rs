use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
}

#[derive(Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub get_comments: &'static str,
    pub create_comment: &'static str,
    pub get_comment: &'static str,
    pub delete_comment: &'static str,
}

#[derive(Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
    pub documentation: &'static str,
}

#[derive(Serialize)]
pub struct DocBody {
    pub author: &'static str,
    pub content: &'static str,
}

#[derive(Serialize)]
pub struct DocEndpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<DocBody>,
}

impl DocEndpoint {
    pub fn new(method: &'static str, path: &'static str, description: &'static str) -> Self {
        Self {
            method,
            path,
            description,
            body: None,
        }
    }
}

#[derive(Serialize)]
pub struct DocsResponse {
    pub title: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<DocEndpoint>,
}
