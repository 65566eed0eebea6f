//! Shared helpers for the HTTP integration tests.
//!
//! [`RemoteService`] stands in for the profile search API on a random local
//! port; the app under test talks to it through the real reqwest client.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::cookie::Key;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use serde_json::{Value, json};

use profile_search::api::HttpProfileApi;

/// Canned responses of the remote service; `None` answers `500`.
#[derive(Clone, Default)]
pub struct RemoteService {
    pub advanced: Option<Value>,
    pub list: Option<Value>,
    pub categories: Option<Value>,
    pub import: Option<Value>,
    pub export: Option<String>,
    pub stats: Option<Value>,
    pub hits: Arc<Mutex<Vec<String>>>,
}

impl RemoteService {
    /// Requests received so far as `METHOD path?query`.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    /// Starts the service and returns its base URL.
    pub fn start(&self) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        let remote = self.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(remote.clone()))
                .default_service(web::to(respond))
        })
        .workers(1)
        .listen(listener)
        .unwrap()
        .run();
        actix_web::rt::spawn(server);

        format!("http://{address}")
    }
}

async fn respond(
    req: HttpRequest,
    _body: web::Bytes,
    remote: web::Data<RemoteService>,
) -> HttpResponse {
    let query = req.query_string();
    let hit = if query.is_empty() {
        format!("{} {}", req.method(), req.path())
    } else {
        format!("{} {}?{query}", req.method(), req.path())
    };
    remote.hits.lock().unwrap().push(hit);

    let json_body = match req.path() {
        "/api/profiles/search-adv" => remote.advanced.clone(),
        "/api/profiles" => remote.list.clone(),
        "/api/profiles/by-category" => remote.categories.clone(),
        "/api/profiles/import" => remote.import.clone(),
        "/api/profiles/stats" => remote.stats.clone(),
        "/api/profiles/export-csv" => {
            return match &remote.export {
                Some(csv) => HttpResponse::Ok().content_type("text/csv").body(csv.clone()),
                None => HttpResponse::InternalServerError().finish(),
            };
        }
        _ => return HttpResponse::NotFound().finish(),
    };

    match json_body {
        Some(body) => HttpResponse::Ok().json(body),
        None => HttpResponse::InternalServerError().finish(),
    }
}

pub fn profile(name: &str) -> Value {
    json!({
        "_id": name.to_lowercase(),
        "name": name,
        "current_role": "Engineer",
        "current_company": "Acme",
        "location": "Berlin",
        "category": "Backend",
        "skills": ["Rust"],
        "profile_url": format!("https://example.com/in/{}", name.to_lowercase()),
    })
}

pub fn profiles(count: usize) -> Vec<Value> {
    (0..count).map(|i| profile(&format!("Profile{i}"))).collect()
}

/// The application under test, wired to the remote at `base_url`.
pub fn app(
    base_url: String,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = HttpProfileApi::new(&base_url, Duration::from_secs(5)).unwrap();
    let tera = profile_search::load_templates("templates/**/*").unwrap();
    let message_store = CookieMessageStore::builder(Key::generate()).build();

    App::new()
        .wrap(FlashMessagesFramework::builder(message_store).build())
        .app_data(web::Data::new(tera))
        .app_data(web::Data::new(api))
        .configure(profile_search::configure)
}

/// Builds a `multipart/form-data` body from `(name, file name, content)` parts.
pub fn multipart(parts: &[(&str, Option<&str>, &str)]) -> (String, String) {
    let boundary = "----profile-search-test-boundary";
    let mut body = String::new();
    for (name, file_name, content) in parts {
        body.push_str(&format!("--{boundary}\r\n"));
        match file_name {
            Some(file_name) => {
                body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n"
                ));
                body.push_str("Content-Type: text/csv\r\n\r\n");
            }
            None => {
                body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                ));
            }
        }
        body.push_str(content);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    (format!("multipart/form-data; boundary={boundary}"), body)
}
