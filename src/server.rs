use std::io;
use std::sync::{Arc, Mutex};

use ntex::http::header;
use ntex::web;
use ntex::web::HttpRequest;
use serde::{Deserialize, Serialize};
use spdlog::{error, info};

use crate::config::Config;
use crate::gate::SessionGate;
use crate::generator::generate;
use crate::query_string::QueryString;
use crate::session::{Session, SessionKeys, DEFAULT_GUEST_NAME};
use crate::store::PostStore;

const ANONYMOUS_AUTHOR: &str = "Anonymous User";

struct AppState {
    store: PostStore,
    keys: SessionKeys,
    guest_name: String,
}

#[derive(Serialize)]
pub(crate) struct ErrorBody<'a> {
    pub error: &'a str,
}

#[derive(Serialize)]
struct SuccessBody {
    success: bool,
}

#[derive(Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    topic: String,
}

#[derive(Deserialize)]
struct LoginRequest {
    name: Option<String>,
}

#[derive(Serialize)]
struct LoginResponse {
    token: String,
    name: String,
}

#[derive(Serialize)]
struct SessionBody {
    authenticated: bool,
    name: Option<String>,
}

fn session_of(req: &HttpRequest, keys: &SessionKeys) -> Session {
    let authorization = req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    keys.session_from(authorization)
}

fn unauthorized() -> web::HttpResponse {
    web::HttpResponse::Unauthorized().json(&ErrorBody { error: "Authentication required" })
}

fn bad_request(message: &str) -> web::HttpResponse {
    web::HttpResponse::BadRequest().json(&ErrorBody { error: message })
}

fn not_found(message: &str) -> web::HttpResponse {
    web::HttpResponse::NotFound().json(&ErrorBody { error: message })
}

#[web::get("/api/posts")]
async fn list_posts(state: web::types::State<Arc<Mutex<AppState>>>) -> web::HttpResponse {
    let state = state.lock().unwrap();
    web::HttpResponse::Ok().json(&state.store.list())
}

#[web::get("/api/posts/{id}")]
async fn get_post(path: web::types::Path<String>, state: web::types::State<Arc<Mutex<AppState>>>) -> web::HttpResponse {
    let state = state.lock().unwrap();
    let id = path.into_inner();

    match state.store.get(&id) {
        Some(post) => web::HttpResponse::Ok().json(post),
        None => not_found("Post not found"),
    }
}

#[web::post("/api/posts")]
async fn create_post(
    req: HttpRequest,
    body: web::types::Json<GenerateRequest>,
    state: web::types::State<Arc<Mutex<AppState>>>) -> web::HttpResponse {
    let mut state = state.lock().unwrap();

    // The gate already checked, but mutations re-check their own session
    let session = session_of(&req, &state.keys);
    if !session.is_authenticated() {
        return unauthorized();
    }

    let topic = body.topic.trim();
    if topic.is_empty() {
        return bad_request("Topic is required");
    }

    let author = session.display_name().unwrap_or(ANONYMOUS_AUTHOR).to_string();
    let post = generate(topic, &author, &mut rand::rng());
    info!("Created post {} ({}) by {}", post.id, post.title, post.author);

    let response = web::HttpResponse::Ok().json(&post);
    state.store.insert(post);
    response
}

#[web::delete("/api/posts")]
async fn delete_post(req: HttpRequest, state: web::types::State<Arc<Mutex<AppState>>>) -> web::HttpResponse {
    let mut state = state.lock().unwrap();

    let session = session_of(&req, &state.keys);
    if !session.is_authenticated() {
        return unauthorized();
    }

    let id = req.uri().query()
        .map(QueryString::from)
        .and_then(|qs| qs.get("id").map(str::to_string));

    let id = match id {
        Some(id) => id,
        None => return bad_request("Post ID is required"),
    };

    if state.store.remove(&id) {
        info!("Deleted post {}", id);
        web::HttpResponse::Ok().json(&SuccessBody { success: true })
    } else {
        not_found("Post not found")
    }
}

#[web::post("/api/auth/login")]
async fn login(body: web::types::Json<LoginRequest>, state: web::types::State<Arc<Mutex<AppState>>>) -> web::HttpResponse {
    let state = state.lock().unwrap();

    // Demo credential provider: every login attempt is authorized
    let name = body.name.clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| state.guest_name.clone());

    match state.keys.issue(&name) {
        Ok(token) => {
            info!("Issued session for {}", name);
            web::HttpResponse::Ok().json(&LoginResponse { token, name })
        }
        Err(e) => {
            error!("Error issuing session token: {}", e);
            web::HttpResponse::InternalServerError()
                .json(&ErrorBody { error: "Failed to create session" })
        }
    }
}

#[web::get("/api/auth/session")]
async fn session_info(req: HttpRequest, state: web::types::State<Arc<Mutex<AppState>>>) -> web::HttpResponse {
    let state = state.lock().unwrap();
    let session = session_of(&req, &state.keys);

    web::HttpResponse::Ok().json(&SessionBody {
        authenticated: session.is_authenticated(),
        name: session.display_name().map(str::to_string),
    })
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let keys = SessionKeys::new(&config.auth.secret, config.auth.session_hours);
    let guest_name = config.auth.guest_name.clone()
        .unwrap_or_else(|| DEFAULT_GUEST_NAME.to_string());

    let app_state = Arc::new(Mutex::new(AppState {
        store: PostStore::seeded(),
        keys: keys.clone(),
        guest_name,
    }));

    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .wrap(SessionGate::new(keys.clone()))
            .service(list_posts)
            .service(get_post)
            .service(create_post)
            .service(delete_post)
            .service(login)
            .service(session_info)
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
