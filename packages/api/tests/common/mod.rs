//! In-process stand-in for the Smart Contact Manager REST API.
//!
//! Serves the same routes under `/api` on `127.0.0.1:0`, keeps everything in
//! memory, and records each request's method, path and `Authorization` header
//! so tests can assert on what the client actually sent.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use api::{ApiClient, AuthResponse, ClientConfig, Contact, ContactDraft, Role, UserProfile};
use axum::extract::{Multipart, Path, Query, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use store::{MemoryStore, SessionStore};

type Reply<T> = Result<Json<T>, (StatusCode, Json<Value>)>;

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

#[derive(Clone, Debug)]
struct FakeUser {
    id: i64,
    name: String,
    email: String,
    password: String,
    role: Role,
    image_path: Option<String>,
}

#[derive(Default)]
struct Inner {
    users: Vec<FakeUser>,
    contacts: BTreeMap<i64, (i64, Contact)>,
    next_user_id: i64,
    next_contact_id: i64,
    requests: Vec<Recorded>,
    uploads: usize,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<Inner>>,
}

impl FakeApi {
    /// Start the server and return it with its base URL.
    pub async fn spawn() -> (Self, String) {
        let state = FakeApi::default();
        let app = router(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (state, format!("http://{addr}/api"))
    }

    /// Seed an account directly, bypassing the HTTP surface.
    pub fn add_user(&self, name: &str, email: &str, password: &str, role: Role) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        inner.next_user_id += 1;
        let id = inner.next_user_id;
        inner.users.push(FakeUser {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
            image_path: None,
        });
        id
    }

    pub fn add_contact(&self, owner: i64, name: &str) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        inner.next_contact_id += 1;
        let id = inner.next_contact_id;
        inner.contacts.insert(
            id,
            (
                owner,
                Contact {
                    id,
                    name: name.to_string(),
                    email: None,
                    phone: None,
                    description: None,
                },
            ),
        );
        id
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    pub fn upload_count(&self) -> usize {
        self.inner.lock().unwrap().uploads
    }

    pub fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }
}

/// A client with a fresh in-memory session store.
pub fn client(base_url: &str) -> ApiClient {
    ApiClient::new(&ClientConfig::new(base_url), SessionStore::new(MemoryStore::new()))
}

/// Log in as a seeded account and persist the session, the way the login
/// page does.
pub async fn signed_in(base_url: &str, email: &str, password: &str) -> ApiClient {
    let client = client(base_url);
    let resp = client.login(email, password).await.unwrap();
    client.session().save(&resp.into_session());
    client
}

fn router(state: FakeApi) -> Router {
    let api = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/admin/register", post(admin_register))
        .route("/auth/admin/login", post(admin_login))
        .route("/contacts", get(list_contacts).post(create_contact))
        .route("/contacts/search", get(search_contacts))
        .route("/contacts/{id}", put(update_contact).delete(delete_contact))
        .route("/user/profile", get(profile))
        .route("/user/profile/image", post(upload_image))
        .route("/user/images/{file}", get(image))
        .route("/admin/users", get(all_users))
        .route("/admin/users/{id}", delete(delete_user))
        .route("/admin/users/{id}/contacts", get(user_contacts))
        .route("/health", get(health));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

async fn record(State(state): State<FakeApi>, req: Request, next: Next) -> Response {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.inner.lock().unwrap().requests.push(Recorded {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        authorization,
    });
    next.run(req).await
}

fn fail(status: StatusCode, error: &str, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": error, "message": message })))
}

fn bad_request(message: &str) -> (StatusCode, Json<Value>) {
    fail(StatusCode::BAD_REQUEST, "Bad Request", message)
}

fn caller(state: &FakeApi, headers: &HeaderMap) -> Result<FakeUser, (StatusCode, Json<Value>)> {
    let unauthorized = || {
        fail(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "Invalid or missing authentication token",
        )
    };
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(unauthorized)?;
    let id: i64 = token
        .strip_prefix("token-")
        .and_then(|id| id.parse().ok())
        .ok_or_else(unauthorized)?;
    let inner = state.inner.lock().unwrap();
    inner
        .users
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .ok_or_else(unauthorized)
}

fn admin(state: &FakeApi, headers: &HeaderMap) -> Result<FakeUser, (StatusCode, Json<Value>)> {
    let user = caller(state, headers)?;
    if !user.role.is_admin() {
        return Err(fail(
            StatusCode::FORBIDDEN,
            "Access Denied",
            "You do not have permission to access this resource",
        ));
    }
    Ok(user)
}

fn auth_response(user: &FakeUser) -> AuthResponse {
    AuthResponse {
        token: format!("token-{}", user.id),
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role,
        user_id: user.id,
        image_path: user.image_path.clone(),
    }
}

fn profile_of(user: &FakeUser, contacts: Option<Vec<Contact>>) -> UserProfile {
    UserProfile {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role,
        image_path: user.image_path.clone(),
        contacts,
    }
}

#[derive(Deserialize)]
struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

fn do_register(state: &FakeApi, body: RegisterBody, role: Role) -> Reply<AuthResponse> {
    if body.password.len() < 6 {
        return Err(bad_request("Password must be at least 6 characters"));
    }
    let exists = state
        .inner
        .lock()
        .unwrap()
        .users
        .iter()
        .any(|u| u.email == body.email);
    if exists {
        return Err(bad_request("Email already exists"));
    }
    let id = state.add_user(&body.name, &body.email, &body.password, role);
    let inner = state.inner.lock().unwrap();
    let user = inner.users.iter().find(|u| u.id == id).unwrap();
    Ok(Json(auth_response(user)))
}

fn do_login(state: &FakeApi, body: LoginBody, admin_only: bool) -> Reply<AuthResponse> {
    let inner = state.inner.lock().unwrap();
    let user = inner
        .users
        .iter()
        .find(|u| u.email == body.email && u.password == body.password)
        .ok_or_else(|| bad_request("Invalid email or password"))?;
    if admin_only && !user.role.is_admin() {
        return Err(bad_request("Access denied. Admin role required."));
    }
    Ok(Json(auth_response(user)))
}

async fn register(State(state): State<FakeApi>, Json(body): Json<RegisterBody>) -> Reply<AuthResponse> {
    do_register(&state, body, Role::User)
}

async fn admin_register(State(state): State<FakeApi>, Json(body): Json<RegisterBody>) -> Reply<AuthResponse> {
    do_register(&state, body, Role::Admin)
}

async fn login(State(state): State<FakeApi>, Json(body): Json<LoginBody>) -> Reply<AuthResponse> {
    do_login(&state, body, false)
}

async fn admin_login(State(state): State<FakeApi>, Json(body): Json<LoginBody>) -> Reply<AuthResponse> {
    do_login(&state, body, true)
}

fn owned_by(state: &FakeApi, owner: i64) -> Vec<Contact> {
    state
        .inner
        .lock()
        .unwrap()
        .contacts
        .values()
        .filter(|(o, _)| *o == owner)
        .map(|(_, c)| c.clone())
        .collect()
}

async fn list_contacts(State(state): State<FakeApi>, headers: HeaderMap) -> Reply<Vec<Contact>> {
    let user = caller(&state, &headers)?;
    Ok(Json(owned_by(&state, user.id)))
}

#[derive(Deserialize)]
struct SearchQuery {
    keyword: String,
}

async fn search_contacts(
    State(state): State<FakeApi>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Reply<Vec<Contact>> {
    let user = caller(&state, &headers)?;
    let needle = query.keyword.to_lowercase();
    let hits = owned_by(&state, user.id)
        .into_iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.email_or_empty().to_lowercase().contains(&needle)
                || c.phone_or_empty().contains(&needle)
        })
        .collect();
    Ok(Json(hits))
}

fn to_contact(id: i64, draft: ContactDraft) -> Contact {
    Contact {
        id,
        name: draft.name,
        email: Some(draft.email),
        phone: Some(draft.phone),
        description: Some(draft.description),
    }
}

async fn create_contact(
    State(state): State<FakeApi>,
    headers: HeaderMap,
    Json(draft): Json<ContactDraft>,
) -> Result<(StatusCode, Json<Contact>), (StatusCode, Json<Value>)> {
    let user = caller(&state, &headers)?;
    if draft.name.trim().is_empty() {
        return Err(bad_request("Name is required"));
    }
    let mut inner = state.inner.lock().unwrap();
    inner.next_contact_id += 1;
    let contact = to_contact(inner.next_contact_id, draft);
    inner.contacts.insert(contact.id, (user.id, contact.clone()));
    Ok((StatusCode::CREATED, Json(contact)))
}

async fn update_contact(
    State(state): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(draft): Json<ContactDraft>,
) -> Reply<Contact> {
    let user = caller(&state, &headers)?;
    let mut inner = state.inner.lock().unwrap();
    match inner.contacts.get(&id) {
        None => return Err(bad_request("Contact not found")),
        Some((owner, _)) if *owner != user.id => {
            return Err(bad_request("Unauthorized: Contact does not belong to user"))
        }
        Some(_) => {}
    }
    let contact = to_contact(id, draft);
    inner.contacts.insert(id, (user.id, contact.clone()));
    Ok(Json(contact))
}

async fn delete_contact(
    State(state): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Reply<Value> {
    let user = caller(&state, &headers)?;
    let mut inner = state.inner.lock().unwrap();
    let owner = inner.contacts.get(&id).map(|(owner, _)| *owner);
    match owner {
        Some(owner) if owner == user.id => {
            inner.contacts.remove(&id);
            Ok(Json(json!({ "message": "Contact deleted successfully" })))
        }
        Some(_) => Err(bad_request("Unauthorized: Contact does not belong to user")),
        None => Err(bad_request("Contact not found")),
    }
}

async fn profile(State(state): State<FakeApi>, headers: HeaderMap) -> Reply<UserProfile> {
    let user = caller(&state, &headers)?;
    Ok(Json(profile_of(&user, None)))
}

async fn upload_image(
    State(state): State<FakeApi>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Reply<Value> {
    let user = caller(&state, &headers)?;
    state.inner.lock().unwrap().uploads += 1;

    let mut stored = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let is_image = field
            .content_type()
            .map(|ct| ct.starts_with("image/"))
            .unwrap_or(false);
        if !is_image {
            return Err(bad_request("Only image files are allowed"));
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let _ = field.bytes().await;
        stored = Some(format!("uploads/{}_{}", user.id, file_name));
    }
    let Some(image_path) = stored else {
        return Err(bad_request("File is empty"));
    };

    let mut inner = state.inner.lock().unwrap();
    if let Some(u) = inner.users.iter_mut().find(|u| u.id == user.id) {
        u.image_path = Some(image_path.clone());
    }
    let file_name = image_path.trim_start_matches("uploads/").to_string();
    Ok(Json(json!({
        "message": "Image uploaded successfully",
        "imagePath": image_path,
        "imageUrl": format!("/api/user/images/{file_name}"),
    })))
}

async fn image(
    State(state): State<FakeApi>,
    headers: HeaderMap,
    Path(file): Path<String>,
) -> Result<([(header::HeaderName, &'static str); 1], Vec<u8>), (StatusCode, Json<Value>)> {
    caller(&state, &headers)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], file.into_bytes()))
}

async fn all_users(State(state): State<FakeApi>, headers: HeaderMap) -> Reply<Vec<UserProfile>> {
    admin(&state, &headers)?;
    let users = state.inner.lock().unwrap().users.clone();
    Ok(Json(
        users
            .iter()
            .map(|u| profile_of(u, Some(owned_by(&state, u.id))))
            .collect(),
    ))
}

async fn delete_user(
    State(state): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Reply<Value> {
    admin(&state, &headers)?;
    let mut inner = state.inner.lock().unwrap();
    let before = inner.users.len();
    inner.users.retain(|u| u.id != id);
    if inner.users.len() == before {
        return Err(bad_request("User not found"));
    }
    inner.contacts.retain(|_, (owner, _)| *owner != id);
    Ok(Json(json!({ "message": "User deleted successfully" })))
}

async fn user_contacts(
    State(state): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Reply<Vec<Contact>> {
    admin(&state, &headers)?;
    Ok(Json(owned_by(&state, id)))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "UP", "service": "Smart Contact Manager" }))
}
