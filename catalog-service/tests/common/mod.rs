use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use catalog_service::domain::product::models::Product;
use catalog_service::domain::product::models::ProductDraft;
use catalog_service::domain::product::models::ProductId;
use catalog_service::domain::product::models::ProductKey;
use catalog_service::domain::product::service::ProductService;
use catalog_service::domain::record::Record;
use catalog_service::domain::record::RecordStore;
use catalog_service::domain::record::StoreError;
use catalog_service::domain::user::models::NewUser;
use catalog_service::domain::user::models::User;
use catalog_service::domain::user::models::UserId;
use catalog_service::domain::user::models::UserKey;
use catalog_service::domain::user::service::UserService;
use catalog_service::inbound::http::router::create_router;
use chrono::Duration;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

struct Table<R> {
    last_id: i64,
    rows: Vec<R>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: Vec::new(),
        }
    }
}

/// In-memory record store standing in for PostgreSQL.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Table<User>>,
    products: Mutex<Table<Product>>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    /// Make every following operation fail as if the database were down.
    pub fn go_offline(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().rows.clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.lock().unwrap().rows.clone()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

fn replace<R: Record>(table: &Mutex<Table<R>>, record: R) -> Result<R, StoreError> {
    let mut table = table.lock().unwrap();
    match table
        .rows
        .iter_mut()
        .find(|row| row.record_id() == record.record_id())
    {
        Some(row) => {
            *row = record.clone();
            Ok(record)
        }
        None => Err(StoreError::missing(&record)),
    }
}

fn remove<R: Record>(table: &Mutex<Table<R>>, record: &R) -> Result<(), StoreError> {
    let mut table = table.lock().unwrap();
    let before = table.rows.len();
    table.rows.retain(|row| row.record_id() != record.record_id());
    if table.rows.len() == before {
        return Err(StoreError::missing(record));
    }
    Ok(())
}

#[async_trait]
impl RecordStore<User> for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        self.check_available()?;
        Ok(self.users())
    }

    async fn find_one(&self, key: &UserKey) -> Result<User, StoreError> {
        self.check_available()?;
        self.users
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|user| match key {
                UserKey::Id(id) => user.id == *id,
                UserKey::Email(email) => user.email == *email,
            })
            .cloned()
            .ok_or_else(|| StoreError::not_found::<User>(key))
    }

    async fn insert(&self, draft: NewUser) -> Result<User, StoreError> {
        self.check_available()?;
        let mut table = self.users.lock().unwrap();
        table.last_id += 1;
        let user = User {
            id: UserId(table.last_id),
            name: draft.name,
            email: draft.email,
            password_hash: draft.password_hash,
        };
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, record: User) -> Result<User, StoreError> {
        self.check_available()?;
        replace(&self.users, record)
    }

    async fn delete(&self, record: &User) -> Result<(), StoreError> {
        self.check_available()?;
        remove(&self.users, record)
    }
}

#[async_trait]
impl RecordStore<Product> for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        self.check_available()?;
        Ok(self.products())
    }

    async fn find_one(&self, key: &ProductKey) -> Result<Product, StoreError> {
        self.check_available()?;
        let ProductKey::Id(id) = key;
        self.products
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|product| product.id == *id)
            .cloned()
            .ok_or_else(|| StoreError::not_found::<Product>(key))
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        self.check_available()?;
        let mut table = self.products.lock().unwrap();
        table.last_id += 1;
        let product = Product {
            id: ProductId(table.last_id),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
        };
        table.rows.push(product.clone());
        Ok(product)
    }

    async fn update(&self, record: Product) -> Result<Product, StoreError> {
        self.check_available()?;
        replace(&self.products, record)
    }

    async fn delete(&self, record: &Product) -> Result<(), StoreError> {
        self.check_available()?;
        remove(&self.products, record)
    }
}

/// Response with the body parsed as JSON; `None` when the body is empty.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl TestResponse {
    pub fn message(&self) -> &str {
        self.body
            .as_ref()
            .and_then(|body| body["message"].as_str())
            .expect("response has no message")
    }

    pub fn data(&self) -> &Value {
        &self.body.as_ref().expect("response has no body")["data"]
    }
}

/// Real router wired to real services over an in-memory store.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        let authenticator = Arc::new(Authenticator::new(JWT_SECRET, Duration::hours(6)));

        let user_service = Arc::new(UserService::new(Arc::clone(&store)));
        let product_service = Arc::new(ProductService::new(Arc::clone(&store)));

        let router = create_router(user_service, product_service, Arc::clone(&authenticator));

        Self {
            router,
            store,
            authenticator,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(&bytes).expect("body is not JSON"))
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path, None, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, None, Some(body)).await
    }

    pub async fn post_authenticated(&self, path: &str, token: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, Some(token), Some(body)).await
    }

    pub async fn put_authenticated(&self, path: &str, token: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, path, Some(token), Some(body)).await
    }

    pub async fn delete_authenticated(&self, path: &str, token: &str) -> TestResponse {
        self.request(Method::DELETE, path, Some(token), None).await
    }

    /// Register a user through the API and return the response.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> TestResponse {
        self.post(
            "/register",
            serde_json::json!({ "name": name, "email": email, "password": password }),
        )
        .await
    }

    /// Register then log in, returning the issued token.
    pub async fn signed_in(&self, name: &str, email: &str, password: &str) -> String {
        assert_eq!(self.register(name, email, password).await.status, StatusCode::OK);

        let response = self
            .post(
                "/login",
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);

        response.data()["token"]
            .as_str()
            .expect("login returned no token")
            .to_string()
    }
}
