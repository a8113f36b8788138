#![allow(dead_code)]

use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::PasswordHasher;
use chrono::Duration;
use chrono::Utc;
use event_service::domain::comment::errors::CommentError;
use event_service::domain::comment::models::Comment;
use event_service::domain::comment::models::CommentId;
use event_service::domain::comment::models::NewComment;
use event_service::domain::comment::ports::CommentRepository;
use event_service::domain::comment::service::CommentService;
use event_service::domain::event::errors::EventError;
use event_service::domain::event::models::Event;
use event_service::domain::event::models::EventId;
use event_service::domain::event::models::NewEvent;
use event_service::domain::event::ports::EventRepository;
use event_service::domain::event::service::EventService;
use event_service::domain::pagination::Pagination;
use event_service::domain::user::errors::UserError;
use event_service::domain::user::models::EmailAddress;
use event_service::domain::user::models::NewUser;
use event_service::domain::user::models::User;
use event_service::domain::user::models::UserId;
use event_service::domain::user::models::Username;
use event_service::domain::user::ports::UserRepository;
use event_service::domain::user::service::UserService;
use event_service::inbound::http::router::create_router;
use serde_json::json;
use serde_json::Value;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory storage shared by all three repositories.
///
/// Mirrors the database constraints the service relies on: unique usernames
/// and emails, and cascading deletes from users and events.
#[derive(Default)]
pub struct InMemoryStore {
    next_id: AtomicI64,
    users: Mutex<Vec<User>>,
    events: Mutex<Vec<Event>>,
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryStore {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Same window as `OFFSET skip LIMIT limit` over rows in id order.
fn paginate<T>(pagination: Pagination, items: impl Iterator<Item = T>) -> Vec<T> {
    items
        .skip(pagination.offset() as usize)
        .take(pagination.limit() as usize)
        .collect()
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        let created = User {
            id: UserId(self.next_id()),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == *username).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == *email).cloned())
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(paginate(pagination, users.iter().cloned()))
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        let existing = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(UserError::NotFound(user.id.to_string()))?;
        *existing = user.clone();
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != *id);
        if users.len() == before {
            return Err(UserError::NotFound(id.to_string()));
        }
        drop(users);

        let mut events = self.events.lock().unwrap();
        let removed: Vec<EventId> = events
            .iter()
            .filter(|e| e.creator_id == *id)
            .map(|e| e.id)
            .collect();
        events.retain(|e| e.creator_id != *id);
        drop(events);

        let mut comments = self.comments.lock().unwrap();
        comments.retain(|c| c.user_id != *id && !removed.contains(&c.event_id));
        Ok(())
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn create(&self, event: NewEvent) -> Result<Event, EventError> {
        let created = Event {
            id: EventId(self.next_id()),
            title: event.title,
            description: event.description,
            date_time: event.date_time,
            location: event.location,
            creator_id: event.creator_id,
            created_at: Utc::now(),
        };
        self.events.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventError> {
        let events = self.events.lock().unwrap();
        Ok(events.iter().find(|e| e.id == *id).cloned())
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<Event>, EventError> {
        let events = self.events.lock().unwrap();
        Ok(paginate(pagination, events.iter().cloned()))
    }

    async fn update(&self, event: Event) -> Result<Event, EventError> {
        let mut events = self.events.lock().unwrap();
        let existing = events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or(EventError::NotFound(event.id.to_string()))?;
        *existing = event.clone();
        Ok(event)
    }

    async fn delete(&self, id: &EventId) -> Result<(), EventError> {
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id != *id);
        if events.len() == before {
            return Err(EventError::NotFound(id.to_string()));
        }
        drop(events);

        self.comments.lock().unwrap().retain(|c| c.event_id != *id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentError> {
        let created = Comment {
            id: CommentId(self.next_id()),
            content: comment.content,
            user_id: comment.user_id,
            event_id: comment.event_id,
            created_at: Utc::now(),
        };
        self.comments.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        let comments = self.comments.lock().unwrap();
        Ok(comments.iter().find(|c| c.id == *id).cloned())
    }

    async fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Comment>, CommentError> {
        let comments = self.comments.lock().unwrap();
        Ok(comments
            .iter()
            .filter(|c| c.event_id == *event_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != *id);
        if comments.len() == before {
            return Err(CommentError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<InMemoryStore>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application with the default token lifetime
    pub async fn spawn() -> Self {
        Self::spawn_with_token_lifetime(Duration::minutes(auth::DEFAULT_TOKEN_LIFETIME_MINUTES))
            .await
    }

    /// Spawn the application in a background task and return TestApp
    pub async fn spawn_with_token_lifetime(token_lifetime: Duration) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(InMemoryStore::default());

        let authenticator = Arc::new(
            Authenticator::new(JWT_SECRET)
                .with_token_lifetime(token_lifetime)
                .with_password_hasher(
                    PasswordHasher::with_cost(PasswordHasher::MIN_COST)
                        .expect("Minimum bcrypt cost is valid"),
                ),
        );

        let user_service = Arc::new(UserService::new(Arc::clone(&store), authenticator));
        let event_service = Arc::new(EventService::new(Arc::clone(&store)));
        let comment_service = Arc::new(CommentService::new(
            Arc::clone(&store),
            Arc::clone(&store),
        ));

        let router = create_router(user_service, event_service, comment_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            store,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return the response body
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Value {
        let response = self
            .post("/users/register")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("Failed to parse response")
    }

    /// Log in with JSON credentials and return the access token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/users/login")
            .json(&json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string()
    }

    /// Register and log in, returning (user id, token)
    pub async fn signed_up(&self, username: &str) -> (i64, String) {
        let user = self
            .register(username, &format!("{}@example.com", username), "pass_word!")
            .await;
        let token = self.login(username, "pass_word!").await;
        (user["id"].as_i64().expect("id missing"), token)
    }

    /// Create an event as the token's owner and return its id
    pub async fn create_event(&self, token: &str, title: &str) -> i64 {
        let response = self
            .post_authenticated("/events", token)
            .json(&json!({
                "title": title,
                "description": "Talks and pizza",
                "date_time": "2030-05-01T18:30:00Z",
                "location": "Berlin",
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        let body: Value = response.json().await.expect("Failed to parse response");
        body["id"].as_i64().expect("id missing")
    }
}
