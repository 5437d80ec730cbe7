use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::utils::AppError;

/// Store em memória dos usuários locais (ids nunca são reutilizados)
pub struct UserStore {
    state: RwLock<StoreState>,
}

struct StoreState {
    users: Vec<User>,
    next_id: u64,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn list_all(&self) -> Vec<User> {
        self.state.read().await.users.clone()
    }

    pub async fn get(&self, id: u64) -> Result<User, AppError> {
        self.state
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn insert(&self, request: &CreateUserRequest) -> Result<User, AppError> {
        let mut state = self.state.write().await;

        if state.users.iter().any(|u| u.email == request.email) {
            return Err(AppError::InvalidRequest("email already registered".into()));
        }

        let now = Utc::now();
        let user = User {
            id: state.next_id,
            name: request.name.clone(),
            email: request.email.clone(),
            password: request.password.clone(),
            created_at: now,
            updated_at: now,
        };

        state.next_id += 1;
        state.users.push(user.clone());

        log::debug!("Inserted user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Aplica só os campos com valor; `null` mantém o valor atual
    pub async fn update(&self, id: u64, request: &UpdateUserRequest) -> Result<User, AppError> {
        let mut state = self.state.write().await;

        let index = state
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(AppError::NotFound)?;

        if let Some(email) = request.new_email() {
            if state.users.iter().any(|u| u.id != id && u.email == email) {
                return Err(AppError::InvalidRequest("email already registered".into()));
            }
        }

        let user = &mut state.users[index];

        if let Some(name) = request.new_name() {
            user.name = name.to_string();
        }
        if let Some(email) = request.new_email() {
            user.email = email.to_string();
        }
        if let Some(password) = request.new_password() {
            user.password = password.to_string();
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    pub async fn delete(&self, id: u64) -> Result<User, AppError> {
        let mut state = self.state.write().await;

        let index = state
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(AppError::NotFound)?;

        Ok(state.users.remove(index))
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
