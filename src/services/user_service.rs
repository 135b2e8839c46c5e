use crate::database::store::{LocalStore, CURRENT_USER_KEY, USERS_KEY};
use crate::dto::user_dto::{LoginRequest, RegisterRequest};
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::time;
use crate::utils::validation::{is_valid_email, validate};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UserService {
    store: LocalStore,
}

impl UserService {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn register(&self, req: RegisterRequest) -> Result<User> {
        validate(&req)?;

        let mut users: Vec<User> = self.store.get_or_default(USERS_KEY)?;
        if users.iter().any(|u| u.email == req.email) {
            return Err(Error::Conflict(format!(
                "An account with email {} already exists",
                req.email
            )));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: req.name.trim().to_string(),
            email: req.email,
            password: req.password,
            join_date: time::now(),
        };
        users.push(user.clone());
        self.store.set(USERS_KEY, &users)?;

        tracing::info!(user_id = %user.id, "Registered user");
        Ok(user)
    }

    pub fn login(&self, req: LoginRequest) -> Result<User> {
        if !is_valid_email(&req.email) {
            return Err(Error::InvalidArgument(
                "Please enter a valid email address".to_string(),
            ));
        }

        let users: Vec<User> = self.store.get_or_default(USERS_KEY)?;
        let user = users
            .into_iter()
            .find(|u| u.email == req.email && u.password == req.password)
            .ok_or_else(|| Error::Unauthorized("Invalid email or password".to_string()))?;

        self.store.set(CURRENT_USER_KEY, &user)?;
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    pub fn logout(&self) -> Result<()> {
        if let Some(user) = self.current_user()? {
            tracing::info!(user_id = %user.id, "User logged out");
        }
        self.store.remove(CURRENT_USER_KEY)
    }

    pub fn current_user(&self) -> Result<Option<User>> {
        self.store.get(CURRENT_USER_KEY)
    }

    pub fn list(&self) -> Result<Vec<User>> {
        self.store.get_or_default(USERS_KEY)
    }
}
