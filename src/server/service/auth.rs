use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{normalize_email, AuthSession, CreateUserParam, RegisterParam, Role, User},
    util::{password, token},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Registers a customer account and signs it in.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The email is already registered
    pub async fn register(&self, param: RegisterParam) -> Result<AuthSession, AppError> {
        let user = self
            .create_user(
                param.name,
                param.email,
                &param.password,
                Role::Customer,
                param.phone,
            )
            .await?;

        tracing::info!("Registered customer {}", user.id);

        self.session(user)
    }

    /// Signs in with email and password.
    ///
    /// # Returns
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let user = self.authenticate(email, password).await?;

        self.session(user)
    }

    /// Checks credentials and returns the account.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(&normalize_email(email)).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };
        if !password::verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(User::from_entity(user))
    }

    /// Inserts a user with a hashed password; emails are unique.
    pub async fn create_user(
        &self,
        name: String,
        email: String,
        password: &str,
        role: Role,
        phone: Option<String>,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let email = normalize_email(&email);
        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::bad_request("Email is already registered"));
        }

        let user = repo
            .create(CreateUserParam {
                name,
                email,
                password_hash: password::hash(password)?,
                role,
                phone,
            })
            .await?;

        Ok(User::from_entity(user))
    }

    /// Issues a bearer token for `user`.
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        token::issue(
            &self.config.jwt_secret,
            user.id,
            &user.role.to_value(),
            self.config.jwt_ttl_hours,
        )
    }

    /// Creates the configured admin account when no admin exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The admin that was created
    /// - `Ok(None)` - No admin credentials configured, or an admin already exists
    pub async fn bootstrap_admin(&self) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let (Some(email), Some(password)) = (&self.config.admin_email, &self.config.admin_password)
        else {
            return Ok(None);
        };
        if repo.admin_exists().await? {
            return Ok(None);
        }
        if repo.find_by_email(&normalize_email(email)).await?.is_some() {
            tracing::warn!(
                "ADMIN_EMAIL {} belongs to an existing non-admin account; no admin created",
                email
            );
            return Ok(None);
        }

        let admin = self
            .create_user("Administrator".to_string(), email.clone(), password, Role::Admin, None)
            .await?;
        tracing::info!("Created admin account {}", admin.email);

        Ok(Some(admin))
    }

    fn session(&self, user: User) -> Result<AuthSession, AppError> {
        Ok(AuthSession {
            token: self.issue_token(&user)?,
            user,
        })
    }
}
