use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::info;

use crate::domain::models::usuario::{NewUsuario, Usuario};
use crate::domain::ports::UsuarioRepository;
use crate::error::AppError;

pub struct UsuarioService {
    repo: Arc<dyn UsuarioRepository>,
}

impl UsuarioService {
    pub fn new(repo: Arc<dyn UsuarioRepository>) -> Self {
        Self { repo }
    }

    /// Registers an account. The email must not belong to any active row;
    /// the plaintext password is replaced by a salted argon2 hash before it
    /// touches the repository.
    pub async fn create(
        &self,
        nombre: String,
        email: String,
        password: String,
    ) -> Result<Usuario, AppError> {
        if self.get_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest("Email ya registrado".into()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AppError::Internal)?
            .to_string();

        let nuevo = NewUsuario {
            nombre,
            email,
            password: password_hash,
        };
        let creado = self.repo.create(&nuevo).await?;

        info!("Usuario created: {}", creado.id);
        Ok(creado)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Usuario, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Usuario no encontrado".into()))
    }

    /// Lookup without a failure path: an absent email is a regular `None`.
    /// Doubles as the duplicate check in `create`.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<Usuario>, AppError> {
        self.repo.find_by_email(email).await
    }
}
