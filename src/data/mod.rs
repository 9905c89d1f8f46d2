pub mod campaign;
pub mod comment;
pub mod credential;
pub mod error;
pub mod kudos;
pub mod supporter;
