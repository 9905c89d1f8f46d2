pub mod campaign;
pub mod comment;
pub mod kudos;
pub mod supporter;
pub mod user;
