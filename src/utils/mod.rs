pub mod db;
pub mod encryption;
pub mod schema;
pub mod seed;
