pub mod record;
pub mod security;
pub mod signal;
