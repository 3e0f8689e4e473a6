pub mod config;
pub mod logger;
pub mod session_rng;
pub mod snake;

pub use session_rng::SessionRng;
