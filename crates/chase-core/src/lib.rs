pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod motion;
pub mod state;
pub mod vector;

pub use clock::*;
pub use config::*;
pub use error::*;
pub use motion::*;
pub use state::*;
pub use vector::Vector2;
