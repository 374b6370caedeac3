pub mod browse;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod vocabulary;

pub use browse::{Applied, FetchTicket, MealBrowser};
pub use client::{MealApi, MealClient};
pub use config::ApiConfig;
pub use error::{DecodeError, FetchError};
pub use model::{Meal, MAX_INGREDIENT_SLOTS};
pub use vocabulary::build_vocabulary;
