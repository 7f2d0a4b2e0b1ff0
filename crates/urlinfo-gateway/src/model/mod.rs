mod health;
mod lookup;

pub use health::HealthResponse;
pub use lookup::LookupResponse;
