mod auth;
mod output;

pub use auth::TokenManager;
pub use auth::request_token;
pub use output::RESULTS_DIR;
pub use output::ResultWriter;
