pub mod errors;
pub mod redirect_types;
pub mod response_types;
pub mod utils;
