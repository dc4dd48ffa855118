
pub mod traits;
