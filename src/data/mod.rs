pub mod pointsets;

pub use pointsets::load_pointsets;
