/// Result alias with anyhow::Error, used everywhere outside the pure graph services.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
