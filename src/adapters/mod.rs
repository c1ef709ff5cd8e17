/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports. The CLI in `main.rs` is
/// the only driving adapter.
pub mod outbound;
