/// Application layer - Use cases, DTOs and read models
///
/// This layer orchestrates the CI graph services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
