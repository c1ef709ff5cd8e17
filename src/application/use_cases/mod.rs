/// Use cases module containing application business logic orchestration
mod query_graph;

pub use query_graph::QueryGraphUseCase;
