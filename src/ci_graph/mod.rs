/// CI graph domain - pure derivation of graph, tree, path and grouping shapes
///
/// Nothing in this module performs I/O. Every function takes fully
/// materialized slices and returns freshly built values.
pub mod domain;
pub mod services;
