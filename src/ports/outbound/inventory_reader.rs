use crate::ci_graph::domain::Inventory;
use crate::shared::Result;
use std::path::Path;

/// InventoryReader port for loading a CMDB snapshot
///
/// This port abstracts where CIs and relationships come from: a JSON/YAML/TOML
/// export on disk today, the CMDB REST API in a deployment.
pub trait InventoryReader {
    /// Reads and validates the inventory at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or fails the security checks
    /// - The content cannot be parsed
    /// - A CI or relationship violates the field limits
    fn read_inventory(&self, path: &Path) -> Result<Inventory>;
}
