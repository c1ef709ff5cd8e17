use cmdb_graph::prelude::*;
use std::path::Path;

/// Mock InventoryReader serving an in-memory inventory
pub struct MockInventoryReader {
    inventory: Option<Inventory>,
}

impl MockInventoryReader {
    pub fn new(cis: Vec<ConfigurationItem>, relationships: Vec<Relationship>) -> Self {
        Self {
            inventory: Some(Inventory::new(cis, relationships)),
        }
    }

    /// A reader whose every read fails
    pub fn failing() -> Self {
        Self { inventory: None }
    }
}

impl InventoryReader for MockInventoryReader {
    fn read_inventory(&self, path: &Path) -> Result<Inventory> {
        match &self.inventory {
            Some(inventory) => Ok(inventory.clone()),
            None => anyhow::bail!("Mock inventory unavailable: {}", path.display()),
        }
    }
}
