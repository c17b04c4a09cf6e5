//! Tool catalog: the registration target populated at startup.
//!
//! Owns every registered descriptor, keyed by tool name, in registration
//! order. The MCP server lists and dispatches from it.

use std::collections::HashMap;

use super::descriptor::ToolDescriptor;

/// Something tools can be registered with.
pub trait ToolHost {
    /// Register one tool descriptor.
    fn add_tool(&mut self, tool: ToolDescriptor);
}

/// In-memory tool catalog.
///
/// A tool whose name is already registered replaces the earlier entry in
/// place, keeping its original position.
#[derive(Debug, Default, Clone)]
pub struct ToolCatalog {
    entries: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Returns the replaced descriptor on a name collision.
    pub fn register(&mut self, tool: ToolDescriptor) -> Option<ToolDescriptor> {
        match self.index.get(&tool.name) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], tool)),
            None => {
                self.index.insert(tool.name.clone(), self.entries.len());
                self.entries.push(tool);
                None
            }
        }
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Tool names in registration order.
    pub fn list_names(&self) -> Vec<&str> {
        self.entries.iter().map(|t| t.name.as_str()).collect()
    }

    /// Tools in registration order.
    pub fn list_entries(&self) -> &[ToolDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ToolHost for ToolCatalog {
    fn add_tool(&mut self, tool: ToolDescriptor) {
        let name = tool.name.clone();
        if self.register(tool).is_some() {
            tracing::warn!(tool = %name, "Tool registered twice, keeping the latest definition");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tool(name: &str, description: &str) -> ToolDescriptor {
        ToolDescriptor::new(name, description, true, |_| async { Ok(json!(null)) })
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = ToolCatalog::new();
        catalog.add_tool(tool("get_pools", "List pools"));

        assert!(catalog.has_tool("get_pools"));
        assert!(!catalog.has_tool("get_pool"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("get_pools").unwrap().description, "List pools");
    }

    #[test]
    fn test_registration_order_preserved() {
        let mut catalog = ToolCatalog::new();
        catalog.add_tool(tool("b", ""));
        catalog.add_tool(tool("a", ""));
        catalog.add_tool(tool("c", ""));

        assert_eq!(catalog.list_names(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_name_replaces_in_place() {
        let mut catalog = ToolCatalog::new();
        catalog.add_tool(tool("a", "first"));
        catalog.add_tool(tool("b", ""));
        let replaced = catalog.register(tool("a", "second"));

        assert_eq!(replaced.unwrap().description, "first");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.list_names(), vec!["a", "b"]);
        assert_eq!(catalog.get("a").unwrap().description, "second");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ToolCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get("anything").is_none());
    }
}
