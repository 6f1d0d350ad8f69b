use std::collections::HashMap;

pub const TEXT_PLAIN: &str = "text/plain";

/// Payload carried by a drag gesture from drag-start to drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    items: HashMap<String, String>,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        self.items.insert(format.to_string(), data.into());
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.items.get(format).map(String::as_str)
    }

    pub fn clear_data(&mut self) {
        self.items.clear();
    }
}
