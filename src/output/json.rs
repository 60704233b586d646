use crate::error::Result;

use super::{OutputFormatter, RenderModel};

/// Pretty-printed JSON of the whole render model.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, model: &RenderModel) -> Result<String> {
        Ok(serde_json::to_string_pretty(model)?)
    }
}
