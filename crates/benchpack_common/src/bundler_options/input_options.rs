use serde::Serialize;

use crate::{InputItem, OnWarn, PluginOptions};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputOptions {
  pub input: Vec<InputItem>,
  /// Applied by the runner in this exact order.
  pub plugins: Vec<PluginOptions>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub context: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub external: Vec<String>,
  pub on_warn: OnWarn,
}

impl InputOptions {
  pub fn plugin_names(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.plugins.iter().map(PluginOptions::name)
  }

  pub fn has_plugin(&self, name: &str) -> bool {
    self.plugin_names().any(|plugin| plugin == name)
  }
}
