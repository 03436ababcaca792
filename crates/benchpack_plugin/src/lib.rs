mod frappe_html;
mod ignore_css;
mod plugin;
mod plugin_set;

pub use crate::{
  frappe_html::{frappe_html_transform, template_key},
  ignore_css::{ignore_css_transform, is_stylesheet},
  plugin::Plugin,
  plugin_set::PluginSet,
};
