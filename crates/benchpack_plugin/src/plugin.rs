use std::path::Path;

use benchpack_common::PluginOptions;
use benchpack_utils::path_ext::PathExt;

use crate::{frappe_html_transform, ignore_css_transform, is_stylesheet};

/// Behaviour of a plugin chain entry that can be answered without the bundler runner.
pub trait Plugin {
  /// Whether the plugin processes the module `id` at all.
  fn filter(&self, id: &str) -> bool;

  /// Source rewrite for the plugins implemented by the bench. Third party plugins return
  /// `None`, their transform happens in the runner.
  fn transform(&self, code: &str, id: &str) -> Option<String>;
}

impl Plugin for PluginOptions {
  fn filter(&self, id: &str) -> bool {
    match self {
      Self::FrappeHtml => Path::new(id).has_extension("html"),
      Self::IgnoreCss => is_stylesheet(id),
      Self::Buble { options, .. } => {
        !options.exclude.iter().any(|pattern| fast_glob::glob_match(pattern.as_str(), id))
      }
      Self::PostCss { options, .. } => {
        options.include.iter().any(|pattern| fast_glob::glob_match(pattern.as_str(), id))
      }
      Self::MultiEntry { .. }
      | Self::Vue { .. }
      | Self::CommonJs { .. }
      | Self::NodeResolve { .. }
      | Self::Terser { .. } => true,
    }
  }

  fn transform(&self, code: &str, id: &str) -> Option<String> {
    match self {
      Self::FrappeHtml => frappe_html_transform(code, id),
      Self::IgnoreCss => ignore_css_transform(code, id),
      _ => None,
    }
  }
}
