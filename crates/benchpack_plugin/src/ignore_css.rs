use std::path::Path;

use benchpack_utils::path_ext::PathExt;

const STYLESHEET_EXTENSIONS: [&str; 4] = ["css", "scss", "sass", "less"];

pub fn is_stylesheet(id: &str) -> bool {
  let path = Path::new(id);
  STYLESHEET_EXTENSIONS.iter().any(|ext| path.has_extension(ext))
}

/// Stylesheets imported from scripts are bundled separately, the import only has to
/// stop breaking the script build.
pub fn ignore_css_transform(_code: &str, id: &str) -> Option<String> {
  is_stylesheet(id).then(|| format!("\n// ignored {id}\n"))
}

#[test]
fn test_ignore_css_transform() {
  assert_eq!(ignore_css_transform("body {}", "/app/public/less/desk.less").unwrap(), "\n// ignored /app/public/less/desk.less\n");
  assert!(ignore_css_transform("a {}", "/app/x.scss").is_some());
  assert!(ignore_css_transform("a {}", "/app/x.sass").is_some());
  assert!(ignore_css_transform("a {}", "/app/x.css").is_some());
  assert_eq!(ignore_css_transform("export default 1", "/app/x.js"), None);
  assert_eq!(ignore_css_transform("", "/app/css"), None);
}
