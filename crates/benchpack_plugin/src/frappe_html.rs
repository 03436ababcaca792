use std::path::Path;

use benchpack_utils::path_ext::PathExt;

/// `/app/public/js/templates/form_grid.html` is registered as `form_grid`.
pub fn template_key(id: &str) -> String {
  let file_name = Path::new(id).file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
  file_name.rsplit_once('.').map_or_else(|| file_name.to_string(), |(stem, _)| stem.to_string())
}

/// Turns an html template into a script registering it on `frappe.templates`.
pub fn frappe_html_transform(code: &str, id: &str) -> Option<String> {
  if !Path::new(id).has_extension("html") {
    return None;
  }

  let key = template_key(id);
  let content = code.replace('`', "\\`");
  Some(format!("\nfrappe.templates['{key}'] = `{content}`;\n"))
}

#[test]
fn test_template_key() {
  assert_eq!(template_key("/app/public/js/form_grid.html"), "form_grid");
  assert_eq!(template_key("/app/public/js/print.format.html"), "print.format");
  assert_eq!(template_key("README"), "README");
}

#[test]
fn test_frappe_html_transform() {
  let output = frappe_html_transform("<div>{{ `x` }}</div>", "/app/public/js/grid_row.html").unwrap();
  assert_eq!(output, "\nfrappe.templates['grid_row'] = `<div>{{ \\`x\\` }}</div>`;\n");

  assert_eq!(frappe_html_transform("let a = 1;", "/app/public/js/desk.js"), None);
}
