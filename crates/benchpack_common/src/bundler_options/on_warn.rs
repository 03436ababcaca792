use ansi_term::Colour;
use serde::Serialize;

use crate::BundleWarning;

/// Warning codes script bundles never report.
const SILENT_SCRIPT_WARNINGS: [&str; 3] = ["EVAL", "SOURCEMAP_BROKEN", "NAMESPACE_CONFLICT"];
const SILENT_STYLESHEET_WARNINGS: [&str; 1] = ["EMPTY_BUNDLE"];

const UNRESOLVED_IMPORT: &str = "UNRESOLVED_IMPORT";

/// How bundler diagnostics of a bundle are reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnWarn {
  Script,
  Stylesheet,
}

impl OnWarn {
  pub fn is_silent(self, code: &str) -> bool {
    match self {
      Self::Script => SILENT_SCRIPT_WARNINGS.contains(&code),
      Self::Stylesheet => SILENT_STYLESHEET_WARNINGS.contains(&code),
    }
  }

  /// Renders the text to show for `warning`, or `None` when it is swallowed.
  pub fn render(self, warning: &BundleWarning) -> Option<String> {
    if self.is_silent(&warning.code) {
      return None;
    }

    let code = Colour::Yellow.underline().paint(warning.code.as_str());
    let rendered = match self {
      Self::Script if warning.code == UNRESOLVED_IMPORT => {
        let command = Colour::Yellow.paint("bench setup requirements");
        format!(
          "{code} : {}\nCannot find some dependencies. You may have to run \"{command}\" to install them.\n",
          warning.message
        )
      }
      Self::Script => match &warning.loc {
        Some(loc) => {
          let mut rendered = format!("{} ({}:{}) {}", loc.file, loc.line, loc.column, warning.message);
          if let Some(frame) = &warning.frame {
            rendered.push('\n');
            rendered.push_str(frame);
          }
          rendered
        }
        None => format!("{code} : {}", warning.message),
      },
      Self::Stylesheet => format!("{code} : {}", warning.message),
    };

    Some(rendered)
  }
}

#[cfg(test)]
fn warning(code: &str) -> BundleWarning {
  BundleWarning {
    code: code.to_string(),
    message: "something happened".to_string(),
    loc: None,
    frame: None,
  }
}

#[test]
fn test_script_warnings() {
  for code in SILENT_SCRIPT_WARNINGS {
    assert_eq!(OnWarn::Script.render(&warning(code)), None);
  }

  let rendered = OnWarn::Script.render(&warning("UNRESOLVED_IMPORT")).unwrap();
  assert!(rendered.contains("something happened"));
  assert!(rendered.contains("bench setup requirements"));

  let rendered = OnWarn::Script.render(&warning("EMPTY_BUNDLE")).unwrap();
  assert!(rendered.contains("EMPTY_BUNDLE"));
}

#[test]
fn test_script_warning_with_location() {
  let warning = BundleWarning {
    loc: Some(crate::WarningLocation { file: "desk.js".to_string(), line: 12, column: 4 }),
    frame: Some("12: let a = b;".to_string()),
    ..warning("MISSING_EXPORT")
  };

  assert_eq!(
    OnWarn::Script.render(&warning).unwrap(),
    "desk.js (12:4) something happened\n12: let a = b;"
  );
}

#[test]
fn test_stylesheet_warnings() {
  assert_eq!(OnWarn::Stylesheet.render(&warning("EMPTY_BUNDLE")), None);

  let rendered = OnWarn::Stylesheet.render(&warning("UNRESOLVED_IMPORT")).unwrap();
  assert!(rendered.contains("UNRESOLVED_IMPORT"));
  assert!(!rendered.contains("bench setup requirements"));
}
