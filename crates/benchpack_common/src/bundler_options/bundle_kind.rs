use std::fmt::Display;

use benchpack_error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleKind {
  Script,
  Stylesheet,
}

impl BundleKind {
  /// Decides the kind of bundle from the extension of the declared output file.
  pub fn classify(output_file: &str) -> Result<Self, ConfigError> {
    if output_file.ends_with(".js") {
      Ok(Self::Script)
    } else if output_file.ends_with(".css") {
      Ok(Self::Stylesheet)
    } else {
      Err(ConfigError::UnknownOutputExtension(output_file.to_string()))
    }
  }
}

impl Display for BundleKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Script => write!(f, "browser-script"),
      Self::Stylesheet => write!(f, "stylesheet"),
    }
  }
}

#[test]
fn test_classify() {
  assert_eq!(BundleKind::classify("js/desk.min.js").unwrap(), BundleKind::Script);
  assert_eq!(BundleKind::classify("css/desk.min.css").unwrap(), BundleKind::Stylesheet);

  let err = BundleKind::classify("app.bundle").unwrap_err();
  assert!(matches!(&err, ConfigError::UnknownOutputExtension(file) if file == "app.bundle"));
  assert!(err.to_string().contains("app.bundle"));

  assert!(BundleKind::classify("js/desk.min.jsx").is_err());
  assert!(BundleKind::classify("js/desk.min.JS").is_err());
}

#[test]
fn test_classify_dotfile_outputs() {
  assert_eq!(BundleKind::classify(".js").unwrap(), BundleKind::Script);
  assert_eq!(BundleKind::classify("js/.js").unwrap(), BundleKind::Script);
  assert_eq!(BundleKind::classify("css/.css").unwrap(), BundleKind::Stylesheet);
}
