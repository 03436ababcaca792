use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum BundleKind {
  Script,
  Stylesheet,
}

impl From<BundleKind> for benchpack::OnWarn {
  fn from(value: BundleKind) -> Self {
    match value {
      BundleKind::Script => benchpack::OnWarn::Script,
      BundleKind::Stylesheet => benchpack::OnWarn::Stylesheet,
    }
  }
}
