use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum PackageManager {
  Npm,
  Yarn,
}

impl From<PackageManager> for benchpack::PackageManager {
  fn from(value: PackageManager) -> Self {
    match value {
      PackageManager::Npm => benchpack::PackageManager::Npm,
      PackageManager::Yarn => benchpack::PackageManager::Yarn,
    }
  }
}
