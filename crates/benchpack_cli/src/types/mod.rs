pub mod bundle_kind;
pub mod package_manager;
