pub mod build_manifest;
pub mod bundle_warning;
pub mod package_manager;
pub mod run_mode;
