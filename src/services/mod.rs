pub mod catalog_service;
pub mod remote_service;
pub mod snapshot_service;
