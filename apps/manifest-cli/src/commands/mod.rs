pub mod validate_manifest;
