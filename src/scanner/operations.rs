pub mod manifests;
pub mod shortcuts;
