// Local storage — filename derivation, sidecar codec, directory scan, persist worker.

pub mod filename;
pub mod persist;
pub mod scan;
pub mod sidecar;
