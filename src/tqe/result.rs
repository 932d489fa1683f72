/// Result alias for the fallible edges of the crate (logger setup, the
/// demo binary). The store's own queries are total and return plain values.
pub type Result<T = ()> = anyhow::Result<T>;
