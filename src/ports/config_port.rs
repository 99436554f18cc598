//! Settings access port trait.
//!
//! Lookups never fail: a missing or unparsable value yields the caller's
//! default, and `get_string` returns `None`.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;
}
