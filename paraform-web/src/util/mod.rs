pub use ior::Ior;

mod ior;

pub const NON_BREAKING_SPACE: &str = "\u{a0}";
