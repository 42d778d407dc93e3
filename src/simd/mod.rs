pub mod lanes;
pub mod portable;
pub mod scalar;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub mod avx2;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub mod neon;

pub use lanes::{ByteLanes, DwordLanes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Portable,
    Avx2,
    Neon,
}

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx2",
    not(feature = "scalar")
))]
pub const BACKEND: Backend = Backend::Avx2;

#[cfg(all(
    target_arch = "aarch64",
    target_feature = "neon",
    not(feature = "scalar")
))]
pub const BACKEND: Backend = Backend::Neon;

#[cfg(any(
    feature = "scalar",
    not(any(
        all(target_arch = "x86_64", target_feature = "avx2"),
        all(target_arch = "aarch64", target_feature = "neon")
    ))
))]
pub const BACKEND: Backend = Backend::Portable;

/// Lane engine the vector reducers use on this build.
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx2",
    not(feature = "scalar")
))]
pub type Native = avx2::Avx2;

#[cfg(all(
    target_arch = "aarch64",
    target_feature = "neon",
    not(feature = "scalar")
))]
pub type Native = neon::Neon;

#[cfg(any(
    feature = "scalar",
    not(any(
        all(target_arch = "x86_64", target_feature = "avx2"),
        all(target_arch = "aarch64", target_feature = "neon")
    ))
))]
pub type Native = portable::Portable;

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Portable => "portable",
            Backend::Avx2 => "avx2",
            Backend::Neon => "neon",
        }
    }
}

pub fn backend_name() -> &'static str {
    BACKEND.as_str()
}

#[cfg(test)]
#[path = "../../tests/src_inline/simd/mod.rs"]
mod tests;
