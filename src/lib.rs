pub mod comparison;
pub mod content;
pub mod demo;
pub mod pricing;
pub mod scroll;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;
