mod core;
mod pointer;
mod render;
#[cfg(test)]
mod tests;

pub use core::TouchControls;
