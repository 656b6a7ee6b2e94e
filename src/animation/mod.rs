pub mod reveal;

pub use reveal::RevealAnimation;
