pub mod columnar;
pub mod rail_fence;
pub mod replacement;
pub mod substitution;
pub mod vigenere;
