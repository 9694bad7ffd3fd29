pub mod explain;
pub mod keygen;
pub mod transform;

pub use explain::*;
pub use keygen::*;
pub use transform::*;
