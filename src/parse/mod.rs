mod formula;
pub use formula::*;

mod quantity;
pub use quantity::*;
