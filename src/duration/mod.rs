mod sign;
pub use sign::*;
mod unit;
pub use unit::*;
mod value;
pub use value::*;
