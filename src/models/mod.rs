pub mod observation;
pub mod trailing;

pub use observation::*;
pub use trailing::*;
