//! eBay Finding API model types.

mod fault;
mod item;
mod response;

pub use fault::*;
pub use item::*;
pub use response::*;
