//! Data types shared by the reconciliation, layout and snapshot stages.

mod data;
mod item;
mod settings;

pub use data::*;
pub use item::*;
pub use settings::*;
