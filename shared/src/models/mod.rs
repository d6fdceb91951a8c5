//! Domain models for the retail back-office suite

mod batch;
mod item;
mod purchase;
mod sales;

pub use batch::*;
pub use item::*;
pub use purchase::*;
pub use sales::*;
