mod args;
mod constants;
mod cursor;
mod error;
mod slotset;

pub use args::Args;
pub use constants::{BUCKET_COUNT, EMPTY_VALUE};
pub use cursor::Cursor;
pub use error::SetError;
pub use slotset::{bucket_for, swap, SlotSet};
