pub mod category;
pub mod inventory;
pub mod merge_lines;

pub use category::by_category;
pub(crate) use inventory::load_inventory;
pub use inventory::{excluding_inventory, from_inventory};
pub use merge_lines::merge_lines;
