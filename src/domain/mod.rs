pub mod ids;
pub mod menu_item;
pub mod cart;
pub mod order;

pub use ids::*;
pub use menu_item::*;
pub use cart::*;
pub use order::*;
