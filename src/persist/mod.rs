pub mod codec;
pub mod tree;

pub use codec::{load_part, load_state, save_part, save_state};
pub use tree::StateTree;
