pub mod dom;
pub mod tracker;
