mod anchor;
mod component;
mod node_view;
mod state;
mod types;

pub use component::Board;
