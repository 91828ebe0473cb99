pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod reverse_delete;
pub mod traversal;

pub use dijkstra::*;
pub use kruskal::*;
pub use prim::*;
pub use reverse_delete::*;
pub use traversal::*;
