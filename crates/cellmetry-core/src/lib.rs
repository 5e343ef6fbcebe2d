pub mod consts;
pub mod error;
pub mod io;
pub mod measure;
pub mod pipeline;
pub mod plane;
pub mod render;
pub mod segment;
