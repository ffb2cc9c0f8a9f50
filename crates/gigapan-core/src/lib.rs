pub mod angle;
pub mod consts;
pub mod error;
pub mod fov;
pub mod scan;
pub mod sink;
pub mod spec;
pub mod step;
