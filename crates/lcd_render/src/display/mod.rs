pub mod layout;
pub mod raster;
pub mod spec;
