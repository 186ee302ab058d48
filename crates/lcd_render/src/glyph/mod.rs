pub mod bitmap;
mod hd44780;
pub mod table;
