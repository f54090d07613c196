pub mod bitmap;
pub mod fill_color;
pub mod image_file;
