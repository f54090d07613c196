pub mod ingredient_list;
pub mod output_target;
pub mod placeholder;

// --- public re-exports ---
// pub use ingredient_list::IngredientFileList;
// pub use output_target::output_directory::OutputDirectory;
// pub use placeholder::bitmap::PlaceholderBitmap;
// pub use placeholder::fill_color::FillColor;
// pub use placeholder::image_file::PlaceholderImageFile;
