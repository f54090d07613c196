pub mod output_directory;
pub mod path_error;
