use crate::domain::ingredient_list::FileNameError;
use crate::domain::output_target::path_error::PathError;
use crate::domain::placeholder::bitmap::BitmapError;
use crate::domain::placeholder::fill_color::ColorParseError;
use crate::domain::placeholder::image_file::EncodingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました")]
    Io(#[from] std::io::Error),

    #[error("パス関連のエラー")]
    Path(#[from] PathError),

    #[error("ファイル名検証エラー")]
    FileName(#[from] FileNameError),

    #[error("色指定エラー")]
    Color(#[from] ColorParseError),

    #[error("ビットマップ生成エラー")]
    Bitmap(#[from] BitmapError),

    #[error("画像エンコードエラー")]
    Encoding(#[from] EncodingError),
}
