// --- 依存モジュール ---

// bitmap モジュールから PlaceholderBitmap 構造体を利用します。
// 検証済みの単色ピクセルグリッドを、ここで出力フォーマットへエンコードします。
use super::bitmap::PlaceholderBitmap;

// image クレートの ImageFormat で出力フォーマットを表現します。
// ファイル名の拡張子からフォーマットを解決するのにも利用します。
use image::ImageFormat;

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::Path;

// --- エラー定義 ---

/// ビットマップのエンコード時に発生する可能性のあるエラーを定義する列挙型。
/// これにより、呼び出し元はエラーの種類に応じた適切な処理を実装できます。
#[derive(Debug, PartialEq)]
pub enum EncodingError {
    /// ファイル名の拡張子が、対応している画像フォーマットに解決できなかった場合。
    UnsupportedExtension { file_name: String },
    /// エンコーダがビットマップのシリアライズに失敗した場合。
    /// 固定の有効なフォーマットと寸法を使う限り発生しない想定ですが、網羅性のために定義します。
    EncodeFailed(String),
}

// --- 構造体定義 ---

/// メモリ上にエンコード済みの画像ファイルデータを保持する構造体。
///
/// ビットマップは出力フォーマットごとに一度だけエンコードされ、
/// 同じインスタンスから複数の出力先へ保存することで、
/// 生成されるファイルがバイト単位で同一であることが保証されます。
pub struct PlaceholderImageFile {
    /// エンコードに使用した画像フォーマット。
    format: ImageFormat,
    /// メモリ上にエンコードされた画像ファイルのバイナリデータ（バイト列）。
    data: Vec<u8>,
}

// --- 実装ブロック ---

impl PlaceholderImageFile {
    /// ファイル名の拡張子から出力フォーマットを解決します。
    ///
    /// # 戻り値
    /// * `Ok(ImageFormat)`: 拡張子が既知の画像フォーマットに対応している場合。
    /// * `Err(EncodingError::UnsupportedExtension)`: 拡張子がない、または未対応の場合。
    pub fn format_for_name(file_name: &str) -> Result<ImageFormat, EncodingError> {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageFormat::from_extension)
            .ok_or_else(|| EncodingError::UnsupportedExtension {
                file_name: file_name.to_string(),
            })
    }

    /// `PlaceholderBitmap` をメモリ上で指定フォーマットにエンコードします。
    ///
    /// # 引数
    /// - `bitmap`: エンコード対象の検証済みビットマップ。
    /// - `format`: 出力する画像フォーマット (PNGなど)。
    ///
    /// # 戻り値
    /// - `Ok(Self)`: エンコードに成功した場合、`PlaceholderImageFile` インスタンスを返します。
    /// - `Err(EncodingError)`: エンコーダがエラーを返した場合。
    pub fn encode(bitmap: &PlaceholderBitmap, format: ImageFormat) -> Result<Self, EncodingError> {
        let mut data: Vec<u8> = Vec::new();

        // 一部のエンコーダ (TIFFなど) が Seek を要求するため、Cursor 経由で書き込む
        bitmap
            .image()
            .write_to(&mut Cursor::new(&mut data), format)
            .map_err(|e| EncodingError::EncodeFailed(e.to_string()))?;

        Ok(Self { format, data })
    }

    /// エンコード済みデータを指定パスへ書き込みます。既存のファイルは上書きされます。
    pub fn save_to_path(&self, path: &Path) -> Result<(), std::io::Error> {
        fs::write(path, &self.data)
    }

    // --- ゲッターメソッド ---

    pub fn format(&self) -> ImageFormat {
        self.format
    }
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

// --- トレイト実装 ---

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::UnsupportedExtension { file_name } => {
                write!(
                    f,
                    "ファイル名 '{}' の拡張子は対応している画像フォーマットではありません。",
                    file_name
                )
            }
            EncodingError::EncodeFailed(msg) => {
                write!(f, "画像のエンコードに失敗しました: {}", msg)
            }
        }
    }
}

impl std::error::Error for EncodingError {}

// --- テストモジュール ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::placeholder::fill_color::FillColor;
    use image::GenericImageView;
    use tempfile::tempdir;

    // --- テスト用ヘルパー関数 ---
    fn small_bitmap() -> PlaceholderBitmap {
        PlaceholderBitmap::new(6, 4, FillColor::BLACK).expect("有効な寸法のはず")
    }

    #[test]
    fn format_for_name_resolves_png() {
        let format = PlaceholderImageFile::format_for_name("ingredient_tofu.png").unwrap();
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn format_for_name_rejects_missing_extension() {
        let res = PlaceholderImageFile::format_for_name("ingredient_tofu");
        assert_eq!(
            res,
            Err(EncodingError::UnsupportedExtension {
                file_name: "ingredient_tofu".to_string()
            })
        );
    }

    #[test]
    fn format_for_name_rejects_unknown_extension() {
        let res = PlaceholderImageFile::format_for_name("notes.txt");
        assert!(matches!(
            res,
            Err(EncodingError::UnsupportedExtension { .. })
        ));
    }

    /// エンコード結果をデコードし直して、寸法と全ピクセルの色が保持されていることをテストします。
    #[test]
    fn encode_round_trips_through_decoder() {
        // Arrange
        let bitmap = small_bitmap();

        // Act
        let file = PlaceholderImageFile::encode(&bitmap, ImageFormat::Png).unwrap();

        // Assert
        let decoded = image::load_from_memory(file.data()).expect("デコードに失敗");
        assert_eq!(decoded.dimensions(), (6, 4));
        for (_, _, pixel) in decoded.to_rgb8().enumerate_pixels() {
            assert_eq!(*pixel, FillColor::BLACK.as_rgb());
        }
    }

    /// 同じビットマップを2回エンコードしても、バイト単位で同一になることをテストします。
    #[test]
    fn encode_is_deterministic() {
        let bitmap = small_bitmap();
        let first = PlaceholderImageFile::encode(&bitmap, ImageFormat::Png).unwrap();
        let second = PlaceholderImageFile::encode(&bitmap, ImageFormat::Png).unwrap();
        assert_eq!(first.data(), second.data());
    }

    /// save_to_path がファイルを書き込み、既存ファイルを上書きすることをテストします。
    #[test]
    fn save_to_path_writes_and_overwrites() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("placeholder.png");

        // 事前に別の内容を書き込んでおき、上書きされることを確認する
        fs::write(&path, b"stale content").expect("Failed to seed file");

        let file = PlaceholderImageFile::encode(&small_bitmap(), ImageFormat::Png).unwrap();
        file.save_to_path(&path).expect("保存に失敗");

        let written = fs::read(&path).expect("読み戻しに失敗");
        assert_eq!(written, file.data());
    }

    /// 書き込み先がディレクトリの場合にI/Oエラーが返されることをテストします。
    #[test]
    fn save_to_path_fails_when_target_is_directory() {
        let dir = tempdir().expect("Failed to create temp directory");

        let file = PlaceholderImageFile::encode(&small_bitmap(), ImageFormat::Png).unwrap();
        let result = file.save_to_path(dir.path());

        assert!(result.is_err(), "ディレクトリへの書き込みは失敗するはずです");
    }
}
