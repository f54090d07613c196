// use宣言：必要なクレートやモジュールをスコープに取り込む

use super::fill_color::FillColor;
use image::RgbImage; // ピクセルグリッドの構築のために利用
use std::fmt; // エラーメッセージのフォーマットのために fmt モジュールを利用

// --- 構造体定義 ---

/// すべてのピクセルが同一色で塗りつぶされた、検証済みのプレースホルダービットマップ。
///
/// `new` コンストラクタを通じてのみインスタンス化でき、その際に以下の点が保証されます。
/// - 幅・高さがいずれも 1 ピクセル以上であること
/// - 全ピクセルが指定された `FillColor` で初期化されていること
/// 構築後は一切変更されないため、すべての書き込み処理で安全に共有できます。
#[derive(Debug)]
pub struct PlaceholderBitmap {
    image: RgbImage,
    fill_color: FillColor,
}

// --- エラー定義 ---

/// `PlaceholderBitmap` のインスタンス化時に発生する可能性のある検証エラー。
#[derive(Debug, PartialEq)]
pub enum BitmapError {
    /// 幅または高さに 0 が指定された場合に返されるエラー。
    ZeroDimension { width: u32, height: u32 },
}

// --- 実装ブロック ---

impl PlaceholderBitmap {
    /// 新しい `PlaceholderBitmap` インスタンスを作成（コンストラクタ）。
    ///
    /// # 引数
    /// * `width`: 画像の幅 (ピクセル)。1 以上であること。
    /// * `height`: 画像の高さ (ピクセル)。1 以上であること。
    /// * `fill_color`: 全ピクセルに設定する色。
    ///
    /// # 戻り値
    /// * `Ok(PlaceholderBitmap)`: 寸法が有効な場合。
    /// * `Err(BitmapError)`: 幅または高さが 0 の場合。
    pub fn new(width: u32, height: u32, fill_color: FillColor) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::ZeroDimension { width, height });
        }

        // 全ピクセルを同一色で初期化したバッファを一度だけ構築する
        let image = RgbImage::from_pixel(width, height, fill_color.as_rgb());

        Ok(Self { image, fill_color })
    }

    // --- 便利メソッド ---

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    // --- ゲッターメソッド ---

    pub fn image(&self) -> &RgbImage {
        &self.image
    }
    pub fn fill_color(&self) -> FillColor {
        self.fill_color
    }
    pub fn width(&self) -> u32 {
        self.image.width()
    }
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

// --- トレイト実装 ---

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitmapError::ZeroDimension { width, height } => {
                write!(
                    f,
                    "幅と高さは1以上である必要があります (指定値: {}x{})。",
                    width, height
                )
            }
        }
    }
}

impl std::error::Error for BitmapError {}

// --- テストモジュール ---
