// use宣言：必要なクレートやモジュールをスコープに取り込む

use image::Rgb; // ビットマップ生成時のピクセル値への変換に利用
use std::fmt; // エラーメッセージのフォーマットのために fmt モジュールを利用

// --- 構造体定義 ---

/// プレースホルダー画像の塗りつぶし色を表す値オブジェクト。
///
/// `from_hex` コンストラクタで `#RRGGBB` 形式の文字列から生成します。
/// 3チャンネル (RGB) のみを扱い、アルファ値はサポートしません。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillColor {
    red: u8,
    green: u8,
    blue: u8,
}

// --- エラー定義 ---

/// 色指定文字列の解析時に発生する可能性のあるエラー。
#[derive(Debug, PartialEq)]
pub enum ColorParseError {
    /// `#RRGGBB` (または `RRGGBB`) の形式になっていない場合に返されるエラー。
    InvalidFormat(String),
    /// 16進数として解釈できない文字が含まれていた場合に返されるエラー。
    InvalidHexDigit(String),
}

// --- 実装ブロック ---

impl FillColor {
    /// 元のスクリプトが使用していた既定色 (黒)。
    pub const BLACK: FillColor = FillColor {
        red: 0,
        green: 0,
        blue: 0,
    };

    /// `#RRGGBB` 形式の文字列から新しい `FillColor` を作成（コンストラクタ）。
    ///
    /// 先頭の `#` は省略可能です。大文字・小文字は区別しません。
    ///
    /// # 戻り値
    /// * `Ok(FillColor)`: 6桁の16進数として解釈できた場合。
    /// * `Err(ColorParseError)`: 桁数が異なるか、16進数以外の文字を含む場合。
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let hex = input.strip_prefix('#').unwrap_or(input);

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::InvalidFormat(input.to_string()));
        }

        let parse_channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorParseError::InvalidHexDigit(input.to_string()))
        };

        Ok(Self {
            red: parse_channel(0..2)?,
            green: parse_channel(2..4)?,
            blue: parse_channel(4..6)?,
        })
    }

    // --- ゲッターメソッド ---

    pub fn red(&self) -> u8 {
        self.red
    }
    pub fn green(&self) -> u8 {
        self.green
    }
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// `image` クレートのピクセル値に変換します。
    pub fn as_rgb(&self) -> Rgb<u8> {
        Rgb([self.red, self.green, self.blue])
    }
}

// --- トレイト実装 ---

impl fmt::Display for FillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::InvalidFormat(s) => {
                write!(f, "'{}' は #RRGGBB 形式の色指定ではありません。", s)
            }
            ColorParseError::InvalidHexDigit(s) => {
                write!(f, "'{}' に16進数として解釈できない文字が含まれています。", s)
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

// --- テストモジュール ---
