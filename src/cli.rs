use clap::Parser;
use std::path::PathBuf;

/// 単色のプレースホルダー画像をまとめて生成するツールのコマンドライン引数。
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 画像の出力先フォルダのパス (存在しない場合は親ごと作成されます)
    #[arg(required = true)]
    pub output_dir: PathBuf,

    /// 生成する画像の幅 (ピクセル)
    #[arg(long, default_value_t = 1080)]
    pub width: u32,

    /// 生成する画像の高さ (ピクセル)
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// 塗りつぶし色 (#RRGGBB 形式)
    #[arg(short, long, default_value = "#000000")]
    pub color: String,

    /// ファイル名リストのパス (1行1ファイル名。オプション: デフォルトは組み込みの食材リスト)
    #[arg(short, long)]
    pub list_file: Option<PathBuf>,
}
