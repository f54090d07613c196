use clap::Parser;
use placeholder_image_tool::cli::Args;
use placeholder_image_tool::workflow;

/// 固定リストのファイル名で単色のプレースホルダー画像を生成するツール
fn main() {
    // コマンドライン引数を解析します
    let args = Args::parse();

    // メインワークフローを実行し、エラーが発生した場合は
    // メッセージを表示して異常終了します（リトライや部分的な続行は行いません）。
    if let Err(e) = workflow::run(&args) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}
