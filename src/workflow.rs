//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! プレースホルダー画像生成の具体的な処理フローを実装します。

use crate::cli::Args;
use crate::domain::ingredient_list::IngredientFileList;
use crate::domain::output_target::output_directory::OutputDirectory;
use crate::domain::placeholder::bitmap::PlaceholderBitmap;
use crate::domain::placeholder::fill_color::FillColor;
use crate::domain::placeholder::image_file::PlaceholderImageFile;
use crate::error::AppError;
use image::ImageFormat;
use std::collections::HashMap;
use std::fs;

// --- public な main 関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// 処理の流れ: 出力ディレクトリの準備 → ビットマップの構築（1回だけ）→
/// フォーマットごとに1回だけエンコード → 各ファイル名へ書き込み。
/// いずれかの書き込みが失敗した時点で残りの書き込みは中断され、
/// エラーがそのまま呼び出し元へ伝播します（アイテム単位のリカバリは行いません）。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
///
/// # 戻り値
/// * `Ok(())`: すべてのファイルの生成が正常に完了した場合。
/// * `Err(AppError)`: ディレクトリ作成・エンコード・書き込みのいずれかが失敗した場合。
pub fn run(args: &Args) -> Result<(), AppError> {
    // 1. 出力ディレクトリの準備
    // OutputDirectory::ensure を使うことで、ディレクトリが（祖先ごと）作成済みであることが保証される。
    let output_dir = OutputDirectory::ensure(&args.output_dir)?;

    // 2. ファイル名リストの決定
    // `args.list_file` が指定されていればそのファイルから読み込み、
    // 指定されていなければ組み込みの食材リストを使用する。
    let file_list = match &args.list_file {
        Some(path) => IngredientFileList::from_lines(&fs::read_to_string(path)?)?,
        None => IngredientFileList::default_list(),
    };

    // 3. プレースホルダービットマップの構築（1回だけ）
    // ビットマップは構築後に変更されないため、すべての書き込みで共有できる。
    let fill_color = FillColor::from_hex(&args.color)?;
    let bitmap = PlaceholderBitmap::new(args.width, args.height, fill_color)?;

    // 4. 各ファイル名への書き込み
    // 同一フォーマットのエンコード結果はキャッシュして使い回すことで、
    // 生成されるファイルがバイト単位で同一になり、再実行時も冪等になる。
    let mut encoded_cache: HashMap<ImageFormat, PlaceholderImageFile> = HashMap::new();
    for name in file_list.file_names() {
        let format = PlaceholderImageFile::format_for_name(name)?;

        let image_file = match encoded_cache.entry(format) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(PlaceholderImageFile::encode(&bitmap, format)?)
            }
        };

        // 最初の書き込み失敗で `?` により即座に中断する（fail-fast）
        image_file.save_to_path(&output_dir.file_path(name))?;
    }

    // 5. 完了メッセージ
    println!(
        "プレースホルダー画像を {} 件作成しました: {}",
        file_list.len(),
        output_dir
    );

    Ok(())
}

// --- テストモジュール ---
