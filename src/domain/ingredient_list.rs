// use宣言：必要なクレートやモジュールをスコープに取り込む

use std::ffi::OsStr; // ファイル名の比較のために利用
use std::fmt; // エラーメッセージのフォーマットのために fmt モジュールを利用
use std::path::Path; // 拡張子・ステムの判定のために利用

// --- 定数定義 ---

/// 元のリソース生成スクリプトが対象としていた、食材プレースホルダーのファイル名一覧。
/// `--list-file` が指定されない場合の既定リストとして使用されます。
const DEFAULT_INGREDIENT_FILES: [&str; 75] = [
    "ingredient_brokkoli.png",
    "ingredient_paprika.png",
    "ingredient_reis.png",
    "ingredient_tofu.png",
    "ingredient_erdnussbutter.png",
    "ingredient_chinakohl.png",
    "ingredient_kidneybohnen.png",
    "ingredient_staudensellerie.png",
    "ingredient_chilischote.png",
    "ingredient_sonnenmais.png",
    "ingredient_suesskartoffeln.png",
    "ingredient_kartoffeln.png",
    "ingredient_kaffir_limettenblaetter.png",
    "ingredient_zucchini.png",
    "ingredient_mediterrane_gemuesepfanne.png",
    "ingredient_rote_linsen.png",
    "ingredient_kichererbsen.png",
    "ingredient_erbsen.png",
    "ingredient_aubergine.png",
    "ingredient_lauch.png",
    "ingredient_zwiebel.png",
    "ingredient_fruehlingszwiebel.png",
    "ingredient_rote_zwiebel.png",
    "ingredient_gurke.png",
    "ingredient_eisbergsalat.png",
    "ingredient_krautsalat.png",
    "ingredient_romana_salatherz.png",
    "ingredient_peperoni.png",
    "ingredient_fleischtomate.png",
    "ingredient_kirschtomaten.png",
    "ingredient_getrocknete_tomaten.png",
    "ingredient_oliven.png",
    "ingredient_hokkaido_kuerbis.png",
    "ingredient_salz.png",
    "ingredient_pfeffer.png",
    "ingredient_muskat.png",
    "ingredient_meersalz.png",
    "ingredient_gyrosgewuerz.png",
    "ingredient_dill.png",
    "ingredient_cayennepfeffer.png",
    "ingredient_currypulver.png",
    "ingredient_chilipulver.png",
    "ingredient_paprikapulver.png",
    "ingredient_zimt.png",
    "ingredient_kreuzkuemmel.png",
    "ingredient_kraeutersalz.png",
    "ingredient_bunter_pfeffer.png",
    "ingredient_zucker.png",
    "ingredient_chinagewuerz.png",
    "ingredient_fett_fuer_die_form.png",
    "ingredient_olivenoel.png",
    "ingredient_oel.png",
    "ingredient_rapsoel.png",
    "ingredient_fischsauce.png",
    "ingredient_gemuesebruehe.png",
    "ingredient_bruehe.png",
    "ingredient_rohrohrzucker.png",
    "ingredient_rote_currypaste.png",
    "ingredient_salatmayonnaise.png",
    "ingredient_sambal_oelek.png",
    "ingredient_weissweinessig.png",
    "ingredient_heller_balsamico.png",
    "ingredient_essig.png",
    "ingredient_tahini.png",
    "ingredient_balsamico_creme_hell.png",
    "ingredient_tabasco.png",
    "ingredient_tomatenmark.png",
    "ingredient_koriander.png",
    "ingredient_schnittlauch.png",
    "ingredient_kresse.png",
    "ingredient_thymian.png",
    "ingredient_basilikum.png",
    "ingredient_rosmarin.png",
    "ingredient_salbei.png",
    "ingredient_lavendelblueten.png",
];

// --- 構造体定義 ---

/// 出力対象のファイル名（ベース名）を保持する、検証済みのリストコンテナ。
///
/// `new` コンストラクタを通じてのみインスタンス化でき、その際に以下の点が保証されます。
/// - すべての要素がパス区切り文字を含まない純粋なファイル名であること
/// - すべての要素が対応している画像拡張子を持つこと
/// 空のリストは有効です（ファイルを1つも生成しない実行に対応します）。
#[derive(Debug, PartialEq)]
pub struct IngredientFileList {
    file_names: Vec<String>,
}

// --- エラー定義 ---

/// `IngredientFileList` のインスタンス化時に発生する可能性のある検証エラー。
#[derive(Debug, PartialEq)]
pub enum FileNameError {
    /// パス区切り文字を含む、またはステムを持たない不正なファイル名が含まれていた場合。
    /// `index` フィールドには、問題が検出された要素のインデックスが格納されます。
    InvalidFileName { index: usize, name: String },
    /// 対応していない拡張子（または拡張子なし）のファイル名が含まれていた場合。
    UnsupportedExtension { index: usize, name: String },
}

// --- 実装ブロック ---

impl IngredientFileList {
    /// ファイル名が対応している画像フォーマットの拡張子を持つか判定するヘルパー関数。
    #[inline]
    fn has_supported_extension(name: &str) -> bool {
        match Path::new(name).extension().and_then(|s| s.to_str()) {
            Some(ext) => matches!(
                ext.to_lowercase().as_str(),
                "jpg" | "jpeg" | "png" | "gif" | "bmp"
            ),
            _ => false,
        }
    }

    /// 新しい `IngredientFileList` インスタンスを作成（コンストラクタ）。
    ///
    /// # 引数
    /// * `file_names`: 出力ファイルのベース名を要素とするベクター。空でも構いません。
    ///
    /// # 戻り値
    /// * `Ok(IngredientFileList)`: すべての要素が検証を通過した場合。
    /// * `Err(FileNameError)`: 不正なファイル名、または未対応の拡張子が含まれている場合。
    pub fn new(file_names: Vec<String>) -> Result<Self, FileNameError> {
        for (i, name) in file_names.iter().enumerate() {
            // パス区切り文字を含む名前は、出力ディレクトリの外へ書き込む恐れがあるため拒否する
            let is_bare_name = !name.contains('/')
                && !name.contains('\\')
                && Path::new(name)
                    .file_name()
                    .map_or(false, |f| f == OsStr::new(name));
            if !is_bare_name || Path::new(name).file_stem().is_none() {
                return Err(FileNameError::InvalidFileName {
                    index: i,
                    name: name.clone(),
                });
            }

            if !Self::has_supported_extension(name) {
                return Err(FileNameError::UnsupportedExtension {
                    index: i,
                    name: name.clone(),
                });
            }
        }

        Ok(Self { file_names })
    }

    /// 組み込みの既定リスト（元スクリプトの食材ファイル名一覧）から作成します。
    ///
    /// 組み込みリストは定数であり、検証を通過することがテストで保証されているため、
    /// このコンストラクタは失敗しません。
    pub fn default_list() -> Self {
        Self {
            file_names: DEFAULT_INGREDIENT_FILES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// テキスト（1行1ファイル名）から作成します。
    ///
    /// 各行の前後の空白は取り除かれ、空行は無視されます。
    pub fn from_lines(text: &str) -> Result<Self, FileNameError> {
        let file_names: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::new(file_names)
    }

    // --- 便利メソッド ---

    /// 保持しているファイル名の件数を返します。
    pub fn len(&self) -> usize {
        self.file_names.len()
    }

    /// 保持しているリストが空かどうか。
    pub fn is_empty(&self) -> bool {
        self.file_names.is_empty()
    }

    // --- ゲッターメソッド ---

    pub fn file_names(&self) -> &[String] {
        &self.file_names
    }
}

// --- トレイト実装 ---

impl fmt::Display for FileNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileNameError::InvalidFileName { index, name } => {
                write!(
                    f,
                    "インデックス {} の要素 '{}' は有効なファイル名ではありません。",
                    index, name
                )
            }
            FileNameError::UnsupportedExtension { index, name } => {
                write!(
                    f,
                    "インデックス {} の要素 '{}' の拡張子は対応していません。",
                    index, name
                )
            }
        }
    }
}

impl std::error::Error for FileNameError {}

// --- テストモジュール ---
