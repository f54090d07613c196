use super::path_error::PathError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// 構造体としてOutputDirectoryを定義
//
// `ensure` コンストラクタを通じてのみインスタンス化でき、
// インスタンスが存在する時点でディレクトリの実在が保証される。
#[derive(Debug)]
pub struct OutputDirectory {
    path: PathBuf,
}

impl OutputDirectory {
    /// コンストラクタ: パスを受け取り、出力先ディレクトリとして準備する。
    ///
    /// ディレクトリが存在しない場合は、欠けている祖先ディレクトリごと作成します。
    /// 既に存在する場合は何もしません (冪等)。
    ///
    /// # 戻り値
    /// * `Ok(OutputDirectory)`: ディレクトリが利用可能な状態になった場合。
    /// * `Err(PathError)`: パス上にディレクトリ以外のファイルが存在する場合、
    ///   または権限不足などで作成に失敗した場合。
    pub fn ensure<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // パスが既に存在する場合は、ディレクトリであることを検証
        // (create_dir_all はこのケースでもエラーを返すが、メッセージが不親切なため先に判定する)
        if path.exists() && !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は既に存在しますが、ディレクトリではありません。",
                path.display()
            )));
        }

        fs::create_dir_all(path).map_err(PathError::IoError)?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// ディレクトリ内のファイルパスを構築する (例: dir.file_path("a.png") -> dir/a.png)
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for OutputDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
