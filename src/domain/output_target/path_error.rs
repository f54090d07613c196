use std::fmt;

// 出力先パス関連のエラー型を定義
#[derive(Debug)]
pub enum PathError {
    /// パスが出力先として利用できない場合 (例: ディレクトリ以外のファイルが既に存在する)。
    InvalidPath(String),
    /// ディレクトリ作成などのファイルシステム操作に失敗した場合。
    IoError(std::io::Error),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidPath(s) => write!(f, "無効なパスです: {}", s),
            PathError::IoError(e) => write!(f, "I/Oエラー: {}", e),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::InvalidPath(_) => None,
            PathError::IoError(e) => Some(e),
        }
    }
}
