/// 設定ファイルのテスト
///
/// YAML設定ファイルの読み込み、既定値の適用、検証が正しく動作することを確認します。

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[cfg(test)]
mod config_tests {
    use super::*;
    use header_snippet::core::config::Config;
    use header_snippet::core::error::IoError;

    /// すべての項目を指定した設定ファイル
    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".header-snippet.yaml");
        fs::write(
            &config_path,
            "source: ./oshp/ci\noutput: conf/headers.conf\ntimeout: 10\n",
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();

        assert_eq!(config.source, "./oshp/ci");
        assert_eq!(config.output, PathBuf::from("conf/headers.conf"));
        assert_eq!(config.timeout, 10);
    }

    /// 存在しない設定ファイル
    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();

        let err = Config::from_file(&temp_dir.path().join("missing.yaml")).unwrap_err();

        assert!(err.downcast_ref::<IoError>().unwrap().is_file_not_found());
    }

    /// タイムアウト0は不正
    #[test]
    fn test_load_invalid_timeout() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".header-snippet.yaml");
        fs::write(&config_path, "timeout: 0\n").unwrap();

        let result = Config::from_file(&config_path);

        assert!(result.is_err());
    }

    /// YAMLとして不正な設定ファイル
    #[test]
    fn test_load_malformed_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".header-snippet.yaml");
        fs::write(&config_path, "timeout: [not a number\n").unwrap();

        assert!(Config::from_file(&config_path).is_err());
    }
}
