//! search モジュールのテスト
