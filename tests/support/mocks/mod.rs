// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod store;
pub mod time;

// 時刻関連
pub use time::{DummyClock, TickingClock, fixed_now};

// セキュリティ関連
pub use security::StrictPasswordHasher;

// インメモリストア（リポジトリとクエリポートの両方）
pub use store::InMemoryStore;
