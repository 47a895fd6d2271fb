//! Product Cards CLI Library
//!
//! バイナリと統合テストから使うモジュール群。
//! パイプライン本体は product-cards-common 側にある。

pub mod cli;
pub mod error;
pub mod template;

pub use error::{ProductCardsError, Result};
