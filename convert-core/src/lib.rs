//! 实体与 DTO 转换契约库（convert-core）
//!
//! 为分层应用提供统一的实体（Entity）与数据传输对象（DTO）双向转换抽象：
//! - 无副作用的同步契约（`converter`）：单项转换、就地更新与批量辅助方法
//! - 可失败契约（`try_converter`）：以 `Result` 表达实现自定义的转换失败
//! - 异步契约（`async_converter`）：映射过程需要访问异步资源时使用
//! - 统一错误类型（`error`）与 DTO 标记（`dto`）
//!
//! 本 crate 不持有任何状态，也不关心具体字段如何映射；
//! 实体与 DTO 对契约而言都是不透明类型，映射逻辑完全由各实现提供。
//! 批量辅助方法统一遵循「缺失集合视为空结果、保持元素顺序、单项失败即整体失败」的约定。
//!
//! 典型用法：
//! 1. 为某一实体/DTO 对实现 [`Converter`]（或可失败的 [`TryConverter`]）；
//! 2. 在服务层通过批量辅助方法转换集合，缺失集合以 `None` 传入；
//! 3. 需要组合或反向使用时，借助 `invert` / `then` 组合子复用既有实现。
//!
pub mod async_converter;
pub mod converter;
pub mod dto;
pub mod error;
pub mod try_converter;

pub use async_converter::AsyncConverter;
pub use converter::{Chained, Converter, FnConverter, Inverted};
pub use dto::Dto;
pub use error::{ConvertError, ConvertResult};
pub use try_converter::TryConverter;
