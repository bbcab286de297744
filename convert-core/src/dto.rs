//! DTO 标记
use serde::Serialize;

use crate::error::ConvertResult;

/// 数据传输对象（DTO）标记
///
/// - 标记面向接口/外部系统的序列化友好类型，与领域模型解耦；
/// - 由各 DTO 类型显式选择实现（空 impl），转换契约本身不作此约束，
///   实体与 DTO 对契约而言始终是不透明类型；
/// - 应保持只读特性与简洁结构，适配不同用例的返回需求。
pub trait Dto: Serialize + Send + Sync + 'static {
    /// 序列化为 JSON 字符串
    fn to_json(&self) -> ConvertResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct OrderDto {
        id: u32,
        total: i64,
    }

    impl Dto for OrderDto {}

    #[test]
    fn test_to_json() {
        let dto = OrderDto { id: 1, total: 250 };
        assert_eq!(dto.to_json().unwrap(), r#"{"id":1,"total":250}"#);
    }
}
