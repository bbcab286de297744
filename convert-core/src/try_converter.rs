//! 可失败的转换契约
//!
//! 当映射本身可能失败（字段解析、取值校验等）时使用：
//! 单项转换返回 `Result`，错误类型由实现指定；
//! 批量辅助方法保持与无错契约相同的空值与顺序约定，
//! 任一元素失败即整体失败，不做跳过或错误累积。
//!
use std::convert::Infallible;

use crate::converter::Converter;

/// 实体（E）与 DTO（D）之间可失败的双向转换契约
///
/// - `Error` 由实现自定，[`ConvertError`](crate::error::ConvertError) 为现成的默认选择；
/// - 批量辅助方法在第一个失败处短路返回，之前已转换的元素随调用一并丢弃。
pub trait TryConverter<E, D> {
    /// 转换失败时的错误类型
    type Error;

    /// 将实体转换为 DTO
    fn try_to_dto(&self, entity: &E) -> Result<D, Self::Error>;

    /// 将 DTO 转换为实体
    fn try_to_entity(&self, dto: &D) -> Result<E, Self::Error>;

    /// 用 DTO 中的数据更新既有实体，返回更新后的实体
    ///
    /// 就地修改还是构造新实例由实现决定，调用方以返回值为准。
    fn try_update_entity(&self, entity: E, dto: &D) -> Result<E, Self::Error>;

    /// 将实体集合逐项转换为 DTO 列表
    ///
    /// `None` 视为空集合返回 `Ok` 空列表；任一元素失败则整体返回该错误。
    fn try_to_dto_list<'a, I>(&self, entities: Option<I>) -> Result<Vec<D>, Self::Error>
    where
        Self: Sized,
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        match entities {
            None => Ok(Vec::new()),
            Some(entities) => entities.into_iter().map(|e| self.try_to_dto(e)).collect(),
        }
    }

    /// 将 DTO 集合逐项转换为实体列表
    ///
    /// 空值、顺序与失败约定同 [`try_to_dto_list`](TryConverter::try_to_dto_list)。
    fn try_to_entity_list<'a, I>(&self, dtos: Option<I>) -> Result<Vec<E>, Self::Error>
    where
        Self: Sized,
        I: IntoIterator<Item = &'a D>,
        D: 'a,
    {
        match dtos {
            None => Ok(Vec::new()),
            Some(dtos) => dtos.into_iter().map(|d| self.try_to_entity(d)).collect(),
        }
    }
}

/// 任何无错转换器天然是错误类型为 [`Infallible`] 的可失败转换器
///
/// 与标准库 `From`/`TryFrom` 的关系一致，调用方可统一面向 `TryConverter` 编程。
impl<E, D, C> TryConverter<E, D> for C
where
    C: Converter<E, D>,
{
    type Error = Infallible;

    fn try_to_dto(&self, entity: &E) -> Result<D, Self::Error> {
        Ok(self.to_dto(entity))
    }

    fn try_to_entity(&self, dto: &D) -> Result<E, Self::Error> {
        Ok(self.to_entity(dto))
    }

    fn try_update_entity(&self, entity: E, dto: &D) -> Result<E, Self::Error> {
        Ok(self.update_entity(entity, dto))
    }
}
