//! 异步转换契约
//!
//! 映射过程需要访问异步资源（远端字典、读模型存储等）时的契约形态。
//! 批量辅助方法逐项顺序 await，空值、顺序与整体失败约定与同步契约一致。
//!
use async_trait::async_trait;

/// 实体（E）与 DTO（D）之间可失败的异步双向转换契约
#[async_trait]
pub trait AsyncConverter<E, D>: Send + Sync
where
    E: Send + Sync,
    D: Send + Sync,
{
    /// 转换失败时的错误类型
    type Error: Send;

    /// 将实体转换为 DTO
    async fn to_dto(&self, entity: &E) -> Result<D, Self::Error>;

    /// 将 DTO 转换为实体
    async fn to_entity(&self, dto: &D) -> Result<E, Self::Error>;

    /// 用 DTO 中的数据更新既有实体，返回更新后的实体
    async fn update_entity(&self, entity: E, dto: &D) -> Result<E, Self::Error>;

    /// 将实体集合逐项转换为 DTO 列表
    ///
    /// `None` 视为空集合返回 `Ok` 空列表；逐项顺序 await，
    /// 任一元素失败即整体失败，之前的结果随调用一并丢弃。
    async fn to_dto_list<'a, I>(&self, entities: Option<I>) -> Result<Vec<D>, Self::Error>
    where
        I: IntoIterator<Item = &'a E> + Send + 'a,
        I::IntoIter: Send,
        E: 'a,
    {
        let mut dtos = Vec::new();
        if let Some(entities) = entities {
            for entity in entities {
                dtos.push(self.to_dto(entity).await?);
            }
        }
        Ok(dtos)
    }

    /// 将 DTO 集合逐项转换为实体列表
    ///
    /// 约定同 [`to_dto_list`](AsyncConverter::to_dto_list)。
    async fn to_entity_list<'a, I>(&self, dtos: Option<I>) -> Result<Vec<E>, Self::Error>
    where
        I: IntoIterator<Item = &'a D> + Send + 'a,
        I::IntoIter: Send,
        D: 'a,
    {
        let mut entities = Vec::new();
        if let Some(dtos) = dtos {
            for dto in dtos {
                entities.push(self.to_entity(dto).await?);
            }
        }
        Ok(entities)
    }
}
