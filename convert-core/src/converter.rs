//! 实体与 DTO 双向转换契约
//!
//! 所有转换器的统一接口：实体转 DTO、DTO 转实体、按 DTO 更新既有实体，
//! 以及基于单项转换派生的批量辅助方法。契约本身无状态，
//! 字段如何映射完全由各实现决定。
//!
use std::marker::PhantomData;

/// 实体（E）与 DTO（D）之间的双向转换契约
///
/// - 单项转换以借用方式读取输入，不获取所有权；
/// - `update_entity` 按值接收实体并返回更新结果，实现可就地修改后返回原实例，
///   也可以构造新实例，调用方以返回值为准；
/// - 批量辅助方法把缺失集合（`None`）视为空结果，并保持输入的迭代顺序。
///
/// # 示例
///
/// ```
/// use convert_core::Converter;
///
/// struct User { id: u32, name: String }
///
/// #[derive(Debug, PartialEq)]
/// struct UserDto { id: u32, name: String }
///
/// struct UserConverter;
///
/// impl Converter<User, UserDto> for UserConverter {
///     fn to_dto(&self, entity: &User) -> UserDto {
///         UserDto { id: entity.id, name: entity.name.clone() }
///     }
///
///     fn to_entity(&self, dto: &UserDto) -> User {
///         User { id: dto.id, name: dto.name.clone() }
///     }
///
///     fn update_entity(&self, mut entity: User, dto: &UserDto) -> User {
///         entity.name = dto.name.clone();
///         entity
///     }
/// }
///
/// let users = vec![
///     User { id: 1, name: "alice".to_string() },
///     User { id: 2, name: "bob".to_string() },
/// ];
///
/// let dtos = UserConverter.to_dto_list(Some(&users));
/// assert_eq!(dtos.len(), 2);
/// assert_eq!(dtos[0], UserDto { id: 1, name: "alice".to_string() });
///
/// // 缺失集合不报错，返回空结果
/// assert!(UserConverter.to_dto_list(None::<&Vec<User>>).is_empty());
/// ```
pub trait Converter<E, D> {
    /// 将实体转换为 DTO
    fn to_dto(&self, entity: &E) -> D;

    /// 将 DTO 转换为实体
    ///
    /// 与 [`to_dto`](Converter::to_dto) 方向相反，但不保证互为严格逆函数。
    fn to_entity(&self, dto: &D) -> E;

    /// 用 DTO 中的数据更新既有实体，返回更新后的实体
    ///
    /// 就地修改还是构造新实例由实现决定，调用方以返回值为准。
    fn update_entity(&self, entity: E, dto: &D) -> E;

    /// 将实体集合逐项转换为 DTO 列表
    ///
    /// `None` 视为空集合返回空列表；输出顺序与输入迭代顺序一致。
    fn to_dto_list<'a, I>(&self, entities: Option<I>) -> Vec<D>
    where
        Self: Sized,
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        match entities {
            None => Vec::new(),
            Some(entities) => entities.into_iter().map(|e| self.to_dto(e)).collect(),
        }
    }

    /// 将 DTO 集合逐项转换为实体列表
    ///
    /// 空值与顺序约定同 [`to_dto_list`](Converter::to_dto_list)。
    fn to_entity_list<'a, I>(&self, dtos: Option<I>) -> Vec<E>
    where
        Self: Sized,
        I: IntoIterator<Item = &'a D>,
        D: 'a,
    {
        match dtos {
            None => Vec::new(),
            Some(dtos) => dtos.into_iter().map(|d| self.to_entity(d)).collect(),
        }
    }

    /// 调换实体与 DTO 的角色，得到 `D` ↔ `E` 方向的转换器
    fn invert(self) -> Inverted<Self>
    where
        Self: Sized,
    {
        Inverted { inner: self }
    }

    /// 与另一转换器串联：`E` ↔ `D` 接 `D` ↔ `F`，得到 `E` ↔ `F`
    ///
    /// 两个方向都会经过中间表示 `D`。
    fn then<F, C>(self, next: C) -> Chained<Self, C, D>
    where
        Self: Sized,
        C: Converter<D, F>,
    {
        Chained {
            first: self,
            second: next,
            _mid: PhantomData,
        }
    }
}

/// 为 `Box<dyn Converter<E, D>>` 转发契约实现，便于以装箱形式持有转换器
impl<E, D> Converter<E, D> for Box<dyn Converter<E, D>> {
    fn to_dto(&self, entity: &E) -> D {
        self.as_ref().to_dto(entity)
    }

    fn to_entity(&self, dto: &D) -> E {
        self.as_ref().to_entity(dto)
    }

    fn update_entity(&self, entity: E, dto: &D) -> E {
        self.as_ref().update_entity(entity, dto)
    }
}

/// 方向反转适配器
///
/// 由 [`Converter::invert`] 产生：内部 `E` ↔ `D` 的转换器对外表现为 `D` ↔ `E`。
pub struct Inverted<C> {
    inner: C,
}

impl<C> Inverted<C> {
    /// 取回内部转换器
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<E, D, C> Converter<D, E> for Inverted<C>
where
    C: Converter<E, D>,
{
    fn to_dto(&self, entity: &D) -> E {
        self.inner.to_entity(entity)
    }

    fn to_entity(&self, dto: &E) -> D {
        self.inner.to_dto(dto)
    }

    // 方向反转后「按 DTO 更新」没有可派生的合并语义，退化为重新转换
    fn update_entity(&self, _entity: D, dto: &E) -> D {
        self.inner.to_dto(dto)
    }
}

/// 串联适配器
///
/// 由 [`Converter::then`] 产生：两段转换共用中间表示 `M`。
pub struct Chained<C1, C2, M> {
    first: C1,
    second: C2,
    _mid: PhantomData<fn() -> M>,
}

impl<E, M, F, C1, C2> Converter<E, F> for Chained<C1, C2, M>
where
    C1: Converter<E, M>,
    C2: Converter<M, F>,
{
    fn to_dto(&self, entity: &E) -> F {
        self.second.to_dto(&self.first.to_dto(entity))
    }

    fn to_entity(&self, dto: &F) -> E {
        self.first.to_entity(&self.second.to_entity(dto))
    }

    fn update_entity(&self, entity: E, dto: &F) -> E {
        let mid = self.second.to_entity(dto);
        self.first.update_entity(entity, &mid)
    }
}

/// 闭包转换器：用一对闭包构造一次性的 [`Converter`] 实现
///
/// 适合测试或无需具名类型的简单映射；
/// `update_entity` 固定为「按 DTO 重新转换」，需要真正合并语义时应编写具名实现。
pub struct FnConverter<F, G> {
    to_dto: F,
    to_entity: G,
}

impl<F, G> FnConverter<F, G> {
    pub fn new(to_dto: F, to_entity: G) -> Self {
        Self { to_dto, to_entity }
    }
}

impl<E, D, F, G> Converter<E, D> for FnConverter<F, G>
where
    F: Fn(&E) -> D,
    G: Fn(&D) -> E,
{
    fn to_dto(&self, entity: &E) -> D {
        (self.to_dto)(entity)
    }

    fn to_entity(&self, dto: &D) -> E {
        (self.to_entity)(dto)
    }

    fn update_entity(&self, _entity: E, dto: &D) -> E {
        (self.to_entity)(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        label: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct ItemDto {
        id: u32,
        label: String,
    }

    struct ItemConverter;

    impl Converter<Item, ItemDto> for ItemConverter {
        fn to_dto(&self, entity: &Item) -> ItemDto {
            ItemDto {
                id: entity.id,
                label: entity.label.clone(),
            }
        }

        fn to_entity(&self, dto: &ItemDto) -> Item {
            Item {
                id: dto.id,
                label: dto.label.clone(),
            }
        }

        fn update_entity(&self, mut entity: Item, dto: &ItemDto) -> Item {
            entity.label = dto.label.clone();
            entity
        }
    }

    fn item(id: u32, label: &str) -> Item {
        Item {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_to_dto_list_none_is_empty() {
        let dtos = ItemConverter.to_dto_list(None::<&Vec<Item>>);
        assert!(dtos.is_empty());

        let entities = ItemConverter.to_entity_list(None::<&Vec<ItemDto>>);
        assert!(entities.is_empty());
    }

    #[test]
    fn test_to_dto_list_empty_collection() {
        let items: Vec<Item> = Vec::new();
        assert!(ItemConverter.to_dto_list(Some(&items)).is_empty());
    }

    #[test]
    fn test_to_dto_list_preserves_order_and_length() {
        let items = vec![item(1, "a"), item(2, "b"), item(3, "c")];
        let dtos = ItemConverter.to_dto_list(Some(&items));

        assert_eq!(dtos.len(), items.len());
        for (i, dto) in dtos.iter().enumerate() {
            assert_eq!(*dto, ItemConverter.to_dto(&items[i]));
        }
        assert_eq!(dtos[0].id, 1);
        assert_eq!(dtos[2].id, 3);
    }

    #[test]
    fn test_to_entity_list_round_trip() {
        let items = vec![item(7, "x"), item(8, "y")];
        let dtos = ItemConverter.to_dto_list(Some(&items));
        let back = ItemConverter.to_entity_list(Some(&dtos));
        assert_eq!(back, items);
    }

    #[test]
    fn test_update_entity_applies_dto_values() {
        let entity = item(5, "old");
        let dto = ItemDto {
            id: 5,
            label: "new".to_string(),
        };

        let updated = ItemConverter.update_entity(entity, &dto);
        assert_eq!(updated.id, 5);
        assert_eq!(updated.label, "new");
    }

    #[test]
    fn test_inverted_swaps_directions() {
        let inverted = ItemConverter.invert();

        let dto = ItemDto {
            id: 9,
            label: "z".to_string(),
        };
        let entity = inverted.to_dto(&dto);
        assert_eq!(entity, item(9, "z"));

        let dtos = vec![dto.clone()];
        let entities = inverted.to_dto_list(Some(&dtos));
        assert_eq!(entities, vec![item(9, "z")]);

        // 反向更新退化为重新转换
        let stale = ItemDto {
            id: 1,
            label: "stale".to_string(),
        };
        let refreshed = inverted.update_entity(stale, &item(9, "z"));
        assert_eq!(refreshed, dto);
    }

    #[derive(Debug, Clone, PartialEq)]
    struct WireDto {
        body: String,
    }

    struct WireConverter;

    impl Converter<ItemDto, WireDto> for WireConverter {
        fn to_dto(&self, entity: &ItemDto) -> WireDto {
            WireDto {
                body: format!("{}:{}", entity.id, entity.label),
            }
        }

        fn to_entity(&self, dto: &WireDto) -> ItemDto {
            let (id, label) = dto.body.split_once(':').unwrap_or(("0", ""));
            ItemDto {
                id: id.parse().unwrap_or(0),
                label: label.to_string(),
            }
        }

        fn update_entity(&self, _entity: ItemDto, dto: &WireDto) -> ItemDto {
            self.to_entity(dto)
        }
    }

    #[test]
    fn test_chained_goes_through_middle_type() {
        let chained = ItemConverter.then::<WireDto, _>(WireConverter);

        let wire = chained.to_dto(&item(3, "c"));
        assert_eq!(wire.body, "3:c");

        let back = chained.to_entity(&wire);
        assert_eq!(back, item(3, "c"));

        let updated = chained.update_entity(
            item(3, "old"),
            &WireDto {
                body: "3:fresh".to_string(),
            },
        );
        assert_eq!(updated, item(3, "fresh"));
    }

    #[test]
    fn test_fn_converter_delegates_to_closures() {
        let conv = FnConverter::new(
            |e: &Item| ItemDto {
                id: e.id,
                label: e.label.clone(),
            },
            |d: &ItemDto| Item {
                id: d.id,
                label: d.label.clone(),
            },
        );

        let dto = conv.to_dto(&item(4, "d"));
        assert_eq!(dto.id, 4);

        let replaced = conv.update_entity(item(4, "old"), &dto);
        assert_eq!(replaced.label, "d");
    }

    #[test]
    fn test_boxed_converter_forwards() {
        let boxed: Box<dyn Converter<Item, ItemDto>> = Box::new(ItemConverter);
        let dtos = boxed.to_dto_list(Some(&vec![item(1, "a"), item(2, "b")]));
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[1].label, "b");
    }
}
