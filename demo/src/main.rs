//! 演示：围绕一个用户档案场景使用转换契约
//!
//! - `ProfileConverter`：服务层内部的无错转换（实体 ↔ 展示 DTO）
//! - `SignupConverter`：边界侧的可失败转换（原始表单 → 实体），解析失败即整体失败
//!
use chrono::{DateTime, Utc};
use convert_core::error::{ConvertError, ConvertResult};
use convert_core::{Converter, Dto, TryConverter};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct User {
    id: Uuid,
    email: String,
    display_name: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
struct UserDto {
    id: Uuid,
    email: String,
    display_name: String,
    created_at: DateTime<Utc>,
}

impl Dto for UserDto {}

struct ProfileConverter;

impl Converter<User, UserDto> for ProfileConverter {
    fn to_dto(&self, entity: &User) -> UserDto {
        UserDto {
            id: entity.id,
            email: entity.email.clone(),
            display_name: entity.display_name.clone(),
            created_at: entity.created_at,
        }
    }

    fn to_entity(&self, dto: &UserDto) -> User {
        User {
            id: dto.id,
            email: dto.email.clone(),
            display_name: dto.display_name.clone(),
            created_at: dto.created_at,
        }
    }

    // 身份字段以实体为准，仅吸收可编辑字段
    fn update_entity(&self, mut entity: User, dto: &UserDto) -> User {
        entity.email = dto.email.clone();
        entity.display_name = dto.display_name.clone();
        entity
    }
}

/// 注册表单：来自边界的原始字符串，进入领域前需要解析与校验
#[derive(Debug, Clone)]
struct SignupForm {
    email: String,
    display_name: String,
}

struct SignupConverter;

impl TryConverter<User, SignupForm> for SignupConverter {
    type Error = ConvertError;

    fn try_to_dto(&self, entity: &User) -> ConvertResult<SignupForm> {
        Ok(SignupForm {
            email: entity.email.clone(),
            display_name: entity.display_name.clone(),
        })
    }

    fn try_to_entity(&self, form: &SignupForm) -> ConvertResult<User> {
        if !form.email.contains('@') {
            return Err(ConvertError::InvalidValue {
                field: "email",
                reason: format!("not an email address: {}", form.email),
            });
        }
        Ok(User {
            id: Uuid::new_v4(),
            email: form.email.clone(),
            display_name: form.display_name.clone(),
            created_at: Utc::now(),
        })
    }

    fn try_update_entity(&self, mut entity: User, form: &SignupForm) -> ConvertResult<User> {
        if !form.email.contains('@') {
            return Err(ConvertError::InvalidValue {
                field: "email",
                reason: format!("not an email address: {}", form.email),
            });
        }
        entity.email = form.email.clone();
        entity.display_name = form.display_name.clone();
        Ok(entity)
    }
}

fn main() -> ConvertResult<()> {
    // 边界：表单进入领域
    let forms = vec![
        SignupForm {
            email: "alice@example.com".to_string(),
            display_name: "Alice".to_string(),
        },
        SignupForm {
            email: "bob@example.com".to_string(),
            display_name: "Bob".to_string(),
        },
    ];
    let users = SignupConverter.try_to_entity_list(Some(&forms))?;
    println!("signed up: {} users", users.len());

    // 服务层：实体集合转换为展示 DTO，缺失集合视为空
    let dtos = ProfileConverter.to_dto_list(Some(&users));
    for dto in &dtos {
        println!("profile: {}", dto.to_json()?);
    }
    assert!(ProfileConverter.to_dto_list(None::<&Vec<User>>).is_empty());

    // 更新：以既有实体与新 DTO 合并
    let mut renamed = ProfileConverter.to_dto(&users[0]);
    renamed.display_name = "Alice L.".to_string();
    let updated = ProfileConverter.update_entity(users[0].clone(), &renamed);
    println!("renamed: {} -> {}", dtos[0].display_name, updated.display_name);

    // 失败的表单让整批转换失败
    let mixed = vec![
        forms[0].clone(),
        SignupForm {
            email: "not-an-email".to_string(),
            display_name: "Mallory".to_string(),
        },
    ];
    match SignupConverter.try_to_entity_list(Some(&mixed)) {
        Err(err) => println!("rejected batch: {err}"),
        Ok(_) => unreachable!("invalid email must fail the whole batch"),
    }

    Ok(())
}
