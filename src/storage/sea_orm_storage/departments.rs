//! 院系存储操作

use super::{SeaOrmStorage, save_error};
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::errors::{ContosoError, Result};
use crate::models::departments::entities::Department;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 按名称排序列出院系
    pub async fn list_departments_impl(&self) -> Result<Vec<Department>> {
        let departments = Departments::find()
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ContosoError::database_operation(format!("查询院系列表失败: {e}")))?;

        Ok(departments
            .into_iter()
            .map(|m| m.into_department())
            .collect())
    }

    /// 创建院系
    pub async fn create_department_impl(&self, name: &str) -> Result<Department> {
        let model = ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(save_error("创建院系失败"))?;

        Ok(result.into_department())
    }
}
