use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::brand::{
    Brand as DomainBrand, NewBrand as DomainNewBrand, UpdateBrand as DomainUpdateBrand,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::brands)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::brands)]
pub struct NewBrand<'a> {
    pub name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::brands)]
pub struct UpdateBrand<'a> {
    pub name: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Brand> for DomainBrand {
    fn from(value: Brand) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewBrand> for NewBrand<'a> {
    fn from(value: &'a DomainNewBrand) -> Self {
        Self {
            name: value.name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateBrand> for UpdateBrand<'a> {
    fn from(value: &'a DomainUpdateBrand) -> Self {
        Self {
            name: value.name.as_str(),
            updated_at: value.updated_at,
        }
    }
}
