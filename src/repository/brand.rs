use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::brand::{
    Brand as DomainBrand, NewBrand as DomainNewBrand, UpdateBrand as DomainUpdateBrand,
};
use crate::models::brand::{Brand as DbBrand, NewBrand as DbNewBrand, UpdateBrand as DbUpdateBrand};
use crate::repository::{BrandReader, BrandWriter, DieselRepository};

impl BrandReader for DieselRepository {
    fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<DomainBrand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let brand = brands::table
            .filter(brands::id.eq(id))
            .first::<DbBrand>(&mut conn)
            .optional()?;

        Ok(brand.map(Into::into))
    }

    fn list_brands(&self) -> RepositoryResult<Vec<DomainBrand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let db_brands = brands::table
            .order(brands::id.asc())
            .load::<DbBrand>(&mut conn)?;

        Ok(db_brands.into_iter().map(DomainBrand::from).collect())
    }
}

impl BrandWriter for DieselRepository {
    fn create_brand(&self, new_brand: &DomainNewBrand) -> RepositoryResult<DomainBrand> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let insertable = DbNewBrand::from(new_brand);

        let created = diesel::insert_into(brands::table)
            .values(&insertable)
            .get_result::<DbBrand>(&mut conn)?;

        Ok(created.into())
    }

    fn update_brand(
        &self,
        brand_id: i32,
        updates: &DomainUpdateBrand,
    ) -> RepositoryResult<DomainBrand> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateBrand::from(updates);

        let updated = diesel::update(brands::table.filter(brands::id.eq(brand_id)))
            .set(&db_updates)
            .get_result::<DbBrand>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_brand(&self, brand_id: i32) -> RepositoryResult<()> {
        use crate::schema::{brands, prices};

        let mut conn = self.conn()?;
        let deleted = conn.transaction::<usize, RepositoryError, _>(|conn| {
            diesel::delete(prices::table.filter(prices::brand_id.eq(brand_id))).execute(conn)?;
            let deleted =
                diesel::delete(brands::table.filter(brands::id.eq(brand_id))).execute(conn)?;
            Ok(deleted)
        })?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
