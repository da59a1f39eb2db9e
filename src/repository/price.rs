use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::price::{
    NewPriceRule as DomainNewPriceRule, PriceRule as DomainPriceRule,
    UpdatePriceRule as DomainUpdatePriceRule,
};
use crate::models::price::{
    NewPrice as DbNewPrice, Price as DbPrice, UpdatePrice as DbUpdatePrice,
};
use crate::repository::{DieselRepository, PriceReader, PriceRuleStore, PriceWriter};

impl PriceReader for DieselRepository {
    fn get_price_by_id(&self, id: i32) -> RepositoryResult<Option<DomainPriceRule>> {
        use crate::schema::prices;

        let mut conn = self.conn()?;
        let price = prices::table
            .filter(prices::id.eq(id))
            .first::<DbPrice>(&mut conn)
            .optional()?;

        Ok(price.map(Into::into))
    }

    fn list_prices(&self) -> RepositoryResult<Vec<DomainPriceRule>> {
        use crate::schema::prices;

        let mut conn = self.conn()?;
        let db_prices = prices::table
            .order(prices::id.asc())
            .load::<DbPrice>(&mut conn)?;

        Ok(db_prices.into_iter().map(DomainPriceRule::from).collect())
    }
}

impl PriceRuleStore for DieselRepository {
    fn candidates_for(
        &self,
        product_id: i32,
        brand_id: i32,
    ) -> RepositoryResult<Vec<DomainPriceRule>> {
        use crate::schema::prices;

        let mut conn = self.conn()?;
        let db_prices = prices::table
            .filter(prices::product_id.eq(product_id))
            .filter(prices::brand_id.eq(brand_id))
            .load::<DbPrice>(&mut conn)?;

        Ok(db_prices.into_iter().map(DomainPriceRule::from).collect())
    }
}

impl PriceWriter for DieselRepository {
    fn create_price(&self, new_price: &DomainNewPriceRule) -> RepositoryResult<DomainPriceRule> {
        use crate::schema::prices;

        let mut conn = self.conn()?;
        let insertable = DbNewPrice::from(new_price);

        let created = diesel::insert_into(prices::table)
            .values(&insertable)
            .get_result::<DbPrice>(&mut conn)?;

        Ok(created.into())
    }

    fn create_prices(&self, new_prices: &[DomainNewPriceRule]) -> RepositoryResult<usize> {
        use crate::schema::prices;

        let mut conn = self.conn()?;

        conn.transaction::<usize, RepositoryError, _>(|conn| {
            let mut count_inserted: usize = 0;

            for new_price in new_prices {
                let db_new = DbNewPrice::from(new_price);

                diesel::insert_into(prices::table)
                    .values(&db_new)
                    .execute(conn)?;
                count_inserted += 1;
            }

            Ok(count_inserted)
        })
    }

    fn update_price(
        &self,
        price_id: i32,
        updates: &DomainUpdatePriceRule,
    ) -> RepositoryResult<DomainPriceRule> {
        use crate::schema::prices;

        let mut conn = self.conn()?;
        let db_updates = DbUpdatePrice::from(updates);

        let updated = diesel::update(prices::table.filter(prices::id.eq(price_id)))
            .set(&db_updates)
            .get_result::<DbPrice>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_price(&self, price_id: i32) -> RepositoryResult<()> {
        use crate::schema::prices;

        let mut conn = self.conn()?;
        let deleted =
            diesel::delete(prices::table.filter(prices::id.eq(price_id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
