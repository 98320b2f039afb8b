use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ride")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub start_location: String,
    #[sea_orm(column_type = "Text")]
    pub end_location: String,
    pub driver_id: i32,
    pub available_seats: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::driver::Entity",
        from = "Column::DriverId",
        to = "super::driver::Column::Id"
    )]
    Driver,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Driver.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_bookable(&self) -> bool {
        self.available_seats >= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride_with_seats(available_seats: i32) -> Model {
        Model {
            id: 1,
            start_location: "Harbour".to_string(),
            end_location: "Airport".to_string(),
            driver_id: 1,
            available_seats,
            price: Decimal::new(1250, 2),
        }
    }

    #[test]
    fn test_full_ride_is_not_bookable() {
        assert!(!ride_with_seats(0).is_bookable());
        assert!(!ride_with_seats(-1).is_bookable());
    }

    #[test]
    fn test_ride_with_one_seat_is_bookable() {
        assert!(ride_with_seats(1).is_bookable());
        assert!(ride_with_seats(4).is_bookable());
    }
}
