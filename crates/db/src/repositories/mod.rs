//! Repository layer: one zero-sized struct per table, each method taking the pool.

pub mod dish_repo;
pub mod reservation_repo;
pub mod restaurant_repo;

pub use dish_repo::DishRepo;
pub use reservation_repo::ReservationRepo;
pub use restaurant_repo::RestaurantRepo;
