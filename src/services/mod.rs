pub mod account_service;
pub mod favorite_service;
pub mod post_service;
pub mod spot_service;

pub use account_service::{AccountService, NewAccount};
pub use favorite_service::FavoriteService;
pub use post_service::PostService;
pub use spot_service::{NewSpot, Region, SpotService};
