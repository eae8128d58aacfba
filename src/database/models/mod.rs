pub mod favorite;
pub mod post;
pub mod profile;
pub mod spot;
pub mod user;

pub use favorite::{Favorite, FavoriteSpot};
pub use post::{Post, PostWithAuthor};
pub use profile::{ProfileView, UserProfile};
pub use spot::SkateSpot;
pub use user::{PublicUserView, User, UserSummary};
