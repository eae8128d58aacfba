// Token acquisition endpoints

pub mod login;
pub mod register;

pub use login::login;
pub use register::register;
