mod home;
pub use home::Home;

mod users;
pub use users::Users;

mod posts;
pub use posts::Posts;
