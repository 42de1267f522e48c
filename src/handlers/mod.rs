pub mod health;
pub mod list;
pub mod add;
pub mod delete;
pub mod set_state;
pub mod options;

pub use health::health_handler;
pub use list::list_handler;
pub use add::add_handler;
pub use delete::delete_handler;
pub use set_state::set_state_handler;
pub use options::options_handler;
