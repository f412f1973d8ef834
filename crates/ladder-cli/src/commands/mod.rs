//! Command implementations.

pub mod check;
pub mod list;
pub mod lookup;
pub mod show;

pub use self::check::execute_check;
pub use self::list::execute_list;
pub use self::lookup::execute_lookup;
pub use self::show::execute_show;
