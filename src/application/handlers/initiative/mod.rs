//! Initiative command and query handlers.

mod create_initiative;
mod delete_initiative;
mod get_initiative;
mod list_initiatives;
mod update_initiative;

pub use create_initiative::{CreateInitiativeCommand, CreateInitiativeHandler};
pub use delete_initiative::{DeleteInitiativeCommand, DeleteInitiativeHandler};
pub use get_initiative::{GetInitiativeHandler, GetInitiativeQuery};
pub use list_initiatives::{ListInitiativesHandler, ListInitiativesQuery};
pub use update_initiative::{UpdateInitiativeCommand, UpdateInitiativeHandler};
