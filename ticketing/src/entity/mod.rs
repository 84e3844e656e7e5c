//! Persistent records and their query constructors.
//!
//! Every constructor returns an unexecuted [`sea_orm::Select`]; nothing is
//! read until the caller runs it, so results can still be narrowed,
//! ordered or paginated. The repositories run them.

pub mod customer;
pub mod event;
pub mod stadium;
pub mod ticket;

mod lookup;

pub mod prelude {
    pub use super::customer::Entity as Customer;
    pub use super::event::Entity as Event;
    pub use super::stadium::Entity as Stadium;
    pub use super::ticket::Entity as Ticket;
}
