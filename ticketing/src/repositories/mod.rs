pub mod customer_repository;
pub mod event_repository;
pub mod stadium_repository;
pub mod ticket_repository;

pub use customer_repository::CustomerRepository;
pub use event_repository::EventRepository;
pub use stadium_repository::StadiumRepository;
pub use ticket_repository::{TicketRepository, DEFAULT_RECENT_DAYS};
