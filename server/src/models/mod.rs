pub mod event;
pub mod quote;
pub mod ticket;

pub use event::{Event, EventStatus, Location, Organizer, Pricing};
pub use quote::PricingQuote;
pub use ticket::TicketTier;
