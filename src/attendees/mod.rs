pub mod client;
pub mod models;
pub mod pagination;
pub mod state;

pub use client::{AttendeeClient, AttendeeError};
pub use models::{Attendee, AttendeePage, AttendeeQuery};
pub use pagination::{total_pages, PageNav, PAGE_SIZE};
pub use state::AttendeeListState;
