mod attendee_list;
mod icon_button;
mod table;

pub use attendee_list::AttendeeList;
pub use icon_button::IconButton;
pub use table::{Table, TableCell, TableHeader, TableRow};
