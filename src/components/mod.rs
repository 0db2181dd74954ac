pub mod footer;
pub mod header;
pub mod outbound_link;
pub mod page_section;
