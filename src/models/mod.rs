pub mod acl_export;
pub mod address_book;

pub use acl_export::{AclEntry, AclExport, AddressField};
pub use address_book::{normalize_group_name, AddressBookRecord, ESA_MARKER};
