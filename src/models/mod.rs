//! Data models for Libris

pub mod account;
pub mod book;
pub mod loan;
pub mod member;

// Re-export commonly used types
pub use account::Account;
pub use book::{Book, BookDetail, BookShort};
pub use loan::{Loan, LoanDetails, LoanStatus};
pub use member::{Member, MemberShort};
