//! Typed mirrors of backend records.
//!
//! Every field is optional: the backend owns validation and the client only
//! reads what it is given. Status fields are enums with an `Unknown`
//! fallback so new backend values never break deserialization. Timestamps
//! are kept as the backend's strings and parsed at aggregation time.
//!
//! Because absent fields are skipped on serialization, each record type also
//! serves as a partial payload for `update`.

mod api_key;
mod calendar_event;
mod company;
mod contact;
mod employee;
mod expense_account;
mod invoice;
mod notification;
mod opportunity;
mod project;
mod quote;
mod submission;
mod task;
mod time_entry;
mod transaction;

pub use api_key::{ApiKey, ApiKeySecret, NewApiKey};
pub use calendar_event::CalendarEvent;
pub use company::Company;
pub use contact::Contact;
pub use employee::Employee;
pub use expense_account::{ExpenseAccount, ExpenseStatus};
pub use invoice::{Invoice, InvoiceStatus};
pub use notification::Notification;
pub use opportunity::{Opportunity, OpportunityStage};
pub use project::{Project, ProjectStatus};
pub use quote::{Quote, QuoteStatus};
pub use submission::{Submission, SubmissionStatus};
pub use task::{Task, TaskStatus};
pub use time_entry::TimeEntry;
pub use transaction::{Transaction, TransactionKind};

/// Implements `as_str` and `Display` for a status enum.
macro_rules! status_labels {
    ($ty:ty { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            /// Wire name of the status.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use status_labels;
