//! One module per backend resource.
//!
//! Each module binds a record type from [`bizboard_core::models`] to its
//! path and adds the resource's custom actions as inherent methods on
//! [`ResourceClient`].

mod api_keys;
mod calendar_events;
mod companies;
mod contacts;
mod employees;
mod expense_accounts;
mod invoices;
mod notifications;
mod opportunities;
mod projects;
mod quotes;
mod submissions;
mod tasks;
mod time_entries;
mod transactions;

use bizboard_core::models::{
    ApiKey, CalendarEvent, Company, Contact, Employee, ExpenseAccount, Invoice, Notification,
    Opportunity, Project, Quote, Submission, Task, TimeEntry, Transaction,
};

use crate::client::ApiClient;
use crate::resource::ResourceClient;

impl ApiClient {
    /// `/contacts`
    pub fn contacts(&self) -> ResourceClient<'_, Contact> {
        self.resource()
    }

    /// `/companies`
    pub fn companies(&self) -> ResourceClient<'_, Company> {
        self.resource()
    }

    /// `/opportunities`
    pub fn opportunities(&self) -> ResourceClient<'_, Opportunity> {
        self.resource()
    }

    /// `/quotes`
    pub fn quotes(&self) -> ResourceClient<'_, Quote> {
        self.resource()
    }

    /// `/submissions`
    pub fn submissions(&self) -> ResourceClient<'_, Submission> {
        self.resource()
    }

    /// `/invoices`
    pub fn invoices(&self) -> ResourceClient<'_, Invoice> {
        self.resource()
    }

    /// `/expense-accounts`
    pub fn expense_accounts(&self) -> ResourceClient<'_, ExpenseAccount> {
        self.resource()
    }

    /// `/projects`
    pub fn projects(&self) -> ResourceClient<'_, Project> {
        self.resource()
    }

    /// `/tasks`
    pub fn tasks(&self) -> ResourceClient<'_, Task> {
        self.resource()
    }

    /// `/employees`
    pub fn employees(&self) -> ResourceClient<'_, Employee> {
        self.resource()
    }

    /// `/time-entries`
    pub fn time_entries(&self) -> ResourceClient<'_, TimeEntry> {
        self.resource()
    }

    /// `/notifications`
    pub fn notifications(&self) -> ResourceClient<'_, Notification> {
        self.resource()
    }

    /// `/calendar-events`
    pub fn calendar_events(&self) -> ResourceClient<'_, CalendarEvent> {
        self.resource()
    }

    /// `/api-keys`
    pub fn api_keys(&self) -> ResourceClient<'_, ApiKey> {
        self.resource()
    }

    /// `/transactions`
    pub fn transactions(&self) -> ResourceClient<'_, Transaction> {
        self.resource()
    }
}
