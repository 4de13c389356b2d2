//! `bizboard list RESOURCE`.

use anyhow::{Result, bail};
use serde::Serialize;
use serde_json::Value;

use bizboard_client::{ApiClient, Resource};
use bizboard_core::ListQuery;
use bizboard_core::models::{
    ApiKey, CalendarEvent, Company, Contact, Employee, ExpenseAccount, Invoice, Notification,
    Opportunity, Project, Quote, Submission, Task, TimeEntry, Transaction,
};

/// Resource paths accepted by `list`.
pub const RESOURCES: [&str; 15] = [
    Contact::PATH,
    Company::PATH,
    Opportunity::PATH,
    Quote::PATH,
    Submission::PATH,
    Invoice::PATH,
    ExpenseAccount::PATH,
    Project::PATH,
    Task::PATH,
    Employee::PATH,
    TimeEntry::PATH,
    Notification::PATH,
    CalendarEvent::PATH,
    ApiKey::PATH,
    Transaction::PATH,
];

/// Build a query from the command-line options.
pub fn query(skip: u32, limit: u32, filters: &[String]) -> Result<ListQuery> {
    let mut query = ListQuery::new().page(skip, limit);
    for filter in filters {
        let Some((key, value)) = filter.split_once('=') else {
            bail!("Invalid filter '{filter}', expected KEY=VALUE");
        };
        if key.is_empty() {
            bail!("Invalid filter '{filter}', empty key");
        }
        query = query.filter(key, value);
    }
    Ok(query)
}

async fn fetch<R: Resource>(client: &ApiClient, query: &ListQuery) -> Result<Vec<Value>> {
    let records = client.resource::<R>().list(query).await?;
    to_values(&records)
}

fn to_values<T: Serialize>(records: &[T]) -> Result<Vec<Value>> {
    Ok(records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<_, _>>()?)
}

/// Fetch one page of `resource` as JSON values.
pub async fn records(client: &ApiClient, resource: &str, query: &ListQuery) -> Result<Vec<Value>> {
    match resource {
        Contact::PATH => fetch::<Contact>(client, query).await,
        Company::PATH => fetch::<Company>(client, query).await,
        Opportunity::PATH => fetch::<Opportunity>(client, query).await,
        Quote::PATH => fetch::<Quote>(client, query).await,
        Submission::PATH => fetch::<Submission>(client, query).await,
        Invoice::PATH => fetch::<Invoice>(client, query).await,
        ExpenseAccount::PATH => fetch::<ExpenseAccount>(client, query).await,
        Project::PATH => fetch::<Project>(client, query).await,
        Task::PATH => fetch::<Task>(client, query).await,
        Employee::PATH => fetch::<Employee>(client, query).await,
        TimeEntry::PATH => fetch::<TimeEntry>(client, query).await,
        Notification::PATH => fetch::<Notification>(client, query).await,
        CalendarEvent::PATH => fetch::<CalendarEvent>(client, query).await,
        ApiKey::PATH => fetch::<ApiKey>(client, query).await,
        Transaction::PATH => fetch::<Transaction>(client, query).await,
        other => bail!("Unknown resource '{other}'. Available: {}", RESOURCES.join(", ")),
    }
}

pub async fn run(client: &ApiClient, resource: &str, query: &ListQuery) -> Result<()> {
    let records = records(client, resource, query).await?;
    tracing::debug!(resource, count = records.len(), "Listed records");
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
