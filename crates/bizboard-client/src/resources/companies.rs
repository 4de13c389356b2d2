use bizboard_core::models::{Company, Contact};
use bizboard_core::{ListQuery, RecordId, Result};

use crate::resource::{Resource, ResourceClient};

impl Resource for Company {
    const PATH: &'static str = "companies";
    const NAME: &'static str = "company";
    type Input = Company;
}

impl ResourceClient<'_, Company> {
    /// Contacts belonging to a company (`GET companies/{id}/contacts`).
    pub async fn contacts(
        &self,
        company_id: impl Into<RecordId>,
        query: &ListQuery,
    ) -> Result<Vec<Contact>> {
        let id = company_id.into();
        self.list_at(&[Company::PATH, id.as_str(), Contact::PATH], query)
            .await
    }
}
