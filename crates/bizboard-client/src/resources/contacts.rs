use bizboard_core::models::Contact;

use crate::resource::Resource;

impl Resource for Contact {
    const PATH: &'static str = "contacts";
    const NAME: &'static str = "contact";
    type Input = Contact;
}
