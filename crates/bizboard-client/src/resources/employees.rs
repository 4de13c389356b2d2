use bizboard_core::models::Employee;

use crate::resource::{Resource, UpdateMethod};

impl Resource for Employee {
    const PATH: &'static str = "employees";
    const NAME: &'static str = "employee";
    const UPDATE_METHOD: UpdateMethod = UpdateMethod::Patch;
    type Input = Employee;
}
