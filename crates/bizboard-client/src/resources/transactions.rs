use bizboard_core::models::Transaction;

use crate::resource::Resource;

impl Resource for Transaction {
    const PATH: &'static str = "transactions";
    const NAME: &'static str = "transaction";
    type Input = Transaction;
}
